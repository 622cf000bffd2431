//! podq - query for a pod, then run kubectl against it

use std::path::PathBuf;

use clap::Parser;
use mimalloc::MiMalloc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use podq_cli::args::split_forwarded_args;
use podq_cli::commands;
use podq_cli::prompt::DialoguerPrompter;
use podq_cli::registry::{lookup, HandlerKind, DEFAULT_HANDLER};
use podq_core::resolve_pod;
use podq_provider::{KubectlClient, KubectlConfig, NamespaceScope};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

const EXAMPLES: &str = "Examples:
  # Follow logs of a pod matching the regex (custom is the default subcommand)
  podq -r my-pod -- logs -f

  # Place the pod name explicitly with the %% marker
  podq -r my-pod -- exec %% -- sh

  # Port forward to a pod matching the regex
  podq port-forward -r my-pod

  # Port forward, with an extra kubectl flag
  podq port-forward -r my-pod -- --address 0.0.0.0

  # Print the resolved pod (no arguments after --)
  podq -r my-pod";

#[derive(Parser)]
#[command(name = "podq")]
#[command(version, about = "Queries for a pod and executes the given kubectl command")]
#[command(after_help = EXAMPLES)]
struct Cli {
    /// Subcommand to run against the resolved pod
    #[arg(value_name = "SUBCOMMAND")]
    command: Option<String>,

    /// Regex to match pod names (unanchored; empty matches every pod)
    #[arg(short = 'r', long, default_value = "")]
    pod_regex: String,

    /// Query all namespaces
    #[arg(short = 'A', long)]
    all_namespaces: bool,

    /// Namespace to query (defaults to the current context's namespace)
    #[arg(short, long, conflicts_with = "all_namespaces")]
    namespace: Option<String>,

    /// kubeconfig context handed through to kubectl
    #[arg(long)]
    context: Option<String>,

    /// kubeconfig file handed through to kubectl
    #[arg(long)]
    kubeconfig: Option<PathBuf>,

    /// kubectl binary to invoke
    #[arg(long)]
    kubectl: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    // kubectl's arguments are carved off before clap parses ours
    let (own_args, forwarded) = split_forwarded_args(std::env::args());
    let cli = Cli::parse_from(own_args);

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    // Unknown subcommands are rejected before anything touches the cluster
    let handler = match &cli.command {
        Some(name) => {
            lookup(name).ok_or_else(|| anyhow::anyhow!("Invalid subcommand '{}'", name))?
        }
        None => DEFAULT_HANDLER,
    };

    let client = KubectlClient::new(KubectlConfig {
        kubectl: cli.kubectl,
        context: cli.context,
        kubeconfig: cli.kubeconfig,
    });

    let scope = if cli.all_namespaces {
        NamespaceScope::All
    } else {
        match cli.namespace {
            Some(namespace) => NamespaceScope::Named(namespace),
            None => NamespaceScope::Named(client.current_namespace().await?),
        }
    };

    let prompter = DialoguerPrompter;
    let target = resolve_pod(&client, &prompter, &scope, &cli.pod_regex).await?;

    match handler {
        HandlerKind::Custom => {
            commands::custom(&client, &target, forwarded.as_deref()).await?;
        }
        HandlerKind::PortForward => {
            commands::port_forward(&client, &client, &prompter, &target, forwarded.as_deref())
                .await?;
        }
    }

    Ok(())
}
