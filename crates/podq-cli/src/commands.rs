//! CLI command implementations

use anyhow::Result;
use tracing::debug;

use podq_core::{
    build_forward_args, forward_args, plan_port_forward, ForwardAction, Prompter, ResolvedTarget,
};
use podq_provider::{CommandRunner, PodInventory};

/// Forward arguments to kubectl against the resolved pod, or echo the pod
/// when nothing was forwarded.
pub async fn custom(
    runner: &dyn CommandRunner,
    target: &ResolvedTarget,
    raw: Option<&[String]>,
) -> Result<()> {
    match build_forward_args(target, raw) {
        ForwardAction::Echo(line) => {
            println!("{}", line);
            Ok(())
        }
        ForwardAction::Exec(args) => exec(runner, &args).await,
    }
}

/// Plan a port-forward interactively, then delegate to kubectl.
pub async fn port_forward(
    inventory: &dyn PodInventory,
    runner: &dyn CommandRunner,
    prompter: &dyn Prompter,
    target: &ResolvedTarget,
    raw: Option<&[String]>,
) -> Result<()> {
    let plan = plan_port_forward(inventory, prompter, target).await?;
    let args = forward_args(target, &plan, raw.unwrap_or(&[]));
    exec(runner, &args).await
}

/// Run the assembled vector; a non-zero kubectl exit becomes our exit.
async fn exec(runner: &dyn CommandRunner, args: &[String]) -> Result<()> {
    debug!("delegating to kubectl: {:?}", args);
    let exit_code = runner.run(args).await?;
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
    Ok(())
}
