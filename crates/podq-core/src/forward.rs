//! Argument forwarding for the custom handler
//!
//! Turns a resolved pod plus the raw forwarded argument list into either a
//! printable echo of the target (no arguments were forwarded at all) or the
//! final argument vector for kubectl.

use crate::resolver::ResolvedTarget;

/// Marker token replaced by the resolved pod name.
pub const POD_PLACEHOLDER: &str = "%%";

/// Outcome of argument forwarding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ForwardAction {
    /// Print this line and stop; nothing is executed.
    Echo(String),
    /// Hand this argument vector to kubectl.
    Exec(Vec<String>),
}

/// Build the forwarding action for a resolved target.
///
/// `None` means no arguments followed the separator, which echoes the
/// target instead of executing anything. Otherwise the namespace flag pair
/// leads the vector, the first `%%` token is replaced in place by the pod
/// name, and with no marker present the name goes at the end. The caller's
/// slice is left untouched.
pub fn build_forward_args(target: &ResolvedTarget, raw: Option<&[String]>) -> ForwardAction {
    let Some(raw) = raw else {
        return ForwardAction::Echo(format!("{} -n {}", target.name(), target.namespace()));
    };

    let mut args = Vec::with_capacity(raw.len() + 3);
    args.push("-n".to_string());
    args.push(target.namespace().to_string());

    let mut replaced = false;
    for arg in raw {
        if !replaced && arg == POD_PLACEHOLDER {
            args.push(target.name().to_string());
            replaced = true;
        } else {
            args.push(arg.clone());
        }
    }

    if !replaced {
        args.push(target.name().to_string());
    }

    ForwardAction::Exec(args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use podq_provider::PodRef;

    fn target() -> ResolvedTarget {
        ResolvedTarget::new(PodRef::new("api-7d4b9", "prod"))
    }

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_absent_args_echo_target() {
        assert_eq!(
            build_forward_args(&target(), None),
            ForwardAction::Echo("api-7d4b9 -n prod".to_string())
        );
    }

    #[test]
    fn test_empty_args_yield_namespace_and_name() {
        assert_eq!(
            build_forward_args(&target(), Some(&[][..])),
            ForwardAction::Exec(strings(&["-n", "prod", "api-7d4b9"]))
        );
    }

    #[test]
    fn test_no_marker_appends_name() {
        let raw = strings(&["logs", "-f"]);
        assert_eq!(
            build_forward_args(&target(), Some(raw.as_slice())),
            ForwardAction::Exec(strings(&["-n", "prod", "logs", "-f", "api-7d4b9"]))
        );
        // Caller's list is untouched
        assert_eq!(raw, strings(&["logs", "-f"]));
    }

    #[test]
    fn test_marker_replaced_in_place() {
        let raw = strings(&["exec", "%%", "--", "sh"]);
        assert_eq!(
            build_forward_args(&target(), Some(raw.as_slice())),
            ForwardAction::Exec(strings(&["-n", "prod", "exec", "api-7d4b9", "--", "sh"]))
        );
    }

    #[test]
    fn test_only_first_marker_replaced() {
        let raw = strings(&["cp", "%%", "%%"]);
        assert_eq!(
            build_forward_args(&target(), Some(raw.as_slice())),
            ForwardAction::Exec(strings(&["-n", "prod", "cp", "api-7d4b9", "%%"]))
        );
    }
}
