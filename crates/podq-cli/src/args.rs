//! Forwarded-argument splitting
//!
//! Everything after the first `--` on the command line belongs to kubectl,
//! not to podq, and is carved off before clap sees the argument list. The
//! handlers distinguish "no separator" from "separator with nothing after
//! it": the former echoes the resolved pod, the latter executes.

/// Split argv at the first `--`.
///
/// Returns podq's own arguments and the forwarded list: `None` when no
/// separator was present, `Some` (possibly empty) otherwise.
pub fn split_forwarded_args<I>(argv: I) -> (Vec<String>, Option<Vec<String>>)
where
    I: IntoIterator<Item = String>,
{
    let mut own = Vec::new();
    let mut iter = argv.into_iter();

    for arg in iter.by_ref() {
        if arg == "--" {
            return (own, Some(iter.collect()));
        }
        own.push(arg);
    }

    (own, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_separator_yields_absent() {
        let (own, forwarded) = split_forwarded_args(argv(&["podq", "-r", "api"]));
        assert_eq!(own, argv(&["podq", "-r", "api"]));
        assert_eq!(forwarded, None);
    }

    #[test]
    fn test_bare_separator_yields_present_but_empty() {
        let (own, forwarded) = split_forwarded_args(argv(&["podq", "-r", "api", "--"]));
        assert_eq!(own, argv(&["podq", "-r", "api"]));
        assert_eq!(forwarded, Some(Vec::new()));
    }

    #[test]
    fn test_arguments_after_separator_are_forwarded() {
        let (own, forwarded) =
            split_forwarded_args(argv(&["podq", "-r", "api", "--", "logs", "-f"]));
        assert_eq!(own, argv(&["podq", "-r", "api"]));
        assert_eq!(forwarded, Some(argv(&["logs", "-f"])));
    }

    #[test]
    fn test_only_first_separator_splits() {
        let (own, forwarded) =
            split_forwarded_args(argv(&["podq", "--", "exec", "%%", "--", "sh"]));
        assert_eq!(own, argv(&["podq"]));
        assert_eq!(forwarded, Some(argv(&["exec", "%%", "--", "sh"])));
    }
}
