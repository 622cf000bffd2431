//! Subcommand registry

/// Handlers a subcommand name can map to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerKind {
    /// Forward arguments to kubectl with placeholder substitution
    Custom,
    /// Interactive port-forward planning
    PortForward,
}

/// Handler used when no subcommand is given.
pub const DEFAULT_HANDLER: HandlerKind = HandlerKind::Custom;

/// The fixed name-to-handler table. Built once, never mutated.
pub const REGISTRY: &[(&str, HandlerKind)] = &[
    ("custom", HandlerKind::Custom),
    ("port-forward", HandlerKind::PortForward),
];

/// Look up a subcommand name in the registry.
pub fn lookup(name: &str) -> Option<HandlerKind> {
    REGISTRY
        .iter()
        .find(|(entry, _)| *entry == name)
        .map(|(_, kind)| *kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_names_resolve() {
        assert_eq!(lookup("custom"), Some(HandlerKind::Custom));
        assert_eq!(lookup("port-forward"), Some(HandlerKind::PortForward));
    }

    #[test]
    fn test_unknown_name_is_rejected() {
        assert_eq!(lookup("exec"), None);
        assert_eq!(lookup(""), None);
    }
}
