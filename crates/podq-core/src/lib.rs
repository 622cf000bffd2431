//! Core logic for podq
//!
//! This crate provides:
//! - Pod resolution from a regex query, with interactive disambiguation
//! - Argument forwarding with placeholder substitution for the custom handler
//! - The toggle-based multi-select engine
//! - Port-forward planning (container, ports, host ports)

mod error;
mod forward;
mod multi_select;
mod port_forward;
mod prompt;
mod resolver;

pub use error::*;
pub use forward::*;
pub use multi_select::*;
pub use port_forward::*;
pub use prompt::*;
pub use resolver::*;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
