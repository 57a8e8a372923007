//! Process layer: locating and invoking the package-manager executable.

pub mod registry;
pub mod runner;

pub use registry::resolve_registry;
pub use runner::{CommandOutput, CommandRunner, SystemRunner};
