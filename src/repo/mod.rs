//! Plugin repository domain: record types, search-output parsing, the
//! single-flight cache, and display adapters.

pub mod cache;
pub mod parser;
pub mod types;
pub mod wrappers;

pub use cache::{Fill, FillFailure, PluginCache, PluginMap};
pub use types::{InstalledPackage, RepoPackage};
pub use wrappers::{wrap_installed, wrap_repo};
