//! Command dispatcher
//!
//! Routes CLI commands to their handlers. Owns the PluginCache for the run:
//! one cache per invocation, no global state.

use crate::cli::args::{Cli, Command};
use crate::commands;
use crate::error::Result;
use crate::npm::runner::SystemRunner;
use crate::repo::cache::PluginCache;
use std::sync::Arc;

/// Dispatch the parsed CLI command to the appropriate handler
pub fn dispatch(args: &Cli) -> Result<()> {
    let cache = PluginCache::new(
        Arc::new(SystemRunner),
        args.global.tool.clone(),
        args.global.label.clone(),
    );

    match &args.command {
        Command::List { format } => commands::list::run(commands::list::ListOptions {
            cache: &cache,
            format: format.clone(),
        }),

        Command::Show { name, format } => commands::show::run(commands::show::ShowOptions {
            cache: &cache,
            name: name.clone(),
            format: format.clone(),
        }),

        Command::Refresh => commands::refresh::run(commands::refresh::RefreshOptions {
            cache: &cache,
        }),

        Command::Registry => commands::registry::run(&cache),
    }
}
