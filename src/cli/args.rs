use crate::constants::{DEFAULT_LABEL, DEFAULT_TOOL};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "plugdex",
    about = "Ecosystem plugin discovery cache",
    long_about = "Discovers plugins tagged with an ecosystem label via an npm-style package manager and serves them from a single-flight in-memory cache",
    version,
    next_line_help = false,
    term_width = 80
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalFlags,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Parser, Debug)]
pub struct GlobalFlags {
    /// Verbose output (shows absorbed tool failures)
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Quiet mode
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Package-manager executable to invoke
    #[arg(long, value_name = "NAME", default_value = DEFAULT_TOOL, global = true)]
    pub tool: String,

    /// Ecosystem label to search for
    #[arg(long, value_name = "LABEL", default_value = DEFAULT_LABEL, global = true)]
    pub label: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List every discoverable plugin
    List {
        /// Machine-readable output ("json")
        #[arg(long, value_name = "FORMAT")]
        format: Option<String>,
    },

    /// Show one plugin by name
    Show {
        /// Package name
        name: String,

        /// Machine-readable output ("json")
        #[arg(long, value_name = "FORMAT")]
        format: Option<String>,
    },

    /// Drop the cached plugin list and fetch a fresh one
    Refresh,

    /// Print the registry URL the package manager is configured with
    Registry,
}
