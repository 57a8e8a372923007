pub mod urls;

pub use urls::NPMJS_REGISTRY;

/// Package-manager executable invoked when `--tool` is not given.
pub const DEFAULT_TOOL: &str = "npm";

/// Ecosystem label searched when `--label` is not given.
pub const DEFAULT_LABEL: &str = "cordova";
