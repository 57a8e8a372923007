//! Plugin list command
//!
//! Fills the cache (first run of the process) and prints every plugin
//! carrying the ecosystem label.

use crate::error::Result;
use crate::repo::cache::PluginCache;
use crate::ui as output;
use colored::Colorize;

pub struct ListOptions<'a> {
    pub cache: &'a PluginCache,
    pub format: Option<String>,
}

pub fn run(options: ListOptions<'_>) -> Result<()> {
    let packages = options.cache.list();

    if matches!(options.format.as_deref(), Some("json")) {
        println!("{}", serde_json::to_string_pretty(&packages)?);
        return Ok(());
    }

    if packages.is_empty() {
        if let Some(fill) = options.cache.last_fill()
            && let Some(reason) = fill.degraded
        {
            output::warning(&format!("Plugin list unavailable: {}", reason));
            return Ok(());
        }
        output::info("No plugins found");
        return Ok(());
    }

    output::header(&format!("{} plugins", packages.len()));
    for package in &packages {
        println!(
            "{} {} {}",
            package.name.bold(),
            package.latest_version.green(),
            package.description.bright_black()
        );
    }

    Ok(())
}
