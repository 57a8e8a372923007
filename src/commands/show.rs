//! Single-plugin lookup command

use crate::error::{PlugdexError, Result};
use crate::repo::cache::PluginCache;
use crate::ui as output;

pub struct ShowOptions<'a> {
    pub cache: &'a PluginCache,
    pub name: String,
    pub format: Option<String>,
}

pub fn run(options: ShowOptions<'_>) -> Result<()> {
    let Some(package) = options.cache.package(&options.name) else {
        return Err(PlugdexError::PackageNotFound(options.name));
    };

    if matches!(options.format.as_deref(), Some("json")) {
        println!("{}", serde_json::to_string_pretty(&package)?);
        return Ok(());
    }

    output::keyval("Name", &package.name);
    output::keyval("Version", &package.latest_version);
    output::keyval("Registry", &package.url);
    output::keyval("Description", &package.description);

    Ok(())
}
