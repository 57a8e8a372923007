//! Cache refresh command
//!
//! Drops the cached plugin list and forces a fresh fill, then reports what
//! came back. This is the only way a degraded (empty) fill gets retried.

use crate::error::Result;
use crate::repo::cache::PluginCache;
use crate::ui as output;

pub struct RefreshOptions<'a> {
    pub cache: &'a PluginCache,
}

pub fn run(options: RefreshOptions<'_>) -> Result<()> {
    options.cache.invalidate();
    let packages = options.cache.all();

    match options.cache.last_fill().and_then(|fill| fill.degraded) {
        Some(reason) => output::warning(&format!("Refresh degraded: {}", reason)),
        None => output::success(&format!("Refreshed, {} plugins known", packages.len())),
    }

    Ok(())
}
