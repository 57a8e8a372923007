//! Registry URL command

use crate::error::Result;
use crate::repo::cache::PluginCache;

pub fn run(cache: &PluginCache) -> Result<()> {
    println!("{}", cache.registry_url());
    Ok(())
}
