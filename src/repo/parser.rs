//! Search output parsing
//!
//! Turns `<tool> search --json` output into the plugin map. The contract is
//! a JSON array of objects carrying at least name, description and version;
//! anything else is a malformed response for the fill boundary to absorb.

use crate::error::{PlugdexError, Result};
use crate::repo::cache::PluginMap;
use crate::repo::types::RepoPackage;
use serde::Deserialize;

#[derive(Deserialize)]
struct SearchEntry {
    name: String,
    description: String,
    version: String,
}

/// Parse search JSON into a map keyed by package name.
///
/// Every record gets `url = source_url`. Duplicate names keep the last
/// occurrence, matching map insertion semantics.
pub fn parse_search_output(json: &str, source_url: &str) -> Result<PluginMap> {
    let entries: Vec<SearchEntry> = serde_json::from_str(json)
        .map_err(|e| PlugdexError::MalformedResponse(e.to_string()))?;

    let mut map = PluginMap::with_capacity(entries.len());
    for entry in entries {
        map.insert(
            entry.name.clone(),
            RepoPackage {
                name: entry.name,
                url: source_url.to_string(),
                latest_version: entry.version,
                description: entry.description,
            },
        );
    }
    Ok(map)
}
