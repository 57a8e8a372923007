//! Display adapters
//!
//! Stateless conversions from raw package-manager strings into records the
//! UI layer can show. No validation, no failure path.

use crate::repo::types::{InstalledPackage, RepoPackage};

/// Wrap raw "name version" lines into installed-package records.
///
/// Split on the first whitespace run; first token is the name, second (if
/// present) the version. A line with no tokens keeps the whole line as the
/// name with an empty version.
pub fn wrap_installed(lines: &[String]) -> Vec<InstalledPackage> {
    lines
        .iter()
        .map(|line| {
            let mut tokens = line.split_whitespace();
            match tokens.next() {
                Some(name) => InstalledPackage {
                    name: name.to_string(),
                    version: tokens.next().unwrap_or("").to_string(),
                },
                None => InstalledPackage {
                    name: line.clone(),
                    version: String::new(),
                },
            }
        })
        .collect()
}

/// Wrap bare names into placeholder repo records whose display URL is the
/// name itself (for entries not yet resolved against the registry).
pub fn wrap_repo(names: &[String]) -> Vec<RepoPackage> {
    names
        .iter()
        .map(|name| RepoPackage {
            name: name.clone(),
            url: name.clone(),
            latest_version: String::new(),
            description: String::new(),
        })
        .collect()
}
