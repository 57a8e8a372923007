use serde::Serialize;

/// One discoverable plugin as reported by the registry search.
///
/// Immutable once constructed; `url` is the registry URL that was in effect
/// when the record was built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepoPackage {
    pub name: String,
    pub url: String,
    pub latest_version: String,
    pub description: String,
}

/// A locally-installed plugin parsed from a raw "name version" line.
/// Version may be empty. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstalledPackage {
    pub name: String,
    pub version: String,
}
