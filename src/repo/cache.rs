//! Plugin cache
//!
//! The one piece of this crate with real concurrency: a lazily-filled map of
//! every plugin carrying the ecosystem label, populated by exactly one
//! `search` invocation per fill cycle and served from memory until
//! explicitly invalidated.
//!
//! Failure policy is fail-open. A missing or misbehaving tool yields an
//! empty map that is itself cached until `invalidate()`; plugin discovery is
//! advisory, so readers never see an error. The degraded reason rides along
//! in [`Fill`] for callers that want to tell "no plugins" from "tool broke".
//!
//! Known gap, inherited deliberately: no timeout on the external process. A
//! hung tool stalls that fill cycle for every waiter until it exits.

use crate::error::PlugdexError;
use crate::npm::registry::resolve_registry;
use crate::npm::runner::CommandRunner;
use crate::repo::parser::parse_search_output;
use crate::repo::types::RepoPackage;
use crate::ui as output;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock, PoisonError, RwLock};

pub type PluginMap = HashMap<String, RepoPackage>;

/// Why a fill produced an empty map instead of real results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FillFailure {
    /// The package-manager executable is not installed.
    ToolMissing,
    /// The tool could not be spawned, exited non-zero, or wrote to stderr.
    ToolFailed(String),
    /// The tool ran cleanly but its output violated the JSON contract.
    MalformedOutput(String),
}

impl std::fmt::Display for FillFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ToolMissing => write!(f, "package-manager tool not installed"),
            Self::ToolFailed(reason) => write!(f, "tool invocation failed: {}", reason),
            Self::MalformedOutput(reason) => write!(f, "unparseable tool output: {}", reason),
        }
    }
}

/// Result of one fill cycle. `degraded` is `None` for a genuine search
/// result (possibly empty: zero matches is valid) and `Some` when the fill
/// fell back to an empty map.
#[derive(Debug, Clone)]
pub struct Fill {
    pub packages: Arc<PluginMap>,
    pub degraded: Option<FillFailure>,
}

impl Fill {
    fn degraded(reason: FillFailure) -> Self {
        Self {
            packages: Arc::new(PluginMap::new()),
            degraded: Some(reason),
        }
    }
}

/// Thread-safe, lazily-populated cache of every plugin tagged with one
/// ecosystem label.
///
/// Owned by whoever needs it (the CLI dispatcher builds one per run); there
/// is no global instance. Reads of a populated cache take only a read lock;
/// the fill path is serialized by its own mutex so concurrent first readers
/// collapse into a single external invocation.
pub struct PluginCache {
    runner: Arc<dyn CommandRunner>,
    tool: String,
    label: String,
    slot: RwLock<Option<Fill>>,
    fill_lock: Mutex<()>,
    registry_url: OnceLock<String>,
}

impl PluginCache {
    pub fn new(runner: Arc<dyn CommandRunner>, tool: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            runner,
            tool: tool.into(),
            label: label.into(),
            slot: RwLock::new(None),
            fill_lock: Mutex::new(()),
            registry_url: OnceLock::new(),
        }
    }

    /// Registry URL used as the source for every record this cache builds.
    ///
    /// Resolved once per cache lifetime; `invalidate()` does not reset it.
    pub fn registry_url(&self) -> &str {
        self.registry_url
            .get_or_init(|| resolve_registry(self.runner.as_ref(), &self.tool))
    }

    /// Return the plugin map, filling the cache on first access.
    ///
    /// Never fails: a broken tool degrades to a cached empty map. Once any
    /// fill has completed, subsequent calls return the same map without
    /// another process spawn until [`invalidate`](Self::invalidate).
    pub fn all(&self) -> Arc<PluginMap> {
        if let Some(fill) = self.read_slot() {
            return fill.packages;
        }

        let _guard = self
            .fill_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        // Double-checked: another thread may have filled while we waited.
        if let Some(fill) = self.read_slot() {
            return fill.packages;
        }

        let fill = self.fill();
        let packages = Arc::clone(&fill.packages);
        *self
            .slot
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(fill);
        packages
    }

    /// Look up a single plugin by name, filling the cache if needed.
    pub fn package(&self, name: &str) -> Option<RepoPackage> {
        self.all().get(name).cloned()
    }

    /// All cached plugins sorted by name.
    pub fn list(&self) -> Vec<RepoPackage> {
        let map = self.all();
        let mut packages: Vec<RepoPackage> = map.values().cloned().collect();
        packages.sort_by(|a, b| a.name.cmp(&b.name));
        packages
    }

    /// Outcome of the most recent fill, or `None` if the cache is absent.
    pub fn last_fill(&self) -> Option<Fill> {
        self.read_slot()
    }

    /// Discard the cached map so the next read triggers a fresh fill.
    ///
    /// Point-in-time reset, not a cancellation: a fill already in flight
    /// completes and installs its result. Never blocks on the fill lock.
    pub fn invalidate(&self) {
        *self
            .slot
            .write()
            .unwrap_or_else(PoisonError::into_inner) = None;
    }

    fn read_slot(&self) -> Option<Fill> {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// One fill cycle: resolve the registry URL, run the search, parse.
    /// All failures collapse into a degraded empty fill; nothing propagates.
    fn fill(&self) -> Fill {
        let source_url = self.registry_url().to_string();
        let query = format!("ecosystem:{}", self.label);
        let command = format!("{} search --json -l {}", self.tool, query);

        let run = self
            .runner
            .run(&self.tool, &["search", "--json", "-l", &query]);

        let stdout = match run.and_then(|out| out.ensure_clean(&command)) {
            Ok(stdout) => stdout,
            Err(PlugdexError::ExecutableNotFound { tool }) => {
                output::debug(&format!("'{}' not installed, plugin list empty", tool));
                return Fill::degraded(FillFailure::ToolMissing);
            }
            Err(e) => {
                output::debug(&format!("plugin search failed: {}", e));
                return Fill::degraded(FillFailure::ToolFailed(e.to_string()));
            }
        };

        match parse_search_output(&stdout, &source_url) {
            Ok(map) => Fill {
                packages: Arc::new(map),
                degraded: None,
            },
            Err(e) => {
                output::debug(&format!("plugin search output unparseable: {}", e));
                Fill::degraded(FillFailure::MalformedOutput(e.to_string()))
            }
        }
    }
}
