/// External URLs
///
/// Centralized so the fallback registry is easy to change and reusable
/// from docs generation.

/// Default package registry, used whenever `<tool> config get registry`
/// cannot be consulted (tool missing, non-zero exit, stderr noise).
pub const NPMJS_REGISTRY: &str = "https://registry.npmjs.org/";
