//! Version information baked in at compile time.

/// Crate version from `Cargo.toml`.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Commit hash from the `GIT_HASH` environment variable at build time.
pub fn git_hash() -> Option<&'static str> {
    option_env!("GIT_HASH").filter(|h| !h.is_empty())
}
