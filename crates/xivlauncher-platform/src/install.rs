//! Game install validation and discovery.
//!
//! An install root is the directory that directly contains both the `game`
//! and `boot` folders. Discovery walks an ordered candidate list and stops at
//! the first valid root.

use std::path::{Path, PathBuf};

/// Folders that must sit directly under an install root.
const REQUIRED_SUBDIRS: [&str; 2] = ["game", "boot"];

/// Default install locations, highest priority first.
#[cfg(windows)]
pub const DEFAULT_INSTALL_PATHS: &[&str] = &[
    r"C:\SquareEnix\FINAL FANTASY XIV - A Realm Reborn",
    r"C:\Program Files (x86)\Steam\steamapps\common\FINAL FANTASY XIV Online",
    r"C:\Program Files (x86)\Steam\steamapps\common\FINAL FANTASY XIV - A Realm Reborn",
    r"C:\Program Files (x86)\FINAL FANTASY XIV - A Realm Reborn",
];

/// Default install locations, highest priority first.
#[cfg(not(windows))]
pub const DEFAULT_INSTALL_PATHS: &[&str] = &[];

/// Check whether `path` is a game install root.
///
/// `None` and empty paths are rejected without touching the filesystem.
pub fn is_valid_install_path(path: Option<&Path>) -> bool {
    match path {
        Some(p) => is_valid_install_dir(p),
        None => false,
    }
}

/// Check whether `path` directly contains the `game` and `boot` directories.
///
/// Any filesystem error counts as the directory being absent.
pub fn is_valid_install_dir(path: &Path) -> bool {
    if path.as_os_str().is_empty() {
        return false;
    }
    REQUIRED_SUBDIRS.iter().all(|sub| path.join(sub).is_dir())
}

/// Search the built-in default locations for an install root.
pub fn find_install_path() -> Option<PathBuf> {
    find_install_path_in(DEFAULT_INSTALL_PATHS)
}

/// Return the first candidate, in order, that is an existing install root.
pub fn find_install_path_in<I>(candidates: I) -> Option<PathBuf>
where
    I: IntoIterator,
    I::Item: AsRef<Path>,
{
    for candidate in candidates {
        let path = candidate.as_ref();
        if path.is_dir() && is_valid_install_dir(path) {
            tracing::debug!(path = %path.display(), "found game install");
            return Some(path.to_path_buf());
        }
        tracing::trace!(path = %path.display(), "install candidate rejected");
    }
    None
}
