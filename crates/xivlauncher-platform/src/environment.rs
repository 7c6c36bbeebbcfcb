//! Host environment probes: theme preference and process privilege.
//!
//! Preference reads go through [`PreferenceStore`] so the failure policy
//! ("anything unreadable means light mode") lives here once and can be
//! exercised against fake stores.

use crate::error::PlatformError;
use crate::platform::{self, HostStore};

/// Registry key holding the per-user theme preference.
pub const PERSONALIZE_KEY: &str = r"Software\Microsoft\Windows\CurrentVersion\Themes\Personalize";

/// DWORD under [`PERSONALIZE_KEY`]; `0` means apps use the dark theme.
pub const APPS_USE_LIGHT_THEME: &str = "AppsUseLightTheme";

/// Read access to the host's per-user preference values.
pub trait PreferenceStore {
    fn read_dword(&self, key: &str, value: &str) -> Result<u32, PlatformError>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for &S {
    fn read_dword(&self, key: &str, value: &str) -> Result<u32, PlatformError> {
        (**self).read_dword(key, value)
    }
}

/// Environment queries over a preference store.
#[derive(Debug, Clone, Default)]
pub struct EnvironmentProbe<S> {
    store: S,
}

impl EnvironmentProbe<HostStore> {
    /// A probe backed by the current host's preference store.
    pub fn host() -> Self {
        Self::new(HostStore::default())
    }
}

impl<S: PreferenceStore> EnvironmentProbe<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Whether the user prefers dark app themes.
    ///
    /// Never fails: a missing value means light mode, and any other read
    /// error is logged and treated the same way.
    pub fn is_dark_mode_enabled(&self) -> bool {
        match self.store.read_dword(PERSONALIZE_KEY, APPS_USE_LIGHT_THEME) {
            Ok(value) => value == 0,
            Err(PlatformError::NotFound) => false,
            Err(e) => {
                tracing::debug!(error = %e, "theme preference unreadable, assuming light mode");
                false
            }
        }
    }

    /// Whether the current process holds administrative privilege.
    pub fn is_running_elevated(&self) -> bool {
        platform::is_running_elevated()
    }
}

/// Whether the host user prefers dark app themes.
pub fn is_dark_mode_enabled() -> bool {
    EnvironmentProbe::host().is_dark_mode_enabled()
}

/// Whether the current process holds administrative privilege.
pub fn is_running_elevated() -> bool {
    platform::is_running_elevated()
}
