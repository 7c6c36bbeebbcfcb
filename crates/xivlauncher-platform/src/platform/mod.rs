// OS back-ends for the environment probe.
// Each host exposes a preference store and a privilege check; hosts without
// a preference store fall back to `NullStore`.

#[cfg(windows)]
pub mod windows;

#[cfg(unix)]
pub mod unix;

use crate::environment::PreferenceStore;
use crate::error::PlatformError;

/// A preference store for hosts that have none. Every read is `Unsupported`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullStore;

impl PreferenceStore for NullStore {
    fn read_dword(&self, _key: &str, _value: &str) -> Result<u32, PlatformError> {
        Err(PlatformError::Unsupported)
    }
}

/// The preference store backing this host.
#[cfg(windows)]
pub type HostStore = windows::RegistryStore;

/// The preference store backing this host.
#[cfg(not(windows))]
pub type HostStore = NullStore;

/// Whether the current process runs with administrative privilege.
pub fn is_running_elevated() -> bool {
    #[cfg(windows)]
    {
        windows::is_elevated()
    }

    #[cfg(unix)]
    {
        unix::is_elevated()
    }

    #[cfg(not(any(windows, unix)))]
    {
        false
    }
}
