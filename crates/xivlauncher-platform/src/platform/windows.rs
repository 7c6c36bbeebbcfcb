// Windows registry preference store and Administrators-group check.

use std::ffi::c_void;
use std::ptr;

use windows_sys::Win32::Security::{
    AllocateAndInitializeSid, CheckTokenMembership, FreeSid, SECURITY_NT_AUTHORITY,
};
use windows_sys::Win32::System::SystemServices::{
    DOMAIN_ALIAS_RID_ADMINS, SECURITY_BUILTIN_DOMAIN_RID,
};
use winreg::enums::HKEY_CURRENT_USER;
use winreg::RegKey;

use crate::environment::PreferenceStore;
use crate::error::PlatformError;

/// Reads DWORD values under `HKEY_CURRENT_USER`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegistryStore;

impl PreferenceStore for RegistryStore {
    fn read_dword(&self, key: &str, value: &str) -> Result<u32, PlatformError> {
        let subkey = RegKey::predef(HKEY_CURRENT_USER)
            .open_subkey(key)
            .map_err(PlatformError::from_read_error)?;
        subkey
            .get_value::<u32, _>(value)
            .map_err(PlatformError::from_read_error)
    }
}

/// Whether the calling thread's token is a member of BUILTIN\Administrators.
///
/// Under UAC a filtered token reports the group as deny-only, so this is only
/// true for an elevated process.
pub fn is_elevated() -> bool {
    let mut admins: *mut c_void = ptr::null_mut();

    // SAFETY: `admins` is a valid out-pointer; the SID is freed below.
    let allocated = unsafe {
        AllocateAndInitializeSid(
            &SECURITY_NT_AUTHORITY,
            2,
            SECURITY_BUILTIN_DOMAIN_RID as u32,
            DOMAIN_ALIAS_RID_ADMINS as u32,
            0,
            0,
            0,
            0,
            0,
            0,
            &mut admins,
        )
    };
    if allocated == 0 {
        tracing::debug!("failed to allocate Administrators SID");
        return false;
    }

    let mut is_member: i32 = 0;
    // SAFETY: a null token handle means "the calling thread's token";
    // `admins` was initialised by AllocateAndInitializeSid.
    let checked = unsafe { CheckTokenMembership(ptr::null_mut(), admins, &mut is_member) };

    // SAFETY: `admins` came from AllocateAndInitializeSid and is freed once.
    unsafe {
        FreeSid(admins);
    }

    checked != 0 && is_member != 0
}
