// Unix privilege check.

/// Root is the only administrative identity we recognise on Unix hosts.
pub fn is_elevated() -> bool {
    rustix::process::geteuid().is_root()
}
