//! Platform-specific process details.

/// Whether the process runs with an effective uid of 0, so `sudo` will not prompt.
#[cfg(unix)]
pub fn is_elevated() -> bool {
    // SAFETY: geteuid has no preconditions and cannot fail.
    unsafe { libc::geteuid() == 0 }
}

/// Elevation is not detected off unix; installs there are not supported.
#[cfg(not(unix))]
pub fn is_elevated() -> bool {
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn is_elevated_matches_effective_uid() {
        let uid = unsafe { libc::geteuid() };
        assert_eq!(is_elevated(), uid == 0);
    }
}
