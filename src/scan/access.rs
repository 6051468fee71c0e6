use std::fs::Metadata;

/// Mode-bit pre-check: false when no read bit is granted to anyone.
///
/// Runs before the directory is opened and does not replace handling of
/// errors raised while reading it.
#[cfg(unix)]
pub fn has_read_permission(metadata: &Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;

    const ANY_READ: u32 = 0o444;
    metadata.permissions().mode() & ANY_READ != 0
}

#[cfg(not(unix))]
pub fn has_read_permission(_metadata: &Metadata) -> bool {
    true
}
