//! Host environment fingerprint check.
//!
//! Decides whether the current machine is an EC2 instance by reading the
//! DMI system-vendor string. Absence of the file, a permissions error, or
//! non-UTF-8 content all uniformly mean "not EC2" rather than an error,
//! so this check is safe to call before any network activity.

use std::fs;
use std::path::Path;

/// DMI system-vendor file exposed by the kernel.
pub const SYS_VENDOR_PATH: &str = "/sys/devices/virtual/dmi/id/sys_vendor";

/// Vendor marker substring identifying EC2 hosts (case-sensitive).
pub const VENDOR_MARKER: &str = "Amazon";

/// Check whether this host is an EC2 instance.
///
/// Pure query over local state; idempotent and cheap, so it can serve both
/// as an activation gate and as an internal guard before network I/O.
pub fn is_ec2_host() -> bool {
    vendor_file_matches(Path::new(SYS_VENDOR_PATH))
}

/// Check whether the given vendor file contains the EC2 marker.
///
/// Any read failure yields `false`.
pub fn vendor_file_matches(path: &Path) -> bool {
    match fs::read_to_string(path) {
        Ok(contents) => contents.contains(VENDOR_MARKER),
        Err(_) => false,
    }
}
