//! Filesystem probes.
//!
//! These are untrapped checks: a missing path propagates as an error and
//! aborts the remainder of the section that called it.

use crate::error::{PreflightError, Result};
use chrono::{DateTime, Utc};
use regex::Regex;
use std::fs;
use std::path::Path;

/// Default location of the macOS version descriptor.
pub const SYSTEM_VERSION_PLIST: &str = "/System/Library/CoreServices/SystemVersion.plist";

/// Positional index of the ProductName entry among the plist's `<string>`
/// values; the user-visible version follows it immediately.
const PRODUCT_NAME_INDEX: usize = 2;

/// Read the OS product name and user-visible version from the macOS
/// version descriptor.
///
/// Only meaningful on macOS; on other platforms the read fails. The active
/// report does not call this, it is kept as a documented capability.
pub fn macos_version(path: &Path) -> Result<(String, String)> {
    let payload = fs::read_to_string(path)?;
    parse_system_version(&payload, path)
}

/// Extract (ProductName, ProductUserVisibleVersion) from a SystemVersion
/// property list payload, by positional index of its `<string>` entries.
pub(crate) fn parse_system_version(payload: &str, path: &Path) -> Result<(String, String)> {
    let pattern = Regex::new(r"<string>([^<]*)</string>").map_err(anyhow::Error::from)?;
    let strings: Vec<String> = pattern
        .captures_iter(payload)
        .map(|caps| caps[1].to_string())
        .collect();

    match (
        strings.get(PRODUCT_NAME_INDEX),
        strings.get(PRODUCT_NAME_INDEX + 1),
    ) {
        (Some(name), Some(version)) => Ok((name.clone(), version.clone())),
        _ => Err(PreflightError::MalformedVersionDescriptor {
            path: path.to_path_buf(),
        }),
    }
}

/// Whole days elapsed since the dependency install directory was created.
///
/// Approximates "when dependencies were last installed" by the creation
/// timestamp of a directory the package manager writes at install time.
/// Falls back to the modification time where the filesystem does not
/// record creation times.
pub fn install_age_days(path: &Path, now: DateTime<Utc>) -> Result<i64> {
    let metadata = fs::metadata(path)?;
    let stamp = metadata.created().or_else(|_| metadata.modified())?;
    let installed_at: DateTime<Utc> = stamp.into();
    Ok(now.signed_duration_since(installed_at).num_days())
}

/// Number of entries directly inside a directory.
pub fn entry_count(path: &Path) -> Result<usize> {
    Ok(fs::read_dir(path)?.count())
}
