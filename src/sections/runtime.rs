//! Runtime section: Node.js install, package manager, dependency state.
//!
//! The decision logic lives in pure finding functions so it can be tested
//! without a terminal; [`run`] only observes and renders.

use crate::config::ReportContext;
use crate::error::{PreflightError, Result};
use crate::probes::fs as fsprobe;
use crate::report::{CheckLine, Reporter};
use crate::shell;
use chrono::Utc;
use semver::{Version, VersionReq};

/// Dependency installs older than this many days get a staleness warning.
const STALE_AFTER_DAYS: i64 = 7;

/// Directory npm writes at install time; its creation timestamp stands in
/// for "when dependencies were last installed".
const INSTALL_STAMP_SUBDIR: &str = ".bin";

/// Run the Runtime section checks.
///
/// The subprocess and filesystem checks here are untrapped: a missing
/// dependency directory aborts the rest of this section and the report.
pub fn run(ctx: &ReportContext, out: &mut Reporter) -> Result<()> {
    let installed = shell::run("node --version")?;
    out.value("Node version", &installed);
    for line in version_findings(&installed, &ctx.config.expected_node)? {
        out.render(&line);
    }

    out.value("npm version", shell::run("npm --version")?);

    for line in version_manager_findings(ctx.env.version_manager_marker.as_deref()) {
        out.render(&line);
    }

    out.value("NODE_ENV", ctx.env.mode.as_deref().unwrap_or("(unset)"));

    let dep_dir = ctx.project_root.join(&ctx.config.dependency_dir);
    out.value("Dependencies", fsprobe::entry_count(&dep_dir)?);

    let age = fsprobe::install_age_days(&dep_dir.join(INSTALL_STAMP_SUBDIR), Utc::now())?;
    out.value("Installed", format_age(age));
    for line in staleness_findings(age) {
        out.render(&line);
    }

    Ok(())
}

/// Error lines for a runtime that does not satisfy the pinned version.
///
/// A bare pin like `12.18.3` or `v12.18.3` matches exactly; operators
/// (`^`, `>=`, `~`) pass through as written.
pub fn version_findings(installed: &str, expected: &str) -> Result<Vec<CheckLine>> {
    let requirement = normalize_pin(expected);
    let requirement =
        VersionReq::parse(&requirement).map_err(|e| PreflightError::VersionParse {
            value: expected.to_string(),
            message: e.to_string(),
        })?;

    let version = installed.trim().trim_start_matches('v');
    let version = Version::parse(version).map_err(|e| PreflightError::VersionParse {
        value: installed.to_string(),
        message: e.to_string(),
    })?;

    if requirement.matches(&version) {
        return Ok(Vec::new());
    }

    Ok(vec![
        CheckLine::error(format!(
            "Node {version} does not satisfy the pinned version {expected}"
        )),
        CheckLine::error(format!("Run `nvm install {expected}` to match the pin")),
    ])
}

/// Presence line for the version manager, plus error lines when missing.
pub fn version_manager_findings(marker: Option<&str>) -> Vec<CheckLine> {
    let present = marker.is_some_and(|v| !v.trim().is_empty());
    let mut lines = vec![CheckLine::info("nvm installed", present)];
    if !present {
        lines.push(CheckLine::error("nvm was not detected (NVM_DIR is unset)"));
        lines.push(CheckLine::error(
            "Install it from https://github.com/nvm-sh/nvm",
        ));
    }
    lines
}

/// Warning lines for a dependency install old enough to be suspect.
pub fn staleness_findings(age_days: i64) -> Vec<CheckLine> {
    if age_days < STALE_AFTER_DAYS {
        return Vec::new();
    }
    vec![
        CheckLine::warn(format!(
            "Dependencies were installed {} and may be stale",
            format_age(age_days)
        )),
        CheckLine::warn("Consider a clean reinstall: rm -rf node_modules && npm install"),
    ]
}

/// Render an age in days as relative time.
pub fn format_age(days: i64) -> String {
    match days {
        d if d <= 0 => "today".to_string(),
        1 => "1 day ago".to_string(),
        d => format!("{d} days ago"),
    }
}

/// A pin that starts with a digit means "exactly this version"; semver's
/// default caret semantics would also accept later minors. Pins may carry
/// the `v` prefix that `node --version` prints.
fn normalize_pin(expected: &str) -> String {
    let expected = expected.trim_start_matches(['v', 'V']);
    if expected.starts_with(|c: char| c.is_ascii_digit()) {
        format!("={expected}")
    } else {
        expected.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Severity;

    #[test]
    fn matching_version_yields_no_findings() {
        assert!(version_findings("v12.18.3", "12.18.3").unwrap().is_empty());
    }

    #[test]
    fn mismatched_version_yields_two_error_lines() {
        let lines = version_findings("v14.0.0", "12.18.3").unwrap();
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|l| l.severity == Severity::Error));
        assert!(lines[1].value.contains("12.18.3"));
    }

    #[test]
    fn v_prefixed_pin_matches_same_version() {
        assert!(version_findings("v12.18.3", "v12.18.3").unwrap().is_empty());
    }

    #[test]
    fn v_prefixed_pin_rejects_other_versions() {
        let lines = version_findings("v14.0.0", "v12.18.3").unwrap();
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|l| l.severity == Severity::Error));
        assert!(lines[1].value.contains("12.18.3"));
    }

    #[test]
    fn bare_pin_is_exact_not_caret() {
        // 12.19.0 would satisfy ^12.18.3; the pin must reject it.
        let lines = version_findings("v12.19.0", "12.18.3").unwrap();
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn explicit_range_passes_through() {
        assert!(version_findings("v12.19.0", "^12.18.3").unwrap().is_empty());
    }

    #[test]
    fn unparseable_version_propagates() {
        assert!(version_findings("not-a-version", "12.18.3").is_err());
        assert!(version_findings("v12.18.3", "also not a pin").is_err());
    }

    #[test]
    fn present_marker_yields_single_info_line() {
        let lines = version_manager_findings(Some("/home/alice/.nvm"));
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].severity, Severity::Info);
        assert_eq!(lines[0].value, "true");
    }

    #[test]
    fn missing_marker_yields_two_error_lines() {
        let lines = version_manager_findings(None);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].value, "false");
        assert_eq!(lines[1].severity, Severity::Error);
        assert!(lines[2].value.contains("https://github.com/nvm-sh/nvm"));
    }

    #[test]
    fn blank_marker_counts_as_missing() {
        let lines = version_manager_findings(Some("  "));
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn six_day_old_install_is_fresh() {
        assert!(staleness_findings(6).is_empty());
    }

    #[test]
    fn seven_day_old_install_warns() {
        let lines = staleness_findings(7);
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|l| l.severity == Severity::Warn));
        assert!(lines[1].value.contains("npm install"));
    }

    #[test]
    fn format_age_is_relative() {
        assert_eq!(format_age(0), "today");
        assert_eq!(format_age(1), "1 day ago");
        assert_eq!(format_age(12), "12 days ago");
    }
}
