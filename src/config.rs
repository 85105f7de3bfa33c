//! Report configuration and captured environment.
//!
//! The report reads nothing from the process environment while it runs.
//! Everything it needs is collected once at startup: tunable constants land
//! in [`ReportConfig`], ambient environment values in [`EnvSnapshot`], and
//! both are carried into the section bodies through [`ReportContext`].

use crate::cli::Cli;
use std::path::PathBuf;

/// Tunable constants for a report run.
///
/// Defaults match the conventions the report checks against; each field is
/// overridable on the command line (see [`Cli`]).
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Pinned Node.js version the installed runtime must satisfy.
    pub expected_node: String,
    /// Branch the divergence check counts commits against.
    pub reference_branch: String,
    /// Commits ahead of the reference branch before a rebase is suggested.
    pub divergence_threshold: usize,
    /// Internal endpoint probed to decide whether the VPN is up.
    pub vpn_probe_url: String,
    /// Public hostname resolved to decide whether there is internet access.
    pub dns_probe_host: String,
    /// Dependency install directory, relative to the project root.
    pub dependency_dir: PathBuf,
}

impl ReportConfig {
    /// Build the config from parsed CLI arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            expected_node: cli.expected_node.clone(),
            reference_branch: cli.reference_branch.clone(),
            divergence_threshold: cli.divergence_threshold,
            vpn_probe_url: cli.vpn_url.clone(),
            dns_probe_host: cli.dns_host.clone(),
            dependency_dir: cli.dependency_dir.clone(),
        }
    }
}

/// Environment values captured once at startup.
#[derive(Debug, Clone)]
pub struct EnvSnapshot {
    /// Home directory, if set. Read for completeness; the active report
    /// does not print it.
    pub home: Option<PathBuf>,
    /// Login name of the current user.
    pub username: String,
    /// Runtime mode variable (NODE_ENV), printed verbatim.
    pub mode: Option<String>,
    /// Version-manager marker (NVM_DIR). Non-empty means nvm is installed.
    pub version_manager_marker: Option<String>,
}

impl EnvSnapshot {
    /// Capture the snapshot from the real process environment.
    pub fn capture() -> Self {
        Self::capture_with(|key| std::env::var(key))
    }

    /// Capture the snapshot with a custom env var lookup function.
    pub fn capture_with<F>(env_fn: F) -> Self
    where
        F: Fn(&str) -> std::result::Result<String, std::env::VarError>,
    {
        let home = env_fn("HOME")
            .or_else(|_| env_fn("USERPROFILE"))
            .ok()
            .map(PathBuf::from);
        let username = env_fn("USER")
            .or_else(|_| env_fn("USERNAME"))
            .unwrap_or_else(|_| "unknown".to_string());

        Self {
            home,
            username,
            mode: env_fn("NODE_ENV").ok(),
            version_manager_marker: env_fn("NVM_DIR").ok().filter(|v| !v.trim().is_empty()),
        }
    }
}

/// Everything a section body needs to run its checks.
#[derive(Debug, Clone)]
pub struct ReportContext {
    pub config: ReportConfig,
    pub env: EnvSnapshot,
    /// Directory the filesystem and git checks run against.
    pub project_root: PathBuf,
}
