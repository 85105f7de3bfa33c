//! CLI argument definitions.
//!
//! Preflight takes no subcommands; a single invocation prints the full
//! report. The flags exist to override the conventions the report checks
//! against and to control output.

use clap::Parser;
use std::path::PathBuf;

/// Preflight - Developer-machine environment diagnostics.
#[derive(Debug, Parser)]
#[command(name = "preflight")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to project root (overrides current directory)
    #[arg(short, long)]
    pub project: Option<PathBuf>,

    /// Node.js version the installed runtime must satisfy
    #[arg(long, env = "PREFLIGHT_EXPECTED_NODE", default_value = "12.18.3")]
    pub expected_node: String,

    /// Branch the divergence check counts commits against
    #[arg(long, env = "PREFLIGHT_REFERENCE_BRANCH", default_value = "develop")]
    pub reference_branch: String,

    /// Commits ahead of the reference branch before a rebase is suggested
    #[arg(long, env = "PREFLIGHT_DIVERGENCE_THRESHOLD", default_value_t = 10)]
    pub divergence_threshold: usize,

    /// Internal endpoint probed to decide whether the VPN is up
    #[arg(
        long,
        env = "PREFLIGHT_VPN_URL",
        default_value = "https://intranet.corp.internal/healthz"
    )]
    pub vpn_url: String,

    /// Public hostname resolved to decide whether there is internet access
    #[arg(long, env = "PREFLIGHT_DNS_HOST", default_value = "google.com")]
    pub dns_host: String,

    /// Dependency install directory, relative to the project root
    #[arg(long, default_value = "node_modules")]
    pub dependency_dir: PathBuf,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_conventions() {
        let cli = Cli::parse_from(["preflight"]);
        assert_eq!(cli.expected_node, "12.18.3");
        assert_eq!(cli.reference_branch, "develop");
        assert_eq!(cli.divergence_threshold, 10);
        assert_eq!(cli.dns_host, "google.com");
        assert_eq!(cli.dependency_dir, PathBuf::from("node_modules"));
        assert!(!cli.no_color);
        assert!(!cli.debug);
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::parse_from([
            "preflight",
            "--expected-node",
            "18.17.0",
            "--reference-branch",
            "main",
            "--divergence-threshold",
            "25",
        ]);
        assert_eq!(cli.expected_node, "18.17.0");
        assert_eq!(cli.reference_branch, "main");
        assert_eq!(cli.divergence_threshold, 25);
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
