//! Preflight - Developer-machine environment diagnostics.
//!
//! Preflight inspects the local system, the Node.js runtime installation
//! and the git working tree, printing a sectioned, human-readable report
//! with colored warnings when observed state deviates from the expected
//! conventions (version pins, branch divergence, dependency freshness).
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Report constants and the captured environment snapshot
//! - [`error`] - Error types and result aliases
//! - [`probes`] - Network and filesystem observation primitives
//! - [`report`] - Report model, section rendering, terminal output
//! - [`sections`] - The three section bodies
//! - [`shell`] - Shell command execution
//!
//! # Example
//!
//! ```
//! use preflight::sections::vcs::divergence_count;
//!
//! let log = "abc1234 fix typo\ndef5678 add probe\n";
//! assert_eq!(divergence_count(log), 2);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod probes;
pub mod report;
pub mod sections;
pub mod shell;

pub use error::{PreflightError, Result};
