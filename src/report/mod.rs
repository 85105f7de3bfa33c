//! Report model and runner.
//!
//! A report is a fixed ordered list of [`Section`]s, each a flat sequence
//! of independent checks. Checks run strictly sequentially and print as
//! they complete; an error from an untrapped check aborts the remaining
//! checks and sections.

pub mod banner;
pub mod reporter;
pub mod theme;

pub use reporter::Reporter;
pub use theme::{should_use_colors, ReportTheme};

use crate::config::ReportContext;
use crate::error::Result;
use crate::sections;

/// How a rendered line should be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warn,
    Error,
}

/// One check's printed result. Produced, rendered, never stored.
#[derive(Debug, Clone)]
pub struct CheckLine {
    pub label: Option<String>,
    pub value: String,
    pub severity: Severity,
}

impl CheckLine {
    /// An informational label/value line.
    pub fn info(label: &str, value: impl std::fmt::Display) -> Self {
        Self {
            label: Some(label.to_string()),
            value: value.to_string(),
            severity: Severity::Info,
        }
    }

    /// An advisory warning line.
    pub fn warn(message: impl Into<String>) -> Self {
        Self {
            label: None,
            value: message.into(),
            severity: Severity::Warn,
        }
    }

    /// An advisory error line. Advisory only: the run still succeeds.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            label: None,
            value: message.into(),
            severity: Severity::Error,
        }
    }
}

/// A titled group of checks.
pub struct Section {
    pub name: &'static str,
    pub body: fn(&ReportContext, &mut Reporter) -> Result<()>,
}

/// The report's sections, in execution order.
pub fn all_sections() -> &'static [Section] {
    const SECTIONS: &[Section] = &[
        Section {
            name: "System",
            body: sections::system::run,
        },
        Section {
            name: "Runtime",
            body: sections::runtime::run,
        },
        Section {
            name: "Version-Control",
            body: sections::vcs::run,
        },
    ];
    SECTIONS
}

/// Run every section in order, rendering through the reporter.
pub fn run_report(ctx: &ReportContext, reporter: &mut Reporter) -> Result<()> {
    for section in all_sections() {
        tracing::debug!("running section {}", section.name);
        reporter.section_start(section.name);
        (section.body)(ctx, reporter)?;
        reporter.section_end();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_run_in_fixed_order() {
        let names: Vec<_> = all_sections().iter().map(|s| s.name).collect();
        assert_eq!(names, ["System", "Runtime", "Version-Control"]);
    }

    #[test]
    fn info_constructor_sets_label() {
        let line = CheckLine::info("CPU cores", 8);
        assert_eq!(line.label.as_deref(), Some("CPU cores"));
        assert_eq!(line.value, "8");
        assert_eq!(line.severity, Severity::Info);
    }

    #[test]
    fn warn_and_error_constructors_have_no_label() {
        assert!(CheckLine::warn("w").label.is_none());
        assert_eq!(CheckLine::warn("w").severity, Severity::Warn);
        assert!(CheckLine::error("e").label.is_none());
        assert_eq!(CheckLine::error("e").severity, Severity::Error);
    }
}
