//! Terminal writer.
//!
//! The reporter renders each [`CheckLine`] the moment a check produces it;
//! nothing is buffered or collected.

use console::Term;
use std::io::Write;

use super::banner::{divider, title_line, FALLBACK_WIDTH};
use super::theme::{should_use_colors, ReportTheme};
use super::{CheckLine, Severity};

/// Writes the report to the terminal.
pub struct Reporter {
    term: Term,
    theme: ReportTheme,
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter {
    /// Create a reporter writing to stdout, colored when appropriate.
    pub fn new() -> Self {
        let theme = if should_use_colors() {
            ReportTheme::new()
        } else {
            ReportTheme::plain()
        };

        Self {
            term: Term::stdout(),
            theme,
        }
    }

    /// Terminal width at the moment a banner is drawn, with a fixed
    /// fallback for non-interactive output.
    fn width(&self) -> usize {
        self.term
            .size_checked()
            .map(|(_, cols)| cols as usize)
            .unwrap_or(FALLBACK_WIDTH)
    }

    /// Print a section banner: divider, framed title, divider.
    pub fn section_start(&mut self, title: &str) {
        let width = self.width();
        writeln!(self.term, "{}", self.theme.border.apply_to(divider(width))).ok();
        writeln!(
            self.term,
            "{}",
            self.theme.header.apply_to(title_line(title, width))
        )
        .ok();
        writeln!(self.term, "{}", self.theme.border.apply_to(divider(width))).ok();
    }

    /// Print the blank line that closes a section.
    pub fn section_end(&mut self) {
        writeln!(self.term).ok();
    }

    /// Render one check line.
    pub fn render(&mut self, line: &CheckLine) {
        writeln!(self.term, "{}", format_line(&self.theme, line)).ok();
    }

    /// Convenience for an informational label/value pair.
    pub fn value(&mut self, label: &str, value: impl std::fmt::Display) {
        self.render(&CheckLine::info(label, value));
    }

    /// Print a fatal error to stderr; used when the report aborts.
    pub fn fatal(&mut self, msg: &str) {
        let mut stderr = Term::stderr();
        writeln!(stderr, "{}", self.theme.error.apply_to(msg)).ok();
    }
}

/// Format a check line with the given theme.
pub(crate) fn format_line(theme: &ReportTheme, line: &CheckLine) -> String {
    match line.severity {
        Severity::Info => match &line.label {
            Some(label) => format!(
                "{}: {}",
                theme.key.apply_to(label),
                theme.value.apply_to(&line.value)
            ),
            None => line.value.clone(),
        },
        Severity::Warn => theme.warning.apply_to(format!("⚠ {}", line.value)).to_string(),
        Severity::Error => theme.error.apply_to(format!("✗ {}", line.value)).to_string(),
    }
}
