//! Section banner rendering.
//!
//! A section opens with a full-width divider, a width-matched title line
//! framed by marker glyphs, and a second divider.

/// Width used when the output stream does not report a column count.
pub const FALLBACK_WIDTH: usize = 80;

/// Two chars: glyph plus separating space. The title starts right after it.
const START_MARKER: &str = "⛺ ";
const END_MARKER: &str = " ⛺";

/// A divider line spanning the full terminal width.
pub fn divider(width: usize) -> String {
    "─".repeat(width)
}

/// The banner's middle line: start marker, title, padding, end marker.
///
/// Padding is computed so the line's char length equals `width`. A title
/// wider than the terminal gets no padding and overflows.
pub fn title_line(title: &str, width: usize) -> String {
    let fixed = START_MARKER.chars().count() + END_MARKER.chars().count();
    let padding = width.saturating_sub(fixed + title.chars().count());
    format!("{START_MARKER}{title}{}{END_MARKER}", " ".repeat(padding))
}
