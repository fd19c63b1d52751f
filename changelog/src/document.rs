use crate::patterns::{SECTION_HEADING_PATTERN, UNRELEASED_HEADING_PATTERN};

/// One slice of a changelog document, with a map from each slice line back
/// to its 1-based line number in the original document.
#[derive(Debug, Clone, Default)]
pub struct Slice {
    pub lines: Vec<String>,
    pub line_numbers: Vec<usize>,
}

impl Slice {
    fn push(&mut self, line: &str, number: usize) {
        self.lines.push(line.to_string());
        self.line_numbers.push(number);
    }

    /// Renders the slice with one trailing newline per line, so that a
    /// trailing blank line is distinguishable from no line at all.
    #[must_use]
    pub fn text(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    /// True when the slice has no lines or only whitespace lines.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.lines.iter().all(|line| line.trim().is_empty())
    }
}

/// Unreleased/Released partition of a changelog document.
#[derive(Debug, Clone, Default)]
pub struct Slices {
    pub unreleased: Slice,
    pub released: Slice,
}

/// Splits a document into its Unreleased slice (all lines strictly between
/// the first `## [Unreleased]` heading and the next `## ` heading) and the
/// Released slice (every other line, in original order, the Unreleased
/// heading line included).
///
/// Only the first Unreleased heading opens the slice; a document without one
/// has an empty Unreleased slice and is treated as entirely released.
#[must_use]
pub fn partition(content: &str) -> Slices {
    let mut slices = Slices::default();
    let mut in_unreleased = false;
    let mut seen_unreleased = false;

    for (idx, line) in content.lines().enumerate() {
        let number = idx + 1;
        let trimmed = line.trim();

        if !seen_unreleased && UNRELEASED_HEADING_PATTERN.is_match(trimmed) {
            seen_unreleased = true;
            in_unreleased = true;
            slices.released.push(line, number);
            continue;
        }

        if SECTION_HEADING_PATTERN.is_match(trimmed) {
            in_unreleased = false;
        }

        if in_unreleased {
            slices.unreleased.push(line, number);
        } else {
            slices.released.push(line, number);
        }
    }

    slices
}
