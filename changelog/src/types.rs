use std::fmt::{self, Display, Formatter};

/// Section of the changelog a line resides in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Section {
    Unreleased,
    Released(String),
}

impl Display for Section {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unreleased => write!(f, "Unreleased"),
            Self::Released(label) => write!(f, "{label}"),
        }
    }
}

/// Placement verdict for a single added line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Under `[Unreleased]` with an active `### ` subsection.
    CorrectlyPlaced,
    /// Under `[Unreleased]` but outside any subsection.
    Orphan,
    /// Under a released section, or outside any section at all.
    WrongSection,
}

/// A line added between the base and head revisions, with the section and
/// subsection it now resides in.
#[derive(Debug, Clone, PartialEq)]
pub struct AddedEntry {
    /// 1-based line number in the head document.
    pub line: usize,
    pub content: String,
    /// `None` when the line sits before any section heading.
    pub section: Option<Section>,
    pub subsection: Option<String>,
    pub placement: Placement,
}

/// A line removed between the base and head revisions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovedEntry {
    pub content: String,
}

/// A check failure; any violation makes the overall verdict fail.
#[derive(Debug, Clone, PartialEq)]
pub enum Violation {
    ReleasedSectionModified { lines: Vec<String> },
    NoUnreleasedChanges,
    OrphanEntry { line: usize, content: String },
    WrongSectionEntry {
        line: usize,
        content: String,
        section: Option<String>,
    },
    NoEntriesAdded,
}

impl Display for Violation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReleasedSectionModified { lines } => write!(
                f,
                "released sections were modified ({} changed line{}); published sections are immutable",
                lines.len(),
                if lines.len() == 1 { "" } else { "s" }
            ),
            Self::NoUnreleasedChanges => {
                write!(f, "no changes detected under the [Unreleased] section")
            }
            Self::OrphanEntry { line, content } => write!(
                f,
                "line {line}: entry added under [Unreleased] without a '### ' subsection: {content}"
            ),
            Self::WrongSectionEntry {
                line,
                content,
                section,
            } => match section {
                Some(label) => write!(
                    f,
                    "line {line}: entry added under released section [{label}] instead of [Unreleased]: {content}"
                ),
                None => write!(
                    f,
                    "line {line}: entry added outside any changelog section: {content}"
                ),
            },
            Self::NoEntriesAdded => {
                write!(f, "no changelog entries ('- ' bullet lines) were added")
            }
        }
    }
}

/// Advisory conditions are reported but never affect the verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advisory {
    EntriesRemoved { lines: Vec<String> },
    UnreleasedEmptied,
}

impl Display for Advisory {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::EntriesRemoved { lines } => write!(
                f,
                "{} line{} removed from the [Unreleased] section; please confirm the removal is intentional",
                lines.len(),
                if lines.len() == 1 { " was" } else { "s were" }
            ),
            Self::UnreleasedEmptied => write!(
                f,
                "the [Unreleased] section is empty after this change; entries were removed without replacement"
            ),
        }
    }
}

/// Aggregated outcome of validating a base/head changelog pair.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub violations: Vec<Violation>,
    pub advisories: Vec<Advisory>,
    pub added: Vec<AddedEntry>,
    pub removed: Vec<RemovedEntry>,
}

impl ValidationReport {
    /// The verdict: passes only when no violation was collected.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }

    /// One-line rollup of the report for console output.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{} violation{}, {} advisor{}, {} line{} added, {} removed",
            self.violations.len(),
            if self.violations.len() == 1 { "" } else { "s" },
            self.advisories.len(),
            if self.advisories.len() == 1 { "y" } else { "ies" },
            self.added.len(),
            if self.added.len() == 1 { "" } else { "s" },
            self.removed.len(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_counts_every_bucket() {
        let report = ValidationReport {
            violations: vec![Violation::NoUnreleasedChanges],
            advisories: vec![Advisory::UnreleasedEmptied],
            added: vec![],
            removed: vec![
                RemovedEntry {
                    content: "- gone".to_string(),
                },
                RemovedEntry {
                    content: "- also gone".to_string(),
                },
            ],
        };

        assert_eq!(
            report.summary(),
            "1 violation, 1 advisory, 0 lines added, 2 removed"
        );
    }

    #[test]
    fn empty_report_summary_pluralizes() {
        let report = ValidationReport::default();
        assert_eq!(
            report.summary(),
            "0 violations, 0 advisories, 0 lines added, 0 removed"
        );
        assert!(report.passed());
    }
}
