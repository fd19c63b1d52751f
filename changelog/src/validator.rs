use crate::classifier::classify;
use crate::diff::diff_slice;
use crate::document::partition;
use crate::patterns::ENTRY_LINE_PATTERN;
use crate::types::{Advisory, Placement, RemovedEntry, ValidationReport, Violation};

/// Validates a head changelog revision against its base revision.
///
/// The per-slice line diff is the single definition of "changed": the
/// classification walk only ever inspects lines the diff marked as added.
/// Violations are collected rather than short-circuited so one run reports
/// every problem at once.
#[must_use]
pub fn validate(base: &str, head: &str) -> ValidationReport {
    let base_slices = partition(base);
    let head_slices = partition(head);

    let released_diff = diff_slice(&base_slices.released, &head_slices.released);
    let unreleased_diff = diff_slice(&base_slices.unreleased, &head_slices.unreleased);

    let mut report = ValidationReport::default();

    if !released_diff.is_empty() {
        let mut lines: Vec<String> = released_diff
            .added
            .iter()
            .map(|(_, content)| format!("+ {content}"))
            .collect();
        lines.extend(released_diff.removed.iter().map(|c| format!("- {c}")));
        report
            .violations
            .push(Violation::ReleasedSectionModified { lines });
    }

    if unreleased_diff.is_empty() {
        report.violations.push(Violation::NoUnreleasedChanges);
    } else {
        if !unreleased_diff.removed.is_empty() {
            report.advisories.push(Advisory::EntriesRemoved {
                lines: unreleased_diff.removed.clone(),
            });
        }
        if head_slices.unreleased.is_blank() {
            report.advisories.push(Advisory::UnreleasedEmptied);
        }
    }

    let mut added_lines = unreleased_diff.added.clone();
    added_lines.extend(released_diff.added.iter().cloned());
    report.added = classify(head, &added_lines);

    for entry in &report.added {
        match entry.placement {
            Placement::Orphan => report.violations.push(Violation::OrphanEntry {
                line: entry.line,
                content: entry.content.clone(),
            }),
            Placement::WrongSection => report.violations.push(Violation::WrongSectionEntry {
                line: entry.line,
                content: entry.content.clone(),
                section: entry.section.as_ref().map(ToString::to_string),
            }),
            Placement::CorrectlyPlaced => {}
        }
    }

    let added_bullets = report
        .added
        .iter()
        .filter(|entry| ENTRY_LINE_PATTERN.is_match(&entry.content))
        .count();
    if added_bullets == 0 {
        report.violations.push(Violation::NoEntriesAdded);
    }

    report.removed = unreleased_diff
        .removed
        .iter()
        .chain(released_diff.removed.iter())
        .map(|content| RemovedEntry {
            content: content.clone(),
        })
        .collect();

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "\
# Changelog

## [Unreleased]

### Fixed

## [1.2.0] - 2024-01-01

### Added
- Old feature
";

    #[test]
    fn well_placed_addition_passes() {
        let head = BASE.replace("### Fixed\n", "### Fixed\n- Fixed bug X\n");
        let report = validate(BASE, &head);
        assert!(report.passed(), "violations: {:?}", report.violations);
        assert_eq!(report.added.len(), 1);
        assert_eq!(report.added[0].placement, Placement::CorrectlyPlaced);
        assert!(report.advisories.is_empty());
    }

    #[test]
    fn addition_without_subsection_is_orphan_failure() {
        let base = "# Changelog\n\n## [Unreleased]\n\n## [1.0.0]\n- old\n";
        let head = "# Changelog\n\n## [Unreleased]\n- Fixed bug X\n\n## [1.0.0]\n- old\n";
        let report = validate(base, head);
        assert!(!report.passed());
        assert!(report
            .violations
            .iter()
            .any(|v| matches!(v, Violation::OrphanEntry { .. })));
    }

    #[test]
    fn addition_under_released_section_fails_twice() {
        let head = BASE.replace("- Old feature\n", "- Old feature\n- Sneaky backport\n");
        let report = validate(BASE, &head);
        assert!(!report.passed());
        assert!(report
            .violations
            .iter()
            .any(|v| matches!(v, Violation::ReleasedSectionModified { .. })));
        assert!(report
            .violations
            .iter()
            .any(|v| matches!(v, Violation::WrongSectionEntry { .. })));
        // The untouched unreleased slice is flagged as well.
        assert!(report
            .violations
            .iter()
            .any(|v| matches!(v, Violation::NoUnreleasedChanges)));
    }

    #[test]
    fn identical_revisions_fail_with_no_unreleased_changes() {
        let report = validate(BASE, BASE);
        assert!(!report.passed());
        assert!(report
            .violations
            .iter()
            .any(|v| matches!(v, Violation::NoUnreleasedChanges)));
    }

    #[test]
    fn whitespace_change_in_released_section_is_a_failure() {
        let head = BASE.replace("- Old feature", "- Old  feature");
        let report = validate(BASE, &head);
        assert!(report
            .violations
            .iter()
            .any(|v| matches!(v, Violation::ReleasedSectionModified { .. })));
    }

    #[test]
    fn deletions_under_unreleased_warn_but_additions_still_pass() {
        let base = BASE.replace("### Fixed\n", "### Fixed\n- Stale entry\n");
        let head = BASE.replace("### Fixed\n", "### Fixed\n- Fresh entry\n");
        let report = validate(&base, &head);
        assert!(report.passed(), "violations: {:?}", report.violations);
        assert!(report
            .advisories
            .iter()
            .any(|a| matches!(a, Advisory::EntriesRemoved { .. })));
        assert_eq!(report.removed.len(), 1);
        assert_eq!(report.removed[0].content, "- Stale entry");
    }

    #[test]
    fn emptying_the_unreleased_section_warns_and_fails_on_no_bullets() {
        let base = "## [Unreleased]\n### Fixed\n- Only entry\n\n## [1.0.0]\n- old\n";
        let head = "## [Unreleased]\n\n## [1.0.0]\n- old\n";
        let report = validate(base, head);
        assert!(report
            .advisories
            .iter()
            .any(|a| matches!(a, Advisory::UnreleasedEmptied)));
        assert!(report
            .violations
            .iter()
            .any(|v| matches!(v, Violation::NoEntriesAdded)));
    }

    #[test]
    fn document_without_unreleased_treats_every_change_as_released_mutation() {
        let base = "# Changelog\n\n## [1.0.0]\n- old\n";
        let head = "# Changelog\n\n## [1.0.0]\n- old\n- new\n";
        let report = validate(base, head);
        assert!(!report.passed());
        assert!(report
            .violations
            .iter()
            .any(|v| matches!(v, Violation::ReleasedSectionModified { .. })));
        assert!(report
            .violations
            .iter()
            .any(|v| matches!(v, Violation::NoUnreleasedChanges)));
    }

    #[test]
    fn only_heading_additions_fail_on_no_entries() {
        let base = "# Changelog\n\n## [Unreleased]\n";
        let head = "# Changelog\n\n## [Unreleased]\n### Added\n";
        let report = validate(base, head);
        assert!(!report.passed());
        assert!(report
            .violations
            .iter()
            .any(|v| matches!(v, Violation::NoEntriesAdded)));
    }
}
