use std::collections::HashSet;

use crate::patterns::{
    RELEASED_HEADING_PATTERN, SECTION_HEADING_PATTERN, SUBSECTION_HEADING_PATTERN,
    UNRELEASED_HEADING_PATTERN,
};
use crate::types::{AddedEntry, Placement, Section};

/// Current position of the document walk: which section is open and whether
/// a `### ` subsection is active inside it.
#[derive(Debug, Clone, Default)]
struct WalkState {
    section: Option<Section>,
    subsection: Option<String>,
}

impl WalkState {
    fn enter_section(&mut self, section: Section) {
        self.section = Some(section);
        self.subsection = None;
    }

    fn placement(&self) -> Placement {
        match (&self.section, &self.subsection) {
            (Some(Section::Unreleased), Some(_)) => Placement::CorrectlyPlaced,
            (Some(Section::Unreleased), None) => Placement::Orphan,
            _ => Placement::WrongSection,
        }
    }
}

/// Walks the head document top to bottom and classifies every line the diff
/// step reported as added, by the section and subsection it now resides in.
///
/// Heading lines transition the state machine but are never classified
/// themselves, and blank added lines are skipped. Lines sitting before any
/// section heading classify as wrongly placed with no section.
#[must_use]
pub fn classify(head: &str, added: &[(usize, String)]) -> Vec<AddedEntry> {
    let added_lines: HashSet<usize> = added.iter().map(|(number, _)| *number).collect();

    let mut state = WalkState::default();
    let mut seen_unreleased = false;
    let mut entries = Vec::new();

    for (idx, line) in head.lines().enumerate() {
        let number = idx + 1;
        let trimmed = line.trim();

        if !seen_unreleased && UNRELEASED_HEADING_PATTERN.is_match(trimmed) {
            seen_unreleased = true;
            state.enter_section(Section::Unreleased);
            continue;
        }

        if SECTION_HEADING_PATTERN.is_match(trimmed) {
            let label = RELEASED_HEADING_PATTERN
                .captures(trimmed)
                .map_or_else(
                    || trimmed.trim_start_matches('#').trim().to_string(),
                    |caps| caps[1].to_string(),
                );
            state.enter_section(Section::Released(label));
            continue;
        }

        if let Some(caps) = SUBSECTION_HEADING_PATTERN.captures(trimmed) {
            if state.section.is_some() {
                state.subsection = Some(caps[1].trim().to_string());
            }
            continue;
        }

        if trimmed.is_empty() || !added_lines.contains(&number) {
            continue;
        }

        entries.push(AddedEntry {
            line: number,
            content: trimmed.to_string(),
            section: state.section.clone(),
            subsection: state.subsection.clone(),
            placement: state.placement(),
        });
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEAD: &str = "\
# Changelog

## [Unreleased]

### Fixed
- Fixed bug X

## [1.2.0] - 2024-01-01

### Added
- Old feature
";

    fn added(lines: &[(usize, &str)]) -> Vec<(usize, String)> {
        lines.iter().map(|(n, c)| (*n, (*c).to_string())).collect()
    }

    #[test]
    fn entry_under_subsection_is_correctly_placed() {
        let entries = classify(HEAD, &added(&[(6, "- Fixed bug X")]));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].placement, Placement::CorrectlyPlaced);
        assert_eq!(entries[0].section, Some(Section::Unreleased));
        assert_eq!(entries[0].subsection.as_deref(), Some("Fixed"));
    }

    #[test]
    fn entry_without_subsection_is_orphan() {
        let head = "## [Unreleased]\n- Fixed bug X\n\n## [1.0.0]\n- old\n";
        let entries = classify(head, &added(&[(2, "- Fixed bug X")]));
        assert_eq!(entries[0].placement, Placement::Orphan);
        assert_eq!(entries[0].subsection, None);
    }

    #[test]
    fn entry_under_released_section_is_wrong_section() {
        let entries = classify(HEAD, &added(&[(11, "- Old feature")]));
        assert_eq!(entries[0].placement, Placement::WrongSection);
        assert_eq!(
            entries[0].section,
            Some(Section::Released("1.2.0".to_string()))
        );
    }

    #[test]
    fn entry_before_any_section_has_no_section() {
        let head = "intro text\n\n## [Unreleased]\n";
        let entries = classify(head, &added(&[(1, "intro text")]));
        assert_eq!(entries[0].placement, Placement::WrongSection);
        assert_eq!(entries[0].section, None);
    }

    #[test]
    fn added_heading_lines_are_not_classified() {
        let entries = classify(HEAD, &added(&[(5, "### Fixed"), (6, "- Fixed bug X")]));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].content, "- Fixed bug X");
    }

    #[test]
    fn first_line_after_new_subsection_belongs_to_it() {
        let head = "## [Unreleased]\n### Added\n- brand new\n";
        let entries = classify(head, &added(&[(2, "### Added"), (3, "- brand new")]));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].subsection.as_deref(), Some("Added"));
        assert_eq!(entries[0].placement, Placement::CorrectlyPlaced);
    }
}
