use similar::{ChangeTag, TextDiff};

use crate::document::Slice;

/// Line-level difference between the base and head revision of one slice.
#[derive(Debug, Clone, Default)]
pub struct SliceDiff {
    /// Added lines as (head document line number, content).
    pub added: Vec<(usize, String)>,
    /// Removed lines; only the content is reported.
    pub removed: Vec<String>,
}

impl SliceDiff {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// Diffs the base and head revision of a slice, mapping each inserted line
/// back to its head document line number through the slice's line map.
#[must_use]
pub fn diff_slice(base: &Slice, head: &Slice) -> SliceDiff {
    let base_text = base.text();
    let head_text = head.text();
    let diff = TextDiff::from_lines(&base_text, &head_text);

    let mut result = SliceDiff::default();
    for change in diff.iter_all_changes() {
        let content = change.value().trim_end_matches('\n').to_string();
        match change.tag() {
            ChangeTag::Insert => {
                let line = change
                    .new_index()
                    .and_then(|i| head.line_numbers.get(i))
                    .copied()
                    .unwrap_or(0);
                result.added.push((line, content));
            }
            ChangeTag::Delete => result.removed.push(content),
            ChangeTag::Equal => {}
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::partition;

    #[test]
    fn identical_slices_produce_empty_diff() {
        let a = partition("## [Unreleased]\n### Added\n- x\n");
        let b = partition("## [Unreleased]\n### Added\n- x\n");
        assert!(diff_slice(&a.unreleased, &b.unreleased).is_empty());
        assert!(diff_slice(&a.released, &b.released).is_empty());
    }

    #[test]
    fn added_lines_carry_head_document_line_numbers() {
        let base = partition("## [Unreleased]\n### Fixed\n");
        let head = partition("## [Unreleased]\n### Fixed\n- Fixed bug X\n");
        let diff = diff_slice(&base.unreleased, &head.unreleased);
        assert_eq!(diff.added, vec![(3, "- Fixed bug X".to_string())]);
        assert!(diff.removed.is_empty());
    }

    #[test]
    fn removed_lines_are_reported_by_content() {
        let base = partition("## [Unreleased]\n### Fixed\n- Old entry\n");
        let head = partition("## [Unreleased]\n### Fixed\n");
        let diff = diff_slice(&base.unreleased, &head.unreleased);
        assert!(diff.added.is_empty());
        assert_eq!(diff.removed, vec!["- Old entry".to_string()]);
    }

    #[test]
    fn whitespace_only_changes_are_changes() {
        let base = partition("## [1.0.0]\n- Initial release\n");
        let head = partition("## [1.0.0]\n- Initial release \n");
        assert!(!diff_slice(&base.released, &head.released).is_empty());
    }
}
