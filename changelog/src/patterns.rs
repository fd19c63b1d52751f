use once_cell::sync::Lazy;
use regex::Regex;

/// Any `## ` section heading. `###` subsection headings do not match because
/// the character after `##` must be whitespace.
pub static SECTION_HEADING_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^##\s").expect("Failed to compile section heading regex"));

pub static UNRELEASED_HEADING_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^##\s*\[\s*(?:un|un-)?released\s*\]")
        .expect("Failed to compile unreleased heading regex")
});

pub static RELEASED_HEADING_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^##\s*\[\s*(\d+\.\d+\.\d+[^\]]*?)\s*\]")
        .expect("Failed to compile released heading regex")
});

pub static SUBSECTION_HEADING_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^###\s+(.+)").expect("Failed to compile subsection heading regex"));

pub static ENTRY_LINE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-\s+(.+)").expect("Failed to compile entry line regex"));
