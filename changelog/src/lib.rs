//! Changelog section classifier.
//!
//! Validates an edited changelog against its base revision: released sections
//! must be byte-identical, the `[Unreleased]` section must change, and every
//! added line is classified by the section and subsection it lands in.

pub mod classifier;
pub mod diff;
pub mod document;
pub mod patterns;
pub mod types;
pub mod validator;

pub use classifier::classify;
pub use diff::{SliceDiff, diff_slice};
pub use document::{Slice, Slices, partition};
pub use types::{
    AddedEntry, Advisory, Placement, RemovedEntry, Section, ValidationReport, Violation,
};
pub use validator::validate;
