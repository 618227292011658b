//! Comment anchors and the events emitted when a comment is added.

use super::{AnnotatedLine, DiffSide, LineKind};
use serde::{Deserialize, Serialize};

/// Where a stored review comment is anchored in the diff.
///
/// Owned by the review-comment collaborator and passed in read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentAnchor {
    /// End line of the anchor (in the file version given by `side`).
    pub line: u32,
    /// Which file version `line` refers to.
    pub side: DiffSide,
    /// For multi-line comments: starting line.
    #[serde(default)]
    pub start_line: Option<u32>,
    /// For multi-line comments: side of `start_line`.
    #[serde(default)]
    pub start_side: Option<DiffSide>,
}

impl CommentAnchor {
    /// Create a single-line anchor.
    pub fn single(side: DiffSide, line: u32) -> Self {
        Self {
            line,
            side,
            start_line: None,
            start_side: None,
        }
    }

    /// Create a range anchor spanning `start_line` to `end_line`.
    pub fn range(start_side: DiffSide, start_line: u32, side: DiffSide, end_line: u32) -> Self {
        Self {
            line: end_line,
            side,
            start_line: Some(start_line),
            start_side: Some(start_side),
        }
    }

    /// Whether this anchor covers more than one line.
    ///
    /// A start that is identical to the end (same line, same side) is a
    /// single-line anchor.
    pub fn is_multiline(&self) -> bool {
        match self.start_line {
            Some(start) => start != self.line || self.start_side != Some(self.side),
            None => false,
        }
    }
}

/// A comment submitted from an inline draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentAddEvent {
    /// Old-file number for removed/context lines, new-file number for additions.
    pub line: u32,
    /// Whether `line` is a new-file number.
    pub is_new_line: bool,
    /// Trimmed comment body.
    pub content: String,
    /// `new-<n>` or `old-<n>`.
    pub line_id: String,
}

impl CommentAddEvent {
    /// Build the event for a comment on `line`.
    ///
    /// Returns `None` for header and meta lines, which carry no numbers.
    pub fn for_line(line: &AnnotatedLine, content: impl Into<String>) -> Option<Self> {
        if !line.is_code() {
            return None;
        }
        let number = line.comment_line_number()?;
        let is_new_line = line.kind == LineKind::Added;
        let prefix = if is_new_line { "new" } else { "old" };
        Some(Self {
            line: number,
            is_new_line,
            content: content.into(),
            line_id: format!("{}-{}", prefix, number),
        })
    }
}
