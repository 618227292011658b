//! Annotated diff lines produced by the line annotator.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Which version of the file a line number refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiffSide {
    /// Old file (removals side).
    #[serde(rename = "LEFT")]
    Left,
    /// New file (additions side).
    #[serde(rename = "RIGHT")]
    Right,
}

impl DiffSide {
    /// Convert to GitHub API string representation.
    pub fn as_github_str(&self) -> &'static str {
        match self {
            DiffSide::Left => "LEFT",
            DiffSide::Right => "RIGHT",
        }
    }
}

impl fmt::Display for DiffSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_github_str())
    }
}

/// Error returned when a side string is neither `LEFT` nor `RIGHT`.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid diff side {0:?}, expected LEFT or RIGHT")]
pub struct ParseSideError(pub String);

impl FromStr for DiffSide {
    type Err = ParseSideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "LEFT" => Ok(DiffSide::Left),
            "RIGHT" => Ok(DiffSide::Right),
            _ => Err(ParseSideError(s.to_string())),
        }
    }
}

/// Classification of a single diff line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    /// Added line (`+`).
    Added,
    /// Removed line (`-`).
    Removed,
    /// Unchanged line (` `), or a line without a recognized marker.
    Context,
    /// `\ No newline at end of file` and similar annotations.
    Meta,
    /// `diff `, `---` and `+++` lines.
    FileHeader,
    /// `@@ -a,b +c,d @@` separator. Render-only, never numbered.
    HunkHeader,
}

impl LineKind {
    /// Classify a content line by its leading marker.
    ///
    /// Header and meta prefixes are not considered here; anything that is not
    /// `+`, `-` or ` ` falls back to [`LineKind::Context`].
    pub fn from_marker(first: Option<char>) -> Self {
        match first {
            Some('+') => LineKind::Added,
            Some('-') => LineKind::Removed,
            _ => LineKind::Context,
        }
    }

    /// Lines that carry code and can be hovered, selected and commented on.
    pub fn is_code(&self) -> bool {
        matches!(self, LineKind::Added | LineKind::Removed | LineKind::Context)
    }

    /// Whether this kind consumes an old-file line number.
    pub fn counts_old(&self) -> bool {
        matches!(self, LineKind::Removed | LineKind::Context)
    }

    /// Whether this kind consumes a new-file line number.
    pub fn counts_new(&self) -> bool {
        matches!(self, LineKind::Added | LineKind::Context)
    }

    /// Side used when anchoring comments on a line of this kind.
    pub fn side(&self) -> DiffSide {
        match self {
            LineKind::Removed => DiffSide::Left,
            _ => DiffSide::Right,
        }
    }

    /// Display type string used by review thread views.
    pub fn as_type_str(&self) -> &'static str {
        match self {
            LineKind::Added => "added",
            LineKind::Removed => "removed",
            LineKind::Context => "context",
            LineKind::Meta => "meta",
            LineKind::FileHeader => "file_header",
            LineKind::HunkHeader => "hunk_header",
        }
    }
}

/// A diff line with its classification and line numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotatedLine {
    /// The full diff line including its marker.
    pub raw_text: String,
    /// Line classification.
    pub kind: LineKind,
    /// Line number in the old file (Removed and Context).
    pub old_line_number: Option<u32>,
    /// Line number in the new file (Added and Context).
    pub new_line_number: Option<u32>,
    /// Anchoring side.
    pub side: DiffSide,
    /// Text without the marker for code lines, full text otherwise.
    pub content: String,
}

impl AnnotatedLine {
    /// A header or meta line: no numbers, content is the raw text.
    pub fn header(kind: LineKind, raw: &str) -> Self {
        Self {
            raw_text: raw.to_string(),
            kind,
            old_line_number: None,
            new_line_number: None,
            side: DiffSide::Right,
            content: raw.to_string(),
        }
    }

    /// The line number on the given side.
    pub fn number_on(&self, side: DiffSide) -> Option<u32> {
        match side {
            DiffSide::Left => self.old_line_number,
            DiffSide::Right => self.new_line_number,
        }
    }

    /// Whether the line carries code (Added, Removed or Context).
    pub fn is_code(&self) -> bool {
        self.kind.is_code()
    }

    /// Number used when anchoring a new comment on this line.
    ///
    /// Added lines anchor by their new-file number, everything else by the
    /// old-file number.
    pub fn comment_line_number(&self) -> Option<u32> {
        if self.kind == LineKind::Added {
            self.new_line_number
        } else {
            self.old_line_number
        }
    }
}

/// Read-only view of a line shown under a review thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextLine {
    pub old_line_number: Option<u32>,
    pub new_line_number: Option<u32>,
    pub content: String,
    #[serde(rename = "type")]
    pub line_type: &'static str,
    pub side: DiffSide,
}

impl From<&AnnotatedLine> for ContextLine {
    fn from(line: &AnnotatedLine) -> Self {
        Self {
            old_line_number: line.old_line_number,
            new_line_number: line.new_line_number,
            content: line.content.clone(),
            line_type: line.kind.as_type_str(),
            side: line.side,
        }
    }
}
