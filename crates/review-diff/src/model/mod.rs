//! Data models for annotated diffs and comment anchoring.

mod anchor;
mod hunk;
mod line;

pub use anchor::{CommentAddEvent, CommentAnchor};
pub use hunk::{DiffHunkHeader, Hunk, HunkHeaderError, HunkLine};
pub use line::{AnnotatedLine, ContextLine, DiffSide, LineKind, ParseSideError};
