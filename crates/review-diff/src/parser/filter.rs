//! Line filters applied by the two consumers of the annotator.
//!
//! The diff renderer and the comment context extractor each drop a slightly
//! different set of lines. Both rules are kept as they are, side by side; the
//! tests below pin the places where they disagree.

use crate::model::{AnnotatedLine, LineKind};

/// Text of the meta line git emits when a file lacks a trailing newline.
pub const NO_NEWLINE_MARKER: &str = "No newline at end of file";

/// Lines the diff renderer never shows.
///
/// Drops meta lines, and any line whose trimmed text mentions the missing
/// trailing newline, whatever its marker.
pub fn is_meta_or_file_header_for_render(line: &AnnotatedLine) -> bool {
    line.kind == LineKind::Meta || line.raw_text.trim().contains(NO_NEWLINE_MARKER)
}

/// Lines the context extractor removes before numbering.
///
/// Works on raw text: `\` meta lines, `+++` headers and anything starting with
/// `--`. Note the `--` test, which is looser than the `---` file-header test
/// and also catches removed lines whose content starts with `-`.
pub fn is_meta_or_file_header_for_context(raw: &str) -> bool {
    raw.starts_with('\\') || raw.starts_with("+++") || raw.starts_with("--")
}
