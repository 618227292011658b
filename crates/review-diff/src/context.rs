//! Reconstruct the diff lines a stored review comment refers to.
//!
//! Review threads show the commented code under the comment body. Given the
//! file's patch and the comment's anchor this module finds the matching code
//! lines: an explicit range for multi-line comments, or the commented line
//! with a few lines of leading context for single-line ones.
//!
//! An empty result means "nothing to display" and is not an error. It happens
//! when the anchor no longer matches the patch, e.g. after a force push.

use crate::model::{AnnotatedLine, CommentAnchor, ContextLine, DiffSide};
use crate::parser::{annotate_filtered, is_meta_or_file_header_for_context};

/// Lines shown for a single-line comment: the line itself and up to four
/// lines before it.
pub const DEFAULT_CONTEXT_WINDOW: usize = 5;

/// Extracts the commented lines from a patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentContextExtractor {
    window: usize,
}

impl Default for CommentContextExtractor {
    fn default() -> Self {
        Self {
            window: DEFAULT_CONTEXT_WINDOW,
        }
    }
}

impl CommentContextExtractor {
    /// Create an extractor with the default window.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an extractor showing `window` lines for single-line comments.
    /// A window of 0 is treated as 1.
    pub fn with_window(window: usize) -> Self {
        Self {
            window: window.max(1),
        }
    }

    /// Number of lines shown for a single-line comment.
    pub fn window(&self) -> usize {
        self.window
    }

    /// Extract the lines `anchor` refers to.
    pub fn extract(&self, diff_text: &str, anchor: &CommentAnchor) -> Vec<AnnotatedLine> {
        let lines = code_lines(diff_text);

        let range = if anchor.is_multiline() {
            range_bounds(&lines, anchor)
        } else {
            self.single_bounds(&lines, anchor)
        };

        match range {
            Some((start, end)) => lines[start..=end].to_vec(),
            None => {
                log::debug!("No lines match comment anchor {:?}", anchor);
                Vec::new()
            }
        }
    }

    /// Like [`extract`](Self::extract), returning the display view.
    pub fn extract_view(&self, diff_text: &str, anchor: &CommentAnchor) -> Vec<ContextLine> {
        self.extract(diff_text, anchor)
            .iter()
            .map(ContextLine::from)
            .collect()
    }

    fn single_bounds(&self, lines: &[AnnotatedLine], anchor: &CommentAnchor) -> Option<(usize, usize)> {
        // No side-agnostic fallback for single lines
        let end = find_strict(lines, anchor.line, Some(anchor.side))?;
        Some((end.saturating_sub(self.window - 1), end))
    }
}

/// Extract with the default window.
///
/// # Example
/// ```
/// use review_diff::{extract_context, CommentAnchor, DiffSide};
///
/// let diff = "@@ -1,3 +1,3 @@\n a\n b\n-c\n+d";
/// let lines = extract_context(diff, &CommentAnchor::single(DiffSide::Right, 1));
/// assert_eq!(lines.len(), 1);
/// assert_eq!(lines[0].content, "a");
/// ```
pub fn extract_context(diff_text: &str, anchor: &CommentAnchor) -> Vec<AnnotatedLine> {
    CommentContextExtractor::default().extract(diff_text, anchor)
}

/// Code lines as numbered by the context extractor's own pass.
pub fn code_lines(diff_text: &str) -> Vec<AnnotatedLine> {
    annotate_filtered(diff_text, is_meta_or_file_header_for_context)
        .into_iter()
        .filter(AnnotatedLine::is_code)
        .collect()
}

fn range_bounds(lines: &[AnnotatedLine], anchor: &CommentAnchor) -> Option<(usize, usize)> {
    let start_line = anchor.start_line?;

    let strict = find_strict(lines, start_line, anchor.start_side)
        .zip(find_strict(lines, anchor.line, Some(anchor.side)));

    let (start, end) = match strict {
        Some(found) => found,
        None => {
            log::debug!(
                "Strict lookup failed for {}..{}, retrying without side",
                start_line,
                anchor.line
            );
            find_relaxed(lines, start_line).zip(find_relaxed(lines, anchor.line))?
        }
    };

    Some((start.min(end), start.max(end)))
}

/// Index of the line numbered `line_no` on `side` whose own side is `side`.
fn find_strict(lines: &[AnnotatedLine], line_no: u32, side: Option<DiffSide>) -> Option<usize> {
    let side = side?;
    lines
        .iter()
        .position(|l| l.number_on(side) == Some(line_no) && l.side == side)
}

/// Index of the first line numbered `line_no` on either side.
fn find_relaxed(lines: &[AnnotatedLine], line_no: u32) -> Option<usize> {
    lines.iter().position(|l| {
        l.old_line_number == Some(line_no) || l.new_line_number == Some(line_no)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LineKind;
    use pretty_assertions::assert_eq;

    const SMALL: &str = "@@ -1,3 +1,3 @@\n a\n b\n-c\n+d";

    const LONG: &str = "diff --git a/f.txt b/f.txt
--- a/f.txt
+++ b/f.txt
@@ -10,8 +10,8 @@
 l10
 l11
 l12
 l13
-l14
+L14
 l15
 l16
 l17
\\ No newline at end of file
";

    fn contents(lines: &[AnnotatedLine]) -> Vec<&str> {
        lines.iter().map(|l| l.content.as_str()).collect()
    }

    #[test]
    fn test_single_line_at_start_is_clamped() {
        let lines = extract_context(SMALL, &CommentAnchor::single(DiffSide::Right, 1));
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].new_line_number, Some(1));
        assert_eq!(lines[0].content, "a");
        assert_eq!(lines[0].kind, LineKind::Context);
    }

    #[test]
    fn test_range_extraction() {
        let anchor = CommentAnchor::range(DiffSide::Right, 1, DiffSide::Right, 2);
        let lines = extract_context(SMALL, &anchor);
        assert_eq!(contents(&lines), vec!["a", "b"]);
    }

    #[test]
    fn test_reversed_range_is_ordered() {
        let anchor = CommentAnchor::range(DiffSide::Right, 3, DiffSide::Right, 1);
        let lines = extract_context(SMALL, &anchor);
        assert_eq!(contents(&lines), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_single_line_window() {
        let lines = extract_context(LONG, &CommentAnchor::single(DiffSide::Right, 16));
        assert_eq!(contents(&lines), vec!["l13", "l14", "L14", "l15", "l16"]);
    }

    #[test]
    fn test_single_line_left_side() {
        let lines = extract_context(LONG, &CommentAnchor::single(DiffSide::Left, 14));
        assert_eq!(contents(&lines), vec!["l10", "l11", "l12", "l13", "l14"]);
    }

    #[test]
    fn test_single_line_left_side_on_context_line_does_not_match() {
        // Context lines anchor on the right side
        let lines = extract_context(LONG, &CommentAnchor::single(DiffSide::Left, 12));
        assert!(lines.is_empty());
    }

    #[test]
    fn test_custom_window() {
        let extractor = CommentContextExtractor::with_window(2);
        let lines = extractor.extract(LONG, &CommentAnchor::single(DiffSide::Right, 14));
        assert_eq!(contents(&lines), vec!["l14", "L14"]);

        assert_eq!(CommentContextExtractor::with_window(0).window(), 1);
    }

    #[test]
    fn test_cross_side_range() {
        let anchor = CommentAnchor::range(DiffSide::Left, 14, DiffSide::Right, 15);
        let lines = extract_context(LONG, &anchor);
        assert_eq!(contents(&lines), vec!["l14", "L14", "l15"]);
    }

    #[test]
    fn test_range_falls_back_to_side_agnostic_lookup() {
        // Line 12 is a context line, so a LEFT anchor misses the strict lookup
        let anchor = CommentAnchor::range(DiffSide::Left, 12, DiffSide::Right, 13);
        let lines = extract_context(LONG, &anchor);
        assert_eq!(contents(&lines), vec!["l12", "l13"]);
    }

    #[test]
    fn test_range_fallback_then_empty() {
        let anchor = CommentAnchor::range(DiffSide::Left, 12, DiffSide::Right, 99);
        assert!(extract_context(LONG, &anchor).is_empty());
    }

    #[test]
    fn test_single_line_miss_is_empty() {
        assert!(extract_context(LONG, &CommentAnchor::single(DiffSide::Right, 99)).is_empty());
        assert!(extract_context("", &CommentAnchor::single(DiffSide::Right, 1)).is_empty());
    }

    #[test]
    fn test_headers_and_meta_are_excluded() {
        let lines = code_lines(LONG);
        assert_eq!(lines.len(), 9);
        assert!(lines.iter().all(|l| l.is_code()));
        assert!(!lines.iter().any(|l| l.raw_text.starts_with('\\')));
        assert!(!lines.iter().any(|l| l.raw_text.starts_with("diff ")));
    }

    #[test]
    fn test_backslash_in_added_content_is_kept() {
        let diff = "@@ -1 +1 @@\n-a\n+some text with \\ in it\n";
        let lines = extract_context(diff, &CommentAnchor::single(DiffSide::Right, 1));
        assert_eq!(contents(&lines), vec!["a", "some text with \\ in it"]);
    }

    #[test]
    fn test_double_dash_lines_shift_context_numbering() {
        // A removed line starting with "--" is dropped by the context pass
        // before numbering, so later old-side numbers differ from `annotate`.
        let diff = "@@ -1,3 +1,1 @@\n-- comment\n-x\n y\n";

        let annotated = crate::parser::annotate(diff);
        assert_eq!(annotated[2].old_line_number, Some(2));

        let lines = code_lines(diff);
        assert_eq!(contents(&lines), vec!["x", "y"]);
        assert_eq!(lines[0].old_line_number, Some(1));
        assert_eq!(lines[1].old_line_number, Some(2));
    }

    #[test]
    fn test_new_file_patch_skips_extended_headers() {
        let diff = "diff --git a/x b/x
new file mode 100644
index 000..111
--- /dev/null
+++ b/x
@@ -0,0 +1,1 @@
+a
";
        let lines = extract_context(diff, &CommentAnchor::single(DiffSide::Right, 1));
        assert_eq!(contents(&lines), vec!["a"]);
        assert_eq!(lines[0].kind, LineKind::Added);

        assert_eq!(code_lines(diff).len(), 1);
    }

    #[test]
    fn test_extract_is_idempotent() {
        let anchor = CommentAnchor::range(DiffSide::Left, 14, DiffSide::Right, 15);
        assert_eq!(extract_context(LONG, &anchor), extract_context(LONG, &anchor));
    }

    #[test]
    fn test_extract_view() {
        let view = CommentContextExtractor::new()
            .extract_view(SMALL, &CommentAnchor::single(DiffSide::Right, 1));
        assert_eq!(view[0].line_type, "context");
        assert_eq!(view[0].side, DiffSide::Right);
    }
}
