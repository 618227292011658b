//! Single-pass unified diff annotation.

use crate::model::{AnnotatedLine, DiffHunkHeader, LineKind};

/// Running old/new line numbers threaded through the annotation fold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineCounters {
    pub old_line: u32,
    pub new_line: u32,
}

impl LineCounters {
    /// Counters after processing a line of `kind`.
    fn advance(self, kind: LineKind) -> Self {
        Self {
            old_line: self
                .old_line
                .saturating_add(u32::from(kind.counts_old())),
            new_line: self
                .new_line
                .saturating_add(u32::from(kind.counts_new())),
        }
    }
}

/// Classify a raw diff line on its own, without knowing whether it sits
/// inside a hunk.
///
/// [`annotate`] additionally treats unmarked lines before the first hunk
/// header as file headers.
pub fn classify(raw: &str) -> LineKind {
    if raw.starts_with("@@") {
        LineKind::HunkHeader
    } else if raw.starts_with("diff ") || raw.starts_with("---") || raw.starts_with("+++") {
        LineKind::FileHeader
    } else if raw.starts_with('\\') {
        LineKind::Meta
    } else {
        LineKind::from_marker(raw.chars().next())
    }
}

/// Split diff text into lines.
///
/// A single trailing newline terminates the last line rather than starting an
/// empty one. CRLF line endings are accepted.
fn diff_lines(diff_text: &str) -> impl Iterator<Item = &str> {
    let text = diff_text.strip_suffix('\n').unwrap_or(diff_text);
    let empty = diff_text.is_empty();
    text.split('\n')
        .filter(move |_| !empty)
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}

/// Fold accumulator: the counters plus whether a hunk header was parsed yet.
#[derive(Debug, Clone, Copy, Default)]
struct Cursor {
    counters: LineCounters,
    in_hunk: bool,
}

/// Whether a line carries a `+`, `-` or space marker.
fn has_marker(raw: &str) -> bool {
    matches!(raw.chars().next(), Some('+' | '-' | ' '))
}

/// Annotate one line, returning the cursor for the next line.
fn annotate_line(cursor: Cursor, raw: &str) -> (Cursor, AnnotatedLine) {
    let kind = match classify(raw) {
        // Extended git headers such as `index` or `new file mode`
        LineKind::Context if !cursor.in_hunk && !has_marker(raw) => LineKind::FileHeader,
        kind => kind,
    };
    let counters = cursor.counters;

    match kind {
        LineKind::HunkHeader => {
            let next = match DiffHunkHeader::parse_starts(raw) {
                Some((old_line, new_line)) => Cursor {
                    counters: LineCounters { old_line, new_line },
                    in_hunk: true,
                },
                None => {
                    log::debug!("Unparseable hunk header, keeping counters: {:?}", raw);
                    cursor
                }
            };
            (next, AnnotatedLine::header(kind, raw))
        }
        LineKind::FileHeader | LineKind::Meta => (cursor, AnnotatedLine::header(kind, raw)),
        LineKind::Added | LineKind::Removed | LineKind::Context => {
            let content = if has_marker(raw) { &raw[1..] } else { raw };

            let line = AnnotatedLine {
                raw_text: raw.to_string(),
                kind,
                old_line_number: kind.counts_old().then_some(counters.old_line),
                new_line_number: kind.counts_new().then_some(counters.new_line),
                side: kind.side(),
                content: content.to_string(),
            };
            let next = Cursor {
                counters: counters.advance(kind),
                ..cursor
            };
            (next, line)
        }
    }
}

/// Annotate every line of a unified diff.
///
/// Never fails: malformed input yields header rows and lines numbered from
/// whatever the counters held (zero if no hunk header was parsed).
///
/// # Example
/// ```
/// use review_diff::parser::annotate;
/// use review_diff::LineKind;
///
/// let lines = annotate("@@ -1,1 +1,1 @@\n-old\n+new\n");
/// assert_eq!(lines[1].kind, LineKind::Removed);
/// assert_eq!(lines[1].old_line_number, Some(1));
/// assert_eq!(lines[2].new_line_number, Some(1));
/// ```
pub fn annotate(diff_text: &str) -> Vec<AnnotatedLine> {
    annotate_filtered(diff_text, |_| false)
}

/// Annotate a diff, dropping lines for which `skip` returns true before they
/// are classified. Skipped lines do not advance the counters.
pub fn annotate_filtered<F>(diff_text: &str, skip: F) -> Vec<AnnotatedLine>
where
    F: Fn(&str) -> bool,
{
    let (_, lines) = diff_lines(diff_text).filter(|raw| !skip(raw)).fold(
        (Cursor::default(), Vec::new()),
        |(cursor, mut lines), raw| {
            let (next, line) = annotate_line(cursor, raw);
            lines.push(line);
            (next, lines)
        },
    );
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DiffSide;
    use pretty_assertions::assert_eq;

    const SAMPLE_DIFF: &str = "diff --git a/src/main.rs b/src/main.rs
index abc123..def456 100644
--- a/src/main.rs
+++ b/src/main.rs
@@ -1,4 +1,5 @@ fn main()
 fn main() {
-    println!(\"Hello\");
+    println!(\"Hello,\");
+    println!(\"World\");
 }
\\ No newline at end of file
";

    fn kinds(lines: &[AnnotatedLine]) -> Vec<LineKind> {
        lines.iter().map(|l| l.kind).collect()
    }

    fn numbers(lines: &[AnnotatedLine]) -> Vec<(Option<u32>, Option<u32>)> {
        lines
            .iter()
            .map(|l| (l.old_line_number, l.new_line_number))
            .collect()
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify("@@ -1 +1 @@"), LineKind::HunkHeader);
        assert_eq!(classify("diff --git a/x b/x"), LineKind::FileHeader);
        assert_eq!(classify("--- a/x"), LineKind::FileHeader);
        assert_eq!(classify("+++ b/x"), LineKind::FileHeader);
        assert_eq!(classify("\\ No newline at end of file"), LineKind::Meta);
        assert_eq!(classify("+x"), LineKind::Added);
        assert_eq!(classify("-x"), LineKind::Removed);
        assert_eq!(classify(" x"), LineKind::Context);
        assert_eq!(classify("index abc..def"), LineKind::Context);
        assert_eq!(classify(""), LineKind::Context);
    }

    #[test]
    fn test_annotate_sample() {
        let lines = annotate(SAMPLE_DIFF);

        assert_eq!(
            kinds(&lines),
            vec![
                LineKind::FileHeader,
                LineKind::FileHeader, // index line, no marker
                LineKind::FileHeader,
                LineKind::FileHeader,
                LineKind::HunkHeader,
                LineKind::Context,
                LineKind::Removed,
                LineKind::Added,
                LineKind::Added,
                LineKind::Context,
                LineKind::Meta,
            ]
        );

        assert_eq!(
            numbers(&lines[4..]),
            vec![
                (None, None),
                (Some(1), Some(1)),
                (Some(2), None),
                (None, Some(2)),
                (None, Some(3)),
                (Some(3), Some(4)),
                (None, None),
            ]
        );
    }

    #[test]
    fn test_content_and_side() {
        let lines = annotate(SAMPLE_DIFF);

        let removed = &lines[6];
        assert_eq!(removed.content, "    println!(\"Hello\");");
        assert_eq!(removed.side, DiffSide::Left);

        let added = &lines[7];
        assert_eq!(added.raw_text, "+    println!(\"Hello,\");");
        assert_eq!(added.side, DiffSide::Right);

        // Context uses the right side by convention
        assert_eq!(lines[5].side, DiffSide::Right);

        // Header and meta keep their full text
        assert_eq!(lines[2].content, "--- a/src/main.rs");
        assert_eq!(lines[10].content, "\\ No newline at end of file");

        // Extended headers keep their full text and carry no numbers
        assert_eq!(lines[1].content, "index abc123..def456 100644");
        assert_eq!(lines[1].old_line_number, None);
    }

    #[test]
    fn test_counters_reset_per_hunk() {
        let diff = "@@ -10,2 +20,2 @@\n a\n-b\n+c\n@@ -50,1 +60,2 @@\n x\n+y\n";
        let lines = annotate(diff);

        assert_eq!(
            numbers(&lines),
            vec![
                (None, None),
                (Some(10), Some(20)),
                (Some(11), None),
                (None, Some(21)),
                (None, None),
                (Some(50), Some(60)),
                (None, Some(61)),
            ]
        );
    }

    #[test]
    fn test_no_header_leaves_counters_at_zero() {
        let lines = annotate(" a\n+b\n-c\n");
        assert_eq!(
            numbers(&lines),
            vec![(Some(0), Some(0)), (None, Some(1)), (Some(1), None)]
        );
    }

    #[test]
    fn test_unparseable_header_keeps_counters() {
        let diff = "@@ -5,1 +7,1 @@\n a\n@@ garbage @@\n b\n";
        let lines = annotate(diff);
        assert_eq!(lines[2].kind, LineKind::HunkHeader);
        assert_eq!(numbers(&lines[3..]), vec![(Some(6), Some(8))]);
    }

    #[test]
    fn test_empty_input() {
        assert!(annotate("").is_empty());
    }

    #[test]
    fn test_trailing_newline_is_terminator() {
        assert_eq!(annotate("@@ -1 +1 @@\n a\n").len(), 2);
        assert_eq!(annotate("@@ -1 +1 @@\n a").len(), 2);

        // A blank line in the middle is an unmarked context line
        let lines = annotate("@@ -1,3 +1,3 @@\n a\n\n b\n");
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[2].kind, LineKind::Context);
        assert_eq!(lines[2].content, "");
        assert_eq!(lines[3].old_line_number, Some(3));
    }

    #[test]
    fn test_counts_match_declared_header() {
        let diff = "@@ -3,4 +3,5 @@\n a\n-b\n+c\n+d\n e\n f\n";
        let lines = annotate(diff);
        let old = lines.iter().filter(|l| l.kind.counts_old()).count();
        let new = lines.iter().filter(|l| l.kind.counts_new()).count();
        assert_eq!((old, new), (4, 5));
    }

    #[test]
    fn test_extended_headers_before_first_hunk() {
        let diff = "diff --git a/old.rs b/new.rs
similarity index 90%
rename from old.rs
rename to new.rs
new file mode 100644
--- a/old.rs
+++ b/new.rs
@@ -1,2 +1,2 @@
 keep
unmarked inside hunk
";
        let lines = annotate(diff);
        assert_eq!(
            kinds(&lines[..8]),
            vec![LineKind::FileHeader; 7]
                .into_iter()
                .chain([LineKind::HunkHeader])
                .collect::<Vec<_>>()
        );
        assert!(lines[..8].iter().all(|l| l.old_line_number.is_none()));

        // Inside a hunk an unmarked line is still context
        assert_eq!(lines[9].kind, LineKind::Context);
        assert_eq!(numbers(&lines[9..]), vec![(Some(2), Some(2))]);
    }

    #[test]
    fn test_crlf_line_endings() {
        let lines = annotate("@@ -1,2 +1,2 @@\r\n-a\r\n+b\r\n c\r\n");
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1].content, "a");
        assert_eq!(lines[2].raw_text, "+b");
        assert_eq!(lines[3].content, "c");
        assert_eq!(lines[3].new_line_number, Some(2));
    }

    #[test]
    fn test_annotate_is_idempotent() {
        assert_eq!(annotate(SAMPLE_DIFF), annotate(SAMPLE_DIFF));
    }

    #[test]
    fn test_annotate_filtered_skips_before_numbering() {
        let diff = "@@ -1,3 +1,3 @@\n-- dropped\n a\n-b\n";
        let lines = annotate_filtered(diff, |raw| raw.starts_with("--"));
        assert_eq!(
            numbers(&lines),
            vec![(None, None), (Some(1), Some(1)), (Some(2), None)]
        );

        // Without the filter the double-dash line is a removal and shifts numbers
        let lines = annotate(diff);
        assert_eq!(lines[1].kind, LineKind::Removed);
        assert_eq!(lines[2].old_line_number, Some(2));
    }
}
