//! Group annotated lines into hunks.

use super::annotate;
use crate::model::{AnnotatedLine, Hunk, HunkLine, LineKind};

/// Parse a single file's patch into hunks.
///
/// Only code lines are kept. Lines before the first hunk header have no hunk
/// to belong to and are dropped. Positions restart at 0 for every hunk.
///
/// # Example
/// ```
/// use review_diff::parser::parse_hunks;
///
/// let hunks = parse_hunks("@@ -1,2 +1,2 @@\n a\n-b\n+c\n");
/// assert_eq!(hunks.len(), 1);
/// assert!(hunks[0].matches_header());
/// ```
pub fn parse_hunks(diff_text: &str) -> Vec<Hunk> {
    annotate(diff_text)
        .into_iter()
        .fold(Vec::new(), |mut hunks: Vec<Hunk>, line| {
            match line.kind {
                LineKind::HunkHeader => hunks.push(Hunk::new(line.raw_text)),
                _ if line.is_code() => {
                    if let Some(hunk) = hunks.last_mut() {
                        let position = hunk.lines.len();
                        hunk.lines.push(HunkLine { position, line });
                    }
                }
                _ => {}
            }
            hunks
        })
}

/// All code lines of all hunks, in order.
pub fn flatten_hunks(hunks: &[Hunk]) -> Vec<&AnnotatedLine> {
    hunks
        .iter()
        .flat_map(|h| h.lines.iter().map(|l| &l.line))
        .collect()
}
