//! Events emitted by the diff renderer for the host to handle.

use crate::model::CommentAddEvent;

/// Events emitted by the diff renderer.
///
/// The renderer performs no side effects itself. The host forwards comment
/// events to whatever stores or posts review comments.
///
/// # Example
///
/// ```ignore
/// for event in renderer.handle_action(RendererAction::SubmitComment(row)) {
///     match event {
///         RendererEvent::CommentAdded(comment) => review_comments.add(comment),
///         RendererEvent::SelectionCommitted { rows } => status.show(rows.len()),
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RendererEvent {
    /// A non-empty draft was submitted.
    CommentAdded(CommentAddEvent),

    /// A drag ended; `rows` is the full selection after it.
    SelectionCommitted {
        /// Selected row indices, ascending.
        rows: Vec<usize>,
    },
}
