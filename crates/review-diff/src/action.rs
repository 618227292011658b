//! Diff Renderer Actions
//!
//! Tagged actions that the diff renderer can process. The host maps its
//! pointer and keyboard events to these actions and dispatches them to
//! [`DiffRendererState::handle_action`](crate::state::DiffRendererState::handle_action).
//!
//! Every `usize` is a row index into the rendered rows.

/// Actions that can be performed on the diff renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RendererAction {
    // === Hover ===
    /// Pointer entered a row
    HoverLine(usize),
    /// Pointer left the diff
    ClearHover,

    // === Comment Forms ===
    /// Open or close the inline comment form of a row
    ToggleCommentForm(usize),
    /// Insert a character into a row's draft
    DraftInsertChar { row: usize, ch: char },
    /// Insert text into a row's draft
    DraftInsertStr { row: usize, text: String },
    /// Delete character before the cursor in a row's draft
    DraftBackspace(usize),
    /// Insert newline in a row's draft
    DraftNewline(usize),
    /// Submit a row's draft
    SubmitComment(usize),
    /// Close a row's form and discard its draft
    CancelComment(usize),

    // === Drag Selection ===
    /// Mouse button pressed on a row's line-number gutter
    GutterMouseDown(usize),
    /// Pointer entered a row's line-number gutter
    GutterMouseEnter(usize),
    /// Mouse button released anywhere in the document
    DocumentMouseUp,
}

impl RendererAction {
    /// Check if this action belongs to a drag gesture
    pub fn is_drag_action(&self) -> bool {
        matches!(
            self,
            RendererAction::GutterMouseDown(_)
                | RendererAction::GutterMouseEnter(_)
                | RendererAction::DocumentMouseUp
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_drag_action() {
        assert!(RendererAction::GutterMouseDown(0).is_drag_action());
        assert!(RendererAction::DocumentMouseUp.is_drag_action());
        assert!(!RendererAction::ClearHover.is_drag_action());
    }
}
