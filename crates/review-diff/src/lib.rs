//! # review-diff
//!
//! Unified diff annotation, an interactive diff renderer for inline review
//! comments, and reconstruction of the code a stored comment refers to.
//!
//! ## Design Principles
//!
//! This crate is **instrumented**: it receives diff text and emits events
//! without storing or posting comments itself. The host decides what a
//! submitted comment means.
//!
//! - [`annotate`] turns patch text into [`AnnotatedLine`]s with old/new line
//!   numbers and a display side.
//! - [`DiffRendererState`] holds hover, inline comment drafts and gutter drag
//!   selection for one rendered diff, and [`DiffRowsWidget`] draws it.
//! - [`extract_context`] finds the lines a [`CommentAnchor`] points at.
//!
//! ## Action-Based Architecture
//!
//! The host maps pointer and key events to [`RendererAction`] variants and
//! dispatches them to the renderer state:
//!
//! ```
//! use review_diff::{DiffRendererState, DocumentListeners, RendererAction, RendererEvent};
//!
//! let document = DocumentListeners::new();
//! let mut state = DiffRendererState::new("@@ -1 +1 @@\n-old\n+new\n");
//! state.mount(&document);
//!
//! state.handle_action(RendererAction::ToggleCommentForm(2));
//! state.handle_action(RendererAction::DraftInsertStr { row: 2, text: "nice".into() });
//!
//! let events = state.handle_action(RendererAction::SubmitComment(2));
//! match &events[0] {
//!     RendererEvent::CommentAdded(comment) => assert_eq!(comment.line_id, "new-1"),
//!     other => panic!("unexpected {:?}", other),
//! }
//! ```

pub mod action;
pub mod context;
pub mod event;
pub mod model;
pub mod parser;
pub mod state;
pub mod traits;
pub mod widget;

// Re-export commonly used types
pub use action::RendererAction;
pub use context::{extract_context, CommentContextExtractor, DEFAULT_CONTEXT_WINDOW};
pub use event::RendererEvent;
pub use model::{
    AnnotatedLine, CommentAddEvent, CommentAnchor, ContextLine, DiffHunkHeader, DiffSide, Hunk,
    LineKind,
};
pub use parser::{annotate, parse_hunks};
pub use state::{DiffRendererState, DocumentListeners, RowVisibility};
pub use traits::{DefaultTheme, ThemeProvider};
pub use widget::{DiffRowsWidget, Hit, HitRegion};
