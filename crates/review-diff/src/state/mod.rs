//! State management for the diff renderer.

mod comment_draft;
mod document;
mod renderer_state;
mod selection;

pub use comment_draft::CommentDraft;
pub use document::{DocumentListeners, ListenerId, MouseUpSubscription};
pub use renderer_state::{DiffRendererState, RowVisibility};
pub use selection::DragSelection;
