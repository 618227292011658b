//! Main state for the diff renderer.

use super::{CommentDraft, DocumentListeners, DragSelection, ListenerId, MouseUpSubscription};
use crate::action::RendererAction;
use crate::event::RendererEvent;
use crate::model::{AnnotatedLine, CommentAddEvent, LineKind};
use crate::parser::{annotate, is_meta_or_file_header_for_render};
use std::collections::{BTreeMap, BTreeSet};

/// Which non-code rows the renderer shows.
///
/// Meta lines are never shown regardless of these flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowVisibility {
    /// Show `diff `, `---` and `+++` rows.
    pub file_headers: bool,
    /// Show `@@` rows.
    pub hunk_headers: bool,
}

impl Default for RowVisibility {
    fn default() -> Self {
        Self {
            file_headers: true,
            hunk_headers: true,
        }
    }
}

impl RowVisibility {
    fn shows(&self, line: &AnnotatedLine) -> bool {
        if is_meta_or_file_header_for_render(line) {
            return false;
        }
        match line.kind {
            LineKind::FileHeader => self.file_headers,
            LineKind::HunkHeader => self.hunk_headers,
            _ => true,
        }
    }
}

/// State of one diff renderer instance.
///
/// Holds the rendered rows plus the interaction layers on top of them: hover,
/// open comment drafts, and gutter drag selection. Nothing is shared between
/// instances.
#[derive(Debug)]
pub struct DiffRendererState {
    /// Rows in display order.
    rows: Vec<AnnotatedLine>,
    /// Row under the pointer (code rows only).
    hovered: Option<usize>,
    /// Open comment drafts keyed by row.
    drafts: BTreeMap<usize, CommentDraft>,
    /// Drag selection over the gutter.
    selection: DragSelection,
    /// Document mouse-up registration while mounted.
    mouse_up: Option<MouseUpSubscription>,
}

impl DiffRendererState {
    /// Create renderer state for a diff with default row visibility.
    pub fn new(diff_text: &str) -> Self {
        Self::with_visibility(diff_text, RowVisibility::default())
    }

    /// Create renderer state for a diff, hiding the header rows `visibility`
    /// turns off.
    pub fn with_visibility(diff_text: &str, visibility: RowVisibility) -> Self {
        let rows = annotate(diff_text)
            .into_iter()
            .filter(|line| visibility.shows(line))
            .collect();
        Self {
            rows,
            hovered: None,
            drafts: BTreeMap::new(),
            selection: DragSelection::new(),
            mouse_up: None,
        }
    }

    // === Lifecycle ===

    /// Register for document mouse-up events.
    ///
    /// Any previous registration is released first, so mounting twice never
    /// leaves two listeners behind.
    pub fn mount(&mut self, document: &DocumentListeners) {
        self.mouse_up = None;
        let subscription = document.subscribe_mouse_up();
        log::debug!("Diff renderer mounted as listener {}", subscription.id());
        self.mouse_up = Some(subscription);
    }

    /// Release the document registration and abandon any drag in progress.
    pub fn unmount(&mut self) {
        if let Some(subscription) = self.mouse_up.take() {
            log::debug!("Diff renderer listener {} unmounted", subscription.id());
        }
        if self.selection.is_dragging() {
            self.selection.clear();
        }
    }

    /// Whether the renderer currently receives document mouse-up events.
    pub fn is_mounted(&self) -> bool {
        self.mouse_up.is_some()
    }

    /// Consume a mouse release delivered through the document listeners.
    ///
    /// Hosts call this after [`DocumentListeners::dispatch_mouse_up`]. Returns
    /// nothing while unmounted or when no release is pending.
    pub fn process_document_events(&mut self) -> Vec<RendererEvent> {
        let released = self
            .mouse_up
            .as_ref()
            .is_some_and(MouseUpSubscription::take_mouse_up);
        if released {
            self.handle_action(RendererAction::DocumentMouseUp)
        } else {
            Vec::new()
        }
    }

    /// Id of the document listener while mounted.
    pub fn listener_id(&self) -> Option<ListenerId> {
        self.mouse_up.as_ref().map(MouseUpSubscription::id)
    }

    // === Accessors ===

    /// All rendered rows.
    pub fn rows(&self) -> &[AnnotatedLine] {
        &self.rows
    }

    /// Row at `index`.
    pub fn row(&self, index: usize) -> Option<&AnnotatedLine> {
        self.rows.get(index)
    }

    /// Whether a row accepts hover, comments and selection.
    pub fn is_commentable(&self, index: usize) -> bool {
        self.rows.get(index).is_some_and(AnnotatedLine::is_code)
    }

    /// Row under the pointer.
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Draft of the form open on `index`.
    pub fn draft(&self, index: usize) -> Option<&CommentDraft> {
        self.drafts.get(&index)
    }

    /// Whether a comment form is open on `index`.
    pub fn is_form_open(&self, index: usize) -> bool {
        self.drafts.contains_key(&index)
    }

    /// Rows with an open comment form, ascending.
    pub fn open_forms(&self) -> impl Iterator<Item = usize> + '_ {
        self.drafts.keys().copied()
    }

    /// Committed selection.
    pub fn selected_rows(&self) -> &BTreeSet<usize> {
        self.selection.selected()
    }

    /// Drag selection, including any drag in progress.
    pub fn selection(&self) -> &DragSelection {
        &self.selection
    }

    /// Whether `index` should be drawn highlighted.
    pub fn is_highlighted(&self, index: usize) -> bool {
        self.selection.is_highlighted(index)
    }

    // === Actions ===

    /// Handle an action, returning any resulting events.
    ///
    /// The host is responsible for mapping pointer and key events to
    /// [`RendererAction`] variants. Drag actions are ignored while unmounted,
    /// since the release that ends a drag could never arrive.
    pub fn handle_action(&mut self, action: RendererAction) -> Vec<RendererEvent> {
        let mut events = Vec::new();

        if action.is_drag_action() && !self.is_mounted() {
            log::debug!("Ignoring {:?} on unmounted diff renderer", action);
            return events;
        }

        match action {
            // === Hover ===
            RendererAction::HoverLine(index) => {
                self.hovered = self.is_commentable(index).then_some(index);
            }
            RendererAction::ClearHover => {
                self.hovered = None;
            }

            // === Comment Forms ===
            RendererAction::ToggleCommentForm(index) => self.toggle_form(index),
            RendererAction::DraftInsertChar { row, ch } => {
                if let Some(draft) = self.drafts.get_mut(&row) {
                    draft.insert_char(ch);
                }
            }
            RendererAction::DraftInsertStr { row, text } => {
                if let Some(draft) = self.drafts.get_mut(&row) {
                    draft.insert_str(&text);
                }
            }
            RendererAction::DraftBackspace(row) => {
                if let Some(draft) = self.drafts.get_mut(&row) {
                    draft.delete_char_before();
                }
            }
            RendererAction::DraftNewline(row) => {
                if let Some(draft) = self.drafts.get_mut(&row) {
                    draft.insert_newline();
                }
            }
            RendererAction::SubmitComment(row) => {
                if let Some(event) = self.submit(row) {
                    events.push(event);
                }
            }
            RendererAction::CancelComment(row) => {
                self.drafts.remove(&row);
            }

            // === Drag Selection ===
            RendererAction::GutterMouseDown(index) => {
                if self.is_commentable(index) {
                    self.selection.start(index);
                }
            }
            RendererAction::GutterMouseEnter(index) => {
                if self.is_commentable(index) {
                    self.selection.extend(index);
                }
            }
            RendererAction::DocumentMouseUp => {
                if let Some(event) = self.finish_drag() {
                    events.push(event);
                }
            }
        }

        events
    }

    fn toggle_form(&mut self, index: usize) {
        if self.drafts.remove(&index).is_some() {
            return;
        }
        if self.is_commentable(index) {
            self.drafts.insert(index, CommentDraft::new());
        }
    }

    /// Submit the draft of `row`. Blank drafts stay open.
    fn submit(&mut self, row: usize) -> Option<RendererEvent> {
        let draft = self.drafts.get(&row)?;
        if draft.is_empty() {
            return None;
        }

        let line = self.rows.get(row)?;
        let comment = CommentAddEvent::for_line(line, draft.trimmed())?;
        self.drafts.remove(&row);

        log::debug!("Comment added on {}", comment.line_id);
        Some(RendererEvent::CommentAdded(comment))
    }

    fn finish_drag(&mut self) -> Option<RendererEvent> {
        let rows = &self.rows;
        let selected = self
            .selection
            .finish(|index| rows.get(index).is_some_and(AnnotatedLine::is_code))?;

        Some(RendererEvent::SelectionCommitted {
            rows: selected.iter().copied().collect(),
        })
    }
}
