//! Row widget for rendering an annotated diff.

use crate::action::RendererAction;
use crate::model::{AnnotatedLine, LineKind};
use crate::state::DiffRendererState;
use crate::traits::ThemeProvider;
use ratatui::prelude::*;

/// Minimum width of each line number column.
pub const DEFAULT_LINE_NUMBER_WIDTH: usize = 4;

/// A row on screen: a diff row or the inline draft below one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualRow {
    /// Diff row at this index.
    Line(usize),
    /// Draft of the form open on this diff row.
    Draft(usize),
}

impl VisualRow {
    /// The diff row this screen row belongs to.
    pub fn row(&self) -> usize {
        match self {
            VisualRow::Line(index) | VisualRow::Draft(index) => *index,
        }
    }
}

/// Horizontal part of a row that a pointer is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitRegion {
    /// First column, where the `+` comment button is drawn.
    Affordance,
    /// Line number columns.
    Gutter,
    /// Marker and code.
    Code,
}

/// Result of [`DiffRowsWidget::hit_test`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub row: VisualRow,
    pub region: HitRegion,
}

impl Hit {
    /// Action for a mouse press at this spot: the comment button toggles the
    /// form and the gutter starts a drag. Draft rows and code take none.
    pub fn press_action(&self) -> Option<RendererAction> {
        match (self.row, self.region) {
            (VisualRow::Line(index), HitRegion::Affordance) => {
                Some(RendererAction::ToggleCommentForm(index))
            }
            (VisualRow::Line(index), HitRegion::Gutter) => {
                Some(RendererAction::GutterMouseDown(index))
            }
            _ => None,
        }
    }
}

/// Screen rows in display order, with each open draft directly below its row.
pub fn layout(state: &DiffRendererState) -> Vec<VisualRow> {
    let mut rows = Vec::with_capacity(state.rows().len());
    for index in 0..state.rows().len() {
        rows.push(VisualRow::Line(index));
        if state.is_form_open(index) {
            rows.push(VisualRow::Draft(index));
        }
    }
    rows
}

/// Widget rendering diff rows as `old | new | code`.
///
/// The first column holds a `+` on the hovered row. Row indices delivered to
/// [`DiffRendererState::handle_action`] can be recovered from screen
/// coordinates with [`DiffRowsWidget::hit_test`].
pub struct DiffRowsWidget<'a, T: ThemeProvider> {
    /// Theme provider.
    theme: &'a T,
    /// Number of screen rows scrolled past.
    scroll_offset: usize,
    /// Minimum line number column width.
    min_line_number_width: usize,
}

impl<'a, T: ThemeProvider> DiffRowsWidget<'a, T> {
    /// Create a new diff rows widget.
    pub fn new(theme: &'a T) -> Self {
        Self {
            theme,
            scroll_offset: 0,
            min_line_number_width: DEFAULT_LINE_NUMBER_WIDTH,
        }
    }

    /// Set the vertical scroll offset, in screen rows.
    pub fn scroll(mut self, offset: usize) -> Self {
        self.scroll_offset = offset;
        self
    }

    /// Set the minimum width of the line number columns.
    pub fn min_line_number_width(mut self, width: usize) -> Self {
        self.min_line_number_width = width.max(1);
        self
    }

    /// Map a screen position inside `area` to the row and region drawn there.
    ///
    /// Draft and header rows have no gutter and always report
    /// [`HitRegion::Code`].
    pub fn hit_test(
        &self,
        area: Rect,
        x: u16,
        y: u16,
        state: &DiffRendererState,
    ) -> Option<Hit> {
        if x < area.x || x >= area.right() || y < area.y || y >= area.bottom() {
            return None;
        }
        let offset = self.scroll_offset + (y - area.y) as usize;
        let row = layout(state).get(offset).copied()?;

        let column = (x - area.x) as usize;
        let region = match row {
            VisualRow::Draft(_) => HitRegion::Code,
            VisualRow::Line(index) if !state.row(index).is_some_and(|l| l.is_code()) => {
                HitRegion::Code
            }
            VisualRow::Line(_) if column == 0 => HitRegion::Affordance,
            VisualRow::Line(_) if column < self.gutter_width(state.rows()) => HitRegion::Gutter,
            VisualRow::Line(_) => HitRegion::Code,
        };
        Some(Hit { row, region })
    }

    fn line_number_width(&self, rows: &[AnnotatedLine]) -> usize {
        let widest = rows
            .iter()
            .flat_map(|l| [l.old_line_number, l.new_line_number])
            .flatten()
            .max()
            .map(|n| n.to_string().len())
            .unwrap_or(0);
        widest.max(self.min_line_number_width)
    }

    /// Affordance, two number columns and their separators.
    fn gutter_width(&self, rows: &[AnnotatedLine]) -> usize {
        1 + 2 * self.line_number_width(rows) + 2
    }

    fn render_header(&self, line: &AnnotatedLine, x: u16, y: u16, width: u16, buf: &mut Buffer) {
        let style = if line.kind == LineKind::HunkHeader {
            Style::default()
                .fg(self.theme.hunk_header_foreground())
                .bg(self.theme.hunk_header_background())
        } else {
            Style::default()
                .fg(self.theme.file_header_foreground())
                .add_modifier(Modifier::BOLD)
        };

        buf.set_style(Rect::new(x, y, width, 1), style);
        buf.set_stringn(x, y, &line.raw_text, width as usize, style);
    }

    #[allow(clippy::too_many_arguments)]
    fn render_code(
        &self,
        line: &AnnotatedLine,
        x: u16,
        y: u16,
        width: u16,
        line_no_width: usize,
        is_hovered: bool,
        is_highlighted: bool,
        buf: &mut Buffer,
    ) {
        let bg = if is_highlighted {
            self.theme.selection_background()
        } else if is_hovered {
            self.theme.hover_background()
        } else {
            match line.kind {
                LineKind::Added => self.theme.addition_background(),
                LineKind::Removed => self.theme.deletion_background(),
                _ => self.theme.context_background(),
            }
        };
        let base_style = Style::default().bg(bg);
        buf.set_style(Rect::new(x, y, width, 1), base_style);

        let affordance = if is_hovered { "+" } else { " " };
        let line_no_style = base_style.fg(self.theme.line_number_foreground());
        let old_no = format_line_number(line.old_line_number, line_no_width);
        let new_no = format_line_number(line.new_line_number, line_no_width);

        let prefix = match line.kind {
            LineKind::Added => "+",
            LineKind::Removed => "-",
            _ => " ",
        };
        let prefix_style = match line.kind {
            LineKind::Added => base_style.fg(Color::Green),
            LineKind::Removed => base_style.fg(Color::Red),
            _ => base_style,
        };

        let spans = vec![
            Span::styled(
                affordance,
                base_style
                    .fg(self.theme.comment_affordance_foreground())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(old_no, line_no_style),
            Span::styled(" ", base_style),
            Span::styled(new_no, line_no_style),
            Span::styled(" ", base_style),
            Span::styled(prefix, prefix_style),
            Span::styled(line.content.as_str(), base_style),
        ];
        buf.set_line(x, y, &Line::from(spans), width);
    }

    fn render_draft(&self, body: &str, x: u16, y: u16, width: u16, gutter: u16, buf: &mut Buffer) {
        let style = Style::default().fg(self.theme.draft_foreground());
        let text = if body.trim().is_empty() {
            "> Write a comment...".to_string()
        } else {
            // Newlines would break the single inline row
            format!("> {}", body.replace('\n', " "))
        };

        let start = x.saturating_add(gutter);
        let available = width.saturating_sub(gutter) as usize;
        buf.set_stringn(start, y, text, available, style);
    }
}

/// Right-align a line number in `width` columns, or blank it when absent.
pub fn format_line_number(number: Option<u32>, width: usize) -> String {
    number
        .map(|n| format!("{:>width$}", n, width = width))
        .unwrap_or_else(|| " ".repeat(width))
}

impl<T: ThemeProvider> StatefulWidget for DiffRowsWidget<'_, T> {
    type State = DiffRendererState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        if area.is_empty() {
            return;
        }

        let line_no_width = self.line_number_width(state.rows());
        let gutter = self.gutter_width(state.rows()) as u16;

        let visible = layout(state)
            .into_iter()
            .skip(self.scroll_offset)
            .take(area.height as usize);

        for (offset, visual) in visible.enumerate() {
            let y = area.y + offset as u16;
            match visual {
                VisualRow::Line(index) => {
                    let Some(line) = state.row(index) else {
                        continue;
                    };
                    if line.is_code() {
                        self.render_code(
                            line,
                            area.x,
                            y,
                            area.width,
                            line_no_width,
                            state.hovered() == Some(index),
                            state.is_highlighted(index),
                            buf,
                        );
                    } else {
                        self.render_header(line, area.x, y, area.width, buf);
                    }
                }
                VisualRow::Draft(index) => {
                    if let Some(draft) = state.draft(index) {
                        self.render_draft(&draft.body, area.x, y, area.width, gutter, buf);
                    }
                }
            }
        }
    }
}
