//! Ratatui widgets for the diff renderer.

mod diff_rows;

pub use diff_rows::{
    format_line_number, layout, DiffRowsWidget, Hit, HitRegion, VisualRow,
    DEFAULT_LINE_NUMBER_WIDTH,
};
