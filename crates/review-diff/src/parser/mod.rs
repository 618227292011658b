//! Unified diff parsing.

mod annotate;
mod filter;
mod hunks;

pub use annotate::{annotate, annotate_filtered, classify, LineCounters};
pub use filter::{
    is_meta_or_file_header_for_context, is_meta_or_file_header_for_render, NO_NEWLINE_MARKER,
};
pub use hunks::{flatten_hunks, parse_hunks};
