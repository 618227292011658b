//! Subcommand implementations
//!
//! Each command takes the diff text and writes its report to `out`, so the
//! output can be checked without a terminal.

use anyhow::{Context, Result};
use review_diff::widget::format_line_number;
use review_diff::{
    annotate, parse_hunks, AnnotatedLine, CommentAnchor, CommentContextExtractor,
    DiffRendererState, LineKind, RowVisibility,
};
use review_diff_config::ReviewDiffConfig;
use std::io::{Read, Write};
use std::path::Path;

/// Read the diff from a file, or from stdin for `None` and `-`.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read diff from {}", path.display())),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read diff from stdin")?;
            Ok(text)
        }
    }
}

/// Format one row as `old new ±content`, or the raw text for non-code rows.
pub fn format_row(line: &AnnotatedLine, width: usize) -> String {
    if !line.is_code() {
        return line.raw_text.clone();
    }

    let marker = match line.kind {
        LineKind::Added => '+',
        LineKind::Removed => '-',
        _ => ' ',
    };
    format!(
        "{} {} {}{}",
        format_line_number(line.old_line_number, width),
        format_line_number(line.new_line_number, width),
        marker,
        line.content
    )
}

/// Print annotated rows.
///
/// With `rendered`, only the rows the renderer would show are printed,
/// honoring the header visibility settings.
pub fn annotate_cmd(
    diff: &str,
    json: bool,
    rendered: bool,
    config: &ReviewDiffConfig,
    out: &mut impl Write,
) -> Result<()> {
    let lines = if rendered {
        let visibility = RowVisibility {
            file_headers: config.show_file_headers,
            hunk_headers: config.show_hunk_headers,
        };
        DiffRendererState::with_visibility(diff, visibility)
            .rows()
            .to_vec()
    } else {
        annotate(diff)
    };

    log::debug!("Annotated {} rows", lines.len());

    for line in &lines {
        if json {
            writeln!(out, "{}", serde_json::to_string(line)?)?;
        } else {
            writeln!(out, "{}", format_row(line, config.min_line_number_width))?;
        }
    }
    Ok(())
}

/// Print the lines a comment anchor refers to.
pub fn context_cmd(
    diff: &str,
    anchor: &CommentAnchor,
    window: usize,
    json: bool,
    config: &ReviewDiffConfig,
    out: &mut impl Write,
) -> Result<()> {
    let extractor = CommentContextExtractor::with_window(window);

    if json {
        let view = extractor.extract_view(diff, anchor);
        if view.is_empty() {
            log::warn!("No lines match the comment anchor");
        }
        for line in &view {
            writeln!(out, "{}", serde_json::to_string(line)?)?;
        }
        return Ok(());
    }

    let lines = extractor.extract(diff, anchor);
    if lines.is_empty() {
        log::warn!("No lines match the comment anchor");
    }
    for line in &lines {
        writeln!(out, "{}", format_row(line, config.min_line_number_width))?;
    }
    Ok(())
}

/// Print each hunk with its declared and observed line counts.
pub fn hunks_cmd(diff: &str, out: &mut impl Write) -> Result<()> {
    let hunks = parse_hunks(diff);
    let mut mismatches = 0;

    for hunk in &hunks {
        let (old, new) = hunk.counts();
        let declared = hunk
            .header
            .as_ref()
            .map(|h| {
                format!(
                    "-{},{} +{},{}",
                    h.old_start, h.old_count, h.new_start, h.new_count
                )
            })
            .unwrap_or_else(|| "unparsed".to_string());
        let status = if hunk.matches_header() {
            "ok"
        } else {
            mismatches += 1;
            "MISMATCH"
        };

        writeln!(
            out,
            "{}\tdeclared {}\tobserved {},{}\t+{} -{}\t{}",
            hunk.header_text,
            declared,
            old,
            new,
            hunk.additions(),
            hunk.deletions(),
            status
        )?;
    }

    if mismatches > 0 {
        log::warn!("{} of {} hunks disagree with their header", mismatches, hunks.len());
    }
    Ok(())
}
