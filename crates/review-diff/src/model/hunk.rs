//! Hunk headers and hunk-grouped lines.

use super::{AnnotatedLine, LineKind};
use regex::Regex;
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;

/// Header pattern used to reset the running line counters.
///
/// Only the two start values are captured; counts are optional and ignored.
static HUNK_START_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@@ -(\d+),?\d* \+(\d+),?\d* @@").expect("valid regex"));

static HUNK_HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"@@\s+-(\d+)(?:,(\d+))?\s+\+(\d+)(?:,(\d+))?\s+@@(.*)").expect("valid regex")
});

/// Errors that can occur when parsing a hunk header.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HunkHeaderError {
    #[error("Not a hunk header: {0:?}")]
    NotAHeader(String),
    #[error("Line number out of range in hunk header: {0:?}")]
    OutOfRange(String),
}

/// A parsed `@@ -a,b +c,d @@ section` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffHunkHeader {
    /// Old file starting line.
    pub old_start: u32,
    /// Number of lines in the old version (1 when omitted).
    pub old_count: u32,
    /// New file starting line.
    pub new_start: u32,
    /// Number of lines in the new version (1 when omitted).
    pub new_count: u32,
    /// Function context after the closing `@@`, trimmed.
    pub section: String,
}

impl DiffHunkHeader {
    /// Extract only the two start values, as the annotator needs them.
    pub fn parse_starts(line: &str) -> Option<(u32, u32)> {
        let caps = HUNK_START_RE.captures(line)?;
        let old = caps[1].parse().ok()?;
        let new = caps[2].parse().ok()?;
        Some((old, new))
    }
}

impl FromStr for DiffHunkHeader {
    type Err = HunkHeaderError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let caps = HUNK_HEADER_RE
            .captures(line)
            .ok_or_else(|| HunkHeaderError::NotAHeader(line.to_string()))?;

        let number = |idx: usize, default: u32| -> Result<u32, HunkHeaderError> {
            match caps.get(idx) {
                Some(m) => m
                    .as_str()
                    .parse()
                    .map_err(|_| HunkHeaderError::OutOfRange(line.to_string())),
                None => Ok(default),
            }
        };

        Ok(Self {
            old_start: number(1, 0)?,
            old_count: number(2, 1)?,
            new_start: number(3, 0)?,
            new_count: number(4, 1)?,
            section: caps
                .get(5)
                .map(|m| m.as_str().trim().to_string())
                .unwrap_or_default(),
        })
    }
}

/// A code line inside a hunk, with its offset from the hunk start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HunkLine {
    /// 0-based position within the hunk.
    pub position: usize,
    pub line: AnnotatedLine,
}

/// A contiguous block of changes introduced by a hunk header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hunk {
    /// Raw header line.
    pub header_text: String,
    /// Parsed header, `None` when the `@@` line could not be parsed.
    pub header: Option<DiffHunkHeader>,
    /// Code lines of this hunk.
    pub lines: Vec<HunkLine>,
}

impl Hunk {
    pub fn new(header_text: impl Into<String>) -> Self {
        let header_text = header_text.into();
        let header = header_text.parse().ok();
        Self {
            header_text,
            header,
            lines: Vec::new(),
        }
    }

    /// Observed (old, new) line counts.
    pub fn counts(&self) -> (u32, u32) {
        self.lines.iter().fold((0, 0), |(old, new), l| {
            (
                old + u32::from(l.line.kind.counts_old()),
                new + u32::from(l.line.kind.counts_new()),
            )
        })
    }

    /// Whether the observed counts agree with the declared header counts.
    pub fn matches_header(&self) -> bool {
        self.header
            .as_ref()
            .is_some_and(|h| self.counts() == (h.old_count, h.new_count))
    }

    /// Number of added lines.
    pub fn additions(&self) -> usize {
        self.lines
            .iter()
            .filter(|l| l.line.kind == LineKind::Added)
            .count()
    }

    /// Number of removed lines.
    pub fn deletions(&self) -> usize {
        self.lines
            .iter()
            .filter(|l| l.line.kind == LineKind::Removed)
            .count()
    }
}
