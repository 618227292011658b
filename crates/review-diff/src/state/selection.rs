//! Gutter drag selection.

use std::collections::BTreeSet;
use std::ops::RangeInclusive;

/// Selected rows plus the drag currently in progress, if any.
///
/// Starting a drag replaces the previous selection. While dragging, the
/// provisional range runs from the start row to the row under the pointer.
/// Finishing the drag merges that range into the selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragSelection {
    /// (start row, current row) while dragging.
    drag: Option<(usize, usize)>,
    selected: BTreeSet<usize>,
}

impl DragSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a new drag at `row`, clearing the committed selection.
    pub fn start(&mut self, row: usize) {
        self.selected.clear();
        self.drag = Some((row, row));
    }

    /// Move the drag's moving end to `row`. Returns false when not dragging.
    pub fn extend(&mut self, row: usize) -> bool {
        match self.drag.as_mut() {
            Some((_, current)) => {
                *current = row;
                true
            }
            None => false,
        }
    }

    /// End the drag, adding the rows of its range accepted by `keep` to the
    /// selection. Returns `None` when no drag was in progress.
    pub fn finish<F>(&mut self, keep: F) -> Option<&BTreeSet<usize>>
    where
        F: Fn(usize) -> bool,
    {
        let range = self.drag_range()?;
        self.drag = None;
        self.selected.extend(range.filter(|&row| keep(row)));
        Some(&self.selected)
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// The provisional range of the current drag.
    pub fn drag_range(&self) -> Option<RangeInclusive<usize>> {
        self.drag
            .map(|(start, current)| start.min(current)..=start.max(current))
    }

    /// Committed selection.
    pub fn selected(&self) -> &BTreeSet<usize> {
        &self.selected
    }

    /// Whether `row` is selected or inside the drag in progress.
    pub fn is_highlighted(&self, row: usize) -> bool {
        self.selected.contains(&row) || self.drag_range().is_some_and(|r| r.contains(&row))
    }

    /// Drop the selection and any drag in progress.
    pub fn clear(&mut self) {
        self.drag = None;
        self.selected.clear();
    }
}
