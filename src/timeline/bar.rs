//! Bar geometry in day columns.

use chrono::NaiveDate;

use super::dates::{add_days, days_between};
use super::prepared::PreparedProject;

/// Where a project's bar sits in the grid.
///
/// Always satisfies `start_column < grid_len`, `duration >= 1` and
/// `start_column + duration <= grid_len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarPlacement {
    pub start_column: usize,
    pub duration: usize,
}

impl BarPlacement {
    /// One past the last column the bar covers.
    pub fn end_column(&self) -> usize {
        self.start_column + self.duration
    }
}

/// Creation date clamped to the grid start; the grid start when absent.
pub fn effective_start(project: &PreparedProject, grid_start: NaiveDate) -> NaiveDate {
    project
        .dates
        .created
        .map_or(grid_start, |created| created.max(grid_start))
}

/// The deadline, or an estimate from the status when there is none.
pub fn effective_end(project: &PreparedProject, start: NaiveDate) -> NaiveDate {
    project
        .dates
        .deadline
        .unwrap_or_else(|| add_days(start, project.project.status.estimated_weeks() * 7))
}

/// Lay out one project on a grid starting at `grid_start` with `grid_len`
/// columns.
///
/// A bar whose start lands inside the window is stretched back to column 0
/// so every visible project reads as running since tracking began.
pub fn position_bar(project: &PreparedProject, grid_start: NaiveDate, grid_len: usize) -> BarPlacement {
    let grid_len = grid_len.max(1);
    let last = grid_len - 1;

    let start = effective_start(project, grid_start);
    let end = effective_end(project, start);

    let start_column = to_column(days_between(grid_start, start));
    let end_column = to_column(days_between(grid_start, end));

    let duration = (end_column as i64 - start_column as i64 + 1).max(1) as usize;

    let mut start_column = start_column.min(last);
    let mut duration = duration.min(grid_len - start_column).max(1);

    if start_column > 0 {
        start_column = 0;
        duration = end_column.saturating_add(1).min(grid_len);
    }

    BarPlacement {
        start_column,
        duration,
    }
}

fn to_column(offset: i64) -> usize {
    usize::try_from(offset.max(0)).unwrap_or(usize::MAX)
}
