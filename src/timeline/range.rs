//! Visible window of the day grid.

use chrono::NaiveDate;

use super::dates::add_days;
use super::pipeline::is_timeline_eligible;
use super::prepared::PreparedProject;

/// How far back the window may reach from today.
pub const MAX_LOOKBACK_DAYS: i64 = 7;
/// Days added after the last dated milestone.
pub const TRAILING_BUFFER_DAYS: i64 = 3;
/// Window length when nothing is dated.
pub const DEFAULT_SPAN_DAYS: i64 = 7;
/// Longest window after `start`. Far-off sentinel deadlines are cut here.
pub const MAX_SPAN_DAYS: i64 = 730;

/// First day of the window.
///
/// The earliest creation, deadline, maintenance or report date among
/// eligible projects, never more than a week before `today` and never after
/// it.
pub fn calculate_start_date(projects: &[PreparedProject], today: NaiveDate) -> NaiveDate {
    let earliest = projects
        .iter()
        .filter(|p| is_timeline_eligible(p))
        .flat_map(|p| {
            let d = &p.dates;
            [d.created, d.deadline, d.maintenance, d.report]
        })
        .flatten()
        .min()
        .unwrap_or(today);

    let floor = add_days(today, -MAX_LOOKBACK_DAYS);
    earliest.clamp(floor, today)
}

/// Last day of the window: the latest deadline, maintenance or report date
/// across all `projects` plus a short buffer, or a week after `start` when
/// nothing is dated.
///
/// Never more than [`MAX_SPAN_DAYS`] after `start`.
pub fn calculate_end_date(start: NaiveDate, projects: &[PreparedProject]) -> NaiveDate {
    let end = projects
        .iter()
        .flat_map(|p| {
            let d = &p.dates;
            [d.deadline, d.maintenance, d.report]
        })
        .flatten()
        .max()
        .map(|latest| add_days(latest, TRAILING_BUFFER_DAYS))
        .unwrap_or_else(|| add_days(start, DEFAULT_SPAN_DAYS));
    end.min(add_days(start, MAX_SPAN_DAYS))
}
