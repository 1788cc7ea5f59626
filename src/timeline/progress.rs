//! Elapsed-time overlay for a bar.
//!
//! The overlay is measured against the render pass's `today`, not the stored
//! percentage, so it keeps up with the now line while the app stays open.

use chrono::NaiveDate;

use super::bar::BarPlacement;
use super::dates::{add_days, days_between};
use super::prepared::PreparedProject;

/// Share of the interval from `start` to the deadline that has elapsed, in
/// percent.
///
/// `start` is the bar's effective start. Accrual begins the day after it.
pub fn temporal_progress(project: &PreparedProject, start: NaiveDate, today: NaiveDate) -> f32 {
    let Some(deadline) = project.dates.deadline else {
        return 0.0;
    };
    if project.is_closed() || deadline < today || deadline < start {
        return 100.0;
    }
    if start == deadline {
        return if today >= deadline { 100.0 } else { 0.0 };
    }

    let anchor = add_days(start, 1);
    let reference = today.max(anchor);
    let elapsed = days_between(start, reference) as f32;
    let total = days_between(start, deadline) as f32;
    (elapsed / total * 100.0).clamp(0.0, 100.0)
}

/// Whether the deadline has passed on an open project.
pub fn is_overdue(project: &PreparedProject, today: NaiveDate) -> bool {
    !project.is_closed() && project.dates.deadline.is_some_and(|deadline| deadline < today)
}

/// Share of a bar's drawn columns at or before the today column, 0.0 to 1.0.
///
/// `today_column` may fall outside the grid; columns before the grid count as
/// nothing elapsed, columns past it as everything.
pub fn past_fraction(bar: BarPlacement, today_column: i64) -> f32 {
    let elapsed = (today_column + 1 - bar.start_column as i64).clamp(0, bar.duration as i64);
    elapsed as f32 / bar.duration as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProjectStatus;
    use crate::timeline::prepared::fixtures::*;
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, 10).unwrap()
    }

    fn day(n: i64) -> NaiveDate {
        today() + Duration::days(n)
    }

    fn with_deadline(status: ProjectStatus, deadline: Option<NaiveDate>) -> PreparedProject {
        PreparedProject::prepare(dated(project("p", status), None, deadline, None, None), &[])
    }

    #[test]
    fn no_deadline_is_zero() {
        let p = with_deadline(ProjectStatus::Active, None);
        assert_eq!(temporal_progress(&p, day(-3), today()), 0.0);
        assert!(!is_overdue(&p, today()));
    }

    #[test]
    fn closed_is_full() {
        let p = with_deadline(ProjectStatus::Finished, Some(day(20)));
        assert_eq!(temporal_progress(&p, day(-3), today()), 100.0);
        assert!(!is_overdue(&with_deadline(ProjectStatus::Completed, Some(day(-2))), today()));
    }

    #[test]
    fn overdue_is_full() {
        let p = with_deadline(ProjectStatus::Active, Some(day(-5)));
        assert_eq!(temporal_progress(&p, day(-7), today()), 100.0);
        assert!(is_overdue(&p, today()));
    }

    #[test]
    fn deadline_before_start_is_full() {
        let p = with_deadline(ProjectStatus::Active, Some(day(2)));
        assert_eq!(temporal_progress(&p, day(4), today()), 100.0);
    }

    #[test]
    fn zero_length_interval() {
        let p = with_deadline(ProjectStatus::Active, Some(today()));
        assert_eq!(temporal_progress(&p, today(), today()), 100.0);
        let p = with_deadline(ProjectStatus::Active, Some(day(3)));
        assert_eq!(temporal_progress(&p, day(3), today()), 0.0);
    }

    #[test]
    fn elapsed_share() {
        let p = with_deadline(ProjectStatus::Active, Some(day(6)));
        // Started four days ago, ten-day interval.
        assert_eq!(temporal_progress(&p, day(-4), today()), 40.0);
    }

    #[test]
    fn grace_day_after_start() {
        let p = with_deadline(ProjectStatus::Active, Some(day(10)));
        // Starting today still counts one day of the ten.
        assert_eq!(temporal_progress(&p, today(), today()), 10.0);
        // A future start is measured from its own anchor.
        assert_eq!(temporal_progress(&p, day(5), today()), 20.0);
    }

    #[test]
    fn always_in_range() {
        for start in -10..10 {
            for deadline in -10..10 {
                for status in [ProjectStatus::Active, ProjectStatus::Completed, ProjectStatus::Lead] {
                    let p = with_deadline(status, Some(day(deadline)));
                    let value = temporal_progress(&p, day(start), today());
                    assert!((0.0..=100.0).contains(&value), "{start} {deadline} {value}");
                }
            }
        }
    }

    #[test]
    fn past_fraction_of_bar() {
        let bar = BarPlacement {
            start_column: 0,
            duration: 10,
        };
        assert_eq!(past_fraction(bar, -1), 0.0);
        assert_eq!(past_fraction(bar, 0), 0.1);
        assert_eq!(past_fraction(bar, 4), 0.5);
        assert_eq!(past_fraction(bar, 40), 1.0);
    }
}
