use chrono::{Datelike, NaiveDate, TimeDelta};

use super::dates::days_between;
use super::range::MAX_SPAN_DAYS;

/// The grid never has fewer columns than this.
pub const MIN_GRID_DAYS: usize = 7;
/// Nor more than this.
pub const MAX_GRID_DAYS: usize = MAX_SPAN_DAYS as usize + 1;

const MONTHS: [&str; 12] = [
    "jan", "fev", "mar", "abr", "mai", "jun", "jul", "ago", "set", "out", "nov", "dez",
];
const WEEKDAYS: [&str; 7] = ["seg", "ter", "qua", "qui", "sex", "sáb", "dom"];

/// Header text for one day column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayLabel {
    pub month: &'static str,
    /// Zero-padded day of month.
    pub day: String,
    pub weekday: &'static str,
}

impl DayLabel {
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            month: MONTHS[date.month0() as usize],
            day: format!("{:02}", date.day()),
            weekday: WEEKDAYS[date.weekday().num_days_from_monday() as usize],
        }
    }
}

impl std::fmt::Display for DayLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.month, self.day, self.weekday)
    }
}

/// One calendar day in the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayColumn {
    pub label: DayLabel,
    pub date: NaiveDate,
    pub index: usize,
}

impl DayColumn {
    pub fn is_weekend(&self) -> bool {
        self.date.weekday().num_days_from_monday() >= 5
    }
}

/// The ordered day columns of the visible window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayGrid {
    pub days: Vec<DayColumn>,
}

impl DayGrid {
    /// One column per day from `start` to `end` inclusive, between
    /// [`MIN_GRID_DAYS`] and [`MAX_GRID_DAYS`] long.
    ///
    /// Stops early at the last representable date.
    pub fn generate(start: NaiveDate, end: NaiveDate) -> Self {
        let span = usize::try_from(days_between(start, end) + 1).unwrap_or(0);
        let count = span.clamp(MIN_GRID_DAYS, MAX_GRID_DAYS);
        let days = (0..count)
            .map_while(|index| {
                let date = start.checked_add_signed(TimeDelta::try_days(index as i64)?)?;
                Some(DayColumn {
                    label: DayLabel::for_date(date),
                    date,
                    index,
                })
            })
            .collect();
        Self { days }
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// First day of the grid (column 0).
    pub fn first_day(&self) -> NaiveDate {
        self.days[0].date
    }

    pub fn last_day(&self) -> NaiveDate {
        self.days[self.days.len() - 1].date
    }

    /// Column index of `date` if it falls inside the grid.
    pub fn column_of(&self, date: NaiveDate) -> Option<usize> {
        let offset = days_between(self.first_day(), date);
        usize::try_from(offset).ok().filter(|&col| col < self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn inclusive_range() {
        let grid = DayGrid::generate(date(2025, 1, 1), date(2025, 1, 10));
        assert_eq!(grid.len(), 10);
        assert_eq!(grid.first_day(), date(2025, 1, 1));
        assert_eq!(grid.last_day(), date(2025, 1, 10));
        assert!(grid.days.iter().enumerate().all(|(i, d)| d.index == i));
    }

    #[test]
    fn short_and_inverted_ranges_get_seven_days() {
        assert_eq!(DayGrid::generate(date(2025, 1, 1), date(2025, 1, 2)).len(), 7);
        let inverted = DayGrid::generate(date(2025, 1, 10), date(2025, 1, 1));
        assert_eq!(inverted.len(), 7);
        assert_eq!(inverted.first_day(), date(2025, 1, 10));
    }

    #[test]
    fn labels() {
        let label = DayLabel::for_date(date(2025, 3, 4));
        assert_eq!(label.to_string(), "mar 04 ter");
        assert_eq!(DayLabel::for_date(date(2025, 12, 28)).to_string(), "dez 28 dom");
    }

    #[test]
    fn column_lookup() {
        let grid = DayGrid::generate(date(2025, 1, 1), date(2025, 1, 10));
        assert_eq!(grid.column_of(date(2025, 1, 1)), Some(0));
        assert_eq!(grid.column_of(date(2025, 1, 10)), Some(9));
        assert_eq!(grid.column_of(date(2024, 12, 31)), None);
        assert_eq!(grid.column_of(date(2025, 1, 11)), None);
    }

    #[test]
    fn far_end_is_capped() {
        let grid = DayGrid::generate(date(2025, 1, 1), date(9999, 12, 31));
        assert_eq!(grid.len(), MAX_GRID_DAYS);
        assert_eq!(grid.first_day(), date(2025, 1, 1));
    }

    #[test]
    fn stops_at_the_last_representable_day() {
        let start = NaiveDate::MAX.pred_opt().unwrap();
        let grid = DayGrid::generate(start, NaiveDate::MAX);
        assert_eq!(grid.len(), 2);
        assert_eq!(grid.last_day(), NaiveDate::MAX);
    }
}
