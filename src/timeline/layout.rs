//! Per-render assembly of the timeline.
//!
//! [`TimelineModel`] holds what only changes with the feed or the calendar
//! day (prepared projects, the day grid). [`TimelineLayout`] is rebuilt every
//! render pass from the model, the filter and a single [`RenderClock`].

use chrono::{DateTime, Local, NaiveDate};

use super::bar::{effective_start, position_bar, BarPlacement};
use super::color::ColorBucket;
use super::dates::days_between;
use super::grid::DayGrid;
use super::markers::{position_markers, Marker};
use super::pipeline::{is_timeline_eligible, select_projects, CategoryFilter};
use super::prepared::{prepare_all, PreparedProject};
use super::progress::{is_overdue, past_fraction, temporal_progress};
use super::range::{calculate_end_date, calculate_start_date};
use super::status::StageIndex;
use crate::model::{Category, WorkspaceSnapshot};

/// "Now" as seen by one render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderClock {
    pub now: DateTime<Local>,
    pub today: NaiveDate,
}

impl RenderClock {
    /// Sample the wall clock. Call once per frame.
    pub fn sample() -> Self {
        Self::at(Local::now())
    }

    pub fn at(now: DateTime<Local>) -> Self {
        Self {
            now,
            today: now.date_naive(),
        }
    }

    /// A clock for a fixed day, at local midnight.
    pub fn on_day(today: NaiveDate) -> Self {
        let now = today
            .and_hms_opt(0, 0, 0)
            .and_then(|naive| naive.and_local_timezone(Local).earliest())
            .unwrap_or_else(Local::now);
        Self { now, today }
    }
}

/// Feed-derived state, rebuilt on every snapshot and on day rollover.
#[derive(Debug, Clone)]
pub struct TimelineModel {
    pub projects: Vec<PreparedProject>,
    pub categories: Vec<Category>,
    pub stages: StageIndex,
    pub grid: DayGrid,
    /// The day the grid was computed for.
    pub built_for: NaiveDate,
}

impl TimelineModel {
    pub fn build(snapshot: &WorkspaceSnapshot, today: NaiveDate) -> Self {
        let projects = prepare_all(&snapshot.projects, &snapshot.categories);
        let eligible = projects.iter().filter(|p| is_timeline_eligible(p)).count();

        let start = calculate_start_date(&projects, today);
        let end = calculate_end_date(start, &projects);
        let grid = DayGrid::generate(start, end);

        tracing::debug!(
            projects = projects.len(),
            eligible,
            %start,
            %end,
            columns = grid.len(),
            "timeline grid rebuilt"
        );

        Self {
            projects,
            categories: snapshot.categories.clone(),
            stages: StageIndex::new(&snapshot.stages),
            grid,
            built_for: today,
        }
    }

    /// Whether the model was built for an earlier day.
    pub fn is_stale(&self, today: NaiveDate) -> bool {
        self.built_for != today
    }

    /// Row order for a filter. Cache it until the feed or filter changes.
    pub fn select(&self, filter: &CategoryFilter, today: NaiveDate) -> Vec<usize> {
        select_projects(&self.projects, filter, today)
    }

    pub fn find(&self, id: &str) -> Option<&PreparedProject> {
        self.projects.iter().find(|p| p.project.id == id)
    }
}

/// Everything needed to draw one project's row.
#[derive(Debug, Clone)]
pub struct TimelineRow {
    /// Index into [`TimelineModel::projects`].
    pub project_index: usize,
    pub id: String,
    pub name: String,
    pub client: String,
    pub category: Option<String>,
    pub color: ColorBucket,
    pub bar: BarPlacement,
    /// Elapsed share of the deadline interval, 0 to 100.
    pub progress: f32,
    /// Share of the drawn bar at or before today, 0.0 to 1.0.
    pub past_fraction: f32,
    /// Stored percentage from the record.
    pub stored_progress: f32,
    pub overdue: bool,
    pub status_label: String,
    pub markers: Vec<Marker>,
    pub deadline: Option<NaiveDate>,
    /// Service dates as recorded, whether or not they have a marker.
    pub maintenance: Option<NaiveDate>,
    pub report: Option<NaiveDate>,
}

/// A category chip in the legend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegendChip {
    pub name: String,
    pub color: ColorBucket,
    pub selected: bool,
    /// Drawn faded: a filter is active and this chip is not part of it.
    pub dimmed: bool,
}

/// Chips for every category in list order.
pub fn legend_chips(categories: &[Category], filter: &CategoryFilter) -> Vec<LegendChip> {
    categories
        .iter()
        .enumerate()
        .map(|(i, category)| {
            let selected = filter.is_selected(&category.name);
            LegendChip {
                name: category.name.clone(),
                color: ColorBucket::from_index(i),
                selected,
                dimmed: !filter.is_empty() && !selected,
            }
        })
        .collect()
}

/// One render pass worth of timeline geometry.
#[derive(Debug, Clone)]
pub struct TimelineLayout {
    pub rows: Vec<TimelineRow>,
    /// Column of today; may fall outside the grid.
    pub today_column: i64,
    pub legend: Vec<LegendChip>,
    pub clock: RenderClock,
}

impl TimelineLayout {
    /// Lay out the rows selected by `order` (see [`TimelineModel::select`]).
    pub fn build(model: &TimelineModel, order: &[usize], filter: &CategoryFilter, clock: RenderClock) -> Self {
        let grid_start = model.grid.first_day();
        let today_column = days_between(grid_start, clock.today);

        let rows = order
            .iter()
            .filter_map(|&index| model.projects.get(index).map(|p| (index, p)))
            .map(|(index, project)| layout_row(model, index, project, today_column, clock))
            .collect();

        Self {
            rows,
            today_column,
            legend: legend_chips(&model.categories, filter),
            clock,
        }
    }

    /// No rows to draw; the view shows an empty state instead of a grid.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Today's column when it is inside a grid of `grid_len` columns.
    pub fn today_in_grid(&self, grid_len: usize) -> Option<usize> {
        usize::try_from(self.today_column).ok().filter(|&c| c < grid_len)
    }
}

fn layout_row(
    model: &TimelineModel,
    index: usize,
    project: &PreparedProject,
    today_column: i64,
    clock: RenderClock,
) -> TimelineRow {
    let grid_start = model.grid.first_day();
    let bar = position_bar(project, grid_start, model.grid.len());
    let start = effective_start(project, grid_start);
    let overdue = is_overdue(project, clock.today);

    TimelineRow {
        project_index: index,
        id: project.project.id.clone(),
        name: project.project.name.clone(),
        client: project.project.client_name.clone(),
        category: project.primary_category.clone(),
        color: project.color,
        bar,
        progress: temporal_progress(project, start, clock.today),
        past_fraction: past_fraction(bar, today_column),
        stored_progress: project.project.progress.clamp(0.0, 100.0),
        overdue,
        status_label: model.stages.label_for(project, overdue),
        markers: position_markers(project, &model.grid, clock.today),
        deadline: project.dates.deadline,
        maintenance: project.dates.maintenance,
        report: project.dates.report,
    }
}
