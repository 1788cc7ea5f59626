//! Timeline scheduling and layout engine.
//!
//! Pure functions of the feed, the category filter and one sampled "today",
//! except [`pan`], which tracks pointer state across events.

pub mod bar;
pub mod color;
pub mod dates;
pub mod grid;
pub mod layout;
pub mod markers;
pub mod pan;
pub mod pipeline;
pub mod prepared;
pub mod progress;
pub mod range;
pub mod status;

pub use bar::{position_bar, BarPlacement};
pub use color::{color_for, ColorBucket};
pub use dates::{days_between, parse_safe_date};
pub use grid::{DayColumn, DayGrid, DayLabel};
pub use layout::{legend_chips, LegendChip, RenderClock, TimelineLayout, TimelineModel, TimelineRow};
pub use markers::{position_markers, Marker, MarkerKind};
pub use pan::{PanController, PanSettings, PanState, PointerTarget};
pub use pipeline::{is_timeline_eligible, select_projects, sort_key, CategoryFilter};
pub use prepared::{PreparedProject, ProjectDates};
pub use progress::{is_overdue, temporal_progress};
pub use range::{calculate_end_date, calculate_start_date};
pub use status::StageIndex;
