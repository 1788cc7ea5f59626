use chrono::NaiveDate;

use super::grid::DayGrid;
use super::prepared::PreparedProject;

/// Horizontal shift applied to each marker when two share a column.
pub const COLLISION_OFFSET_PX: f32 = 12.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerKind {
    Maintenance,
    Report,
}

impl MarkerKind {
    pub fn label(self) -> &'static str {
        match self {
            MarkerKind::Maintenance => "Manutenção",
            MarkerKind::Report => "Relatório",
        }
    }
}

/// A milestone glyph on a project's row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub kind: MarkerKind,
    pub date: NaiveDate,
    pub column: usize,
    /// Pixel shift from the column center.
    pub offset_px: f32,
    pub overdue: bool,
}

/// Place the maintenance and report markers of one project.
///
/// Dates outside the grid produce no marker. When both land in the same
/// column they are pushed apart symmetrically so neither hides the other.
pub fn position_markers(project: &PreparedProject, grid: &DayGrid, today: NaiveDate) -> Vec<Marker> {
    let candidates = [
        (MarkerKind::Maintenance, project.dates.maintenance),
        (MarkerKind::Report, project.dates.report),
    ];

    let mut markers: Vec<Marker> = candidates
        .into_iter()
        .filter_map(|(kind, date)| {
            let date = date?;
            let column = grid.column_of(date)?;
            Some(Marker {
                kind,
                date,
                column,
                offset_px: 0.0,
                overdue: date < today,
            })
        })
        .collect();

    if let [first, second] = markers.as_mut_slice() {
        if first.column == second.column {
            first.offset_px = -COLLISION_OFFSET_PX;
            second.offset_px = COLLISION_OFFSET_PX;
        }
    }

    markers
}
