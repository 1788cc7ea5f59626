use std::path::Path;

use chrono::NaiveDate;
use thiserror::Error;

use crate::timeline::TimelineRow;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("nothing to export: the timeline has no rows")]
    Empty,

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_default()
}

/// Export the visible timeline rows to a semicolon-delimited CSV file.
///
/// Columns: Project ; Client ; Category ; Deadline ; Maintenance ; Report ;
/// Progress ; Status. Dates are DD/MM/YYYY and missing dates are blank.
/// Returns the number of rows written.
pub fn export_timeline_csv(rows: &[TimelineRow], path: &Path) -> Result<usize, ExportError> {
    if rows.is_empty() {
        return Err(ExportError::Empty);
    }
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .from_path(path)?;

    wtr.write_record([
        "Project",
        "Client",
        "Category",
        "Deadline",
        "Maintenance",
        "Report",
        "Progress",
        "Status",
    ])?;

    for row in rows {
        let deadline = format_date(row.deadline);
        let maintenance = format_date(row.maintenance);
        let report = format_date(row.report);
        let progress = format!("{:.0}", row.progress);
        wtr.write_record([
            row.name.as_str(),
            row.client.as_str(),
            row.category.as_deref().unwrap_or(""),
            deadline.as_str(),
            maintenance.as_str(),
            report.as_str(),
            progress.as_str(),
            row.status_label.as_str(),
        ])?;
    }

    wtr.flush()?;
    tracing::info!(path = %path.display(), rows = rows.len(), "timeline exported");
    Ok(rows.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::{BarPlacement, ColorBucket, Marker, MarkerKind};

    fn row() -> TimelineRow {
        let deadline = NaiveDate::from_ymd_opt(2025, 7, 3).unwrap();
        TimelineRow {
            project_index: 0,
            id: "p1".into(),
            name: "Loja online".into(),
            client: "ACME".into(),
            category: Some("Web".into()),
            color: ColorBucket::Amber,
            bar: BarPlacement {
                start_column: 0,
                duration: 4,
            },
            progress: 62.4,
            past_fraction: 0.5,
            stored_progress: 40.0,
            overdue: false,
            status_label: "Ativo".into(),
            markers: vec![Marker {
                kind: MarkerKind::Report,
                date: deadline,
                column: 3,
                offset_px: 0.0,
                overdue: false,
            }],
            deadline: Some(deadline),
            maintenance: None,
            report: Some(deadline),
        }
    }

    #[test]
    fn writes_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("timeline.csv");
        assert_eq!(export_timeline_csv(&[row()], &path).unwrap(), 1);
        let written = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = written.lines().collect();
        assert_eq!(lines[0], "Project;Client;Category;Deadline;Maintenance;Report;Progress;Status");
        assert_eq!(lines[1], "Loja online;ACME;Web;03/07/2025;;03/07/2025;62;Ativo");
    }

    #[test]
    fn service_dates_without_a_marker_are_exported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("timeline.csv");
        let mut old = row();
        old.markers.clear();
        old.maintenance = NaiveDate::from_ymd_opt(2025, 5, 2);
        export_timeline_csv(&[old], &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            written.lines().nth(1),
            Some("Loja online;ACME;Web;03/07/2025;02/05/2025;03/07/2025;62;Ativo")
        );
    }

    #[test]
    fn empty_timeline_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = export_timeline_csv(&[], &dir.path().join("x.csv"));
        assert!(matches!(result, Err(ExportError::Empty)));
    }
}
