pub mod csv_export;
pub mod feed;
pub mod settings;

pub use csv_export::{export_timeline_csv, ExportError};
pub use feed::{load_snapshot, save_snapshot, FeedError, FeedWatcher};
pub use settings::TimelineSettings;
