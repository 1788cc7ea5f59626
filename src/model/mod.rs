pub mod category;
pub mod date;
pub mod project;
pub mod snapshot;
pub mod stage;
pub mod timeline;

pub use category::Category;
pub use date::DateValue;
pub use project::{Project, ProjectStatus};
pub use snapshot::WorkspaceSnapshot;
pub use stage::{Stage, StageKind};
pub use timeline::TimelineViewport;
