pub mod dialogs;
pub mod legend;
pub mod project_list;
pub mod theme;
pub mod timeline_chart;
pub mod toolbar;
