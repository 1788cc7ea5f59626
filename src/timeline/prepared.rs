use chrono::NaiveDate;

use super::color::{color_for, ColorBucket};
use super::dates::parse_optional;
use crate::model::{category, Category, Project, StageKind};

/// Parsed temporal fields of a project. `None` means absent or unreadable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectDates {
    pub created: Option<NaiveDate>,
    pub updated: Option<NaiveDate>,
    pub deadline: Option<NaiveDate>,
    pub maintenance: Option<NaiveDate>,
    pub report: Option<NaiveDate>,
}

impl ProjectDates {
    pub fn from_project(project: &Project) -> Self {
        Self {
            created: parse_optional(project.created_at.as_ref()),
            updated: parse_optional(project.updated_at.as_ref()),
            deadline: parse_optional(project.deadline.as_ref()),
            maintenance: parse_optional(project.maintenance_date.as_ref()),
            report: parse_optional(project.report_date.as_ref()),
        }
    }

    pub fn has_service_date(&self) -> bool {
        self.maintenance.is_some() || self.report.is_some()
    }
}

/// A project with everything that only changes with the feed worked out.
///
/// Built once per snapshot so that render passes never re-parse dates or
/// re-inspect stage identifiers.
#[derive(Debug, Clone)]
pub struct PreparedProject {
    pub project: Project,
    pub dates: ProjectDates,
    pub primary_category: Option<String>,
    /// Whether the primary category is flagged recurring.
    pub recurring: bool,
    pub color: ColorBucket,
    pub stage_kind: Option<StageKind>,
}

impl PreparedProject {
    pub fn prepare(project: Project, categories: &[Category]) -> Self {
        let dates = ProjectDates::from_project(&project);
        let primary_category = project.primary_category().map(str::to_owned);
        let recurring = primary_category
            .as_deref()
            .and_then(|name| category::find_category(categories, name))
            .is_some_and(|c| c.is_recurring);
        let color = primary_category
            .as_deref()
            .map(|name| color_for(name, categories))
            .unwrap_or_default();
        let stage_kind = project.stage_id.as_deref().map(StageKind::classify);
        Self {
            project,
            dates,
            primary_category,
            recurring,
            color,
            stage_kind,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.project.status.is_closed()
    }
}

/// Prepare every project in a feed snapshot, keeping feed order.
pub fn prepare_all(projects: &[Project], categories: &[Category]) -> Vec<PreparedProject> {
    projects
        .iter()
        .cloned()
        .map(|p| PreparedProject::prepare(p, categories))
        .collect()
}
