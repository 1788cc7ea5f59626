use serde::{Deserialize, Serialize};

use super::date::DateValue;

/// Lifecycle status of a project as stored by the workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    #[serde(alias = "Lead")]
    Lead,
    #[serde(alias = "Active")]
    Active,
    #[serde(alias = "Review")]
    Review,
    #[serde(alias = "Completed")]
    Completed,
    #[serde(alias = "Finished")]
    Finished,
}

impl ProjectStatus {
    /// Completed and Finished projects are delivered; they only return to the
    /// timeline through a recurring service window.
    pub fn is_closed(self) -> bool {
        matches!(self, ProjectStatus::Completed | ProjectStatus::Finished)
    }

    /// Default label when no stage record says otherwise.
    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::Lead => "Lead",
            ProjectStatus::Active => "Ativo",
            ProjectStatus::Review => "Revisão",
            ProjectStatus::Completed => "Concluído",
            ProjectStatus::Finished => "Finalizado",
        }
    }

    /// Estimated length of a project without a deadline.
    pub fn estimated_weeks(self) -> i64 {
        match self {
            ProjectStatus::Active => 4,
            ProjectStatus::Completed => 2,
            _ => 3,
        }
    }
}

/// A project record as pushed by the workspace feed. Read-only here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default, alias = "client")]
    pub client_name: String,
    #[serde(default)]
    pub types: Vec<String>,
    /// Single category field used by older records.
    #[serde(default, rename = "type")]
    pub legacy_type: Option<String>,
    pub status: ProjectStatus,
    #[serde(default)]
    pub stage_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateValue>,
    #[serde(default)]
    pub updated_at: Option<DateValue>,
    #[serde(default)]
    pub deadline: Option<DateValue>,
    #[serde(default)]
    pub maintenance_date: Option<DateValue>,
    #[serde(default)]
    pub report_date: Option<DateValue>,
    /// Stored percentage from 0 to 100, only shown as a fallback.
    #[serde(default)]
    pub progress: f32,
}

impl Project {
    pub fn new(id: impl Into<String>, name: impl Into<String>, status: ProjectStatus) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            client_name: String::new(),
            types: Vec::new(),
            legacy_type: None,
            status,
            stage_id: None,
            created_at: None,
            updated_at: None,
            deadline: None,
            maintenance_date: None,
            report_date: None,
            progress: 0.0,
        }
    }

    /// Category names, falling back to the legacy single `type` field.
    pub fn category_names(&self) -> Vec<&str> {
        if self.types.is_empty() {
            self.legacy_type.as_deref().into_iter().collect()
        } else {
            self.types.iter().map(String::as_str).collect()
        }
    }

    /// The first category, which drives color, filtering and recurrence.
    pub fn primary_category(&self) -> Option<&str> {
        self.types
            .first()
            .map(String::as_str)
            .or(self.legacy_type.as_deref())
    }
}
