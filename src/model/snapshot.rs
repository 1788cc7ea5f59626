use serde::{Deserialize, Serialize};

use super::{Category, Project, Stage};

/// One full-list replacement from the workspace feed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceSnapshot {
    pub projects: Vec<Project>,
    pub categories: Vec<Category>,
    pub stages: Vec<Stage>,
}

impl WorkspaceSnapshot {
    pub fn new(projects: Vec<Project>, categories: Vec<Category>, stages: Vec<Stage>) -> Self {
        Self {
            projects,
            categories,
            stages,
        }
    }
}
