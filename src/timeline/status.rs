use std::collections::HashMap;

use crate::model::{ProjectStatus, Stage};

use super::prepared::PreparedProject;

pub const OVERDUE_LABEL: &str = "Atrasado";

/// Stage titles keyed for label lookup. Built once per snapshot.
#[derive(Debug, Clone, Default)]
pub struct StageIndex {
    by_id: HashMap<String, String>,
    /// First stage title per status, by stage order.
    by_status: HashMap<ProjectStatus, String>,
}

impl StageIndex {
    pub fn new(stages: &[Stage]) -> Self {
        let mut ordered: Vec<&Stage> = stages.iter().collect();
        ordered.sort_by_key(|s| s.order);

        let mut by_status = HashMap::new();
        for stage in &ordered {
            by_status
                .entry(stage.status)
                .or_insert_with(|| stage.title.clone());
        }
        let by_id = stages
            .iter()
            .filter(|s| !s.id.is_empty())
            .map(|s| (s.id.clone(), s.title.clone()))
            .collect();

        Self { by_id, by_status }
    }

    /// Human-readable status for a row.
    pub fn label_for(&self, project: &PreparedProject, overdue: bool) -> String {
        if overdue {
            return OVERDUE_LABEL.to_string();
        }
        if let Some(title) = project
            .project
            .stage_id
            .as_deref()
            .and_then(|id| self.by_id.get(id))
        {
            return title.clone();
        }
        if let Some(label) = project.stage_kind.and_then(|kind| kind.label()) {
            return label.to_string();
        }
        self.by_status
            .get(&project.project.status)
            .cloned()
            .unwrap_or_else(|| project.project.status.label().to_string())
    }
}
