use serde::{Deserialize, Serialize};

use super::project::ProjectStatus;

/// A pipeline stage configured for the workspace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stage {
    #[serde(default)]
    pub id: String,
    pub title: String,
    pub status: ProjectStatus,
    #[serde(default)]
    pub order: i32,
    #[serde(default)]
    pub progress: f32,
}

/// The kind of work a stage represents.
///
/// Stage identifiers are free text in the workspace, so the kind is worked
/// out once when a snapshot is prepared and carried as a value afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StageKind {
    Onboarding,
    Development,
    Review,
    /// A review-status stage where the client asked for changes.
    Adjustments,
    Maintenance,
    Other,
}

impl StageKind {
    /// Classify a stage identifier or title.
    ///
    /// Adjustments is checked before Review: both share the review status and
    /// only the identifier tells them apart.
    pub fn classify(identifier: &str) -> Self {
        let id = identifier.to_lowercase();
        if id.contains("adjustments") || id.contains("ajustes") {
            StageKind::Adjustments
        } else if id.contains("maintenance") || id.contains("manutencao") || id.contains("manutenção") {
            StageKind::Maintenance
        } else if id.contains("onboarding") {
            StageKind::Onboarding
        } else if id.contains("development") || id.contains("desenvolvimento") {
            StageKind::Development
        } else if id.contains("review") || id.contains("revisao") || id.contains("revisão") {
            StageKind::Review
        } else {
            StageKind::Other
        }
    }

    pub fn label(self) -> Option<&'static str> {
        match self {
            StageKind::Onboarding => Some("Onboarding"),
            StageKind::Development => Some("Desenvolvimento"),
            StageKind::Review => Some("Revisão"),
            StageKind::Adjustments => Some("Ajustes"),
            StageKind::Maintenance => Some("Manutenção"),
            StageKind::Other => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjustments_is_not_review() {
        assert_eq!(StageKind::classify("stage-review-adjustments"), StageKind::Adjustments);
        assert_eq!(StageKind::classify("client-review"), StageKind::Review);
    }

    #[test]
    fn classify_known_kinds() {
        assert_eq!(StageKind::classify("Maintenance"), StageKind::Maintenance);
        assert_eq!(StageKind::classify("01-onboarding"), StageKind::Onboarding);
        assert_eq!(StageKind::classify("development"), StageKind::Development);
        assert_eq!(StageKind::classify("kickoff"), StageKind::Other);
        assert_eq!(StageKind::Other.label(), None);
    }
}
