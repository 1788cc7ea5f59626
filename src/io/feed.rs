use std::path::{Path, PathBuf};
use std::time::{Duration, Instant, SystemTime};

use thiserror::Error;

use crate::model::WorkspaceSnapshot;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("failed to read feed {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("feed {path} is not a valid workspace snapshot: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Load a workspace snapshot from a JSON file.
pub fn load_snapshot(path: &Path) -> Result<WorkspaceSnapshot, FeedError> {
    let json = std::fs::read_to_string(path).map_err(|source| FeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let snapshot: WorkspaceSnapshot = serde_json::from_str(&json).map_err(|source| FeedError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(
        path = %path.display(),
        projects = snapshot.projects.len(),
        categories = snapshot.categories.len(),
        stages = snapshot.stages.len(),
        "workspace snapshot loaded"
    );
    Ok(snapshot)
}

/// Save a snapshot, pretty-printed.
pub fn save_snapshot(snapshot: &WorkspaceSnapshot, path: &Path) -> Result<(), FeedError> {
    let json = serde_json::to_string_pretty(snapshot).map_err(|source| FeedError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, json).map_err(|source| FeedError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Watches a snapshot file and hands back a full replacement when it changes.
#[derive(Debug)]
pub struct FeedWatcher {
    path: PathBuf,
    interval: Duration,
    last_check: Option<Instant>,
    last_modified: Option<SystemTime>,
}

impl FeedWatcher {
    pub fn new(path: impl Into<PathBuf>, interval: Duration) -> Self {
        let path = path.into();
        let last_modified = modified_time(&path);
        Self {
            path,
            interval,
            last_check: Some(Instant::now()),
            last_modified,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check the file if the poll interval has elapsed.
    pub fn poll(&mut self) -> Option<Result<WorkspaceSnapshot, FeedError>> {
        let now = Instant::now();
        if self
            .last_check
            .is_some_and(|last| now.duration_since(last) < self.interval)
        {
            return None;
        }
        self.last_check = Some(now);
        self.check()
    }

    /// Check the file now, regardless of the interval.
    pub fn check(&mut self) -> Option<Result<WorkspaceSnapshot, FeedError>> {
        let modified = modified_time(&self.path);
        if modified.is_none() || modified == self.last_modified {
            return None;
        }
        self.last_modified = modified;
        tracing::debug!(path = %self.path.display(), "feed file changed");
        Some(load_snapshot(&self.path))
    }
}

fn modified_time(path: &Path) -> Option<SystemTime> {
    std::fs::metadata(path).and_then(|m| m.modified()).ok()
}
