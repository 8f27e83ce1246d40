//! Edit template storage.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use pipstack_models::{Edit, MAIN_TRACK_INDEX, PIP_TRACK_INDEX};

/// Template read/parse failure.
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Failed to read template {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse template {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Template {path} is not a pip edit: {reason}")]
    Invalid { path: PathBuf, reason: String },
}

/// Loads the edit template from disk.
///
/// The template is an immutable deployment artifact. Every [`load`] hands
/// out an owned [`Edit`], so concurrent requests never share a mutable
/// document.
///
/// [`load`]: TemplateStore::load
#[derive(Debug, Clone)]
pub struct TemplateStore {
    path: PathBuf,
}

impl TemplateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the template.
    ///
    /// A template that parses but lacks the pip and main video tracks is
    /// rejected here, so downstream population can rely on both being
    /// present.
    pub async fn load(&self) -> Result<Edit, TemplateError> {
        let data = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| TemplateError::Read {
                path: self.path.clone(),
                source,
            })?;

        let edit: Edit =
            serde_json::from_str(&data).map_err(|source| TemplateError::Parse {
                path: self.path.clone(),
                source,
            })?;

        self.check_shape(&edit)?;

        debug!(path = %self.path.display(), "Loaded edit template");
        Ok(edit)
    }

    fn check_shape(&self, edit: &Edit) -> Result<(), TemplateError> {
        let tracks = &edit.timeline.tracks;

        for (index, name) in [(PIP_TRACK_INDEX, "pip"), (MAIN_TRACK_INDEX, "main video")] {
            let has_clip = tracks.get(index).is_some_and(|t| !t.clips.is_empty());
            if !has_clip {
                return Err(TemplateError::Invalid {
                    path: self.path.clone(),
                    reason: format!("track {index} ({name}) is missing or has no clips"),
                });
            }
        }
        Ok(())
    }
}
