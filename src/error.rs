use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors of the scenario runner and the command line front-end. The sorts themselves can't fail.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid scenario config: {0}")]
    InvalidConfig(String),
    #[error("unknown sort '{0}', known sorts: {1}")]
    UnknownSort(String, String),
}

impl ScenarioError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScenarioError>;
