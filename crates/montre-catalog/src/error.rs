use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse JSON {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("missing required bundle file: {path}")]
    MissingFile { path: PathBuf },

    #[error("unknown slot {name:?} in {path}")]
    UnknownSlot { path: PathBuf, name: String },

    #[error("duplicate option id {id:?} for slot {slot} in {path}")]
    DuplicateOption {
        path: PathBuf,
        slot: montre_model::Slot,
        id: String,
    },
}

impl CatalogError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }
}
