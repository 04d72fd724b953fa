use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::document::CutsceneDocument;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to read cutscene document {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cutscene document {path} is invalid at {field_path}: {source}")]
    Parse {
        path: PathBuf,
        field_path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Reads and parses a cutscene document. Callers log the error and keep
/// their previous state on failure; a broken document never reaches the
/// sequencer.
pub fn load_document(path: &Path) -> Result<CutsceneDocument, DocumentError> {
    let raw = fs::read_to_string(path).map_err(|source| DocumentError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let document = parse_document(&raw).map_err(|(field_path, source)| DocumentError::Parse {
        path: path.to_path_buf(),
        field_path,
        source,
    })?;
    info!(
        name = %document.name,
        scene_count = document.scenes.len(),
        path = %path.display(),
        "cutscene_document_loaded"
    );
    Ok(document)
}

fn parse_document(raw: &str) -> Result<CutsceneDocument, (String, serde_json::Error)> {
    let mut deserializer = serde_json::Deserializer::from_str(raw);
    match serde_path_to_error::deserialize::<_, CutsceneDocument>(&mut deserializer) {
        Ok(document) => Ok(document),
        Err(error) => {
            let mut path = error.path().to_string();
            if path.is_empty() || path == "." {
                path = ".".to_string();
            }
            Err((path, error.into_inner()))
        }
    }
}
