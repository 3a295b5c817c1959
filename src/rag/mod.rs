mod chunk;
mod engine;
mod index;

use std::path::Path;

use crate::error::AppError;

pub(crate) use chunk::chunk_document;
pub(crate) use engine::QueryEngine;
pub(crate) use index::VectorIndex;

/// Read a plain-text track dataset.
pub(crate) fn load_document(path: &Path) -> Result<String, AppError> {
    let text = std::fs::read_to_string(path).map_err(|source| AppError::DataFile {
        path: path.to_path_buf(),
        source,
    })?;
    if text.trim().is_empty() {
        return Err(AppError::EmptyDocument {
            path: path.to_path_buf(),
        });
    }
    Ok(text)
}
