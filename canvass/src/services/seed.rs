//! Annotation seed files
//!
//! A seed file is a JSON array of annotation entries, applied in order on
//! startup. It lets a session resume from a snapshot taken with `entries()`.

use std::path::Path;

use crate::core::annotations::AnnotationEntry;
use crate::error::{CanvassError, CanvassResult};

pub fn parse_annotation_seed(json: &str) -> CanvassResult<Vec<AnnotationEntry>> {
    Ok(serde_json::from_str(json)?)
}

pub fn load_annotation_seed(path: &Path) -> CanvassResult<Vec<AnnotationEntry>> {
    let load_error = |reason: String| CanvassError::AnnotationLoad {
        path: path.display().to_string(),
        reason,
    };
    let json = std::fs::read_to_string(path).map_err(|e| load_error(e.to_string()))?;
    serde_json::from_str(&json).map_err(|e| load_error(e.to_string()))
}
