//! Loading a serialized state tree (JSON or YAML)

use crate::error::{Result, StoreError};
use crate::model::StoreState;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Load a state snapshot, picking the format from the file extension
pub fn load_state<P: AsRef<Path>>(path: P) -> Result<StoreState> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_default();

    let state = match extension.as_str() {
        "json" => parse_state_json(&contents)?,
        "yaml" | "yml" => parse_state_yaml(&contents)?,
        _ => return Err(StoreError::UnsupportedFormat(path.display().to_string())),
    };

    debug!(
        path = %path.display(),
        pages = state.project.pages.len(),
        components = state.project.components.len(),
        selected = state.app.selected_elements.len(),
        "loaded state snapshot"
    );

    Ok(state)
}

pub fn parse_state_json(contents: &str) -> Result<StoreState> {
    Ok(serde_json::from_str(contents)?)
}

pub fn parse_state_yaml(contents: &str) -> Result<StoreState> {
    Ok(serde_yaml::from_str(contents)?)
}
