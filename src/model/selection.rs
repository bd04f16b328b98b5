//! Elements currently selected in the editor

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedElement {
    pub id: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SelectedElement {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            extra: Map::new(),
        }
    }
}
