//! Page records stored in the project

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One page of the built site
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub id: String,
    pub name: String,
    pub path: String,
    /// Remaining page fields (layout, children, styles), untouched here
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Page {
    pub fn new(id: impl Into<String>, name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            path: path.into(),
            extra: Map::new(),
        }
    }
}
