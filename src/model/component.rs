//! Reusable component references

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A reusable UI building block, referenced by name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentRef {
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ComponentRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extra: Map::new(),
        }
    }
}
