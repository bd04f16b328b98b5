//! Root state tree - project data separate from editor state

use super::component::ComponentRef;
use super::page::Page;
use super::selection::SelectedElement;
use crate::getters::Getters;
use serde::{Deserialize, Serialize};

/// Project data: pages and the components they reference
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub pages: Vec<Page>,
    #[serde(default)]
    pub components: Vec<ComponentRef>,
}

/// Editor state that is not part of the saved project
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    #[serde(default)]
    pub selected_elements: Vec<SelectedElement>,
}

/// The whole state tree read by the query layer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreState {
    #[serde(default)]
    pub project: Project,
    #[serde(default)]
    pub app: AppState,
}

impl StoreState {
    pub fn new(project: Project, app: AppState) -> Self {
        Self { project, app }
    }

    /// Borrow the query layer over this state
    pub fn getters(&self) -> Getters<'_> {
        Getters::new(self)
    }
}
