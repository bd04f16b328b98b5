//! Derived, read-only queries over the state tree
//!
//! Index queries return `Option<usize>` and record queries return
//! `Option<&T>`; `None` always means "not found". Every scan is first-match
//! in sequence order, and nothing is cached: each call reads the current
//! state.

use crate::model::{ComponentRef, Page, StoreState};

/// Query layer borrowing a [`StoreState`]
///
/// Composite queries (`get_page_by_id`, `page_exists`, ...) are built on top
/// of the index queries of the same struct.
#[derive(Debug, Clone, Copy)]
pub struct Getters<'a> {
    state: &'a StoreState,
}

impl<'a> Getters<'a> {
    pub fn new(state: &'a StoreState) -> Self {
        Self { state }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Pages
    // ─────────────────────────────────────────────────────────────────────────

    /// Position of the first page with the given id
    pub fn get_page_index_by_id(&self, id: &str) -> Option<usize> {
        self.state.project.pages.iter().position(|page| page.id == id)
    }

    pub fn get_page_by_id(&self, id: &str) -> Option<&'a Page> {
        let index = self.get_page_index_by_id(id)?;
        self.state.project.pages.get(index)
    }

    pub fn page_exists(&self, id: &str) -> bool {
        self.get_page_index_by_id(id).is_some()
    }

    /// Whether any page is already routed at `path`
    pub fn path_in_use(&self, path: &str) -> bool {
        self.state.project.pages.iter().any(|page| page.path == path)
    }

    /// Whether any page already carries `name`
    pub fn name_in_use(&self, name: &str) -> bool {
        self.state.project.pages.iter().any(|page| page.name == name)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Selection
    // ─────────────────────────────────────────────────────────────────────────

    pub fn get_selected_el_index_by_id(&self, id: &str) -> Option<usize> {
        self.state
            .app
            .selected_elements
            .iter()
            .position(|el| el.id == id)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Components
    // ─────────────────────────────────────────────────────────────────────────

    /// Position of the first component registered under `name`
    pub fn get_component_ref_index_by_name(&self, name: &str) -> Option<usize> {
        self.state
            .project
            .components
            .iter()
            .position(|component| component.name == name)
    }

    pub fn get_component_ref_by_name(&self, name: &str) -> Option<&'a ComponentRef> {
        let index = self.get_component_ref_index_by_name(name)?;
        self.get_component_ref_by_index(index)
    }

    /// Direct positional fetch; out of range yields `None`
    pub fn get_component_ref_by_index(&self, index: usize) -> Option<&'a ComponentRef> {
        self.state.project.components.get(index)
    }

    pub fn component_exist(&self, name: &str) -> bool {
        self.get_component_ref_index_by_name(name).is_some()
    }
}
