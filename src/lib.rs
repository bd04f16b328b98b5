//! pagestore - read-only queries over a page builder's project state
//!
//! The state tree ([`StoreState`]) is built and mutated elsewhere. This crate
//! derives lookups from it: pages by id, components by name or index,
//! selected elements by id, and the name/path checks used before adding a
//! page.

pub mod config;
pub mod error;
pub mod getters;
pub mod logging;
pub mod model;
pub mod query;
pub mod services;

pub use error::{Result, StoreError};
pub use getters::Getters;
pub use model::{AppState, ComponentRef, Page, Project, SelectedElement, StoreState};
pub use query::{Query, QueryName, QueryOutput};
