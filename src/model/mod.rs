//! Model layer - the state tree read by the query layer
//!
//! - `Project` - pages and component references
//! - `AppState` - editor state (current selection)
//! - `StoreState` - root holding both

pub mod component;
pub mod page;
pub mod selection;
pub mod state;

pub use component::ComponentRef;
pub use page::Page;
pub use selection::SelectedElement;
pub use state::{AppState, Project, StoreState};
