//! Services built on top of the model and query layer
//!
//! - Snapshot loading (JSON / YAML)
//! - Advisory page name/path checks

pub mod naming;
pub mod snapshot;

pub use naming::{check_new_page, PageConflicts};
pub use snapshot::{load_state, parse_state_json, parse_state_yaml};
