//! Advisory name/path checks run before a page is added
//!
//! Nothing here enforces uniqueness. The report tells the caller which
//! fields collide; rejecting or renaming is up to the caller.

use crate::getters::Getters;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PageConflicts {
    pub name_in_use: bool,
    pub path_in_use: bool,
}

impl PageConflicts {
    /// True when the page can be added without clashing
    pub fn is_clear(&self) -> bool {
        !self.name_in_use && !self.path_in_use
    }
}

pub fn check_new_page(getters: &Getters<'_>, name: &str, path: &str) -> PageConflicts {
    PageConflicts {
        name_in_use: getters.name_in_use(name),
        path_in_use: getters.path_in_use(path),
    }
}
