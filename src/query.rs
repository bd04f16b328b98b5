//! Query namespace - every derivation addressable by its registered name
//!
//! Callers outside Rust (scripts, the CLI) address queries by string. This
//! module maps those names onto the typed [`Getters`] methods and renders
//! results with the namespace's wire convention: a missing index is `-1`
//! and a missing record is `null`.

use crate::error::{Result, StoreError};
use crate::getters::Getters;
use crate::model::{ComponentRef, Page};
use serde_json::Value;
use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;
use tracing::trace;

/// All registered query names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryName {
    // ─────────────────────────────────────────────────────────────────────────
    // Pages
    // ─────────────────────────────────────────────────────────────────────────
    GetPageIndexById,
    GetPageById,
    PageExists,

    // ─────────────────────────────────────────────────────────────────────────
    // Selection
    // ─────────────────────────────────────────────────────────────────────────
    GetSelectedElIndexById,

    // ─────────────────────────────────────────────────────────────────────────
    // Components
    // ─────────────────────────────────────────────────────────────────────────
    GetComponentRefIndexByName,
    GetComponentRefByName,
    GetComponentRefByIndex,
    ComponentExist,

    // ─────────────────────────────────────────────────────────────────────────
    // Page validation
    // ─────────────────────────────────────────────────────────────────────────
    PathInUse,
    NameInUse,
}

impl QueryName {
    /// Registration order
    pub const ALL: [QueryName; 10] = [
        QueryName::GetPageIndexById,
        QueryName::GetPageById,
        QueryName::PageExists,
        QueryName::GetSelectedElIndexById,
        QueryName::GetComponentRefIndexByName,
        QueryName::GetComponentRefByName,
        QueryName::GetComponentRefByIndex,
        QueryName::ComponentExist,
        QueryName::PathInUse,
        QueryName::NameInUse,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QueryName::GetPageIndexById => "getPageIndexById",
            QueryName::GetPageById => "getPageById",
            QueryName::PageExists => "pageExists",
            QueryName::GetSelectedElIndexById => "getSelectedElIndexById",
            QueryName::GetComponentRefIndexByName => "getComponentRefIndexByName",
            QueryName::GetComponentRefByName => "getComponentRefByName",
            QueryName::GetComponentRefByIndex => "getComponentRefByIndex",
            QueryName::ComponentExist => "componentExist",
            QueryName::PathInUse => "pathInUse",
            QueryName::NameInUse => "nameInUse",
        }
    }

    /// Short description of the argument the query takes
    pub fn argument(&self) -> &'static str {
        match self {
            QueryName::GetPageIndexById | QueryName::GetPageById | QueryName::PageExists => {
                "page id"
            }
            QueryName::GetSelectedElIndexById => "element id",
            QueryName::GetComponentRefIndexByName
            | QueryName::GetComponentRefByName
            | QueryName::ComponentExist => "component name",
            QueryName::GetComponentRefByIndex => "component index",
            QueryName::PathInUse => "page path",
            QueryName::NameInUse => "page name",
        }
    }
}

impl fmt::Display for QueryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QueryName {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self> {
        QueryName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| StoreError::UnknownQuery(s.to_string()))
    }
}

/// A named query bound to its argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub name: QueryName,
    pub argument: String,
}

/// Result of evaluating a [`Query`]
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutput {
    Index(Option<usize>),
    Flag(bool),
    Page(Option<Page>),
    Component(Option<ComponentRef>),
}

impl Query {
    pub fn new(name: QueryName, argument: impl Into<String>) -> Self {
        Self {
            name,
            argument: argument.into(),
        }
    }

    /// Resolve `name` in the namespace and bind `argument`
    pub fn parse(name: &str, argument: impl Into<String>) -> Result<Self> {
        Ok(Self::new(name.parse()?, argument))
    }

    pub fn evaluate(&self, getters: &Getters<'_>) -> Result<QueryOutput> {
        trace!(query = %self.name, argument = %self.argument, "evaluating query");

        let arg = self.argument.as_str();
        let output = match self.name {
            QueryName::GetPageIndexById => QueryOutput::Index(getters.get_page_index_by_id(arg)),
            QueryName::GetPageById => QueryOutput::Page(getters.get_page_by_id(arg).cloned()),
            QueryName::PageExists => QueryOutput::Flag(getters.page_exists(arg)),
            QueryName::GetSelectedElIndexById => {
                QueryOutput::Index(getters.get_selected_el_index_by_id(arg))
            }
            QueryName::GetComponentRefIndexByName => {
                QueryOutput::Index(getters.get_component_ref_index_by_name(arg))
            }
            QueryName::GetComponentRefByName => {
                QueryOutput::Component(getters.get_component_ref_by_name(arg).cloned())
            }
            QueryName::GetComponentRefByIndex => {
                let component = parse_component_index(arg)?
                    .and_then(|i| getters.get_component_ref_by_index(i));
                QueryOutput::Component(component.cloned())
            }
            QueryName::ComponentExist => QueryOutput::Flag(getters.component_exist(arg)),
            QueryName::PathInUse => QueryOutput::Flag(getters.path_in_use(arg)),
            QueryName::NameInUse => QueryOutput::Flag(getters.name_in_use(arg)),
        };

        Ok(output)
    }
}

/// Parse a positional argument; integers that cannot be a position give `None`
fn parse_component_index(arg: &str) -> Result<Option<usize>> {
    let trimmed = arg.trim();

    // Negative positions never hold a component
    if let Some(digits) = trimmed.strip_prefix('-') {
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            return Ok(None);
        }
    }

    match trimmed.parse::<usize>() {
        Ok(index) => Ok(Some(index)),
        Err(err) if *err.kind() == IntErrorKind::PosOverflow => Ok(None),
        Err(_) => Err(StoreError::InvalidIndex(arg.to_string())),
    }
}

impl QueryOutput {
    /// Render with the namespace convention (`-1` / `null` for absence)
    pub fn to_json(&self) -> Result<Value> {
        let value = match self {
            QueryOutput::Index(Some(index)) => Value::from(*index),
            QueryOutput::Index(None) => Value::from(-1),
            QueryOutput::Flag(flag) => Value::Bool(*flag),
            QueryOutput::Page(page) => serde_json::to_value(page)?,
            QueryOutput::Component(component) => serde_json::to_value(component)?,
        };
        Ok(value)
    }
}
