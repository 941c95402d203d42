//! Remembered selection of a secondary list panel, scoped per list context.

use std::fmt;

use crate::persistence::{
    Persistence, SELECTED_NAMESPACE, read_json, write_json,
};

/// Key isolating one list's remembered selection from every other list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListContext(String);

impl ListContext {
    /// Derive the context from a detail-page base path such as
    /// `/crm/contacts/`. Surrounding slashes are ignored.
    pub fn from_base_path(base_path: &str) -> Self {
        let trimmed = base_path.trim().trim_matches('/');
        if trimmed.is_empty() {
            Self(String::from("root"))
        } else {
            Self(trimmed.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ListContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Last identifier selected in `context`, if any was stored.
pub fn load_selection(
    store: &dyn Persistence,
    context: &ListContext,
) -> Option<String> {
    read_json(store, SELECTED_NAMESPACE, context.as_str())
}

/// Persist `id` as the selection of `context`.
pub fn save_selection(
    store: &mut dyn Persistence,
    context: &ListContext,
    id: &str,
) {
    write_json(store, SELECTED_NAMESPACE, context.as_str(), id);
}

/// Selection of one mounted list. Read once on creation; later item
/// collection changes never re-read it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionStore {
    context: ListContext,
    selected: Option<String>,
}

impl SelectionStore {
    pub fn load(store: &dyn Persistence, context: ListContext) -> Self {
        let selected = load_selection(store, &context);
        Self { context, selected }
    }

    pub fn context(&self) -> &ListContext {
        &self.context
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Record `id` as selected and persist it.
    pub fn select(&mut self, store: &mut dyn Persistence, id: &str) {
        log::debug!("selected {id} in list {}", self.context);
        self.selected = Some(id.to_string());
        save_selection(store, &self.context, id);
    }
}
