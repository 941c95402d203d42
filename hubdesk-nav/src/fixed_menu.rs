//! Secondary list panel: descriptor supplied by the page and the panel's
//! interaction state (search text, filter builder, switch, selection).

use std::collections::BTreeMap;

use crate::model::Icon;
use crate::selection::ListContext;

/// Filter group key to selected option value.
pub type FilterMap = BTreeMap<String, String>;

/// Leading visual of a list row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Avatar {
    Icon(Icon),
    Initials(String),
}

/// Row of the list panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub id: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub time_label: Option<String>,
    pub badge: Option<u32>,
    pub avatar: Option<Avatar>,
}

impl ListItem {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            subtitle: None,
            time_label: None,
            badge: None,
            avatar: None,
        }
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn time_label(mut self, label: impl Into<String>) -> Self {
        self.time_label = Some(label.into());
        self
    }

    pub fn badge(mut self, count: u32) -> Self {
        self.badge = Some(count);
        self
    }

    pub fn avatar(mut self, avatar: Avatar) -> Self {
        self.avatar = Some(avatar);
        self
    }
}

/// Value/label pair used by filter groups and the switch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub value: String,
    pub label: String,
}

impl Choice {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Single-select group in the filter builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterGroup {
    pub key: String,
    pub label: String,
    pub options: Vec<Choice>,
}

impl FilterGroup {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            options: Vec::new(),
        }
    }

    pub fn option(mut self, choice: Choice) -> Self {
        self.options.push(choice);
        self
    }

    fn offers(&self, value: &str) -> bool {
        self.options.iter().any(|option| option.value == value)
    }
}

/// Dropdown switching the list's scope, e.g. between mailboxes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchConfig {
    pub label: String,
    pub options: Vec<Choice>,
    pub initial: Option<String>,
}

/// Page-supplied description of the list panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedMenu {
    pub title: String,
    pub items: Vec<ListItem>,
    /// Detail pages live at `<detail_base_path>/<item id>`.
    pub detail_base_path: String,
    pub search_placeholder: Option<String>,
    pub filters: Vec<FilterGroup>,
    pub switch: Option<SwitchConfig>,
}

impl FixedMenu {
    pub fn new(
        title: impl Into<String>,
        detail_base_path: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            items: Vec::new(),
            detail_base_path: detail_base_path.into(),
            search_placeholder: None,
            filters: Vec::new(),
            switch: None,
        }
    }

    pub fn items(mut self, items: Vec<ListItem>) -> Self {
        self.items = items;
        self
    }

    pub fn searchable(mut self, placeholder: impl Into<String>) -> Self {
        self.search_placeholder = Some(placeholder.into());
        self
    }

    pub fn filter(mut self, group: FilterGroup) -> Self {
        self.filters.push(group);
        self
    }

    pub fn switch(mut self, switch: SwitchConfig) -> Self {
        self.switch = Some(switch);
        self
    }

    pub fn list_context(&self) -> ListContext {
        ListContext::from_base_path(&self.detail_base_path)
    }

    /// Relative href of the detail page for `id`.
    pub fn detail_href(&self, id: &str) -> String {
        format!("{}/{id}", self.detail_base_path.trim_end_matches('/'))
    }

    pub fn item(&self, id: &str) -> Option<&ListItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn filter_group(&self, key: &str) -> Option<&FilterGroup> {
        self.filters.iter().find(|group| group.key == key)
    }
}

/// Interaction state of the list panel, independent of the stored selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixedMenuState {
    search: String,
    filters_open: bool,
    draft: FilterMap,
    applied: FilterMap,
    switch_value: Option<String>,
}

impl FixedMenuState {
    pub fn new(menu: &FixedMenu) -> Self {
        Self {
            switch_value: menu
                .switch
                .as_ref()
                .and_then(|switch| switch.initial.clone()),
            ..Self::default()
        }
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, text: &str) {
        self.search = text.to_string();
    }

    pub fn is_filter_modal_open(&self) -> bool {
        self.filters_open
    }

    pub fn draft(&self) -> &FilterMap {
        &self.draft
    }

    pub fn applied(&self) -> &FilterMap {
        &self.applied
    }

    /// Number of applied filter groups, shown on the filter button.
    pub fn active_filter_count(&self) -> usize {
        self.applied.len()
    }

    /// Open the builder with the applied filters as the starting draft.
    pub fn open_filters(&mut self) {
        self.draft = self.applied.clone();
        self.filters_open = true;
    }

    /// Pick `value` in `group`; picking the current value clears the group.
    /// Unknown groups or values are ignored.
    pub fn toggle_draft(&mut self, menu: &FixedMenu, group: &str, value: &str) {
        if !menu
            .filter_group(group)
            .is_some_and(|filter| filter.offers(value))
        {
            log::debug!("ignoring unknown filter option {group}={value}");
            return;
        }

        if self.draft.get(group).map(String::as_str) == Some(value) {
            self.draft.remove(group);
        } else {
            self.draft.insert(group.to_string(), value.to_string());
        }
    }

    /// Commit the draft and close the builder.
    pub fn apply_filters(&mut self) -> FilterMap {
        self.applied = self.draft.clone();
        self.filters_open = false;
        self.applied.clone()
    }

    /// Drop every filter, applied and drafted, in one step.
    pub fn clear_filters(&mut self) -> FilterMap {
        self.draft.clear();
        self.applied.clear();
        self.filters_open = false;
        FilterMap::new()
    }

    /// Close the builder discarding the draft.
    pub fn cancel_filters(&mut self) {
        self.draft = self.applied.clone();
        self.filters_open = false;
    }

    pub fn switch_value(&self) -> Option<&str> {
        self.switch_value.as_deref()
    }

    /// Record the switch choice. Returns `false` for unknown values.
    pub fn set_switch(&mut self, menu: &FixedMenu, value: &str) -> bool {
        let known = menu.switch.as_ref().is_some_and(|switch| {
            switch.options.iter().any(|option| option.value == value)
        });
        if known {
            self.switch_value = Some(value.to_string());
        }
        known
    }
}
