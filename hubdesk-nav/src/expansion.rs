//! Per-hub section expansion and menu collapse state.
//!
//! Expansion is kept in two layers. `preferences` is what the user chose
//! (seeded from section defaults) and is the only layer ever written. The
//! effective value additionally forces the section holding the active item
//! open.

use std::collections::BTreeMap;

use crate::model::MenuTree;
use crate::persistence::{
    COLLAPSED_NAMESPACE, Persistence, SECTIONS_NAMESPACE, read_json,
    write_json,
};

/// Section id to expanded flag.
pub type ExpansionMap = BTreeMap<String, bool>;

/// Expansion state of one hub's menu sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpansionStore {
    hub_key: String,
    preferences: ExpansionMap,
    forced: Option<String>,
}

impl ExpansionStore {
    /// Read persisted preferences for `hub_key` and seed sections missing
    /// from them. `active_section` is forced open in memory only.
    pub fn load(
        store: &dyn Persistence,
        hub_key: &str,
        tree: &MenuTree,
        active_section: Option<&str>,
    ) -> Self {
        let mut preferences: ExpansionMap =
            read_json(store, SECTIONS_NAMESPACE, hub_key).unwrap_or_default();

        for section in tree.sections() {
            preferences
                .entry(section.id.clone())
                .or_insert(section.default_expanded);
        }

        Self {
            hub_key: hub_key.to_string(),
            preferences,
            forced: active_section.map(str::to_string),
        }
    }

    pub fn hub_key(&self) -> &str {
        &self.hub_key
    }

    /// Effective expansion of `section_id`.
    pub fn is_expanded(&self, section_id: &str) -> bool {
        if self.forced.as_deref() == Some(section_id) {
            return true;
        }
        self.preferences.get(section_id).copied().unwrap_or(false)
    }

    /// Effective map: preferences with the active section forced open.
    pub fn effective(&self) -> ExpansionMap {
        let mut effective = self.preferences.clone();
        if let Some(forced) = &self.forced {
            effective.insert(forced.clone(), true);
        }
        effective
    }

    /// User preference layer, as persisted on the next toggle.
    pub fn preferences(&self) -> &ExpansionMap {
        &self.preferences
    }

    /// Section currently forced open by the active location.
    pub fn forced_section(&self) -> Option<&str> {
        self.forced.as_deref()
    }

    /// Flip the visible state of `section_id` and persist the preference map.
    ///
    /// Returns the new effective value. Toggling a forced section records the
    /// user's choice and drops the force for it.
    pub fn toggle(
        &mut self,
        store: &mut dyn Persistence,
        section_id: &str,
    ) -> bool {
        let expanded = !self.is_expanded(section_id);
        self.preferences.insert(section_id.to_string(), expanded);
        if self.forced.as_deref() == Some(section_id) {
            self.forced = None;
        }

        log::debug!(
            "section {section_id} in {} is now {}",
            self.hub_key,
            if expanded { "expanded" } else { "collapsed" }
        );
        write_json(store, SECTIONS_NAMESPACE, &self.hub_key, &self.preferences);
        expanded
    }

    /// Force the section holding the newly active item open without
    /// touching preferences.
    pub fn reveal(&mut self, active_section: Option<&str>) {
        self.forced = active_section.map(str::to_string);
    }
}

/// Width mode of the primary menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CollapseState {
    /// Icon and label.
    #[default]
    Expanded,
    /// Icon only.
    Collapsed,
}

impl CollapseState {
    pub fn from_collapsed(collapsed: bool) -> Self {
        if collapsed {
            CollapseState::Collapsed
        } else {
            CollapseState::Expanded
        }
    }

    pub fn is_collapsed(self) -> bool {
        self == CollapseState::Collapsed
    }

    pub fn toggled(self) -> Self {
        match self {
            CollapseState::Expanded => CollapseState::Collapsed,
            CollapseState::Collapsed => CollapseState::Expanded,
        }
    }
}

/// Persisted collapse flag of one hub's primary menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollapseStore {
    hub_key: String,
    state: CollapseState,
}

impl CollapseStore {
    /// Last persisted value, or expanded on the first visit.
    pub fn load(store: &dyn Persistence, hub_key: &str) -> Self {
        let collapsed: bool =
            read_json(store, COLLAPSED_NAMESPACE, hub_key).unwrap_or(false);
        Self {
            hub_key: hub_key.to_string(),
            state: CollapseState::from_collapsed(collapsed),
        }
    }

    pub fn state(&self) -> CollapseState {
        self.state
    }

    pub fn is_collapsed(&self) -> bool {
        self.state.is_collapsed()
    }

    /// Flip the flag and persist it immediately.
    pub fn toggle(&mut self, store: &mut dyn Persistence) -> CollapseState {
        self.state = self.state.toggled();
        log::debug!("menu for {} is now {:?}", self.hub_key, self.state);
        write_json(
            store,
            COLLAPSED_NAMESPACE,
            &self.hub_key,
            &self.state.is_collapsed(),
        );
        self.state
    }
}
