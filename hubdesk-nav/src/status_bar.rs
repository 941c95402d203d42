//! Status bar model.

use crate::model::Icon;

/// Number of stats the bar shows; extra stats are dropped.
pub const MAX_STATS: usize = 5;

/// Largest badge count shown verbatim.
pub const BADGE_LIMIT: u32 = 99;

/// Format a badge count for display. Zero shows nothing.
pub fn badge_label(count: u32) -> Option<String> {
    match count {
        0 => None,
        count if count > BADGE_LIMIT => Some(format!("{BADGE_LIMIT}+")),
        count => Some(count.to_string()),
    }
}

/// Key figure shown in the status bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stat {
    pub label: String,
    pub value: String,
    pub icon: Option<Icon>,
}

impl Stat {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            icon: None,
        }
    }

    pub fn icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }
}

/// What an action does when pressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionTarget {
    /// Navigate to a relative href.
    Link(String),
    /// Hand the id back to the caller.
    Invoke(String),
}

/// Button in the trailing area of the status bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusAction {
    pub label: String,
    pub icon: Option<Icon>,
    pub target: ActionTarget,
}

impl StatusAction {
    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            icon: None,
            target: ActionTarget::Link(href.into()),
        }
    }

    pub fn invoke(label: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            icon: None,
            target: ActionTarget::Invoke(id.into()),
        }
    }

    pub fn icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }
}

/// Fully derived status bar contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusBar {
    hub_name: String,
    page_title: String,
    stats: Vec<Stat>,
    actions: Vec<StatusAction>,
}

impl StatusBar {
    pub fn new(
        hub_name: impl Into<String>,
        page_title: impl Into<String>,
        mut stats: Vec<Stat>,
        actions: Vec<StatusAction>,
    ) -> Self {
        stats.truncate(MAX_STATS);
        Self {
            hub_name: hub_name.into(),
            page_title: page_title.into(),
            stats,
            actions,
        }
    }

    pub fn hub_name(&self) -> &str {
        &self.hub_name
    }

    pub fn page_title(&self) -> &str {
        &self.page_title
    }

    pub fn stats(&self) -> &[Stat] {
        &self.stats
    }

    pub fn actions(&self) -> &[StatusAction] {
        &self.actions
    }

    /// Action with the given invoke id or link href.
    pub fn action(&self, target: &str) -> Option<&StatusAction> {
        self.actions.iter().find(|action| match &action.target {
            ActionTarget::Link(href) => href == target,
            ActionTarget::Invoke(id) => id == target,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{ActionTarget, Stat, StatusAction, StatusBar, badge_label};

    #[test]
    fn given_more_than_five_stats_when_building_then_extras_are_dropped() {
        let stats = (1..=7)
            .map(|index| Stat::new(format!("stat {index}"), index.to_string()))
            .collect();

        let bar = StatusBar::new("CRM", "Contacts", stats, Vec::new());

        assert_eq!(bar.stats().len(), 5);
        assert_eq!(bar.stats()[4].label, "stat 5");
    }

    #[test]
    fn given_link_and_invoke_actions_when_looked_up_then_targets_differ() {
        let bar = StatusBar::new(
            "CRM",
            "Contacts",
            Vec::new(),
            vec![
                StatusAction::link("Import", "/crm/import"),
                StatusAction::invoke("New contact", "new-contact"),
            ],
        );

        assert!(matches!(
            bar.action("/crm/import").map(|action| &action.target),
            Some(ActionTarget::Link(_))
        ));
        assert!(matches!(
            bar.action("new-contact").map(|action| &action.target),
            Some(ActionTarget::Invoke(_))
        ));
        assert!(bar.action("missing").is_none());
    }

    #[test]
    fn given_badge_counts_when_formatted_then_large_values_are_capped() {
        assert_eq!(badge_label(0), None);
        assert_eq!(badge_label(7).as_deref(), Some("7"));
        assert_eq!(badge_label(99).as_deref(), Some("99"));
        assert_eq!(badge_label(100).as_deref(), Some("99+"));
    }
}
