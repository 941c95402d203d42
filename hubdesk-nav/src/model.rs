//! Menu data model: a hub's [`MenuTree`] of [`Section`]s holding [`Item`]s.
//!
//! Nesting stops at two levels by construction: sections own items and
//! items have no child collection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Symbolic icon reference. Resolution to something drawable is left to the
/// rendering layer.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Dashboard,
    Inbox,
    Contacts,
    Companies,
    Activity,
    Deals,
    Channels,
    Mailbox,
    Automation,
    Integrations,
    Reports,
    Import,
    Team,
    Billing,
    Tag,
    #[default]
    Settings,
    /// Renderer-specific token not covered by the built-in set.
    Custom(String),
}

/// Subscription tiers, ordered from least to most capable.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum PlanTier {
    #[default]
    Free,
    Starter,
    Pro,
    Enterprise,
}

impl PlanTier {
    /// Stable lowercase identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            PlanTier::Free => "free",
            PlanTier::Starter => "starter",
            PlanTier::Pro => "pro",
            PlanTier::Enterprise => "enterprise",
        }
    }

    /// Return whether this plan satisfies `required`.
    pub fn covers(self, required: PlanTier) -> bool {
        self >= required
    }
}

impl fmt::Display for PlanTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a plan identifier is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown plan tier `{0}`")]
pub struct UnknownPlan(pub String);

impl FromStr for PlanTier {
    type Err = UnknownPlan;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "free" => Ok(PlanTier::Free),
            "starter" => Ok(PlanTier::Starter),
            "pro" => Ok(PlanTier::Pro),
            "enterprise" => Ok(PlanTier::Enterprise),
            _ => Err(UnknownPlan(value.to_string())),
        }
    }
}

/// Errors raised while assembling a menu tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MenuError {
    #[error("section id `{0}` is already used in this menu")]
    DuplicateSection(String),
}

/// Leaf navigation entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default)]
    pub icon: Icon,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bg_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_plan: Option<PlanTier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,
}

impl Item {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn icon(mut self, icon: Icon) -> Self {
        self.icon = icon;
        self
    }

    pub fn badge(mut self, count: u32) -> Self {
        self.badge = Some(count);
        self
    }

    pub fn colors(
        mut self,
        color: impl Into<String>,
        bg_color: impl Into<String>,
    ) -> Self {
        self.color = Some(color.into());
        self.bg_color = Some(bg_color.into());
        self
    }

    pub fn required_plan(mut self, plan: PlanTier) -> Self {
        self.required_plan = Some(plan);
        self
    }

    pub fn locked(mut self, locked: bool) -> Self {
        self.locked = Some(locked);
        self
    }

    /// Items without a non-empty `href` render as inert labels.
    pub fn is_navigable(&self) -> bool {
        self.href.as_deref().is_some_and(|href| !href.is_empty())
    }
}

/// Collapsible group of items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub icon: Icon,
    #[serde(default)]
    pub default_expanded: bool,
    #[serde(default)]
    pub items: Vec<Item>,
}

impl Section {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        icon: Icon,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            icon,
            default_expanded: false,
            items: Vec::new(),
        }
    }

    pub fn default_expanded(mut self, expanded: bool) -> Self {
        self.default_expanded = expanded;
        self
    }

    pub fn item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }
}

/// A hub's complete navigation tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawMenuTree")]
pub struct MenuTree {
    pub title: String,
    sections: Vec<Section>,
    pub bottom_items: Vec<Item>,
}

/// Wire shape of a [`MenuTree`] before section ids are validated.
#[derive(Deserialize)]
struct RawMenuTree {
    title: String,
    #[serde(default)]
    sections: Vec<Section>,
    #[serde(default)]
    bottom_items: Vec<Item>,
}

impl TryFrom<RawMenuTree> for MenuTree {
    type Error = MenuError;

    fn try_from(raw: RawMenuTree) -> Result<Self, Self::Error> {
        let mut tree = MenuTree::new(raw.title);
        for section in raw.sections {
            tree.push_section(section)?;
        }
        tree.bottom_items = raw.bottom_items;
        Ok(tree)
    }
}

impl MenuTree {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            sections: Vec::new(),
            bottom_items: Vec::new(),
        }
    }

    /// Append a section, rejecting ids already present in the tree.
    pub fn push_section(&mut self, section: Section) -> Result<(), MenuError> {
        if self.section(&section.id).is_some() {
            return Err(MenuError::DuplicateSection(section.id));
        }
        self.sections.push(section);
        Ok(())
    }

    /// Builder form of [`MenuTree::push_section`].
    pub fn with_section(mut self, section: Section) -> Result<Self, MenuError> {
        self.push_section(section)?;
        Ok(self)
    }

    pub fn with_bottom_item(mut self, item: Item) -> Self {
        self.bottom_items.push(item);
        self
    }

    /// Sections in display order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty() && self.bottom_items.is_empty()
    }
}
