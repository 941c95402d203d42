use crate::fixed_menu::{FixedMenu, FixedMenuState, ListItem};
use crate::model::{Item, MenuTree, Section};
use crate::status_bar::{Stat, StatusAction, badge_label};

/// What a page hands to the layout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutProps {
    /// Hub whose catalog declaration builds the menu and gates access.
    pub hub_id: Option<String>,
    /// Explicit tree used instead of the hub declaration.
    pub menu: Option<MenuTree>,
    pub page_title: String,
    pub stats: Vec<Stat>,
    pub actions: Vec<StatusAction>,
    pub fixed_menu: Option<FixedMenu>,
}

impl LayoutProps {
    pub fn for_hub(hub_id: impl Into<String>) -> Self {
        Self {
            hub_id: Some(hub_id.into()),
            ..Self::default()
        }
    }

    pub fn with_menu(menu: MenuTree) -> Self {
        Self {
            menu: Some(menu),
            ..Self::default()
        }
    }

    pub fn hub_id(mut self, hub_id: impl Into<String>) -> Self {
        self.hub_id = Some(hub_id.into());
        self
    }

    pub fn page_title(mut self, title: impl Into<String>) -> Self {
        self.page_title = title.into();
        self
    }

    pub fn stats(mut self, stats: Vec<Stat>) -> Self {
        self.stats = stats;
        self
    }

    pub fn actions(mut self, actions: Vec<StatusAction>) -> Self {
        self.actions = actions;
        self
    }

    pub fn fixed_menu(mut self, menu: FixedMenu) -> Self {
        self.fixed_menu = Some(menu);
        self
    }

    /// Both inputs that decide which tree is built.
    pub(crate) fn same_menu_source(&self, other: &LayoutProps) -> bool {
        self.hub_id == other.hub_id && self.menu == other.menu
    }
}

/// Menu item as rendered.
#[derive(Debug, Clone, Copy)]
pub struct ItemView<'a> {
    pub item: &'a Item,
    pub active: bool,
    pub locked: bool,
}

impl ItemView<'_> {
    /// Locked and href-less items are static containers.
    pub fn is_interactive(&self) -> bool {
        !self.locked && self.item.is_navigable()
    }

    pub fn badge(&self) -> Option<String> {
        self.item.badge.and_then(badge_label)
    }
}

/// Section header plus its items.
#[derive(Debug, Clone)]
pub struct SectionView<'a> {
    pub section: &'a Section,
    pub expanded: bool,
    pub contains_active: bool,
    pub items: Vec<ItemView<'a>>,
}

/// Primary menu read model.
#[derive(Debug, Clone)]
pub struct MenuView<'a> {
    pub title: &'a str,
    pub collapsed: bool,
    pub sections: Vec<SectionView<'a>>,
    pub bottom_items: Vec<ItemView<'a>>,
}

/// List row as rendered.
#[derive(Debug, Clone, Copy)]
pub struct ListRowView<'a> {
    pub item: &'a ListItem,
    pub selected: bool,
}

impl ListRowView<'_> {
    pub fn badge(&self) -> Option<String> {
        self.item.badge.and_then(badge_label)
    }
}

/// Secondary list panel read model.
#[derive(Debug, Clone)]
pub struct FixedMenuView<'a> {
    pub menu: &'a FixedMenu,
    pub state: &'a FixedMenuState,
    pub rows: Vec<ListRowView<'a>>,
}

impl FixedMenuView<'_> {
    pub fn selected(&self) -> Option<&ListItem> {
        self.rows.iter().find(|row| row.selected).map(|row| row.item)
    }
}
