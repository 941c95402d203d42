//! Layout composer: owns every navigation store and exposes read models for
//! the primary menu, the optional list panel, and the status bar.

mod event;
mod model;
mod reducer;

use std::sync::Arc;

pub use event::{ItemRef, LayoutEffect, LayoutIntent};
pub use model::{
    FixedMenuView, ItemView, LayoutProps, ListRowView, MenuView, SectionView,
};

use crate::access::AccessGate;
use crate::active::{ActivePathResolver, Location};
use crate::builder::{MenuSource, build_tree, section_id};
use crate::catalog::{FeatureCatalog, PlanAccess};
use crate::expansion::{CollapseStore, ExpansionStore};
use crate::fixed_menu::{FixedMenu, FixedMenuState};
use crate::model::{MenuTree, PlanTier};
use crate::persistence::Persistence;
use crate::selection::SelectionStore;
use crate::status_bar::StatusBar;

/// Key used for per-menu state when neither a hub id nor a titled tree
/// identifies the menu.
const FALLBACK_STATE_KEY: &str = "menu";

/// Mounted primary menu with its per-hub state.
#[derive(Debug, Clone)]
struct MenuState {
    tree: MenuTree,
    resolver: ActivePathResolver,
    expansion: ExpansionStore,
    collapse: CollapseStore,
}

/// Mounted list panel with its per-context selection.
#[derive(Debug, Clone)]
struct ListState {
    menu: FixedMenu,
    state: FixedMenuState,
    selection: SelectionStore,
}

/// Three-pane navigation shell.
pub struct UnifiedLayout<S> {
    store: S,
    catalog: Option<Arc<dyn FeatureCatalog>>,
    plan: PlanTier,
    location: Location,
    props: LayoutProps,
    menu: Option<MenuState>,
    list: Option<ListState>,
    status_bar: StatusBar,
}

impl<S: Persistence> UnifiedLayout<S> {
    /// Build the tree and read persisted state once.
    pub fn mount(
        props: LayoutProps,
        location: Location,
        plan: PlanTier,
        catalog: Option<Arc<dyn FeatureCatalog>>,
        store: S,
    ) -> Self {
        let mut layout = Self {
            store,
            catalog,
            plan,
            location,
            props: LayoutProps::default(),
            menu: None,
            list: None,
            status_bar: StatusBar::default(),
        };
        layout.menu = layout.mount_menu(&props);
        layout.list = props
            .fixed_menu
            .clone()
            .map(|menu| layout.mount_list(menu));
        layout.status_bar = layout.build_status_bar(&props);
        layout.props = props;
        layout
    }

    /// Apply new page props. Per-hub state is reloaded only when the menu
    /// source changed, and the selection only when the list context changed.
    pub fn remount(&mut self, props: LayoutProps) {
        if !self.props.same_menu_source(&props) {
            log::debug!("menu source changed, rebuilding navigation");
            self.menu = self.mount_menu(&props);
        }

        self.list = match (self.list.take(), props.fixed_menu.clone()) {
            (Some(mut list), Some(menu))
                if list.menu.list_context() == menu.list_context() =>
            {
                list.menu = menu;
                Some(list)
            },
            (_, Some(menu)) => Some(self.mount_list(menu)),
            (_, None) => None,
        };

        self.status_bar = self.build_status_bar(&props);
        self.props = props;
    }

    /// Follow a location change reported by the host.
    pub fn set_location(&mut self, location: Location) {
        self.location = location;
        if let Some(menu) = self.menu.as_mut() {
            let active = menu
                .resolver
                .find_active_section_id(&menu.tree, &self.location)
                .map(str::to_string);
            menu.expansion.reveal(active.as_deref());
        }
    }

    pub fn set_plan(&mut self, plan: PlanTier) {
        self.plan = plan;
    }

    pub fn plan(&self) -> PlanTier {
        self.plan
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn props(&self) -> &LayoutProps {
        &self.props
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn tree(&self) -> Option<&MenuTree> {
        self.menu.as_ref().map(|menu| &menu.tree)
    }

    pub fn expansion(&self) -> Option<&ExpansionStore> {
        self.menu.as_ref().map(|menu| &menu.expansion)
    }

    pub fn is_collapsed(&self) -> bool {
        self.menu
            .as_ref()
            .is_some_and(|menu| menu.collapse.is_collapsed())
    }

    pub fn status_bar(&self) -> &StatusBar {
        &self.status_bar
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.list.as_ref().and_then(|list| list.selection.selected())
    }

    /// Without a list panel the content takes the freed width.
    pub fn content_fills_width(&self) -> bool {
        self.list.is_none()
    }

    /// Primary menu read model, or `None` when there is nothing to render.
    pub fn menu_view(&self) -> Option<MenuView<'_>> {
        let menu = self.menu.as_ref()?;
        let gate = self.access_gate();
        let active = menu.resolver.find_active(&menu.tree, &self.location);

        let sections = menu
            .tree
            .sections()
            .iter()
            .enumerate()
            .map(|(section_index, section)| SectionView {
                section,
                expanded: menu.expansion.is_expanded(&section.id),
                contains_active: active
                    .is_some_and(|active| active.section == section_index),
                items: section
                    .items
                    .iter()
                    .enumerate()
                    .map(|(item_index, item)| ItemView {
                        item,
                        active: active.is_some_and(|active| {
                            active.section == section_index
                                && active.item == item_index
                        }),
                        locked: gate.is_locked(item),
                    })
                    .collect(),
            })
            .collect();

        let active_bottom = if active.is_none() {
            menu.tree.bottom_items.iter().position(|item| {
                menu.resolver.is_item_active(item, &self.location)
            })
        } else {
            None
        };
        let bottom_items = menu
            .tree
            .bottom_items
            .iter()
            .enumerate()
            .map(|(index, item)| ItemView {
                item,
                active: active_bottom == Some(index),
                locked: gate.is_locked(item),
            })
            .collect();

        Some(MenuView {
            title: &menu.tree.title,
            collapsed: menu.collapse.is_collapsed(),
            sections,
            bottom_items,
        })
    }

    /// List panel read model, when the page supplied one.
    pub fn fixed_menu_view(&self) -> Option<FixedMenuView<'_>> {
        let list = self.list.as_ref()?;
        let selected = list.selection.selected();
        Some(FixedMenuView {
            menu: &list.menu,
            state: &list.state,
            rows: list
                .menu
                .items
                .iter()
                .map(|item| ListRowView {
                    item,
                    selected: selected == Some(item.id.as_str()),
                })
                .collect(),
        })
    }

    fn hub_id(&self) -> Option<&str> {
        self.props.hub_id.as_deref()
    }

    fn access_gate(&self) -> AccessGate<'_> {
        let access = self
            .catalog
            .as_deref()
            .map(|catalog| catalog as &dyn PlanAccess);
        AccessGate::new(self.hub_id(), self.plan, access)
    }

    fn menu_source(&self, props: &LayoutProps) -> Option<MenuSource> {
        if let Some(tree) = &props.menu {
            return Some(MenuSource::Explicit(tree.clone()));
        }
        let hub_id = props.hub_id.as_deref()?;
        match self.catalog.as_deref().and_then(|catalog| catalog.hub(hub_id)) {
            Some(hub) => Some(MenuSource::Hub(hub.clone())),
            None => {
                log::warn!("hub {hub_id} is not in the catalog");
                None
            },
        }
    }

    fn mount_menu(&self, props: &LayoutProps) -> Option<MenuState> {
        let source = self.menu_source(props);
        let tree = build_tree(source.as_ref())?;
        let hub_id = props
            .hub_id
            .as_deref()
            .or_else(|| source.as_ref().and_then(MenuSource::hub_id));
        let state_key = state_key(hub_id, &tree);
        let resolver = ActivePathResolver::new(hub_id);
        let active = resolver.find_active_section_id(&tree, &self.location);

        let expansion =
            ExpansionStore::load(&self.store, &state_key, &tree, active);
        let collapse = CollapseStore::load(&self.store, &state_key);
        log::debug!("mounted menu {state_key} with active section {active:?}");

        Some(MenuState {
            tree,
            resolver,
            expansion,
            collapse,
        })
    }

    fn mount_list(&self, menu: FixedMenu) -> ListState {
        let selection = SelectionStore::load(&self.store, menu.list_context());
        ListState {
            state: FixedMenuState::new(&menu),
            menu,
            selection,
        }
    }

    fn build_status_bar(&self, props: &LayoutProps) -> StatusBar {
        let hub_name = self
            .menu
            .as_ref()
            .map(|menu| menu.tree.title.clone())
            .unwrap_or_default();
        StatusBar::new(
            hub_name,
            props.page_title.clone(),
            props.stats.clone(),
            props.actions.clone(),
        )
    }
}

/// Persistence key for per-menu state: the hub id, else the tree title
/// under a `menu-` prefix so it cannot shadow a hub id.
fn state_key(hub_id: Option<&str>, tree: &MenuTree) -> String {
    if let Some(hub_id) = hub_id {
        return hub_id.to_string();
    }
    let from_title = section_id(&tree.title);
    if from_title.is_empty() {
        FALLBACK_STATE_KEY.to_string()
    } else {
        format!("{FALLBACK_STATE_KEY}-{from_title}")
    }
}
