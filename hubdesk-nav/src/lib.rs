//! UI-agnostic navigation shell for Hubdesk pages.
//!
//! The crate is split into leaf components and one composer:
//! - [`build_tree`] turns a [`HubDeclaration`] into a two-level [`MenuTree`];
//! - [`ActivePathResolver`] decides which item matches the current
//!   [`Location`];
//! - [`ExpansionStore`], [`CollapseStore`] and [`SelectionStore`] keep
//!   per-hub and per-list state in an injected [`Persistence`] backend;
//! - [`AccessGate`] locks items the current [`PlanTier`] does not cover;
//! - [`UnifiedLayout`] owns all of the above and exposes read models for the
//!   primary menu, the optional list panel, and the status bar.
//!
//! Persistence is best-effort: backend failures are logged and replaced by
//! defaults, so nothing here returns an error to the page.
//!
//! # Quick Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use hubdesk_nav::{
//!     Feature, FeatureCatalog, HubDeclaration, Icon, LayoutIntent,
//!     LayoutProps, Location, MemoryStore, PlanTier, StaticCatalog,
//!     UnifiedLayout,
//! };
//!
//! let crm = HubDeclaration::new("crm", "CRM", Icon::Contacts)
//!     .feature(Feature::new("Dashboard", "/crm", Icon::Dashboard))
//!     .feature(
//!         Feature::new("Contacts", "/crm/contacts", Icon::Contacts)
//!             .in_section("People"),
//!     );
//! let catalog: Arc<dyn FeatureCatalog> =
//!     Arc::new(StaticCatalog::default().with_hub(crm));
//!
//! let mut layout = UnifiedLayout::mount(
//!     LayoutProps::for_hub("crm").page_title("Contacts"),
//!     Location::parse("/crm/contacts/42"),
//!     PlanTier::Free,
//!     Some(catalog),
//!     MemoryStore::new(),
//! );
//!
//! let menu = layout.menu_view().expect("crm is in the catalog");
//! assert!(menu.sections[1].expanded);
//!
//! let _ = layout.reduce(LayoutIntent::ToggleCollapse);
//! assert!(layout.is_collapsed());
//! ```

mod access;
mod active;
mod builder;
mod catalog;
mod expansion;
mod fixed_menu;
mod layout;
mod model;
mod persistence;
mod selection;
mod status_bar;

pub use access::AccessGate;
pub use active::{
    ActiveItem, ActivePathResolver, Location, Query, parse_query, split_href,
};
pub use builder::{
    MenuSource, OVERVIEW_SECTION, build_tree, section_icon, section_id,
};
pub use catalog::{
    Feature, FeatureCatalog, HubDeclaration, PlanAccess, StaticCatalog,
    hub_root,
};
pub use expansion::{
    CollapseState, CollapseStore, ExpansionMap, ExpansionStore,
};
pub use fixed_menu::{
    Avatar, Choice, FilterGroup, FilterMap, FixedMenu, FixedMenuState,
    ListItem, SwitchConfig,
};
pub use layout::{
    FixedMenuView, ItemRef, ItemView, LayoutEffect, LayoutIntent,
    LayoutProps, ListRowView, MenuView, SectionView, UnifiedLayout,
};
pub use model::{
    Icon, Item, MenuError, MenuTree, PlanTier, Section, UnknownPlan,
};
pub use persistence::{
    COLLAPSED_NAMESPACE, MemoryStore, Persistence, PersistenceError,
    SECTIONS_NAMESPACE, SELECTED_NAMESPACE, storage_key,
};
pub use selection::{
    ListContext, SelectionStore, load_selection, save_selection,
};
pub use status_bar::{
    ActionTarget, BADGE_LIMIT, MAX_STATS, Stat, StatusAction, StatusBar,
    badge_label,
};
