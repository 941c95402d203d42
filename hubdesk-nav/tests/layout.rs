use std::sync::Arc;

use hubdesk_nav::{
    Feature, FeatureCatalog, FixedMenu, HubDeclaration, Icon, Item,
    LayoutIntent, LayoutProps, ListItem, Location, MemoryStore, MenuTree,
    Persistence, PersistenceError, PlanTier, Section, Stat, StaticCatalog,
    UnifiedLayout,
};

/// Backend that rejects every read and write.
struct OfflineStore;

impl Persistence for OfflineStore {
    fn get(
        &self,
        _namespace: &str,
        _key: &str,
    ) -> Result<Option<String>, PersistenceError> {
        Err(PersistenceError::Unavailable(String::from("offline")))
    }

    fn set(
        &mut self,
        _namespace: &str,
        _key: &str,
        _value: String,
    ) -> Result<(), PersistenceError> {
        Err(PersistenceError::Unavailable(String::from("offline")))
    }
}

fn catalog() -> Arc<dyn FeatureCatalog> {
    Arc::new(
        StaticCatalog::default()
            .with_hub(
                HubDeclaration::new("crm", "CRM", Icon::Contacts)
                    .feature(Feature::new("Dashboard", "/crm", Icon::Dashboard))
                    .feature(
                        Feature::new(
                            "Contacts",
                            "/crm/contacts",
                            Icon::Contacts,
                        )
                        .in_section("People"),
                    )
                    .feature(
                        Feature::new("Import", "/crm/import", Icon::Import)
                            .in_section("Tools"),
                    )
                    .feature(
                        Feature::new("Deals", "/crm/deals", Icon::Deals)
                            .in_section("Sales")
                            .requires(PlanTier::Pro),
                    ),
            )
            .with_hub(
                HubDeclaration::new("settings", "Settings", Icon::Settings)
                    .feature(Feature::new(
                        "Team",
                        "/settings/team",
                        Icon::Team,
                    )),
            ),
    )
}

fn inbox_tree() -> MenuTree {
    MenuTree::new("Inbox")
        .with_section(
            Section::new("views", "Views", Icon::Inbox)
                .default_expanded(true)
                .item(Item::new("Mine").href("/inbox?bucket=mine"))
                .item(Item::new("Unassigned").href("/inbox?bucket=unassigned"))
                .item(Item::new("Labels")),
        )
        .expect("unique sections")
        .with_bottom_item(Item::new("Inbox settings").href("/inbox/settings"))
}

fn contacts_list() -> FixedMenu {
    FixedMenu::new("Contacts", "/crm/contacts").items(vec![
        ListItem::new("c-1", "Ada Lovelace"),
        ListItem::new("c-2", "Alan Turing"),
    ])
}

fn mount<S: Persistence>(
    props: LayoutProps,
    path: &str,
    store: S,
) -> UnifiedLayout<S> {
    UnifiedLayout::mount(
        props,
        Location::parse(path),
        PlanTier::Starter,
        Some(catalog()),
        store,
    )
}

#[test]
fn given_no_hub_and_no_menu_when_mounted_then_nothing_is_rendered() {
    let layout = mount(LayoutProps::default(), "/crm", MemoryStore::new());

    assert!(layout.menu_view().is_none());
    assert!(layout.fixed_menu_view().is_none());
    assert!(layout.content_fills_width());
}

#[test]
fn given_unknown_hub_when_mounted_then_menu_is_absent() {
    let layout =
        mount(LayoutProps::for_hub("billing"), "/billing", MemoryStore::new());

    assert!(layout.menu_view().is_none());
}

#[test]
fn given_sub_route_when_mounted_then_active_section_is_forced_open() {
    let layout = mount(
        LayoutProps::for_hub("crm"),
        "/crm/contacts/42",
        MemoryStore::new(),
    );

    let menu = layout.menu_view().expect("crm menu");
    let people = &menu.sections[1];

    assert_eq!(people.section.id, "people");
    assert!(people.expanded);
    assert!(people.contains_active);
    assert!(people.items[0].active);
    assert!(!menu.sections[0].items[0].active);
    assert!(!menu.sections[2].expanded);
    assert!(layout.store().is_empty());
}

#[test]
fn given_plan_below_requirement_when_rendered_then_item_is_locked_and_inert() {
    let layout = mount(LayoutProps::for_hub("crm"), "/crm", MemoryStore::new());

    let menu = layout.menu_view().expect("crm menu");
    let deals = &menu.sections[3].items[0];

    assert!(deals.locked);
    assert!(!deals.is_interactive());
}

#[test]
fn given_toggles_when_remounted_then_preferences_survive() {
    let mut layout =
        mount(LayoutProps::for_hub("crm"), "/crm", MemoryStore::new());

    let _ = layout.reduce(LayoutIntent::ToggleSection(String::from("tools")));
    let _ = layout.reduce(LayoutIntent::ToggleCollapse);
    let store = layout.store().clone();

    let reloaded = mount(LayoutProps::for_hub("crm"), "/crm", store);
    let menu = reloaded.menu_view().expect("crm menu");

    assert!(menu.collapsed);
    assert!(menu.sections[2].expanded);
    assert_eq!(reloaded.store().raw("nav-collapsed-crm"), Some("true"));
}

#[test]
fn given_untagged_tree_titled_like_hub_when_toggled_then_hub_state_is_untouched()
{
    let tree = MenuTree::new("CRM")
        .with_section(
            Section::new("people", "People", Icon::Contacts)
                .item(Item::new("Contacts").href("/crm/contacts")),
        )
        .expect("unique sections");
    let mut layout =
        mount(LayoutProps::with_menu(tree), "/elsewhere", MemoryStore::new());

    let _ = layout.reduce(LayoutIntent::ToggleSection(String::from("people")));
    let _ = layout.reduce(LayoutIntent::ToggleCollapse);

    assert_eq!(layout.store().raw("nav-sections-crm"), None);
    assert_eq!(layout.store().raw("nav-collapsed-crm"), None);
    assert_eq!(
        layout.store().raw("nav-sections-menu-crm"),
        Some(r#"{"people":true}"#)
    );
    assert_eq!(layout.store().raw("nav-collapsed-menu-crm"), Some("true"));
}

#[test]
fn given_unknown_section_when_toggled_then_nothing_is_written() {
    let mut layout =
        mount(LayoutProps::for_hub("crm"), "/crm", MemoryStore::new());

    let _ = layout.reduce(LayoutIntent::ToggleSection(String::from("ghost")));

    assert!(layout.store().is_empty());
}

#[test]
fn given_explicit_tree_with_queries_when_location_changes_then_highlight_follows()
{
    let mut layout = mount(
        LayoutProps::with_menu(inbox_tree()).hub_id("inbox"),
        "/inbox?bucket=mine",
        MemoryStore::new(),
    );

    let menu = layout.menu_view().expect("inbox menu");
    assert!(menu.sections[0].items[0].active);
    assert!(!menu.sections[0].items[2].is_interactive());

    layout.set_location(Location::parse("/inbox?bucket=unassigned&page=2"));
    let menu = layout.menu_view().expect("inbox menu");
    assert!(!menu.sections[0].items[0].active);
    assert!(menu.sections[0].items[1].active);
    assert!(!menu.bottom_items[0].active);

    layout.set_location(Location::parse("/inbox/settings"));
    let menu = layout.menu_view().expect("inbox menu");
    assert!(menu.bottom_items[0].active);
}

#[test]
fn given_remembered_selection_when_list_remounted_then_it_is_restored() {
    let props = LayoutProps::for_hub("crm").fixed_menu(contacts_list());
    let mut layout = mount(props.clone(), "/crm/contacts", MemoryStore::new());
    assert!(!layout.content_fills_width());

    let _ = layout.reduce(LayoutIntent::Select(String::from("c-2")));
    let reloaded = mount(props, "/crm/contacts", layout.store().clone());

    let list = reloaded.fixed_menu_view().expect("list panel");
    assert_eq!(list.selected().map(|item| item.id.as_str()), Some("c-2"));
}

#[test]
fn given_refetched_items_when_remounted_then_selection_is_not_reread() {
    let mut layout = mount(
        LayoutProps::for_hub("crm").fixed_menu(contacts_list()),
        "/crm/contacts",
        MemoryStore::new(),
    );
    let _ = layout.reduce(LayoutIntent::Select(String::from("c-1")));
    let _ = layout.reduce(LayoutIntent::SearchChanged(String::from("ad")));

    let refetched = contacts_list().items(vec![ListItem::new("c-1", "Ada L.")]);
    layout.remount(
        LayoutProps::for_hub("crm")
            .page_title("Contacts")
            .fixed_menu(refetched),
    );

    let list = layout.fixed_menu_view().expect("list panel");
    assert_eq!(list.rows.len(), 1);
    assert!(list.rows[0].selected);
    assert_eq!(list.state.search(), "ad");
    assert_eq!(layout.status_bar().page_title(), "Contacts");
}

#[test]
fn given_other_list_context_when_remounted_then_selections_stay_isolated() {
    let mut layout = mount(
        LayoutProps::for_hub("crm").fixed_menu(contacts_list()),
        "/crm/contacts",
        MemoryStore::new(),
    );
    let _ = layout.reduce(LayoutIntent::Select(String::from("c-1")));

    layout.remount(LayoutProps::for_hub("crm").fixed_menu(
        FixedMenu::new("Companies", "/crm/companies")
            .items(vec![ListItem::new("c-1", "Acme")]),
    ));

    assert_eq!(layout.selected_id(), None);
}

#[test]
fn given_new_hub_when_remounted_then_tree_and_state_are_rebuilt() {
    let mut layout = mount(
        LayoutProps::for_hub("crm").stats(vec![Stat::new("Open", "3")]),
        "/crm",
        MemoryStore::new(),
    );
    let _ = layout.reduce(LayoutIntent::ToggleCollapse);

    layout.remount(LayoutProps::for_hub("settings"));
    layout.set_location(Location::parse("/settings/team"));

    let menu = layout.menu_view().expect("settings menu");
    assert_eq!(menu.title, "Settings");
    assert!(!menu.collapsed);
    assert!(menu.sections[0].items[0].active);
    assert_eq!(layout.status_bar().hub_name(), "Settings");
    assert!(layout.status_bar().stats().is_empty());
}

#[test]
fn given_offline_store_when_interacting_then_layout_keeps_working() {
    let mut layout = mount(
        LayoutProps::for_hub("crm").fixed_menu(contacts_list()),
        "/crm/import",
        OfflineStore,
    );

    let _ = layout.reduce(LayoutIntent::ToggleSection(String::from("people")));
    let _ = layout.reduce(LayoutIntent::ToggleCollapse);
    let _ = layout.reduce(LayoutIntent::Select(String::from("c-2")));

    let menu = layout.menu_view().expect("crm menu");
    assert!(menu.collapsed);
    assert!(menu.sections[1].expanded);
    assert!(menu.sections[2].expanded);
    assert_eq!(layout.selected_id(), Some("c-2"));
}

#[test]
fn given_plan_upgrade_when_rendered_again_then_lock_is_lifted() {
    let mut layout =
        mount(LayoutProps::for_hub("crm"), "/crm", MemoryStore::new());

    layout.set_plan(PlanTier::Pro);

    let menu = layout.menu_view().expect("crm menu");
    assert!(!menu.sections[3].items[0].locked);
}
