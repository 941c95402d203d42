//! Sample hubs and records shown by the desktop shell.

use std::collections::BTreeMap;

use hubdesk_nav::{
    Avatar, Choice, Feature, FilterGroup, FilterMap, FixedMenu, HubDeclaration,
    Icon, Item, LayoutProps, ListContext, ListItem, Location, MenuTree,
    PlanTier, Section, Stat, StaticCatalog, StatusAction, SwitchConfig,
};

pub(crate) const CYCLE_PLAN_ACTION: &str = "cycle-plan";
pub(crate) const NEW_CONTACT_ACTION: &str = "new-contact";

const CONTACTS_BASE: &str = "/crm/contacts";
const CONVERSATIONS_BASE: &str = "/inbox/conversations";
const INBOX_HUB: &str = "inbox";

/// Hub shown in the hub rail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct HubLink {
    pub(crate) id: &'static str,
    pub(crate) name: &'static str,
    pub(crate) icon: Icon,
}

pub(crate) fn hub_links() -> Vec<HubLink> {
    vec![
        HubLink {
            id: "crm",
            name: "CRM",
            icon: Icon::Contacts,
        },
        HubLink {
            id: INBOX_HUB,
            name: "Inbox",
            icon: Icon::Inbox,
        },
        HubLink {
            id: "settings",
            name: "Settings",
            icon: Icon::Settings,
        },
    ]
}

/// Feature catalog for the catalog-driven hubs.
pub(crate) fn catalog() -> StaticCatalog {
    StaticCatalog::default()
        .with_hub(
            HubDeclaration::new("crm", "CRM", Icon::Contacts)
                .feature(Feature::new("Dashboard", "/crm", Icon::Dashboard))
                .feature(
                    Feature::new("Contacts", CONTACTS_BASE, Icon::Contacts)
                        .in_section("People"),
                )
                .feature(
                    Feature::new("Companies", "/crm/companies", Icon::Companies)
                        .in_section("People"),
                )
                .feature(
                    Feature::new(
                        "Activities",
                        "/crm/activities",
                        Icon::Activity,
                    )
                    .in_section("Engagement"),
                )
                .feature(
                    Feature::new("Deals", "/crm/deals", Icon::Deals)
                        .in_section("Sales")
                        .requires(PlanTier::Starter),
                )
                .feature(
                    Feature::new(
                        "Forecast",
                        "/crm/deals/forecast",
                        Icon::Reports,
                    )
                    .in_section("Sales")
                    .requires(PlanTier::Pro),
                )
                .feature(
                    Feature::new(
                        "Automation",
                        "/crm/automation",
                        Icon::Automation,
                    )
                    .in_section("Automation")
                    .requires(PlanTier::Enterprise),
                )
                .feature(
                    Feature::new("Import", "/crm/import", Icon::Import)
                        .in_section("Tools"),
                ),
        )
        .with_hub(
            HubDeclaration::new("settings", "Settings", Icon::Settings)
                .feature(Feature::new("Profile", "/settings", Icon::Settings))
                .feature(
                    Feature::new("Members", "/settings/team", Icon::Team)
                        .in_section("Team"),
                )
                .feature(
                    Feature::new("Billing", "/settings/billing", Icon::Billing)
                        .in_section("Billing"),
                )
                .feature(
                    Feature::new(
                        "Integrations",
                        "/settings/integrations",
                        Icon::Integrations,
                    )
                    .in_section("Integrations")
                    .requires(PlanTier::Starter),
                ),
        )
}

/// Hand-built inbox tree filtered by query parameters.
pub(crate) fn inbox_menu() -> MenuTree {
    let conversations = conversations();
    let unread = |bucket: &str| -> u32 {
        conversations
            .iter()
            .filter(|conversation| {
                bucket == "all" || conversation.bucket == bucket
            })
            .map(|conversation| conversation.unread)
            .sum()
    };

    let views = Section::new("views", "Views", Icon::Inbox)
        .default_expanded(true)
        .item(
            Item::new("Mine")
                .href("/inbox?bucket=mine")
                .icon(Icon::Inbox)
                .badge(unread("mine")),
        )
        .item(
            Item::new("Unassigned")
                .href("/inbox?bucket=unassigned")
                .icon(Icon::Inbox)
                .badge(unread("unassigned"))
                .colors("#161822", "#E5C07B"),
        )
        .item(
            Item::new("All conversations")
                .href("/inbox?bucket=all")
                .icon(Icon::Inbox)
                .badge(120),
        );
    let channels = Section::new("channels", "Channels", Icon::Channels)
        .item(
            Item::new("Email")
                .href("/inbox/channels/email")
                .icon(Icon::Mailbox),
        )
        .item(
            Item::new("Live chat")
                .href("/inbox/channels/chat")
                .icon(Icon::Custom(String::from("chat"))),
        )
        .item(
            Item::new("Auto-assign rules")
                .href("/inbox/automation")
                .icon(Icon::Automation)
                .required_plan(PlanTier::Pro),
        );
    let labels = Section::new("labels", "Labels", Icon::Tag)
        .item(Item::new("VIP").icon(Icon::Tag))
        .item(Item::new("Legacy import").href("/inbox/legacy").locked(true));

    let mut tree = MenuTree::new("Inbox")
        .with_bottom_item(
            Item::new("Inbox settings")
                .href("/inbox/settings")
                .icon(Icon::Settings),
        );
    for section in [views, channels, labels] {
        if let Err(err) = tree.push_section(section) {
            log::warn!("skipping inbox section: {err}");
        }
    }
    tree
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Contact {
    pub(crate) id: &'static str,
    pub(crate) name: &'static str,
    pub(crate) company: &'static str,
    pub(crate) lifecycle: &'static str,
    pub(crate) owner: &'static str,
    pub(crate) last_seen: &'static str,
    pub(crate) open_tasks: u32,
}

pub(crate) fn contacts() -> Vec<Contact> {
    let contact = |id, name, company, lifecycle, owner, last_seen, open_tasks| {
        Contact {
            id,
            name,
            company,
            lifecycle,
            owner,
            last_seen,
            open_tasks,
        }
    };
    vec![
        contact(
            "c-1",
            "Ada Lovelace",
            "Analytical Engines",
            "customer",
            "me",
            "2h",
            3,
        ),
        contact(
            "c-2",
            "Alan Turing",
            "Bletchley Labs",
            "lead",
            "team",
            "1d",
            0,
        ),
        contact(
            "c-3",
            "Grace Hopper",
            "Compiler Co",
            "customer",
            "team",
            "5m",
            12,
        ),
        contact(
            "c-4",
            "Edsger Dijkstra",
            "Shortest Path BV",
            "lead",
            "me",
            "3d",
            1,
        ),
        contact(
            "c-5",
            "Barbara Liskov",
            "Substitution Inc",
            "churned",
            "me",
            "2w",
            0,
        ),
        contact(
            "c-6",
            "Ken Thompson",
            "Bell Works",
            "customer",
            "team",
            "4h",
            140,
        ),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Conversation {
    pub(crate) id: &'static str,
    pub(crate) subject: &'static str,
    pub(crate) from: &'static str,
    pub(crate) mailbox: &'static str,
    pub(crate) bucket: &'static str,
    pub(crate) age: &'static str,
    pub(crate) unread: u32,
}

pub(crate) fn conversations() -> Vec<Conversation> {
    let conversation = |id, subject, from, mailbox, bucket, age, unread| {
        Conversation {
            id,
            subject,
            from,
            mailbox,
            bucket,
            age,
            unread,
        }
    };
    vec![
        conversation(
            "t-1",
            "Invoice question",
            "Ada Lovelace",
            "support",
            "mine",
            "5m",
            2,
        ),
        conversation(
            "t-2",
            "Demo request",
            "Alan Turing",
            "sales",
            "unassigned",
            "1h",
            1,
        ),
        conversation(
            "t-3",
            "Password reset",
            "Grace Hopper",
            "support",
            "unassigned",
            "3h",
            4,
        ),
        conversation(
            "t-4",
            "Renewal terms",
            "Ken Thompson",
            "sales",
            "mine",
            "1d",
            0,
        ),
    ]
}

/// Page-side filters of one list, driven by layout callbacks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct ListQuery {
    pub(crate) search: String,
    pub(crate) filters: FilterMap,
    pub(crate) switch: Option<String>,
}

impl ListQuery {
    fn matches_search(&self, fields: &[&str]) -> bool {
        let needle = self.search.trim().to_lowercase();
        needle.is_empty()
            || fields
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
    }

    fn matches_filter(&self, key: &str, value: &str) -> bool {
        self.filters.get(key).is_none_or(|wanted| wanted == value)
    }
}

/// Queries keyed by list context.
pub(crate) type ListQueries = BTreeMap<ListContext, ListQuery>;

/// First path segment of `location`, the hub it belongs to.
pub(crate) fn hub_of(location: &Location) -> Option<&str> {
    location
        .path()
        .trim_start_matches('/')
        .split('/')
        .next()
        .filter(|segment| !segment.is_empty())
}

/// Everything the layout needs to render `location`.
pub(crate) fn page_props(
    location: &Location,
    plan: PlanTier,
    queries: &ListQueries,
) -> LayoutProps {
    let path = location.path();
    let plan_stat = Stat::new("Plan", plan.as_str()).icon(Icon::Billing);
    let upgrade = StatusAction::invoke("Switch plan", CYCLE_PLAN_ACTION)
        .icon(Icon::Billing);

    let props = match hub_of(location) {
        Some("crm") if path.starts_with(CONTACTS_BASE) => {
            let list = contacts_menu(queries);
            let contacts = contacts();
            let count = |lifecycle: &str| {
                contacts
                    .iter()
                    .filter(|contact| contact.lifecycle == lifecycle)
                    .count()
                    .to_string()
            };
            LayoutProps::for_hub("crm")
                .page_title("Contacts")
                .stats(vec![
                    Stat::new("Contacts", contacts.len().to_string())
                        .icon(Icon::Contacts),
                    Stat::new("Leads", count("lead")),
                    Stat::new("Customers", count("customer")),
                    Stat::new("Shown", list.items.len().to_string()),
                    plan_stat,
                ])
                .actions(vec![
                    StatusAction::link("Import", "/crm/import")
                        .icon(Icon::Import),
                    StatusAction::invoke("New contact", NEW_CONTACT_ACTION),
                    upgrade,
                ])
                .fixed_menu(list)
        },
        Some("crm") => LayoutProps::for_hub("crm")
            .page_title(crm_title(path))
            .stats(vec![
                Stat::new("Open deals", "12").icon(Icon::Deals),
                Stat::new("Pipeline", "$48k"),
                Stat::new("Won this month", "5"),
                Stat::new("Activities", "31").icon(Icon::Activity),
                plan_stat,
                Stat::new("Tasks", "7"),
            ])
            .actions(vec![upgrade]),
        Some(INBOX_HUB) if path.starts_with("/inbox/settings") => {
            LayoutProps::with_menu(inbox_menu())
                .hub_id(INBOX_HUB)
                .page_title("Inbox settings")
                .stats(vec![plan_stat])
                .actions(vec![upgrade])
        },
        Some(INBOX_HUB) => {
            let bucket = location
                .query()
                .get("bucket")
                .map(String::as_str)
                .unwrap_or("all");
            let list = conversations_menu(queries, bucket);
            LayoutProps::with_menu(inbox_menu())
                .hub_id(INBOX_HUB)
                .page_title("Conversations")
                .stats(vec![
                    Stat::new("Open", list.items.len().to_string())
                        .icon(Icon::Inbox),
                    Stat::new("Bucket", bucket),
                    plan_stat,
                ])
                .actions(vec![upgrade])
                .fixed_menu(list)
        },
        Some("settings") => LayoutProps::for_hub("settings")
            .page_title(settings_title(path))
            .stats(vec![plan_stat])
            .actions(vec![upgrade]),
        _ => LayoutProps::default().page_title("Not found"),
    };
    log::debug!("page props for {path}: {}", props.page_title);
    props
}

fn crm_title(path: &str) -> &'static str {
    match path {
        "/crm" => "Dashboard",
        path if path.starts_with("/crm/companies") => "Companies",
        path if path.starts_with("/crm/activities") => "Activities",
        path if path.starts_with("/crm/deals/forecast") => "Forecast",
        path if path.starts_with("/crm/deals") => "Deals",
        path if path.starts_with("/crm/automation") => "Automation",
        path if path.starts_with("/crm/import") => "Import",
        _ => "Not found",
    }
}

fn settings_title(path: &str) -> &'static str {
    match path {
        "/settings" => "Profile",
        path if path.starts_with("/settings/team") => "Members",
        path if path.starts_with("/settings/billing") => "Billing",
        path if path.starts_with("/settings/integrations") => "Integrations",
        _ => "Not found",
    }
}

fn contacts_menu(queries: &ListQueries) -> FixedMenu {
    let menu = FixedMenu::new("Contacts", CONTACTS_BASE)
        .searchable("Search contacts")
        .filter(
            FilterGroup::new("lifecycle", "Lifecycle")
                .option(Choice::new("lead", "Lead"))
                .option(Choice::new("customer", "Customer"))
                .option(Choice::new("churned", "Churned")),
        )
        .filter(
            FilterGroup::new("owner", "Owner")
                .option(Choice::new("me", "Me"))
                .option(Choice::new("team", "Team")),
        );
    let query = queries.get(&menu.list_context()).cloned().unwrap_or_default();

    let items = contacts()
        .into_iter()
        .filter(|contact| {
            query.matches_search(&[contact.name, contact.company])
        })
        .filter(|contact| query.matches_filter("lifecycle", contact.lifecycle))
        .filter(|contact| query.matches_filter("owner", contact.owner))
        .map(|contact| {
            let mut item = ListItem::new(contact.id, contact.name)
                .subtitle(contact.company)
                .time_label(contact.last_seen)
                .avatar(Avatar::Initials(contact.name.to_string()));
            if contact.open_tasks > 0 {
                item = item.badge(contact.open_tasks);
            }
            item
        })
        .collect();
    menu.items(items)
}

fn conversations_menu(queries: &ListQueries, bucket: &str) -> FixedMenu {
    let menu = FixedMenu::new("Conversations", CONVERSATIONS_BASE)
        .searchable("Search conversations")
        .switch(SwitchConfig {
            label: String::from("Mailbox"),
            options: vec![
                Choice::new("all", "All"),
                Choice::new("support", "Support"),
                Choice::new("sales", "Sales"),
            ],
            initial: Some(String::from("all")),
        });
    let query = queries.get(&menu.list_context()).cloned().unwrap_or_default();
    let mailbox = query.switch.as_deref().unwrap_or("all");

    let items = conversations()
        .into_iter()
        .filter(|conversation| {
            bucket == "all" || conversation.bucket == bucket
        })
        .filter(|conversation| {
            mailbox == "all" || conversation.mailbox == mailbox
        })
        .filter(|conversation| {
            query.matches_search(&[conversation.subject, conversation.from])
        })
        .map(|conversation| {
            let mut item = ListItem::new(conversation.id, conversation.subject)
                .subtitle(conversation.from)
                .time_label(conversation.age)
                .avatar(Avatar::Icon(Icon::Mailbox));
            if conversation.unread > 0 {
                item = item.badge(conversation.unread);
            }
            item
        })
        .collect();
    menu.items(items)
}

/// Detail lines for a list record addressed by `location`, if any.
pub(crate) fn record_details(
    location: &Location,
) -> Option<Vec<(String, String)>> {
    let path = location.path();
    if let Some(id) = detail_id(path, CONTACTS_BASE) {
        let contact = contacts().into_iter().find(|contact| contact.id == id)?;
        return Some(vec![
            (String::from("Name"), contact.name.to_string()),
            (String::from("Company"), contact.company.to_string()),
            (String::from("Lifecycle"), contact.lifecycle.to_string()),
            (String::from("Owner"), contact.owner.to_string()),
            (String::from("Open tasks"), contact.open_tasks.to_string()),
        ]);
    }
    let id = detail_id(path, CONVERSATIONS_BASE)?;
    let conversation = conversations()
        .into_iter()
        .find(|conversation| conversation.id == id)?;
    Some(vec![
        (String::from("Subject"), conversation.subject.to_string()),
        (String::from("From"), conversation.from.to_string()),
        (String::from("Mailbox"), conversation.mailbox.to_string()),
        (String::from("Received"), conversation.age.to_string()),
    ])
}

fn detail_id<'a>(path: &'a str, base: &str) -> Option<&'a str> {
    path.strip_prefix(base)?
        .strip_prefix('/')
        .filter(|id| !id.is_empty() && !id.contains('/'))
}

#[cfg(test)]
mod tests {
    use hubdesk_nav::{
        FeatureCatalog, ListContext, Location, PlanAccess, PlanTier,
    };

    use super::{
        ListQueries, ListQuery, catalog, hub_of, inbox_menu, page_props,
        record_details,
    };

    #[test]
    fn given_locations_when_resolving_hub_then_first_segment_is_used() {
        assert_eq!(hub_of(&Location::parse("/crm/contacts/c-1")), Some("crm"));
        assert_eq!(
            hub_of(&Location::parse("/inbox?bucket=mine")),
            Some("inbox")
        );
        assert_eq!(hub_of(&Location::parse("/")), None);
    }

    #[test]
    fn given_catalog_when_checking_forecast_then_pro_is_required() {
        let catalog = catalog();

        assert!(!catalog.has_feature_access(
            "crm",
            "/crm/deals/forecast",
            PlanTier::Starter
        ));
        assert!(catalog.has_feature_access(
            "crm",
            "/crm/deals",
            PlanTier::Starter
        ));
        assert_eq!(catalog.hub_ids(), vec!["crm", "settings"]);
    }

    #[test]
    fn given_contacts_search_when_building_props_then_list_is_filtered() {
        let mut queries = ListQueries::new();
        queries.insert(
            ListContext::from_base_path("/crm/contacts"),
            ListQuery {
                search: String::from("GRACE"),
                ..ListQuery::default()
            },
        );

        let props = page_props(
            &Location::parse("/crm/contacts"),
            PlanTier::Free,
            &queries,
        );

        let list = props.fixed_menu.expect("contacts list");
        assert_eq!(list.items.len(), 1);
        assert_eq!(list.items[0].id, "c-3");
        assert_eq!(props.page_title, "Contacts");
    }

    #[test]
    fn given_inbox_bucket_when_building_props_then_explicit_menu_is_used() {
        let props = page_props(
            &Location::parse("/inbox?bucket=unassigned"),
            PlanTier::Free,
            &ListQueries::new(),
        );

        assert_eq!(props.menu, Some(inbox_menu()));
        assert_eq!(props.hub_id.as_deref(), Some("inbox"));
        let list = props.fixed_menu.expect("conversation list");
        assert!(
            list.items
                .iter()
                .all(|item| item.id == "t-2" || item.id == "t-3")
        );
    }

    #[test]
    fn given_unknown_hub_when_building_props_then_nothing_is_rendered() {
        let props = page_props(
            &Location::parse("/nowhere"),
            PlanTier::Free,
            &ListQueries::new(),
        );

        assert_eq!(props.hub_id, None);
        assert_eq!(props.menu, None);
    }

    #[test]
    fn given_detail_location_when_resolving_then_record_is_described() {
        let details = record_details(&Location::parse("/crm/contacts/c-2"))
            .expect("contact details");

        assert_eq!(details[0].1, "Alan Turing");
        assert!(record_details(&Location::parse("/crm/contacts")).is_none());
        assert!(record_details(&Location::parse("/crm/contacts/zz")).is_none());
    }
}
