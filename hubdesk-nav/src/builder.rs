//! Turns a hub declaration into a two-level [`MenuTree`].

use crate::catalog::HubDeclaration;
use crate::model::{Icon, Item, MenuTree, Section};

/// Title of the synthetic section collecting untagged features.
pub const OVERVIEW_SECTION: &str = "Overview";

const SECTION_ICONS: &[(&str, Icon)] = &[
    ("overview", Icon::Dashboard),
    ("people", Icon::Contacts),
    ("contacts", Icon::Contacts),
    ("companies", Icon::Companies),
    ("engagement", Icon::Activity),
    ("activities", Icon::Activity),
    ("sales", Icon::Deals),
    ("pipeline", Icon::Deals),
    ("inbox", Icon::Inbox),
    ("channels", Icon::Channels),
    ("mailboxes", Icon::Mailbox),
    ("automation", Icon::Automation),
    ("integrations", Icon::Integrations),
    ("reports", Icon::Reports),
    ("analytics", Icon::Reports),
    ("tools", Icon::Import),
    ("team", Icon::Team),
    ("billing", Icon::Billing),
];

/// Where a composer gets its menu from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuSource {
    /// Grouped from a hub's flat feature list.
    Hub(HubDeclaration),
    /// Caller-provided tree, used as-is.
    Explicit(MenuTree),
}

impl MenuSource {
    /// Hub id owning the persisted state of this menu, if any.
    pub fn hub_id(&self) -> Option<&str> {
        match self {
            MenuSource::Hub(hub) => Some(hub.id.as_str()),
            MenuSource::Explicit(_) => None,
        }
    }
}

/// Build the tree for `source`. `None` means "render nothing".
pub fn build_tree(source: Option<&MenuSource>) -> Option<MenuTree> {
    match source? {
        MenuSource::Explicit(tree) => Some(tree.clone()),
        MenuSource::Hub(hub) => Some(group_features(hub)),
    }
}

/// Deterministic persistence key for a section title.
pub fn section_id(title: &str) -> String {
    title
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// Display icon for a section title, falling back to settings.
pub fn section_icon(title: &str) -> Icon {
    let key = section_id(title);
    SECTION_ICONS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, icon)| icon.clone())
        .unwrap_or(Icon::Settings)
}

fn group_features(hub: &HubDeclaration) -> MenuTree {
    let mut overview = Section::new(
        section_id(OVERVIEW_SECTION),
        OVERVIEW_SECTION,
        hub.icon.clone(),
    )
    .default_expanded(true);
    let mut grouped: Vec<Section> = Vec::new();

    for feature in &hub.features {
        let mut item = Item::new(&feature.name)
            .href(&feature.path)
            .icon(feature.icon.clone());
        item.required_plan = feature.required_plan;

        let Some(tag) = feature.section.as_deref() else {
            overview.items.push(item);
            continue;
        };

        let id = section_id(tag);
        if id == overview.id {
            overview.items.push(item);
            continue;
        }
        match grouped.iter_mut().find(|section| section.id == id) {
            Some(section) => section.items.push(item),
            None => grouped.push(
                Section::new(id, tag, section_icon(tag)).item(item),
            ),
        }
    }

    let mut tree = MenuTree::new(&hub.name);
    for section in std::iter::once(overview)
        .filter(|section| !section.items.is_empty())
        .chain(grouped)
    {
        if let Err(err) = tree.push_section(section) {
            log::warn!("skipping section in hub {}: {err}", hub.id);
        }
    }
    tree
}

#[cfg(test)]
mod tests {
    use super::{MenuSource, build_tree, section_icon, section_id};
    use crate::catalog::{Feature, HubDeclaration};
    use crate::model::{Icon, Item, MenuTree, PlanTier, Section};

    fn crm_hub() -> HubDeclaration {
        HubDeclaration::new("crm", "CRM", Icon::Contacts)
            .feature(Feature::new("Dashboard", "/crm", Icon::Dashboard))
            .feature(
                Feature::new("Contacts", "/crm/contacts", Icon::Contacts)
                    .in_section("People"),
            )
            .feature(
                Feature::new("Deals", "/crm/deals", Icon::Deals)
                    .in_section("Sales  Pipeline")
                    .requires(PlanTier::Pro),
            )
            .feature(
                Feature::new("Companies", "/crm/companies", Icon::Companies)
                    .in_section("People"),
            )
            .feature(
                Feature::new("Webhooks", "/crm/webhooks", Icon::Integrations)
                    .in_section("Developer"),
            )
    }

    #[test]
    fn given_no_source_when_building_then_tree_is_absent() {
        assert_eq!(build_tree(None), None);
    }

    #[test]
    fn given_explicit_tree_when_building_then_it_is_returned_unchanged() {
        let tree = MenuTree::new("Inbox")
            .with_section(
                Section::new("views", "Views", Icon::Inbox)
                    .item(Item::new("Mine").href("/inbox?bucket=mine")),
            )
            .expect("unique sections");

        let built = build_tree(Some(&MenuSource::Explicit(tree.clone())));

        assert_eq!(built, Some(tree));
    }

    #[test]
    fn given_hub_features_when_building_then_untagged_go_to_leading_overview() {
        let tree = build_tree(Some(&MenuSource::Hub(crm_hub())))
            .expect("hub tree");
        let sections = tree.sections();

        assert_eq!(tree.title, "CRM");
        assert_eq!(sections[0].id, "overview");
        assert_eq!(sections[0].icon, Icon::Contacts);
        assert!(sections[0].default_expanded);
        assert_eq!(sections[0].items[0].href.as_deref(), Some("/crm"));

        let ids: Vec<&str> =
            sections.iter().map(|section| section.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["overview", "people", "sales-pipeline", "developer"]
        );
        assert!(sections[1..].iter().all(|section| !section.default_expanded));
        assert_eq!(sections[1].items.len(), 2);
        assert_eq!(sections[2].items[0].required_plan, Some(PlanTier::Pro));
    }

    #[test]
    fn given_unknown_section_title_when_resolving_icon_then_settings_is_used() {
        assert_eq!(section_icon("People"), Icon::Contacts);
        assert_eq!(section_icon("Developer"), Icon::Settings);
    }

    #[test]
    fn given_titles_with_spacing_when_deriving_ids_then_ids_are_stable() {
        assert_eq!(section_id("Sales  Pipeline"), "sales-pipeline");
        assert_eq!(section_id(" Team\tSettings "), "team-settings");
        assert_eq!(section_id("People"), section_id("people"));
    }
}
