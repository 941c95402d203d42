use super::UnifiedLayout;
use super::event::{ItemRef, LayoutEffect, LayoutIntent};
use crate::active::Location;
use crate::model::Item;
use crate::persistence::Persistence;
use crate::status_bar::ActionTarget;

impl<S: Persistence> UnifiedLayout<S> {
    /// Apply one user interaction. Interactions on missing or inert targets
    /// are no-ops.
    pub fn reduce(&mut self, intent: LayoutIntent) -> Option<LayoutEffect> {
        match intent {
            LayoutIntent::ToggleSection(section_id) => {
                let menu = self.menu.as_mut()?;
                menu.tree.section(&section_id)?;
                let _ = menu.expansion.toggle(&mut self.store, &section_id);
                None
            },
            LayoutIntent::ToggleCollapse => {
                let menu = self.menu.as_mut()?;
                let _ = menu.collapse.toggle(&mut self.store);
                None
            },
            LayoutIntent::OpenItem(item_ref) => {
                let href = {
                    let item = self.item(item_ref)?;
                    if self.access_gate().is_locked(item) {
                        log::debug!("ignoring click on locked {}", item.title);
                        return None;
                    }
                    item.href.clone().filter(|href| !href.is_empty())?
                };
                Some(self.navigate(&href))
            },
            LayoutIntent::Navigate(href) => Some(self.navigate(&href)),
            LayoutIntent::TriggerAction(index) => {
                let target =
                    self.status_bar.actions().get(index)?.target.clone();
                match target {
                    ActionTarget::Link(href) => Some(self.navigate(&href)),
                    ActionTarget::Invoke(id) => {
                        Some(LayoutEffect::ActionInvoked(id))
                    },
                }
            },
            LayoutIntent::Select(id) => {
                let list = self.list.as_mut()?;
                let item = list.menu.item(&id)?.clone();
                list.selection.select(&mut self.store, &id);
                Some(LayoutEffect::Selected(item))
            },
            LayoutIntent::SearchChanged(text) => {
                let list = self.list.as_mut()?;
                list.state.set_search(&text);
                Some(LayoutEffect::SearchChanged(text))
            },
            LayoutIntent::OpenFilters => {
                self.list.as_mut()?.state.open_filters();
                None
            },
            LayoutIntent::ToggleFilterOption { group, value } => {
                let list = self.list.as_mut()?;
                list.state.toggle_draft(&list.menu, &group, &value);
                None
            },
            LayoutIntent::ApplyFilters => {
                let filters = self.list.as_mut()?.state.apply_filters();
                Some(LayoutEffect::FiltersApplied(filters))
            },
            LayoutIntent::ClearFilters => {
                let filters = self.list.as_mut()?.state.clear_filters();
                Some(LayoutEffect::FiltersApplied(filters))
            },
            LayoutIntent::CancelFilters => {
                self.list.as_mut()?.state.cancel_filters();
                None
            },
            LayoutIntent::SwitchChanged(value) => {
                let list = self.list.as_mut()?;
                if !list.state.set_switch(&list.menu, &value) {
                    log::debug!("ignoring unknown switch value {value}");
                    return None;
                }
                Some(LayoutEffect::SwitchChanged(value))
            },
        }
    }

    fn item(&self, item_ref: ItemRef) -> Option<&Item> {
        let tree = &self.menu.as_ref()?.tree;
        match item_ref {
            ItemRef::Section { section, item } => {
                tree.sections().get(section)?.items.get(item)
            },
            ItemRef::Bottom(index) => tree.bottom_items.get(index),
        }
    }

    fn navigate(&mut self, href: &str) -> LayoutEffect {
        let location = Location::parse(href);
        log::debug!("navigating to {href}");
        self.set_location(location.clone());
        LayoutEffect::Navigated(location)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::active::Location;
    use crate::catalog::{
        Feature, FeatureCatalog, HubDeclaration, StaticCatalog,
    };
    use crate::fixed_menu::{Choice, FilterGroup, FixedMenu, ListItem};
    use crate::layout::{
        ItemRef, LayoutEffect, LayoutIntent, LayoutProps, UnifiedLayout,
    };
    use crate::model::{Icon, PlanTier};
    use crate::persistence::MemoryStore;
    use crate::status_bar::StatusAction;

    fn catalog() -> Arc<dyn FeatureCatalog> {
        Arc::new(
            StaticCatalog::default().with_hub(
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
                        Feature::new("Deals", "/crm/deals", Icon::Deals)
                            .in_section("Sales")
                            .requires(PlanTier::Pro),
                    ),
            ),
        )
    }

    fn contacts() -> FixedMenu {
        FixedMenu::new("Contacts", "/crm/contacts")
            .items(vec![
                ListItem::new("c-1", "Ada Lovelace"),
                ListItem::new("c-2", "Alan Turing"),
            ])
            .filter(
                FilterGroup::new("lifecycle", "Lifecycle")
                    .option(Choice::new("lead", "Lead")),
            )
    }

    fn mount(path: &str, plan: PlanTier) -> UnifiedLayout<MemoryStore> {
        UnifiedLayout::mount(
            LayoutProps::for_hub("crm")
                .page_title("Contacts")
                .actions(vec![
                    StatusAction::link("Deals", "/crm/deals"),
                    StatusAction::invoke("New", "new-contact"),
                ])
                .fixed_menu(contacts()),
            Location::parse(path),
            plan,
            Some(catalog()),
            MemoryStore::new(),
        )
    }

    #[test]
    fn given_locked_item_when_opened_then_nothing_happens() {
        let mut layout = mount("/crm", PlanTier::Free);

        let effect = layout.reduce(LayoutIntent::OpenItem(ItemRef::Section {
            section: 2,
            item: 0,
        }));

        assert_eq!(effect, None);
        assert_eq!(layout.location().path(), "/crm");
    }

    #[test]
    fn given_open_item_when_reduced_then_location_and_section_follow() {
        let mut layout = mount("/crm", PlanTier::Pro);

        let effect = layout.reduce(LayoutIntent::OpenItem(ItemRef::Section {
            section: 2,
            item: 0,
        }));

        assert_eq!(
            effect,
            Some(LayoutEffect::Navigated(Location::parse("/crm/deals")))
        );
        let expansion = layout.expansion().expect("menu mounted");
        assert!(expansion.is_expanded("sales"));
        assert_eq!(expansion.preferences().get("sales"), Some(&false));
    }

    #[test]
    fn given_status_actions_when_triggered_then_link_navigates_and_invoke_reports()
    {
        let mut layout = mount("/crm", PlanTier::Pro);

        assert!(matches!(
            layout.reduce(LayoutIntent::TriggerAction(0)),
            Some(LayoutEffect::Navigated(_))
        ));
        assert_eq!(
            layout.reduce(LayoutIntent::TriggerAction(1)),
            Some(LayoutEffect::ActionInvoked(String::from("new-contact")))
        );
        assert_eq!(layout.reduce(LayoutIntent::TriggerAction(5)), None);
    }

    #[test]
    fn given_list_row_when_selected_then_caller_is_notified_and_selection_saved()
    {
        let mut layout = mount("/crm/contacts", PlanTier::Free);

        let effect = layout.reduce(LayoutIntent::Select(String::from("c-2")));

        assert!(matches!(
            effect,
            Some(LayoutEffect::Selected(ref item)) if item.id == "c-2"
        ));
        assert_eq!(layout.selected_id(), Some("c-2"));
        assert_eq!(
            layout.store().raw("nav-selected-crm/contacts"),
            Some("\"c-2\"")
        );
        assert_eq!(
            layout.reduce(LayoutIntent::Select(String::from("nope"))),
            None
        );
    }

    #[test]
    fn given_filter_draft_when_applied_then_caller_gets_filter_map() {
        let mut layout = mount("/crm/contacts", PlanTier::Free);

        let _ = layout.reduce(LayoutIntent::OpenFilters);
        let _ = layout.reduce(LayoutIntent::ToggleFilterOption {
            group: String::from("lifecycle"),
            value: String::from("lead"),
        });
        let effect = layout.reduce(LayoutIntent::ApplyFilters);

        let Some(LayoutEffect::FiltersApplied(filters)) = effect else {
            panic!("expected applied filters");
        };
        assert_eq!(filters.get("lifecycle").map(String::as_str), Some("lead"));
        assert_eq!(
            layout.reduce(LayoutIntent::ClearFilters),
            Some(LayoutEffect::FiltersApplied(Default::default()))
        );
    }

    #[test]
    fn given_search_text_when_typed_then_raw_text_is_forwarded() {
        let mut layout = mount("/crm/contacts", PlanTier::Free);

        assert_eq!(
            layout.reduce(LayoutIntent::SearchChanged(String::from(" ad"))),
            Some(LayoutEffect::SearchChanged(String::from(" ad")))
        );
        let view = layout.fixed_menu_view().expect("list mounted");
        assert_eq!(view.state.search(), " ad");
    }
}
