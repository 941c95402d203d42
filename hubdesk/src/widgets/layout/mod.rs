pub(crate) mod event;
pub(crate) mod view;

use std::sync::Arc;

pub(crate) use event::LayoutEvent;
use hubdesk_nav::{
    FeatureCatalog, LayoutIntent, LayoutProps, Location, Persistence,
    PlanTier, UnifiedLayout,
};
use iced::Task;

/// Boxed persistence backend chosen at startup.
pub(crate) type NavStore = Box<dyn Persistence + Send>;

/// Layout widget owning the navigation shell state.
pub(crate) struct LayoutWidget {
    layout: UnifiedLayout<NavStore>,
}

impl LayoutWidget {
    /// Mount the shell for the first page.
    pub(crate) fn new(
        props: LayoutProps,
        location: Location,
        plan: PlanTier,
        catalog: Arc<dyn FeatureCatalog>,
        store: NavStore,
    ) -> Self {
        Self {
            layout: UnifiedLayout::mount(
                props,
                location,
                plan,
                Some(catalog),
                store,
            ),
        }
    }

    /// Reduce an intent into state updates and an effect for the page.
    pub(crate) fn reduce(&mut self, intent: LayoutIntent) -> Task<LayoutEvent> {
        match self.layout.reduce(intent) {
            Some(effect) => Task::done(LayoutEvent::Effect(effect)),
            None => Task::none(),
        }
    }

    /// Apply props for the current page.
    pub(crate) fn remount(&mut self, props: LayoutProps) {
        self.layout.remount(props);
    }

    pub(crate) fn set_plan(&mut self, plan: PlanTier) {
        self.layout.set_plan(plan);
    }

    /// Return read-only access to the shell for rendering.
    pub(crate) fn shell(&self) -> &UnifiedLayout<NavStore> {
        &self.layout
    }

    pub(crate) fn location(&self) -> &Location {
        self.layout.location()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use hubdesk_nav::{
        LayoutIntent, LayoutProps, Location, MemoryStore, PlanTier,
    };

    use super::LayoutWidget;
    use crate::demo;

    fn widget(path: &str) -> LayoutWidget {
        let location = Location::parse(path);
        LayoutWidget::new(
            demo::page_props(&location, PlanTier::Free, &Default::default()),
            location,
            PlanTier::Free,
            Arc::new(demo::catalog()),
            Box::new(MemoryStore::new()),
        )
    }

    #[test]
    fn given_navigate_intent_when_reduced_then_location_changes() {
        let mut widget = widget("/crm");

        let _task = widget.reduce(LayoutIntent::Navigate(String::from(
            "/crm/contacts",
        )));

        assert_eq!(widget.location().path(), "/crm/contacts");
    }

    #[test]
    fn given_collapse_toggle_when_reduced_then_shell_reports_collapsed() {
        let mut widget = widget("/crm");

        let _task = widget.reduce(LayoutIntent::ToggleCollapse);

        assert!(widget.shell().is_collapsed());
    }

    #[test]
    fn given_props_without_menu_when_remounted_then_menu_is_hidden() {
        let mut widget = widget("/crm");

        widget.remount(LayoutProps::default());

        assert!(widget.shell().menu_view().is_none());
        assert!(widget.shell().content_fills_width());
    }
}
