use hubdesk_nav::{
    LayoutEffect, LayoutIntent, ListItem, Location, PlanTier,
};
use iced::Task;

use crate::app::{App, AppEvent};
use crate::demo::{self, CYCLE_PLAN_ACTION};
use crate::widgets::layout::LayoutEvent;
use crate::widgets::page::{PageEvent, PageIntent};

/// Route a layout UI event through the widget reducer and map effects.
pub(crate) fn route_event(app: &mut App, event: LayoutEvent) -> Task<AppEvent> {
    match event {
        LayoutEvent::Intent(intent) => {
            app.widgets.layout.reduce(intent).map(AppEvent::Layout)
        },
        LayoutEvent::Effect(effect) => route_effect(app, effect),
    }
}

/// Route a layout effect to page state and follow-up tasks.
pub(crate) fn route_effect(
    app: &mut App,
    effect: LayoutEffect,
) -> Task<AppEvent> {
    match effect {
        LayoutEffect::Navigated(location) => {
            log::info!("page {location}");
            app.widgets.page.reduce(PageIntent::DismissNotice);
            refresh_page(app);
            Task::none()
        },
        LayoutEffect::Selected(item) => open_record(app, &item),
        LayoutEffect::SearchChanged(text) => {
            update_query(app, |query| query.search = text);
            Task::none()
        },
        LayoutEffect::SwitchChanged(value) => {
            update_query(app, |query| query.switch = Some(value));
            Task::none()
        },
        LayoutEffect::FiltersApplied(filters) => {
            update_query(app, |query| query.filters = filters);
            Task::none()
        },
        LayoutEffect::ActionInvoked(id) if id == CYCLE_PLAN_ACTION => {
            let plan = next_plan(app.plan);
            app.plan = plan;
            app.widgets.layout.set_plan(plan);
            refresh_page(app);
            notify(format!("Plan switched to {plan}"))
        },
        LayoutEffect::ActionInvoked(id) => {
            notify(format!("Action `{id}` is not available in the demo data"))
        },
    }
}

/// Rebuild page props for the current location and hand them to the layout.
pub(crate) fn refresh_page(app: &mut App) {
    let props = demo::page_props(
        app.widgets.layout.location(),
        app.plan,
        &app.queries,
    );
    app.widgets.layout.remount(props);
}

fn open_record(app: &App, item: &ListItem) -> Task<AppEvent> {
    match record_href(app, item) {
        Some(href) => Task::done(AppEvent::Layout(LayoutEvent::Intent(
            LayoutIntent::Navigate(href),
        ))),
        None => Task::none(),
    }
}

/// Detail URL for `item`, keeping the current query so the list it was
/// picked from stays scoped the same way.
fn record_href(app: &App, item: &ListItem) -> Option<String> {
    let list = app.widgets.layout.shell().props().fixed_menu.as_ref()?;
    let current = app.widgets.layout.location();
    let target =
        Location::new(list.detail_href(&item.id), current.query().clone());
    Some(target.to_string())
}

fn update_query(app: &mut App, apply: impl FnOnce(&mut demo::ListQuery)) {
    let Some(context) = app
        .widgets
        .layout
        .shell()
        .props()
        .fixed_menu
        .as_ref()
        .map(|list| list.list_context())
    else {
        return;
    };
    apply(app.queries.entry(context).or_default());
    refresh_page(app);
}

fn notify(message: String) -> Task<AppEvent> {
    Task::done(AppEvent::Page(PageEvent::Intent(PageIntent::ShowNotice(
        message,
    ))))
}

fn next_plan(plan: PlanTier) -> PlanTier {
    match plan {
        PlanTier::Free => PlanTier::Starter,
        PlanTier::Starter => PlanTier::Pro,
        PlanTier::Pro => PlanTier::Enterprise,
        PlanTier::Enterprise => PlanTier::Free,
    }
}
