use iced::Task;

use super::{App, AppEvent};
use crate::routers;

/// Thin dispatch: route each event to its owning router.
pub(super) fn update(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    match event {
        AppEvent::Layout(event) => routers::layout::route_event(app, event),
        AppEvent::Page(event) => routers::page::route_event(app, event),
    }
}
