use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::page::PageEvent;

/// Route a page UI event through the widget reducer.
pub(crate) fn route_event(app: &mut App, event: PageEvent) -> Task<AppEvent> {
    match event {
        PageEvent::Intent(intent) => {
            app.widgets.page.reduce(intent);
            Task::none()
        },
    }
}
