#[path = "update.rs"]
mod update;
#[path = "view.rs"]
pub(crate) mod view;

use std::sync::Arc;

use hubdesk_nav::{MemoryStore, PlanTier};
use iced::{Element, Task, Theme};

use crate::config::AppConfig;
use crate::demo::{self, HubLink, ListQueries};
use crate::shared::ui::theme::AppTheme;
use crate::storage::FileStore;
use crate::widgets::Widgets;
use crate::widgets::layout::{LayoutEvent, LayoutWidget, NavStore};
use crate::widgets::page::{PageEvent, PageWidget};

pub(crate) const MIN_WINDOW_WIDTH: f32 = 960.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 600.0;

const APP_TITLE: &str = "Hubdesk";

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum AppEvent {
    // Navigation shell widget
    Layout(LayoutEvent),
    // Page content widget
    Page(PageEvent),
}

/// Root application state.
pub(crate) struct App {
    pub(crate) theme: AppTheme,
    pub(crate) plan: PlanTier,
    pub(crate) hubs: Vec<HubLink>,
    pub(crate) queries: ListQueries,
    pub(crate) widgets: Widgets,
}

impl App {
    /// Initialize the application and return the first task.
    pub(crate) fn new() -> (Self, Task<AppEvent>) {
        let config = AppConfig::load();
        let location = config.start_location();
        let plan = config.plan;
        let queries = ListQueries::new();

        let store = open_store(&config);
        let layout = LayoutWidget::new(
            demo::page_props(&location, plan, &queries),
            location,
            plan,
            Arc::new(demo::catalog()),
            store,
        );

        let app = Self {
            theme: AppTheme::default(),
            plan,
            hubs: demo::hub_links(),
            queries,
            widgets: Widgets {
                layout,
                page: PageWidget::new(),
            },
        };
        (app, Task::none())
    }

    pub(crate) fn title(&self) -> String {
        let page_title = self.widgets.layout.shell().status_bar().page_title();
        if page_title.is_empty() {
            String::from(APP_TITLE)
        } else {
            format!("{page_title} | {APP_TITLE}")
        }
    }

    pub(crate) fn theme(&self) -> Theme {
        Theme::from(&self.theme)
    }

    pub(crate) fn update(&mut self, event: AppEvent) -> Task<AppEvent> {
        update::update(self, event)
    }

    pub(crate) fn view(&self) -> Element<'_, AppEvent, Theme, iced::Renderer> {
        view::view(self)
    }
}

/// Open the state file, keeping preferences in memory when it is unusable.
fn open_store(config: &AppConfig) -> NavStore {
    match FileStore::open(config.state_path()) {
        Ok(store) => {
            log::info!("navigation state file: {}", store.path().display());
            Box::new(store)
        },
        Err(err) => {
            log::warn!("navigation state stays in memory: {err}");
            Box::new(MemoryStore::new())
        },
    }
}
