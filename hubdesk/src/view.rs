use iced::widget::{Row, column, container};
use iced::{Element, Length, Theme};

use super::{App, AppEvent};
use crate::demo;
use crate::shared::ui::theme::ThemeProps;
use crate::widgets::layout::view::{
    core_menu, filter_modal, fixed_menu, hub_rail, status_bar,
};
use crate::widgets::page::view::content;

/// Render the root application view.
pub(super) fn view(app: &App) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let theme_props = ThemeProps::new(&app.theme);
    let shell = app.widgets.layout.shell();
    let location = shell.location();

    let mut panes = Row::new().height(Length::Fill).push(
        hub_rail::view(hub_rail::HubRailProps {
            hubs: &app.hubs,
            active_hub: demo::hub_of(location),
            theme: theme_props,
        })
        .map(AppEvent::Layout),
    );

    if let Some(vm) = shell.menu_view() {
        panes = panes.push(
            core_menu::view(core_menu::CoreMenuProps {
                vm,
                theme: theme_props,
            })
            .map(AppEvent::Layout),
        );
    }

    if let Some(vm) = shell.fixed_menu_view() {
        panes = panes.push(
            fixed_menu::view(fixed_menu::FixedMenuProps {
                vm,
                theme: theme_props,
            })
            .map(AppEvent::Layout),
        );
    }

    panes = panes.push(
        content::view(content::ContentProps {
            title: shell.status_bar().page_title(),
            location,
            details: demo::record_details(location),
            notice: app.widgets.page.notice(),
            theme: theme_props,
        })
        .map(AppEvent::Page),
    );

    let status = status_bar::view(status_bar::StatusBarProps {
        vm: shell.status_bar(),
        theme: theme_props,
    })
    .map(AppEvent::Layout);

    let mut layers: Vec<Element<'_, AppEvent, Theme, iced::Renderer>> = vec![
        column![panes, status]
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
    ];

    // Filter builder overlay
    if let Some(vm) = shell
        .fixed_menu_view()
        .filter(|vm| vm.state.is_filter_modal_open())
    {
        layers.push(
            filter_modal::view(filter_modal::FilterModalProps {
                vm,
                theme: theme_props,
            })
            .map(AppEvent::Layout),
        );
    }

    container(
        iced::widget::Stack::with_children(layers)
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}
