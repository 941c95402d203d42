use hubdesk_nav::{LayoutIntent, hub_root};
use iced::widget::{Column, button, container, text, tooltip};
use iced::{Element, Length, Theme, alignment};

use crate::demo::HubLink;
use crate::shared::ui::glyphs::icon_glyph;
use crate::shared::ui::style::{nav_button_style, panel_style};
use crate::shared::ui::theme::ThemeProps;
use crate::widgets::layout::event::LayoutEvent;

pub(crate) const HUB_RAIL_WIDTH: f32 = 48.0;

const BUTTON_SIZE: f32 = 36.0;
const GLYPH_SIZE: f32 = 18.0;
const TOOLTIP_SIZE: f32 = 12.0;

/// Props for the hub switcher rail.
pub(crate) struct HubRailProps<'a> {
    pub(crate) hubs: &'a [HubLink],
    pub(crate) active_hub: Option<&'a str>,
    pub(crate) theme: ThemeProps<'a>,
}

pub(crate) fn view(
    props: HubRailProps<'_>,
) -> Element<'_, LayoutEvent, Theme, iced::Renderer> {
    let palette = props.theme.theme.iced_palette().clone();

    let buttons = props.hubs.iter().map(|hub| {
        let is_active = props.active_hub == Some(hub.id);
        let button_palette = palette.clone();
        let hub_button = button(
            container(text(icon_glyph(&hub.icon)).size(GLYPH_SIZE))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Center),
        )
        .on_press(LayoutEvent::Intent(LayoutIntent::Navigate(hub_root(hub.id))))
        .width(Length::Fixed(BUTTON_SIZE))
        .height(Length::Fixed(BUTTON_SIZE))
        .padding(0)
        .style(move |_, status| {
            nav_button_style(&button_palette, status, is_active)
        });

        tooltip(
            hub_button,
            text(hub.name).size(TOOLTIP_SIZE),
            tooltip::Position::Right,
        )
        .into()
    });

    container(
        Column::with_children(buttons)
            .spacing(6.0)
            .align_x(alignment::Horizontal::Center),
    )
    .width(Length::Fixed(HUB_RAIL_WIDTH))
    .height(Length::Fill)
    .padding([8.0, 0.0])
    .style(panel_style(palette.background, palette.foreground))
    .into()
}
