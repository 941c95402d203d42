use hubdesk_nav::{LayoutIntent, StatusBar};
use iced::widget::{Row, Space, button, container, row, text};
use iced::{Element, Length, Theme, alignment};

use crate::shared::ui::glyphs::icon_glyph;
use crate::shared::ui::style::{action_button_style, panel_style};
use crate::shared::ui::theme::ThemeProps;
use crate::widgets::layout::event::LayoutEvent;

pub(crate) const STATUS_BAR_HEIGHT: f32 = 30.0;

const PADDING_X: f32 = 12.0;
const TEXT_SIZE: f32 = 12.0;
const ITEM_SPACING: f32 = 14.0;
const SEPARATOR: &str = "/";

pub(crate) struct StatusBarProps<'a> {
    pub(crate) vm: &'a StatusBar,
    pub(crate) theme: ThemeProps<'a>,
}

pub(crate) fn view(
    props: StatusBarProps<'_>,
) -> Element<'_, LayoutEvent, Theme, iced::Renderer> {
    let palette = props.theme.theme.iced_palette().clone();
    let bar = props.vm;

    let mut breadcrumb = Row::new()
        .spacing(6.0)
        .align_y(alignment::Vertical::Center);
    if !bar.hub_name().is_empty() {
        breadcrumb = breadcrumb
            .push(text(bar.hub_name()).size(TEXT_SIZE))
            .push(text(SEPARATOR).size(TEXT_SIZE));
    }
    breadcrumb = breadcrumb.push(text(bar.page_title()).size(TEXT_SIZE));

    let stats = bar.stats().iter().map(|stat| {
        let label = match &stat.icon {
            Some(icon) => {
                format!("{} {}: {}", icon_glyph(icon), stat.label, stat.value)
            },
            None => format!("{}: {}", stat.label, stat.value),
        };
        text(label).size(TEXT_SIZE).into()
    });

    let actions = bar.actions().iter().enumerate().map(|(index, action)| {
        let label = match &action.icon {
            Some(icon) => format!("{} {}", icon_glyph(icon), action.label),
            None => action.label.clone(),
        };
        let action_palette = palette.clone();
        button(text(label).size(TEXT_SIZE))
            .on_press(LayoutEvent::Intent(LayoutIntent::TriggerAction(index)))
            .padding([1.0, 8.0])
            .style(move |_, status| {
                action_button_style(&action_palette, status, false)
            })
            .into()
    });

    let content = row![
        breadcrumb,
        Space::new().width(Length::Fill),
        Row::with_children(stats)
            .spacing(ITEM_SPACING)
            .align_y(alignment::Vertical::Center),
        Space::new().width(Length::Fixed(ITEM_SPACING)),
        Row::with_children(actions)
            .spacing(6.0)
            .align_y(alignment::Vertical::Center),
    ]
    .align_y(alignment::Vertical::Center);

    container(content)
        .width(Length::Fill)
        .height(Length::Fixed(STATUS_BAR_HEIGHT))
        .padding([0.0, PADDING_X])
        .align_y(alignment::Vertical::Center)
        .style(panel_style(palette.overlay, palette.foreground))
        .into()
}
