use hubdesk_nav::{FixedMenuView, LayoutIntent};
use iced::widget::{
    Column, Row, Space, button, column, container, mouse_area, opaque, row,
    text,
};
use iced::{Element, Length, Theme, alignment};

use crate::shared::ui::style::{
    action_button_style, backdrop_style, modal_card_style,
};
use crate::shared::ui::theme::{IcedColorPalette, ThemeProps};
use crate::widgets::layout::event::LayoutEvent;

const CARD_WIDTH: f32 = 360.0;
const CARD_PADDING: f32 = 16.0;
const TITLE_SIZE: f32 = 15.0;
const GROUP_SIZE: f32 = 12.0;
const OPTION_SIZE: f32 = 12.0;
const SPACING: f32 = 12.0;
const OPTION_SPACING: f32 = 6.0;

/// Props for the filter builder overlay.
pub(crate) struct FilterModalProps<'a> {
    pub(crate) vm: FixedMenuView<'a>,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the filter builder over a dimmed backdrop. Clicking the backdrop
/// cancels the draft.
pub(crate) fn view(
    props: FilterModalProps<'_>,
) -> Element<'_, LayoutEvent, Theme, iced::Renderer> {
    let palette = props.theme.theme.iced_palette().clone();
    let draft = props.vm.state.draft();

    let groups = props.vm.menu.filters.iter().map(|group| {
        let selected = draft.get(&group.key);
        let options = group.options.iter().map(|choice| {
            let is_selected = selected == Some(&choice.value);
            let option_palette = palette.clone();
            button(text(choice.label.as_str()).size(OPTION_SIZE))
                .on_press(LayoutEvent::Intent(
                    LayoutIntent::ToggleFilterOption {
                        group: group.key.clone(),
                        value: choice.value.clone(),
                    },
                ))
                .padding([3.0, 10.0])
                .style(move |_, status| {
                    action_button_style(&option_palette, status, is_selected)
                })
                .into()
        });
        column![
            text(group.label.as_str()).size(GROUP_SIZE),
            Row::with_children(options).spacing(OPTION_SPACING),
        ]
        .spacing(OPTION_SPACING)
        .into()
    });

    let footer = row![
        footer_button("Clear", LayoutIntent::ClearFilters, false, &palette),
        Space::new().width(Length::Fill),
        footer_button("Cancel", LayoutIntent::CancelFilters, false, &palette),
        footer_button("Apply", LayoutIntent::ApplyFilters, true, &palette),
    ]
    .spacing(OPTION_SPACING)
    .align_y(alignment::Vertical::Center);

    let card = container(
        Column::new()
            .spacing(SPACING)
            .push(text("Filters").size(TITLE_SIZE))
            .push(Column::with_children(groups).spacing(SPACING))
            .push(footer),
    )
    .width(Length::Fixed(CARD_WIDTH))
    .padding(CARD_PADDING)
    .style(modal_card_style(props.theme));

    // Presses inside the card must not reach the backdrop.
    let backdrop = container(opaque(card))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(backdrop_style());

    mouse_area(backdrop)
        .on_press(LayoutEvent::Intent(LayoutIntent::CancelFilters))
        .into()
}

fn footer_button<'a>(
    label: &'static str,
    intent: LayoutIntent,
    is_primary: bool,
    palette: &IcedColorPalette,
) -> Element<'a, LayoutEvent, Theme, iced::Renderer> {
    let button_palette = palette.clone();
    button(text(label).size(OPTION_SIZE))
        .on_press(LayoutEvent::Intent(intent))
        .padding([4.0, 12.0])
        .style(move |_, status| {
            action_button_style(&button_palette, status, is_primary)
        })
        .into()
}
