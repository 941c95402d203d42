use std::fmt;

use hubdesk_nav::{Avatar, FixedMenuView, LayoutIntent, ListRowView};
use iced::widget::{
    Column, Row, Space, button, column, container, pick_list, row, scrollable,
    text, text_input,
};
use iced::{Element, Length, Theme, alignment};

use crate::shared::ui::glyphs::{self, icon_glyph, initials};
use crate::shared::ui::style::{
    action_button_style, badge_style, nav_button_style, panel_style,
    text_input_style, thin_scroll_style,
};
use crate::shared::ui::theme::{IcedColorPalette, ThemeProps};
use crate::widgets::layout::event::LayoutEvent;

pub(crate) const FIXED_MENU_WIDTH: f32 = 280.0;

const HEADER_HEIGHT: f32 = 40.0;
const PADDING: f32 = 10.0;
const TITLE_SIZE: f32 = 15.0;
const INPUT_SIZE: f32 = 13.0;
const CONTROL_SIZE: f32 = 12.0;
const ROW_TITLE_SIZE: f32 = 13.0;
const ROW_META_SIZE: f32 = 11.0;
const AVATAR_SIZE: f32 = 28.0;
const ROW_SPACING: f32 = 8.0;
const ROW_PADDING: f32 = 8.0;
const CONTROL_SPACING: f32 = 6.0;

/// Switch choice as shown in the dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SwitchOption {
    value: String,
    label: String,
}

impl fmt::Display for SwitchOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Props for the secondary list panel.
pub(crate) struct FixedMenuProps<'a> {
    pub(crate) vm: FixedMenuView<'a>,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the list panel: title, search, filters, switch and rows.
pub(crate) fn view(
    props: FixedMenuProps<'_>,
) -> Element<'_, LayoutEvent, Theme, iced::Renderer> {
    let palette = props.theme.theme.iced_palette().clone();
    let menu = props.vm.menu;
    let state = props.vm.state;

    let mut header = Row::new()
        .align_y(alignment::Vertical::Center)
        .push(text(menu.title.as_str()).size(TITLE_SIZE))
        .push(Space::new().width(Length::Fill));
    if !menu.filters.is_empty() {
        let count = state.active_filter_count();
        let label = if count > 0 {
            format!("{} Filters ({count})", glyphs::FILTER)
        } else {
            format!("{} Filters", glyphs::FILTER)
        };
        let filter_palette = palette.clone();
        header = header.push(
            button(text(label).size(CONTROL_SIZE))
                .on_press(LayoutEvent::Intent(LayoutIntent::OpenFilters))
                .padding([2.0, 8.0])
                .style(move |_, status| {
                    action_button_style(&filter_palette, status, count > 0)
                }),
        );
    }
    let header = container(header)
        .width(Length::Fill)
        .height(Length::Fixed(HEADER_HEIGHT))
        .align_y(alignment::Vertical::Center);

    let mut controls = Column::new().spacing(CONTROL_SPACING).push(header);

    if let Some(placeholder) = &menu.search_placeholder {
        let placeholder = format!("{} {placeholder}", glyphs::SEARCH);
        controls = controls.push(
            text_input(&placeholder, state.search())
                .on_input(|value| {
                    LayoutEvent::Intent(LayoutIntent::SearchChanged(value))
                })
                .size(INPUT_SIZE)
                .padding([4.0, 8.0])
                .style(text_input_style(props.theme)),
        );
    }

    if let Some(switch) = &menu.switch {
        let options: Vec<SwitchOption> = switch
            .options
            .iter()
            .map(|choice| SwitchOption {
                value: choice.value.clone(),
                label: choice.label.clone(),
            })
            .collect();
        let selected = state.switch_value().and_then(|value| {
            options.iter().find(|option| option.value == value).cloned()
        });
        controls = controls.push(
            row![
                text(switch.label.as_str()).size(CONTROL_SIZE),
                pick_list(options, selected, |option: SwitchOption| {
                    LayoutEvent::Intent(LayoutIntent::SwitchChanged(
                        option.value,
                    ))
                })
                .text_size(CONTROL_SIZE)
                .padding([2.0, 8.0])
                .width(Length::Fill),
            ]
            .spacing(ROW_SPACING)
            .align_y(alignment::Vertical::Center),
        );
    }

    let rows: Element<'_, LayoutEvent, Theme, iced::Renderer> =
        if props.vm.rows.is_empty() {
            container(text("No matching records").size(ROW_META_SIZE))
                .padding(PADDING)
                .into()
        } else {
            let rows = props
                .vm
                .rows
                .into_iter()
                .map(|row_vm| list_row(row_vm, &palette));
            scrollable(Column::with_children(rows).spacing(2.0))
                .height(Length::Fill)
                .style(thin_scroll_style(palette.clone()))
                .into()
        };

    container(column![controls, rows].spacing(CONTROL_SPACING))
        .width(Length::Fixed(FIXED_MENU_WIDTH))
        .height(Length::Fill)
        .padding([0.0, PADDING])
        .style(panel_style(palette.background, palette.foreground))
        .into()
}

fn list_row<'a>(
    vm: ListRowView<'a>,
    palette: &IcedColorPalette,
) -> Element<'a, LayoutEvent, Theme, iced::Renderer> {
    let item = vm.item;

    let mut title_line = Row::new()
        .align_y(alignment::Vertical::Center)
        .push(text(item.title.as_str()).size(ROW_TITLE_SIZE))
        .push(Space::new().width(Length::Fill));
    if let Some(time_label) = &item.time_label {
        title_line =
            title_line.push(text(time_label.as_str()).size(ROW_META_SIZE));
    }

    let mut meta_line = Row::new().align_y(alignment::Vertical::Center);
    if let Some(subtitle) = &item.subtitle {
        meta_line = meta_line.push(text(subtitle.as_str()).size(ROW_META_SIZE));
    }
    meta_line = meta_line.push(Space::new().width(Length::Fill));
    if let Some(badge) = vm.badge() {
        meta_line = meta_line.push(
            container(text(badge).size(ROW_META_SIZE - 1.0))
                .padding([1.0, 6.0])
                .style(badge_style(palette, None, None)),
        );
    }

    let mut content = Row::new()
        .spacing(ROW_SPACING)
        .align_y(alignment::Vertical::Center);
    if let Some(avatar) = &item.avatar {
        content = content.push(avatar_view(avatar, palette));
    }
    content = content.push(column![title_line, meta_line].spacing(2.0));

    let row_palette = palette.clone();
    let is_selected = vm.selected;
    button(content)
        .on_press(LayoutEvent::Intent(LayoutIntent::Select(item.id.clone())))
        .width(Length::Fill)
        .padding(ROW_PADDING)
        .style(move |_, status| {
            nav_button_style(&row_palette, status, is_selected)
        })
        .into()
}

fn avatar_view<'a>(
    avatar: &Avatar,
    palette: &IcedColorPalette,
) -> Element<'a, LayoutEvent, Theme, iced::Renderer> {
    let label = match avatar {
        Avatar::Icon(icon) => icon_glyph(icon).to_string(),
        Avatar::Initials(name) => initials(name),
    };
    container(text(label).size(ROW_META_SIZE))
        .width(Length::Fixed(AVATAR_SIZE))
        .height(Length::Fixed(AVATAR_SIZE))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(badge_style(
            palette,
            Some(palette.foreground),
            Some(palette.overlay),
        ))
        .into()
}
