use hubdesk_nav::{ItemRef, ItemView, LayoutIntent, MenuView, SectionView};
use iced::widget::{
    Column, Row, Space, button, container, row, scrollable, text,
};
use iced::{Color, Element, Length, Theme, alignment};

use crate::shared::ui::glyphs::{self, icon_glyph};
use crate::shared::ui::style::{
    badge_style, locked_row_style, nav_button_style, panel_style,
    thin_scroll_style,
};
use crate::shared::ui::theme::{IcedColorPalette, ThemeProps};
use crate::widgets::layout::event::LayoutEvent;

pub(crate) const CORE_MENU_WIDTH: f32 = 232.0;
pub(crate) const CORE_MENU_COLLAPSED_WIDTH: f32 = 52.0;

const HEADER_HEIGHT: f32 = 40.0;
const HEADER_PADDING_X: f32 = 12.0;
const TITLE_SIZE: f32 = 15.0;
const SECTION_SIZE: f32 = 11.0;
const ITEM_SIZE: f32 = 13.0;
const GLYPH_SIZE: f32 = 14.0;
const ROW_HEIGHT: f32 = 28.0;
const ROW_PADDING_X: f32 = 8.0;
const ROW_SPACING: f32 = 8.0;
const ITEM_INDENT: f32 = 10.0;
const BADGE_SIZE: f32 = 10.0;
const LIST_PADDING: f32 = 6.0;
const SECTION_SPACING: f32 = 4.0;

/// Props for the primary section menu.
pub(crate) struct CoreMenuProps<'a> {
    pub(crate) vm: MenuView<'a>,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the collapsible two-level menu.
pub(crate) fn view(
    props: CoreMenuProps<'_>,
) -> Element<'_, LayoutEvent, Theme, iced::Renderer> {
    let palette = props.theme.theme.iced_palette().clone();
    let collapsed = props.vm.collapsed;
    let width = if collapsed {
        CORE_MENU_COLLAPSED_WIDTH
    } else {
        CORE_MENU_WIDTH
    };

    let header = menu_header(props.vm.title, collapsed, &palette);

    let sections = props.vm.sections.into_iter().enumerate().fold(
        Column::new().spacing(SECTION_SPACING).padding(LIST_PADDING),
        |column, (index, section)| {
            column.push(section_block(index, section, collapsed, &palette))
        },
    );
    let sections = scrollable(sections)
        .height(Length::Fill)
        .style(thin_scroll_style(palette.clone()));

    let bottom = props
        .vm
        .bottom_items
        .into_iter()
        .enumerate()
        .fold(Column::new().padding(LIST_PADDING), |column, (index, item)| {
            column.push(item_row(
                item,
                ItemRef::Bottom(index),
                collapsed,
                0.0,
                &palette,
            ))
        });

    container(
        Column::new()
            .push(header)
            .push(sections)
            .push(bottom)
            .height(Length::Fill),
    )
    .width(Length::Fixed(width))
    .height(Length::Fill)
    .style(panel_style(palette.surface, palette.foreground))
    .into()
}

fn menu_header<'a>(
    title: &'a str,
    collapsed: bool,
    palette: &IcedColorPalette,
) -> Element<'a, LayoutEvent, Theme, iced::Renderer> {
    let toggle_glyph = if collapsed {
        glyphs::EXPAND
    } else {
        glyphs::COLLAPSE
    };
    let row_palette = palette.clone();
    let toggle = button(text(toggle_glyph).size(GLYPH_SIZE))
        .on_press(LayoutEvent::Intent(LayoutIntent::ToggleCollapse))
        .padding([2.0, 6.0])
        .style(move |_, status| nav_button_style(&row_palette, status, false));

    let content: Row<'a, LayoutEvent, Theme, iced::Renderer> = if collapsed {
        row![Space::new().width(Length::Fill), toggle]
    } else {
        row![
            text(title).size(TITLE_SIZE),
            Space::new().width(Length::Fill),
            toggle
        ]
    };

    container(content.align_y(alignment::Vertical::Center))
        .width(Length::Fill)
        .height(Length::Fixed(HEADER_HEIGHT))
        .padding([0.0, HEADER_PADDING_X])
        .align_y(alignment::Vertical::Center)
        .into()
}

fn section_block<'a>(
    section_index: usize,
    view: SectionView<'a>,
    collapsed: bool,
    palette: &IcedColorPalette,
) -> Element<'a, LayoutEvent, Theme, iced::Renderer> {
    let items = view.items.into_iter().enumerate().map(|(item_index, item)| {
        item_row(
            item,
            ItemRef::Section {
                section: section_index,
                item: item_index,
            },
            collapsed,
            ITEM_INDENT,
            palette,
        )
    });

    // Icon-only mode shows every item and no section headers.
    if collapsed {
        return Column::with_children(items).into();
    }

    let chevron = if view.expanded {
        glyphs::CHEVRON_OPEN
    } else {
        glyphs::CHEVRON_CLOSED
    };
    let mut title_color = palette.dim_foreground;
    if view.contains_active {
        title_color = palette.foreground;
    }
    let header_palette = palette.clone();
    let header = button(
        row![
            text(icon_glyph(&view.section.icon)).size(GLYPH_SIZE),
            text(view.section.title.to_uppercase()).size(SECTION_SIZE),
            Space::new().width(Length::Fill),
            text(chevron).size(GLYPH_SIZE),
        ]
        .spacing(ROW_SPACING)
        .align_y(alignment::Vertical::Center),
    )
    .on_press(LayoutEvent::Intent(LayoutIntent::ToggleSection(
        view.section.id.clone(),
    )))
    .width(Length::Fill)
    .height(Length::Fixed(ROW_HEIGHT))
    .padding([0.0, ROW_PADDING_X])
    .style(move |_, status| {
        let mut style = nav_button_style(&header_palette, status, false);
        style.text_color = title_color;
        style
    });

    let mut block = Column::new().push(header);
    if view.expanded {
        block = block.extend(items);
    }
    block.into()
}

fn item_row<'a>(
    view: ItemView<'a>,
    item_ref: ItemRef,
    collapsed: bool,
    indent: f32,
    palette: &IcedColorPalette,
) -> Element<'a, LayoutEvent, Theme, iced::Renderer> {
    let item = view.item;
    let mut content = Row::new()
        .spacing(ROW_SPACING)
        .align_y(alignment::Vertical::Center)
        .push(text(icon_glyph(&item.icon)).size(GLYPH_SIZE));

    if !collapsed {
        content = content
            .push(text(item.title.as_str()).size(ITEM_SIZE))
            .push(Space::new().width(Length::Fill));
        if let Some(badge) = view.badge() {
            content = content.push(badge_pill(
                badge,
                token_color(item.color.as_deref()),
                token_color(item.bg_color.as_deref()),
                palette,
            ));
        }
        if view.locked {
            content = content.push(text(glyphs::LOCK).size(BADGE_SIZE));
        }
    }

    if view.is_interactive() {
        let row_palette = palette.clone();
        let is_active = view.active;
        return button(content)
            .on_press(LayoutEvent::Intent(LayoutIntent::OpenItem(item_ref)))
            .width(Length::Fill)
            .height(Length::Fixed(ROW_HEIGHT))
            .padding([0.0, ROW_PADDING_X + indent])
            .style(move |_, status| {
                nav_button_style(&row_palette, status, is_active)
            })
            .into();
    }

    let row = container(content)
        .width(Length::Fill)
        .height(Length::Fixed(ROW_HEIGHT))
        .padding([0.0, ROW_PADDING_X + indent])
        .align_y(alignment::Vertical::Center);
    if view.locked {
        row.style(locked_row_style(palette)).into()
    } else {
        row.into()
    }
}

fn badge_pill<'a>(
    label: String,
    color: Option<Color>,
    bg_color: Option<Color>,
    palette: &IcedColorPalette,
) -> Element<'a, LayoutEvent, Theme, iced::Renderer> {
    container(text(label).size(BADGE_SIZE))
        .padding([1.0, 6.0])
        .style(badge_style(palette, color, bg_color))
        .into()
}

/// Resolve an item style token; only hex colors are understood.
fn token_color(token: Option<&str>) -> Option<Color> {
    token.and_then(|t| t.parse::<Color>().ok())
}
