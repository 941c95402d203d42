use iced::widget::button::Status as ButtonStatus;
use iced::widget::{button, container, scrollable, text_input};
use iced::{Background, Border, Color, Theme};

use super::theme::{IcedColorPalette, ThemeProps};

const DISABLED_ALPHA: f32 = 0.45;

/// Flat panel background.
pub(crate) fn panel_style(
    background: Color,
    foreground: Color,
) -> impl Fn(&Theme) -> container::Style + 'static {
    move |_| container::Style {
        background: Some(background.into()),
        text_color: Some(foreground),
        ..Default::default()
    }
}

/// Navigation row: highlighted when active, tinted on hover.
pub(crate) fn nav_button_style(
    palette: &IcedColorPalette,
    status: ButtonStatus,
    is_active: bool,
) -> button::Style {
    let background = if is_active {
        Some(palette.dim_accent.into())
    } else {
        match status {
            ButtonStatus::Hovered | ButtonStatus::Pressed => {
                Some(palette.overlay.into())
            },
            _ => None,
        }
    };

    button::Style {
        background,
        text_color: palette.foreground,
        border: Border {
            radius: iced::border::Radius::new(4.0),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Small action button used in toolbars and the filter builder.
pub(crate) fn action_button_style(
    palette: &IcedColorPalette,
    status: ButtonStatus,
    is_selected: bool,
) -> button::Style {
    let base_color = match (is_selected, status) {
        (true, _) => palette.accent,
        (false, ButtonStatus::Hovered | ButtonStatus::Pressed) => {
            palette.dim_accent
        },
        (false, _) => palette.overlay,
    };
    let text_color = if is_selected {
        palette.background
    } else {
        palette.foreground
    };

    button::Style {
        background: Some(base_color.into()),
        text_color,
        border: Border {
            radius: iced::border::Radius::new(4.0),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Static row for locked items.
pub(crate) fn locked_row_style(
    palette: &IcedColorPalette,
) -> impl Fn(&Theme) -> container::Style + 'static {
    let mut text_color = palette.foreground;
    text_color.a = DISABLED_ALPHA;
    move |_| container::Style {
        text_color: Some(text_color),
        ..Default::default()
    }
}

/// Count pill. Item tokens override the accent colors when present.
pub(crate) fn badge_style(
    palette: &IcedColorPalette,
    color: Option<Color>,
    bg_color: Option<Color>,
) -> impl Fn(&Theme) -> container::Style + 'static {
    let background = bg_color.unwrap_or(palette.accent);
    let text_color = color.unwrap_or(palette.background);
    move |_| container::Style {
        background: Some(background.into()),
        text_color: Some(text_color),
        border: Border {
            radius: iced::border::Radius::new(8.0),
            ..Default::default()
        },
        ..Default::default()
    }
}

pub(crate) fn modal_card_style(
    theme: ThemeProps<'_>,
) -> impl Fn(&Theme) -> container::Style + 'static {
    let palette = theme.theme.iced_palette().clone();
    move |_| container::Style {
        background: Some(palette.surface.into()),
        text_color: Some(palette.foreground),
        border: Border {
            width: 1.0,
            color: palette.overlay,
            radius: iced::border::Radius::new(6.0),
        },
        ..Default::default()
    }
}

pub(crate) fn backdrop_style() -> impl Fn(&Theme) -> container::Style {
    |_| container::Style {
        background: Some(Color::from_rgba(0.0, 0.0, 0.0, 0.55).into()),
        ..Default::default()
    }
}

pub(crate) fn thin_scroll_style(
    palette: IcedColorPalette,
) -> impl Fn(&Theme, scrollable::Status) -> scrollable::Style + 'static {
    move |theme, status| {
        let mut style = scrollable::default(theme, status);
        let radius = iced::border::Radius::from(0.0);

        style.vertical_rail.border.radius = radius;
        style.vertical_rail.scroller.border.radius = radius;

        let mut scroller_color = match style.vertical_rail.scroller.background
        {
            Background::Color(color) => color,
            _ => palette.dim_foreground,
        };
        scroller_color.a = (scroller_color.a * 0.7).min(1.0);
        style.vertical_rail.scroller.background =
            Background::Color(scroller_color);

        style
    }
}

pub(crate) fn text_input_style(
    theme: ThemeProps<'_>,
) -> impl Fn(&Theme, text_input::Status) -> text_input::Style + 'static {
    let palette = theme.theme.iced_palette().clone();
    move |base: &Theme, status| {
        let mut style = text_input::default(base, status);
        style.selection = palette.dim_accent;
        style
    }
}
