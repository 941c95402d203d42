use iced::theme::Palette;
use iced::{Color, Theme};

/// Hex palette the UI colors are derived from.
#[derive(Debug, Clone)]
pub(crate) struct ColorPalette {
    pub(crate) foreground: String,
    pub(crate) background: String,
    pub(crate) surface: String,
    pub(crate) overlay: String,
    pub(crate) accent: String,
    pub(crate) dim_accent: String,
    pub(crate) green: String,
    pub(crate) red: String,
    pub(crate) yellow: String,
    pub(crate) dim_foreground: String,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self {
            foreground: String::from("#D1D5DB"),
            background: String::from("#161822"),
            surface: String::from("#1C1F2B"),
            overlay: String::from("#232530"),
            accent: String::from("#4FA6ED"),
            dim_accent: String::from("#2F638F"),
            green: String::from("#98C379"),
            red: String::from("#E06C75"),
            yellow: String::from("#E5C07B"),
            dim_foreground: String::from("#6B7280"),
        }
    }
}

/// Parse `#RRGGBB`, falling back to `fallback` for anything else.
pub(crate) fn parse_hex_color(value: &str, fallback: Color) -> Color {
    value.parse::<Color>().ok().unwrap_or_else(|| {
        log::warn!("invalid color {value}, using fallback");
        fallback
    })
}

#[derive(Debug, Clone)]
pub(crate) struct IcedColorPalette {
    pub(crate) foreground: Color,
    pub(crate) background: Color,
    pub(crate) surface: Color,
    pub(crate) overlay: Color,
    pub(crate) accent: Color,
    pub(crate) dim_accent: Color,
    pub(crate) green: Color,
    pub(crate) red: Color,
    pub(crate) yellow: Color,
    pub(crate) dim_foreground: Color,
}

impl From<&ColorPalette> for IcedColorPalette {
    fn from(p: &ColorPalette) -> Self {
        let fallback = Color::WHITE;
        Self {
            foreground: parse_hex_color(&p.foreground, fallback),
            background: parse_hex_color(&p.background, Color::BLACK),
            surface: parse_hex_color(&p.surface, Color::BLACK),
            overlay: parse_hex_color(&p.overlay, Color::BLACK),
            accent: parse_hex_color(&p.accent, fallback),
            dim_accent: parse_hex_color(&p.dim_accent, fallback),
            green: parse_hex_color(&p.green, fallback),
            red: parse_hex_color(&p.red, fallback),
            yellow: parse_hex_color(&p.yellow, fallback),
            dim_foreground: parse_hex_color(&p.dim_foreground, fallback),
        }
    }
}

/// Global application theme.
#[derive(Debug, Clone)]
pub(crate) struct AppTheme {
    id: String,
    iced_palette: IcedColorPalette,
}

impl Default for AppTheme {
    fn default() -> Self {
        Self {
            id: String::from("hubdesk"),
            iced_palette: IcedColorPalette::from(&ColorPalette::default()),
        }
    }
}

impl From<&AppTheme> for Theme {
    fn from(value: &AppTheme) -> Self {
        let palette = &value.iced_palette;
        let palette = Palette {
            background: palette.background,
            text: palette.foreground,
            primary: palette.accent,
            success: palette.green,
            danger: palette.red,
            warning: palette.yellow,
        };

        Theme::custom(value.id.clone(), palette)
    }
}

impl AppTheme {
    pub(crate) fn iced_palette(&self) -> &IcedColorPalette {
        &self.iced_palette
    }
}

/// Theme props passed through App -> Widget -> View.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ThemeProps<'a> {
    pub(crate) theme: &'a AppTheme,
}

impl<'a> ThemeProps<'a> {
    pub(crate) fn new(theme: &'a AppTheme) -> Self {
        Self { theme }
    }
}
