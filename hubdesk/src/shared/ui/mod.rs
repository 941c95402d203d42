pub(crate) mod glyphs;
pub(crate) mod style;
pub(crate) mod theme;
