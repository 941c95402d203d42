use hubdesk_nav::Icon;

pub(crate) const LOCK: &str = "\u{1F512}";
pub(crate) const CHEVRON_OPEN: &str = "\u{25BE}";
pub(crate) const CHEVRON_CLOSED: &str = "\u{25B8}";
pub(crate) const COLLAPSE: &str = "\u{00AB}";
pub(crate) const EXPAND: &str = "\u{00BB}";
pub(crate) const FILTER: &str = "\u{29E9}";
pub(crate) const SEARCH: &str = "\u{2315}";
const UNKNOWN: &str = "\u{2022}";

/// Text glyph drawn for a symbolic icon.
pub(crate) fn icon_glyph(icon: &Icon) -> &'static str {
    match icon {
        Icon::Dashboard => "\u{25A6}",
        Icon::Inbox => "\u{2709}",
        Icon::Contacts => "\u{263A}",
        Icon::Companies => "\u{25A3}",
        Icon::Activity => "\u{2261}",
        Icon::Deals => "\u{25C8}",
        Icon::Channels => "\u{2630}",
        Icon::Mailbox => "\u{2707}",
        Icon::Automation => "\u{21BB}",
        Icon::Integrations => "\u{2318}",
        Icon::Reports => "\u{25A4}",
        Icon::Import => "\u{21E9}",
        Icon::Team => "\u{2637}",
        Icon::Billing => "\u{00A4}",
        Icon::Tag => "\u{2691}",
        Icon::Settings => "\u{2699}",
        Icon::Custom(token) => custom_glyph(token),
    }
}

fn custom_glyph(token: &str) -> &'static str {
    match token {
        "star" => "\u{2605}",
        "chat" => "\u{2637}",
        _ => UNKNOWN,
    }
}

/// Up to two uppercase initials of a display name.
pub(crate) fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}
