use crate::active::Location;
use crate::fixed_menu::{FilterMap, ListItem};

/// Reference to an item of the primary menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemRef {
    Section { section: usize, item: usize },
    Bottom(usize),
}

/// User interactions handled by the layout composer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutIntent {
    ToggleSection(String),
    ToggleCollapse,
    OpenItem(ItemRef),
    Navigate(String),
    TriggerAction(usize),
    Select(String),
    SearchChanged(String),
    OpenFilters,
    ToggleFilterOption { group: String, value: String },
    ApplyFilters,
    ClearFilters,
    CancelFilters,
    SwitchChanged(String),
}

/// Notifications for the page hosting the layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutEffect {
    /// The current location changed.
    Navigated(Location),
    /// A list row was selected.
    Selected(ListItem),
    /// Raw search text, forwarded on every keystroke.
    SearchChanged(String),
    SwitchChanged(String),
    FiltersApplied(FilterMap),
    /// A status bar action without a link was pressed.
    ActionInvoked(String),
}
