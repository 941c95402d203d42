pub(crate) mod core_menu;
pub(crate) mod filter_modal;
pub(crate) mod fixed_menu;
pub(crate) mod hub_rail;
pub(crate) mod status_bar;
