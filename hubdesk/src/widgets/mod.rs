pub(crate) mod layout;
pub(crate) mod page;

pub(crate) struct Widgets {
    pub(crate) layout: layout::LayoutWidget,
    pub(crate) page: page::PageWidget,
}
