/// Intents accepted by the page content widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PageIntent {
    /// Show a transient message above the page body.
    ShowNotice(String),
    DismissNotice,
}

/// Events emitted by the page content view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PageEvent {
    Intent(PageIntent),
}
