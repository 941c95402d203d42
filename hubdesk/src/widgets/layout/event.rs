use hubdesk_nav::{LayoutEffect, LayoutIntent};

/// Layout event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum LayoutEvent {
    /// Interaction reduced by the layout widget.
    Intent(LayoutIntent),
    /// Callback for the page, orchestrated by app-level routing.
    Effect(LayoutEffect),
}
