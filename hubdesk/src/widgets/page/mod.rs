pub(crate) mod event;
pub(crate) mod view;

pub(crate) use event::{PageEvent, PageIntent};

/// Content pane showing the routed page and action notices.
#[derive(Debug, Default)]
pub(crate) struct PageWidget {
    notice: Option<String>,
}

impl PageWidget {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn reduce(&mut self, intent: PageIntent) {
        match intent {
            PageIntent::ShowNotice(message) => {
                log::info!("{message}");
                self.notice = Some(message);
            },
            PageIntent::DismissNotice => self.notice = None,
        }
    }

    pub(crate) fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }
}
