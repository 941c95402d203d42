use hubdesk_nav::Location;
use iced::widget::{Column, Space, button, column, container, row, text};
use iced::{Element, Length, Theme, alignment};

use crate::shared::ui::style::{action_button_style, panel_style};
use crate::shared::ui::theme::ThemeProps;
use crate::widgets::page::event::{PageEvent, PageIntent};

const PADDING: f32 = 24.0;
const TITLE_SIZE: f32 = 22.0;
const BODY_SIZE: f32 = 13.0;
const LABEL_WIDTH: f32 = 120.0;
const SPACING: f32 = 12.0;

/// Props for the routed page body.
pub(crate) struct ContentProps<'a> {
    pub(crate) title: &'a str,
    pub(crate) location: &'a Location,
    pub(crate) details: Option<Vec<(String, String)>>,
    pub(crate) notice: Option<&'a str>,
    pub(crate) theme: ThemeProps<'a>,
}

pub(crate) fn view(
    props: ContentProps<'_>,
) -> Element<'_, PageEvent, Theme, iced::Renderer> {
    let palette = props.theme.theme.iced_palette().clone();
    let mut body = Column::new().spacing(SPACING);

    if let Some(notice) = props.notice {
        let dismiss_palette = palette.clone();
        body = body.push(
            container(
                row![
                    text(notice).size(BODY_SIZE),
                    Space::new().width(Length::Fill),
                    button(text("Dismiss").size(BODY_SIZE))
                        .on_press(PageEvent::Intent(PageIntent::DismissNotice))
                        .padding([2.0, 8.0])
                        .style(move |_, status| {
                            action_button_style(&dismiss_palette, status, false)
                        }),
                ]
                .align_y(alignment::Vertical::Center),
            )
            .padding(8.0)
            .style(panel_style(palette.overlay, palette.yellow)),
        );
    }

    body = body
        .push(text(props.title).size(TITLE_SIZE))
        .push(text(props.location.to_string()).size(BODY_SIZE));

    match props.details {
        Some(details) => {
            let lines = details.into_iter().map(|(label, value)| {
                row![
                    text(label)
                        .size(BODY_SIZE)
                        .width(Length::Fixed(LABEL_WIDTH)),
                    text(value).size(BODY_SIZE),
                ]
                .into()
            });
            body = body.push(Column::with_children(lines).spacing(6.0));
        },
        None => {
            body = body.push(
                text("Pick an entry from the menu to open it.").size(BODY_SIZE),
            );
        },
    }

    container(column![body])
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(PADDING)
        .style(panel_style(palette.background, palette.foreground))
        .into()
}
