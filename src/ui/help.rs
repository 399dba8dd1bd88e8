// SPDX-License-Identifier: MPL-2.0
//! Help overlay explaining how to navigate the flipbook.
//!
//! The overlay closes on its close button, on a click outside the dialog,
//! or on Escape (handled by the controller).

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, radius, shadow, sizing, spacing, typography};
use iced::widget::{button, center, column, container, mouse_area, opaque, stack, text, Column};
use iced::{Border, Color, Element, Length, Theme};

/// Messages emitted by the help overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Close,
}

/// Sections in display order: heading key, then entry keys.
const SECTIONS: [(&str, &[&str]); 3] = [
    (
        "help-keyboard-heading",
        &[
            "help-key-arrows",
            "help-key-home-end",
            "help-key-fullscreen",
            "help-key-escape",
        ],
    ),
    ("help-touch-heading", &["help-touch-swipe"]),
    ("help-toolbar-heading", &["help-toolbar-buttons"]),
];

fn dialog<'a>(i18n: &I18n) -> Element<'a, Message> {
    let mut body = Column::new()
        .spacing(spacing::SM)
        .push(text(i18n.tr("help-title")).size(typography::TITLE_MD));

    for (heading, entries) in SECTIONS {
        let mut section = column![text(i18n.tr(heading)).size(typography::TITLE_SM)]
            .spacing(spacing::XXS);
        for entry in entries {
            section = section.push(text(i18n.tr(entry)).size(typography::BODY));
        }
        body = body.push(section);
    }

    body = body.push(button(text(i18n.tr("help-close"))).on_press(Message::Close));

    container(body)
        .width(Length::Fixed(sizing::HELP_DIALOG_WIDTH))
        .padding(spacing::LG)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.base.color.into()),
            border: Border {
                radius: radius::LG.into(),
                width: 1.0,
                color: palette::GRAY_400,
            },
            shadow: shadow::MD,
            ..container::Style::default()
        })
        .into()
}

/// Layers the help dialog over `base`.
pub fn overlay<'a, M: Clone + 'a>(
    base: Element<'a, M>,
    i18n: &I18n,
    on_message: impl Fn(Message) -> M + 'a,
) -> Element<'a, M> {
    let close = on_message(Message::Close);
    let backdrop = mouse_area(
        container(column![])
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme: &Theme| container::Style {
                background: Some(
                    Color {
                        a: opacity::OVERLAY_STRONG,
                        ..palette::BLACK
                    }
                    .into(),
                ),
                ..container::Style::default()
            }),
    )
    .on_press(close);

    let dialog = dialog(i18n).map(on_message);
    stack![base, opaque(backdrop), center(opaque(dialog))].into()
}
