// SPDX-License-Identifier: MPL-2.0
//! Toolbar shown below the book: navigation buttons, the page counter,
//! fullscreen and help.

use crate::flipbook::{PageCount, PageNumber};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use iced::alignment::Vertical;
use iced::widget::{button, container, row, text, Space};
use iced::{Color, Element, Length, Theme};

/// Contextual data needed to render the toolbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Current page and total, once the book is built.
    pub page_info: Option<(PageNumber, PageCount)>,
    pub fullscreen: bool,
    /// Buttons stay disabled until the toolbar listener is attached.
    pub enabled: bool,
}

/// Messages emitted by the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    First,
    Previous,
    Next,
    Last,
    ToggleFullscreen,
    ShowHelp,
}

/// Text of the page counter, e.g. "Page 3 of 11".
#[must_use]
pub fn page_label(i18n: &I18n, current: PageNumber, total: PageCount) -> String {
    let current = current.to_string();
    let total = total.to_string();
    i18n.tr_with_args(
        "page-info",
        &[("current", current.as_str()), ("total", total.as_str())],
    )
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let nav_button = |key: &str, message: Message| {
        button(text(ctx.i18n.tr(key)).size(typography::BODY))
            .padding([spacing::XXS, spacing::SM])
            .on_press_maybe(ctx.enabled.then_some(message))
    };

    let counter = ctx
        .page_info
        .map(|(current, total)| page_label(ctx.i18n, current, total))
        .unwrap_or_default();

    let fullscreen_key = if ctx.fullscreen {
        "toolbar-fullscreen-exit"
    } else {
        "toolbar-fullscreen-enter"
    };

    let bar = row![
        nav_button("toolbar-first", Message::First),
        nav_button("toolbar-previous", Message::Previous),
        text(counter)
            .size(typography::CAPTION)
            .color(palette::GRAY_200),
        nav_button("toolbar-next", Message::Next),
        nav_button("toolbar-last", Message::Last),
        Space::new().width(Length::Fill),
        nav_button(fullscreen_key, Message::ToggleFullscreen),
        nav_button("toolbar-help", Message::ShowHelp),
    ]
    .spacing(spacing::XS)
    .align_y(Vertical::Center);

    container(bar)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::TOOLBAR_HEIGHT))
        .padding([spacing::XS, spacing::MD])
        .align_y(Vertical::Center)
        .style(|_theme: &Theme| container::Style {
            background: Some(
                Color {
                    a: opacity::SURFACE,
                    ..palette::GRAY_900
                }
                .into(),
            ),
            ..container::Style::default()
        })
        .into()
}
