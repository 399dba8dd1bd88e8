// SPDX-License-Identifier: MPL-2.0
//! View composition for the application window.

use super::host::WindowHost;
use super::message::Message;
use crate::error::Error;
use crate::flipbook::{FlipbookController, Host, Listener};
use crate::i18n::fluent::I18n;
use crate::ui::book::{self, Book};
use crate::ui::design_tokens::palette;
use crate::ui::{help, loading, toolbar};
use iced::widget::{column, container};
use iced::{Element, Length, Theme};

/// Contextual data needed to render the window.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub controller: &'a FlipbookController<Book>,
    pub host: &'a WindowHost,
    pub start_error: Option<&'a Error>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    if let Some(error) = ctx.start_error {
        return loading::error_view(ctx.i18n.tr(error.i18n_key()));
    }

    if let Some(percent) = ctx.host.loading_percent() {
        return backdrop(loading::view(ctx.i18n, percent));
    }

    let page: Element<'_, Message> = match ctx.controller.turner() {
        Some(turner) => book::view(turner, ctx.i18n),
        None => column![].into(),
    };

    let bar = toolbar::view(toolbar::ViewContext {
        i18n: ctx.i18n,
        page_info: ctx.host.page_info(),
        fullscreen: ctx.host.fullscreen_icon(),
        enabled: ctx.host.is_subscribed(Listener::Toolbar),
    })
    .map(Message::Toolbar);

    let content = column![
        container(page).width(Length::Fill).height(Length::Fill),
        bar
    ];

    let base = backdrop(content.into());
    if ctx.host.is_help_visible() {
        help::overlay(base, ctx.i18n, Message::Help)
    } else {
        base
    }
}

fn backdrop(content: Element<'_, Message>) -> Element<'_, Message> {
    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_theme: &Theme| container::Style {
            background: Some(palette::BACKDROP.into()),
            ..container::Style::default()
        })
        .into()
}
