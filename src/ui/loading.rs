// SPDX-License-Identifier: MPL-2.0
//! Loading screen shown while page images are preloaded.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use iced::widget::{center, column, container, progress_bar, text};
use iced::{Element, Length};

#[must_use]
pub fn label(i18n: &I18n, percent: u8) -> String {
    let percent = percent.to_string();
    i18n.tr_with_args("loading-progress", &[("percent", percent.as_str())])
}

pub fn view<'a, M: 'a>(i18n: &I18n, percent: u8) -> Element<'a, M> {
    let content = column![
        text(label(i18n, percent))
            .size(typography::BODY)
            .color(palette::GRAY_200),
        progress_bar(0.0..=100.0, f32::from(percent)).girth(sizing::PROGRESS_GIRTH),
    ]
    .spacing(spacing::SM);

    center(container(content).width(Length::Fixed(sizing::LOADING_WIDTH))).into()
}

/// Shown instead of the book when it could not be started at all.
pub fn error_view<'a, M: 'a>(message: String) -> Element<'a, M> {
    center(
        text(message)
            .size(typography::TITLE_SM)
            .color(palette::ERROR_500),
    )
    .into()
}
