// SPDX-License-Identifier: MPL-2.0
//! The on-screen book.
//!
//! `Book` is the page turner used by the application. It shows one page at a
//! time, scaled to fit the area it was last resized to. Image handles are
//! created once at construction so the renderer can cache the textures.

use crate::flipbook::{
    Dimensions, PageContainer, PageCount, PageNumber, PageTurner, TurnOptions,
};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, radius, shadow, spacing, typography};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{container, image, text};
use iced::{Border, ContentFit, Element, Length, Theme};

#[derive(Debug, Clone)]
struct BookPage {
    page: PageNumber,
    alt: String,
    handle: Option<image::Handle>,
}

#[derive(Debug, Clone)]
pub struct Book {
    pages: Vec<BookPage>,
    current: usize,
    size: Dimensions,
    auto_center: bool,
}

impl Book {
    fn page_at(&self, index: usize) -> Option<PageNumber> {
        self.pages.get(index).map(|page| page.page)
    }

    fn turn_to(&mut self, index: usize) -> Option<PageNumber> {
        let page = self.page_at(index)?;
        self.current = index;
        Some(page)
    }

    #[must_use]
    pub fn size(&self) -> Dimensions {
        self.size
    }

    /// Whether the current page has an image to show.
    #[must_use]
    pub fn current_is_loaded(&self) -> bool {
        self.pages
            .get(self.current)
            .is_some_and(|page| page.handle.is_some())
    }
}

impl PageTurner for Book {
    fn construct(pages: &[PageContainer], options: TurnOptions) -> Self {
        let pages = pages
            .iter()
            .map(|container| BookPage {
                page: container.page,
                alt: container.alt.clone(),
                handle: container
                    .image
                    .as_ref()
                    .map(|image| image::Handle::from_bytes(image.bytes().to_vec())),
            })
            .collect();

        Self {
            pages,
            current: 0,
            size: options.size,
            auto_center: options.auto_center,
        }
    }

    fn next(&mut self) -> Option<PageNumber> {
        self.turn_to(self.current + 1)
    }

    fn previous(&mut self) -> Option<PageNumber> {
        let index = self.current.checked_sub(1)?;
        self.turn_to(index)
    }

    fn go_to_page(&mut self, page: PageNumber) -> Option<PageNumber> {
        if page.index() == self.current {
            return None;
        }
        self.turn_to(page.index())
    }

    fn resize(&mut self, size: Dimensions) {
        self.size = size;
    }

    fn current_page(&self) -> Option<PageNumber> {
        self.page_at(self.current)
    }

    fn page_count(&self) -> PageCount {
        PageCount::new(u32::try_from(self.pages.len()).unwrap_or(u32::MAX))
    }
}

/// Renders the current page.
pub fn view<'a, M: 'a>(book: &'a Book, i18n: &I18n) -> Element<'a, M> {
    let Some(current) = book.pages.get(book.current) else {
        return container(text(""))
            .width(Length::Fill)
            .height(Length::Fill)
            .into();
    };

    let width = Length::Fixed(book.size.width.max(0.0));
    let height = Length::Fixed(book.size.height.max(0.0));

    let page: Element<'a, M> = match &current.handle {
        Some(handle) => image(handle.clone())
            .content_fit(ContentFit::Contain)
            .width(width)
            .height(height)
            .into(),
        None => {
            let page_number = current.page.to_string();
            let label = i18n.tr_with_args("page-missing", &[("page", page_number.as_str())]);
            container(
                text(format!("{}\n{label}", current.alt))
                    .size(typography::BODY)
                    .color(palette::GRAY_700),
            )
            .center(Length::Fill)
            .max_width(book.size.width.max(0.0))
            .padding(spacing::LG)
            .style(|_theme: &Theme| container::Style {
                background: Some(palette::PAPER.into()),
                border: Border {
                    radius: radius::SM.into(),
                    ..Border::default()
                },
                shadow: shadow::MD,
                ..container::Style::default()
            })
            .into()
        }
    };

    let horizontal = if book.auto_center {
        Horizontal::Center
    } else {
        Horizontal::Left
    };

    container(page)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(horizontal)
        .align_y(Vertical::Center)
        .padding(spacing::XS)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flipbook::testing::png_bytes;
    use crate::flipbook::{build_pages, AssetTemplate, FlipbookConfig, PageImage};
    use std::collections::BTreeMap;

    fn book(pages: u32, loaded: &[u32]) -> Book {
        let config = FlipbookConfig::new(pages, AssetTemplate::new("pages", "png"));
        let images: BTreeMap<_, _> = loaded
            .iter()
            .map(|&n| {
                let page = PageNumber::new(n).unwrap();
                (page, PageImage::from_bytes(page, png_bytes()).unwrap())
            })
            .collect();
        let containers = build_pages(&config, &images);
        Book::construct(
            &containers,
            TurnOptions {
                size: Dimensions::new(600.0, 800.0),
                auto_center: true,
            },
        )
    }

    #[test]
    fn opens_on_first_page() {
        let book = book(5, &[1]);
        assert_eq!(book.current_page(), PageNumber::new(1));
        assert_eq!(book.page_count().value(), 5);
        assert!(book.current_is_loaded());
    }

    #[test]
    fn turning_stops_at_both_ends() {
        let mut book = book(2, &[]);
        assert_eq!(book.previous(), None);
        assert_eq!(book.next(), PageNumber::new(2));
        assert_eq!(book.next(), None);
        assert_eq!(book.current_page(), PageNumber::new(2));
    }

    #[test]
    fn go_to_page_ignores_current_and_out_of_range_pages() {
        let mut book = book(4, &[]);
        assert_eq!(book.go_to_page(PageNumber::FIRST), None);
        assert_eq!(book.go_to_page(PageNumber::new(9).unwrap()), None);
        assert_eq!(book.go_to_page(PageNumber::new(3).unwrap()), PageNumber::new(3));
    }

    #[test]
    fn failed_pages_have_no_image() {
        let mut book = book(3, &[1, 3]);
        book.next();
        assert!(!book.current_is_loaded());
    }

    #[test]
    fn resize_updates_render_size() {
        let mut book = book(1, &[]);
        book.resize(Dimensions::new(1024.0, 700.0));
        assert_eq!(book.size(), Dimensions::new(1024.0, 700.0));
    }

    #[test]
    fn empty_book_has_no_current_page() {
        let book = book(0, &[]);
        assert_eq!(book.current_page(), None);
    }
}
