// SPDX-License-Identifier: MPL-2.0
//! Page containers handed to the page turner.

use super::preload::PageImage;
use super::types::{FlipbookConfig, PageNumber};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// One page of the book: where its image lives and, if preloading
/// succeeded, the image itself.
#[derive(Debug, Clone, PartialEq)]
pub struct PageContainer {
    pub page: PageNumber,
    pub asset_path: PathBuf,
    pub alt: String,
    pub image: Option<PageImage>,
}

impl PageContainer {
    /// Whether the page image was loaded.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.image.is_some()
    }
}

/// Builds one container per configured page, in ascending order.
///
/// Pages that failed to preload still get a container; they simply carry no
/// image.
#[must_use]
pub fn build_pages(
    config: &FlipbookConfig,
    images: &BTreeMap<PageNumber, PageImage>,
) -> Vec<PageContainer> {
    config
        .page_count
        .pages()
        .map(|page| PageContainer {
            page,
            asset_path: config.assets.path_for(page),
            alt: format!("Page {page}"),
            image: images.get(&page).cloned(),
        })
        .collect()
}

/// The current container list.
#[derive(Debug, Clone, Default)]
pub struct PageStack {
    containers: Vec<PageContainer>,
}

impl PageStack {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces any previous containers with a freshly built list.
    pub fn rebuild(
        &mut self,
        config: &FlipbookConfig,
        images: &BTreeMap<PageNumber, PageImage>,
    ) -> &[PageContainer] {
        self.containers.clear();
        self.containers.extend(build_pages(config, images));
        &self.containers
    }

    #[must_use]
    pub fn containers(&self) -> &[PageContainer] {
        &self.containers
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.containers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }

    /// Number of containers whose image is missing.
    #[must_use]
    pub fn missing_count(&self) -> usize {
        self.containers.iter().filter(|c| !c.is_loaded()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flipbook::testing::png_bytes;
    use crate::flipbook::types::AssetTemplate;

    fn config(pages: u32) -> FlipbookConfig {
        FlipbookConfig::new(pages, AssetTemplate::new("pages", "jpg"))
    }

    #[test]
    fn builds_exactly_page_count_containers_in_order() {
        for count in [0, 1, 2, 11, 40] {
            let pages = build_pages(&config(count), &BTreeMap::new());
            assert_eq!(pages.len(), count as usize);
            for (i, container) in pages.iter().enumerate() {
                let expected = i as u32 + 1;
                assert_eq!(container.page.value(), expected);
                assert_eq!(
                    container.asset_path,
                    PathBuf::from("pages").join(format!("page{expected}.jpg"))
                );
                assert_eq!(container.alt, format!("Page {expected}"));
            }
        }
    }

    #[test]
    fn loaded_images_are_attached_to_their_pages() {
        let page = PageNumber::new(2).unwrap();
        let image = PageImage::from_bytes(page, png_bytes()).unwrap();
        let images = BTreeMap::from([(page, image)]);

        let pages = build_pages(&config(3), &images);
        assert!(!pages[0].is_loaded());
        assert!(pages[1].is_loaded());
        assert!(!pages[2].is_loaded());
    }

    #[test]
    fn rebuild_clears_previous_containers() {
        let mut stack = PageStack::new();
        stack.rebuild(&config(5), &BTreeMap::new());
        stack.rebuild(&config(5), &BTreeMap::new());
        assert_eq!(stack.len(), 5);

        stack.rebuild(&config(2), &BTreeMap::new());
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.missing_count(), 2);
    }
}
