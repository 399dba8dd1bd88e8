// SPDX-License-Identifier: MPL-2.0
//! Page image preloading.
//!
//! One fetch is issued per page. Outcomes arrive in completion order and a
//! failed page never cancels the others: completion means every request has
//! settled, or the preload timeout elapsed first.
//!
//! # Usage
//!
//! ```ignore
//! let report = preload::settle_all(&FsImageSource, &config).await;
//! println!("{} of {} pages loaded", report.state().loaded(), report.state().total());
//! ```

use super::types::{FlipbookConfig, PageCount, PageNumber};
use crate::error::{Error, Result};
use futures_util::future::BoxFuture;
use futures_util::stream::{FuturesUnordered, Stream, StreamExt};
use futures_util::FutureExt;
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// A single page fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub page: PageNumber,
    pub path: PathBuf,
}

/// Returns one request per page, in ascending order.
#[must_use]
pub fn requests(config: &FlipbookConfig) -> Vec<PageRequest> {
    config
        .page_count
        .pages()
        .map(|page| PageRequest {
            page,
            path: config.assets.path_for(page),
        })
        .collect()
}

/// Raw bytes of a fetched page image, with the sniffed format.
///
/// The bytes are not decoded here; the toolkit does that when drawing.
#[derive(Clone, PartialEq)]
pub struct PageImage {
    bytes: Arc<[u8]>,
    format: image_rs::ImageFormat,
}

impl PageImage {
    /// Wraps fetched bytes, rejecting anything that is not a known image format.
    pub fn from_bytes(page: PageNumber, bytes: Vec<u8>) -> Result<Self> {
        let format = image_rs::guess_format(&bytes)
            .map_err(|_| Error::UnsupportedImage { page: page.value() })?;
        Ok(Self {
            bytes: bytes.into(),
            format,
        })
    }

    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[must_use]
    pub fn format(&self) -> image_rs::ImageFormat {
        self.format
    }
}

impl fmt::Debug for PageImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageImage")
            .field("format", &self.format)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Result of one page fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    Loaded { page: PageNumber, image: PageImage },
    Failed { page: PageNumber, error: Error },
}

impl LoadOutcome {
    fn from_result(page: PageNumber, result: Result<PageImage>) -> Self {
        match result {
            Ok(image) => LoadOutcome::Loaded { page, image },
            Err(error) => LoadOutcome::Failed { page, error },
        }
    }

    #[must_use]
    pub fn page(&self) -> PageNumber {
        match self {
            LoadOutcome::Loaded { page, .. } | LoadOutcome::Failed { page, .. } => *page,
        }
    }
}

/// Something that can fetch page images.
pub trait ImageSource: Send + Sync {
    fn fetch(&self, request: PageRequest) -> BoxFuture<'static, Result<PageImage>>;
}

/// Reads page images from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsImageSource;

impl ImageSource for FsImageSource {
    fn fetch(&self, request: PageRequest) -> BoxFuture<'static, Result<PageImage>> {
        async move {
            let page = request.page;
            let bytes = tokio::fs::read(&request.path)
                .await
                .map_err(|err| Error::ImageLoad {
                    page: page.value(),
                    reason: format!("{}: {err}", request.path.display()),
                })?;
            PageImage::from_bytes(page, bytes)
        }
        .boxed()
    }
}

/// Issues every request at once and yields outcomes as they settle.
///
/// Nothing runs until the stream is polled. An empty request list yields an
/// empty stream.
pub fn stream<S>(
    source: &S,
    requests: Vec<PageRequest>,
) -> impl Stream<Item = LoadOutcome> + Send + Unpin + 'static
where
    S: ImageSource + ?Sized,
{
    requests
        .into_iter()
        .map(|request| {
            let page = request.page;
            source
                .fetch(request)
                .map(move |result| LoadOutcome::from_result(page, result))
        })
        .collect::<FuturesUnordered<_>>()
}

// =============================================================================
// LoadState
// =============================================================================

/// Preload counters. Only ever increase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadState {
    loaded: u32,
    failed: u32,
    total: u32,
}

impl LoadState {
    #[must_use]
    pub fn new(total: PageCount) -> Self {
        Self {
            loaded: 0,
            failed: 0,
            total: total.value(),
        }
    }

    #[must_use]
    pub fn loaded(&self) -> u32 {
        self.loaded
    }

    #[must_use]
    pub fn failed(&self) -> u32 {
        self.failed
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    /// True once every request has succeeded or failed.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.loaded + self.failed >= self.total
    }

    /// Successful loads as a rounded percentage of the total.
    #[must_use]
    pub fn progress_percent(&self) -> u8 {
        if self.total == 0 {
            return 100;
        }
        let percent = (f64::from(self.loaded) / f64::from(self.total) * 100.0).round();
        percent.clamp(0.0, 100.0) as u8
    }

    fn record_success(&mut self) {
        if !self.is_settled() {
            self.loaded += 1;
        }
    }

    fn record_failure(&mut self) {
        if !self.is_settled() {
            self.failed += 1;
        }
    }
}

// =============================================================================
// PreloadReport
// =============================================================================

/// Accumulates outcomes for one preload pass.
#[derive(Debug, Clone, Default)]
pub struct PreloadReport {
    state: LoadState,
    images: BTreeMap<PageNumber, PageImage>,
    failures: BTreeMap<PageNumber, Error>,
    timed_out: bool,
}

impl PreloadReport {
    #[must_use]
    pub fn new(total: PageCount) -> Self {
        Self {
            state: LoadState::new(total),
            ..Self::default()
        }
    }

    /// Records one outcome. Duplicate outcomes for the same page are ignored.
    ///
    /// Returns `true` if the outcome was counted.
    pub fn record(&mut self, outcome: LoadOutcome) -> bool {
        let page = outcome.page();
        if page.value() > self.state.total
            || self.images.contains_key(&page)
            || self.failures.contains_key(&page)
        {
            return false;
        }

        match outcome {
            LoadOutcome::Loaded { page, image } => {
                self.state.record_success();
                self.images.insert(page, image);
            }
            LoadOutcome::Failed { page, error } => {
                tracing::warn!(page = page.value(), %error, "page image failed to load");
                self.state.record_failure();
                self.failures.insert(page, error);
            }
        }
        true
    }

    /// Marks the pass complete even though some pages are still pending.
    pub fn mark_timed_out(&mut self) {
        self.timed_out = true;
    }

    #[must_use]
    pub fn state(&self) -> LoadState {
        self.state
    }

    #[must_use]
    pub fn images(&self) -> &BTreeMap<PageNumber, PageImage> {
        &self.images
    }

    #[must_use]
    pub fn failures(&self) -> &BTreeMap<PageNumber, Error> {
        &self.failures
    }

    #[must_use]
    pub fn timed_out(&self) -> bool {
        self.timed_out
    }

    /// Settled means every request finished, or the timeout gave up on the rest.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.timed_out || self.state.is_settled()
    }

    /// Pages with neither an image nor a recorded failure.
    #[must_use]
    pub fn pending_pages(&self) -> Vec<PageNumber> {
        PageCount::new(self.state.total)
            .pages()
            .filter(|page| !self.images.contains_key(page) && !self.failures.contains_key(page))
            .collect()
    }
}

/// Waits for every page outcome, or until `config.preload_timeout` elapses.
///
/// Never short-circuits on a failure.
pub async fn settle_all<S>(source: &S, config: &FlipbookConfig) -> PreloadReport
where
    S: ImageSource + ?Sized,
{
    let mut report = PreloadReport::new(config.page_count);
    let mut outcomes = stream(source, requests(config));
    let deadline = tokio::time::sleep(config.preload_timeout);
    tokio::pin!(deadline);

    loop {
        tokio::select! {
            next = outcomes.next() => match next {
                Some(outcome) => {
                    report.record(outcome);
                }
                None => break,
            },
            () = &mut deadline => {
                tracing::warn!(
                    pending = report.pending_pages().len(),
                    "preload timed out, continuing with available pages"
                );
                report.mark_timed_out();
                break;
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flipbook::testing::{png_bytes, FakeImageSource};
    use crate::flipbook::types::AssetTemplate;
    use std::time::Duration;
    use tempfile::tempdir;

    fn config(pages: u32) -> FlipbookConfig {
        FlipbookConfig::new(pages, AssetTemplate::new("pages", "png"))
    }

    #[test]
    fn requests_cover_every_page_in_order() {
        let requests = requests(&config(3));
        let pages: Vec<u32> = requests.iter().map(|r| r.page.value()).collect();
        assert_eq!(pages, vec![1, 2, 3]);
        assert_eq!(requests[2].path, PathBuf::from("pages").join("page3.png"));
    }

    #[test]
    fn progress_counts_only_successes() {
        let mut report = PreloadReport::new(PageCount::new(4));
        let image = PageImage::from_bytes(PageNumber::FIRST, png_bytes()).unwrap();
        report.record(LoadOutcome::Loaded {
            page: PageNumber::FIRST,
            image,
        });
        report.record(LoadOutcome::Failed {
            page: PageNumber::new(2).unwrap(),
            error: Error::UnsupportedImage { page: 2 },
        });
        assert_eq!(report.state().progress_percent(), 25);
        assert!(!report.is_complete());
        assert_eq!(report.pending_pages().len(), 2);
    }

    #[test]
    fn duplicate_outcomes_are_ignored() {
        let mut report = PreloadReport::new(PageCount::new(2));
        let failure = LoadOutcome::Failed {
            page: PageNumber::FIRST,
            error: Error::UnsupportedImage { page: 1 },
        };
        assert!(report.record(failure.clone()));
        assert!(!report.record(failure));
        assert_eq!(report.state().failed(), 1);
    }

    #[test]
    fn empty_book_reports_full_progress() {
        let state = LoadState::new(PageCount::new(0));
        assert!(state.is_settled());
        assert_eq!(state.progress_percent(), 100);
    }

    #[test]
    fn non_image_bytes_are_rejected() {
        let err = PageImage::from_bytes(PageNumber::FIRST, b"hello".to_vec()).unwrap_err();
        assert_eq!(err, Error::UnsupportedImage { page: 1 });
    }

    #[tokio::test]
    async fn zero_pages_settle_without_requests() {
        let source = FakeImageSource::all_ok();
        let report = settle_all(&source, &config(0)).await;
        assert!(report.is_complete());
        assert!(!report.timed_out());
        assert_eq!(source.fetched(), 0);
    }

    #[tokio::test]
    async fn failures_do_not_block_completion() {
        let source = FakeImageSource::failing(&[2, 5, 9]);
        let report = settle_all(&source, &config(11)).await;

        assert!(report.is_complete());
        assert_eq!(report.state().loaded(), 8);
        assert_eq!(report.state().failed(), 3);
        assert_eq!(source.fetched(), 11);
    }

    #[tokio::test]
    async fn all_failures_still_complete() {
        let source = FakeImageSource::failing(&[1, 2, 3]);
        let report = settle_all(&source, &config(3)).await;

        assert!(report.is_complete());
        assert_eq!(report.state().loaded(), 0);
        assert_eq!(report.failures().len(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn hanging_requests_are_abandoned_after_timeout() {
        let source = FakeImageSource::hanging(&[3]);
        let mut config = config(3);
        config.preload_timeout = Duration::from_secs(5);

        let report = settle_all(&source, &config).await;

        assert!(report.timed_out());
        assert!(report.is_complete());
        assert_eq!(report.state().loaded(), 2);
        assert_eq!(report.pending_pages(), vec![PageNumber::new(3).unwrap()]);
    }

    #[tokio::test]
    async fn filesystem_source_loads_images_and_reports_missing_files() {
        let dir = tempdir().expect("failed to create temp dir");
        std::fs::write(dir.path().join("page1.png"), png_bytes()).unwrap();
        std::fs::write(dir.path().join("page2.png"), b"not an image").unwrap();
        let config = FlipbookConfig::new(3, AssetTemplate::new(dir.path(), "png"));

        let report = settle_all(&FsImageSource, &config).await;

        assert_eq!(report.state().loaded(), 1);
        assert_eq!(
            report.failures().get(&PageNumber::new(2).unwrap()),
            Some(&Error::UnsupportedImage { page: 2 })
        );
        assert!(matches!(
            report.failures().get(&PageNumber::new(3).unwrap()),
            Some(Error::ImageLoad { page: 3, .. })
        ));
        assert_eq!(
            report.images()[&PageNumber::FIRST].format(),
            image_rs::ImageFormat::Png
        );
    }
}
