// SPDX-License-Identifier: MPL-2.0
//! Flipbook newtypes and the immutable configuration record.
//!
//! Every newtype enforces its range at construction so call sites never
//! need to clamp by hand.

use crate::config::defaults::{
    DEFAULT_FULLSCREEN_RESIZE_DELAY_MS, DEFAULT_INITIAL_RESIZE_DELAY_MS,
    DEFAULT_PRELOAD_TIMEOUT_SECS, DEFAULT_RESIZE_DEBOUNCE_MS, DEFAULT_SETTLE_DELAY_MS,
    DEFAULT_SWIPE_THRESHOLD_PX, MAX_DELAY_MS, MAX_PAGE_COUNT, MAX_SWIPE_THRESHOLD_PX,
};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

// =============================================================================
// PageNumber
// =============================================================================

/// One-based page index. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageNumber(u32);

impl PageNumber {
    /// The first page of any non-empty book.
    pub const FIRST: PageNumber = PageNumber(1);

    /// Returns `None` for zero.
    #[must_use]
    pub fn new(value: u32) -> Option<Self> {
        (value > 0).then_some(Self(value))
    }

    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Zero-based position of this page in a container list.
    #[must_use]
    pub fn index(self) -> usize {
        (self.0 - 1) as usize
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// PageCount
// =============================================================================

/// Number of pages in the book, clamped to `0..=MAX_PAGE_COUNT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageCount(u32);

impl PageCount {
    #[must_use]
    pub fn new(value: u32) -> Self {
        Self(value.min(MAX_PAGE_COUNT))
    }

    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The last page, or `None` for an empty book.
    #[must_use]
    pub fn last(self) -> Option<PageNumber> {
        PageNumber::new(self.0)
    }

    /// All pages in ascending order.
    pub fn pages(self) -> impl Iterator<Item = PageNumber> {
        (1..=self.0).map(PageNumber)
    }

    /// Clamps an arbitrary requested index into `[1, count]`.
    ///
    /// Returns `None` only when the book is empty.
    #[must_use]
    pub fn clamp_page(self, requested: i64) -> Option<PageNumber> {
        let last = self.last()?;
        let clamped = requested.clamp(1, i64::from(last.value()));
        PageNumber::new(u32::try_from(clamped).ok()?)
    }
}

impl fmt::Display for PageCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// SwipeThreshold
// =============================================================================

/// Minimum horizontal travel, in pixels, before a swipe turns a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwipeThreshold(u32);

impl SwipeThreshold {
    #[must_use]
    pub const fn new(pixels: u32) -> Self {
        if pixels > MAX_SWIPE_THRESHOLD_PX {
            Self(MAX_SWIPE_THRESHOLD_PX)
        } else {
            Self(pixels)
        }
    }

    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    #[must_use]
    pub fn as_f32(self) -> f32 {
        self.0 as f32
    }
}

impl Default for SwipeThreshold {
    fn default() -> Self {
        Self(DEFAULT_SWIPE_THRESHOLD_PX)
    }
}

// =============================================================================
// Delay
// =============================================================================

/// A short timer delay, clamped to `MAX_DELAY_MS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delay(Duration);

impl Delay {
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self(Duration::from_millis(millis.min(MAX_DELAY_MS)))
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        self.0
    }
}

// =============================================================================
// Geometry
// =============================================================================

/// Width and height of the area the pages are rendered into.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Dimensions {
    pub width: f32,
    pub height: f32,
}

impl Dimensions {
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True when there is no drawable area.
    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// A pointer or finger position in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

// =============================================================================
// AssetTemplate
// =============================================================================

/// Maps a page number to its image path: `<folder>/page<N>.<ext>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetTemplate {
    folder: PathBuf,
    extension: String,
}

impl AssetTemplate {
    pub fn new(folder: impl Into<PathBuf>, extension: &str) -> Self {
        Self {
            folder: folder.into(),
            extension: extension.trim_start_matches('.').to_string(),
        }
    }

    #[must_use]
    pub fn folder(&self) -> &Path {
        &self.folder
    }

    #[must_use]
    pub fn extension(&self) -> &str {
        &self.extension
    }

    #[must_use]
    pub fn path_for(&self, page: PageNumber) -> PathBuf {
        self.folder
            .join(format!("page{}.{}", page.value(), self.extension))
    }
}

// =============================================================================
// FlipbookConfig
// =============================================================================

/// Immutable flipbook configuration, set once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct FlipbookConfig {
    pub page_count: PageCount,
    pub assets: AssetTemplate,
    pub swipe_threshold: SwipeThreshold,
    pub resize_debounce: Delay,
    pub settle_delay: Delay,
    pub fullscreen_resize_delay: Delay,
    pub initial_resize_delay: Delay,
    pub preload_timeout: Duration,
    pub auto_center: bool,
}

impl FlipbookConfig {
    /// Builds a configuration with default input and timing settings.
    pub fn new(page_count: u32, assets: AssetTemplate) -> Self {
        Self {
            page_count: PageCount::new(page_count),
            assets,
            swipe_threshold: SwipeThreshold::default(),
            resize_debounce: Delay::from_millis(DEFAULT_RESIZE_DEBOUNCE_MS),
            settle_delay: Delay::from_millis(DEFAULT_SETTLE_DELAY_MS),
            fullscreen_resize_delay: Delay::from_millis(DEFAULT_FULLSCREEN_RESIZE_DELAY_MS),
            initial_resize_delay: Delay::from_millis(DEFAULT_INITIAL_RESIZE_DELAY_MS),
            preload_timeout: Duration::from_secs(DEFAULT_PRELOAD_TIMEOUT_SECS),
            auto_center: true,
        }
    }
}
