// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Book**: Page count and asset naming
//! - **Input**: Swipe gesture threshold
//! - **Timing**: Debounce and settle delays

// ==========================================================================
// Book Defaults
// ==========================================================================

/// Default number of pages in the flipbook.
pub const DEFAULT_PAGE_COUNT: u32 = 11;

/// Upper bound on the page count accepted from config or CLI.
pub const MAX_PAGE_COUNT: u32 = 10_000;

/// Default folder containing `page<N>.<ext>` images.
pub const DEFAULT_PAGES_FOLDER: &str = "pages";

/// Default page image extension.
pub const DEFAULT_IMAGE_FORMAT: &str = "jpg";

// ==========================================================================
// Input Defaults
// ==========================================================================

/// Minimum horizontal travel, in pixels, for a swipe to turn a page.
pub const DEFAULT_SWIPE_THRESHOLD_PX: u32 = 50;

/// Largest swipe threshold accepted.
pub const MAX_SWIPE_THRESHOLD_PX: u32 = 1_000;

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Trailing-edge debounce applied to window resize events.
pub const DEFAULT_RESIZE_DEBOUNCE_MS: u64 = 250;

/// Pause between preload settlement and flipbook initialization.
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 100;

/// Follow-up resize after a fullscreen change.
pub const DEFAULT_FULLSCREEN_RESIZE_DELAY_MS: u64 = 100;

/// Resize issued shortly after the flipbook becomes ready.
pub const DEFAULT_INITIAL_RESIZE_DELAY_MS: u64 = 100;

/// Upper bound on any configurable delay.
pub const MAX_DELAY_MS: u64 = 10_000;

/// Best-effort limit on how long preloading may take.
pub const DEFAULT_PRELOAD_TIMEOUT_SECS: u64 = 30;

/// Shortest preload timeout accepted.
pub const MIN_PRELOAD_TIMEOUT_SECS: u64 = 1;

/// Longest preload timeout accepted.
pub const MAX_PRELOAD_TIMEOUT_SECS: u64 = 600;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_PAGE_COUNT <= MAX_PAGE_COUNT);
    assert!(DEFAULT_SWIPE_THRESHOLD_PX <= MAX_SWIPE_THRESHOLD_PX);
    assert!(DEFAULT_RESIZE_DEBOUNCE_MS <= MAX_DELAY_MS);
    assert!(DEFAULT_SETTLE_DELAY_MS <= MAX_DELAY_MS);
    assert!(DEFAULT_FULLSCREEN_RESIZE_DELAY_MS <= MAX_DELAY_MS);
    assert!(DEFAULT_INITIAL_RESIZE_DELAY_MS <= MAX_DELAY_MS);
    assert!(MIN_PRELOAD_TIMEOUT_SECS > 0);
    assert!(DEFAULT_PRELOAD_TIMEOUT_SECS >= MIN_PRELOAD_TIMEOUT_SECS);
    assert!(DEFAULT_PRELOAD_TIMEOUT_SECS <= MAX_PRELOAD_TIMEOUT_SECS);
};
