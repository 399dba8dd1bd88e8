// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language
//! - `[book]` - Page count, folder and image format
//! - `[input]` - Swipe threshold
//! - `[timing]` - Resize debounce and settle delays
//!
//! Every field is optional; missing values fall back to [`defaults`].
//!
//! # Examples
//!
//! ```no_run
//! use iced_flipbook::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! config.book.page_count = Some(24);
//! let flipbook = config.to_flipbook_config();
//! assert_eq!(flipbook.page_count.value(), 24);
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::error::Result;
use crate::flipbook::{AssetTemplate, Delay, FlipbookConfig, PageCount, SwipeThreshold};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// The page images making up the book.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookConfig {
    /// Number of pages; images are named `page1` to `page<N>`.
    #[serde(default = "default_page_count", skip_serializing_if = "Option::is_none")]
    pub page_count: Option<u32>,

    /// Folder holding the page images.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages_folder: Option<PathBuf>,

    /// File extension of the page images, without the dot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_format: Option<String>,

    /// Center the page inside the viewport.
    #[serde(default = "default_auto_center", skip_serializing_if = "Option::is_none")]
    pub auto_center: Option<bool>,
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            page_count: default_page_count(),
            pages_folder: Some(PathBuf::from(DEFAULT_PAGES_FOLDER)),
            image_format: Some(DEFAULT_IMAGE_FORMAT.to_string()),
            auto_center: default_auto_center(),
        }
    }
}

/// Input handling settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InputConfig {
    /// Minimum horizontal swipe distance in pixels.
    #[serde(
        default = "default_swipe_threshold",
        skip_serializing_if = "Option::is_none"
    )]
    pub swipe_threshold_px: Option<u32>,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            swipe_threshold_px: default_swipe_threshold(),
        }
    }
}

/// Delays used while loading and resizing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimingConfig {
    #[serde(
        default = "default_resize_debounce",
        skip_serializing_if = "Option::is_none"
    )]
    pub resize_debounce_ms: Option<u64>,

    #[serde(default = "default_settle_delay", skip_serializing_if = "Option::is_none")]
    pub settle_delay_ms: Option<u64>,

    #[serde(
        default = "default_fullscreen_resize_delay",
        skip_serializing_if = "Option::is_none"
    )]
    pub fullscreen_resize_delay_ms: Option<u64>,

    #[serde(
        default = "default_initial_resize_delay",
        skip_serializing_if = "Option::is_none"
    )]
    pub initial_resize_delay_ms: Option<u64>,

    #[serde(
        default = "default_preload_timeout",
        skip_serializing_if = "Option::is_none"
    )]
    pub preload_timeout_secs: Option<u64>,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            resize_debounce_ms: default_resize_debounce(),
            settle_delay_ms: default_settle_delay(),
            fullscreen_resize_delay_ms: default_fullscreen_resize_delay(),
            initial_resize_delay_ms: default_initial_resize_delay(),
            preload_timeout_secs: default_preload_timeout(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub book: BookConfig,

    #[serde(default)]
    pub input: InputConfig,

    #[serde(default)]
    pub timing: TimingConfig,
}

impl Config {
    /// Resolves the optional settings into the immutable flipbook configuration.
    ///
    /// Out-of-range values are clamped rather than rejected.
    #[must_use]
    pub fn to_flipbook_config(&self) -> FlipbookConfig {
        let folder = self
            .book
            .pages_folder
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PAGES_FOLDER));
        let format = self
            .book
            .image_format
            .clone()
            .unwrap_or_else(|| DEFAULT_IMAGE_FORMAT.to_string());
        let timing = &self.timing;

        FlipbookConfig {
            page_count: PageCount::new(self.book.page_count.unwrap_or(DEFAULT_PAGE_COUNT)),
            assets: AssetTemplate::new(folder, &format),
            swipe_threshold: SwipeThreshold::new(
                self.input
                    .swipe_threshold_px
                    .unwrap_or(DEFAULT_SWIPE_THRESHOLD_PX),
            ),
            resize_debounce: Delay::from_millis(
                timing.resize_debounce_ms.unwrap_or(DEFAULT_RESIZE_DEBOUNCE_MS),
            ),
            settle_delay: Delay::from_millis(
                timing.settle_delay_ms.unwrap_or(DEFAULT_SETTLE_DELAY_MS),
            ),
            fullscreen_resize_delay: Delay::from_millis(
                timing
                    .fullscreen_resize_delay_ms
                    .unwrap_or(DEFAULT_FULLSCREEN_RESIZE_DELAY_MS),
            ),
            initial_resize_delay: Delay::from_millis(
                timing
                    .initial_resize_delay_ms
                    .unwrap_or(DEFAULT_INITIAL_RESIZE_DELAY_MS),
            ),
            preload_timeout: Duration::from_secs(
                timing
                    .preload_timeout_secs
                    .unwrap_or(DEFAULT_PRELOAD_TIMEOUT_SECS)
                    .clamp(MIN_PRELOAD_TIMEOUT_SECS, MAX_PRELOAD_TIMEOUT_SECS),
            ),
            auto_center: self.book.auto_center.unwrap_or(true),
        }
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_page_count() -> Option<u32> {
    Some(DEFAULT_PAGE_COUNT)
}

fn default_auto_center() -> Option<bool> {
    Some(true)
}

fn default_swipe_threshold() -> Option<u32> {
    Some(DEFAULT_SWIPE_THRESHOLD_PX)
}

fn default_resize_debounce() -> Option<u64> {
    Some(DEFAULT_RESIZE_DEBOUNCE_MS)
}

fn default_settle_delay() -> Option<u64> {
    Some(DEFAULT_SETTLE_DELAY_MS)
}

fn default_fullscreen_resize_delay() -> Option<u64> {
    Some(DEFAULT_FULLSCREEN_RESIZE_DELAY_MS)
}

fn default_initial_resize_delay() -> Option<u64> {
    Some(DEFAULT_INITIAL_RESIZE_DELAY_MS)
}

fn default_preload_timeout() -> Option<u64> {
    Some(DEFAULT_PRELOAD_TIMEOUT_SECS)
}

// =============================================================================
// Load / Save
// =============================================================================

fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with an i18n key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "config load failed, using defaults");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
