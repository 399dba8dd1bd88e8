// SPDX-License-Identifier: MPL-2.0
//! Seams between the controller and the outside world.
//!
//! The controller never touches a window, a filesystem or a clock directly.
//! It talks to a [`Host`] for rendering surfaces, timers and image fetches,
//! and drives a [`PageTurner`] for the actual page presentation.

use super::debounce::DebounceToken;
use super::fullscreen::FullscreenMethod;
use super::pages::PageContainer;
use super::preload::PageRequest;
use super::types::{Dimensions, PageCount, PageNumber};
use crate::error::Result;
use std::time::Duration;

/// Options passed to the page turner at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurnOptions {
    pub size: Dimensions,
    pub auto_center: bool,
}

/// The page-turning component.
///
/// Navigation calls return the page shown afterwards, which the controller
/// uses as its turn notification. Out-of-range requests are the turner's
/// responsibility to ignore or clamp.
pub trait PageTurner: Sized {
    fn construct(pages: &[PageContainer], options: TurnOptions) -> Self;
    fn next(&mut self) -> Option<PageNumber>;
    fn previous(&mut self) -> Option<PageNumber>;
    fn go_to_page(&mut self, page: PageNumber) -> Option<PageNumber>;
    fn resize(&mut self, size: Dimensions);
    fn current_page(&self) -> Option<PageNumber>;
    fn page_count(&self) -> PageCount;
}

/// Input sources the controller subscribes to once the book is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Listener {
    Keyboard,
    Touch,
    Resize,
    FullscreenChange,
    Toolbar,
    HelpOverlay,
}

impl Listener {
    pub const ALL: [Listener; 6] = [
        Listener::Keyboard,
        Listener::Touch,
        Listener::Resize,
        Listener::FullscreenChange,
        Listener::Toolbar,
        Listener::HelpOverlay,
    ];
}

/// One-shot timers the host schedules on the controller's behalf.
///
/// Timers tagged with a load cycle are ignored when they fire after a
/// reload started a newer cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timer {
    SettleDelay(u64),
    InitialResize,
    ResizeDebounce(DebounceToken),
    FullscreenResize,
    PreloadTimeout(u64),
}

/// Capabilities the embedding environment provides.
pub trait Host {
    /// Whether there is a surface to render the book into.
    fn has_render_target(&self) -> bool;

    /// Current size of the area available to the book.
    fn container_size(&self) -> Dimensions;

    fn show_progress(&mut self, percent: u8);
    fn dismiss_loading(&mut self);
    fn show_page_info(&mut self, current: PageNumber, total: PageCount);

    fn is_fullscreen(&self) -> bool;
    fn set_fullscreen_icon(&mut self, fullscreen: bool);

    /// Requests fullscreen through one specific mechanism.
    ///
    /// Returns `Error::FullscreenUnsupported` when that mechanism is not
    /// available so the caller can try the next one.
    fn request_fullscreen(&mut self, method: FullscreenMethod) -> Result<()>;
    fn exit_fullscreen(&mut self, method: FullscreenMethod) -> Result<()>;

    fn show_help(&mut self);
    fn hide_help(&mut self);
    fn is_help_visible(&self) -> bool;

    fn subscribe(&mut self, listener: Listener);
    fn schedule(&mut self, delay: Duration, timer: Timer);

    /// Starts fetching every request concurrently. Outcomes come back
    /// through `FlipbookController::on_page_loaded` tagged with `cycle`.
    fn fetch(&mut self, cycle: u64, requests: Vec<PageRequest>);
}
