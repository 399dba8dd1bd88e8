// SPDX-License-Identifier: MPL-2.0
//! Test doubles for the flipbook seams.

use super::fullscreen::FullscreenMethod;
use super::pages::PageContainer;
use super::ports::{Host, Listener, PageTurner, Timer, TurnOptions};
use super::preload::{ImageSource, LoadOutcome, PageImage, PageRequest};
use super::types::{Dimensions, PageCount, PageNumber};
use crate::error::{Error, Result};
use futures_util::future::{self, BoxFuture, FutureExt};
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// A valid 1x1 PNG.
pub fn png_bytes() -> Vec<u8> {
    vec![
        0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48,
        0x44, 0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00,
        0x00, 0x1F, 0x15, 0xC4, 0x89, 0x00, 0x00, 0x00, 0x0A, 0x49, 0x44, 0x41, 0x54, 0x78,
        0x9C, 0x63, 0x00, 0x01, 0x00, 0x00, 0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, 0x00,
        0x00, 0x00, 0x00, 0x49, 0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
    ]
}

pub fn page(n: u32) -> PageNumber {
    PageNumber::new(n).expect("page numbers start at 1")
}

pub fn loaded(n: u32) -> LoadOutcome {
    LoadOutcome::Loaded {
        page: page(n),
        image: PageImage::from_bytes(page(n), png_bytes()).expect("fixture is a PNG"),
    }
}

pub fn failed(n: u32) -> LoadOutcome {
    LoadOutcome::Failed {
        page: page(n),
        error: Error::ImageLoad {
            page: n,
            reason: "simulated failure".into(),
        },
    }
}

// =============================================================================
// FakeImageSource
// =============================================================================

/// Serves a PNG for every page except the ones told to fail or hang.
#[derive(Debug, Default)]
pub struct FakeImageSource {
    failing: HashSet<u32>,
    hanging: HashSet<u32>,
    fetched: AtomicUsize,
}

impl FakeImageSource {
    pub fn all_ok() -> Self {
        Self::default()
    }

    pub fn failing(pages: &[u32]) -> Self {
        Self {
            failing: pages.iter().copied().collect(),
            ..Self::default()
        }
    }

    pub fn hanging(pages: &[u32]) -> Self {
        Self {
            hanging: pages.iter().copied().collect(),
            ..Self::default()
        }
    }

    /// Number of fetches issued so far.
    pub fn fetched(&self) -> usize {
        self.fetched.load(Ordering::SeqCst)
    }
}

impl ImageSource for FakeImageSource {
    fn fetch(&self, request: PageRequest) -> BoxFuture<'static, Result<PageImage>> {
        self.fetched.fetch_add(1, Ordering::SeqCst);
        let n = request.page.value();
        if self.hanging.contains(&n) {
            return future::pending().boxed();
        }
        if self.failing.contains(&n) {
            return future::ready(Err(Error::ImageLoad {
                page: n,
                reason: "simulated failure".into(),
            }))
            .boxed();
        }
        future::ready(PageImage::from_bytes(request.page, png_bytes())).boxed()
    }
}

// =============================================================================
// FakeTurner
// =============================================================================

/// Page turner that records what it was asked to do.
#[derive(Debug, Clone)]
pub struct FakeTurner {
    pub pages: Vec<PageNumber>,
    pub loaded_pages: usize,
    pub options: TurnOptions,
    pub current: Option<PageNumber>,
    pub resizes: Vec<Dimensions>,
}

impl PageTurner for FakeTurner {
    fn construct(pages: &[PageContainer], options: TurnOptions) -> Self {
        Self {
            pages: pages.iter().map(|c| c.page).collect(),
            loaded_pages: pages.iter().filter(|c| c.is_loaded()).count(),
            options,
            current: pages.first().map(|c| c.page),
            resizes: Vec::new(),
        }
    }

    fn next(&mut self) -> Option<PageNumber> {
        let current = self.current?;
        let next = PageNumber::new(current.value() + 1).filter(|p| self.pages.contains(p))?;
        self.current = Some(next);
        Some(next)
    }

    fn previous(&mut self) -> Option<PageNumber> {
        let current = self.current?;
        let previous = PageNumber::new(current.value() - 1)?;
        self.current = Some(previous);
        Some(previous)
    }

    fn go_to_page(&mut self, page: PageNumber) -> Option<PageNumber> {
        if !self.pages.contains(&page) {
            return None;
        }
        self.current = Some(page);
        Some(page)
    }

    fn resize(&mut self, size: Dimensions) {
        self.resizes.push(size);
    }

    fn current_page(&self) -> Option<PageNumber> {
        self.current
    }

    fn page_count(&self) -> PageCount {
        PageCount::new(u32::try_from(self.pages.len()).unwrap_or(u32::MAX))
    }
}

// =============================================================================
// FakeHost
// =============================================================================

/// Host that records every effect instead of performing it.
#[derive(Debug, Clone)]
pub struct FakeHost {
    pub render_target: bool,
    pub size: Dimensions,
    pub progress: Vec<u8>,
    pub loading_dismissed: usize,
    pub page_info: Vec<(u32, u32)>,
    pub fullscreen: bool,
    pub fullscreen_icon: Option<bool>,
    pub supported_methods: Vec<FullscreenMethod>,
    pub fullscreen_requests: Vec<FullscreenMethod>,
    pub fullscreen_exits: Vec<FullscreenMethod>,
    pub help_visible: bool,
    pub subscriptions: Vec<Listener>,
    pub timers: Vec<(Duration, Timer)>,
    pub fetches: Vec<(u64, Vec<PageRequest>)>,
}

impl Default for FakeHost {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeHost {
    pub fn new() -> Self {
        Self {
            render_target: true,
            size: Dimensions::new(800.0, 600.0),
            progress: Vec::new(),
            loading_dismissed: 0,
            page_info: Vec::new(),
            fullscreen: false,
            fullscreen_icon: None,
            supported_methods: FullscreenMethod::ORDER.to_vec(),
            fullscreen_requests: Vec::new(),
            fullscreen_exits: Vec::new(),
            help_visible: false,
            subscriptions: Vec::new(),
            timers: Vec::new(),
            fetches: Vec::new(),
        }
    }

    pub fn without_render_target(mut self) -> Self {
        self.render_target = false;
        self
    }

    pub fn with_fullscreen_methods(mut self, methods: &[FullscreenMethod]) -> Self {
        self.supported_methods = methods.to_vec();
        self
    }

    /// Removes and returns every scheduled timer.
    pub fn take_timers(&mut self) -> Vec<Timer> {
        self.timers.drain(..).map(|(_, timer)| timer).collect()
    }

    pub fn last_page_info(&self) -> Option<(u32, u32)> {
        self.page_info.last().copied()
    }
}

impl Host for FakeHost {
    fn has_render_target(&self) -> bool {
        self.render_target
    }

    fn container_size(&self) -> Dimensions {
        self.size
    }

    fn show_progress(&mut self, percent: u8) {
        self.progress.push(percent);
    }

    fn dismiss_loading(&mut self) {
        self.loading_dismissed += 1;
    }

    fn show_page_info(&mut self, current: PageNumber, total: PageCount) {
        self.page_info.push((current.value(), total.value()));
    }

    fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    fn set_fullscreen_icon(&mut self, fullscreen: bool) {
        self.fullscreen_icon = Some(fullscreen);
    }

    fn request_fullscreen(&mut self, method: FullscreenMethod) -> Result<()> {
        self.fullscreen_requests.push(method);
        if self.supported_methods.contains(&method) {
            self.fullscreen = true;
            Ok(())
        } else {
            Err(Error::FullscreenUnsupported)
        }
    }

    fn exit_fullscreen(&mut self, method: FullscreenMethod) -> Result<()> {
        self.fullscreen_exits.push(method);
        if self.supported_methods.contains(&method) {
            self.fullscreen = false;
            Ok(())
        } else {
            Err(Error::FullscreenUnsupported)
        }
    }

    fn show_help(&mut self) {
        self.help_visible = true;
    }

    fn hide_help(&mut self) {
        self.help_visible = false;
    }

    fn is_help_visible(&self) -> bool {
        self.help_visible
    }

    fn subscribe(&mut self, listener: Listener) {
        self.subscriptions.push(listener);
    }

    fn schedule(&mut self, delay: Duration, timer: Timer) {
        self.timers.push((delay, timer));
    }

    fn fetch(&mut self, cycle: u64, requests: Vec<PageRequest>) {
        self.fetches.push((cycle, requests));
    }
}
