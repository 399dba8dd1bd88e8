// SPDX-License-Identifier: MPL-2.0
//! The flipbook controller.
//!
//! Owns every piece of mutable flipbook state and reacts to three kinds of
//! input: preload outcomes, timers it previously asked the host to schedule,
//! and user input forwarded by the host once listeners are attached. Each
//! entry point takes the host by `&mut` so effects happen synchronously and
//! in order.

use super::api::FlipbookApi;
use super::debounce::Debouncer;
use super::fullscreen::{self, FullscreenMethod};
use super::input::{map_key, Key, KeyAction, Modifiers, NavCommand, SwipeTracker};
use super::lifecycle::Lifecycle;
use super::pages::{PageContainer, PageStack};
use super::ports::{Host, Listener, PageTurner, Timer, TurnOptions};
use super::preload::{self, LoadOutcome, LoadState, PreloadReport};
use super::types::{Dimensions, FlipbookConfig, PageCount, PageNumber, Point};
use crate::error::{Error, Result};
use tracing::{debug, error, info, warn};

#[derive(Debug)]
pub struct FlipbookController<T: PageTurner> {
    config: FlipbookConfig,
    lifecycle: Lifecycle,
    /// Incremented on every preload pass; tags fetches and timers.
    cycle: u64,
    report: PreloadReport,
    stack: PageStack,
    turner: Option<T>,
    current_page: Option<PageNumber>,
    fullscreen: bool,
    fullscreen_method: Option<FullscreenMethod>,
    swipe: SwipeTracker,
    resize: Debouncer<Dimensions>,
    listeners_attached: bool,
}

impl<T: PageTurner> FlipbookController<T> {
    #[must_use]
    pub fn new(config: FlipbookConfig) -> Self {
        let resize = Debouncer::new(config.resize_debounce.as_duration());
        let report = PreloadReport::new(config.page_count);
        Self {
            config,
            lifecycle: Lifecycle::Idle,
            cycle: 0,
            report,
            stack: PageStack::new(),
            turner: None,
            current_page: None,
            fullscreen: false,
            fullscreen_method: None,
            swipe: SwipeTracker::new(),
            resize,
            listeners_attached: false,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[must_use]
    pub fn config(&self) -> &FlipbookConfig {
        &self.config
    }

    #[must_use]
    pub fn page_count(&self) -> PageCount {
        self.config.page_count
    }

    #[must_use]
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.lifecycle.is_ready()
    }

    #[must_use]
    pub fn load_state(&self) -> LoadState {
        self.report.state()
    }

    #[must_use]
    pub fn report(&self) -> &PreloadReport {
        &self.report
    }

    #[must_use]
    pub fn current_page(&self) -> Option<PageNumber> {
        self.current_page
    }

    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    #[must_use]
    pub fn pages(&self) -> &[PageContainer] {
        self.stack.containers()
    }

    #[must_use]
    pub fn turner(&self) -> Option<&T> {
        self.turner.as_ref()
    }

    #[must_use]
    pub fn listeners_attached(&self) -> bool {
        self.listeners_attached
    }

    /// Current load cycle. Outcomes and timers from other cycles are ignored.
    #[must_use]
    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    /// Programmatic control surface bound to `host`.
    pub fn api<'a, H: Host>(&'a mut self, host: &'a mut H) -> FlipbookApi<'a, T, H> {
        FlipbookApi::new(self, host)
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Starts preloading.
    ///
    /// Without a rendering target nothing happens and the controller stays
    /// idle. Calling `start` again after a successful start is ignored.
    pub fn start<H: Host>(&mut self, host: &mut H) -> Result<()> {
        if self.lifecycle != Lifecycle::Idle {
            debug!(state = ?self.lifecycle, "start ignored, flipbook already started");
            return Ok(());
        }
        if !host.has_render_target() {
            error!("No rendering target available, flipbook not started");
            return Err(Error::NoRenderingTarget);
        }
        self.begin_loading(host);
        Ok(())
    }

    /// Re-runs preloading and rebuilds the book. Listeners stay attached.
    ///
    /// Only valid once the flipbook is ready; otherwise ignored.
    pub fn reload<H: Host>(&mut self, host: &mut H) -> Result<()> {
        if !self.lifecycle.is_ready() {
            debug!(state = ?self.lifecycle, "reload ignored, flipbook not ready");
            return Ok(());
        }
        if !host.has_render_target() {
            error!("No rendering target available, reload aborted");
            return Err(Error::NoRenderingTarget);
        }
        self.swipe.cancel();
        self.begin_loading(host);
        Ok(())
    }

    fn transition(&mut self, next: Lifecycle) {
        debug_assert!(
            self.lifecycle.can_transition_to(next),
            "invalid lifecycle transition {:?} -> {next:?}",
            self.lifecycle
        );
        info!(from = ?self.lifecycle, to = ?next, "flipbook state change");
        self.lifecycle = next;
    }

    fn begin_loading<H: Host>(&mut self, host: &mut H) {
        self.cycle += 1;
        self.report = PreloadReport::new(self.config.page_count);
        self.transition(Lifecycle::Loading);
        host.show_progress(0);

        if self.config.page_count.is_empty() {
            self.settle(host);
            return;
        }

        info!(
            pages = self.config.page_count.value(),
            folder = %self.config.assets.folder().display(),
            "preloading page images"
        );
        host.fetch(self.cycle, preload::requests(&self.config));
        host.schedule(self.config.preload_timeout, Timer::PreloadTimeout(self.cycle));
    }

    /// Records one preload outcome.
    pub fn on_page_loaded<H: Host>(&mut self, host: &mut H, cycle: u64, outcome: LoadOutcome) {
        if cycle != self.cycle || !self.lifecycle.is_loading() {
            debug!(cycle, page = outcome.page().value(), "stale preload outcome dropped");
            return;
        }
        if self.report.record(outcome) {
            host.show_progress(self.report.state().progress_percent());
        }
        if self.report.is_complete() {
            self.settle(host);
        }
    }

    fn settle<H: Host>(&mut self, host: &mut H) {
        let state = self.report.state();
        info!(
            loaded = state.loaded(),
            failed = state.failed(),
            total = state.total(),
            "preload settled"
        );
        self.transition(Lifecycle::Initializing);
        host.schedule(self.config.settle_delay.as_duration(), Timer::SettleDelay(self.cycle));
    }

    /// Handles a timer previously scheduled through [`Host::schedule`].
    pub fn on_timer<H: Host>(&mut self, host: &mut H, timer: Timer) {
        match timer {
            Timer::PreloadTimeout(cycle) => {
                if cycle == self.cycle && self.lifecycle.is_loading() {
                    warn!(
                        pending = self.report.pending_pages().len(),
                        "preload timed out, continuing with available pages"
                    );
                    self.report.mark_timed_out();
                    self.settle(host);
                }
            }
            Timer::SettleDelay(cycle) => {
                if cycle == self.cycle && self.lifecycle == Lifecycle::Initializing {
                    self.initialize(host);
                }
            }
            Timer::InitialResize | Timer::FullscreenResize => {
                self.apply_resize(host.container_size());
            }
            Timer::ResizeDebounce(token) => {
                if self.resize.fire(token).is_some() {
                    self.apply_resize(host.container_size());
                }
            }
        }
    }

    fn initialize<H: Host>(&mut self, host: &mut H) {
        let containers = self.stack.rebuild(&self.config, self.report.images());
        let options = TurnOptions {
            size: host.container_size(),
            auto_center: self.config.auto_center,
        };
        let turner = T::construct(containers, options);
        self.current_page = turner.current_page();
        self.turner = Some(turner);

        if !self.listeners_attached {
            if let Err(err) = self.attach_listeners(host) {
                error!("Listener attachment failed: {err}");
            }
        }

        match self.current_page {
            Some(page) => host.show_page_info(page, self.config.page_count),
            None => debug!("empty book, no page info to show"),
        }
        host.dismiss_loading();
        self.transition(Lifecycle::Ready);
        host.schedule(
            self.config.initial_resize_delay.as_duration(),
            Timer::InitialResize,
        );
    }

    /// Subscribes every input listener. Refuses to do it twice.
    pub fn attach_listeners<H: Host>(&mut self, host: &mut H) -> Result<()> {
        if self.listeners_attached {
            error!("Listeners are already attached, refusing to subscribe twice");
            return Err(Error::AlreadyAttached);
        }
        for listener in Listener::ALL {
            host.subscribe(listener);
        }
        self.listeners_attached = true;
        Ok(())
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Forwards a navigation command to the page turner.
    ///
    /// Returns the page shown afterwards, or `None` when nothing turned.
    pub fn dispatch<H: Host>(&mut self, host: &mut H, command: NavCommand) -> Option<PageNumber> {
        if !self.lifecycle.is_ready() {
            debug!(?command, "navigation ignored, flipbook not ready");
            return None;
        }
        let turner = self.turner.as_mut()?;
        let turned = match command {
            NavCommand::Next => turner.next(),
            NavCommand::Previous => turner.previous(),
            NavCommand::GoTo(page) => turner.go_to_page(page),
        };
        if let Some(page) = turned {
            self.on_turned(host, page);
        }
        turned
    }

    fn on_turned<H: Host>(&mut self, host: &mut H, page: PageNumber) {
        self.current_page = Some(page);
        host.show_page_info(page, self.config.page_count);
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Handles a key press. Returns `true` when the key was consumed.
    pub fn handle_key<H: Host>(&mut self, host: &mut H, key: Key, modifiers: Modifiers) -> bool {
        if !self.listeners_attached {
            return false;
        }
        let Some(action) = map_key(key, modifiers, self.config.page_count) else {
            return false;
        };
        match action {
            KeyAction::Navigate(command) => {
                self.dispatch(host, command);
            }
            KeyAction::ToggleFullscreen => self.toggle_fullscreen(host),
            KeyAction::Dismiss => {
                if host.is_fullscreen() {
                    self.exit_fullscreen(host);
                }
                if host.is_help_visible() {
                    self.hide_instructions(host);
                }
            }
        }
        true
    }

    pub fn touch_start(&mut self, at: Point) {
        if self.listeners_attached {
            self.swipe.begin(at);
        }
    }

    /// Ends a touch or drag gesture, turning a page if it was a swipe.
    pub fn touch_end<H: Host>(&mut self, host: &mut H, at: Point) -> Option<PageNumber> {
        let command = self.swipe.end(at, self.config.swipe_threshold)?;
        self.dispatch(host, command)
    }

    pub fn touch_cancel(&mut self) {
        self.swipe.cancel();
    }

    /// Window size changed. The turner is resized once the burst settles.
    pub fn on_window_resized<H: Host>(&mut self, host: &mut H) {
        if !self.listeners_attached {
            return;
        }
        let token = self.resize.schedule(host.container_size());
        host.schedule(self.resize.delay(), Timer::ResizeDebounce(token));
    }

    fn apply_resize(&mut self, size: Dimensions) {
        if size.is_degenerate() {
            debug!(?size, "resize skipped, no drawable area");
            return;
        }
        if let Some(turner) = self.turner.as_mut() {
            turner.resize(size);
        }
    }

    // =========================================================================
    // Fullscreen
    // =========================================================================

    /// Fullscreen state changed, whoever caused it.
    pub fn on_fullscreen_change<H: Host>(&mut self, host: &mut H, fullscreen: bool) {
        self.fullscreen = fullscreen;
        if !fullscreen {
            self.fullscreen_method = None;
        }
        host.set_fullscreen_icon(fullscreen);
        host.schedule(
            self.config.fullscreen_resize_delay.as_duration(),
            Timer::FullscreenResize,
        );
    }

    pub fn toggle_fullscreen<H: Host>(&mut self, host: &mut H) {
        if host.is_fullscreen() {
            self.exit_fullscreen(host);
        } else if let Some(method) = fullscreen::enter(host) {
            self.fullscreen_method = Some(method);
        }
    }

    fn exit_fullscreen<H: Host>(&mut self, host: &mut H) {
        fullscreen::exit(host, self.fullscreen_method);
    }

    // =========================================================================
    // Help overlay
    // =========================================================================

    pub fn show_instructions<H: Host>(&mut self, host: &mut H) {
        host.show_help();
    }

    pub fn hide_instructions<H: Host>(&mut self, host: &mut H) {
        host.hide_help();
    }
}
