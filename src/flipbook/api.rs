// SPDX-License-Identifier: MPL-2.0
//! Programmatic control surface, for automation and debugging.
//!
//! Every call is a no-op before the flipbook is ready: navigation returns
//! `None` and the other actions return `false`.

use super::controller::FlipbookController;
use super::input::NavCommand;
use super::ports::{Host, PageTurner};
use super::types::{PageCount, PageNumber};

pub struct FlipbookApi<'a, T: PageTurner, H: Host> {
    controller: &'a mut FlipbookController<T>,
    host: &'a mut H,
}

impl<'a, T: PageTurner, H: Host> FlipbookApi<'a, T, H> {
    pub(super) fn new(controller: &'a mut FlipbookController<T>, host: &'a mut H) -> Self {
        Self { controller, host }
    }

    /// Turns to page `n`, clamped into `[1, page_count]`.
    pub fn go_to_page(&mut self, n: i64) -> Option<PageNumber> {
        if !self.controller.is_ready() {
            return None;
        }
        let page = self.controller.page_count().clamp_page(n)?;
        self.controller.dispatch(&mut *self.host, NavCommand::GoTo(page))
    }

    pub fn next_page(&mut self) -> Option<PageNumber> {
        self.controller.dispatch(&mut *self.host, NavCommand::Next)
    }

    pub fn previous_page(&mut self) -> Option<PageNumber> {
        self.controller.dispatch(&mut *self.host, NavCommand::Previous)
    }

    #[must_use]
    pub fn current_page(&self) -> Option<PageNumber> {
        if !self.controller.is_ready() {
            return None;
        }
        self.controller.current_page()
    }

    #[must_use]
    pub fn page_count(&self) -> PageCount {
        self.controller.page_count()
    }

    pub fn toggle_fullscreen(&mut self) -> bool {
        if !self.controller.is_ready() {
            return false;
        }
        self.controller.toggle_fullscreen(&mut *self.host);
        true
    }

    pub fn show_instructions(&mut self) -> bool {
        if !self.controller.is_ready() {
            return false;
        }
        self.controller.show_instructions(&mut *self.host);
        true
    }
}
