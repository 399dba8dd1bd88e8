// SPDX-License-Identifier: MPL-2.0
//! The window-backed [`Host`] implementation.
//!
//! Effects requested by the controller are recorded as [`HostCommand`]s and
//! turned into Iced tasks after each update. Display state (progress, page
//! counter, help visibility) is kept here for the view to read.

use super::message::Message;
use crate::error::{Error, Result};
use crate::flipbook::{
    preload, Dimensions, FullscreenMethod, Host, ImageSource, Listener, PageCount, PageNumber,
    PageRequest, Point, Timer,
};
use crate::ui::design_tokens::sizing;
use iced::{window, Task};
use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Duration;

/// An effect waiting to be turned into a task.
#[derive(Debug, Clone, PartialEq)]
pub enum HostCommand {
    Fetch {
        cycle: u64,
        requests: Vec<PageRequest>,
    },
    Schedule {
        delay: Duration,
        timer: Timer,
    },
    SetFullscreen {
        window: window::Id,
        fullscreen: bool,
    },
    Maximize {
        window: window::Id,
        maximized: bool,
    },
}

#[derive(Debug, Clone)]
pub struct WindowHost {
    window_id: Option<window::Id>,
    window_size: Dimensions,
    fullscreen: bool,
    fullscreen_icon: bool,
    help_visible: bool,
    /// `Some` while the loading screen is up.
    loading: Option<u8>,
    page_info: Option<(PageNumber, PageCount)>,
    listeners: BTreeSet<Listener>,
    cursor: Option<Point>,
    commands: Vec<HostCommand>,
}

impl WindowHost {
    #[must_use]
    pub fn new(window_size: Dimensions) -> Self {
        Self {
            window_id: None,
            window_size,
            fullscreen: false,
            fullscreen_icon: false,
            help_visible: false,
            loading: Some(0),
            page_info: None,
            listeners: BTreeSet::new(),
            cursor: None,
            commands: Vec::new(),
        }
    }

    pub fn set_window(&mut self, id: window::Id) {
        self.window_id = Some(id);
    }

    pub fn set_window_size(&mut self, size: Dimensions) {
        self.window_size = size;
    }

    pub fn set_fullscreen(&mut self, fullscreen: bool) {
        self.fullscreen = fullscreen;
    }

    pub fn set_cursor(&mut self, position: Point) {
        self.cursor = Some(position);
    }

    #[must_use]
    pub fn cursor(&self) -> Option<Point> {
        self.cursor
    }

    #[must_use]
    pub fn loading_percent(&self) -> Option<u8> {
        self.loading
    }

    #[must_use]
    pub fn page_info(&self) -> Option<(PageNumber, PageCount)> {
        self.page_info
    }

    #[must_use]
    pub fn fullscreen_icon(&self) -> bool {
        self.fullscreen_icon
    }

    #[must_use]
    pub fn is_subscribed(&self, listener: Listener) -> bool {
        self.listeners.contains(&listener)
    }

    /// Whether the full input subscription should be active.
    #[must_use]
    pub fn is_listening(&self) -> bool {
        !self.listeners.is_empty()
    }

    pub fn take_commands(&mut self) -> Vec<HostCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Drains pending commands into a single task.
    pub fn tasks(&mut self, source: &Arc<dyn ImageSource>) -> Task<Message> {
        let tasks: Vec<_> = self
            .take_commands()
            .into_iter()
            .map(|command| command_task(command, source))
            .collect();
        Task::batch(tasks)
    }

    fn push_window_command(
        &mut self,
        build: impl FnOnce(window::Id) -> HostCommand,
    ) -> Result<()> {
        let id = self.window_id.ok_or(Error::FullscreenUnsupported)?;
        self.commands.push(build(id));
        Ok(())
    }
}

fn command_task(command: HostCommand, source: &Arc<dyn ImageSource>) -> Task<Message> {
    match command {
        HostCommand::Fetch { cycle, requests } => Task::run(
            preload::stream(source.as_ref(), requests),
            move |outcome| Message::PageLoaded { cycle, outcome },
        ),
        HostCommand::Schedule { delay, timer } => {
            Task::perform(tokio::time::sleep(delay), move |()| Message::TimerFired(timer))
        }
        HostCommand::SetFullscreen { window, fullscreen } => {
            let mode = if fullscreen {
                window::Mode::Fullscreen
            } else {
                window::Mode::Windowed
            };
            window::set_mode(window, mode).chain(Task::done(Message::FullscreenChanged(fullscreen)))
        }
        HostCommand::Maximize { window, maximized } => window::maximize(window, maximized)
            .chain(Task::done(Message::FullscreenChanged(maximized))),
    }
}

impl Host for WindowHost {
    fn has_render_target(&self) -> bool {
        !self.container_size().is_degenerate()
    }

    fn container_size(&self) -> Dimensions {
        Dimensions::new(
            self.window_size.width,
            (self.window_size.height - sizing::TOOLBAR_HEIGHT).max(0.0),
        )
    }

    fn show_progress(&mut self, percent: u8) {
        self.loading = Some(percent);
    }

    fn dismiss_loading(&mut self) {
        self.loading = None;
    }

    fn show_page_info(&mut self, current: PageNumber, total: PageCount) {
        self.page_info = Some((current, total));
    }

    fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    fn set_fullscreen_icon(&mut self, fullscreen: bool) {
        self.fullscreen_icon = fullscreen;
    }

    fn request_fullscreen(&mut self, method: FullscreenMethod) -> Result<()> {
        match method {
            FullscreenMethod::WindowMode => self.push_window_command(|window| {
                HostCommand::SetFullscreen {
                    window,
                    fullscreen: true,
                }
            }),
            FullscreenMethod::Maximize => self.push_window_command(|window| HostCommand::Maximize {
                window,
                maximized: true,
            }),
        }
    }

    fn exit_fullscreen(&mut self, method: FullscreenMethod) -> Result<()> {
        match method {
            FullscreenMethod::WindowMode => self.push_window_command(|window| {
                HostCommand::SetFullscreen {
                    window,
                    fullscreen: false,
                }
            }),
            FullscreenMethod::Maximize => self.push_window_command(|window| HostCommand::Maximize {
                window,
                maximized: false,
            }),
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
        self.listeners.insert(listener);
    }

    fn schedule(&mut self, delay: Duration, timer: Timer) {
        self.commands.push(HostCommand::Schedule { delay, timer });
    }

    fn fetch(&mut self, cycle: u64, requests: Vec<PageRequest>) {
        self.commands.push(HostCommand::Fetch { cycle, requests });
    }
}
