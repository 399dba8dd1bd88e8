// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::flipbook::{Dimensions, Key, LoadOutcome, Modifiers, Point, Timer};
use crate::ui::{help, toolbar};
use iced::window;

/// Input routed from native window events.
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    Key { key: Key, modifiers: Modifiers },
    /// Finger down, or left mouse button down (position taken from the
    /// last cursor move when `None`).
    PointerPressed(Option<Point>),
    PointerMoved(Point),
    PointerReleased(Option<Point>),
    PointerLost,
    Resized(Dimensions),
}

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// A page fetch settled.
    PageLoaded { cycle: u64, outcome: LoadOutcome },
    /// A timer scheduled by the controller elapsed.
    TimerFired(Timer),
    /// A native event from `window`.
    Input { window: window::Id, input: Input },
    /// The window entered or left fullscreen.
    FullscreenChanged(bool),
    Toolbar(toolbar::Message),
    Help(help::Message),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Number of pages, overriding the config file.
    pub pages: Option<u32>,
    /// Folder holding `page<N>.<ext>` images, overriding the config file.
    pub folder: Option<String>,
    /// Image file extension, overriding the config file.
    pub format: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_FLIPBOOK_CONFIG_DIR`.
    pub config_dir: Option<String>,
    /// Log at debug level.
    pub verbose: bool,
}
