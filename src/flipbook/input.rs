// SPDX-License-Identifier: MPL-2.0
//! Translation of raw keyboard and swipe input into navigation commands.

use super::types::{PageCount, PageNumber, Point, SwipeThreshold};

/// A navigation request forwarded to the page turner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    Next,
    Previous,
    GoTo(PageNumber),
}

/// Keys the flipbook reacts to. Everything else maps to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    Escape,
    F11,
    Character(char),
    Other,
}

/// Modifier state relevant to shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    /// Ctrl on Linux/Windows, Cmd on macOS.
    pub command: bool,
}

/// What a key press asks the controller to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Navigate(NavCommand),
    ToggleFullscreen,
    /// Leave fullscreen and close the help overlay, whichever applies.
    Dismiss,
}

/// Maps a key press to an action.
///
/// A `Some` result means the key is handled and its default behavior should
/// be suppressed. `End` on an empty book maps to nothing.
#[must_use]
pub fn map_key(key: Key, modifiers: Modifiers, page_count: PageCount) -> Option<KeyAction> {
    match key {
        Key::ArrowRight => Some(KeyAction::Navigate(NavCommand::Next)),
        Key::ArrowLeft => Some(KeyAction::Navigate(NavCommand::Previous)),
        Key::Home => Some(KeyAction::Navigate(NavCommand::GoTo(PageNumber::FIRST))),
        Key::End => page_count
            .last()
            .map(|last| KeyAction::Navigate(NavCommand::GoTo(last))),
        Key::Character('f' | 'F') if modifiers.command => Some(KeyAction::ToggleFullscreen),
        Key::F11 => Some(KeyAction::ToggleFullscreen),
        Key::Escape => Some(KeyAction::Dismiss),
        Key::Character(_) | Key::Other => None,
    }
}

/// Classifies a swipe from its `start - end` delta.
///
/// Only a horizontally dominant movement longer than the threshold counts.
/// A positive `dx` means the finger moved left, which turns forward.
#[must_use]
pub fn classify_swipe(dx: f32, dy: f32, threshold: SwipeThreshold) -> Option<NavCommand> {
    if dx.abs() <= dy.abs() || dx.abs() <= threshold.as_f32() {
        return None;
    }
    if dx > 0.0 {
        Some(NavCommand::Next)
    } else {
        Some(NavCommand::Previous)
    }
}

/// Tracks one touch or drag gesture at a time.
#[derive(Debug, Clone, Default)]
pub struct SwipeTracker {
    start: Option<Point>,
}

impl SwipeTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, at: Point) {
        self.start = Some(at);
    }

    /// Ends the gesture and resets the tracker whatever the outcome.
    pub fn end(&mut self, at: Point, threshold: SwipeThreshold) -> Option<NavCommand> {
        let start = self.start.take()?;
        classify_swipe(start.x - at.x, start.y - at.y, threshold)
    }

    pub fn cancel(&mut self) {
        self.start = None;
    }

    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }
}
