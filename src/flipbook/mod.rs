// SPDX-License-Identifier: MPL-2.0
//! Flipbook core: configuration types, preloading, input mapping and the
//! controller that ties them together.
//!
//! Nothing in here depends on the GUI toolkit. The window side plugs in
//! through the [`Host`] and [`PageTurner`] traits.

pub mod api;
pub mod controller;
pub mod debounce;
pub mod fullscreen;
pub mod input;
pub mod lifecycle;
pub mod pages;
pub mod ports;
pub mod preload;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use api::FlipbookApi;
pub use controller::FlipbookController;
pub use debounce::{DebounceToken, Debouncer};
pub use fullscreen::FullscreenMethod;
pub use input::{classify_swipe, map_key, Key, KeyAction, Modifiers, NavCommand, SwipeTracker};
pub use lifecycle::Lifecycle;
pub use pages::{build_pages, PageContainer, PageStack};
pub use ports::{Host, Listener, PageTurner, Timer, TurnOptions};
pub use preload::{
    FsImageSource, ImageSource, LoadOutcome, LoadState, PageImage, PageRequest, PreloadReport,
};
pub use types::{
    AssetTemplate, Delay, Dimensions, FlipbookConfig, PageCount, PageNumber, Point,
    SwipeThreshold,
};
