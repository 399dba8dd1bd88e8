// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Each view follows the Elm-style "state down, messages up" pattern: it
//! renders borrowed state and emits its own `Message` type, which the
//! application maps into its top-level message.
//!
//! - [`book`] - The page turner and its page view
//! - [`toolbar`] - Navigation buttons and the page counter
//! - [`loading`] - Preload progress screen
//! - [`help`] - Help overlay
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod book;
pub mod design_tokens;
pub mod help;
pub mod loading;
pub mod toolbar;
