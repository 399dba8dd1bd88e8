// SPDX-License-Identifier: MPL-2.0
//! `iced_flipbook` presents a folder of page images as a flipbook.
//!
//! The [`flipbook`] module holds the toolkit-independent controller: preloading,
//! lifecycle, input dispatch, resize debouncing and fullscreen handling. The
//! [`app`] and [`ui`] modules wire it into an Iced window.

pub mod app;
pub mod config;
pub mod error;
pub mod flipbook;
pub mod i18n;
pub mod logging;
pub mod ui;
