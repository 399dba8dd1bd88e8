// SPDX-License-Identifier: MPL-2.0
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    /// A single page image could not be fetched. Never fatal.
    #[error("Page {page} failed to load: {reason}")]
    ImageLoad { page: u32, reason: String },

    /// The fetched bytes are not in a recognised image format.
    #[error("Page {page} is not a supported image")]
    UnsupportedImage { page: u32 },

    /// The window has no area the flipbook can be mounted into.
    #[error("No rendering target found for the flipbook")]
    NoRenderingTarget,

    #[error("Fullscreen is not supported")]
    FullscreenUnsupported,

    #[error("Event listeners are already attached")]
    AlreadyAttached,
}

impl Error {
    /// Returns the i18n message key used when this error is surfaced in the UI.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-io",
            Error::Config(_) => "error-config",
            Error::ImageLoad { .. } | Error::UnsupportedImage { .. } => "error-page-load",
            Error::NoRenderingTarget => "error-no-rendering-target",
            Error::FullscreenUnsupported => "error-fullscreen-unsupported",
            Error::AlreadyAttached => "error-already-attached",
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
