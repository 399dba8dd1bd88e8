// SPDX-License-Identifier: MPL-2.0
//! Fullscreen requests with ordered fallbacks.

use super::ports::Host;
use crate::error::Error;
use tracing::{debug, warn};

/// Mechanisms for entering fullscreen, tried in [`FullscreenMethod::ORDER`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullscreenMethod {
    /// Borderless fullscreen window mode.
    WindowMode,
    /// Maximized window, for platforms without a fullscreen mode.
    Maximize,
}

impl FullscreenMethod {
    pub const ORDER: [FullscreenMethod; 2] =
        [FullscreenMethod::WindowMode, FullscreenMethod::Maximize];

    /// Candidate order, starting with `preferred` when known.
    fn candidates(preferred: Option<FullscreenMethod>) -> Vec<FullscreenMethod> {
        let mut order = Vec::with_capacity(Self::ORDER.len());
        order.extend(preferred);
        order.extend(Self::ORDER.iter().copied().filter(|m| Some(*m) != preferred));
        order
    }
}

/// Enters fullscreen with the first supported method.
///
/// Returns the method that worked, or `None` when no method is available,
/// in which case nothing happens.
pub fn enter<H: Host>(host: &mut H) -> Option<FullscreenMethod> {
    for method in FullscreenMethod::candidates(None) {
        match host.request_fullscreen(method) {
            Ok(()) => return Some(method),
            Err(Error::FullscreenUnsupported) => continue,
            Err(err) => {
                warn!("Fullscreen request via {method:?} failed: {err}");
                continue;
            }
        }
    }
    debug!("No fullscreen method available");
    None
}

/// Leaves fullscreen, trying the method used to enter it first.
pub fn exit<H: Host>(host: &mut H, entered_with: Option<FullscreenMethod>) -> bool {
    for method in FullscreenMethod::candidates(entered_with) {
        match host.exit_fullscreen(method) {
            Ok(()) => return true,
            Err(Error::FullscreenUnsupported) => continue,
            Err(err) => {
                warn!("Leaving fullscreen via {method:?} failed: {err}");
                continue;
            }
        }
    }
    debug!("No fullscreen exit method available");
    false
}
