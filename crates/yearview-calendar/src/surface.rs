//! Seams to the host page.

use std::time::Duration;

use yearview_core::StyleVariant;

use crate::render::{HeaderModel, View};

/// A mounted element the widget draws into.
pub trait Surface {
    /// Apply the theme to the wrapping element.
    fn apply_style(&mut self, style: StyleVariant);

    /// Start fading the current content out ahead of a redraw.
    fn begin_fade(&mut self, duration: Duration);

    /// Replace all content and restore full opacity.
    fn draw(&mut self, header: &HeaderModel, view: &View);
}

/// Resolves mount point identifiers to surfaces.
pub trait Host {
    type Surface: Surface;

    fn resolve(&mut self, selector: &str) -> Option<Self::Surface>;
}
