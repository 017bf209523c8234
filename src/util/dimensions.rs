//! Responsive scaling helpers.
//!
//! Layout sizes are authored against a 375x812 reference design and
//! scaled to the actual viewport. Browser reads go through `web-sys` and
//! are gated behind the `hydrate` feature; anywhere else the reference
//! size itself is used, so scaling is the identity.

#[cfg(test)]
#[path = "dimensions_test.rs"]
mod dimensions_test;

/// Width of the reference design, in CSS pixels.
pub const GUIDELINE_BASE_WIDTH: f64 = 375.0;

/// Height of the reference design, in CSS pixels.
pub const GUIDELINE_BASE_HEIGHT: f64 = 812.0;

/// Dampening factor applied by [`Viewport::moderate_scale`].
pub const DEFAULT_MODERATE_FACTOR: f64 = 0.5;

/// Dimensions of the display surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: GUIDELINE_BASE_WIDTH,
            height: GUIDELINE_BASE_HEIGHT,
        }
    }
}

impl Viewport {
    /// The live browser viewport, re-sampled on every call so layout
    /// code picks up window resizes. Falls back to the reference design
    /// size outside a browser.
    #[must_use]
    pub fn current() -> Self {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let width = window.inner_width().ok().and_then(|v| v.as_f64());
                let height = window.inner_height().ok().and_then(|v| v.as_f64());
                if let (Some(width), Some(height)) = (width, height) {
                    return Self { width, height };
                }
            }
        }
        Self::default()
    }

    /// Scale a horizontal size from the reference design to this
    /// viewport.
    #[must_use]
    pub fn scale_width(&self, size: f64) -> f64 {
        size * (self.width / GUIDELINE_BASE_WIDTH)
    }

    /// Scale a vertical size from the reference design to this viewport.
    #[must_use]
    pub fn scale_height(&self, size: f64) -> f64 {
        size * (self.height / GUIDELINE_BASE_HEIGHT)
    }

    /// Dampened horizontal scaling for fonts and icons, so text does not
    /// balloon on wide screens.
    #[must_use]
    pub fn moderate_scale(&self, size: f64) -> f64 {
        self.moderate_scale_by(size, DEFAULT_MODERATE_FACTOR)
    }

    /// [`Self::moderate_scale`] with an explicit dampening factor: `0.0`
    /// keeps the reference size, `1.0` is plain linear scaling.
    #[must_use]
    pub fn moderate_scale_by(&self, size: f64, factor: f64) -> f64 {
        size + (self.scale_width(size) - size) * factor
    }
}

/// Height of the host status bar, published by hybrid shells as the
/// `--status-bar-height` CSS variable on the document element. `0` when
/// the host exposes nothing.
#[must_use]
pub fn status_bar_height() -> f64 {
    env_length("--status-bar-height")
}

/// Bottom safe-area inset (home-indicator devices), published as
/// `--safe-area-inset-bottom`. `0` when the host exposes nothing.
#[must_use]
pub fn bottom_inset() -> f64 {
    env_length("--safe-area-inset-bottom")
}

/// Format a size as a CSS pixel length.
#[must_use]
pub fn px(value: f64) -> String {
    format!("{value}px")
}

/// Read a pixel length from a CSS variable on the document element.
fn env_length(var: &str) -> f64 {
    #[cfg(feature = "hydrate")]
    {
        let value = web_sys::window()
            .and_then(|w| {
                let root = w.document()?.document_element()?;
                w.get_computed_style(&root).ok().flatten()
            })
            .and_then(|style| style.get_property_value(var).ok());
        if let Some(value) = value {
            if let Ok(parsed) = value.trim().trim_end_matches("px").parse::<f64>() {
                return parsed;
            }
        }
        0.0
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = var;
        0.0
    }
}
