//! Canvas configuration.

use crate::caption::CaptionStyle;
use crate::color::Color;
use crate::fit::FitPolicy;

/// Fixed canvas size and drawing defaults for a [`MemeSession`](crate::MemeSession).
///
/// # Example
///
/// ```
/// use memelayout::{CanvasConfig, Color, FitPolicy};
///
/// let config = CanvasConfig::new(600, 400)
///     .background(Color::WHITE)
///     .fit_policy(FitPolicy::Contain);
///
/// assert_eq!(config.size(), (600.0, 400.0));
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
    /// Color behind the image, visible as bars around non-square images.
    pub background: Color,
    pub caption: CaptionStyle,
    pub fit_policy: FitPolicy,
}

impl CanvasConfig {
    /// Default canvas edge length.
    pub const DEFAULT_SIZE: u32 = 400;

    /// Canvas of the given size with default drawing settings.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            background: Color::BLACK,
            caption: CaptionStyle::default(),
            fit_policy: FitPolicy::ContentOrientation,
        }
    }

    /// Set the background color.
    pub fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// Set the caption style.
    pub fn caption(mut self, style: CaptionStyle) -> Self {
        self.caption = style;
        self
    }

    /// Set the image fit policy.
    pub fn fit_policy(mut self, policy: FitPolicy) -> Self {
        self.fit_policy = policy;
        self
    }

    /// Canvas size as floats, the unit every geometry function works in.
    pub fn size(&self) -> (f64, f64) {
        (self.width as f64, self.height as f64)
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SIZE, Self::DEFAULT_SIZE)
    }
}
