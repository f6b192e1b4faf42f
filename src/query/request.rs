//! Parsed query string request.

use alloc::string::String;

use crate::caption::Captions;
use crate::color::Color;
use crate::config::CanvasConfig;
use crate::fit::FitPolicy;
use crate::speech::Volume;

/// Settings read from a query string. `None` fields keep their defaults.
#[derive(Debug, Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct MemeRequest {
    /// Canvas width (`w`, `width`).
    pub width: Option<u32>,
    /// Canvas height (`h`, `height`).
    pub height: Option<u32>,
    /// Top caption (`top`).
    pub top: Option<String>,
    /// Bottom caption (`bottom`).
    pub bottom: Option<String>,
    /// Voice name (`voice`).
    pub voice: Option<String>,
    /// Volume slider position 0-100 (`volume`).
    pub volume: Option<Volume>,
    /// Fit policy (`fit`).
    pub fit: Option<FitPolicy>,
    /// Canvas background (`bg`, `bgcolor`).
    pub background: Option<Color>,
    /// Caption fill (`fill`).
    pub fill: Option<Color>,
    /// Caption stroke (`stroke`).
    pub stroke: Option<Color>,
}

impl MemeRequest {
    /// Create an empty request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply this request on top of [`CanvasConfig::default`].
    pub fn to_config(&self) -> CanvasConfig {
        self.apply(CanvasConfig::default())
    }

    /// Apply this request on top of `base`.
    pub fn apply(&self, mut base: CanvasConfig) -> CanvasConfig {
        if let Some(w) = self.width {
            base.width = w;
        }
        if let Some(h) = self.height {
            base.height = h;
        }
        if let Some(policy) = self.fit {
            base.fit_policy = policy;
        }
        if let Some(bg) = self.background {
            base.background = bg;
        }
        if let Some(fill) = self.fill {
            base.caption.fill = fill;
        }
        if let Some(stroke) = self.stroke {
            base.caption.stroke = stroke;
        }
        base
    }

    /// Captions from `top` and `bottom`, empty where absent.
    pub fn captions(&self) -> Captions {
        Captions::new(
            self.top.clone().unwrap_or_default(),
            self.bottom.clone().unwrap_or_default(),
        )
    }
}
