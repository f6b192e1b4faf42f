//! Draw commands a rendering surface replays in order.

use alloc::string::String;

use crate::color::Color;
use crate::fit::FitResult;

/// Horizontal text anchor.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

/// Vertical text anchor.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TextBaseline {
    Top,
    #[default]
    Middle,
    Alphabetic,
    Bottom,
}

/// Font, anchors and stroke for one text command.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextPaint {
    /// CSS font shorthand, e.g. `bold 48px sans-serif`.
    pub font: String,
    pub align: TextAlign,
    pub baseline: TextBaseline,
    /// Fill color for [`DrawCommand::FillText`], stroke color for
    /// [`DrawCommand::StrokeText`].
    pub color: Color,
    /// Stroke width in canvas units. Unused by fills.
    pub line_width: f64,
}

/// A single canvas operation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DrawCommand {
    /// Reset the whole surface to transparent.
    Clear {
        width: f64,
        height: f64,
    },
    /// Fill an axis-aligned rectangle.
    FillRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: Color,
    },
    /// Draw the current source image into the given rectangle.
    DrawImage {
        /// Decoded source size, for surfaces that need it.
        source: (f64, f64),
        /// Destination rectangle on the canvas.
        dest: FitResult<f64>,
    },
    /// Fill text anchored at `(x, y)`.
    FillText {
        text: String,
        x: f64,
        y: f64,
        paint: TextPaint,
    },
    /// Stroke the outline of text anchored at `(x, y)`.
    StrokeText {
        text: String,
        x: f64,
        y: f64,
        paint: TextPaint,
    },
}

impl DrawCommand {
    /// Whether this command wipes everything drawn before it.
    pub fn is_clear(&self) -> bool {
        matches!(self, Self::Clear { .. })
    }

    /// Text carried by a text command.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::FillText { text, .. } | Self::StrokeText { text, .. } => Some(text),
            _ => None,
        }
    }
}

/// Commands that paint an image over a solid background.
///
/// The whole canvas is cleared, filled with `background`, then the image is
/// drawn at `dest`. Non-square images leave `background` bars.
pub fn image_commands(
    canvas: (f64, f64),
    background: Color,
    source: (f64, f64),
    dest: FitResult<f64>,
) -> [DrawCommand; 3] {
    let (width, height) = canvas;
    [
        DrawCommand::Clear { width, height },
        DrawCommand::FillRect {
            x: 0.0,
            y: 0.0,
            width,
            height,
            color: background,
        },
        DrawCommand::DrawImage { source, dest },
    ]
}
