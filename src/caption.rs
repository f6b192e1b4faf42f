//! Top and bottom caption placement.
//!
//! Captions are upper-cased, centered horizontally, and anchored a fixed
//! distance from the top and bottom canvas edges with a middle baseline.
//! Each caption is filled, then stroked with the same text so the outline
//! sits on top.

use alloc::string::String;
use alloc::vec::Vec;

use crate::color::Color;
use crate::draw::{DrawCommand, TextAlign, TextBaseline, TextPaint};

/// Which edge a caption is anchored to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CaptionPosition {
    Top,
    Bottom,
}

/// Caption font and placement settings.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CaptionStyle {
    /// CSS font shorthand.
    pub font: String,
    pub fill: Color,
    pub stroke: Color,
    pub line_width: f64,
    /// Distance from the top edge to the top caption's middle line.
    pub top_offset: f64,
    /// Distance from the bottom edge to the bottom caption's middle line.
    pub bottom_offset: f64,
    /// Upper-case caption text before drawing.
    pub uppercase: bool,
}

impl Default for CaptionStyle {
    fn default() -> Self {
        Self {
            font: String::from("bold 48px sans-serif"),
            fill: Color::WHITE,
            stroke: Color::BLACK,
            line_width: 2.0,
            top_offset: 30.0,
            bottom_offset: 35.0,
            uppercase: true,
        }
    }
}

impl CaptionStyle {
    fn paint(&self, color: Color) -> TextPaint {
        TextPaint {
            font: self.font.clone(),
            align: TextAlign::Center,
            baseline: TextBaseline::Middle,
            color,
            line_width: self.line_width,
        }
    }
}

/// A caption resolved to canvas coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct CaptionPlacement {
    pub position: CaptionPosition,
    /// Text as drawn (upper-cased if the style says so).
    pub text: String,
    pub x: f64,
    pub y: f64,
}

/// The two caption strings entered by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Captions {
    pub top: String,
    pub bottom: String,
}

impl Captions {
    /// Create from top and bottom text.
    pub fn new(top: impl Into<String>, bottom: impl Into<String>) -> Self {
        Self {
            top: top.into(),
            bottom: bottom.into(),
        }
    }

    /// Both captions are empty.
    pub fn is_empty(&self) -> bool {
        self.top.is_empty() && self.bottom.is_empty()
    }

    /// Text to read aloud: `top`, a space, then `bottom`, in the case typed.
    pub fn spoken_text(&self) -> String {
        let mut s = String::with_capacity(self.top.len() + 1 + self.bottom.len());
        s.push_str(&self.top);
        s.push(' ');
        s.push_str(&self.bottom);
        s
    }

    /// Resolve both captions on a `canvas_width × canvas_height` canvas.
    pub fn layout(
        &self,
        style: &CaptionStyle,
        canvas_width: f64,
        canvas_height: f64,
    ) -> [CaptionPlacement; 2] {
        let x = canvas_width / 2.0;
        let shape = |s: &str| {
            if style.uppercase {
                s.to_uppercase()
            } else {
                String::from(s)
            }
        };
        [
            CaptionPlacement {
                position: CaptionPosition::Top,
                text: shape(&self.top),
                x,
                y: style.top_offset,
            },
            CaptionPlacement {
                position: CaptionPosition::Bottom,
                text: shape(&self.bottom),
                x,
                y: canvas_height - style.bottom_offset,
            },
        ]
    }

    /// Fill-then-stroke commands for the top caption, then the bottom one.
    pub fn commands(
        &self,
        style: &CaptionStyle,
        canvas_width: f64,
        canvas_height: f64,
    ) -> Vec<DrawCommand> {
        let mut cmds = Vec::with_capacity(4);
        for placed in self.layout(style, canvas_width, canvas_height) {
            cmds.push(DrawCommand::FillText {
                text: placed.text.clone(),
                x: placed.x,
                y: placed.y,
                paint: style.paint(style.fill),
            });
            cmds.push(DrawCommand::StrokeText {
                text: placed.text,
                x: placed.x,
                y: placed.y,
                paint: style.paint(style.stroke),
            });
        }
        cmds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_style() {
        let s = CaptionStyle::default();
        assert_eq!(s.font, "bold 48px sans-serif");
        assert_eq!(s.fill, Color::WHITE);
        assert_eq!(s.line_width, 2.0);
    }

    #[test]
    fn layout_on_square_canvas() {
        let caps = Captions::new("one does not", "simply walk in");
        let [top, bottom] = caps.layout(&CaptionStyle::default(), 400.0, 400.0);
        assert_eq!(top.position, CaptionPosition::Top);
        assert_eq!(top.text, "ONE DOES NOT");
        assert_eq!((top.x, top.y), (200.0, 30.0));
        assert_eq!(bottom.text, "SIMPLY WALK IN");
        assert_eq!((bottom.x, bottom.y), (200.0, 365.0));
    }

    #[test]
    fn layout_keeps_case_when_disabled() {
        let style = CaptionStyle {
            uppercase: false,
            ..CaptionStyle::default()
        };
        let [top, _] = Captions::new("MiXeD", "").layout(&style, 100.0, 100.0);
        assert_eq!(top.text, "MiXeD");
    }

    #[test]
    fn commands_fill_then_stroke() {
        let cmds = Captions::new("top", "bottom").commands(&CaptionStyle::default(), 400.0, 400.0);
        assert_eq!(cmds.len(), 4);
        assert!(matches!(cmds[0], DrawCommand::FillText { .. }));
        assert!(matches!(cmds[1], DrawCommand::StrokeText { .. }));
        assert_eq!(cmds[0].text(), Some("TOP"));
        assert_eq!(cmds[1].text(), Some("TOP"));
        assert_eq!(cmds[2].text(), Some("BOTTOM"));
        assert_eq!(cmds[3].text(), Some("BOTTOM"));
        match &cmds[1] {
            DrawCommand::StrokeText { paint, .. } => {
                assert_eq!(paint.color, Color::BLACK);
                assert_eq!(paint.align, TextAlign::Center);
                assert_eq!(paint.baseline, TextBaseline::Middle);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn spoken_text_joins_with_space() {
        assert_eq!(Captions::new("Hello", "World").spoken_text(), "Hello World");
        assert_eq!(Captions::default().spoken_text(), " ");
        assert!(Captions::default().is_empty());
    }
}
