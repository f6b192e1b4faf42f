//! SVG rendering surface for draw commands.
//!
//! Replays a [`DrawCommand`] list into a standalone SVG document. Useful for
//! previews and snapshot tests; the source image itself is not embedded and
//! shows up as a labelled placeholder rect.
//!
//! # Example
//!
//! ```
//! use memelayout::{Captions, MemeSession, svg::render_svg};
//!
//! let mut session = MemeSession::default();
//! let mut cmds = session.load_image(800.0, 600.0).unwrap();
//! cmds.extend(session.generate(Captions::new("top", "bottom")).unwrap());
//!
//! let svg = render_svg(400, 400, &cmds);
//! assert!(svg.contains(">TOP</text>"));
//! ```

use alloc::format;
use alloc::string::String;

use crate::draw::{DrawCommand, TextAlign, TextBaseline, TextPaint};

/// Render a complete SVG document of a `width × height` canvas.
///
/// Commands are replayed in order; a [`DrawCommand::Clear`] discards
/// everything emitted before it.
pub fn render_svg(width: u32, height: u32, commands: &[DrawCommand]) -> String {
    let start = commands
        .iter()
        .rposition(DrawCommand::is_clear)
        .map_or(0, |i| i + 1);

    let mut svg = String::with_capacity(1024);
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    ));
    svg.push('\n');
    svg.push_str(
        r##"<style>
  .image { fill: #6ba3d6; stroke: #2c6faa; stroke-width: 1; }
  .image-label { font: 11px monospace; fill: #1d4a73; }
</style>
"##,
    );

    for cmd in &commands[start..] {
        render_command(&mut svg, cmd);
    }

    svg.push_str("</svg>\n");
    svg
}

fn render_command(svg: &mut String, cmd: &DrawCommand) {
    match cmd {
        DrawCommand::Clear { .. } => {}
        DrawCommand::FillRect {
            x,
            y,
            width,
            height,
            color,
        } => {
            svg.push_str(&format!(
                r#"<rect x="{x:.1}" y="{y:.1}" width="{width:.1}" height="{height:.1}" fill="{color}"/>"#
            ));
            svg.push('\n');
        }
        DrawCommand::DrawImage { source, dest } => {
            svg.push_str(&format!(
                r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="image"/>"#,
                dest.start_x, dest.start_y, dest.width, dest.height
            ));
            svg.push('\n');
            svg.push_str(&format!(
                r#"<text x="{:.1}" y="{:.1}" class="image-label" text-anchor="middle">image {}×{}</text>"#,
                dest.start_x + dest.width / 2.0,
                dest.start_y + dest.height / 2.0,
                source.0,
                source.1
            ));
            svg.push('\n');
        }
        DrawCommand::FillText { text, x, y, paint } => {
            svg.push_str(&format!(
                r#"<text x="{x:.1}" y="{y:.1}" {} fill="{}">{}</text>"#,
                text_attrs(paint),
                paint.color,
                escape_xml(text)
            ));
            svg.push('\n');
        }
        DrawCommand::StrokeText { text, x, y, paint } => {
            svg.push_str(&format!(
                r#"<text x="{x:.1}" y="{y:.1}" {} fill="none" stroke="{}" stroke-width="{}">{}</text>"#,
                text_attrs(paint),
                paint.color,
                paint.line_width,
                escape_xml(text)
            ));
            svg.push('\n');
        }
    }
}

fn text_attrs(paint: &TextPaint) -> String {
    let anchor = match paint.align {
        TextAlign::Left => "start",
        TextAlign::Center => "middle",
        TextAlign::Right => "end",
    };
    let baseline = match paint.baseline {
        TextBaseline::Top => "text-before-edge",
        TextBaseline::Middle => "middle",
        TextBaseline::Alphabetic => "alphabetic",
        TextBaseline::Bottom => "text-after-edge",
    };
    format!(
        r#"text-anchor="{anchor}" dominant-baseline="{baseline}" style="font: {}""#,
        escape_xml(&paint.font)
    )
}

/// Escape special characters for XML text content.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
