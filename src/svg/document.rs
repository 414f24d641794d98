use tracing::debug;

use crate::{
    foundation::{core::Canvas, error::CityResult},
    render::block::fmt_coord,
    scene::{compose::Scene, depth::depth_sorted},
};

const FONT_FAMILY: &str = "'Courier New', monospace";

const STYLE: &str = "\
@keyframes twinkle { 0%, 100% { opacity: 0.3; } 50% { opacity: 1; } }\
@keyframes windowFlicker { 0%, 90%, 100% { opacity: 1; } 95% { opacity: 0.6; } }\
@keyframes lampGlow { 0%, 100% { opacity: 0.25; } 50% { opacity: 0.45; } }\
.star { animation: twinkle 2s ease-in-out infinite; }\
.window { animation: windowFlicker 5s ease-in-out infinite; }\
.lamp-glow { animation: lampGlow 3s ease-in-out infinite; }";

/// Pixel moon as `(x, y, width, height)` rectangles, then the darker crater marks.
const MOON_BODY: [(i32, i32, i32, i32); 7] = [
    (788, 40, 24, 6),
    (778, 46, 44, 6),
    (772, 52, 56, 12),
    (770, 64, 60, 12),
    (772, 76, 56, 12),
    (778, 88, 44, 6),
    (788, 94, 24, 6),
];
const MOON_CRATERS: [(i32, i32, i32, i32); 3] =
    [(786, 60, 8, 8), (806, 76, 10, 8), (808, 52, 6, 6)];

/// Serialize a composed scene into one self-contained SVG document.
///
/// Layering, back to front: sky, stars, moon, depth-sorted structures, title and stats.
pub fn serialize_scene(scene: Scene) -> CityResult<String> {
    let Scene {
        canvas,
        title,
        total,
        today,
        stars,
        structures,
    } = scene;
    let Canvas { width, height } = canvas;

    let mut svg = String::with_capacity(256 * 1024);
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">"
    ));

    svg.push_str("<defs>");
    svg.push_str(
        "<linearGradient id=\"sky\" x1=\"0%\" y1=\"0%\" x2=\"0%\" y2=\"100%\">\
<stop offset=\"0%\" stop-color=\"#0a0a15\"/>\
<stop offset=\"60%\" stop-color=\"#1a1a2a\"/>\
<stop offset=\"100%\" stop-color=\"#2a2a3a\"/>\
</linearGradient>",
    );
    svg.push_str(&format!("<style>{STYLE}</style>"));
    svg.push_str("</defs>");

    svg.push_str(&format!(
        "<rect width=\"{width}\" height=\"{height}\" fill=\"url(#sky)\"/>"
    ));

    svg.push_str("<g class=\"stars\">");
    for star in &stars {
        svg.push_str(&format!(
            "<rect class=\"star\" x=\"{}\" y=\"{}\" width=\"1\" height=\"1\" fill=\"#ffffff\" style=\"animation-delay: {:.1}s\"/>",
            fmt_coord(star.x),
            fmt_coord(star.y),
            star.delay_s
        ));
    }
    svg.push_str("</g>");

    svg.push_str("<g class=\"moon\">");
    for (x, y, w, h) in MOON_BODY {
        svg.push_str(&format!(
            "<rect x=\"{x}\" y=\"{y}\" width=\"{w}\" height=\"{h}\" fill=\"#ffffee\"/>"
        ));
    }
    for (x, y, w, h) in MOON_CRATERS {
        svg.push_str(&format!(
            "<rect x=\"{x}\" y=\"{y}\" width=\"{w}\" height=\"{h}\" fill=\"#ddddc8\" opacity=\"0.6\"/>"
        ));
    }
    svg.push_str("</g>");

    svg.push_str("<g class=\"city\">");
    let sorted = depth_sorted(structures)?;
    for drawable in sorted {
        let kind = drawable.kind;
        let depth = drawable.depth;
        let fragment = drawable.draw()?;
        debug!(kind = kind.class(), depth, bytes = fragment.len(), "drew structure");
        svg.push_str(&fragment);
    }
    svg.push_str("</g>");

    svg.push_str(&format!(
        "<text x=\"{}\" y=\"40\" text-anchor=\"middle\" fill=\"#ffffff\" font-family=\"{FONT_FAMILY}\" font-size=\"28\" font-weight=\"bold\">{}</text>",
        width / 2,
        escape_xml(&title)
    ));
    push_stat(&mut svg, "TOTAL", total, height.saturating_sub(50));
    push_stat(&mut svg, "TODAY", u64::from(today), height.saturating_sub(25));

    svg.push_str("</svg>");
    Ok(svg)
}

fn push_stat(svg: &mut String, label: &str, value: u64, y: u32) {
    svg.push_str(&format!(
        "<text class=\"stat\" x=\"30\" y=\"{y}\" fill=\"#ffffff\" font-family=\"{FONT_FAMILY}\" font-size=\"16\" font-weight=\"bold\">{label}: <tspan fill=\"#ffdd66\">{value}</tspan></text>"
    ));
}

pub(crate) fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
#[path = "../../tests/unit/svg/document.rs"]
mod tests;
