//! SVG document emission for die-cut patterns.
//!
//! Emits the path collection onto a fixed A4 page, with the pattern
//! geometry inside a single group translated to page center. There is no
//! scaling or pagination: a pattern larger than the page renders outside
//! the visible bounds.
//!
//! Output is fully deterministic — stable element order, two-space
//! indentation, shortest round-trip number formatting — so identical
//! inputs produce byte-identical documents.

use std::path::Path;

use crate::error::PatternResult;
use crate::geometry::PathElement;

/// Physical page width (A4, mm). One SVG user unit equals one millimeter.
pub const PAGE_WIDTH: f64 = 210.0;

/// Physical page height (A4, mm).
pub const PAGE_HEIGHT: f64 = 297.0;

/// Embedded style classes. `label` is reserved for annotations and unused
/// by the current geometry.
const STYLE_BLOCK: &str = "\
.cut2 { stroke: blue; stroke-width: 0.1; fill: none; }
.fold { stroke: green; stroke-width: 0.1; fill: none; }
.cut { stroke: red; stroke-width: 0.1; fill: none; }
.label { font-family: Arial, sans-serif; font-size: 12px; }";

/// Renders the path collection as a complete SVG document.
pub fn render(paths: &[PathElement]) -> String {
    let mut out = String::new();

    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    out.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}mm\" height=\"{h}mm\" viewBox=\"0 0 {w} {h}\">\n",
        w = fmt_mm(PAGE_WIDTH),
        h = fmt_mm(PAGE_HEIGHT),
    ));

    out.push_str("  <style>\n");
    for line in STYLE_BLOCK.lines() {
        out.push_str("    ");
        out.push_str(line);
        out.push('\n');
    }
    out.push_str("  </style>\n");

    out.push_str(&format!(
        "  <g transform=\"translate({}, {})\">\n",
        fmt_mm(PAGE_WIDTH / 2.0),
        fmt_mm(PAGE_HEIGHT / 2.0),
    ));

    for path in paths {
        out.push_str("    <path d=\"");
        out.push_str(&path_data(path));
        out.push_str("\" class=\"");
        out.push_str(path.class.class_name());
        out.push('"');
        if let Some(rotation) = path.rotation {
            out.push_str(" transform=\"");
            out.push_str(rotation.svg_transform());
            out.push('"');
        }
        out.push_str("/>\n");
    }

    out.push_str("  </g>\n");
    out.push_str("</svg>\n");
    out
}

/// Writes the rendered document to `path` in one scoped operation
/// (create/truncate, write, close). Failures propagate unrecovered.
pub fn write(paths: &[PathElement], path: &Path) -> PatternResult<()> {
    std::fs::write(path, render(paths))?;
    Ok(())
}

fn path_data(path: &PathElement) -> String {
    let mut d = String::new();
    for (i, p) in path.points.iter().enumerate() {
        let op = if i == 0 { "M" } else { " L" };
        d.push_str(&format!("{} {},{}", op, fmt_mm(p.x), fmt_mm(p.y)));
    }
    if path.closed {
        d.push_str(" Z");
    }
    d
}

/// Formats a millimeter value with the shortest representation that round
/// trips, normalizing negative zero.
fn fmt_mm(v: f64) -> String {
    let v = if v == 0.0 { 0.0 } else { v };
    format!("{}", v)
}
