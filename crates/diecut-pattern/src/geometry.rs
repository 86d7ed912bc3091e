//! Geometric primitives for die-cut patterns.
//!
//! All coordinates are in millimeters, in a y-down plane with the origin at
//! the geometric center of the tray base. Rotations follow the SVG
//! convention for `rotate(angle, 0, 0)` in that plane.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 2-D point in pattern space (mm).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns this point shifted by `(dx, dy)`.
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// An ordered pair of points forming one straight pattern line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }
}

/// Style category of an emitted path.
///
/// Categories map to fixed stroke colors so the operator can tell score
/// lines from through-cuts; they carry no behavior beyond rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CutClass {
    /// Score/fold line (green).
    Fold,
    /// Through-cut along the developed pattern perimeter (red).
    Cut,
    /// Bottom insert outline (blue), cut as a separate panel.
    Insert,
}

impl CutClass {
    /// CSS class name used in the emitted document.
    pub fn class_name(&self) -> &'static str {
        match self {
            CutClass::Fold => "fold",
            CutClass::Cut => "cut",
            CutClass::Insert => "cut2",
        }
    }

    /// Stroke color assigned to this class in the style block.
    pub fn stroke_color(&self) -> &'static str {
        match self {
            CutClass::Fold => "green",
            CutClass::Cut => "red",
            CutClass::Insert => "blue",
        }
    }
}

impl fmt::Display for CutClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.class_name())
    }
}

/// Rotation about the pattern origin carried by an emitted path.
///
/// The path stores its original points; the rotation is applied by the
/// renderer via an SVG `transform` attribute. [`Rotation::apply`] gives the
/// identical point mapping for geometric checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rotation {
    /// 90° about the origin. Used to move the insert panel off the main
    /// pattern area.
    Quarter,
    /// 180° about the origin. Produces the mirrored opposite tray side.
    Half,
}

impl Rotation {
    /// SVG `transform` attribute value for this rotation.
    pub fn svg_transform(&self) -> &'static str {
        match self {
            Rotation::Quarter => "rotate(90, 0, 0)",
            Rotation::Half => "rotate(180, 0, 0)",
        }
    }

    /// Applies the rotation to a point.
    pub fn apply(&self, p: Point) -> Point {
        match self {
            Rotation::Quarter => Point::new(-p.y, p.x),
            Rotation::Half => Point::new(-p.x, -p.y),
        }
    }
}

/// One styled polyline as emitted into the output document.
///
/// Two-point elements trace individual fold or cut segments; the two
/// four-point closed elements are the base rectangle and the bottom insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathElement {
    pub points: Vec<Point>,
    pub closed: bool,
    pub class: CutClass,
    pub rotation: Option<Rotation>,
}

impl PathElement {
    /// A single open segment.
    pub fn line(segment: Segment, class: CutClass, rotation: Option<Rotation>) -> Self {
        Self {
            points: vec![segment.start, segment.end],
            closed: false,
            class,
            rotation,
        }
    }

    /// A closed outline.
    pub fn outline(points: Vec<Point>, class: CutClass, rotation: Option<Rotation>) -> Self {
        Self {
            points,
            closed: true,
            class,
            rotation,
        }
    }

    /// The points with the rotation tag applied, i.e. where the path
    /// actually lands on the sheet.
    pub fn resolved_points(&self) -> Vec<Point> {
        match self.rotation {
            Some(rotation) => self.points.iter().map(|&p| rotation.apply(p)).collect(),
            None => self.points.clone(),
        }
    }
}
