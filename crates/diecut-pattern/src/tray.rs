//! Die-cut tray pattern generation.
//!
//! Derives the named point set for a tray with double-fold walls, flaps,
//! and a bottom insert, then assembles the styled path collection in a
//! stable emission order. The whole pattern is a chain of additive offsets
//! rooted at the four base corners; every downstream point depends on its
//! named predecessors, and the chain encodes the physical construction
//! (fold, then a parallel fold offset by two material thicknesses, then the
//! interlocking flap geometry). The fit of the cut part depends on these
//! exact offsets.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

use crate::error::{PatternError, PatternResult};
use crate::geometry::{CutClass, PathElement, Point, Rotation, Segment};
use crate::svg;

/// Clearance between the folded walls and the bottom insert, per side (mm).
/// Keeps the insert panel from binding against the base folds.
pub const INSERT_CLEARANCE: f64 = 0.4;

/// Inward inset of the second wall segment after the double-fold (mm).
pub const SECOND_WALL_INSET: f64 = 0.5;

/// Divisor deriving flap and tab sizes from the wall height, base width,
/// and base depth.
pub const TAB_PROPORTION: f64 = 10.0;

/// Input dimensions for the tray pattern, all in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrayParameters {
    /// Outer width of the tray base.
    pub width: f64,
    /// Outer depth of the tray base.
    pub depth: f64,
    /// Wall height.
    pub height: f64,
    /// Material (card) thickness. Each double-fold consumes twice this.
    pub thickness: f64,
}

impl Default for TrayParameters {
    fn default() -> Self {
        Self {
            width: 60.0,
            depth: 75.0,
            height: 30.0,
            thickness: 0.1,
        }
    }
}

impl TrayParameters {
    /// Opt-in sanity check for degenerate dimensions.
    ///
    /// Generation never calls this: zero, negative, or inverted dimensions
    /// still produce a document, for compatibility with the original tool.
    /// Callers that prefer to reject self-intersecting geometry up front
    /// can run it before [`TrayPatternMaker::generate`].
    pub fn validate(&self) -> PatternResult<()> {
        if !(self.width > 0.0) {
            return Err(PatternError::InvalidDimension {
                name: "width",
                value: self.width,
                reason: "must be positive",
            });
        }
        if !(self.depth > 0.0) {
            return Err(PatternError::InvalidDimension {
                name: "depth",
                value: self.depth,
                reason: "must be positive",
            });
        }
        if !(self.height > 0.0) {
            return Err(PatternError::InvalidDimension {
                name: "height",
                value: self.height,
                reason: "must be positive",
            });
        }
        if self.thickness < 0.0 {
            return Err(PatternError::InvalidDimension {
                name: "thickness",
                value: self.thickness,
                reason: "must not be negative",
            });
        }
        if self.thickness >= self.height {
            return Err(PatternError::InvalidDimension {
                name: "thickness",
                value: self.thickness,
                reason: "must be smaller than the wall height",
            });
        }
        Ok(())
    }
}

/// The full named point set of the developed pattern.
///
/// Points come in left/right or top/bottom pairs sharing one coordinate.
/// The letters follow the derivation order: `a` is the base rectangle and
/// each later letter is offset from earlier ones.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrayPoints {
    /// Base rectangle, back-left corner.
    pub a1: Point,
    /// Base rectangle, back-right corner.
    pub a2: Point,
    /// Base rectangle, front-right corner.
    pub a3: Point,
    /// Base rectangle, front-left corner.
    pub a4: Point,
    /// Bottom insert corners, the base corners shrunk inward by
    /// [`INSERT_CLEARANCE`] on both axes.
    pub insert1: Point,
    pub insert2: Point,
    pub insert3: Point,
    pub insert4: Point,
    /// First wall fold, extended from the back edge by the wall height.
    pub b1: Point,
    pub b2: Point,
    /// Outer front end of the right wall region.
    pub b3: Point,
    /// Double-fold return: one thickness inward, two thicknesses out.
    pub c1: Point,
    pub c2: Point,
    /// Second wall segment, inset by [`SECOND_WALL_INSET`] and shortened by
    /// one thickness.
    pub d1: Point,
    pub d2: Point,
    /// Free-edge flap tips of the back wall.
    pub e1: Point,
    pub e2: Point,
    /// Side flap outer edge, tapered by the tab proportion.
    pub f2: Point,
    pub f3: Point,
    /// Side wall fold line at one wall height from the base.
    pub g2: Point,
    pub g3: Point,
    /// Side double-fold return.
    pub h2: Point,
    pub h3: Point,
    /// Side flap taper, inner top corner.
    pub i2: Point,
    pub i3: Point,
    /// Outer edge of the side second wall.
    pub j2: Point,
    pub j3: Point,
    /// Side flap taper, outer top corner.
    pub k2: Point,
    pub k3: Point,
    /// Locking tab tip beyond the side wall.
    pub l2: Point,
    pub l3: Point,
    /// Tab slot corners on the side fold line.
    pub m2: Point,
    pub m3: Point,
}

impl TrayPoints {
    /// Derives every pattern point from the four input dimensions.
    ///
    /// Pure function; no validation. Degenerate inputs yield degenerate
    /// points.
    pub fn derive(params: &TrayParameters) -> Self {
        let TrayParameters {
            width,
            depth,
            height,
            thickness,
        } = *params;
        let tab = height / TAB_PROPORTION;

        let a1 = Point::new(-width / 2.0, -depth / 2.0);
        let a2 = Point::new(width / 2.0, -depth / 2.0);
        let a3 = Point::new(width / 2.0, depth / 2.0);
        let a4 = Point::new(-width / 2.0, depth / 2.0);

        let insert1 = a1.offset(INSERT_CLEARANCE, INSERT_CLEARANCE);
        let insert2 = a2.offset(-INSERT_CLEARANCE, INSERT_CLEARANCE);
        let insert3 = a3.offset(-INSERT_CLEARANCE, -INSERT_CLEARANCE);
        let insert4 = a4.offset(INSERT_CLEARANCE, -INSERT_CLEARANCE);

        let b1 = Point::new(a1.x, a1.y - height);
        let b2 = Point::new(a2.x, b1.y);
        let b3 = Point::new(a2.x, a3.y + height);

        let c1 = Point::new(b1.x + thickness, b1.y - 2.0 * thickness);
        let c2 = Point::new(b2.x - thickness, c1.y);

        let d1 = Point::new(c1.x + SECOND_WALL_INSET, c1.y - height + thickness);
        let d2 = Point::new(c2.x - SECOND_WALL_INSET, d1.y);

        let e1 = Point::new(d1.x + tab, d1.y - depth / TAB_PROPORTION);
        let e2 = Point::new(d2.x - tab, e1.y);

        let f2 = Point::new(b2.x + height, b1.y + tab);
        let f3 = Point::new(f2.x, a3.y + height - tab);

        let g2 = Point::new(a2.x + height, a1.y);
        let g3 = Point::new(a2.x + height, a3.y);

        let h2 = Point::new(g2.x + 2.0 * thickness, g2.y + thickness);
        let h3 = Point::new(h2.x, g3.y - thickness);

        let i2 = Point::new(h2.x + tab, f2.y);
        let i3 = Point::new(i2.x, f3.y);

        let j2 = Point::new(h2.x + height - thickness, h2.y);
        let j3 = Point::new(j2.x, h3.y);

        let k2 = Point::new(j2.x - tab, f2.y);
        let k3 = Point::new(k2.x, i3.y);

        let l2 = Point::new(j2.x + width / TAB_PROPORTION, j2.y + tab);
        let l3 = Point::new(l2.x, j3.y - tab);

        let m2 = Point::new(g2.x, g2.y - tab);
        let m3 = Point::new(g2.x, g3.y + tab);

        Self {
            a1,
            a2,
            a3,
            a4,
            insert1,
            insert2,
            insert3,
            insert4,
            b1,
            b2,
            b3,
            c1,
            c2,
            d1,
            d2,
            e1,
            e2,
            f2,
            f3,
            g2,
            g3,
            h2,
            h3,
            i2,
            i3,
            j2,
            j3,
            k2,
            k3,
            l2,
            l3,
            m2,
            m3,
        }
    }
}

/// Builds the styled path collection for one tray.
///
/// Usage mirrors the other generators in this workspace: construct with the
/// parameters, call [`generate`](Self::generate), then read
/// [`paths`](Self::paths) or serialize with [`to_svg`](Self::to_svg) /
/// [`write_svg`](Self::write_svg).
pub struct TrayPatternMaker {
    params: TrayParameters,
    points: TrayPoints,
    paths: Vec<PathElement>,
}

impl TrayPatternMaker {
    pub fn new(params: TrayParameters) -> Self {
        let points = TrayPoints::derive(&params);
        Self {
            params,
            points,
            paths: Vec::new(),
        }
    }

    pub fn params(&self) -> &TrayParameters {
        &self.params
    }

    pub fn points(&self) -> &TrayPoints {
        &self.points
    }

    /// The emitted path collection. Empty until [`generate`](Self::generate)
    /// has run.
    pub fn paths(&self) -> &[PathElement] {
        &self.paths
    }

    /// Fold segments of one tray side: the primary wall fold chain and the
    /// side double-fold lines.
    pub fn fold_segments(&self) -> Vec<Segment> {
        let p = &self.points;
        [
            (p.a1, p.b1),
            (p.b1, p.b2),
            (p.b2, p.a2),
            (p.c1, p.c2),
            (p.d1, p.d2),
            (p.g2, p.g3),
            (p.h2, p.h3),
            (p.j2, p.j3),
            (p.h2, p.j2),
            (p.h3, p.j3),
        ]
        .into_iter()
        .map(|(start, end)| Segment::new(start, end))
        .collect()
    }

    /// Cut segments of one tray side: the perimeter of the developed
    /// pattern, from the back wall flap around the side flap and its
    /// locking tab, back to the base corners.
    pub fn cut_segments(&self) -> Vec<Segment> {
        let p = &self.points;
        [
            (p.b1, p.c1),
            (p.c1, p.d1),
            (p.d1, p.e1),
            (p.e1, p.e2),
            (p.e2, p.d2),
            (p.d2, p.c2),
            (p.c2, p.b2),
            (p.b2, p.f2),
            (p.f2, p.m2),
            (p.m2, p.a2),
            (p.g2, p.h2),
            (p.h2, p.i2),
            (p.i2, p.k2),
            (p.k2, p.j2),
            (p.j2, p.l2),
            (p.l2, p.l3),
            (p.l3, p.j3),
            (p.j3, p.k3),
            (p.k3, p.i3),
            (p.i3, p.h3),
            (p.h3, p.g3),
            (p.a3, p.m3),
            (p.m3, p.f3),
            (p.f3, p.b3),
            (p.a2, p.g2),
            (p.a3, p.g3),
        ]
        .into_iter()
        .map(|(start, end)| Segment::new(start, end))
        .collect()
    }

    /// Builds the full path collection.
    ///
    /// Emission order is stable: fold group, its 180° mirror, cut group,
    /// its mirror, then the insert panel. The mirrors reuse the already
    /// built segment lists with a rotation tag rather than recomputing
    /// points. The base outline maps onto itself under the 180° rotation,
    /// so it is emitted once.
    pub fn generate(&mut self) {
        self.paths.clear();
        let p = self.points;
        debug!(
            width = self.params.width,
            depth = self.params.depth,
            height = self.params.height,
            thickness = self.params.thickness,
            "generating tray pattern"
        );

        self.paths.push(PathElement::outline(
            vec![p.a1, p.a2, p.a3, p.a4],
            CutClass::Fold,
            None,
        ));

        let folds = self.fold_segments();
        let cuts = self.cut_segments();

        for &segment in &folds {
            self.paths
                .push(PathElement::line(segment, CutClass::Fold, None));
        }
        for &segment in &folds {
            self.paths
                .push(PathElement::line(segment, CutClass::Fold, Some(Rotation::Half)));
        }
        for &segment in &cuts {
            self.paths
                .push(PathElement::line(segment, CutClass::Cut, None));
        }
        for &segment in &cuts {
            self.paths
                .push(PathElement::line(segment, CutClass::Cut, Some(Rotation::Half)));
        }

        // The insert is rotated off the main pattern area rather than
        // translated; the operator repositions it before cutting.
        self.paths.push(PathElement::outline(
            vec![p.insert1, p.insert2, p.insert3, p.insert4],
            CutClass::Insert,
            Some(Rotation::Quarter),
        ));

        self.warn_if_oversized();
    }

    /// Bounding box of the emitted pattern in pattern coordinates, with
    /// rotation tags applied. `None` before [`generate`](Self::generate).
    pub fn bounds(&self) -> Option<(Point, Point)> {
        let mut min = Point::new(f64::INFINITY, f64::INFINITY);
        let mut max = Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
        for path in &self.paths {
            for point in path.resolved_points() {
                min.x = min.x.min(point.x);
                min.y = min.y.min(point.y);
                max.x = max.x.max(point.x);
                max.y = max.y.max(point.y);
            }
        }
        if min.x.is_finite() {
            Some((min, max))
        } else {
            None
        }
    }

    // The document is written unchanged either way; anything outside the
    // fixed page is simply not visible in it.
    fn warn_if_oversized(&self) {
        if let Some((min, max)) = self.bounds() {
            let half_w = svg::PAGE_WIDTH / 2.0;
            let half_h = svg::PAGE_HEIGHT / 2.0;
            if min.x < -half_w || max.x > half_w || min.y < -half_h || max.y > half_h {
                warn!(
                    pattern_width = max.x - min.x,
                    pattern_height = max.y - min.y,
                    page_width = svg::PAGE_WIDTH,
                    page_height = svg::PAGE_HEIGHT,
                    "pattern exceeds the page and will render outside it"
                );
            }
        }
    }

    /// Serializes the generated pattern as a complete SVG document.
    pub fn to_svg(&self) -> String {
        svg::render(&self.paths)
    }

    /// Writes the generated pattern to `path` in a single scoped operation.
    pub fn write_svg(&self, path: &Path) -> PatternResult<()> {
        svg::write(&self.paths, path)
    }
}
