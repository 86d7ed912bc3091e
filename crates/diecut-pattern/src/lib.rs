//! # Diecut Pattern
//!
//! Geometry and document emission for laser-cuttable die-cut tray patterns.
//!
//! A tray is described by four dimensions (width, depth, wall height, and
//! material thickness, all in millimeters). From these the generator derives
//! a fixed, named set of 2-D points laying out:
//!
//! - **Double-fold walls**: two parallel fold lines offset by twice the
//!   material thickness, producing a self-reinforcing folded edge
//! - **Flaps and tabs**: interlocking extensions at the free wall edges,
//!   sized proportionally to the tray dimensions
//! - **Bottom insert**: a separate rectangular floor panel with a small
//!   clearance so it does not bind against the base folds
//!
//! The points are grouped into fold and cut segments, mirrored 180° about
//! the origin to form the opposite tray side, and serialized as styled
//! `<path>` elements into a fixed A4 SVG page.
//!
//! Output is fully deterministic: identical parameters produce
//! byte-identical documents.

pub mod error;
pub mod geometry;
pub mod svg;
pub mod tray;

pub use error::{PatternError, PatternResult};
pub use geometry::{CutClass, PathElement, Point, Rotation, Segment};
pub use svg::{PAGE_HEIGHT, PAGE_WIDTH};
pub use tray::{TrayParameters, TrayPatternMaker, TrayPoints};
