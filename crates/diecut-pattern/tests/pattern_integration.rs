// Integration tests for tray pattern generation: named point scenarios,
// mirror symmetry, and document determinism.

use diecut_pattern::{
    CutClass, Point, Rotation, TrayParameters, TrayPatternMaker, TrayPoints,
};
use proptest::prelude::*;

fn generated(params: TrayParameters) -> TrayPatternMaker {
    let mut maker = TrayPatternMaker::new(params);
    maker.generate();
    maker
}

#[test]
fn test_default_scenario_named_points() {
    let points = TrayPoints::derive(&TrayParameters::default());
    assert_eq!(points.a1, Point::new(-30.0, -37.5));
    assert_eq!(points.a2, Point::new(30.0, -37.5));
    assert_eq!(points.a3, Point::new(30.0, 37.5));
    assert_eq!(points.a4, Point::new(-30.0, 37.5));
    assert_eq!(points.insert1, Point::new(-29.6, -37.1));
}

#[test]
fn test_zero_width_is_still_emitted() {
    // No validation on the generation path: a degenerate zero-width tray
    // still produces a full document.
    let maker = generated(TrayParameters {
        width: 0.0,
        ..TrayParameters::default()
    });
    assert_eq!(maker.paths().len(), 74);

    let doc = maker.to_svg();
    assert!(doc.contains("<path d=\"M 0,-37.5 L 0,-37.5 L 0,37.5 L 0,37.5 Z\" class=\"fold\"/>"));
}

#[test]
fn test_zero_thickness_collapses_fold_offset() {
    let points = TrayPoints::derive(&TrayParameters {
        thickness: 0.0,
        ..TrayParameters::default()
    });
    assert_eq!(points.c1.y, points.b1.y);
}

#[test]
fn test_mirrored_groups_are_exact_half_rotations() {
    let maker = generated(TrayParameters::default());

    for class in [CutClass::Fold, CutClass::Cut] {
        let originals: Vec<_> = maker
            .paths()
            .iter()
            .filter(|p| p.class == class && !p.closed && p.rotation.is_none())
            .collect();
        let mirrored: Vec<_> = maker
            .paths()
            .iter()
            .filter(|p| p.class == class && p.rotation == Some(Rotation::Half))
            .collect();

        assert_eq!(originals.len(), mirrored.len());
        assert!(!originals.is_empty());

        for (original, mirror) in originals.iter().zip(&mirrored) {
            let expected: Vec<Point> = original
                .points
                .iter()
                .map(|p| Point::new(-p.x, -p.y))
                .collect();
            assert_eq!(mirror.resolved_points(), expected);
        }
    }
}

#[test]
fn test_insert_is_quarter_rotated() {
    let maker = generated(TrayParameters::default());
    let insert = maker.paths().last().unwrap();
    assert_eq!(insert.class, CutClass::Insert);
    assert_eq!(insert.rotation, Some(Rotation::Quarter));

    for (rotated, original) in insert.resolved_points().iter().zip(&insert.points) {
        assert_eq!(*rotated, Point::new(-original.y, original.x));
    }
}

#[test]
fn test_identical_parameters_give_identical_bytes() {
    let params = TrayParameters {
        width: 42.0,
        depth: 63.5,
        height: 21.0,
        thickness: 0.25,
    };
    let first = generated(params).to_svg();
    let second = generated(params).to_svg();
    assert_eq!(first, second);

    let dir = tempfile::tempdir().unwrap();
    let path_a = dir.path().join("a.svg");
    let path_b = dir.path().join("b.svg");
    generated(params).write_svg(&path_a).unwrap();
    generated(params).write_svg(&path_b).unwrap();
    assert_eq!(
        std::fs::read(&path_a).unwrap(),
        std::fs::read(&path_b).unwrap()
    );
}

#[test]
fn test_document_is_well_formed_enough_to_count_paths() {
    let doc = generated(TrayParameters::default()).to_svg();
    assert_eq!(doc.matches("<path ").count(), 74);
    assert_eq!(doc.matches("rotate(180, 0, 0)").count(), 36);
    assert_eq!(doc.matches("rotate(90, 0, 0)").count(), 1);
    assert_eq!(doc.matches("</svg>").count(), 1);
}

proptest! {
    #[test]
    fn prop_base_corners_form_centered_rectangle(
        width in 1.0f64..200.0,
        depth in 1.0f64..200.0,
        height in 1.0f64..100.0,
        thickness_ratio in 0.0f64..0.99,
    ) {
        let params = TrayParameters {
            width,
            depth,
            height,
            thickness: height * thickness_ratio,
        };
        let p = TrayPoints::derive(&params);

        // Exact rectangle of width x depth, centered at the origin.
        prop_assert_eq!(p.a2.x - p.a1.x, width);
        prop_assert_eq!(p.a3.y - p.a2.y, depth);
        prop_assert_eq!(p.a1.x, -p.a2.x);
        prop_assert_eq!(p.a1.y, -p.a4.y);
        prop_assert_eq!(p.a1.y, p.a2.y);
        prop_assert_eq!(p.a2.x, p.a3.x);
    }

    #[test]
    fn prop_insert_size_is_independent_of_height_and_thickness(
        width in 2.0f64..200.0,
        depth in 2.0f64..200.0,
        height in 1.0f64..100.0,
        thickness in 0.0f64..5.0,
    ) {
        let p = TrayPoints::derive(&TrayParameters { width, depth, height, thickness });
        prop_assert!((p.insert2.x - p.insert1.x - (width - 0.8)).abs() < 1e-9);
        prop_assert!((p.insert3.y - p.insert2.y - (depth - 0.8)).abs() < 1e-9);
        prop_assert_eq!(p.insert1.x, -p.insert2.x);
        prop_assert_eq!(p.insert1.y, -p.insert4.y);
    }

    #[test]
    fn prop_mirror_tags_negate_coordinates(
        width in 1.0f64..150.0,
        depth in 1.0f64..150.0,
        height in 1.0f64..80.0,
        thickness in 0.0f64..2.0,
    ) {
        let maker = generated(TrayParameters { width, depth, height, thickness });
        for path in maker.paths().iter().filter(|p| p.rotation == Some(Rotation::Half)) {
            for (rotated, original) in path.resolved_points().iter().zip(&path.points) {
                prop_assert_eq!(rotated.x, -original.x);
                prop_assert_eq!(rotated.y, -original.y);
            }
        }
    }
}
