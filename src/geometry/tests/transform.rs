use pretty_assertions::assert_eq;

use super::super::*;

fn assert_close(actual: Vec2, expected: Vec2) {
    assert!(
        (actual.x() - expected.x()).abs() < 1e-5 && (actual.y() - expected.y()).abs() < 1e-5,
        "{actual:?} != {expected:?}"
    );
}

#[test]
fn test_translate_then_scale() {
    let transform = Transform::IDENTITY.translate(10.0, 5.0).scale(2.0, 3.0);
    assert_close(
        transform.transform_point(Vec2::new(1.0, 1.0)),
        Vec2::new(12.0, 8.0),
    );
}

#[test]
fn test_rotate_quarter_turn() {
    let transform = Transform::default().rotate(90.0);
    assert_close(
        transform.transform_point(Vec2::new(1.0, 0.0)),
        Vec2::new(0.0, 1.0),
    );
}

#[test]
fn test_combine_with_identity() {
    let transform = Transform::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 0.0, 0.0, 1.0);
    assert_eq!(transform * Transform::IDENTITY, transform);
    assert_eq!(Transform::IDENTITY * transform, transform);
}

#[test]
fn test_matrix_expansion() {
    let matrix = Transform::IDENTITY.translate(7.0, -3.0).matrix();
    assert_eq!(
        matrix.to_array(),
        [
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            7.0, -3.0, 0.0, 1.0,
        ]
    );
}
