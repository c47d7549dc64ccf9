use pretty_assertions::assert_eq;

use super::super::*;

#[test]
fn test_identity() {
    let identity = Mat3::identity();
    assert_eq!(
        identity.to_array(),
        [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]
    );
    assert_eq!(Mat4::default(), Mat4::identity());
}

#[test]
fn test_column_major_layout() {
    let values: [f32; 16] = std::array::from_fn(|i| i as f32);
    let matrix = Mat4::from(values);
    assert_eq!(matrix.get(0, 3), 3.0);
    assert_eq!(matrix.get(3, 0), 12.0);
    assert_eq!(matrix.as_slice(), &values[..]);
}

#[test]
fn test_from_slice_checks_length() {
    assert!(Mat3::from_slice(&[0.0; 8]).is_none());
    let matrix = Mat3::from_slice(&[2.0; 9]).unwrap();
    assert_eq!(matrix.to_array(), [2.0; 9]);
}

#[test]
fn test_non_square_matrix() {
    let matrix = Matrix::<2, 3>::identity();
    assert_eq!(matrix.as_slice(), &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
}
