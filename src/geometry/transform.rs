// ShaderBG
// Copyright (c) 2025 Harlen Batagelo
// https://github.com/hbatagelo/shaderbg
// SPDX-License-Identifier: GPL-3.0-or-later

use std::{fmt, ops::Mul};

use super::{matrix::Mat4, vector::Vector2};

/// 2D affine transform stored as a row-major 3x3 matrix.
///
/// Uploaded to shaders as a `mat4` that acts on `(x, y, 0, 1)` positions.
#[derive(Copy, Clone, PartialEq)]
pub struct Transform {
    rows: [[f32; 3]; 3],
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        rows: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
    };

    #[allow(clippy::too_many_arguments)]
    pub fn new(
        a00: f32,
        a01: f32,
        a02: f32,
        a10: f32,
        a11: f32,
        a12: f32,
        a20: f32,
        a21: f32,
        a22: f32,
    ) -> Self {
        Self {
            rows: [[a00, a01, a02], [a10, a11, a12], [a20, a21, a22]],
        }
    }

    pub fn combine(&self, other: &Transform) -> Transform {
        let mut rows = [[0.0; 3]; 3];
        for (i, row) in rows.iter_mut().enumerate() {
            for (j, value) in row.iter_mut().enumerate() {
                *value = (0..3).map(|k| self.rows[i][k] * other.rows[k][j]).sum();
            }
        }
        Transform { rows }
    }

    pub fn translate(&self, x: f32, y: f32) -> Transform {
        self.combine(&Transform::new(1.0, 0.0, x, 0.0, 1.0, y, 0.0, 0.0, 1.0))
    }

    pub fn scale(&self, x: f32, y: f32) -> Transform {
        self.combine(&Transform::new(x, 0.0, 0.0, 0.0, y, 0.0, 0.0, 0.0, 1.0))
    }

    pub fn rotate(&self, degrees: f32) -> Transform {
        let (sin, cos) = degrees.to_radians().sin_cos();
        self.combine(&Transform::new(cos, -sin, 0.0, sin, cos, 0.0, 0.0, 0.0, 1.0))
    }

    pub fn transform_point(&self, point: Vector2<f32>) -> Vector2<f32> {
        let [r0, r1, _] = self.rows;
        Vector2::new(
            r0[0] * point.x() + r0[1] * point.y() + r0[2],
            r1[0] * point.x() + r1[1] * point.y() + r1[2],
        )
    }

    /// Expands the 3x3 affine matrix into the column-major 4x4 form GL uses.
    pub fn matrix(&self) -> Mat4 {
        let [r0, r1, r2] = self.rows;
        Mat4::from_columns([
            [r0[0], r1[0], 0.0, r2[0]],
            [r0[1], r1[1], 0.0, r2[1]],
            [0.0, 0.0, 1.0, 0.0],
            [r0[2], r1[2], 0.0, r2[2]],
        ])
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Transform {
    type Output = Transform;

    fn mul(self, rhs: Transform) -> Self::Output {
        self.combine(&rhs)
    }
}

impl fmt::Debug for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transform")
            .field("rows", &self.rows)
            .finish()
    }
}
