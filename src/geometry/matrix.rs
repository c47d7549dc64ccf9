// ShaderBG
// Copyright (c) 2025 Harlen Batagelo
// https://github.com/hbatagelo/shaderbg
// SPDX-License-Identifier: GPL-3.0-or-later

use num_traits::{One, Zero};
use std::fmt;

/// Column-major `C`x`R` float matrix, laid out the way GLSL `matCxR` expects.
#[derive(Copy, Clone, PartialEq)]
pub struct Matrix<const C: usize, const R: usize> {
    columns: [[f32; R]; C],
}

impl<const C: usize, const R: usize> Matrix<C, R> {
    pub fn from_columns(columns: [[f32; R]; C]) -> Self {
        Self { columns }
    }

    /// Builds a matrix from `C * R` column-major values.
    ///
    /// Returns `None` when the slice length does not match.
    pub fn from_slice(values: &[f32]) -> Option<Self> {
        if values.len() != C * R {
            return None;
        }
        let mut columns = [[f32::zero(); R]; C];
        for (column, chunk) in columns.iter_mut().zip(values.chunks_exact(R)) {
            column.copy_from_slice(chunk);
        }
        Some(Self { columns })
    }

    /// Diagonal set to one, everything else zero.
    pub fn identity() -> Self {
        let mut columns = [[f32::zero(); R]; C];
        for (i, column) in columns.iter_mut().enumerate() {
            if i < R {
                column[i] = f32::one();
            }
        }
        Self { columns }
    }

    pub fn columns(&self) -> &[[f32; R]; C] {
        &self.columns
    }

    pub fn as_slice(&self) -> &[f32] {
        self.columns.as_flattened()
    }

    pub fn get(&self, column: usize, row: usize) -> f32 {
        self.columns[column][row]
    }
}

impl<const C: usize, const R: usize> Default for Matrix<C, R> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<const C: usize, const R: usize> fmt::Debug for Matrix<C, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matrix")
            .field("columns", &self.columns)
            .finish()
    }
}

pub type Mat3 = Matrix<3, 3>;
pub type Mat4 = Matrix<4, 4>;

impl Mat3 {
    pub fn to_array(&self) -> [f32; 9] {
        let mut values = [0.0; 9];
        values.copy_from_slice(self.as_slice());
        values
    }
}

impl Mat4 {
    pub fn to_array(&self) -> [f32; 16] {
        let mut values = [0.0; 16];
        values.copy_from_slice(self.as_slice());
        values
    }
}

impl From<[f32; 9]> for Mat3 {
    fn from(values: [f32; 9]) -> Self {
        Self::from_columns([
            [values[0], values[1], values[2]],
            [values[3], values[4], values[5]],
            [values[6], values[7], values[8]],
        ])
    }
}

impl From<[f32; 16]> for Mat4 {
    fn from(values: [f32; 16]) -> Self {
        Self::from_columns([
            [values[0], values[1], values[2], values[3]],
            [values[4], values[5], values[6], values[7]],
            [values[8], values[9], values[10], values[11]],
            [values[12], values[13], values[14], values[15]],
        ])
    }
}
