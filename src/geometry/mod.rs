// ShaderBG
// Copyright (c) 2025 Harlen Batagelo
// https://github.com/hbatagelo/shaderbg
// SPDX-License-Identifier: GPL-3.0-or-later

//! Value shapes accepted by uniform setters.

mod color;
mod matrix;
mod transform;
mod vector;

pub use color::{Color, ParseColorError};
pub use matrix::{Mat3, Mat4, Matrix};
pub use transform::Transform;
pub use vector::{Vector2, Vector3, Vector4};

pub type Vec2 = Vector2<f32>;
pub type IVec2 = Vector2<i32>;
pub type BVec2 = Vector2<bool>;
pub type Vec3 = Vector3<f32>;
pub type IVec3 = Vector3<i32>;
pub type BVec3 = Vector3<bool>;
pub type Vec4 = Vector4<f32>;
pub type IVec4 = Vector4<i32>;
pub type BVec4 = Vector4<bool>;
