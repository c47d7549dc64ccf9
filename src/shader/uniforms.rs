// ShaderBG
// Copyright (c) 2025 Harlen Batagelo
// https://github.com/hbatagelo/shaderbg
// SPDX-License-Identifier: GPL-3.0-or-later

use gl::types::*;

use super::Shader;
use crate::{
    device::{GraphicsDevice, UniformValue, INVALID_LOCATION},
    geometry::*,
};

impl<D: GraphicsDevice> Shader<'_, D> {
    pub fn set_uniform_float(&mut self, name: &str, x: f32) {
        self.set_uniform_with(name, || UniformValue::Float(x));
    }

    pub fn set_uniform_vec2(&mut self, name: &str, vector: Vec2) {
        self.set_uniform_with(name, || UniformValue::Vec2(vector.to_array()));
    }

    pub fn set_uniform_vec3(&mut self, name: &str, vector: Vec3) {
        self.set_uniform_with(name, || UniformValue::Vec3(vector.to_array()));
    }

    pub fn set_uniform_vec4(&mut self, name: &str, vector: Vec4) {
        self.set_uniform_with(name, || UniformValue::Vec4(vector.to_array()));
    }

    /// Uploads `color` to a `vec4`, normalized to `[0, 1]`.
    pub fn set_uniform_color(&mut self, name: &str, color: Color) {
        self.set_uniform_vec4(name, color.to_normalized());
    }

    pub fn set_uniform_int(&mut self, name: &str, x: i32) {
        self.set_uniform_with(name, || UniformValue::Int(x));
    }

    pub fn set_uniform_ivec2(&mut self, name: &str, vector: IVec2) {
        self.set_uniform_with(name, || UniformValue::IVec2(vector.to_array()));
    }

    pub fn set_uniform_ivec3(&mut self, name: &str, vector: IVec3) {
        self.set_uniform_with(name, || UniformValue::IVec3(vector.to_array()));
    }

    pub fn set_uniform_ivec4(&mut self, name: &str, vector: IVec4) {
        self.set_uniform_with(name, || UniformValue::IVec4(vector.to_array()));
    }

    // GLSL booleans are uploaded through the integer entry points.

    pub fn set_uniform_bool(&mut self, name: &str, x: bool) {
        self.set_uniform_int(name, i32::from(x));
    }

    pub fn set_uniform_bvec2(&mut self, name: &str, vector: BVec2) {
        self.set_uniform_ivec2(name, vector.cast());
    }

    pub fn set_uniform_bvec3(&mut self, name: &str, vector: BVec3) {
        self.set_uniform_ivec3(name, vector.cast());
    }

    pub fn set_uniform_bvec4(&mut self, name: &str, vector: BVec4) {
        self.set_uniform_ivec4(name, vector.cast());
    }

    pub fn set_uniform_mat3(&mut self, name: &str, matrix: &Mat3) {
        self.set_uniform_with(name, || UniformValue::Mat3(matrix.to_array()));
    }

    pub fn set_uniform_mat4(&mut self, name: &str, matrix: &Mat4) {
        self.set_uniform_with(name, || UniformValue::Mat4(matrix.to_array()));
    }

    /// Uploads the 4x4 form of `transform` to a `mat4`.
    pub fn set_uniform_transform(&mut self, name: &str, transform: &Transform) {
        self.set_uniform_mat4(name, &transform.matrix());
    }

    pub fn set_uniform_float_array(&mut self, name: &str, values: &[f32]) {
        self.set_uniform_with(name, || UniformValue::FloatArray(values.to_vec()));
    }

    pub fn set_uniform_vec2_array(&mut self, name: &str, vectors: &[Vec2]) {
        self.set_uniform_with(name, || {
            UniformValue::Vec2Array(vectors.iter().map(Vec2::to_array).collect())
        });
    }

    pub fn set_uniform_vec3_array(&mut self, name: &str, vectors: &[Vec3]) {
        self.set_uniform_with(name, || {
            UniformValue::Vec3Array(vectors.iter().map(Vec3::to_array).collect())
        });
    }

    pub fn set_uniform_vec4_array(&mut self, name: &str, vectors: &[Vec4]) {
        self.set_uniform_with(name, || {
            UniformValue::Vec4Array(vectors.iter().map(Vec4::to_array).collect())
        });
    }

    pub fn set_uniform_mat3_array(&mut self, name: &str, matrices: &[Mat3]) {
        self.set_uniform_with(name, || {
            UniformValue::Mat3Array(matrices.iter().map(Mat3::to_array).collect())
        });
    }

    pub fn set_uniform_mat4_array(&mut self, name: &str, matrices: &[Mat4]) {
        self.set_uniform_with(name, || {
            UniformValue::Mat4Array(matrices.iter().map(Mat4::to_array).collect())
        });
    }

    /// Looks `name` up in the location cache, asking the device on a miss.
    ///
    /// Unknown names are cached as [`INVALID_LOCATION`] too.
    pub(super) fn uniform_location(&mut self, name: &str) -> GLint {
        if let Some(&location) = self.locations.get(name) {
            return location;
        }

        let location = self.device.uniform_location(self.program, name);
        if location == INVALID_LOCATION {
            // Commonly an unused uniform removed by the GLSL compiler.
            log::debug!("Uniform \"{name}\" not found in shader program {}", self.program);
        }
        self.locations.insert(name.to_string(), location);
        location
    }

    /// Resolves `name` and uploads the value built by `value`.
    ///
    /// The program is made active for the upload and stays active
    /// afterwards. Nothing happens while unloaded or when the uniform
    /// does not exist.
    fn set_uniform_with<F>(&mut self, name: &str, value: F)
    where
        F: FnOnce() -> UniformValue,
    {
        if self.program == 0 {
            return;
        }

        let location = self.uniform_location(name);
        if location == INVALID_LOCATION {
            return;
        }

        self.device.use_program(self.program);
        self.device.set_uniform(location, &value());
    }
}
