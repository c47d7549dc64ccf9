// ShaderBG
// Copyright (c) 2025 Harlen Batagelo
// https://github.com/hbatagelo/shaderbg
// SPDX-License-Identifier: GPL-3.0-or-later

use serde::*;

use super::PresetError;
use crate::{device::GraphicsDevice, geometry::*, shader::Shader};

/// A uniform value as written in a preset.
///
/// The GLSL shape is inferred from the value:
///
/// | Value | Uniform |
/// |---|---|
/// | `true` | `bool` |
/// | `3` | `int` |
/// | `2.0` | `float` |
/// | `"#rrggbb"`, `"#rrggbbaa"` | `vec4` color |
/// | 2 to 4 booleans / integers / floats | `bvecN` / `ivecN` / `vecN` |
/// | 9 or 16 floats | `mat3` / `mat4` (column-major) |
/// | any other number of floats | `float[]` |
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(untagged)]
pub enum UniformSetting {
    Bool(bool),
    Int(i32),
    Float(f32),
    Color(String),
    Bools(Vec<bool>),
    Ints(Vec<i32>),
    Floats(Vec<f32>),
}

impl UniformSetting {
    /// GLSL type the value is uploaded as.
    pub fn glsl_type(&self) -> &'static str {
        match self {
            UniformSetting::Bool(_) => "bool",
            UniformSetting::Int(_) => "int",
            UniformSetting::Float(_) => "float",
            UniformSetting::Color(_) => "vec4",
            UniformSetting::Bools(v) => match v.len() {
                2 => "bvec2",
                3 => "bvec3",
                4 => "bvec4",
                _ => "invalid",
            },
            UniformSetting::Ints(v) => match v.len() {
                2 => "ivec2",
                3 => "ivec3",
                4 => "ivec4",
                _ => "invalid",
            },
            UniformSetting::Floats(v) => match v.len() {
                2 => "vec2",
                3 => "vec3",
                4 => "vec4",
                9 => "mat3",
                16 => "mat4",
                _ => "float[]",
            },
        }
    }

    pub fn validate(&self, name: &str) -> Result<(), PresetError> {
        let invalid = |reason: String| PresetError::InvalidUniform {
            name: name.to_string(),
            reason,
        };

        match self {
            UniformSetting::Color(text) => text
                .parse::<Color>()
                .map(|_| ())
                .map_err(|err| invalid(err.to_string())),
            UniformSetting::Bools(v) if !(2..=4).contains(&v.len()) => Err(invalid(format!(
                "expected 2 to 4 booleans, got {}",
                v.len()
            ))),
            UniformSetting::Ints(v) if !(2..=4).contains(&v.len()) => Err(invalid(format!(
                "expected 2 to 4 integers, got {}",
                v.len()
            ))),
            UniformSetting::Floats(v) if v.is_empty() => Err(invalid("empty array".into())),
            _ => Ok(()),
        }
    }

    /// Uploads the value through the matching typed setter.
    pub fn apply<D: GraphicsDevice>(
        &self,
        shader: &mut Shader<'_, D>,
        name: &str,
    ) -> Result<(), PresetError> {
        self.validate(name)?;

        match self {
            UniformSetting::Bool(x) => shader.set_uniform_bool(name, *x),
            UniformSetting::Int(x) => shader.set_uniform_int(name, *x),
            UniformSetting::Float(x) => shader.set_uniform_float(name, *x),
            UniformSetting::Color(text) => {
                if let Ok(color) = text.parse::<Color>() {
                    shader.set_uniform_color(name, color);
                }
            }
            UniformSetting::Bools(v) => match v.as_slice() {
                &[x, y] => shader.set_uniform_bvec2(name, BVec2::new(x, y)),
                &[x, y, z] => shader.set_uniform_bvec3(name, BVec3::new(x, y, z)),
                &[x, y, z, w] => shader.set_uniform_bvec4(name, BVec4::new(x, y, z, w)),
                _ => {}
            },
            UniformSetting::Ints(v) => match v.as_slice() {
                &[x, y] => shader.set_uniform_ivec2(name, IVec2::new(x, y)),
                &[x, y, z] => shader.set_uniform_ivec3(name, IVec3::new(x, y, z)),
                &[x, y, z, w] => shader.set_uniform_ivec4(name, IVec4::new(x, y, z, w)),
                _ => {}
            },
            UniformSetting::Floats(v) => match v.as_slice() {
                &[x, y] => shader.set_uniform_vec2(name, Vec2::new(x, y)),
                &[x, y, z] => shader.set_uniform_vec3(name, Vec3::new(x, y, z)),
                &[x, y, z, w] => shader.set_uniform_vec4(name, Vec4::new(x, y, z, w)),
                values => {
                    if let Some(matrix) = Mat3::from_slice(values) {
                        shader.set_uniform_mat3(name, &matrix);
                    } else if let Some(matrix) = Mat4::from_slice(values) {
                        shader.set_uniform_mat4(name, &matrix);
                    } else {
                        shader.set_uniform_float_array(name, values);
                    }
                }
            },
        }
        Ok(())
    }
}
