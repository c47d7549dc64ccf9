// ShaderBG
// Copyright (c) 2025 Harlen Batagelo
// https://github.com/hbatagelo/shaderbg
// SPDX-License-Identifier: GPL-3.0-or-later

//! Graphics context abstraction.
//!
//! OpenGL is a single global state machine: one program is active at a
//! time and texture units are shared by everyone. Instead of hiding that
//! state, it is modelled as an explicit [`GraphicsDevice`] that every
//! [`Shader`](crate::shader::Shader) borrows. Two devices are provided:
//!
//! - [`GlDevice`] forwards to the real driver through the `gl` crate.
//! - [`HeadlessDevice`] is a software context that scans GLSL sources,
//!   assigns uniform locations and records every value it receives, so
//!   shader logic can be exercised without a window or a GPU.

#[cfg(debug_assertions)]
mod check_gl_error;
mod gl_device;
mod glsl_scan;
mod headless;

use gl::types::*;
use std::fmt;

pub use gl_device::GlDevice;
pub use headless::{HeadlessDevice, HeadlessTexture};

use crate::shader::ShaderError;

/// Location returned by the driver for uniforms it does not know about.
pub const INVALID_LOCATION: GLint = -1;

/// Programmable pipeline stage.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ShaderType {
    Vertex,
    Fragment,
}

impl ShaderType {
    pub fn gl_enum(&self) -> GLenum {
        match self {
            ShaderType::Vertex => gl::VERTEX_SHADER,
            ShaderType::Fragment => gl::FRAGMENT_SHADER,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ShaderType::Vertex => "vertex",
            ShaderType::Fragment => "fragment",
        }
    }
}

impl fmt::Display for ShaderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A value written to a uniform location, in the layout GL consumes.
///
/// Booleans travel as integers, like `glUniform*i` expects.
#[derive(Clone, Debug, PartialEq)]
pub enum UniformValue {
    Float(f32),
    Vec2([f32; 2]),
    Vec3([f32; 3]),
    Vec4([f32; 4]),
    Int(i32),
    IVec2([i32; 2]),
    IVec3([i32; 3]),
    IVec4([i32; 4]),
    Mat3([f32; 9]),
    Mat4([f32; 16]),
    FloatArray(Vec<f32>),
    Vec2Array(Vec<[f32; 2]>),
    Vec3Array(Vec<[f32; 3]>),
    Vec4Array(Vec<[f32; 4]>),
    Mat3Array(Vec<[f32; 9]>),
    Mat4Array(Vec<[f32; 16]>),
}

impl UniformValue {
    /// Number of consecutive locations the value spans.
    pub fn element_count(&self) -> usize {
        match self {
            UniformValue::FloatArray(values) => values.len(),
            UniformValue::Vec2Array(values) => values.len(),
            UniformValue::Vec3Array(values) => values.len(),
            UniformValue::Vec4Array(values) => values.len(),
            UniformValue::Mat3Array(values) => values.len(),
            UniformValue::Mat4Array(values) => values.len(),
            _ => 1,
        }
    }
}

/// The driver entry points a [`Shader`](crate::shader::Shader) needs.
///
/// Methods take `&self` because the underlying context is global,
/// process-wide state rather than something owned by the caller.
/// Implementations are not expected to be thread-safe: all calls must
/// happen on the thread that owns the context.
pub trait GraphicsDevice {
    /// Whether programmable shaders can be used at all.
    ///
    /// Computed once and cached for the lifetime of the device.
    fn is_supported(&self) -> bool;

    fn create_program(&self) -> GLuint;
    fn delete_program(&self, program: GLuint);

    /// Compiles one stage, returning the driver's log on failure.
    fn compile_shader(&self, stage: ShaderType, source: &str) -> Result<GLuint, ShaderError>;
    fn delete_shader(&self, shader: GLuint);
    fn attach_shader(&self, program: GLuint, shader: GLuint);
    fn link_program(&self, program: GLuint) -> Result<(), ShaderError>;

    /// Returns [`INVALID_LOCATION`] when `name` is not an active uniform.
    fn uniform_location(&self, program: GLuint, name: &str) -> GLint;

    /// Makes `program` the active program; `0` deactivates programs.
    fn use_program(&self, program: GLuint);
    fn current_program(&self) -> GLuint;

    /// Writes to `location` of the active program.
    fn set_uniform(&self, location: GLint, value: &UniformValue);

    fn max_texture_units(&self) -> u32;
    fn active_texture(&self, unit: u32);
    fn bind_texture(&self, texture: GLuint);

    fn flush(&self);
}
