// ShaderBG
// Copyright (c) 2025 Harlen Batagelo
// https://github.com/hbatagelo/shaderbg
// SPDX-License-Identifier: GPL-3.0-or-later

use super::Shader;
use crate::{device::GraphicsDevice, geometry::*, texture::Texture};

/// Stands for the texture of the object being drawn.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CurrentTexture;

/// A value accepted by the legacy [`Shader::set_parameter`].
///
/// Every implementation forwards to one typed `set_uniform_*` setter.
pub trait Parameter {
    fn apply<D: GraphicsDevice>(self, shader: &mut Shader<'_, D>, name: &str);
}

impl Parameter for f32 {
    fn apply<D: GraphicsDevice>(self, shader: &mut Shader<'_, D>, name: &str) {
        shader.set_uniform_float(name, self);
    }
}

impl Parameter for (f32, f32) {
    fn apply<D: GraphicsDevice>(self, shader: &mut Shader<'_, D>, name: &str) {
        shader.set_uniform_vec2(name, self.into());
    }
}

impl Parameter for (f32, f32, f32) {
    fn apply<D: GraphicsDevice>(self, shader: &mut Shader<'_, D>, name: &str) {
        shader.set_uniform_vec3(name, self.into());
    }
}

impl Parameter for (f32, f32, f32, f32) {
    fn apply<D: GraphicsDevice>(self, shader: &mut Shader<'_, D>, name: &str) {
        shader.set_uniform_vec4(name, self.into());
    }
}

impl Parameter for Vec2 {
    fn apply<D: GraphicsDevice>(self, shader: &mut Shader<'_, D>, name: &str) {
        shader.set_uniform_vec2(name, self);
    }
}

impl Parameter for Vec3 {
    fn apply<D: GraphicsDevice>(self, shader: &mut Shader<'_, D>, name: &str) {
        shader.set_uniform_vec3(name, self);
    }
}

impl Parameter for Color {
    fn apply<D: GraphicsDevice>(self, shader: &mut Shader<'_, D>, name: &str) {
        shader.set_uniform_color(name, self);
    }
}

impl Parameter for Transform {
    fn apply<D: GraphicsDevice>(self, shader: &mut Shader<'_, D>, name: &str) {
        shader.set_uniform_transform(name, &self);
    }
}

impl<T> Parameter for &T
where
    T: Texture + ?Sized,
{
    fn apply<D: GraphicsDevice>(self, shader: &mut Shader<'_, D>, name: &str) {
        shader.set_uniform_texture(name, self);
    }
}

impl Parameter for CurrentTexture {
    fn apply<D: GraphicsDevice>(self, shader: &mut Shader<'_, D>, name: &str) {
        shader.set_uniform_current_texture(name);
    }
}

impl<D: GraphicsDevice> Shader<'_, D> {
    #[deprecated(note = "use the typed `set_uniform_*` setters")]
    pub fn set_parameter<P: Parameter>(&mut self, name: &str, value: P) {
        value.apply(self, name);
    }
}
