// ShaderBG
// Copyright (c) 2025 Harlen Batagelo
// https://github.com/hbatagelo/shaderbg
// SPDX-License-Identifier: GPL-3.0-or-later

use super::Shader;
use crate::{
    device::{GraphicsDevice, UniformValue, INVALID_LOCATION},
    texture::Texture,
};

impl<D: GraphicsDevice> Shader<'_, D> {
    /// Associates a `sampler2D` uniform with `texture`.
    ///
    /// Nothing is bound yet: texture units are handed out by
    /// [`Shader::bind_textures`]. Only the native handle is stored, so
    /// `texture` must stay alive while this shader is used for drawing.
    ///
    /// One unit is kept for the current texture. When every other unit is
    /// taken, new samplers are rejected with an error log.
    pub fn set_uniform_texture<T>(&mut self, name: &str, texture: &T)
    where
        T: Texture + ?Sized,
    {
        if self.program == 0 {
            return;
        }

        let location = self.uniform_location(name);
        if location == INVALID_LOCATION {
            return;
        }

        if !self.textures.contains_key(&location) {
            let max_units = self.device.max_texture_units() as usize;
            if self.textures.len() + 1 >= max_units {
                log::error!(
                    "Cannot use texture \"{name}\" in shader program {}: all {max_units} texture units are used",
                    self.program
                );
                return;
            }
        }

        if self.current_texture == location {
            self.current_texture = INVALID_LOCATION;
        }
        self.textures.insert(location, texture.native_handle());
    }

    /// Marks a `sampler2D` uniform as reading the texture of whatever
    /// object is being drawn.
    ///
    /// The texture itself is provided to [`Shader::bind_textures`] by the
    /// renderer on every draw.
    pub fn set_uniform_current_texture(&mut self, name: &str) {
        if self.program == 0 {
            return;
        }

        let location = self.uniform_location(name);
        if location != INVALID_LOCATION {
            self.textures.remove(&location);
        }
        self.current_texture = location;
    }

    /// Location of the current-texture sampler, if one was set.
    pub fn current_texture_location(&self) -> Option<i32> {
        (self.current_texture != INVALID_LOCATION).then_some(self.current_texture)
    }

    /// Number of samplers bound to a fixed texture.
    pub fn texture_count(&self) -> usize {
        self.textures.len()
    }

    /// Activates the program and binds its textures for the next draw.
    ///
    /// Samplers are visited in location order and receive units `0, 1, …`.
    /// `current`, the texture of the object being drawn, takes the next
    /// unit when a current-texture sampler was set. Unit 0 is left active.
    ///
    /// Returns the number of texture units used.
    pub fn bind_textures(&self, current: Option<&dyn Texture>) -> u32 {
        if self.program == 0 {
            return 0;
        }

        self.device.use_program(self.program);

        let mut unit = 0;
        let mut bind = |location: i32, texture: u32| {
            self.device.active_texture(unit);
            self.device.bind_texture(texture);
            self.device
                .set_uniform(location, &UniformValue::Int(unit as i32));
            unit += 1;
        };

        for (&location, &texture) in &self.textures {
            bind(location, texture);
        }

        if self.current_texture != INVALID_LOCATION {
            if let Some(texture) = current {
                bind(self.current_texture, texture.native_handle());
            }
        }

        self.device.active_texture(0);
        unit
    }
}
