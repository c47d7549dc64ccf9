// ShaderBG
// Copyright (c) 2025 Harlen Batagelo
// https://github.com/hbatagelo/shaderbg
// SPDX-License-Identifier: GPL-3.0-or-later

//! GLSL program wrapper.
//!
//! A [`Shader`] owns one linked program on a [`GraphicsDevice`] and
//! provides:
//!
//! 1. Loading of vertex and/or fragment stages from files, strings or
//!    readers. A failed load always leaves the shader unloaded.
//! 2. Typed uniform setters backed by a per-program location cache.
//!    Unknown uniforms are ignored.
//! 3. Deferred sampler binding: textures are recorded at set time and
//!    assigned to texture units only by [`Shader::bind_textures`], right
//!    before drawing.

mod error;
mod parameter;
mod source;
mod textures;
mod uniforms;

use gl::types::*;
use std::{
    collections::{BTreeMap, HashMap},
    io::Read,
    path::Path,
};

pub use error::ShaderError;
pub use parameter::{CurrentTexture, Parameter};

use crate::device::{GraphicsDevice, ShaderType, INVALID_LOCATION};

pub struct Shader<'d, D: GraphicsDevice> {
    device: &'d D,

    /// Linked program, `0` while unloaded.
    program: GLuint,

    /// Sampler that receives the texture of the object being drawn.
    current_texture: GLint,

    /// Sampler locations mapped to the textures they read from.
    /// Ordered so that texture units are assigned deterministically.
    textures: BTreeMap<GLint, GLuint>,

    /// Uniform locations, including cached misses. Valid for the
    /// current program only.
    locations: HashMap<String, GLint>,
}

impl<'d, D: GraphicsDevice> Shader<'d, D> {
    /// Creates an unloaded shader on `device`.
    pub fn new(device: &'d D) -> Self {
        Self {
            device,
            program: 0,
            current_texture: INVALID_LOCATION,
            textures: BTreeMap::new(),
            locations: HashMap::new(),
        }
    }

    #[must_use]
    pub fn load_from_file(&mut self, path: impl AsRef<Path>, stage: ShaderType) -> bool {
        let result = source::read_file(path.as_ref()).map(|code| match stage {
            ShaderType::Vertex => (Some(code), None),
            ShaderType::Fragment => (None, Some(code)),
        });
        self.load(result)
    }

    #[must_use]
    pub fn load_from_files(
        &mut self,
        vertex_path: impl AsRef<Path>,
        fragment_path: impl AsRef<Path>,
    ) -> bool {
        let result = source::read_file(vertex_path.as_ref()).and_then(|vertex| {
            let fragment = source::read_file(fragment_path.as_ref())?;
            Ok((Some(vertex), Some(fragment)))
        });
        self.load(result)
    }

    #[must_use]
    pub fn load_from_memory(&mut self, source: &str, stage: ShaderType) -> bool {
        let code = source.to_string();
        self.load(Ok(match stage {
            ShaderType::Vertex => (Some(code), None),
            ShaderType::Fragment => (None, Some(code)),
        }))
    }

    #[must_use]
    pub fn load_from_sources(&mut self, vertex: &str, fragment: &str) -> bool {
        self.load(Ok((Some(vertex.to_string()), Some(fragment.to_string()))))
    }

    /// Reads the stage source from the current position of `stream`.
    #[must_use]
    pub fn load_from_stream<R: Read>(&mut self, mut stream: R, stage: ShaderType) -> bool {
        let result = source::read_stream(&mut stream).map(|code| match stage {
            ShaderType::Vertex => (Some(code), None),
            ShaderType::Fragment => (None, Some(code)),
        });
        self.load(result)
    }

    #[must_use]
    pub fn load_from_streams<V: Read, F: Read>(
        &mut self,
        mut vertex_stream: V,
        mut fragment_stream: F,
    ) -> bool {
        let result = source::read_stream(&mut vertex_stream).and_then(|vertex| {
            let fragment = source::read_stream(&mut fragment_stream)?;
            Ok((Some(vertex), Some(fragment)))
        });
        self.load(result)
    }

    /// Raw program name, `0` while unloaded.
    pub fn native_handle(&self) -> GLuint {
        self.program
    }

    pub fn is_loaded(&self) -> bool {
        self.program != 0
    }

    /// Makes `shader` the active program of `device`, or deactivates
    /// programs when `shader` is `None` or unloaded.
    ///
    /// There is a single active program per context, shared by every
    /// shader created on it.
    pub fn bind(device: &D, shader: Option<&Shader<'_, D>>) {
        match shader {
            Some(shader) => {
                debug_assert!(
                    std::ptr::eq(device, shader.device),
                    "shader bound on a device it was not created on"
                );
                device.use_program(shader.program);
            }
            None => device.use_program(0),
        }
    }

    /// Whether `device` can run shaders at all.
    pub fn is_available(device: &D) -> bool {
        device.is_supported()
    }

    fn load(&mut self, sources: Result<(Option<String>, Option<String>), ShaderError>) -> bool {
        let result = sources
            .and_then(|(vertex, fragment)| self.compile(vertex.as_deref(), fragment.as_deref()));

        match result {
            Ok(()) => {
                log::debug!("Loaded shader program {}", self.program);
                true
            }
            Err(err) => {
                self.release();
                log::error!("{err}");
                false
            }
        }
    }

    fn compile(&mut self, vertex: Option<&str>, fragment: Option<&str>) -> Result<(), ShaderError> {
        if !self.device.is_supported() {
            return Err(ShaderError::CapabilityUnavailable);
        }

        // The previous program and everything cached for it are discarded
        // up front so that no failure path can leave them behind.
        self.release();

        let program = self.device.create_program();

        let stages = [(ShaderType::Vertex, vertex), (ShaderType::Fragment, fragment)];
        for (stage, code) in stages {
            let Some(code) = code else { continue };
            match self.device.compile_shader(stage, code) {
                Ok(shader) => {
                    self.device.attach_shader(program, shader);
                    // Flagged for deletion; it lives on while attached.
                    self.device.delete_shader(shader);
                }
                Err(err) => {
                    self.device.delete_program(program);
                    if let Some(file) = source::save_failed_source(stage, code) {
                        log::error!("Rejected {stage} shader saved to {}", file.display());
                    }
                    return Err(err);
                }
            }
        }

        if let Err(err) = self.device.link_program(program) {
            self.device.delete_program(program);
            return Err(err);
        }

        // Make the new program visible to every context sharing it.
        self.device.flush();

        self.program = program;
        Ok(())
    }

    /// Deletes the program, if any, and resets every cache.
    fn release(&mut self) {
        if self.program != 0 {
            self.device.delete_program(self.program);
            self.program = 0;
        }
        self.current_texture = INVALID_LOCATION;
        self.textures.clear();
        self.locations.clear();
    }
}

impl<D: GraphicsDevice> Drop for Shader<'_, D> {
    fn drop(&mut self) {
        if self.program != 0 {
            self.device.delete_program(self.program);
        }
    }
}
