// ShaderBG
// Copyright (c) 2025 Harlen Batagelo
// https://github.com/hbatagelo/shaderbg
// SPDX-License-Identifier: GPL-3.0-or-later

//! Program presets.
//!
//! A preset names the stage sources of a program and the uniform values
//! to upload once it is loaded. Presets are written in TOML (or JSON):
//!
//! ```toml
//! vertex = "quad.vert"
//! fragment = "wave.frag"
//! current_texture = "texture"
//!
//! [uniforms]
//! offset = 2.0
//! resolution = [800.0, 600.0]
//! tint = "#ff8000"
//! ```
//!
//! Stage paths are relative to the preset file.

mod uniform_setting;

use serde::*;
use std::{
    collections::BTreeMap,
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;

pub use uniform_setting::UniformSetting;

use crate::{
    device::{GraphicsDevice, ShaderType},
    shader::Shader,
};

#[derive(Debug, Error)]
pub enum PresetError {
    #[error("I/O error")]
    Io(#[from] io::Error),
    #[error("TOML parse error")]
    TomlParse(#[from] toml::de::Error),
    #[error("JSON parse error")]
    JsonParse(#[from] serde_json::Error),
    #[error("Invalid value for uniform '{name}': {reason}")]
    InvalidUniform { name: String, reason: String },
    #[error("Preset has no vertex or fragment shader")]
    NoStages,
}

#[derive(Debug, Deserialize, PartialEq, Serialize)]
pub struct Preset {
    #[serde(default)]
    pub vertex: Option<PathBuf>,

    #[serde(default)]
    pub fragment: Option<PathBuf>,

    /// Sampler that reads the texture of the object being drawn.
    #[serde(default)]
    pub current_texture: Option<String>,

    /// Texture units offered by the headless device.
    #[serde(
        default = "defaults::texture_units",
        deserialize_with = "validators::clamp_texture_units"
    )]
    pub texture_units: u32,

    #[serde(default)]
    pub uniforms: BTreeMap<String, UniformSetting>,

    /// Directory stage paths are resolved against.
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

impl Preset {
    pub fn from_toml_file(path: &Path) -> Result<Self, PresetError> {
        let content = fs::read_to_string(path)?;
        let preset: Preset = toml::from_str(&content)?;
        Ok(preset.with_base_dir(path))
    }

    pub fn from_json_file(path: &Path) -> Result<Self, PresetError> {
        let content = fs::read_to_string(path)?;
        let preset: Preset = serde_json::from_str(&content)?;
        Ok(preset.with_base_dir(path))
    }

    /// Picks the format from the extension, trying TOML then JSON when
    /// the extension is unknown.
    pub fn from_file(path: &Path) -> Result<Self, PresetError> {
        match path.extension().and_then(|s| s.to_str()) {
            Some("toml") => Self::from_toml_file(path),
            Some("json") => Self::from_json_file(path),
            _ => Self::from_toml_file(path).or_else(|_| Self::from_json_file(path)),
        }
    }

    pub fn with_serde_defaults() -> Self {
        toml::from_str("").expect("Failed to create default preset")
    }

    fn with_base_dir(mut self, file: &Path) -> Self {
        self.base_dir = file.parent().map(Path::to_path_buf);
        self
    }

    pub fn vertex_path(&self) -> Option<PathBuf> {
        self.vertex.as_deref().map(|path| self.resolve(path))
    }

    pub fn fragment_path(&self) -> Option<PathBuf> {
        self.fragment.as_deref().map(|path| self.resolve(path))
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        match &self.base_dir {
            Some(dir) if path.is_relative() => dir.join(path),
            _ => path.to_path_buf(),
        }
    }

    /// Loads the stages named by the preset into `shader`.
    pub fn load<D: GraphicsDevice>(&self, shader: &mut Shader<'_, D>) -> Result<bool, PresetError> {
        let loaded = match (self.vertex_path(), self.fragment_path()) {
            (Some(vertex), Some(fragment)) => shader.load_from_files(vertex, fragment),
            (Some(vertex), None) => shader.load_from_file(vertex, ShaderType::Vertex),
            (None, Some(fragment)) => shader.load_from_file(fragment, ShaderType::Fragment),
            (None, None) => return Err(PresetError::NoStages),
        };
        Ok(loaded)
    }

    /// Uploads every configured uniform.
    ///
    /// Values are checked before anything is uploaded, so an invalid
    /// entry leaves the shader untouched.
    pub fn apply<D: GraphicsDevice>(&self, shader: &mut Shader<'_, D>) -> Result<(), PresetError> {
        for (name, setting) in &self.uniforms {
            setting.validate(name)?;
        }
        for (name, setting) in &self.uniforms {
            setting.apply(shader, name)?;
        }
        if let Some(name) = &self.current_texture {
            shader.set_uniform_current_texture(name);
        }
        Ok(())
    }
}

pub mod defaults {
    pub fn texture_units() -> u32 {
        16
    }
}

mod validators {
    use super::*;

    /// Keeps the unit count within what GL implementations expose.
    pub fn clamp_texture_units<'de, D>(deserializer: D) -> Result<u32, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = u32::deserialize(deserializer)?;
        Ok(value.clamp(1, 192))
    }
}
