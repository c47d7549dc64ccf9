// ShaderBG
// Copyright (c) 2025 Harlen Batagelo
// https://github.com/hbatagelo/shaderbg
// SPDX-License-Identifier: GPL-3.0-or-later

//! OpenGL shader programs with cached uniform locations and deferred
//! texture binding.
//!
//! ```no_run
//! use glprogram::{device::HeadlessDevice, shader::Shader};
//!
//! let device = HeadlessDevice::new();
//! let mut shader = Shader::new(&device);
//! if shader.load_from_files("quad.vert", "wave.frag") {
//!     shader.set_uniform_float("offset", 2.0);
//!     shader.bind_textures(None);
//! }
//! ```

pub mod device;
pub mod geometry;
pub mod preset;
pub mod shader;
pub mod texture;

pub const APP_NAME: &str = "glprogram";
pub const APP_ABOUT: &str = "Load GLSL programs headlessly and report their uniforms";
pub const APP_AUTHOR: &str = "Harlen Batagelo, hbatagelo@gmail.com";
pub const APP_SEMVER: &str = "1.0.0";
