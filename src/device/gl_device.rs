// ShaderBG
// Copyright (c) 2025 Harlen Batagelo
// https://github.com/hbatagelo/shaderbg
// SPDX-License-Identifier: GPL-3.0-or-later

use gl::types::*;
use std::{cell::OnceCell, ffi::CString, marker::PhantomData, os::raw::c_void};

use super::{GraphicsDevice, ShaderType, UniformValue, INVALID_LOCATION};
use crate::shader::ShaderError;

/// [`GraphicsDevice`] backed by the current OpenGL context.
///
/// The caller creates the context and makes it current on this thread
/// before loading the device. The device is neither `Send` nor `Sync`
/// since GL contexts are bound to a single thread.
pub struct GlDevice {
    supported: OnceCell<bool>,
    max_texture_units: OnceCell<u32>,
    // Keeps libepoxy mapped while its function pointers are in use.
    #[cfg(unix)]
    _epoxy: Option<libloading::os::unix::Library>,
    _not_send: PhantomData<*const ()>,
}

impl GlDevice {
    /// Loads GL entry points through `loader` (e.g. `glfwGetProcAddress`).
    pub fn load_with<F>(loader: F) -> Self
    where
        F: FnMut(&'static str) -> *const c_void,
    {
        gl::load_with(loader);
        Self {
            supported: OnceCell::new(),
            max_texture_units: OnceCell::new(),
            #[cfg(unix)]
            _epoxy: None,
            _not_send: PhantomData,
        }
    }

    /// Loads GL entry points through libepoxy.
    ///
    /// Useful with toolkits such as GTK that create the context but do
    /// not expose symbol loading.
    #[cfg(unix)]
    pub fn from_epoxy() -> Result<Self, Box<dyn std::error::Error>> {
        let library = unsafe {
            libloading::os::unix::Library::new("libepoxy.so.0")
                .map_err(|err| format!("Failed to load libepoxy.so.0: {}", err))?
        };

        epoxy::load_with(|name| {
            unsafe { library.get::<_>(name.as_bytes()) }
                .map(|symbol| *symbol)
                .unwrap_or(std::ptr::null())
        });

        gl::load_with(epoxy::get_proc_addr);

        let version = unsafe { gl::GetString(gl::VERSION) };
        if version.is_null() {
            return Err("GL functions not loaded properly".into());
        }

        Ok(Self {
            supported: OnceCell::new(),
            max_texture_units: OnceCell::new(),
            _epoxy: Some(library),
            _not_send: PhantomData,
        })
    }

    /// Routes `GL_KHR_debug` messages to the log.
    #[cfg(debug_assertions)]
    pub fn enable_debug_output(&self) -> bool {
        super::check_gl_error::setup_opengl_debugging()
    }
}

impl GraphicsDevice for GlDevice {
    fn is_supported(&self) -> bool {
        *self.supported.get_or_init(|| {
            let supported = gl::CreateProgram::is_loaded()
                && gl::CreateShader::is_loaded()
                && gl::LinkProgram::is_loaded()
                && gl::UseProgram::is_loaded()
                && gl::GetUniformLocation::is_loaded();
            if !supported {
                log::warn!("Shader entry points are missing from the current GL context");
            }
            supported
        })
    }

    fn create_program(&self) -> GLuint {
        unsafe { gl::CreateProgram() }
    }

    fn delete_program(&self, program: GLuint) {
        unsafe { gl::DeleteProgram(program) };
    }

    fn compile_shader(&self, stage: ShaderType, source: &str) -> Result<GLuint, ShaderError> {
        let source = CString::new(source)?;
        unsafe {
            let id = gl::CreateShader(stage.gl_enum());
            gl::ShaderSource(id, 1, &source.as_ptr(), std::ptr::null());
            gl::CompileShader(id);

            let mut success = 0;
            gl::GetShaderiv(id, gl::COMPILE_STATUS, &mut success);
            if success == 0 {
                let mut log_len = 0;
                gl::GetShaderiv(id, gl::INFO_LOG_LENGTH, &mut log_len);
                let mut log = Vec::with_capacity(log_len.max(0) as usize);
                gl::GetShaderInfoLog(id, log_len, &mut log_len, log.as_mut_ptr() as *mut _);
                log.set_len(log_len.max(0) as usize);
                gl::DeleteShader(id);
                Err(ShaderError::CompileError {
                    stage,
                    log: String::from_utf8(log)?,
                })
            } else {
                Ok(id)
            }
        }
    }

    fn delete_shader(&self, shader: GLuint) {
        unsafe { gl::DeleteShader(shader) };
    }

    fn attach_shader(&self, program: GLuint, shader: GLuint) {
        unsafe { gl::AttachShader(program, shader) };
    }

    fn link_program(&self, program: GLuint) -> Result<(), ShaderError> {
        unsafe {
            gl::LinkProgram(program);

            let mut success = 0;
            gl::GetProgramiv(program, gl::LINK_STATUS, &mut success);
            if success == 0 {
                let mut log_len = 0;
                gl::GetProgramiv(program, gl::INFO_LOG_LENGTH, &mut log_len);
                let mut log = Vec::with_capacity(log_len.max(0) as usize);
                gl::GetProgramInfoLog(program, log_len, &mut log_len, log.as_mut_ptr() as *mut _);
                log.set_len(log_len.max(0) as usize);
                Err(ShaderError::LinkError(String::from_utf8(log)?))
            } else {
                Ok(())
            }
        }
    }

    fn uniform_location(&self, program: GLuint, name: &str) -> GLint {
        match CString::new(name) {
            Ok(name) => unsafe { gl::GetUniformLocation(program, name.as_ptr()) },
            Err(_) => INVALID_LOCATION,
        }
    }

    fn use_program(&self, program: GLuint) {
        unsafe { gl::UseProgram(program) };
    }

    fn current_program(&self) -> GLuint {
        let mut program = 0;
        unsafe { gl::GetIntegerv(gl::CURRENT_PROGRAM, &mut program) };
        program as GLuint
    }

    fn set_uniform(&self, location: GLint, value: &UniformValue) {
        let count = value.element_count() as GLsizei;
        unsafe {
            match value {
                UniformValue::Float(x) => gl::Uniform1f(location, *x),
                UniformValue::Vec2([x, y]) => gl::Uniform2f(location, *x, *y),
                UniformValue::Vec3([x, y, z]) => gl::Uniform3f(location, *x, *y, *z),
                UniformValue::Vec4([x, y, z, w]) => gl::Uniform4f(location, *x, *y, *z, *w),
                UniformValue::Int(x) => gl::Uniform1i(location, *x),
                UniformValue::IVec2([x, y]) => gl::Uniform2i(location, *x, *y),
                UniformValue::IVec3([x, y, z]) => gl::Uniform3i(location, *x, *y, *z),
                UniformValue::IVec4([x, y, z, w]) => gl::Uniform4i(location, *x, *y, *z, *w),
                UniformValue::Mat3(m) => gl::UniformMatrix3fv(location, 1, gl::FALSE, m.as_ptr()),
                UniformValue::Mat4(m) => gl::UniformMatrix4fv(location, 1, gl::FALSE, m.as_ptr()),
                UniformValue::FloatArray(v) => gl::Uniform1fv(location, count, v.as_ptr()),
                UniformValue::Vec2Array(v) => {
                    gl::Uniform2fv(location, count, v.as_ptr() as *const GLfloat)
                }
                UniformValue::Vec3Array(v) => {
                    gl::Uniform3fv(location, count, v.as_ptr() as *const GLfloat)
                }
                UniformValue::Vec4Array(v) => {
                    gl::Uniform4fv(location, count, v.as_ptr() as *const GLfloat)
                }
                UniformValue::Mat3Array(v) => {
                    gl::UniformMatrix3fv(location, count, gl::FALSE, v.as_ptr() as *const GLfloat)
                }
                UniformValue::Mat4Array(v) => {
                    gl::UniformMatrix4fv(location, count, gl::FALSE, v.as_ptr() as *const GLfloat)
                }
            }
        }
    }

    fn max_texture_units(&self) -> u32 {
        *self.max_texture_units.get_or_init(|| {
            let mut units = 0;
            unsafe { gl::GetIntegerv(gl::MAX_COMBINED_TEXTURE_IMAGE_UNITS, &mut units) };
            units.max(1) as u32
        })
    }

    fn active_texture(&self, unit: u32) {
        unsafe { gl::ActiveTexture(gl::TEXTURE0 + unit) };
    }

    fn bind_texture(&self, texture: GLuint) {
        unsafe { gl::BindTexture(gl::TEXTURE_2D, texture) };
    }

    fn flush(&self) {
        unsafe { gl::Flush() };
    }
}
