// ShaderBG
// Copyright (c) 2025 Harlen Batagelo
// https://github.com/hbatagelo/shaderbg
// SPDX-License-Identifier: GPL-3.0-or-later

use gl::types::*;
use owo_colors::OwoColorize;
use std::ffi::CStr;

/// Extensions that provide `glDebugMessageCallback`.
const DEBUG_EXTENSIONS: [&str; 2] = ["GL_KHR_debug", "GL_ARB_debug_output"];

/// Installs a synchronous debug callback when the context supports one.
///
/// Returns `false` when no debug extension is exposed.
pub fn setup_opengl_debugging() -> bool {
    if !gl::DebugMessageCallback::is_loaded() || !supports_debug_extension() {
        log::debug!("GL debug output unavailable");
        return false;
    }

    unsafe {
        gl::Enable(gl::DEBUG_OUTPUT);
        gl::Enable(gl::DEBUG_OUTPUT_SYNCHRONOUS);
        gl::DebugMessageCallback(Some(gl_debug_callback), std::ptr::null());
        // Shader compiler chatter is reported through the compile log instead.
        gl::DebugMessageControl(
            gl::DEBUG_SOURCE_SHADER_COMPILER,
            gl::DONT_CARE,
            gl::DONT_CARE,
            0,
            std::ptr::null(),
            gl::FALSE,
        );
    }
    true
}

fn supports_debug_extension() -> bool {
    let mut num_extensions = 0;
    unsafe { gl::GetIntegerv(gl::NUM_EXTENSIONS, &mut num_extensions) };

    (0..num_extensions.max(0) as GLuint).any(|i| {
        let ptr = unsafe { gl::GetStringi(gl::EXTENSIONS, i) };
        if ptr.is_null() {
            return false;
        }
        let extension = unsafe { CStr::from_ptr(ptr as *const _) }.to_string_lossy();
        DEBUG_EXTENSIONS.contains(&&*extension)
    })
}

fn source_name(source: GLenum) -> &'static str {
    match source {
        gl::DEBUG_SOURCE_API => "API",
        gl::DEBUG_SOURCE_WINDOW_SYSTEM => "WINDOW_SYSTEM",
        gl::DEBUG_SOURCE_SHADER_COMPILER => "SHADER_COMPILER",
        gl::DEBUG_SOURCE_THIRD_PARTY => "THIRD_PARTY",
        gl::DEBUG_SOURCE_APPLICATION => "APPLICATION",
        gl::DEBUG_SOURCE_OTHER => "OTHER",
        _ => "UNKNOWN",
    }
}

fn type_name(type_: GLenum) -> &'static str {
    match type_ {
        gl::DEBUG_TYPE_ERROR => "ERROR",
        gl::DEBUG_TYPE_DEPRECATED_BEHAVIOR => "DEPRECATED_BEHAVIOR",
        gl::DEBUG_TYPE_UNDEFINED_BEHAVIOR => "UNDEFINED_BEHAVIOR",
        gl::DEBUG_TYPE_PORTABILITY => "PORTABILITY",
        gl::DEBUG_TYPE_PERFORMANCE => "PERFORMANCE",
        gl::DEBUG_TYPE_OTHER => "OTHER",
        _ => "UNKNOWN",
    }
}

extern "system" fn gl_debug_callback(
    source: GLenum,
    type_: GLenum,
    id: GLuint,
    severity: GLenum,
    _length: GLsizei,
    message: *const GLchar,
    _user_param: *mut std::ffi::c_void,
) {
    if message.is_null() {
        return;
    }
    let msg = unsafe { CStr::from_ptr(message).to_string_lossy() };
    let tag = "[GL DEBUG]".white().bold().to_string();
    let source = source_name(source);
    let type_ = type_name(type_);

    // Errors in uniform uploads usually mean a type mismatch between the
    // setter and the GLSL declaration.
    match severity {
        gl::DEBUG_SEVERITY_HIGH => log::error!("{tag} {source}/{type_} #{id}: {msg}"),
        gl::DEBUG_SEVERITY_MEDIUM => log::warn!("{tag} {source}/{type_} #{id}: {msg}"),
        gl::DEBUG_SEVERITY_LOW => log::debug!("{tag} {source}/{type_} #{id}: {msg}"),
        _ => log::trace!("{tag} {source}/{type_} #{id}: {msg}"),
    }
}
