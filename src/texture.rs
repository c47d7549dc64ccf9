// ShaderBG
// Copyright (c) 2025 Harlen Batagelo
// https://github.com/hbatagelo/shaderbg
// SPDX-License-Identifier: GPL-3.0-or-later

use gl::types::*;

/// A GPU texture owned outside of this crate.
///
/// Shaders only remember the native handle. The owner must keep the
/// texture alive for as long as any shader that samples it is in use.
pub trait Texture {
    fn native_handle(&self) -> GLuint;
}

/// Borrowed view of a texture by its raw GL name.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub GLuint);

impl Texture for TextureHandle {
    fn native_handle(&self) -> GLuint {
        self.0
    }
}

impl<T> Texture for &T
where
    T: Texture + ?Sized,
{
    fn native_handle(&self) -> GLuint {
        (**self).native_handle()
    }
}
