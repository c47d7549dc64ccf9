// ShaderBG
// Copyright (c) 2025 Harlen Batagelo
// https://github.com/hbatagelo/shaderbg
// SPDX-License-Identifier: GPL-3.0-or-later

use std::io;

use crate::device::ShaderType;

#[allow(clippy::enum_variant_names)]
#[derive(Debug, thiserror::Error)]
pub enum ShaderError {
    #[error("Failed to read shader source from {origin}: {source}")]
    SourceRead {
        origin: String,
        #[source]
        source: io::Error,
    },
    #[error("Failed to compile {stage} shader: {log}")]
    CompileError { stage: ShaderType, log: String },
    #[error("Failed to link shader program: {0}")]
    LinkError(String),
    #[error("Failed to create a shader: the graphics context does not support shaders")]
    CapabilityUnavailable,
    #[error{"{0}"}]
    Utf8Error(#[from] std::string::FromUtf8Error),
    #[error{"{0}"}]
    NulError(#[from] std::ffi::NulError),
}
