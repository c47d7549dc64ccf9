// ShaderBG
// Copyright (c) 2025 Harlen Batagelo
// https://github.com/hbatagelo/shaderbg
// SPDX-License-Identifier: GPL-3.0-or-later

use std::{
    fs,
    io::Read,
    path::{Path, PathBuf},
};

use super::ShaderError;
use crate::{device::ShaderType, APP_NAME};

pub fn read_file(path: &Path) -> Result<String, ShaderError> {
    fs::read_to_string(path).map_err(|source| ShaderError::SourceRead {
        origin: format!("file \"{}\"", path.display()),
        source,
    })
}

/// Reads the remainder of `stream` as UTF-8 text.
pub fn read_stream<R: Read>(stream: &mut R) -> Result<String, ShaderError> {
    let mut source = String::new();
    stream
        .read_to_string(&mut source)
        .map_err(|source| ShaderError::SourceRead {
            origin: "stream".into(),
            source,
        })?;
    Ok(source)
}

/// Saves a stage that failed to compile so it can be inspected.
///
/// Only done when debug logging is enabled. Returns the written path.
pub fn save_failed_source(stage: ShaderType, source: &str) -> Option<PathBuf> {
    if !log::log_enabled!(log::Level::Debug) {
        return None;
    }

    let file = log_dir()?.join(format!("{stage}.glsl"));
    match fs::write(&file, source) {
        Ok(()) => Some(file),
        Err(err) => {
            log::warn!("Failed to save shader source to {}: {err}", file.display());
            None
        }
    }
}

fn log_dir() -> Option<PathBuf> {
    let Some(dir) = dirs::cache_dir().map(|p| p.join(APP_NAME)) else {
        log::warn!("Could not find $XDG_CACHE_HOME or $HOME/.cache; not saving shader source.");
        return None;
    };

    if !dir.exists() {
        if let Err(err) = fs::create_dir_all(&dir) {
            log::warn!("Failed to create log directory at {}: {err}", dir.display());
            return None;
        }
    }

    Some(dir)
}
