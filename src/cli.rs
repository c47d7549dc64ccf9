// ShaderBG
// Copyright (c) 2025 Harlen Batagelo
// https://github.com/hbatagelo/shaderbg
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command-line interface.
//!
//! Produces a [`CliConfig`] from the arguments: an optional preset file,
//! optionally overridden by explicit stage paths.

use std::path::{Path, PathBuf};

use clap::{Arg, ArgAction, Command};
use thiserror::Error;

use glprogram::{preset::*, *};

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Preset error: {0}")]
    Preset(#[from] PresetError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

#[derive(Debug)]
pub struct CliConfig {
    /// Stages and uniform values to check.
    pub preset: Preset,

    /// Path of the preset file, if one was given.
    pub preset_path: Option<PathBuf>,

    /// Forces debug logging.
    pub verbose: bool,
}

/// Parses command-line arguments and resolves the preset.
///
/// `--vertex` and `--fragment` replace the stages named by the preset.
/// Without a preset, at least one of them is required.
pub fn parse_args() -> Result<CliConfig, CliError> {
    let matches = Command::new(APP_NAME)
        .author(APP_AUTHOR)
        .version(APP_SEMVER)
        .about(APP_ABOUT)
        .arg(
            Arg::new("preset")
                .value_name("PRESET")
                .help("Path to TOML or JSON program preset")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("vertex")
                .long("vertex")
                .short('v')
                .value_name("FILE")
                .help("Vertex shader source")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("fragment")
                .long("fragment")
                .short('f')
                .value_name("FILE")
                .help("Fragment shader source")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Print debug messages")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let preset_path = matches.get_one::<PathBuf>("preset").cloned();

    let mut preset = match &preset_path {
        Some(path) if !path.exists() => {
            return Err(CliError::InvalidInput(format!(
                "File not found: {}",
                path.display()
            )));
        }
        Some(path) => Preset::from_file(path)?,
        None => Preset::with_serde_defaults(),
    };

    // Explicit stages are relative to the working directory, not the preset.
    if let Some(vertex) = matches.get_one::<PathBuf>("vertex") {
        preset.vertex = Some(absolute(vertex));
    }
    if let Some(fragment) = matches.get_one::<PathBuf>("fragment") {
        preset.fragment = Some(absolute(fragment));
    }

    if preset.vertex.is_none() && preset.fragment.is_none() {
        return Err(CliError::InvalidInput(
            "no shader given; pass a preset, --vertex or --fragment".into(),
        ));
    }

    Ok(CliConfig {
        preset,
        preset_path,
        verbose: matches.get_flag("verbose"),
    })
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
