// ShaderBG
// Copyright (c) 2025 Harlen Batagelo
// https://github.com/hbatagelo/shaderbg
// SPDX-License-Identifier: GPL-3.0-or-later

mod check;
mod cli;

use std::process::ExitCode;

fn main() -> ExitCode {
    let config = cli::parse_args();
    let verbose = config.as_ref().is_ok_and(|config| config.verbose);

    simple_logger::SimpleLogger::new()
        .with_level(if cfg!(debug_assertions) || verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .init()
        .unwrap();

    let config = match config {
        Ok(config) => config,
        Err(err) => {
            log::error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    if let Some(path) = &config.preset_path {
        log::info!("Loaded {}", path.display());
    }

    if check::run(&config.preset) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
