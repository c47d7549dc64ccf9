// ShaderBG
// Copyright (c) 2025 Harlen Batagelo
// https://github.com/hbatagelo/shaderbg
// SPDX-License-Identifier: GPL-3.0-or-later

//! Headless program check.
//!
//! Loads the preset's stages on a [`HeadlessDevice`], uploads its
//! uniforms, binds placeholder textures to every sampler and prints the
//! resulting uniform table.

use function_name::named;
use owo_colors::OwoColorize;

use glprogram::{
    device::{HeadlessDevice, HeadlessTexture},
    preset::Preset,
    shader::Shader,
    texture::Texture,
};

/// Runs the check and prints the report. Returns `false` on failure.
#[named]
pub fn run(preset: &Preset) -> bool {
    log::debug!("{}", function_name!().white().bold());

    let device = HeadlessDevice::new().with_max_texture_units(preset.texture_units);
    let mut shader = Shader::new(&device);

    match preset.load(&mut shader) {
        Ok(true) => {}
        Ok(false) => return false,
        Err(err) => {
            log::error!("{err}");
            return false;
        }
    }

    if let Err(err) = preset.apply(&mut shader) {
        log::error!("{err}");
        return false;
    }

    let placeholders = bind_placeholder_textures(&device, &mut shader, preset);
    let drawn_texture = device.create_texture();
    Shader::bind(&device, Some(&shader));
    let units = shader.bind_textures(Some(&drawn_texture as &dyn Texture));

    print_report(&device, &shader, units);
    log::debug!("{} placeholder textures", placeholders.len());
    true
}

/// Gives every sampler without an explicit texture one of its own.
fn bind_placeholder_textures(
    device: &HeadlessDevice,
    shader: &mut Shader<'_, HeadlessDevice>,
    preset: &Preset,
) -> Vec<HeadlessTexture> {
    let current = preset.current_texture.as_deref();
    device
        .active_uniforms(shader.native_handle())
        .into_iter()
        .filter(|uniform| uniform.type_name.starts_with("sampler"))
        .filter(|uniform| Some(uniform.name.as_str()) != current)
        .map(|uniform| {
            let texture = device.create_texture();
            shader.set_uniform_texture(&uniform.name, &texture);
            texture
        })
        .collect()
}

fn print_report(device: &HeadlessDevice, shader: &Shader<'_, HeadlessDevice>, units: u32) {
    let program = shader.native_handle();
    let uniforms = device.active_uniforms(program);

    println!("{} {program}", "Program".white().bold());
    if uniforms.is_empty() {
        println!("  no active uniforms");
    }

    for uniform in uniforms {
        let declaration = if uniform.size > 1 {
            format!("{} {}[{}]", uniform.type_name, uniform.name, uniform.size)
        } else {
            format!("{} {}", uniform.type_name, uniform.name)
        };
        let value = device
            .uniform_value(program, &uniform.name)
            .map(|value| format!("{value:?}"))
            .unwrap_or_else(|| "unset".dimmed().to_string());
        println!(
            "  {:>3}  {:<32} {}",
            uniform.location.cyan(),
            declaration,
            value
        );
    }

    println!("{} {units}", "Texture units".white().bold());
}
