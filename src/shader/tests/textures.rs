use pretty_assertions::assert_eq;

use super::common::*;
use crate::{
    device::{GraphicsDevice, HeadlessDevice, ShaderType, UniformValue},
    shader::Shader,
    texture::{Texture, TextureHandle},
};

fn layers(device: &HeadlessDevice) -> Shader<'_, HeadlessDevice> {
    let mut shader = Shader::new(device);
    assert!(shader.load_from_memory(LAYERS, ShaderType::Fragment));
    shader
}

#[test]
fn test_textures_are_bound_in_location_order() {
    let device = HeadlessDevice::new();
    let mut shader = layers(&device);
    let program = shader.native_handle();
    let overlay = device.create_texture();
    let background = device.create_texture();
    let drawn = device.create_texture();

    shader.set_uniform_texture("background", &background);
    shader.set_uniform_texture("overlay", &overlay);
    shader.set_uniform_current_texture("current");
    assert_eq!(device.bound_texture(0), None);

    let units = shader.bind_textures(Some(&drawn as &dyn Texture));

    assert_eq!(units, 3);
    assert_eq!(device.bound_texture(0), Some(overlay.native_handle()));
    assert_eq!(device.bound_texture(1), Some(background.native_handle()));
    assert_eq!(device.bound_texture(2), Some(drawn.native_handle()));
    assert_eq!(device.uniform_value(program, "overlay"), Some(UniformValue::Int(0)));
    assert_eq!(device.uniform_value(program, "background"), Some(UniformValue::Int(1)));
    assert_eq!(device.uniform_value(program, "current"), Some(UniformValue::Int(2)));
    assert_eq!(device.active_texture_unit(), 0);
    assert_eq!(device.current_program(), program);
}

#[test]
fn test_binding_is_deterministic() {
    let device = HeadlessDevice::new();
    let mut shader = layers(&device);
    shader.set_uniform_texture("overlay", &TextureHandle(40));
    shader.set_uniform_texture("background", &TextureHandle(41));

    for _ in 0..3 {
        assert_eq!(shader.bind_textures(None), 2);
        assert_eq!(device.bound_texture(0), Some(40));
        assert_eq!(device.bound_texture(1), Some(41));
    }
}

#[test]
fn test_replacing_a_texture_keeps_one_entry() {
    let device = HeadlessDevice::new();
    let mut shader = layers(&device);

    shader.set_uniform_texture("overlay", &TextureHandle(7));
    shader.set_uniform_texture("overlay", &TextureHandle(8));

    assert_eq!(shader.texture_count(), 1);
    shader.bind_textures(None);
    assert_eq!(device.bound_texture(0), Some(8));
}

#[test]
fn test_current_texture_replaces_fixed_texture() {
    let device = HeadlessDevice::new();
    let mut shader = layers(&device);

    shader.set_uniform_texture("background", &TextureHandle(5));
    shader.set_uniform_current_texture("background");

    assert_eq!(shader.texture_count(), 0);
    assert_eq!(shader.current_texture_location(), Some(2));
}

#[test]
fn test_fixed_texture_replaces_current_texture() {
    let device = HeadlessDevice::new();
    let mut shader = layers(&device);

    shader.set_uniform_current_texture("current");
    shader.set_uniform_texture("current", &TextureHandle(5));

    assert_eq!(shader.current_texture_location(), None);
    assert_eq!(shader.texture_count(), 1);
}

#[test]
fn test_current_texture_needs_a_texture() {
    let device = HeadlessDevice::new();
    let mut shader = layers(&device);
    shader.set_uniform_current_texture("current");

    assert_eq!(shader.bind_textures(None), 0);
    assert_eq!(device.bound_texture(0), None);
}

#[test]
fn test_drawn_texture_without_current_sampler_is_unused() {
    let device = HeadlessDevice::new();
    let mut shader = layers(&device);
    shader.set_uniform_texture("overlay", &TextureHandle(3));

    assert_eq!(shader.bind_textures(Some(&TextureHandle(9))), 1);
    assert_eq!(device.bound_texture(1), None);
}

#[test]
fn test_one_unit_is_reserved() {
    let device = HeadlessDevice::new().with_max_texture_units(3);
    let mut shader = layers(&device);

    shader.set_uniform_texture("overlay", &TextureHandle(1));
    shader.set_uniform_texture("background", &TextureHandle(2));
    shader.set_uniform_texture("current", &TextureHandle(3));
    assert_eq!(shader.texture_count(), 2);

    // Existing samplers can still change texture.
    shader.set_uniform_texture("overlay", &TextureHandle(4));
    shader.bind_textures(None);
    assert_eq!(device.bound_texture(0), Some(4));
}

#[test]
fn test_unknown_sampler_is_ignored() {
    let device = HeadlessDevice::new();
    let mut shader = layers(&device);

    shader.set_uniform_texture("missing", &TextureHandle(1));
    shader.set_uniform_current_texture("missing");

    assert_eq!(shader.texture_count(), 0);
    assert_eq!(shader.current_texture_location(), None);
}

#[test]
fn test_reload_forgets_textures() {
    let device = HeadlessDevice::new();
    let mut shader = layers(&device);
    shader.set_uniform_texture("overlay", &TextureHandle(1));
    shader.set_uniform_current_texture("current");

    assert!(shader.load_from_memory(LAYERS, ShaderType::Fragment));

    assert_eq!(shader.texture_count(), 0);
    assert_eq!(shader.current_texture_location(), None);
}

#[test]
fn test_unloaded_shader_binds_nothing() {
    let device = HeadlessDevice::new();
    let mut shader = Shader::new(&device);
    shader.set_uniform_texture("overlay", &TextureHandle(1));

    assert_eq!(shader.bind_textures(Some(&TextureHandle(2))), 0);
    assert_eq!(device.current_program(), 0);
    assert_eq!(device.bound_texture(0), None);
}
