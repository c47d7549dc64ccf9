use pretty_assertions::assert_eq;

use super::common::*;
use crate::{
    device::{GraphicsDevice, HeadlessDevice, ShaderType, UniformValue},
    geometry::*,
    shader::Shader,
};

fn wave(device: &HeadlessDevice) -> Shader<'_, HeadlessDevice> {
    let mut shader = Shader::new(device);
    assert!(shader.load_from_sources(VERTEX, WAVE));
    shader
}

#[test]
fn test_scalars() {
    let device = HeadlessDevice::new();
    let mut shader = wave(&device);
    let program = shader.native_handle();

    shader.set_uniform_float("offset", 0.25);
    shader.set_uniform_int("mode", 3);
    shader.set_uniform_bool("enabled", true);

    assert_eq!(device.uniform_value(program, "offset"), Some(UniformValue::Float(0.25)));
    assert_eq!(device.uniform_value(program, "mode"), Some(UniformValue::Int(3)));
    assert_eq!(device.uniform_value(program, "enabled"), Some(UniformValue::Int(1)));
}

#[test]
fn test_vectors() {
    let device = HeadlessDevice::new();
    let mut shader = wave(&device);
    let program = shader.native_handle();

    shader.set_uniform_vec2("resolution", Vec2::new(800.0, 600.0));
    shader.set_uniform_vec4("tint", Vec4::new(0.1, 0.2, 0.3, 0.4));
    shader.set_uniform_ivec2("cell", IVec2::new(-2, 7));
    shader.set_uniform_bvec3("mask", BVec3::new(true, false, true));

    assert_eq!(
        device.uniform_value(program, "resolution"),
        Some(UniformValue::Vec2([800.0, 600.0]))
    );
    assert_eq!(
        device.uniform_value(program, "tint"),
        Some(UniformValue::Vec4([0.1, 0.2, 0.3, 0.4]))
    );
    assert_eq!(
        device.uniform_value(program, "cell"),
        Some(UniformValue::IVec2([-2, 7]))
    );
    assert_eq!(
        device.uniform_value(program, "mask"),
        Some(UniformValue::IVec3([1, 0, 1]))
    );
}

#[test]
fn test_color_is_normalized() {
    let device = HeadlessDevice::new();
    let mut shader = wave(&device);

    shader.set_uniform_color("tint", Color::rgba(255, 128, 0, 255));

    let Some(UniformValue::Vec4([r, g, b, a])) =
        device.uniform_value(shader.native_handle(), "tint")
    else {
        panic!("tint was not written as a vec4");
    };
    assert_eq!((r, b, a), (1.0, 0.0, 1.0));
    assert!((g - 0.502).abs() < 1e-3);
}

#[test]
fn test_matrices() {
    let device = HeadlessDevice::new();
    let mut shader = wave(&device);
    let program = shader.native_handle();

    let rotation = Mat3::from_columns([[0.0, 1.0, 0.0], [-1.0, 0.0, 0.0], [0.0, 0.0, 1.0]]);
    shader.set_uniform_mat3("rotation", &rotation);
    assert_eq!(
        device.uniform_value(program, "rotation"),
        Some(UniformValue::Mat3([0.0, 1.0, 0.0, -1.0, 0.0, 0.0, 0.0, 0.0, 1.0]))
    );

    let transform = Transform::IDENTITY.translate(10.0, -4.0).scale(2.0, 2.0);
    shader.set_uniform_transform("transform", &transform);
    assert_eq!(
        device.uniform_value(program, "transform"),
        Some(UniformValue::Mat4([
            2.0, 0.0, 0.0, 0.0, //
            0.0, 2.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            10.0, -4.0, 0.0, 1.0,
        ]))
    );
}

#[test]
fn test_arrays() {
    let device = HeadlessDevice::new();
    let mut shader = wave(&device);
    let program = shader.native_handle();

    shader.set_uniform_float_array("weights", &[0.1, 0.2, 0.3, 0.4]);
    shader.set_uniform_vec3_array(
        "lights",
        &[Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 1.0)],
    );

    assert_eq!(device.uniform_value(program, "weights[3]"), Some(UniformValue::Float(0.4)));
    assert_eq!(
        device.uniform_value(program, "lights[1]"),
        Some(UniformValue::Vec3([0.0, 0.0, 1.0]))
    );
}

#[test]
fn test_array_element_by_name() {
    let device = HeadlessDevice::new();
    let mut shader = wave(&device);
    let program = shader.native_handle();

    shader.set_uniform_float("weights[2]", 5.0);

    assert_eq!(device.uniform_value(program, "weights[2]"), Some(UniformValue::Float(5.0)));
    assert_eq!(device.uniform_value(program, "weights[0]"), None);
}

#[test]
fn test_last_write_wins() {
    let device = HeadlessDevice::new();
    let mut shader = wave(&device);

    shader.set_uniform_float("offset", 1.0);
    shader.set_uniform_float("offset", 2.0);

    assert_eq!(
        device.uniform_value(shader.native_handle(), "offset"),
        Some(UniformValue::Float(2.0))
    );
}

#[test]
fn test_setter_leaves_program_active() {
    let device = HeadlessDevice::new();
    let mut shader = wave(&device);
    assert_eq!(device.current_program(), 0);

    shader.set_uniform_float("offset", 1.0);
    assert_eq!(device.current_program(), shader.native_handle());
}

#[test]
fn test_unknown_uniform_is_ignored() {
    let device = HeadlessDevice::new();
    let mut shader = wave(&device);

    shader.set_uniform_float("missing", 1.0);
    shader.set_uniform_vec2("missing", Vec2::new(1.0, 2.0));

    assert_eq!(device.current_program(), 0);
    assert_eq!(device.uniform_value(shader.native_handle(), "missing"), None);
}

#[test]
fn test_unloaded_shader_ignores_setters() {
    let device = HeadlessDevice::new();
    let mut shader = Shader::new(&device);

    shader.set_uniform_float("offset", 1.0);
    shader.set_uniform_mat4("transform", &Mat4::identity());

    assert_eq!(device.current_program(), 0);
}

#[test]
fn test_driver_rejects_mismatched_type() {
    let device = HeadlessDevice::new();
    let mut shader = Shader::new(&device);
    assert!(shader.load_from_memory(WAVE, ShaderType::Fragment));

    shader.set_uniform_int("offset", 2);
    assert_eq!(device.uniform_value(shader.native_handle(), "offset"), None);
}

#[test]
fn test_location_cache() {
    let device = HeadlessDevice::new();
    let mut shader = wave(&device);

    assert_eq!(shader.uniform_location("tint"), 3);
    assert_eq!(shader.uniform_location("tint"), 3);
    assert_eq!(shader.uniform_location("missing"), -1);
    assert_eq!(shader.locations.len(), 2);
}
