use pretty_assertions::assert_eq;

use super::super::*;
use crate::texture::Texture;

const VERTEX: &str = r#"
#version 330 core
layout(location = 0) in vec2 position;
uniform mat4 transform;
void main() {
    gl_Position = transform * vec4(position, 0.0, 1.0);
}
"#;

const FRAGMENT: &str = r#"
#version 330 core
out vec4 color;
uniform float offset;
uniform vec4 tint;
uniform float weights[3];
uniform float unused;
uniform sampler2D image;
void main() {
    color = tint * texture(image, vec2(offset)) + vec4(weights[0] + weights[2]);
}
"#;

fn linked_program(device: &HeadlessDevice) -> u32 {
    let program = device.create_program();
    for (stage, source) in [(ShaderType::Vertex, VERTEX), (ShaderType::Fragment, FRAGMENT)] {
        let shader = device.compile_shader(stage, source).unwrap();
        device.attach_shader(program, shader);
        device.delete_shader(shader);
    }
    device.link_program(program).unwrap();
    program
}

#[test]
fn test_compile_rejects_missing_main() {
    let device = HeadlessDevice::new();
    let result = device.compile_shader(ShaderType::Fragment, "uniform float x;");
    assert!(matches!(
        result,
        Err(ShaderError::CompileError { stage: ShaderType::Fragment, .. })
    ));
    assert_eq!(device.shader_count(), 0);
}

#[test]
fn test_compile_rejects_unbalanced_source() {
    let device = HeadlessDevice::new();
    let result = device.compile_shader(ShaderType::Vertex, "void main() {");
    match result {
        Err(ShaderError::CompileError { log, .. }) => assert!(log.contains("unclosed")),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_active_uniform_locations() {
    let device = HeadlessDevice::new();
    let program = linked_program(&device);

    let uniforms: Vec<_> = device
        .active_uniforms(program)
        .into_iter()
        .map(|u| (u.name, u.location, u.size))
        .collect();
    assert_eq!(
        uniforms,
        vec![
            ("transform".to_string(), 0, 1),
            ("offset".to_string(), 1, 1),
            ("tint".to_string(), 2, 1),
            ("weights".to_string(), 3, 3),
            ("image".to_string(), 6, 1),
        ]
    );
}

#[test]
fn test_unused_uniform_has_no_location() {
    let device = HeadlessDevice::new();
    let program = linked_program(&device);
    assert_eq!(device.uniform_location(program, "unused"), INVALID_LOCATION);
    assert_eq!(device.uniform_location(program, "missing"), INVALID_LOCATION);
}

#[test]
fn test_array_element_locations() {
    let device = HeadlessDevice::new();
    let program = linked_program(&device);
    assert_eq!(device.uniform_location(program, "weights"), 3);
    assert_eq!(device.uniform_location(program, "weights[0]"), 3);
    assert_eq!(device.uniform_location(program, "weights[2]"), 5);
    assert_eq!(device.uniform_location(program, "weights[3]"), INVALID_LOCATION);
}

#[test]
fn test_link_rejects_conflicting_declarations() {
    let device = HeadlessDevice::new();
    let program = device.create_program();
    let vertex = device
        .compile_shader(
            ShaderType::Vertex,
            "uniform vec2 scale; void main() { gl_Position = vec4(scale, 0.0, 1.0); }",
        )
        .unwrap();
    let fragment = device
        .compile_shader(
            ShaderType::Fragment,
            "uniform float scale; out vec4 c; void main() { c = vec4(scale); }",
        )
        .unwrap();
    device.attach_shader(program, vertex);
    device.attach_shader(program, fragment);

    assert!(matches!(
        device.link_program(program),
        Err(ShaderError::LinkError(_))
    ));
}

#[test]
fn test_uniform_values_are_recorded_per_program() {
    let device = HeadlessDevice::new();
    let program = linked_program(&device);

    device.use_program(program);
    device.set_uniform(1, &UniformValue::Float(2.0));
    device.set_uniform(3, &UniformValue::FloatArray(vec![0.5, 1.5, 2.5, 3.5]));

    assert_eq!(
        device.uniform_value(program, "offset"),
        Some(UniformValue::Float(2.0))
    );
    assert_eq!(
        device.uniform_value(program, "weights[1]"),
        Some(UniformValue::Float(1.5))
    );
    assert_eq!(
        device.uniform_value(program, "weights[2]"),
        Some(UniformValue::Float(2.5))
    );
}

#[test]
fn test_mismatched_upload_is_ignored() {
    let device = HeadlessDevice::new();
    let program = linked_program(&device);

    device.use_program(program);
    device.set_uniform(1, &UniformValue::Int(3));
    assert_eq!(device.uniform_value(program, "offset"), None);
}

#[test]
fn test_upload_without_active_program_is_ignored() {
    let device = HeadlessDevice::new();
    let program = linked_program(&device);

    device.set_uniform(1, &UniformValue::Float(2.0));
    assert_eq!(device.uniform_value(program, "offset"), None);
}

#[test]
fn test_deleting_active_program_clears_it() {
    let device = HeadlessDevice::new();
    let program = linked_program(&device);

    device.use_program(program);
    assert_eq!(device.current_program(), program);
    device.delete_program(program);
    assert_eq!(device.current_program(), 0);
    assert!(!device.program_exists(program));
}

#[test]
fn test_texture_units() {
    let device = HeadlessDevice::new().with_max_texture_units(4);
    let texture = device.create_texture();

    device.active_texture(2);
    device.bind_texture(texture.native_handle());
    assert_eq!(device.bound_texture(2), Some(texture.native_handle()));
    assert_eq!(device.active_texture_unit(), 2);

    device.active_texture(4);
    assert_eq!(device.active_texture_unit(), 2);
}

#[test]
fn test_unsupported_device() {
    assert!(!HeadlessDevice::unsupported().is_supported());
    assert!(HeadlessDevice::default().is_supported());
}
