use std::path::PathBuf;

pub const VERTEX: &str = r#"
#version 330 core
layout(location = 0) in vec2 position;
out vec2 uv;
uniform mat4 transform;
void main() {
    uv = position * 0.5 + 0.5;
    gl_Position = transform * vec4(position, 0.0, 1.0);
}
"#;

/// Uses one uniform of every shape the setters can upload.
pub const WAVE: &str = r#"
#version 330 core
in vec2 uv;
out vec4 color;
uniform float offset;
uniform vec2 resolution;
uniform vec4 tint;
uniform int mode;
uniform bool enabled;
uniform bvec3 mask;
uniform ivec2 cell;
uniform mat3 rotation;
uniform float weights[4];
uniform vec3 lights[2];
void main() {
    vec3 p = rotation * vec3(uv * resolution, offset);
    float w = weights[0] + weights[3];
    if (enabled && mask.x && mode > cell.y) {
        p += lights[0] + lights[1];
    }
    color = tint * vec4(p, w);
}
"#;

/// Same stage without `offset`.
pub const FLAT: &str = r#"
#version 330 core
out vec4 color;
uniform vec4 tint;
void main() {
    color = tint;
}
"#;

/// Samplers at locations 0 (`overlay`), 1 (`current`) and 2 (`background`).
pub const LAYERS: &str = r#"
#version 330 core
in vec2 uv;
out vec4 color;
uniform sampler2D overlay;
uniform sampler2D current;
uniform sampler2D background;
void main() {
    vec4 base = texture(background, uv) * texture(current, uv);
    color = mix(base, texture(overlay, uv), 0.5);
}
"#;

/// Writes `contents` to a file unique to this test process.
pub fn temp_source(name: &str, contents: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("glprogram-tests-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}
