// ShaderBG
// Copyright (c) 2025 Harlen Batagelo
// https://github.com/hbatagelo/shaderbg
// SPDX-License-Identifier: GPL-3.0-or-later

use gl::types::*;
use std::{cell::RefCell, collections::HashMap};

use super::{glsl_scan::*, GraphicsDevice, ShaderType, UniformValue, INVALID_LOCATION};
use crate::{shader::ShaderError, texture::Texture};

/// Texture units exposed when none are configured.
const DEFAULT_TEXTURE_UNITS: u32 = 16;

/// Texture created by a [`HeadlessDevice`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct HeadlessTexture {
    id: GLuint,
}

impl Texture for HeadlessTexture {
    fn native_handle(&self) -> GLuint {
        self.id
    }
}

/// A uniform that survived linking.
#[derive(Clone, Debug, PartialEq)]
pub struct ActiveUniform {
    pub name: String,
    pub type_name: String,
    pub location: GLint,
    /// Number of array elements, 1 for plain uniforms.
    pub size: usize,
}

struct CompiledStage {
    stage: ShaderType,
    source: String,
    declarations: Vec<UniformDeclaration>,
}

#[derive(Default)]
struct ProgramObject {
    stages: Vec<ShaderType>,
    sources: Vec<String>,
    declarations: Vec<UniformDeclaration>,
    linked: bool,
    uniforms: Vec<ActiveUniform>,
    values: HashMap<GLint, UniformValue>,
}

impl ProgramObject {
    fn uniform_at(&self, location: GLint) -> Option<&ActiveUniform> {
        self.uniforms.iter().find(|uniform| {
            location >= uniform.location && location < uniform.location + uniform.size as GLint
        })
    }
}

#[derive(Default)]
struct State {
    next_id: GLuint,
    shaders: HashMap<GLuint, CompiledStage>,
    programs: HashMap<GLuint, ProgramObject>,
    current_program: GLuint,
    active_unit: u32,
    bound_textures: HashMap<u32, GLuint>,
    flushes: usize,
}

impl State {
    fn next_id(&mut self) -> GLuint {
        self.next_id += 1;
        self.next_id
    }
}

/// Software [`GraphicsDevice`] that needs no window or GPU.
///
/// Sources are scanned rather than compiled: a stage compiles when its
/// brackets balance and it defines `main`, and a program links when its
/// stages agree on the type of every shared uniform. Like real drivers,
/// uniforms that are declared but never referenced are dropped at link
/// time and report an invalid location.
///
/// Every uniform upload, program switch and texture binding is recorded
/// and can be inspected afterwards.
pub struct HeadlessDevice {
    supported: bool,
    max_texture_units: u32,
    state: RefCell<State>,
}

impl Default for HeadlessDevice {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlessDevice {
    pub fn new() -> Self {
        Self {
            supported: true,
            max_texture_units: DEFAULT_TEXTURE_UNITS,
            state: RefCell::new(State::default()),
        }
    }

    /// A device on which every shader operation is refused.
    pub fn unsupported() -> Self {
        Self {
            supported: false,
            ..Self::new()
        }
    }

    pub fn with_max_texture_units(mut self, units: u32) -> Self {
        self.max_texture_units = units.max(1);
        self
    }

    pub fn create_texture(&self) -> HeadlessTexture {
        HeadlessTexture {
            id: self.state.borrow_mut().next_id(),
        }
    }

    /// Value last written at the location `name` resolves to.
    pub fn uniform_value(&self, program: GLuint, name: &str) -> Option<UniformValue> {
        let location = self.uniform_location(program, name);
        if location == INVALID_LOCATION {
            return None;
        }
        let state = self.state.borrow();
        state.programs.get(&program)?.values.get(&location).cloned()
    }

    pub fn active_uniforms(&self, program: GLuint) -> Vec<ActiveUniform> {
        self.state
            .borrow()
            .programs
            .get(&program)
            .map(|object| object.uniforms.clone())
            .unwrap_or_default()
    }

    pub fn program_exists(&self, program: GLuint) -> bool {
        self.state.borrow().programs.contains_key(&program)
    }

    pub fn program_count(&self) -> usize {
        self.state.borrow().programs.len()
    }

    /// Stage objects created and not yet deleted.
    pub fn shader_count(&self) -> usize {
        self.state.borrow().shaders.len()
    }

    pub fn bound_texture(&self, unit: u32) -> Option<GLuint> {
        self.state.borrow().bound_textures.get(&unit).copied()
    }

    pub fn active_texture_unit(&self) -> u32 {
        self.state.borrow().active_unit
    }

    pub fn flush_count(&self) -> usize {
        self.state.borrow().flushes
    }

    fn link(object: &mut ProgramObject) -> Result<(), ShaderError> {
        if object.stages.is_empty() {
            return Err(ShaderError::LinkError(
                "error: no shader stages attached".into(),
            ));
        }

        let mut merged: Vec<UniformDeclaration> = Vec::new();
        for declaration in &object.declarations {
            match merged.iter().find(|d| d.name == declaration.name) {
                Some(existing)
                    if existing.type_name != declaration.type_name
                        || existing.array_len != declaration.array_len =>
                {
                    return Err(ShaderError::LinkError(format!(
                        "error: uniform '{}' declared as '{}' and '{}' in different stages",
                        declaration.name, existing.type_name, declaration.type_name
                    )));
                }
                Some(_) => {}
                None => merged.push(declaration.clone()),
            }
        }

        let mut uniforms = Vec::new();
        let mut next_location: GLint = 0;
        for declaration in merged {
            let declared_in = object
                .declarations
                .iter()
                .filter(|d| d.name == declaration.name)
                .count();
            let references: usize = object
                .sources
                .iter()
                .map(|source| count_references(source, &declaration.name))
                .sum();
            if references <= declared_in {
                log::trace!("Uniform '{}' is unused and was removed", declaration.name);
                continue;
            }
            let size = declaration.size();
            uniforms.push(ActiveUniform {
                name: declaration.name,
                type_name: declaration.type_name,
                location: next_location,
                size,
            });
            next_location += size as GLint;
        }

        object.uniforms = uniforms;
        object.values.clear();
        object.linked = true;
        Ok(())
    }
}

/// Whether a GLSL uniform type accepts `value`, following `glUniform*` rules.
fn accepts(type_name: &str, value: &UniformValue) -> bool {
    use UniformValue::*;
    match type_name {
        "float" => matches!(value, Float(_) | FloatArray(_)),
        "vec2" => matches!(value, Vec2(_) | Vec2Array(_)),
        "vec3" => matches!(value, Vec3(_) | Vec3Array(_)),
        "vec4" => matches!(value, Vec4(_) | Vec4Array(_)),
        "int" | "bool" => matches!(value, Int(_)),
        "ivec2" | "bvec2" => matches!(value, IVec2(_)),
        "ivec3" | "bvec3" => matches!(value, IVec3(_)),
        "ivec4" | "bvec4" => matches!(value, IVec4(_)),
        "mat3" => matches!(value, Mat3(_) | Mat3Array(_)),
        "mat4" => matches!(value, Mat4(_) | Mat4Array(_)),
        sampler if sampler.starts_with("sampler") => matches!(value, Int(_)),
        _ => false,
    }
}

/// Splits array uploads into one value per consecutive location.
fn split_elements(value: &UniformValue) -> Vec<UniformValue> {
    use UniformValue::*;
    match value {
        FloatArray(values) => values.iter().copied().map(Float).collect(),
        Vec2Array(values) => values.iter().copied().map(Vec2).collect(),
        Vec3Array(values) => values.iter().copied().map(Vec3).collect(),
        Vec4Array(values) => values.iter().copied().map(Vec4).collect(),
        Mat3Array(values) => values.iter().copied().map(Mat3).collect(),
        Mat4Array(values) => values.iter().copied().map(Mat4).collect(),
        single => vec![single.clone()],
    }
}

/// Splits `name[3]` into `("name", 3)`.
fn parse_element_name(name: &str) -> (&str, usize) {
    if let Some(base) = name.strip_suffix(']') {
        if let Some((base, index)) = base.split_once('[') {
            if let Ok(index) = index.trim().parse() {
                return (base.trim_end(), index);
            }
        }
    }
    (name, 0)
}

impl GraphicsDevice for HeadlessDevice {
    fn is_supported(&self) -> bool {
        self.supported
    }

    fn create_program(&self) -> GLuint {
        let mut state = self.state.borrow_mut();
        let id = state.next_id();
        state.programs.insert(id, ProgramObject::default());
        id
    }

    fn delete_program(&self, program: GLuint) {
        let mut state = self.state.borrow_mut();
        state.programs.remove(&program);
        if state.current_program == program {
            state.current_program = 0;
        }
    }

    fn compile_shader(&self, stage: ShaderType, source: &str) -> Result<GLuint, ShaderError> {
        let stripped = strip_comments(source);

        let check = check_balance(&stripped).and_then(|_| {
            if declares_main(&stripped) {
                Ok(())
            } else {
                Err("0:0: error: missing entry point 'void main()'".to_string())
            }
        });
        if let Err(log) = check {
            return Err(ShaderError::CompileError { stage, log });
        }

        let mut state = self.state.borrow_mut();
        let id = state.next_id();
        state.shaders.insert(
            id,
            CompiledStage {
                stage,
                declarations: uniform_declarations(&stripped),
                source: stripped.into_owned(),
            },
        );
        Ok(id)
    }

    fn delete_shader(&self, shader: GLuint) {
        self.state.borrow_mut().shaders.remove(&shader);
    }

    fn attach_shader(&self, program: GLuint, shader: GLuint) {
        let mut state = self.state.borrow_mut();
        let Some(compiled) = state.shaders.get(&shader) else {
            log::warn!("Attaching unknown shader {shader}");
            return;
        };
        let stage = compiled.stage;
        let source = compiled.source.clone();
        let declarations = compiled.declarations.clone();

        if let Some(object) = state.programs.get_mut(&program) {
            object.stages.push(stage);
            object.sources.push(source);
            object.declarations.extend(declarations);
        }
    }

    fn link_program(&self, program: GLuint) -> Result<(), ShaderError> {
        let mut state = self.state.borrow_mut();
        let object = state
            .programs
            .get_mut(&program)
            .ok_or_else(|| ShaderError::LinkError(format!("error: unknown program {program}")))?;
        Self::link(object)
    }

    fn uniform_location(&self, program: GLuint, name: &str) -> GLint {
        let state = self.state.borrow();
        let Some(object) = state.programs.get(&program).filter(|object| object.linked) else {
            return INVALID_LOCATION;
        };

        let (base, index) = parse_element_name(name);
        object
            .uniforms
            .iter()
            .find(|uniform| uniform.name == base && index < uniform.size)
            .map_or(INVALID_LOCATION, |uniform| uniform.location + index as GLint)
    }

    fn use_program(&self, program: GLuint) {
        let mut state = self.state.borrow_mut();
        if program != 0 && !state.programs.contains_key(&program) {
            log::warn!("glUseProgram: unknown program {program}");
            return;
        }
        state.current_program = program;
    }

    fn current_program(&self) -> GLuint {
        self.state.borrow().current_program
    }

    fn set_uniform(&self, location: GLint, value: &UniformValue) {
        if location == INVALID_LOCATION {
            return;
        }

        let mut state = self.state.borrow_mut();
        let current = state.current_program;
        let Some(object) = state.programs.get_mut(&current) else {
            log::warn!("glUniform: no program is active");
            return;
        };

        let Some(uniform) = object.uniform_at(location) else {
            log::warn!("glUniform: invalid location {location} for program {current}");
            return;
        };
        if !accepts(&uniform.type_name, value) {
            log::warn!(
                "glUniform: value {value:?} does not match '{} {}'",
                uniform.type_name,
                uniform.name
            );
            return;
        }

        // Elements past the end of the array are ignored, as in GL.
        let end = uniform.location + uniform.size as GLint;
        for (offset, element) in split_elements(value).into_iter().enumerate() {
            let element_location = location + offset as GLint;
            if element_location >= end {
                break;
            }
            object.values.insert(element_location, element);
        }
    }

    fn max_texture_units(&self) -> u32 {
        self.max_texture_units
    }

    fn active_texture(&self, unit: u32) {
        if unit >= self.max_texture_units {
            log::warn!("glActiveTexture: unit {unit} out of range");
            return;
        }
        self.state.borrow_mut().active_unit = unit;
    }

    fn bind_texture(&self, texture: GLuint) {
        let mut state = self.state.borrow_mut();
        let unit = state.active_unit;
        state.bound_textures.insert(unit, texture);
    }

    fn flush(&self) {
        self.state.borrow_mut().flushes += 1;
    }
}
