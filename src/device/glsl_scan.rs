// ShaderBG
// Copyright (c) 2025 Harlen Batagelo
// https://github.com/hbatagelo/shaderbg
// SPDX-License-Identifier: GPL-3.0-or-later

//! Lightweight GLSL scanning used by the headless device.
//!
//! This is not a compiler. It recognizes just enough structure to
//! reproduce what the driver reports back to a shader wrapper: whether a
//! stage is well formed, which uniforms it declares, and which of them
//! are actually referenced.

use regex::Regex;
use std::{borrow::Cow, sync::LazyLock};

static MAIN_FUNCTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bvoid\s+main\s*\(\s*(?:void\s*)?\)").unwrap());

static UNIFORM_DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:layout\s*\([^)]*\)\s*)?\buniform\s+(?:(?:lowp|mediump|highp)\s+)?(\w+)\s+([^;{}]+);",
    )
    .unwrap()
});

static DECLARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\w+)\s*(?:\[\s*(\d+)\s*\])?\s*(?:=.*)?$").unwrap());

/// A `uniform` variable as declared in one stage.
#[derive(Clone, Debug, PartialEq)]
pub struct UniformDeclaration {
    pub type_name: String,
    pub name: String,
    /// `Some(n)` for `name[n]`.
    pub array_len: Option<usize>,
}

impl UniformDeclaration {
    /// Number of locations the uniform occupies.
    pub fn size(&self) -> usize {
        self.array_len.unwrap_or(1).max(1)
    }
}

/// Replaces each comment with a single space.
///
/// Newlines inside block comments are kept so that line numbers in
/// diagnostics still match the original source.
pub fn strip_comments(source: &str) -> Cow<'_, str> {
    if !source.contains("//") && !source.contains("/*") {
        return Cow::Borrowed(source);
    }

    #[derive(Clone, Copy, PartialEq)]
    enum Mode {
        Code,
        Line,
        Block,
    }

    let mut output = String::with_capacity(source.len());
    let mut mode = Mode::Code;
    let mut chars = source.chars().peekable();

    while let Some(c) = chars.next() {
        match mode {
            Mode::Code => match (c, chars.peek()) {
                ('/', Some('/')) => {
                    chars.next();
                    output.push(' ');
                    mode = Mode::Line;
                }
                ('/', Some('*')) => {
                    chars.next();
                    output.push(' ');
                    mode = Mode::Block;
                }
                _ => output.push(c),
            },
            Mode::Line if c == '\n' => {
                output.push('\n');
                mode = Mode::Code;
            }
            Mode::Block if c == '\n' => output.push('\n'),
            Mode::Block if c == '*' && chars.peek() == Some(&'/') => {
                chars.next();
                mode = Mode::Code;
            }
            Mode::Line | Mode::Block => {}
        }
    }

    Cow::Owned(output)
}

/// Checks that `()`, `[]` and `{}` nest properly.
///
/// The error message follows the `0:<line>: error:` shape most drivers use.
pub fn check_balance(source: &str) -> Result<(), String> {
    let mut stack: Vec<(char, usize)> = Vec::new();

    for (line_index, line) in source.lines().enumerate() {
        let line_number = line_index + 1;
        for c in line.chars() {
            match c {
                '(' | '[' | '{' => stack.push((c, line_number)),
                ')' | ']' | '}' => {
                    let expected = match c {
                        ')' => '(',
                        ']' => '[',
                        _ => '{',
                    };
                    match stack.pop() {
                        Some((open, _)) if open == expected => {}
                        _ => return Err(format!("0:{line_number}: error: unexpected '{c}'")),
                    }
                }
                _ => {}
            }
        }
    }

    match stack.pop() {
        Some((open, line_number)) => Err(format!("0:{line_number}: error: unclosed '{open}'")),
        None => Ok(()),
    }
}

pub fn declares_main(source: &str) -> bool {
    MAIN_FUNCTION.is_match(source)
}

/// Collects every `uniform` declaration, in source order.
///
/// Uniform blocks are not reported.
pub fn uniform_declarations(source: &str) -> Vec<UniformDeclaration> {
    let mut declarations = Vec::new();

    for caps in UNIFORM_DECLARATION.captures_iter(source) {
        let type_name = &caps[1];
        for declarator in caps[2].split(',') {
            let Some(parts) = DECLARATOR.captures(declarator) else {
                log::debug!("Skipping unrecognized uniform declarator '{}'", declarator.trim());
                continue;
            };
            declarations.push(UniformDeclaration {
                type_name: type_name.to_string(),
                name: parts[1].to_string(),
                array_len: parts.get(2).and_then(|len| len.as_str().parse().ok()),
            });
        }
    }

    declarations
}

/// Counts whole-word occurrences of `identifier`.
pub fn count_references(source: &str, identifier: &str) -> usize {
    let pattern = format!(r"\b{}\b", regex::escape(identifier));
    match Regex::new(&pattern) {
        Ok(re) => re.find_iter(source).count(),
        Err(_) => 0,
    }
}
