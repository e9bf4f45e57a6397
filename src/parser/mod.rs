pub mod tokenizer;
mod outlets;

pub use outlets::{extract_outlets, parse_outlet};
pub use tokenizer::{LineKind, classify};

/// Class declaration found in a buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDeclaration {
    pub name: String,
    pub line_index: usize,
}

/// Locate the class declaration: the first class-declaration line, whose
/// `class` word must be followed by a name.
pub fn find_class_declaration(lines: &[String]) -> Option<ClassDeclaration> {
    let line_index = lines
        .iter()
        .position(|line| classify(line) == LineKind::ClassDeclaration)?;
    let name = tokenizer::declared_class_name(&lines[line_index])?;
    Some(ClassDeclaration { name, line_index })
}

pub fn find_setter_signature(lines: &[String]) -> Option<usize> {
    lines
        .iter()
        .position(|line| classify(line) == LineKind::SetterSignature)
}

pub fn find_protocol(lines: &[String], name: &str) -> Option<usize> {
    lines
        .iter()
        .position(|line| tokenizer::declares_protocol(line, name))
}

pub fn find_first_import(lines: &[String]) -> Option<usize> {
    lines.iter().position(|line| classify(line) == LineKind::Import)
}

pub fn find_enum(lines: &[String], enum_name: &str) -> Option<usize> {
    lines
        .iter()
        .position(|line| tokenizer::declares_enum(line, enum_name))
}

/// Enum name bound by the first `typealias UIElementType` line.
pub fn find_typealias_target(lines: &[String]) -> Option<String> {
    lines
        .iter()
        .find_map(|line| tokenizer::typealias_target(line))
        .map(str::to_string)
}
