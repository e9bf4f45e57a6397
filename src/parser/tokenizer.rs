//! Line tokenizer and classification predicates.
//!
//! Source files are never parsed. Every structural fact the generators need
//! is read off single lines with the marker strings below, which must match
//! the text bit for bit.

use crate::model::Outlet;

pub const OUTLET_MARKER: &str = "@IBOutlet";
pub const CLASS_KEYWORD: &str = "class";
pub const PROTOCOL_KEYWORD: &str = "protocol";
pub const IMPORT_KEYWORD: &str = "import";

/// Capability every identifiable view conforms to.
pub const CAPABILITY: &str = "AccessibilityIdentifiable";
pub const ANY_OBJECT: &str = "AnyObject";
pub const ANY_OBJECT_LISTED: &str = "AnyObject,";

pub const SETTER_SIGNATURE: &str = "func setAccessibilityIdentifiers()";
pub const BINDING_CALL: &str = "makeViewTestable(";
pub const ELEMENT_TYPEALIAS: &str = "typealias UIElementType = UIElements.";
pub const ELEMENTS_NAMESPACE: &str = "UIElements.";

/// Classification of a single source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// `func setAccessibilityIdentifiers()`
    SetterSignature,
    /// `makeViewTestable(...)`
    Binding,
    /// `typealias UIElementType = UIElements.<Enum>`
    ElementTypealias,
    /// `@IBOutlet ...`
    Outlet,
    Import,
    ProtocolDeclaration,
    /// First token `class` with a conformance list
    ClassDeclaration,
    Other,
}

/// Split a line into space-separated words. Tabs and the line terminator stay
/// attached to their word.
pub fn words(line: &str) -> Vec<&str> {
    line.split(' ').filter(|word| !word.is_empty()).collect()
}

pub fn classify(line: &str) -> LineKind {
    if line.contains(SETTER_SIGNATURE) {
        LineKind::SetterSignature
    } else if line.contains(BINDING_CALL) {
        LineKind::Binding
    } else if line.contains(ELEMENT_TYPEALIAS) {
        LineKind::ElementTypealias
    } else if line.contains(OUTLET_MARKER) {
        LineKind::Outlet
    } else if is_import(line) {
        LineKind::Import
    } else if words(line).contains(&PROTOCOL_KEYWORD) {
        LineKind::ProtocolDeclaration
    } else if line.contains(CLASS_KEYWORD) && line.contains(':') {
        LineKind::ClassDeclaration
    } else {
        LineKind::Other
    }
}

fn is_import(line: &str) -> bool {
    line.trim_start()
        .strip_prefix(IMPORT_KEYWORD)
        .is_some_and(|rest| rest.starts_with(' '))
}

/// Class name declared on a class declaration line.
pub fn declared_class_name(line: &str) -> Option<String> {
    let words = words(line);
    let index = words.iter().position(|word| *word == CLASS_KEYWORD)?;
    let name: String = words.get(index + 1)?.chars().filter(|c| *c != ':').collect();
    (!name.is_empty()).then_some(name)
}

/// The line declares protocol `name` itself, not one merely prefixed by it.
pub fn declares_protocol(line: &str, name: &str) -> bool {
    let words = words(line);
    words
        .windows(2)
        .any(|pair| pair[0] == PROTOCOL_KEYWORD && pair[1].trim_end().trim_end_matches([':', '{']) == name)
}

pub fn declares_enum(line: &str, enum_name: &str) -> bool {
    line.contains(&format!("enum {enum_name}: String"))
}

/// Enum name bound by an existing `typealias UIElementType` line.
pub fn typealias_target(line: &str) -> Option<&str> {
    if !line.contains(ELEMENT_TYPEALIAS) {
        return None;
    }
    let target = line.rsplit(ELEMENTS_NAMESPACE).next()?.trim();
    (!target.is_empty()).then_some(target)
}

/// Text whose presence means the outlet is already bound.
pub fn binding_probe(outlet: &Outlet) -> String {
    if outlet.is_root_view() {
        format!("{BINDING_CALL}self.view, using: .{})", outlet.name)
    } else {
        format!("{BINDING_CALL}{},", outlet.name)
    }
}

pub fn import_line(module: &str) -> String {
    format!("{IMPORT_KEYWORD} {module}\n")
}
