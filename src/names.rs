//! Identifier case conversion and name derivation shared by every emitter.

pub fn uppercase_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn lowercase_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Drop an all-caps module or brand prefix: `XYZLoginView` becomes `LoginView`.
///
/// Applies only when the first three characters contain no lowercase letter;
/// leading characters are then removed while the first two are both uppercase.
pub fn strip_module_prefix(name: &str) -> String {
    if name.chars().take(3).any(char::is_lowercase) {
        return name.to_string();
    }
    let mut rest = name;
    loop {
        let mut chars = rest.chars();
        match (chars.next(), chars.next()) {
            (Some(first), Some(second)) if first.is_uppercase() && second.is_uppercase() => {
                rest = &rest[first.len_utf8()..];
            }
            _ => break,
        }
    }
    rest.to_string()
}

/// Identifier of a cell's own root element.
///
/// The leading uppercase run is consumed one character at a time; only the
/// last consumed character is lowercased and put back in front of the rest.
pub fn cell_accessor_name(class_name: &str) -> String {
    let mut rest = class_name;
    let mut last_removed = None;
    for c in class_name.chars() {
        if !c.is_uppercase() {
            break;
        }
        last_removed = Some(c);
        rest = &rest[c.len_utf8()..];
    }
    match last_removed {
        Some(c) => c.to_lowercase().chain(rest.chars()).collect(),
        None => rest.to_string(),
    }
}

/// Lower-camel prefix for page-object accessors.
pub fn accessor_stem(class_name: &str) -> String {
    lowercase_first(&strip_module_prefix(class_name))
}

/// Class name without its `ViewController` suffix, used for page and enum names.
pub fn screen_stem(class_name: &str) -> String {
    class_name.replace("ViewController", "")
}

/// Name of the protocol a controller's view is expected to declare.
pub fn interface_name(class_name: &str) -> String {
    class_name.replace("Controller", "")
}

/// Case name for a controller's own root view.
pub fn root_view_name(class_name: &str) -> String {
    lowercase_first(&interface_name(class_name))
}
