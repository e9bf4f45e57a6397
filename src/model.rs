use crate::elements::{self, ElementKind};
use serde::Serialize;

/// A declared outlet: a named reference to one of the view's sub-elements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outlet {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
}

impl Outlet {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
        }
    }

    pub fn kind(&self, prominent: Option<&str>) -> ElementKind {
        ElementKind::from_type(&self.type_name, prominent)
    }

    pub fn is_search_bar(&self) -> bool {
        elements::is_search_bar(&self.type_name)
    }

    pub fn is_root_view(&self) -> bool {
        elements::is_root_view(&self.type_name)
    }

    /// Expression passed to the binding call.
    pub fn binding_target(&self) -> &str {
        if self.is_root_view() {
            "self.view"
        } else {
            &self.name
        }
    }

    /// Case name of a search bar's nested text field.
    pub fn text_field_case(&self) -> String {
        format!("{}TextField", self.name)
    }
}

/// Structural role of the file's primary type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewKind {
    #[default]
    View,
    ViewController,
    Cell,
}

impl ViewKind {
    /// Classify by class-name suffix. `Cell` is checked first, also on the
    /// name without a trailing `ViewController`, so `ItemCellViewController`
    /// is a cell.
    pub fn classify(class_name: &str) -> Self {
        let stem = class_name.strip_suffix("ViewController").unwrap_or(class_name);
        if suffix(class_name, 5).contains("Cell") || suffix(stem, 5).contains("Cell") {
            ViewKind::Cell
        } else if suffix(class_name, 15).contains("ViewController") {
            ViewKind::ViewController
        } else {
            ViewKind::View
        }
    }
}

/// Last `count` characters of `text`.
fn suffix(text: &str, count: usize) -> &str {
    let skip = text.chars().count().saturating_sub(count);
    match text.char_indices().nth(skip) {
        Some((offset, _)) => &text[offset..],
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_view_kinds() {
        assert_eq!(ViewKind::classify("ItemCell"), ViewKind::Cell);
        assert_eq!(ViewKind::classify("ItemCellViewController"), ViewKind::Cell);
        assert_eq!(ViewKind::classify("ItemViewController"), ViewKind::ViewController);
        assert_eq!(ViewKind::classify("ItemView"), ViewKind::View);
    }

    #[test]
    fn test_classify_looks_at_suffix_only() {
        assert_eq!(ViewKind::classify("CellularSettingsView"), ViewKind::View);
        assert_eq!(ViewKind::classify("ViewControllerHostView"), ViewKind::View);
    }

    #[test]
    fn test_suffix_counts_characters() {
        assert_eq!(suffix("abc", 5), "abc");
        assert_eq!(suffix("abcdef", 2), "ef");
        assert_eq!(suffix("", 3), "");
    }

    #[test]
    fn test_root_view_binding_target() {
        assert_eq!(Outlet::new("loginView", "MainView").binding_target(), "self.view");
        assert_eq!(Outlet::new("submit", "UIButton").binding_target(), "submit");
    }
}
