//! Emission policies: what distinguishes one registered generator from another.

use crate::names;

/// How the identifier enum is named.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumNaming {
    /// Incremental runs read the name back from the existing
    /// `typealias UIElementType` line, falling back to `<Class>Elements`.
    Typealiased,
    /// Always `<Stem>AccessibilityIdentifier`.
    Derived,
}

/// Shape of the emitted page objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageStyle {
    /// Controllers get a self-contained `<Stem>Page` class; views and cells
    /// get a protocol plus default-implementing extension.
    Inline,
    /// Controllers get a `<Stem>Screen` class split into assertion and action
    /// extensions; cells get a protocol plus a concrete elements class.
    ScreenSplit,
}

impl PageStyle {
    pub fn view_base(self) -> &'static str {
        match self {
            PageStyle::Inline => "Page2",
            PageStyle::ScreenSplit => "Page",
        }
    }

    pub fn cell_base(self) -> &'static str {
        match self {
            PageStyle::Inline => "Page1",
            PageStyle::ScreenSplit => "BaseScreen",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmissionPolicy {
    pub selector: &'static str,
    pub enum_naming: EnumNaming,
    pub page_style: PageStyle,
    /// Drop outlets whose name contains `Constraint`.
    pub filter_constraint_names: bool,
    /// Controllers get a synthetic outlet for their own root view.
    pub root_view_outlet: bool,
    /// Branded button type looked up with `element(matching:identifier:)`.
    pub prominent_button: Option<&'static str>,
    /// Module imported into the source file next to its existing imports.
    pub framework_import: Option<&'static str>,
    /// Extra modules imported by the view page object.
    pub view_imports: &'static [&'static str],
}

/// Developer-facing variant.
pub const DEV: EmissionPolicy = EmissionPolicy {
    selector: "fordev",
    enum_naming: EnumNaming::Typealiased,
    page_style: PageStyle::Inline,
    filter_constraint_names: false,
    root_view_outlet: false,
    prominent_button: None,
    framework_import: Some("AccessibilityKit"),
    view_imports: &[],
};

/// QA-facing variant.
pub const QA: EmissionPolicy = EmissionPolicy {
    selector: "forqa",
    enum_naming: EnumNaming::Derived,
    page_style: PageStyle::ScreenSplit,
    filter_constraint_names: true,
    root_view_outlet: true,
    prominent_button: Some("DolapButton"),
    framework_import: None,
    view_imports: &["AccessibilityKit", "UITestBaseKit"],
};

impl EmissionPolicy {
    /// Enum name for a fresh generation.
    pub fn fresh_enum_name(&self, class_name: &str) -> String {
        format!("{}AccessibilityIdentifier", names::screen_stem(class_name))
    }

    /// Enum name for an incremental run, given the existing typealias target.
    pub fn existing_enum_name(&self, class_name: &str, typealias: Option<String>) -> String {
        match self.enum_naming {
            EnumNaming::Typealiased => typealias.unwrap_or_else(|| format!("{class_name}Elements")),
            EnumNaming::Derived => self.fresh_enum_name(class_name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_enum_name_strips_controller_suffix() {
        assert_eq!(DEV.fresh_enum_name("LoginViewController"), "LoginAccessibilityIdentifier");
        assert_eq!(QA.fresh_enum_name("ProductCell"), "ProductCellAccessibilityIdentifier");
    }

    #[test]
    fn test_existing_enum_name_by_convention() {
        assert_eq!(DEV.existing_enum_name("ProfileView", Some("Custom".into())), "Custom");
        assert_eq!(DEV.existing_enum_name("ProfileView", None), "ProfileViewElements");
        assert_eq!(
            QA.existing_enum_name("ProfileView", Some("Custom".into())),
            "ProfileViewAccessibilityIdentifier"
        );
    }
}
