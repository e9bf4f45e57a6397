use super::query::{self, Scope};
use super::{Output, PageTemplate};
use crate::names;
use crate::policy::EmissionPolicy;
use crate::transform::Context;

/// Page object for a plain view: an elements protocol with a default
/// implementation the test page mixes in.
pub struct ViewPage;

impl PageTemplate for ViewPage {
    fn imports(&self, policy: &EmissionPolicy) -> &'static [&'static str] {
        policy.view_imports
    }

    fn render(&self, ctx: &Context, policy: &EmissionPolicy) -> Vec<String> {
        let class = &ctx.class_name;
        let stem = ctx.accessor_stem();
        let upper = names::uppercase_first(&stem);
        let accessors: Vec<String> = ctx.outlets.iter().map(|o| query::accessor(ctx, o)).collect();

        let mut out = Output::new();
        out.line(
            0,
            &format!("public protocol {class}Elements where Self: {} {{", policy.page_style.view_base()),
        );
        for accessor in &accessors {
            out.line(1, &format!("var {accessor}: XCUIElement {{ get }}"));
        }
        out.blank();
        out.line(1, &format!("func {stem}Elements(status: UIStatus) -> [XCUIElement: UIStatus]"));
        out.line(1, &format!("func check{upper}(status: UIStatus) -> Self"));
        out.line(0, "}");
        out.blank();

        out.line(0, &format!("public extension {class}Elements {{"));
        element_accessors(&mut out, ctx, policy, &accessors);

        out.blank();
        out.line(1, "@discardableResult");
        out.line(
            1,
            &format!("func {stem}Elements(status: UIStatus = .exist) -> [XCUIElement: UIStatus] {{"),
        );
        let entries: Vec<String> = accessors.iter().map(|a| format!("{a}: status")).collect();
        out.list(2, "[", &entries, " ", "]");
        out.line(1, "}");

        out.blank();
        out.line(1, "@discardableResult");
        out.line(1, &format!("func check{upper}(status: UIStatus = .exist) -> Self {{"));
        out.line(2, &format!("waitForElements(elements: {stem}Elements(status: status))"));
        out.line(2, "return self");
        out.line(1, "}");

        tap_actions(&mut out, ctx, policy, &accessors);
        out.line(0, "}");
        out.finish()
    }

    /// Outlets added later extend the existing protocol; the aggregate
    /// check keeps covering the elements it was generated with.
    fn render_extension(&self, ctx: &Context, policy: &EmissionPolicy) -> Vec<String> {
        let accessors: Vec<String> = ctx.outlets.iter().map(|o| query::accessor(ctx, o)).collect();
        let mut out = Output::new();
        out.line(0, &format!("public extension {}Elements {{", ctx.class_name));
        element_accessors(&mut out, ctx, policy, &accessors);
        tap_actions(&mut out, ctx, policy, &accessors);
        out.line(0, "}");
        out.finish()
    }
}

fn element_accessors(out: &mut Output, ctx: &Context, policy: &EmissionPolicy, accessors: &[String]) {
    for (outlet, accessor) in ctx.outlets.iter().zip(accessors) {
        out.line(1, &format!("var {accessor}: XCUIElement {{"));
        out.line(2, &query::lookup(Scope::App, outlet, ctx, policy));
        out.line(1, "}");
    }
}

fn tap_actions(out: &mut Output, ctx: &Context, policy: &EmissionPolicy, accessors: &[String]) {
    for (outlet, accessor) in ctx.outlets.iter().zip(accessors) {
        if !query::is_tappable(outlet, policy) {
            continue;
        }
        out.blank();
        out.line(1, "@discardableResult");
        out.line(
            1,
            &format!("public func tap{}() -> Self {{", names::uppercase_first(accessor)),
        );
        out.line(2, &format!("expect(element: {accessor}, status: .exist).tap()"));
        out.line(2, "return self");
        out.line(1, "}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Outlet, ViewKind};
    use crate::policy::{DEV, QA};

    fn context() -> Context {
        Context {
            class_name: "ProfileView".to_string(),
            view_kind: ViewKind::View,
            outlets: vec![Outlet::new("title", "UILabel"), Outlet::new("edit", "UIButton")],
            already_generated: false,
            enum_name: "ProfileViewAccessibilityIdentifier".to_string(),
        }
    }

    #[test]
    fn test_protocol_lists_every_accessor() {
        let text = ViewPage.render(&context(), &DEV).concat();
        assert!(text.starts_with(
            "public protocol ProfileViewElements where Self: Page2 {\n\
             \tvar profileViewTitle: XCUIElement { get }\n\
             \tvar profileViewEdit: XCUIElement { get }\n\
             \n\
             \tfunc profileViewElements(status: UIStatus) -> [XCUIElement: UIStatus]\n\
             \tfunc checkProfileView(status: UIStatus) -> Self\n\
             }\n"
        ));
    }

    #[test]
    fn test_aggregate_list_and_single_tap() {
        let text = ViewPage.render(&context(), &QA).concat();
        assert!(text.contains("where Self: Page {\n"));
        assert!(text.contains("\t\t[profileViewTitle: status,\n\t\t profileViewEdit: status]\n"));
        assert_eq!(text.matches("public func tap").count(), 1);
        assert!(text.contains("\tpublic func tapProfileViewEdit() -> Self {\n"));
    }

    #[test]
    fn test_extension_only_adds_members() {
        let text = ViewPage.render_extension(&context(), &DEV).concat();
        assert_eq!(
            text,
            "public extension ProfileViewElements {\n\
             \tvar profileViewTitle: XCUIElement {\n\
             \t\tapp.staticTexts[UIElements.ProfileViewAccessibilityIdentifier.title.rawValue]\n\
             \t}\n\
             \tvar profileViewEdit: XCUIElement {\n\
             \t\tapp.buttons[UIElements.ProfileViewAccessibilityIdentifier.edit.rawValue]\n\
             \t}\n\
             \n\
             \t@discardableResult\n\
             \tpublic func tapProfileViewEdit() -> Self {\n\
             \t\texpect(element: profileViewEdit, status: .exist).tap()\n\
             \t\treturn self\n\
             \t}\n\
             }\n"
        );
    }

    #[test]
    fn test_view_imports_follow_policy() {
        assert!(ViewPage.imports(&DEV).is_empty());
        assert_eq!(ViewPage.imports(&QA), ["AccessibilityKit", "UITestBaseKit"]);
    }
}
