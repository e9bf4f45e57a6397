use super::query::{self, Scope};
use super::{Output, PageTemplate};
use crate::model::Outlet;
use crate::names;
use crate::policy::{EmissionPolicy, PageStyle};
use crate::transform::Context;

const WAIT_OPEN: &str = "waitForPage(elements: [[";
const WAIT_CLOSE: &str = "]])";

/// Page object for a view controller.
pub struct ScreenPage;

impl PageTemplate for ScreenPage {
    fn render(&self, ctx: &Context, policy: &EmissionPolicy) -> Vec<String> {
        match policy.page_style {
            PageStyle::Inline => inline_page(ctx, policy),
            PageStyle::ScreenSplit => split_screen(ctx, policy),
        }
    }

    fn render_extension(&self, ctx: &Context, policy: &EmissionPolicy) -> Vec<String> {
        match policy.page_style {
            PageStyle::Inline => inline_extension(ctx, policy),
            PageStyle::ScreenSplit => split_extension(ctx, policy),
        }
    }
}

/// Computed element property; stored `lazy var`s cannot live in extensions.
fn element_property(out: &mut Output, declaration: &str, lookup: &str) {
    out.line(1, &format!("{declaration}: XCUIElement {{"));
    out.line(2, lookup);
    out.line(1, "}");
}

fn wait_for_elements(out: &mut Output, ctx: &Context) {
    let entries: Vec<String> = ctx.outlets.iter().map(|o| format!("{}: .exist", o.name)).collect();
    let continuation = " ".repeat(WAIT_OPEN.len());
    out.list(2, WAIT_OPEN, &entries, &continuation, WAIT_CLOSE);
}

fn tap_action(out: &mut Output, outlet: &Outlet, visibility: &str) {
    out.line(1, "@discardableResult");
    out.line(
        1,
        &format!("{visibility}func tap{}() -> Self {{", names::uppercase_first(&outlet.name)),
    );
    out.line(2, &format!("expect(element: {}, status: .exist).tap()", outlet.name));
    out.line(2, "return self");
    out.line(1, "}");
}

fn tappable<'a>(ctx: &'a Context, policy: &'a EmissionPolicy) -> impl Iterator<Item = &'a Outlet> {
    ctx.outlets.iter().filter(move |o| query::is_tappable(o, policy))
}

/// `<Stem>Page` holding lazily resolved elements and its actions.
fn inline_page(ctx: &Context, policy: &EmissionPolicy) -> Vec<String> {
    let mut out = Output::new();
    out.line(0, &format!("// MARK: - {}", ctx.class_name));
    out.line(0, &format!("final class {}Page: BaseScreen {{", ctx.screen_stem()));
    for outlet in &ctx.outlets {
        let kind = outlet.kind(policy.prominent_button);
        out.line(1, &format!("lazy var {0} = {1}(.{0})", outlet.name, kind.case_name()));
    }
    out.blank();
    out.line(1, "@discardableResult");
    out.line(1, "func checkElements() -> Self {");
    wait_for_elements(&mut out, ctx);
    out.line(2, "return self");
    out.line(1, "}");
    for outlet in tappable(ctx, policy) {
        out.blank();
        tap_action(&mut out, outlet, "public ");
    }
    out.line(0, "}");
    out.finish()
}

/// `<Stem>Screen` with its elements, then separate assertion and action
/// extensions.
fn split_screen(ctx: &Context, policy: &EmissionPolicy) -> Vec<String> {
    let screen = format!("{}Screen", ctx.screen_stem());
    let mut out = Output::new();
    out.line(0, &format!("// MARK: - {screen}"));
    out.line(0, &format!("final class {screen}: BaseScreen {{"));
    for outlet in &ctx.outlets {
        out.line(
            1,
            &format!("private lazy var {} = {}", outlet.name, query::lookup(Scope::App, outlet, ctx, policy)),
        );
    }
    out.blank();
    out.line(1, "@discardableResult");
    out.line(1, &format!("func check{screen}() -> Self {{"));
    wait_for_elements(&mut out, ctx);
    out.line(2, "return self");
    out.line(1, "}");
    out.line(0, "}");

    out.blank();
    out.line(0, "// MARK: - Assertion");
    out.line(0, &format!("extension {screen} {{"));
    out.line(0, "}");

    out.blank();
    out.line(0, "// MARK: - Action");
    out.line(0, &format!("extension {screen} {{"));
    for (index, outlet) in tappable(ctx, policy).enumerate() {
        if index > 0 {
            out.blank();
        }
        tap_action(&mut out, outlet, "");
    }
    out.line(0, "}");
    out.finish()
}

fn inline_extension(ctx: &Context, policy: &EmissionPolicy) -> Vec<String> {
    let mut out = Output::new();
    out.line(0, &format!("extension {}Page {{", ctx.screen_stem()));
    for outlet in &ctx.outlets {
        let kind = outlet.kind(policy.prominent_button);
        element_property(
            &mut out,
            &format!("var {}", outlet.name),
            &format!("{}(.{})", kind.case_name(), outlet.name),
        );
    }
    for outlet in tappable(ctx, policy) {
        out.blank();
        tap_action(&mut out, outlet, "public ");
    }
    out.line(0, "}");
    out.finish()
}

fn split_extension(ctx: &Context, policy: &EmissionPolicy) -> Vec<String> {
    let screen = format!("{}Screen", ctx.screen_stem());
    let mut out = Output::new();
    out.line(0, &format!("extension {screen} {{"));
    for outlet in &ctx.outlets {
        element_property(
            &mut out,
            &format!("private var {}", outlet.name),
            &query::lookup(Scope::App, outlet, ctx, policy),
        );
    }
    out.line(0, "}");

    let mut taps = tappable(ctx, policy).peekable();
    if taps.peek().is_some() {
        out.blank();
        out.line(0, "// MARK: - Action");
        out.line(0, &format!("extension {screen} {{"));
        for (index, outlet) in taps.enumerate() {
            if index > 0 {
                out.blank();
            }
            tap_action(&mut out, outlet, "");
        }
        out.line(0, "}");
    }
    out.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ViewKind;
    use crate::policy::{DEV, QA};

    fn context() -> Context {
        Context {
            class_name: "LoginViewController".to_string(),
            view_kind: ViewKind::ViewController,
            outlets: vec![Outlet::new("submit", "UIButton"), Outlet::new("email", "UITextField")],
            already_generated: false,
            enum_name: "LoginAccessibilityIdentifier".to_string(),
        }
    }

    #[test]
    fn test_inline_page() {
        let text = ScreenPage.render(&context(), &DEV).concat();
        assert_eq!(
            text,
            "// MARK: - LoginViewController\n\
             final class LoginPage: BaseScreen {\n\
             \tlazy var submit = button(.submit)\n\
             \tlazy var email = textField(.email)\n\
             \n\
             \t@discardableResult\n\
             \tfunc checkElements() -> Self {\n\
             \t\twaitForPage(elements: [[submit: .exist,\n\
             \t\t                        email: .exist]])\n\
             \t\treturn self\n\
             \t}\n\
             \n\
             \t@discardableResult\n\
             \tpublic func tapSubmit() -> Self {\n\
             \t\texpect(element: submit, status: .exist).tap()\n\
             \t\treturn self\n\
             \t}\n\
             }\n"
        );
    }

    #[test]
    fn test_split_screen_sections() {
        let text = ScreenPage.render(&context(), &QA).concat();
        assert!(text.starts_with("// MARK: - LoginScreen\nfinal class LoginScreen: BaseScreen {\n"));
        assert!(text.contains(
            "\tprivate lazy var email = app.textFields[UIElements.LoginAccessibilityIdentifier.email.rawValue]\n"
        ));
        assert!(text.contains("\tfunc checkLoginScreen() -> Self {\n"));
        assert!(text.contains("// MARK: - Assertion\nextension LoginScreen {\n}\n"));
        assert!(text.ends_with(
            "// MARK: - Action\n\
             extension LoginScreen {\n\
             \t@discardableResult\n\
             \tfunc tapSubmit() -> Self {\n\
             \t\texpect(element: submit, status: .exist).tap()\n\
             \t\treturn self\n\
             \t}\n\
             }\n"
        ));
    }

    #[test]
    fn test_single_element_wait() {
        let mut ctx = context();
        ctx.outlets.truncate(1);
        let text = ScreenPage.render(&ctx, &DEV).concat();
        assert!(text.contains("\t\twaitForPage(elements: [[submit: .exist]])\n"));
    }

    #[test]
    fn test_inline_extension_uses_computed_elements() {
        let text = ScreenPage.render_extension(&context(), &DEV).concat();
        assert!(text.starts_with(
            "extension LoginPage {\n\
             \tvar submit: XCUIElement {\n\
             \t\tbutton(.submit)\n\
             \t}\n"
        ));
        assert!(!text.contains("lazy var"));
        assert!(!text.contains("checkElements"));
        assert!(text.contains("\tpublic func tapSubmit() -> Self {\n"));
    }

    #[test]
    fn test_split_extension_skips_empty_actions() {
        let mut ctx = context();
        ctx.outlets.remove(0);
        let text = ScreenPage.render_extension(&ctx, &QA).concat();
        assert_eq!(
            text,
            "extension LoginScreen {\n\
             \tprivate var email: XCUIElement {\n\
             \t\tapp.textFields[UIElements.LoginAccessibilityIdentifier.email.rawValue]\n\
             \t}\n\
             }\n"
        );
    }
}
