pub(crate) mod identifiers;
mod cell;
mod output;
mod query;
mod screen;
mod view;

pub use cell::CellPage;
pub use output::Output;
pub use screen::ScreenPage;
pub use view::ViewPage;

use crate::buffer::{LineBuffer, append_block};
use crate::error::{Abort, StageName};
use crate::model::ViewKind;
use crate::policy::EmissionPolicy;
use crate::transform::{Context, Stage};

/// Page object template - renders the test-side companion of one view kind
pub trait PageTemplate {
    /// Modules imported after `XCTest`.
    fn imports(&self, _policy: &EmissionPolicy) -> &'static [&'static str] {
        &[]
    }

    fn render(&self, ctx: &Context, policy: &EmissionPolicy) -> Vec<String>;

    /// Members for outlets wired after the page object was generated,
    /// declared in extensions of the existing types.
    fn render_extension(&self, ctx: &Context, policy: &EmissionPolicy) -> Vec<String>;
}

/// Template for a view kind.
pub fn template_for(kind: ViewKind) -> &'static dyn PageTemplate {
    match kind {
        ViewKind::View => &ViewPage,
        ViewKind::ViewController => &ScreenPage,
        ViewKind::Cell => &CellPage,
    }
}

/// Appends the UI-test page object for the outlets still being wired.
pub struct PageObjectSynthesizer;

impl Stage for PageObjectSynthesizer {
    fn name(&self) -> StageName {
        StageName::PageObject
    }

    fn apply(
        &self,
        buffer: &mut LineBuffer,
        ctx: &mut Context,
        policy: &EmissionPolicy,
    ) -> Result<(), Abort> {
        if !ctx.has_class() {
            return Err(Abort::NoClassDeclaration);
        }
        if ctx.outlets.is_empty() {
            return Err(Abort::NoOutlets);
        }
        let template = template_for(ctx.view_kind);

        let mut out = Output::new();
        out.blank();
        if !ctx.already_generated {
            out.line(0, "import XCTest");
            for module in template.imports(policy) {
                out.line(0, &format!("import {module}"));
            }
            out.blank();
        }
        let mut block = out.finish();
        if ctx.already_generated {
            block.extend(template.render_extension(ctx, policy));
        } else {
            block.extend(template.render(ctx, policy));
        }

        let mut lines = buffer.lines().to_vec();
        append_block(&mut lines, block);
        buffer.replace(lines);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Outlet;
    use crate::policy::{DEV, QA};

    fn context(class_name: &str) -> Context {
        Context {
            class_name: class_name.to_string(),
            view_kind: ViewKind::classify(class_name),
            outlets: vec![Outlet::new("title", "UILabel")],
            already_generated: false,
            enum_name: "TestAccessibilityIdentifier".to_string(),
        }
    }

    fn apply(source: &str, ctx: &mut Context, policy: &EmissionPolicy) -> (Result<(), Abort>, String) {
        let mut buffer = LineBuffer::from_text(source);
        let result = PageObjectSynthesizer.apply(&mut buffer, ctx, policy);
        (result, buffer.to_text())
    }

    #[test]
    fn test_appends_after_unterminated_line() {
        let (result, text) = apply("}", &mut context("ProfileView"), &DEV);
        assert_eq!(result, Ok(()));
        assert!(text.starts_with("}\n\nimport XCTest\n\npublic protocol ProfileViewElements"));
    }

    #[test]
    fn test_view_imports_only_on_views() {
        let (_, view) = apply("}\n", &mut context("ProfileView"), &QA);
        assert!(view.contains("import XCTest\nimport AccessibilityKit\nimport UITestBaseKit\n\n"));

        let (_, screen) = apply("}\n", &mut context("ProfileViewController"), &QA);
        assert!(screen.contains("import XCTest\n\n// MARK: - ProfileScreen\n"));
    }

    #[test]
    fn test_dispatches_on_view_kind() {
        let (_, cell) = apply("}\n", &mut context("ProfileCell"), &DEV);
        assert!(cell.contains("public protocol ProfileCellElements where Self: Page1 {\n"));
        let (_, screen) = apply("}\n", &mut context("ProfileViewController"), &DEV);
        assert!(screen.contains("final class ProfilePage: BaseScreen {\n"));
    }

    #[test]
    fn test_incremental_run_extends_without_imports() {
        let mut ctx = context("ProfileView");
        ctx.already_generated = true;
        let (result, text) = apply("}\n", &mut ctx, &DEV);
        assert_eq!(result, Ok(()));
        assert!(text.starts_with("}\n\npublic extension ProfileViewElements {\n"));
        assert!(!text.contains("import XCTest"));
        assert!(!text.contains("protocol"));
    }

    #[test]
    fn test_no_outlets_is_noop() {
        let mut ctx = context("ProfileView");
        ctx.outlets.clear();
        let (result, text) = apply("}\n", &mut ctx, &DEV);
        assert_eq!(result, Err(Abort::NoOutlets));
        assert_eq!(text, "}\n");
    }
}
