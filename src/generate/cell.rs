use super::query::{self, Scope};
use super::{Output, PageTemplate};
use crate::model::Outlet;
use crate::names;
use crate::policy::{EmissionPolicy, PageStyle};
use crate::transform::Context;

/// Page object for a reusable cell. Every accessor takes the row index.
///
/// The accessor for the cell itself is only emitted on a fresh generation,
/// together with the cell's own identifier case.
pub struct CellPage;

impl PageTemplate for CellPage {
    fn render(&self, ctx: &Context, policy: &EmissionPolicy) -> Vec<String> {
        let class = &ctx.class_name;
        let stem = ctx.accessor_stem();
        let upper = names::uppercase_first(&stem);
        let accessors: Vec<String> = ctx.outlets.iter().map(|o| query::accessor(ctx, o)).collect();
        let fresh = ctx.emits_cell_root();

        let mut out = Output::new();
        match policy.page_style {
            PageStyle::Inline => out.line(
                0,
                &format!("public protocol {class}Elements where Self: {} {{", policy.page_style.cell_base()),
            ),
            PageStyle::ScreenSplit => out.line(0, &format!("protocol {class}ElementsProtocol {{")),
        }
        if fresh {
            out.line(1, &format!("func {stem}(at index: Int) -> XCUIElement"));
        }
        for accessor in &accessors {
            out.line(1, &format!("func {accessor}(at index: Int) -> XCUIElement"));
        }
        out.line(
            1,
            &format!("func {stem}Elements(at index: Int, status: UIStatus) -> [XCUIElement: UIStatus]"),
        );
        out.line(1, &format!("func check{upper}(at index: Int, status: UIStatus) -> Self"));
        out.line(0, "}");
        out.blank();

        match policy.page_style {
            PageStyle::Inline => out.line(0, &format!("public extension {class}Elements {{")),
            PageStyle::ScreenSplit => out.line(
                0,
                &format!(
                    "final class {class}Elements: {}, {class}ElementsProtocol {{",
                    policy.page_style.cell_base()
                ),
            ),
        }
        if fresh {
            out.line(1, &format!("func {stem}(at index: Int) -> XCUIElement {{"));
            out.line(
                2,
                &format!(
                    "app.cells[String(format: {} + \"_%d\", index)].firstMatch",
                    query::identifier(ctx, &ctx.cell_name())
                ),
            );
            out.line(1, "}");
            out.blank();
        }
        for (outlet, accessor) in ctx.outlets.iter().zip(&accessors) {
            indexed_accessor(&mut out, ctx, policy, outlet, accessor);
            out.blank();
        }

        out.line(1, "@discardableResult");
        out.line(
            1,
            &format!(
                "func {stem}Elements(at index: Int = 0, status: UIStatus = .exist) -> [XCUIElement: UIStatus] {{"
            ),
        );
        let entries: Vec<String> = accessors.iter().map(|a| format!("{a}(at: index): status")).collect();
        out.list(2, "[", &entries, " ", "]");
        out.line(1, "}");
        out.blank();

        out.line(1, "@discardableResult");
        out.line(
            1,
            &format!("func check{upper}(at index: Int = 0, status: UIStatus = .exist) -> Self {{"),
        );
        out.line(2, &format!("waitForElements(elements: {stem}Elements(at: index, status: status))"));
        out.line(2, "return self");
        out.line(1, "}");

        if fresh {
            out.blank();
            tap_at(&mut out, &upper, &format!("{stem}(at: index)"));
        }
        outlet_taps(&mut out, ctx, policy, &accessors);
        out.line(0, "}");
        out.finish()
    }

    fn render_extension(&self, ctx: &Context, policy: &EmissionPolicy) -> Vec<String> {
        let class = &ctx.class_name;
        let accessors: Vec<String> = ctx.outlets.iter().map(|o| query::accessor(ctx, o)).collect();

        let mut out = Output::new();
        match policy.page_style {
            PageStyle::Inline => out.line(0, &format!("public extension {class}Elements {{")),
            PageStyle::ScreenSplit => out.line(0, &format!("extension {class}Elements {{")),
        }
        for (index, (outlet, accessor)) in ctx.outlets.iter().zip(&accessors).enumerate() {
            if index > 0 {
                out.blank();
            }
            indexed_accessor(&mut out, ctx, policy, outlet, accessor);
        }
        outlet_taps(&mut out, ctx, policy, &accessors);
        out.line(0, "}");
        out.finish()
    }
}

fn indexed_accessor(out: &mut Output, ctx: &Context, policy: &EmissionPolicy, outlet: &Outlet, accessor: &str) {
    out.line(1, &format!("func {accessor}(at index: Int = 0) -> XCUIElement {{"));
    out.line(2, &query::lookup(Scope::Cell(&ctx.accessor_stem()), outlet, ctx, policy));
    out.line(1, "}");
}

/// Tap actions are named after the outlet alone: `tapFavorite(at:)`.
fn outlet_taps(out: &mut Output, ctx: &Context, policy: &EmissionPolicy, accessors: &[String]) {
    for (outlet, accessor) in ctx.outlets.iter().zip(accessors) {
        if query::is_tappable(outlet, policy) {
            out.blank();
            tap_at(out, &names::uppercase_first(&outlet.name), &format!("{accessor}(at: index)"));
        }
    }
}

fn tap_at(out: &mut Output, name: &str, element: &str) {
    out.line(1, "@discardableResult");
    out.line(1, &format!("func tap{name}(at index: Int) -> Self {{"));
    out.line(2, &format!("expect(element: {element}, status: .exist).tap()"));
    out.line(2, "return self");
    out.line(1, "}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ViewKind;
    use crate::policy::{DEV, QA};

    fn context() -> Context {
        Context {
            class_name: "ProductCell".to_string(),
            view_kind: ViewKind::Cell,
            outlets: vec![Outlet::new("title", "UILabel"), Outlet::new("favorite", "UIButton")],
            already_generated: false,
            enum_name: "ProductCellAccessibilityIdentifier".to_string(),
        }
    }

    #[test]
    fn test_fresh_cell_addresses_itself() {
        let text = CellPage.render(&context(), &DEV).concat();
        assert!(text.starts_with(
            "public protocol ProductCellElements where Self: Page1 {\n\
             \tfunc productCell(at index: Int) -> XCUIElement\n\
             \tfunc productCellTitle(at index: Int) -> XCUIElement\n"
        ));
        assert!(text.contains(
            "\t\tapp.cells[String(format: UIElements.ProductCellAccessibilityIdentifier.productCell.rawValue + \"_%d\", index)].firstMatch\n"
        ));
        assert!(text.contains(
            "\t\tproductCell(at: index).staticTexts[UIElements.ProductCellAccessibilityIdentifier.title.rawValue]\n"
        ));
        assert!(text.contains("\tfunc tapProductCell(at index: Int) -> Self {\n"));
        assert!(text.contains(
            "\tfunc tapFavorite(at index: Int) -> Self {\n\
             \t\texpect(element: productCellFavorite(at: index), status: .exist).tap()\n"
        ));
    }

    #[test]
    fn test_incremental_cell_extends_existing_type() {
        let mut ctx = context();
        ctx.already_generated = true;
        let text = CellPage.render_extension(&ctx, &DEV).concat();
        assert!(text.starts_with(
            "public extension ProductCellElements {\n\
             \tfunc productCellTitle(at index: Int = 0) -> XCUIElement {\n"
        ));
        assert!(!text.contains("func productCell(at index: Int)"));
        assert!(!text.contains("productCellElements("));
        assert!(text.contains("\tfunc tapFavorite(at index: Int) -> Self {\n"));

        let split = CellPage.render_extension(&ctx, &QA).concat();
        assert!(split.starts_with("extension ProductCellElements {\n"));
    }

    #[test]
    fn test_split_cell_is_concrete_class() {
        let text = CellPage.render(&context(), &QA).concat();
        assert!(text.starts_with("protocol ProductCellElementsProtocol {\n"));
        assert!(text.contains("final class ProductCellElements: BaseScreen, ProductCellElementsProtocol {\n"));
    }
}
