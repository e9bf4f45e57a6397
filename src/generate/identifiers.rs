use super::Output;
use crate::transform::Context;

/// Enum case names, in outlet order: each outlet, then its search-field text
/// field if any, then the cell's own identifier on fresh cell runs.
pub fn case_names(ctx: &Context) -> Vec<String> {
    let mut cases = Vec::new();
    for outlet in &ctx.outlets {
        cases.push(outlet.name.clone());
        if outlet.is_search_bar() {
            cases.push(outlet.text_field_case());
        }
    }
    if ctx.emits_cell_root() {
        cases.push(ctx.cell_name());
    }
    cases
}

/// `case` lines ready to insert into an existing enum declaration.
pub fn case_lines(ctx: &Context) -> Vec<String> {
    let mut out = Output::new();
    for case in case_names(ctx) {
        out.line(2, &format!("case {case}"));
    }
    out.finish()
}

/// Full `UIElements` extension declaring the identifier enum.
pub fn enum_block(ctx: &Context) -> Vec<String> {
    let mut out = Output::new();
    out.blank();
    out.line(0, "public extension UIElements {");
    out.line(1, &format!("enum {}: String, UIElement {{", ctx.enum_name));
    out.line(2, &format!("// MARK: - {}", ctx.class_name));
    let mut lines = out.finish();
    lines.extend(case_lines(ctx));

    let mut out = Output::new();
    out.line(1, "}");
    out.line(0, "}");
    lines.extend(out.finish());
    lines
}
