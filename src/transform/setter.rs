use super::{Context, Stage};
use crate::buffer::{LineBuffer, append_block, splice};
use crate::elements;
use crate::error::{Abort, StageName};
use crate::generate::{Output, identifiers};
use crate::model::{Outlet, ViewKind};
use crate::names;
use crate::parser::{self, tokenizer};
use crate::policy::EmissionPolicy;
use tracing::trace;

/// Emits `setAccessibilityIdentifiers()` binding every outlet to its
/// identifier, along with the identifier enum.
///
/// When the setter already exists only outlets without a binding are added,
/// and outlets that are already bound are dropped from the run so no later
/// stage emits them again.
pub struct IdentifierSetterSynthesizer;

impl Stage for IdentifierSetterSynthesizer {
    fn name(&self) -> StageName {
        StageName::IdentifierSetter
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
        let mut lines = buffer.lines().to_vec();

        ctx.outlets = collect_outlets(&lines, ctx, policy);
        if ctx.outlets.is_empty() {
            return Err(Abort::NoOutlets);
        }

        match parser::find_setter_signature(&lines) {
            None => {
                ctx.already_generated = false;
                ctx.enum_name = policy.fresh_enum_name(&ctx.class_name);
                append_block(&mut lines, setter_block(ctx));
                append_block(&mut lines, identifiers::enum_block(ctx));
            }
            Some(signature) => {
                ctx.already_generated = true;
                let typealias = parser::find_typealias_target(&lines);
                ctx.enum_name = policy.existing_enum_name(&ctx.class_name, typealias);
                bind_missing(&mut lines, signature, ctx);
                if !ctx.outlets.is_empty() {
                    add_cases(&mut lines, ctx);
                }
            }
        }

        buffer.replace(lines);
        Ok(())
    }
}

fn collect_outlets(lines: &[String], ctx: &Context, policy: &EmissionPolicy) -> Vec<Outlet> {
    let mut outlets = parser::extract_outlets(lines);
    if policy.root_view_outlet && ctx.view_kind == ViewKind::ViewController && !outlets.is_empty() {
        outlets.push(Outlet::new(names::root_view_name(&ctx.class_name), elements::ROOT_VIEW));
    }
    if policy.filter_constraint_names {
        outlets.retain(|outlet| !outlet.name.contains("Constraint"));
    }
    outlets
}

/// Binding statements for one outlet; a search bar's text field comes right
/// after the bar itself.
fn binding_lines(outlet: &Outlet) -> Vec<String> {
    let call = tokenizer::BINDING_CALL;
    let mut out = Output::new();
    out.line(
        2,
        &format!("{call}{}, using: .{})", outlet.binding_target(), outlet.name),
    );
    if outlet.is_search_bar() {
        out.line(
            2,
            &format!("{call}{}.textfield, using: .{})", outlet.name, outlet.text_field_case()),
        );
    }
    out.finish()
}

fn setter_block(ctx: &Context) -> Vec<String> {
    let mut out = Output::new();
    out.blank();
    out.line(0, "// MARK: - UITestable");
    out.line(0, &format!("extension {}: UITestablePage {{", ctx.class_name));
    out.line(1, &format!("{}{}", tokenizer::ELEMENT_TYPEALIAS, ctx.enum_name));
    out.blank();
    out.line(1, &format!("{} {{", tokenizer::SETTER_SIGNATURE));
    let mut lines = out.finish();
    for outlet in &ctx.outlets {
        lines.extend(binding_lines(outlet));
    }

    let mut out = Output::new();
    out.line(1, "}");
    if ctx.emits_cell_root() {
        out.blank();
        out.line(1, "func setAccessibilityIdentifiers(at index: Int) {");
        out.line(
            2,
            &format!("{}self, using: .{}, index: index)", tokenizer::BINDING_CALL, ctx.cell_name()),
        );
        out.line(1, "}");
    }
    out.line(0, "}");
    lines.extend(out.finish());
    lines
}

/// Insert bindings for unbound outlets right after the setter signature,
/// keeping outlet order. Bound outlets leave the run.
fn bind_missing(lines: &mut Vec<String>, signature: usize, ctx: &mut Context) {
    let mut cursor = signature + 1;
    let mut unbound = Vec::new();
    for outlet in std::mem::take(&mut ctx.outlets) {
        let probe = tokenizer::binding_probe(&outlet);
        if lines.iter().any(|line| line.contains(&probe)) {
            trace!(outlet = %outlet.name, "already bound");
            continue;
        }
        let binding = binding_lines(&outlet);
        let count = binding.len();
        splice(lines, cursor, binding);
        cursor += count;
        trace!(outlet = %outlet.name, "bound");
        unbound.push(outlet);
    }
    ctx.outlets = unbound;
}

/// Add the new cases to the existing enum declaration, or append a fresh
/// enum block when the buffer has none.
fn add_cases(lines: &mut Vec<String>, ctx: &Context) {
    let Some(declaration) = parser::find_enum(lines, &ctx.enum_name) else {
        append_block(lines, identifiers::enum_block(ctx));
        return;
    };
    let mut at = declaration + 1;
    if lines
        .get(at)
        .is_some_and(|line| line.trim_start().starts_with("// MARK:"))
    {
        at += 1;
    }
    splice(lines, at, identifiers::case_lines(ctx));
}
