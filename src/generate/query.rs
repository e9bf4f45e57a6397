use crate::elements::ElementKind;
use crate::model::Outlet;
use crate::names;
use crate::policy::EmissionPolicy;
use crate::transform::Context;

/// Where an element lookup starts.
#[derive(Debug, Clone, Copy)]
pub enum Scope<'a> {
    /// The running application.
    App,
    /// The cell returned by the named accessor at `index`.
    Cell(&'a str),
}

impl Scope<'_> {
    fn root(&self) -> String {
        match self {
            Scope::App => "app".to_string(),
            Scope::Cell(accessor) => format!("{accessor}(at: index)"),
        }
    }
}

/// `UIElements.<Enum>.<case>.rawValue`
pub fn identifier(ctx: &Context, case: &str) -> String {
    format!("UIElements.{}.{case}.rawValue", ctx.enum_name)
}

/// XCUIElementQuery expression resolving one outlet.
pub fn lookup(scope: Scope<'_>, outlet: &Outlet, ctx: &Context, policy: &EmissionPolicy) -> String {
    let root = scope.root();
    let id = identifier(ctx, &outlet.name);
    match outlet.kind(policy.prominent_button) {
        ElementKind::ProminentButton => {
            format!("{root}.buttons.element(matching: .button, identifier: {id})")
        }
        kind => format!("{root}.{}[{id}]", kind.query()),
    }
}

/// Accessor name: the class stem followed by the capitalised outlet name.
pub fn accessor(ctx: &Context, outlet: &Outlet) -> String {
    format!("{}{}", ctx.accessor_stem(), names::uppercase_first(&outlet.name))
}

pub fn is_tappable(outlet: &Outlet, policy: &EmissionPolicy) -> bool {
    outlet.kind(policy.prominent_button).is_tappable()
}
