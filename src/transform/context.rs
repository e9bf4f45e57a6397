use crate::model::{Outlet, ViewKind};
use crate::names;

/// Facts derived from the buffer during one pipeline run.
/// Populated by the stages in order and dropped when the run ends.
#[derive(Debug, Clone, Default)]
pub struct Context {
    pub class_name: String,
    pub view_kind: ViewKind,
    /// Outlets still to be wired in this run.
    pub outlets: Vec<Outlet>,
    /// The buffer already had an identifier setter when the run started.
    pub already_generated: bool,
    pub enum_name: String,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_class(&self) -> bool {
        !self.class_name.is_empty()
    }

    pub fn is_cell(&self) -> bool {
        self.view_kind == ViewKind::Cell
    }

    pub fn accessor_stem(&self) -> String {
        names::accessor_stem(&self.class_name)
    }

    pub fn screen_stem(&self) -> String {
        names::screen_stem(&self.class_name)
    }

    pub fn cell_name(&self) -> String {
        names::cell_accessor_name(&self.class_name)
    }

    /// The cell's own identifier is only emitted on a fresh generation.
    pub fn emits_cell_root(&self) -> bool {
        self.is_cell() && !self.already_generated
    }
}
