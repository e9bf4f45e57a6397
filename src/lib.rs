//! Accessibility identifier and UI-test page object generator for UIKit
//! sources.
//!
//! A generator takes the lines of one Swift file declaring a view, view
//! controller or cell and runs three stages over them:
//!
//! 1. conformance: the class (or its view protocol) gains
//!    `AccessibilityIdentifiable`;
//! 2. identifier setter: `setAccessibilityIdentifiers()` binds every
//!    `@IBOutlet` to a case of a generated identifier enum;
//! 3. page object: an XCTest page object addressing the same elements.
//!
//! Re-running over generated output only wires outlets added since. A stage
//! that cannot run leaves the buffer as the previous stage wrote it; the
//! reason is reported in [`RunReport`] and never raised.

pub mod buffer;
pub mod elements;
pub mod error;
pub mod generate;
pub mod logging;
pub mod model;
pub mod names;
pub mod parser;
pub mod policy;
pub mod registry;
pub mod transform;

pub use buffer::LineBuffer;
pub use error::{Abort, GenerateError, StageName};
pub use model::{Outlet, ViewKind};
pub use policy::EmissionPolicy;
pub use registry::{Generator, Registry, RunReport};
pub use transform::{Pipeline, Stage};

/// Run the generator registered for `selector` over source text.
///
/// Returns `None` for an unknown selector.
pub fn generate(source: &str, selector: &str) -> Option<(String, RunReport)> {
    let mut buffer = LineBuffer::from_text(source);
    let report = Registry::standard().dispatch(selector, &mut buffer)?;
    Some((buffer.to_text(), report))
}
