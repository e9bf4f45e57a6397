//! Registered generators and selector dispatch.

use crate::buffer::LineBuffer;
use crate::error::StageName;
use crate::model::ViewKind;
use crate::policy::{self, EmissionPolicy};
use crate::transform::{Aborted, Pipeline};
use serde::Serialize;
use tracing::debug;

/// Diagnostic summary of one generator run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub selector: &'static str,
    pub class_name: Option<String>,
    pub view_kind: Option<ViewKind>,
    pub already_generated: bool,
    /// Outlets wired by this run.
    pub outlets: Vec<String>,
    pub completed: Vec<StageName>,
    pub aborted: Option<Aborted>,
    pub changed: bool,
}

impl RunReport {
    /// Every stage ran to completion.
    pub fn is_complete(&self) -> bool {
        self.aborted.is_none()
    }
}

/// One emission policy bound to the standard pipeline.
pub struct Generator {
    policy: &'static EmissionPolicy,
    pipeline: Pipeline,
}

impl Generator {
    pub fn new(policy: &'static EmissionPolicy) -> Self {
        Self {
            policy,
            pipeline: Pipeline::standard(),
        }
    }

    pub fn matches(&self, selector: &str) -> bool {
        self.policy.selector == selector
    }

    pub fn selector(&self) -> &'static str {
        self.policy.selector
    }

    pub fn policy(&self) -> &'static EmissionPolicy {
        self.policy
    }

    /// Rewrite the buffer in place. Never fails: a stage that declines is
    /// only recorded in the report.
    pub fn run(&self, buffer: &mut LineBuffer) -> RunReport {
        let before = buffer.lines().to_vec();
        let outcome = self.pipeline.run(buffer, self.policy);
        let changed = buffer.lines() != before.as_slice();
        let ctx = outcome.context;

        debug!(
            selector = self.policy.selector,
            class = %ctx.class_name,
            changed,
            "generator finished"
        );

        let has_class = ctx.has_class();
        RunReport {
            selector: self.policy.selector,
            class_name: has_class.then(|| ctx.class_name.clone()),
            view_kind: has_class.then_some(ctx.view_kind),
            already_generated: ctx.already_generated,
            outlets: ctx.outlets.iter().map(|o| o.name.clone()).collect(),
            completed: outcome.completed,
            aborted: outcome.aborted,
            changed,
        }
    }
}

/// Selector-keyed set of generators.
pub struct Registry {
    generators: Vec<Generator>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            generators: Vec::new(),
        }
    }

    pub fn register(mut self, policy: &'static EmissionPolicy) -> Self {
        self.generators.push(Generator::new(policy));
        self
    }

    /// `fordev` and `forqa`.
    pub fn standard() -> Self {
        Registry::new().register(&policy::DEV).register(&policy::QA)
    }

    pub fn resolve(&self, selector: &str) -> Option<&Generator> {
        self.generators.iter().find(|g| g.matches(selector))
    }

    pub fn selectors(&self) -> Vec<&'static str> {
        self.generators.iter().map(Generator::selector).collect()
    }

    /// Run the generator registered for `selector`. An unknown selector
    /// leaves the buffer untouched.
    pub fn dispatch(&self, selector: &str, buffer: &mut LineBuffer) -> Option<RunReport> {
        let generator = self.resolve(selector)?;
        Some(generator.run(buffer))
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::standard()
    }
}
