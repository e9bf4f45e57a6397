mod conformance;
mod context;
mod setter;

pub use conformance::{ConformanceInjector, add_capability};
pub use context::Context;
pub use setter::IdentifierSetterSynthesizer;

use crate::buffer::LineBuffer;
use crate::error::{Abort, StageName};
use crate::generate::PageObjectSynthesizer;
use crate::policy::EmissionPolicy;
use serde::Serialize;
use tracing::debug;

/// One step of a generator pipeline.
pub trait Stage {
    fn name(&self) -> StageName;

    /// Rewrite the buffer, or decline with an [`Abort`] and leave it as is.
    fn apply(
        &self,
        buffer: &mut LineBuffer,
        ctx: &mut Context,
        policy: &EmissionPolicy,
    ) -> Result<(), Abort>;
}

/// Stage that declined, and why.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Aborted {
    pub stage: StageName,
    pub reason: Abort,
}

/// Result of running a pipeline over one buffer.
#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    pub context: Context,
    pub completed: Vec<StageName>,
    pub aborted: Option<Aborted>,
}

/// Runs stages in order, stopping at the first one that aborts.
/// Writes of earlier stages are kept.
pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    pub fn add<S: Stage + 'static>(mut self, stage: S) -> Self {
        self.stages.push(Box::new(stage));
        self
    }

    /// Conformance, then identifier setter and enum, then page object.
    pub fn standard() -> Self {
        Pipeline::new()
            .add(ConformanceInjector)
            .add(IdentifierSetterSynthesizer)
            .add(PageObjectSynthesizer)
    }

    pub fn run(&self, buffer: &mut LineBuffer, policy: &EmissionPolicy) -> PipelineOutcome {
        let mut context = Context::new();
        let mut completed = Vec::new();
        let mut aborted = None;

        for stage in &self.stages {
            match stage.apply(buffer, &mut context, policy) {
                Ok(()) => {
                    debug!(stage = %stage.name(), selector = policy.selector, "stage completed");
                    completed.push(stage.name());
                }
                Err(reason) => {
                    debug!(stage = %stage.name(), selector = policy.selector, %reason, "stage aborted");
                    aborted = Some(Aborted {
                        stage: stage.name(),
                        reason,
                    });
                    break;
                }
            }
        }

        PipelineOutcome {
            context,
            completed,
            aborted,
        }
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
