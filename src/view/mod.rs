//! The view layer: owns all transient state and drives both clients.
//!
//! Each logical request runs in its own lane — one for the evaluation,
//! one per variant for regeneration. Lanes are independent: while a lane
//! is submitting its own trigger is refused, but an evaluation and a
//! regeneration (or two different variants) may be in flight at once.

pub mod render;
pub mod submission;

pub use render::{DimensionCard, EvaluationView, LaneStatus, VariantEntry};
pub use submission::Submission;

use std::collections::HashMap;
use std::sync::Mutex;

use tracing::{instrument, warn};

use crate::llm::{ClientError, EvaluationResult, PromptService};
use crate::validation::PromptValidator;

/// All transient UI state. Nothing outside this struct holds cross-request
/// data; it is replaced by the next submission and dies with the window.
#[derive(Debug, Default)]
pub struct ViewState {
    pub evaluation: Submission<EvaluationResult>,
    pub regenerations: HashMap<usize, Submission<String>>,
}

impl ViewState {
    fn record_evaluation(&mut self, outcome: Result<EvaluationResult, ClientError>) {
        match outcome {
            Ok(result) => {
                // The previous result's variants are gone, so their lanes go too.
                self.regenerations.clear();
                self.evaluation.finish(Ok(result));
            }
            Err(error) => {
                warn!(kind = ?error.kind(), %error, "evaluation failed");
                self.evaluation.finish(Err(error.kind()));
            }
        }
    }

    fn record_regeneration(&mut self, index: usize, outcome: Result<String, ClientError>) {
        let lane = self.regenerations.entry(index).or_default();
        match outcome {
            Ok(text) => lane.finish(Ok(text)),
            Err(error) => {
                warn!(index, kind = ?error.kind(), %error, "regeneration failed");
                lane.finish(Err(error.kind()));
            }
        }
    }
}

/// Submit the prompt for evaluation. A second submit while one is in
/// flight is a no-op that issues zero calls; a validation failure settles
/// the lane without reaching the network.
#[instrument(skip_all)]
pub async fn submit_prompt(
    view: &Mutex<ViewState>,
    service: &dyn PromptService,
    prompt: String,
) -> EvaluationView {
    {
        let mut state = view.lock().unwrap();
        if !state.evaluation.begin() {
            return EvaluationView::project(&state);
        }
    }

    // The lock is never held across the call.
    let outcome = match PromptValidator::validate(&prompt) {
        Ok(request) => service.evaluate(&request).await,
        Err(error) => Err(error),
    };

    let mut state = view.lock().unwrap();
    state.record_evaluation(outcome);
    EvaluationView::project(&state)
}

/// Re-submit one rewritten variant. Only this variant's lane is touched;
/// the evaluation result and every other variant stay as they are.
#[instrument(skip(view, service, text))]
pub async fn try_variant(
    view: &Mutex<ViewState>,
    service: &dyn PromptService,
    index: usize,
    text: String,
) -> EvaluationView {
    {
        let mut state = view.lock().unwrap();
        if !state.regenerations.entry(index).or_default().begin() {
            return EvaluationView::project(&state);
        }
    }

    let outcome = service.regenerate(&text).await;

    let mut state = view.lock().unwrap();
    state.record_regeneration(index, outcome);
    EvaluationView::project(&state)
}
