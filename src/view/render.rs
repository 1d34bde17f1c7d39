//! Projection of view state into the shape the page draws.

use serde::Serialize;

use crate::llm::FailureKind;

use super::{Submission, ViewState};

const MAX_RATING: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LaneStatus {
    Idle,
    Submitting,
    Success,
    Failed,
}

impl LaneStatus {
    fn of<T>(submission: &Submission<T>) -> Self {
        match submission {
            Submission::Idle => LaneStatus::Idle,
            Submission::Submitting => LaneStatus::Submitting,
            Submission::Succeeded(_) => LaneStatus::Success,
            Submission::Failed(_) => LaneStatus::Failed,
        }
    }
}

/// One scored dimension, ready to draw.
#[derive(Debug, Clone, Serialize)]
pub struct DimensionCard {
    pub name: &'static str,
    pub score: f64,
    pub description: String,
}

/// One rewritten prompt with its own inline regeneration state.
#[derive(Debug, Clone, Serialize)]
pub struct VariantEntry {
    pub index: usize,
    pub text: String,
    pub status: LaneStatus,
    pub error: Option<FailureKind>,
    pub completion: Option<String>,
}

/// Everything the page needs to draw the results panel. Built solely from
/// view state; the frontend renders it verbatim.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationView {
    pub status: LaneStatus,
    pub error: Option<FailureKind>,
    pub prompt_score: Option<f64>,
    pub max_rating: f64,
    pub dimensions: Vec<DimensionCard>,
    pub suggestions: Option<String>,
    pub variants: Vec<VariantEntry>,
}

impl EvaluationView {
    pub fn project(state: &ViewState) -> Self {
        let mut view = EvaluationView {
            status: LaneStatus::of(&state.evaluation),
            error: state.evaluation.failure(),
            prompt_score: None,
            max_rating: MAX_RATING,
            dimensions: Vec::new(),
            suggestions: None,
            variants: Vec::new(),
        };

        let Some(result) = state.evaluation.succeeded() else {
            return view;
        };

        view.prompt_score = Some(clamp_rating(result.prompt_score));
        view.dimensions = result
            .dimensions()
            .into_iter()
            .map(|(name, dimension)| DimensionCard {
                name,
                score: clamp_rating(dimension.score),
                description: dimension.description.clone(),
            })
            .collect();
        view.suggestions = Some(result.improvement_suggestions.description.clone());
        view.variants = result
            .improved_prompt
            .iter()
            .enumerate()
            .map(|(index, variant)| {
                let lane = state.regenerations.get(&index);
                VariantEntry {
                    index,
                    text: variant.description.clone(),
                    status: lane.map_or(LaneStatus::Idle, LaneStatus::of),
                    error: lane.and_then(|lane| lane.failure()),
                    completion: lane.and_then(|lane| lane.succeeded().cloned()),
                }
            })
            .collect();

        view
    }
}

/// Out-of-range scores come from the model, not from us; draw them clamped
/// to the rating scale rather than rejecting the whole evaluation.
fn clamp_rating(score: f64) -> f64 {
    score.clamp(0.0, MAX_RATING)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_scores_to_the_rating_scale() {
        assert_eq!(clamp_rating(12.5), 10.0);
        assert_eq!(clamp_rating(-1.0), 0.0);
        assert_eq!(clamp_rating(6.0), 6.0);
    }

    #[test]
    fn idle_state_projects_an_empty_panel() {
        let view = EvaluationView::project(&ViewState::default());
        assert_eq!(view.status, LaneStatus::Idle);
        assert!(view.dimensions.is_empty());
        assert!(view.variants.is_empty());
        assert!(view.prompt_score.is_none());
    }
}
