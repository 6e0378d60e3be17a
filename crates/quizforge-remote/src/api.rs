//! The remote quiz API trait and its wire types.
//!
//! Each method mirrors one engine operation with the same logical inputs and
//! outputs; the JSON shapes use the same camelCase field names as the data
//! model, so the snapshot format and the wire format stay one and the same.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use quizforge_core::engine::{
    accuracy, average_response_time, classify_state, current_streak, DEFAULT_WINDOW,
};
use quizforge_core::model::{LearnerProfile, LearnerState, Question, Response};

use crate::error::DelegateError;

/// Trait for backends that compute the five engine operations remotely.
#[async_trait]
pub trait QuizApi: Send + Sync {
    /// Classify recent performance: state plus the derived running stats.
    async fn analyze_performance(
        &self,
        responses: &[Response],
    ) -> Result<PerformanceAnalysis, DelegateError>;

    /// Pick the next question, or `None` when the catalog is exhausted.
    async fn select_question(
        &self,
        catalog: &[Question],
        responses: &[Response],
        state: LearnerState,
    ) -> Result<Option<Question>, DelegateError>;

    /// Synthesize feedback text for an answered question.
    async fn generate_feedback(
        &self,
        response: &Response,
        question: &Question,
        state: LearnerState,
        history: &[Response],
    ) -> Result<String, DelegateError>;

    /// Decide whether to surface the hint before the next answer.
    async fn should_show_hint(
        &self,
        state: LearnerState,
        last_response_time_seconds: f64,
    ) -> Result<bool, DelegateError>;

    /// Recompute the learner profile from the full history.
    async fn update_profile(
        &self,
        profile: &LearnerProfile,
        responses: &[Response],
    ) -> Result<LearnerProfile, DelegateError>;
}

/// Result of the analyze-performance operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceAnalysis {
    /// Classified skill state.
    pub state: LearnerState,
    /// Full-history accuracy in `[0, 1]`.
    pub accuracy: f64,
    /// Mean response time in seconds.
    pub avg_response_time: f64,
    /// Consecutive-correct streak from the most recent response backward.
    pub streak: usize,
}

impl PerformanceAnalysis {
    /// Compute the analysis locally from the pure engine. This is the
    /// fallback path and the reference semantics for remote backends.
    pub fn from_history(responses: &[Response]) -> Self {
        Self {
            state: classify_state(responses, DEFAULT_WINDOW),
            accuracy: accuracy(responses),
            avg_response_time: average_response_time(responses),
            streak: current_streak(responses),
        }
    }
}

// Request bodies for the HTTP backend. Kept here next to the trait so the
// wire contract is visible in one place.

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AnalyzeRequest<'a> {
    pub responses: &'a [Response],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SelectRequest<'a> {
    pub available_questions: &'a [Question],
    pub responses: &'a [Response],
    pub learner_state: LearnerState,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FeedbackRequest<'a> {
    pub response: &'a Response,
    pub question: &'a Question,
    pub learner_state: LearnerState,
    pub history: &'a [Response],
}

#[derive(Debug, Deserialize)]
pub(crate) struct FeedbackResponse {
    pub feedback: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct HintRequest {
    pub learner_state: LearnerState,
    pub last_response_time_seconds: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct HintResponse {
    pub show_hint: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdateProfileRequest<'a> {
    pub profile: &'a LearnerProfile,
    pub responses: &'a [Response],
}
