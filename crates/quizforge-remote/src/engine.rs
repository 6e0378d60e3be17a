//! The delegating engine: remote first, local fallback.
//!
//! Wraps a `QuizApi` backend and mirrors the five engine operations. Any
//! `Unavailable` from the backend is logged and answered by the local pure
//! engine instead, so these operations are infallible from the caller's
//! point of view and only ever differ in which code path computed the
//! answer.

use quizforge_core::engine::{self, RandomSource};
use quizforge_core::feedback;
use quizforge_core::model::{LearnerProfile, LearnerState, Question, Response};

use crate::api::{PerformanceAnalysis, QuizApi};

/// Engine facade that tries a remote backend and falls back to
/// `quizforge-core` on any failure.
pub struct RemoteEngine<A: QuizApi> {
    api: A,
}

impl<A: QuizApi> RemoteEngine<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Classify recent performance, with local fallback.
    pub async fn analyze_performance(&self, responses: &[Response]) -> PerformanceAnalysis {
        match self.api.analyze_performance(responses).await {
            Ok(analysis) => analysis,
            Err(e) => {
                tracing::warn!("analyze-performance: {e}, using local engine");
                PerformanceAnalysis::from_history(responses)
            }
        }
    }

    /// Pick the next question, with local fallback. The injected `rng` only
    /// drives the local tie-break; the remote service keeps its own.
    pub async fn select_question(
        &self,
        catalog: &[Question],
        responses: &[Response],
        state: LearnerState,
        rng: &mut dyn RandomSource,
    ) -> Option<Question> {
        match self.api.select_question(catalog, responses, state).await {
            Ok(question) => question,
            Err(e) => {
                tracing::warn!("select-question: {e}, using local engine");
                engine::select_next(catalog, responses, state, rng).cloned()
            }
        }
    }

    /// Synthesize feedback text, with local fallback.
    pub async fn generate_feedback(
        &self,
        response: &Response,
        question: &Question,
        state: LearnerState,
        history: &[Response],
    ) -> String {
        match self
            .api
            .generate_feedback(response, question, state, history)
            .await
        {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("generate-feedback: {e}, using local engine");
                feedback::generate_feedback(response, question, state, history)
            }
        }
    }

    /// Hint decision, with local fallback.
    pub async fn should_show_hint(
        &self,
        state: LearnerState,
        last_response_time_seconds: f64,
    ) -> bool {
        match self
            .api
            .should_show_hint(state, last_response_time_seconds)
            .await
        {
            Ok(show) => show,
            Err(e) => {
                tracing::warn!("should-show-hint: {e}, using local engine");
                engine::should_show_hint(state, last_response_time_seconds)
            }
        }
    }

    /// Profile recomputation, with local fallback.
    pub async fn update_profile(
        &self,
        profile: &LearnerProfile,
        responses: &[Response],
    ) -> LearnerProfile {
        match self.api.update_profile(profile, responses).await {
            Ok(updated) => updated,
            Err(e) => {
                tracing::warn!("update-profile: {e}, using local engine");
                engine::update_profile(profile, responses)
            }
        }
    }
}
