//! HTTP implementation of the remote quiz API.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::instrument;

use quizforge_core::model::{LearnerProfile, LearnerState, Question, Response};

use crate::api::{
    AnalyzeRequest, FeedbackRequest, FeedbackResponse, HintRequest, HintResponse,
    PerformanceAnalysis, QuizApi, SelectRequest, UpdateProfileRequest,
};
use crate::config::RemoteConfig;
use crate::error::DelegateError;

/// HTTP client for a stateless quiz-engine service.
pub struct HttpQuizApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpQuizApi {
    pub fn new(config: &RemoteConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .expect("failed to build HTTP client");

        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, DelegateError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let response = self
            .client
            .post(format!("{}{path}", self.base_url))
            .json(body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    DelegateError::Unavailable(format!("request to {path} timed out"))
                } else {
                    DelegateError::Unavailable(format!("network error on {path}: {e}"))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(DelegateError::Unavailable(format!(
                "HTTP {} from {path}",
                status.as_u16()
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| DelegateError::Unavailable(format!("malformed response from {path}: {e}")))
    }
}

#[async_trait]
impl QuizApi for HttpQuizApi {
    #[instrument(skip(self, responses), fields(n = responses.len()))]
    async fn analyze_performance(
        &self,
        responses: &[Response],
    ) -> Result<PerformanceAnalysis, DelegateError> {
        self.post_json("/analyze-performance", &AnalyzeRequest { responses })
            .await
    }

    #[instrument(skip_all)]
    async fn select_question(
        &self,
        catalog: &[Question],
        responses: &[Response],
        state: LearnerState,
    ) -> Result<Option<Question>, DelegateError> {
        self.post_json(
            "/select-question",
            &SelectRequest {
                available_questions: catalog,
                responses,
                learner_state: state,
            },
        )
        .await
    }

    #[instrument(skip_all)]
    async fn generate_feedback(
        &self,
        response: &Response,
        question: &Question,
        state: LearnerState,
        history: &[Response],
    ) -> Result<String, DelegateError> {
        let reply: FeedbackResponse = self
            .post_json(
                "/generate-feedback",
                &FeedbackRequest {
                    response,
                    question,
                    learner_state: state,
                    history,
                },
            )
            .await?;
        Ok(reply.feedback)
    }

    #[instrument(skip(self))]
    async fn should_show_hint(
        &self,
        state: LearnerState,
        last_response_time_seconds: f64,
    ) -> Result<bool, DelegateError> {
        let reply: HintResponse = self
            .post_json(
                "/should-show-hint",
                &HintRequest {
                    learner_state: state,
                    last_response_time_seconds,
                },
            )
            .await?;
        Ok(reply.show_hint)
    }

    #[instrument(skip_all)]
    async fn update_profile(
        &self,
        profile: &LearnerProfile,
        responses: &[Response],
    ) -> Result<LearnerProfile, DelegateError> {
        self.post_json("/update-profile", &UpdateProfileRequest { profile, responses })
            .await
    }
}
