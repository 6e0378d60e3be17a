//! quizforge-remote — Remote engine delegate with local fallback.
//!
//! Mirrors the five engine operations over a stateless HTTP API and falls
//! back to the local pure engine in `quizforge-core` on any failure. The
//! fallback is unconditional and silent to the caller's control flow: the
//! combined operations never fail as long as the local computation can run.
//! There is exactly one rule set; the remote path is a thin proxy and the
//! local path is the engine itself.

pub mod api;
pub mod config;
pub mod engine;
pub mod error;
pub mod http;

pub use api::{PerformanceAnalysis, QuizApi};
pub use config::{load_remote_config, RemoteConfig};
pub use engine::RemoteEngine;
pub use error::DelegateError;
pub use http::HttpQuizApi;
