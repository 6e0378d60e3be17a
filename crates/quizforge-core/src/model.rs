//! Core data model types for quizforge.
//!
//! These are the fundamental types the entire quizforge system uses to
//! represent questions, answer events, and the learner profile. Serialized
//! forms use camelCase field names so snapshots and the remote wire format
//! share one shape.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;

/// Question difficulty tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty: {other}")),
        }
    }
}

/// Classified learner skill state.
///
/// `New` holds exactly while the response history is empty; the other three
/// are derived from the recent answer window (see `engine::classify_state`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LearnerState {
    New,
    Struggling,
    Normal,
    Advanced,
}

impl fmt::Display for LearnerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LearnerState::New => write!(f, "new"),
            LearnerState::Struggling => write!(f, "struggling"),
            LearnerState::Normal => write!(f, "normal"),
            LearnerState::Advanced => write!(f, "advanced"),
        }
    }
}

impl FromStr for LearnerState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "new" => Ok(LearnerState::New),
            "struggling" => Ok(LearnerState::Struggling),
            "normal" => Ok(LearnerState::Normal),
            "advanced" => Ok(LearnerState::Advanced),
            other => Err(format!("unknown learner state: {other}")),
        }
    }
}

/// An immutable catalog entry. Created at catalog load time and never
/// mutated; responses reference questions by id rather than owning them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Unique identifier within the catalog.
    pub id: String,
    /// Difficulty tier used by the selection policy.
    pub difficulty: Difficulty,
    /// Free-text topic label.
    pub topic: String,
    /// The question text shown to the learner.
    pub prompt: String,
    /// Ordered answer choices (not necessarily unique).
    pub choices: Vec<String>,
    /// The correct answer; must equal one element of `choices`.
    pub correct_answer: String,
    /// Hint surfaced by the hint policy.
    pub hint: String,
    /// Explanation woven into generated feedback.
    pub explanation: String,
}

/// An immutable record of one answer event. Histories are append-only and
/// index order is treated as chronological order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    /// Unique identifier for this answer event.
    pub id: String,
    /// When the answer was submitted.
    pub timestamp: DateTime<Utc>,
    /// Foreign reference to the answered question.
    pub question_id: String,
    /// The choice the learner picked.
    pub selected_answer: String,
    /// Whether the pick matched the question's correct answer. Derived once
    /// at creation time, never recomputed by the engine.
    pub correct: bool,
    /// Time to answer, in seconds. Non-negative.
    pub response_time_seconds: f64,
    /// Difficulty copied from the question at answer time, so the record
    /// survives catalog changes.
    pub difficulty: Difficulty,
    /// Whether the hint was shown before this answer.
    pub hint_used: bool,
}

impl Response {
    /// Record an answer event against a catalog question.
    ///
    /// Derives `correct`, copies the question's difficulty, and rejects
    /// malformed input (negative or non-finite response time, a selected
    /// answer that is not one of the question's choices) so downstream
    /// computations never have to defend against it.
    pub fn record(
        question: &Question,
        selected_answer: &str,
        response_time_seconds: f64,
        hint_used: bool,
    ) -> Result<Self, EngineError> {
        if !response_time_seconds.is_finite() || response_time_seconds < 0.0 {
            return Err(EngineError::InvalidInput(format!(
                "response time must be a non-negative number of seconds, got {response_time_seconds}"
            )));
        }
        if !question.choices.iter().any(|c| c == selected_answer) {
            return Err(EngineError::InvalidInput(format!(
                "selected answer '{selected_answer}' is not a choice of question '{}'",
                question.id
            )));
        }

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            question_id: question.id.clone(),
            selected_answer: selected_answer.to_string(),
            correct: selected_answer == question.correct_answer,
            response_time_seconds,
            difficulty: question.difficulty,
            hint_used,
        })
    }
}

/// Aggregate view of one learner session. Mutable by replacement only: the
/// engine recomputes it wholesale from the full response history and returns
/// a new value (see `engine::update_profile`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearnerProfile {
    /// Learner display name. Never touched by the engine.
    pub name: String,
    /// Number of answered questions.
    pub total_questions: usize,
    /// Number of correct answers. Always `<= total_questions`.
    pub correct_answers: usize,
    /// `correct_answers / total_questions`, or 0 for an empty history.
    pub accuracy: f64,
    /// Mean response time in seconds, or 0 for an empty history.
    pub average_response_time: f64,
    /// Consecutive-correct count from the most recent response backward.
    pub current_streak: usize,
    /// Classified skill state. `New` iff the history is empty.
    pub learner_state: LearnerState,
    /// Topic → progress metric, populated by the surrounding application
    /// (see `insights::compute_topic_progress`), never by the engine.
    #[serde(default)]
    pub topic_progress: HashMap<String, f64>,
}

impl LearnerProfile {
    /// The empty-history profile for a named learner.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            total_questions: 0,
            correct_answers: 0,
            accuracy: 0.0,
            average_response_time: 0.0,
            current_streak: 0,
            learner_state: LearnerState::New,
            topic_progress: HashMap::new(),
        }
    }
}
