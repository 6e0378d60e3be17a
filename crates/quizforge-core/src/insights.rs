//! Derived session statistics and performance insights.
//!
//! Aggregations the surrounding application renders after (and during) a
//! session: per-difficulty breakdowns, the recent-versus-overall trend, and
//! the topic progress map that feeds `LearnerProfile::topic_progress`. These
//! build on the engine's running statistics but are presentation-side
//! derivations, not part of the decision rules.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::engine::accuracy;
use crate::model::{Difficulty, LearnerProfile, Question, Response};

/// Window used for the recent-performance comparison.
const RECENT_WINDOW: usize = 5;

/// Per-difficulty answer statistics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DifficultyStats {
    /// Questions answered at this difficulty.
    pub answered: usize,
    /// Correct answers at this difficulty.
    pub correct: usize,
    /// Mean response time in seconds at this difficulty.
    pub avg_response_time: f64,
}

/// Break the history down by the difficulty recorded on each response.
pub fn compute_difficulty_breakdown(
    responses: &[Response],
) -> HashMap<Difficulty, DifficultyStats> {
    let mut grouped: HashMap<Difficulty, Vec<&Response>> = HashMap::new();
    for r in responses {
        grouped.entry(r.difficulty).or_default().push(r);
    }

    grouped
        .into_iter()
        .map(|(difficulty, group)| {
            let answered = group.len();
            let correct = group.iter().filter(|r| r.correct).count();
            let avg_response_time = group
                .iter()
                .map(|r| r.response_time_seconds)
                .sum::<f64>()
                / answered as f64;
            (
                difficulty,
                DifficultyStats {
                    answered,
                    correct,
                    avg_response_time,
                },
            )
        })
        .collect()
}

/// A summary of recent performance with human-readable highlights.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInsights {
    /// Accuracy over the full history.
    pub overall_accuracy: f64,
    /// Accuracy over the last few responses.
    pub recent_accuracy: f64,
    /// `recent_accuracy - overall_accuracy`; positive means improving.
    pub improvement_trend: f64,
    /// Fraction of answers where the hint was used.
    pub hint_rate: f64,
    /// Highlight messages for the learner.
    pub messages: Vec<String>,
}

/// Compute insight highlights from the history and the current profile.
pub fn compute_insights(responses: &[Response], profile: &LearnerProfile) -> SessionInsights {
    if responses.is_empty() {
        return SessionInsights {
            overall_accuracy: 0.0,
            recent_accuracy: 0.0,
            improvement_trend: 0.0,
            hint_rate: 0.0,
            messages: vec!["Keep practicing to unlock insights!".into()],
        };
    }

    let overall_accuracy = accuracy(responses);
    let start = responses.len().saturating_sub(RECENT_WINDOW);
    let recent_accuracy = accuracy(&responses[start..]);
    let improvement_trend = recent_accuracy - overall_accuracy;
    let hint_rate = responses.iter().filter(|r| r.hint_used).count() as f64 / responses.len() as f64;

    let mut messages = Vec::new();
    if profile.current_streak >= 5 {
        messages.push("You're on fire! Amazing streak going.".into());
    }
    if profile.average_response_time < 8.0 {
        messages.push("Lightning fast! Your speed is impressive.".into());
    }
    if recent_accuracy > 0.8 {
        messages.push("Recent performance is excellent!".into());
    }
    if improvement_trend > 0.1 {
        messages.push("You're improving rapidly!".into());
    }
    if hint_rate < 0.3 {
        messages.push("Strong independent problem solving!".into());
    }
    if messages.is_empty() {
        messages.push("Keep practicing to unlock insights!".into());
    }

    SessionInsights {
        overall_accuracy,
        recent_accuracy,
        improvement_trend,
        hint_rate,
        messages,
    }
}

/// Per-topic accuracy over the answered questions.
///
/// Topics live on catalog entries, so responses are joined back through
/// `question_id`; answers to questions no longer in the catalog are skipped.
/// This is the surrounding application's computation for
/// `LearnerProfile::topic_progress`; the engine itself never writes that
/// field.
pub fn compute_topic_progress(
    catalog: &[Question],
    responses: &[Response],
) -> HashMap<String, f64> {
    let topic_of: HashMap<&str, &str> = catalog
        .iter()
        .map(|q| (q.id.as_str(), q.topic.as_str()))
        .collect();

    let mut tallies: HashMap<String, (usize, usize)> = HashMap::new();
    for r in responses {
        if let Some(topic) = topic_of.get(r.question_id.as_str()) {
            let entry = tallies.entry((*topic).to_string()).or_insert((0, 0));
            entry.1 += 1;
            if r.correct {
                entry.0 += 1;
            }
        }
    }

    tallies
        .into_iter()
        .map(|(topic, (correct, total))| (topic, correct as f64 / total as f64))
        .collect()
}
