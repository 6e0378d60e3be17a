//! The adaptive decision engine.
//!
//! Pure functions over an immutable response history and the question
//! catalog: skill-state classification, running statistics, tie-broken
//! question selection, the hint policy, and wholesale profile recomputation.
//! The engine never mutates its inputs; every call returns a new value, so
//! it is safe to call concurrently with disjoint arguments.

use std::collections::HashSet;
use std::num::NonZeroUsize;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::model::{Difficulty, LearnerProfile, LearnerState, Question, Response};

/// Default classification window: the last five responses.
pub const DEFAULT_WINDOW: NonZeroUsize = match NonZeroUsize::new(5) {
    Some(n) => n,
    None => panic!("default window must be non-zero"),
};

/// Accuracy threshold below which a learner is classified as struggling.
const STRUGGLING_ACCURACY: f64 = 0.6;
/// Mean response time (seconds) above which a learner is struggling.
const STRUGGLING_AVG_TIME: f64 = 25.0;
/// Hint usage rate above which a learner is struggling.
const STRUGGLING_HINT_RATE: f64 = 0.6;
/// Accuracy at or above which a learner may be classified as advanced.
const ADVANCED_ACCURACY: f64 = 0.85;
/// Mean response time (seconds) below which a learner may be advanced.
const ADVANCED_AVG_TIME: f64 = 10.0;
/// Hint usage rate below which a learner may be advanced.
const ADVANCED_HINT_RATE: f64 = 0.2;
/// Minimum full-history streak required for the advanced state.
const ADVANCED_MIN_STREAK: usize = 3;

/// Response time (seconds) above which a normal learner gets a hint.
const HINT_SLOW_THRESHOLD: f64 = 15.0;

/// Injectable randomness for tie-breaking within a difficulty tier, so
/// selection stays testable with a deterministic source.
pub trait RandomSource {
    /// Returns an index in `0..len`. Callers guarantee `len > 0`.
    fn pick_index(&mut self, len: usize) -> usize;
}

/// Thread-local RNG source, the default for interactive sessions.
#[derive(Debug, Default)]
pub struct ThreadRngSource;

impl RandomSource for ThreadRngSource {
    fn pick_index(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Seeded RNG source for reproducible selection (tests, `--seed`).
#[derive(Debug)]
pub struct SeededSource(StdRng);

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RandomSource for SeededSource {
    fn pick_index(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len)
    }
}

/// Classify the learner's current skill state from the recent answer window.
///
/// Empty history is `New`. Otherwise the window is the last `window`
/// responses (or all, if fewer exist) and the rules apply in this exact
/// order, so thresholds never conflict:
///
/// 1. `Struggling` on low accuracy, slow answers, or heavy hint usage.
/// 2. `Advanced` on high accuracy, fast answers, light hint usage, and a
///    full-history streak of at least three.
/// 3. `Normal` otherwise.
///
/// The streak signal deliberately spans the full history, not just the
/// window. The non-zero `window` type rules out a zero-width window, so no
/// division can fault here.
pub fn classify_state(responses: &[Response], window: NonZeroUsize) -> LearnerState {
    if responses.is_empty() {
        return LearnerState::New;
    }

    let start = responses.len().saturating_sub(window.get());
    let recent = &responses[start..];
    let len = recent.len() as f64;

    let accuracy = recent.iter().filter(|r| r.correct).count() as f64 / len;
    let avg_time = recent
        .iter()
        .map(|r| r.response_time_seconds)
        .sum::<f64>()
        / len;
    let hint_rate = recent.iter().filter(|r| r.hint_used).count() as f64 / len;
    let streak = current_streak(responses);

    if accuracy < STRUGGLING_ACCURACY
        || avg_time > STRUGGLING_AVG_TIME
        || hint_rate > STRUGGLING_HINT_RATE
    {
        return LearnerState::Struggling;
    }

    if accuracy >= ADVANCED_ACCURACY
        && avg_time < ADVANCED_AVG_TIME
        && hint_rate < ADVANCED_HINT_RATE
        && streak >= ADVANCED_MIN_STREAK
    {
        return LearnerState::Advanced;
    }

    LearnerState::Normal
}

/// Overall accuracy across the entire supplied history, in `[0, 1]`.
/// Empty input is 0.
pub fn accuracy(responses: &[Response]) -> f64 {
    if responses.is_empty() {
        return 0.0;
    }
    responses.iter().filter(|r| r.correct).count() as f64 / responses.len() as f64
}

/// Consecutive-correct count from the most recent response backward,
/// stopping at the first incorrect answer or the start of history.
pub fn current_streak(responses: &[Response]) -> usize {
    responses.iter().rev().take_while(|r| r.correct).count()
}

/// Mean response time in seconds across the history. Empty input is 0.
pub fn average_response_time(responses: &[Response]) -> f64 {
    if responses.is_empty() {
        return 0.0;
    }
    responses
        .iter()
        .map(|r| r.response_time_seconds)
        .sum::<f64>()
        / responses.len() as f64
}

/// Difficulty tier priority for a learner state.
fn tier_priority(state: LearnerState) -> [Difficulty; 3] {
    match state {
        LearnerState::Struggling => [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard],
        LearnerState::Normal => [Difficulty::Medium, Difficulty::Easy, Difficulty::Hard],
        LearnerState::Advanced => [Difficulty::Hard, Difficulty::Medium, Difficulty::Easy],
        LearnerState::New => [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard],
    }
}

/// Pick the next question from the catalog entries not yet answered.
///
/// Scans the state's tier priority in order and selects uniformly at random
/// (via `rng`) within the first tier that still has candidates. Returns
/// `None` when every catalog id already appears in the history, which the
/// caller must treat as quiz completion.
pub fn select_next<'a>(
    catalog: &'a [Question],
    responses: &[Response],
    state: LearnerState,
    rng: &mut dyn RandomSource,
) -> Option<&'a Question> {
    let answered: HashSet<&str> = responses.iter().map(|r| r.question_id.as_str()).collect();
    let remaining: Vec<&Question> = catalog
        .iter()
        .filter(|q| !answered.contains(q.id.as_str()))
        .collect();

    if remaining.is_empty() {
        return None;
    }

    for difficulty in tier_priority(state) {
        let candidates: Vec<&Question> = remaining
            .iter()
            .copied()
            .filter(|q| q.difficulty == difficulty)
            .collect();
        if !candidates.is_empty() {
            return Some(candidates[rng.pick_index(candidates.len())]);
        }
    }

    // The three tiers exhaust every difficulty, but keep catalog order as a
    // guard for remaining entries the priority scan did not cover.
    Some(remaining[0])
}

/// Whether to surface the hint before the next answer.
///
/// Struggling learners always get the hint; normal learners get it when the
/// previous answer took strictly more than 15 seconds. The boundary is
/// exclusive: exactly 15 seconds does not trigger it.
pub fn should_show_hint(state: LearnerState, last_response_time_seconds: f64) -> bool {
    match state {
        LearnerState::Struggling => true,
        LearnerState::Normal => last_response_time_seconds > HINT_SLOW_THRESHOLD,
        _ => false,
    }
}

/// Recompute the learner profile wholesale from the full history.
///
/// Not incremental on purpose: recomputing from scratch after each response
/// keeps the batch and per-update views identical. Identity fields (`name`,
/// `topic_progress`) pass through unchanged, which also makes the operation
/// idempotent under re-application with the same history.
pub fn update_profile(current: &LearnerProfile, full_history: &[Response]) -> LearnerProfile {
    LearnerProfile {
        name: current.name.clone(),
        total_questions: full_history.len(),
        correct_answers: full_history.iter().filter(|r| r.correct).count(),
        accuracy: accuracy(full_history),
        average_response_time: average_response_time(full_history),
        current_streak: current_streak(full_history),
        learner_state: classify_state(full_history, DEFAULT_WINDOW),
        topic_progress: current.topic_progress.clone(),
    }
}
