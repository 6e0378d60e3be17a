//! Feedback text synthesis.
//!
//! Builds one feedback message per answer from the response, the question's
//! hint/explanation, the classified learner state, and the full-history
//! streak. Branch order is part of the contract: earlier conditions take
//! precedence, and the correct-answer branches are evaluated independently
//! of state, so a struggling learner who answers fast still gets the
//! fast-response message.

use crate::engine::current_streak;
use crate::model::{LearnerState, Question, Response};

/// Response time (seconds) below which a correct answer is "lightning fast".
const FAST_CORRECT_THRESHOLD: f64 = 5.0;
/// Full-history streak at which the celebration message fires.
const STREAK_CELEBRATION: usize = 5;
/// Response time (seconds) below which a wrong answer is treated as
/// impulsive rather than low-skill.
const IMPULSIVE_WRONG_THRESHOLD: f64 = 3.0;

/// Synthesize feedback text for one answered question.
pub fn generate_feedback(
    response: &Response,
    question: &Question,
    state: LearnerState,
    full_history: &[Response],
) -> String {
    let time = response.response_time_seconds;
    let streak = current_streak(full_history);

    if response.correct {
        if time < FAST_CORRECT_THRESHOLD {
            format!(
                "Lightning fast! You solved that in {time:.1}s. {}",
                question.explanation
            )
        } else if streak >= STREAK_CELEBRATION {
            format!(
                "Amazing streak! That's {streak} correct in a row! {}",
                question.explanation
            )
        } else if state == LearnerState::Struggling {
            format!(
                "Fantastic improvement! You're building confidence. {}",
                question.explanation
            )
        } else if state == LearnerState::Advanced {
            // Advanced learners get a terse prompt, not a re-explanation.
            "Excellent work! Ready for something more challenging?".to_string()
        } else {
            format!("Great job! {}", question.explanation)
        }
    } else if state == LearnerState::Struggling {
        format!(
            "No worries! Let's break this down: {}. {} Keep practicing - you're improving!",
            question.hint, question.explanation
        )
    } else if time < IMPULSIVE_WRONG_THRESHOLD {
        format!(
            "Take your time! Sometimes slowing down helps. {}. {}",
            question.hint, question.explanation
        )
    } else if state == LearnerState::Advanced {
        // No hint: advanced learners are expected to self-diagnose.
        format!("Almost there! {} This was a tricky one.", question.explanation)
    } else {
        format!("Not quite right. {}. {}", question.hint, question.explanation)
    }
}
