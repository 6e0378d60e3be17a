//! Session snapshot persistence.
//!
//! A snapshot is the `{learnerProfile, responses}` pair the surrounding
//! application persists across sessions. The engine has no opinion on the
//! format beyond round-tripping the data model; JSON is used here because
//! the remote wire format already speaks it.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{LearnerProfile, Response};

/// A serializable snapshot of one learner session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    /// Unique session identifier.
    pub id: Uuid,
    /// When the snapshot was last saved.
    pub saved_at: DateTime<Utc>,
    /// The catalog this session draws questions from.
    pub catalog_id: String,
    /// The learner profile as of the last save.
    pub profile: LearnerProfile,
    /// The full append-only response history, in chronological order.
    pub responses: Vec<Response>,
}

impl SessionSnapshot {
    /// Start a fresh session snapshot.
    pub fn new(catalog_id: &str, profile: LearnerProfile) -> Self {
        Self {
            id: Uuid::new_v4(),
            saved_at: Utc::now(),
            catalog_id: catalog_id.to_string(),
            profile,
            responses: Vec::new(),
        }
    }

    /// Save the snapshot as pretty JSON, refreshing `saved_at`.
    pub fn save_json(&mut self, path: &Path) -> Result<()> {
        self.saved_at = Utc::now();
        let json = serde_json::to_string_pretty(self).context("failed to serialize snapshot")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write snapshot to {}", path.display()))?;
        Ok(())
    }

    /// Load a snapshot from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read snapshot from {}", path.display()))?;
        let snapshot: SessionSnapshot =
            serde_json::from_str(&content).context("failed to parse snapshot JSON")?;
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::update_profile;
    use crate::model::Difficulty;

    fn resp(question_id: &str, correct: bool, time: f64) -> Response {
        Response {
            id: format!("r-{question_id}"),
            timestamp: Utc::now(),
            question_id: question_id.into(),
            selected_answer: "a".into(),
            correct,
            response_time_seconds: time,
            difficulty: Difficulty::Easy,
            hint_used: false,
        }
    }

    #[test]
    fn json_roundtrip() {
        let mut snapshot = SessionSnapshot::new("math-basics", LearnerProfile::new("Ada"));
        snapshot.responses.push(resp("q1", true, 4.0));
        snapshot.responses.push(resp("q2", false, 9.0));
        snapshot.profile = update_profile(&snapshot.profile, &snapshot.responses);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        snapshot.save_json(&path).unwrap();
        let loaded = SessionSnapshot::load_json(&path).unwrap();

        assert_eq!(loaded.id, snapshot.id);
        assert_eq!(loaded.catalog_id, "math-basics");
        assert_eq!(loaded.responses.len(), 2);
        assert_eq!(loaded.profile, snapshot.profile);
    }

    #[test]
    fn restored_responses_reproduce_the_profile() {
        let mut snapshot = SessionSnapshot::new("math-basics", LearnerProfile::new("Ada"));
        for i in 0..7 {
            snapshot.responses.push(resp(&format!("q{i}"), i % 3 != 0, 6.5));
        }
        snapshot.profile = update_profile(&snapshot.profile, &snapshot.responses);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        snapshot.save_json(&path).unwrap();

        let loaded = SessionSnapshot::load_json(&path).unwrap();
        let recomputed = update_profile(&loaded.profile, &loaded.responses);

        assert_eq!(recomputed.total_questions, loaded.profile.total_questions);
        assert_eq!(recomputed.correct_answers, loaded.profile.correct_answers);
        assert_eq!(recomputed.current_streak, loaded.profile.current_streak);
        assert_eq!(recomputed.learner_state, loaded.profile.learner_state);
        assert!((recomputed.accuracy - loaded.profile.accuracy).abs() < 1e-9);
        assert!(
            (recomputed.average_response_time - loaded.profile.average_response_time).abs() < 1e-9
        );
    }

    #[test]
    fn load_missing_file_fails_with_context() {
        let err = SessionSnapshot::load_json(Path::new("/nonexistent/session.json")).unwrap_err();
        assert!(err.to_string().contains("failed to read snapshot"));
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/session.json");
        let mut snapshot = SessionSnapshot::new("c", LearnerProfile::new("Ada"));
        snapshot.save_json(&path).unwrap();
        assert!(path.exists());
    }
}
