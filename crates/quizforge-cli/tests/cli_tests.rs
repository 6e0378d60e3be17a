//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn quizforge() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("quizforge").unwrap()
}

const GOOD_CATALOG: &str = r#"
[catalog]
id = "tiny"
name = "Tiny Catalog"
description = "Two easy questions"

[[questions]]
id = "q1"
difficulty = "easy"
topic = "arithmetic"
prompt = "What is 1 + 1?"
choices = ["1", "2", "3"]
correct_answer = "2"
hint = "Count up once from 1."
explanation = "1 plus 1 equals 2."

[[questions]]
id = "q2"
difficulty = "easy"
topic = "arithmetic"
prompt = "What is 2 + 2?"
choices = ["3", "4", "5"]
correct_answer = "4"
hint = "Double 2."
explanation = "2 plus 2 equals 4."
"#;

const BAD_CATALOG: &str = r#"
[catalog]
id = "broken"
name = "Broken"

[[questions]]
id = "q1"
difficulty = "easy"
prompt = "Pick a"
choices = ["a", "b"]
correct_answer = "c"
hint = "h"
explanation = "e"
"#;

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    quizforge()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created quizforge.toml"))
        .stdout(predicate::str::contains("Created catalogs/python-basics.toml"));

    assert!(dir.path().join("quizforge.toml").exists());
    assert!(dir.path().join("catalogs/python-basics.toml").exists());
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    // First init
    quizforge()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    // Second init should skip
    quizforge()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn validate_generated_catalog() {
    let dir = TempDir::new().unwrap();

    quizforge()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    quizforge()
        .current_dir(dir.path())
        .arg("validate")
        .arg("--catalog")
        .arg("catalogs/python-basics.toml")
        .assert()
        .success()
        .stdout(predicate::str::contains("python-basics"))
        .stdout(predicate::str::contains("All catalogs valid"));
}

#[test]
fn validate_directory() {
    let dir = TempDir::new().unwrap();
    let catalogs = dir.path().join("catalogs");
    std::fs::create_dir_all(&catalogs).unwrap();
    std::fs::write(catalogs.join("tiny.toml"), GOOD_CATALOG).unwrap();

    quizforge()
        .current_dir(dir.path())
        .arg("validate")
        .arg("--catalog")
        .arg("catalogs")
        .assert()
        .success()
        .stdout(predicate::str::contains("tiny"));
}

#[test]
fn validate_reports_warnings_and_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.toml");
    std::fs::write(&path, BAD_CATALOG).unwrap();

    quizforge()
        .arg("validate")
        .arg("--catalog")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not one of the choices"))
        .stderr(predicate::str::contains("validation warning"));
}

#[test]
fn validate_nonexistent_file() {
    quizforge()
        .arg("validate")
        .arg("--catalog")
        .arg("nonexistent.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn run_scripted_session_answers_all_questions() {
    let dir = TempDir::new().unwrap();
    let catalog_path = dir.path().join("tiny.toml");
    std::fs::write(&catalog_path, GOOD_CATALOG).unwrap();
    let snapshot_path = dir.path().join("session.json");

    // Both questions are easy, so a new learner sees q1/q2 in some order.
    // Choice 2 is the correct answer for both, so the session runs to
    // catalog exhaustion regardless of the seeded order.
    quizforge()
        .arg("run")
        .arg("--catalog")
        .arg(&catalog_path)
        .arg("--name")
        .arg("Ada")
        .arg("--snapshot")
        .arg(&snapshot_path)
        .arg("--seed")
        .arg("7")
        .write_stdin("2\n2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome, Ada!"))
        .stdout(predicate::str::contains("Quiz complete"));

    assert!(snapshot_path.exists());
    let snapshot: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&snapshot_path).unwrap()).unwrap();
    assert_eq!(snapshot["catalogId"], "tiny");
    assert_eq!(snapshot["profile"]["name"], "Ada");
    assert_eq!(snapshot["responses"].as_array().unwrap().len(), 2);
}

#[test]
fn run_quits_and_resumes() {
    let dir = TempDir::new().unwrap();
    let catalog_path = dir.path().join("tiny.toml");
    std::fs::write(&catalog_path, GOOD_CATALOG).unwrap();
    let snapshot_path = dir.path().join("session.json");

    // Answer one question, then quit.
    quizforge()
        .arg("run")
        .arg("--catalog")
        .arg(&catalog_path)
        .arg("--name")
        .arg("Ada")
        .arg("--snapshot")
        .arg(&snapshot_path)
        .arg("--seed")
        .arg("7")
        .write_stdin("2\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Session saved"));

    // Resume picks up the same profile and finishes the catalog.
    quizforge()
        .arg("run")
        .arg("--catalog")
        .arg(&catalog_path)
        .arg("--snapshot")
        .arg(&snapshot_path)
        .arg("--seed")
        .arg("7")
        .write_stdin("2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Resuming session for Ada"))
        .stdout(predicate::str::contains("Quiz complete"));

    let snapshot: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&snapshot_path).unwrap()).unwrap();
    assert_eq!(snapshot["responses"].as_array().unwrap().len(), 2);
}

#[test]
fn run_respects_question_limit() {
    let dir = TempDir::new().unwrap();
    let catalog_path = dir.path().join("tiny.toml");
    std::fs::write(&catalog_path, GOOD_CATALOG).unwrap();
    let snapshot_path = dir.path().join("session.json");

    quizforge()
        .arg("run")
        .arg("--catalog")
        .arg(&catalog_path)
        .arg("--snapshot")
        .arg(&snapshot_path)
        .arg("--limit")
        .arg("1")
        .write_stdin("2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Question limit reached"));

    let snapshot: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&snapshot_path).unwrap()).unwrap();
    assert_eq!(snapshot["responses"].as_array().unwrap().len(), 1);
}

#[test]
fn run_rejects_snapshot_from_other_catalog() {
    let dir = TempDir::new().unwrap();
    let catalog_path = dir.path().join("tiny.toml");
    std::fs::write(&catalog_path, GOOD_CATALOG).unwrap();
    let snapshot_path = dir.path().join("session.json");

    let snapshot = serde_json::json!({
        "id": "5a41e0c2-0d8f-4a9f-9a9e-0f6b7a2a1c11",
        "savedAt": "2026-08-01T12:00:00Z",
        "catalogId": "some-other-catalog",
        "profile": {
            "name": "Ada",
            "totalQuestions": 0,
            "correctAnswers": 0,
            "accuracy": 0.0,
            "averageResponseTime": 0.0,
            "currentStreak": 0,
            "learnerState": "new"
        },
        "responses": []
    });
    std::fs::write(&snapshot_path, snapshot.to_string()).unwrap();

    quizforge()
        .arg("run")
        .arg("--catalog")
        .arg(&catalog_path)
        .arg("--snapshot")
        .arg(&snapshot_path)
        .write_stdin("q\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("belongs to catalog"));
}

#[test]
fn stats_renders_saved_session() {
    let dir = TempDir::new().unwrap();
    let catalog_path = dir.path().join("tiny.toml");
    std::fs::write(&catalog_path, GOOD_CATALOG).unwrap();
    let snapshot_path = dir.path().join("session.json");

    let snapshot = serde_json::json!({
        "id": "5a41e0c2-0d8f-4a9f-9a9e-0f6b7a2a1c11",
        "savedAt": "2026-08-01T12:00:00Z",
        "catalogId": "tiny",
        "profile": {
            "name": "Ada",
            "totalQuestions": 2,
            "correctAnswers": 1,
            "accuracy": 0.5,
            "averageResponseTime": 6.0,
            "currentStreak": 1,
            "learnerState": "normal"
        },
        "responses": [
            {
                "id": "r1",
                "timestamp": "2026-08-01T11:58:00Z",
                "questionId": "q1",
                "selectedAnswer": "1",
                "correct": false,
                "responseTimeSeconds": 8.0,
                "difficulty": "easy",
                "hintUsed": false
            },
            {
                "id": "r2",
                "timestamp": "2026-08-01T11:59:00Z",
                "questionId": "q2",
                "selectedAnswer": "4",
                "correct": true,
                "responseTimeSeconds": 4.0,
                "difficulty": "easy",
                "hintUsed": false
            }
        ]
    });
    std::fs::write(&snapshot_path, snapshot.to_string()).unwrap();

    quizforge()
        .arg("stats")
        .arg("--snapshot")
        .arg(&snapshot_path)
        .arg("--catalog")
        .arg(&catalog_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Session for Ada"))
        .stdout(predicate::str::contains("normal"))
        .stdout(predicate::str::contains("arithmetic"))
        .stdout(predicate::str::contains("Insights:"));
}

#[test]
fn stats_missing_snapshot_fails() {
    quizforge()
        .arg("stats")
        .arg("--snapshot")
        .arg("nonexistent.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read snapshot"));
}
