//! The `quizforge run` command: the interactive session controller.
//!
//! After each answered question the controller appends a response record,
//! recomputes the learner profile, asks for feedback text, then picks the
//! next question from the remaining catalog. The engine never mutates the
//! session; all state lives in the snapshot this command owns.

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};

use quizforge_core::catalog::{parse_catalog, validate_catalog};
use quizforge_core::engine::{
    self, RandomSource, SeededSource, ThreadRngSource,
};
use quizforge_core::feedback::generate_feedback;
use quizforge_core::insights::{compute_insights, compute_topic_progress};
use quizforge_core::model::{LearnerProfile, LearnerState, Question, Response};
use quizforge_core::snapshot::SessionSnapshot;
use quizforge_remote::{load_remote_config, HttpQuizApi, RemoteEngine};

/// Which engine answers the session's questions about questions.
enum Engine {
    Local,
    Remote(RemoteEngine<HttpQuizApi>),
}

impl Engine {
    async fn select(
        &self,
        catalog: &[Question],
        responses: &[Response],
        state: LearnerState,
        rng: &mut dyn RandomSource,
    ) -> Option<Question> {
        match self {
            Engine::Local => engine::select_next(catalog, responses, state, rng).cloned(),
            Engine::Remote(remote) => remote.select_question(catalog, responses, state, rng).await,
        }
    }

    async fn should_show_hint(&self, state: LearnerState, last_response_time: f64) -> bool {
        match self {
            Engine::Local => engine::should_show_hint(state, last_response_time),
            Engine::Remote(remote) => remote.should_show_hint(state, last_response_time).await,
        }
    }

    async fn update_profile(
        &self,
        profile: &LearnerProfile,
        responses: &[Response],
    ) -> LearnerProfile {
        match self {
            Engine::Local => engine::update_profile(profile, responses),
            Engine::Remote(remote) => remote.update_profile(profile, responses).await,
        }
    }

    async fn feedback(
        &self,
        response: &Response,
        question: &Question,
        state: LearnerState,
        history: &[Response],
    ) -> String {
        match self {
            Engine::Local => generate_feedback(response, question, state, history),
            Engine::Remote(remote) => {
                remote
                    .generate_feedback(response, question, state, history)
                    .await
            }
        }
    }
}

pub async fn execute(
    catalog_path: PathBuf,
    name: String,
    snapshot_path: PathBuf,
    seed: Option<u64>,
    limit: Option<usize>,
    remote: bool,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let catalog = parse_catalog(&catalog_path)?;
    anyhow::ensure!(
        !catalog.questions.is_empty(),
        "catalog '{}' has no questions",
        catalog.id
    );
    for warning in validate_catalog(&catalog) {
        tracing::warn!(
            "catalog {}: {}{}",
            catalog.id,
            warning
                .question_id
                .as_ref()
                .map(|id| format!("[{id}] "))
                .unwrap_or_default(),
            warning.message
        );
    }

    let mut session = if snapshot_path.exists() {
        let session = SessionSnapshot::load_json(&snapshot_path)?;
        anyhow::ensure!(
            session.catalog_id == catalog.id,
            "snapshot {} belongs to catalog '{}', not '{}'",
            snapshot_path.display(),
            session.catalog_id,
            catalog.id
        );
        println!(
            "Resuming session for {} ({} answered so far)",
            session.profile.name,
            session.responses.len()
        );
        session
    } else {
        println!("Welcome, {name}! Your adaptive learning session begins now.");
        SessionSnapshot::new(&catalog.id, LearnerProfile::new(&name))
    };

    let mut rng: Box<dyn RandomSource> = match seed {
        Some(seed) => Box::new(SeededSource::new(seed)),
        None => Box::new(ThreadRngSource),
    };

    let engine = if remote {
        let config = load_remote_config(config_path.as_deref())?;
        println!("Remote engine: {} (local fallback active)", config.base_url);
        Engine::Remote(RemoteEngine::new(HttpQuizApi::new(&config)))
    } else {
        Engine::Local
    };

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut asked = 0usize;

    loop {
        if limit.is_some_and(|max| asked >= max) {
            println!("\nQuestion limit reached. Session saved.");
            break;
        }

        let state = session.profile.learner_state;
        let Some(question) = engine
            .select(&catalog.questions, &session.responses, state, rng.as_mut())
            .await
        else {
            println!("\nQuiz complete! Every question in the catalog has been answered.");
            print_session_summary(&session);
            break;
        };
        asked += 1;

        println!(
            "\nQuestion {} of {} [{} | {}]",
            session.responses.len() + 1,
            catalog.questions.len(),
            question.difficulty,
            question.topic
        );
        println!("{}", question.prompt);
        for (i, choice) in question.choices.iter().enumerate() {
            println!("  {}) {choice}", i + 1);
        }

        // Hint policy runs on the previous answer's timing, before this
        // question is answered.
        let last_time = session
            .responses
            .last()
            .map(|r| r.response_time_seconds)
            .unwrap_or(0.0);
        let hint_shown = engine.should_show_hint(state, last_time).await;
        if hint_shown {
            println!("Hint: {}", question.hint);
        }

        let started = Instant::now();
        let Some(selected) = prompt_answer(&mut input, &question)? else {
            println!("Session saved. Run again to pick up where you left off.");
            session.save_json(&snapshot_path)?;
            return Ok(());
        };
        let elapsed = started.elapsed().as_secs_f64();

        let response = Response::record(&question, &selected, elapsed, hint_shown)
            .context("failed to record answer")?;
        session.responses.push(response.clone());
        session.profile = engine.update_profile(&session.profile, &session.responses).await;
        session.profile.topic_progress =
            compute_topic_progress(&catalog.questions, &session.responses);

        let text = engine
            .feedback(
                &response,
                &question,
                session.profile.learner_state,
                &session.responses,
            )
            .await;
        println!("{text}");

        session.save_json(&snapshot_path)?;
    }

    session.save_json(&snapshot_path)?;
    Ok(())
}

/// Prompt until the learner picks a choice or quits.
///
/// Returns `Ok(None)` on `q` or end of input, `Ok(Some(choice))` otherwise.
fn prompt_answer(input: &mut impl BufRead, question: &Question) -> Result<Option<String>> {
    loop {
        print!("Your answer (1-{}, or q to quit): ", question.choices.len());
        std::io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            // End of input behaves like quit so piped sessions terminate.
            return Ok(None);
        }
        let trimmed = line.trim();

        if trimmed.eq_ignore_ascii_case("q") {
            return Ok(None);
        }
        match trimmed.parse::<usize>() {
            Ok(n) if n >= 1 && n <= question.choices.len() => {
                return Ok(Some(question.choices[n - 1].clone()));
            }
            _ => {
                println!("Please enter a number between 1 and {}.", question.choices.len());
            }
        }
    }
}

fn print_session_summary(session: &SessionSnapshot) {
    use comfy_table::Table;

    let profile = &session.profile;
    let mut table = Table::new();
    table.set_header(vec!["Answered", "Correct", "Accuracy", "Avg Time", "Streak", "State"]);
    table.add_row(vec![
        profile.total_questions.to_string(),
        profile.correct_answers.to_string(),
        format!("{:.1}%", profile.accuracy * 100.0),
        format!("{:.1}s", profile.average_response_time),
        profile.current_streak.to_string(),
        profile.learner_state.to_string(),
    ]);
    println!("\n{table}");

    let insights = compute_insights(&session.responses, profile);
    println!("\nInsights:");
    for message in &insights.messages {
        println!("  - {message}");
    }
}
