//! The `quizforge stats` command: render statistics for a saved session.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::Table;

use quizforge_core::catalog::parse_catalog;
use quizforge_core::insights::{
    compute_difficulty_breakdown, compute_insights, compute_topic_progress,
};
use quizforge_core::model::Difficulty;
use quizforge_core::snapshot::SessionSnapshot;

pub fn execute(snapshot_path: PathBuf, catalog_path: Option<PathBuf>) -> Result<()> {
    let session = SessionSnapshot::load_json(&snapshot_path)?;
    let profile = &session.profile;

    println!(
        "Session for {} (catalog '{}', saved {})",
        profile.name,
        session.catalog_id,
        session.saved_at.format("%Y-%m-%d %H:%M UTC")
    );

    let mut overview = Table::new();
    overview.set_header(vec!["Answered", "Correct", "Accuracy", "Avg Time", "Streak", "State"]);
    overview.add_row(vec![
        profile.total_questions.to_string(),
        profile.correct_answers.to_string(),
        format!("{:.1}%", profile.accuracy * 100.0),
        format!("{:.1}s", profile.average_response_time),
        profile.current_streak.to_string(),
        profile.learner_state.to_string(),
    ]);
    println!("\n{overview}");

    let breakdown = compute_difficulty_breakdown(&session.responses);
    if !breakdown.is_empty() {
        let mut table = Table::new();
        table.set_header(vec!["Difficulty", "Answered", "Correct", "Avg Time"]);
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            if let Some(stats) = breakdown.get(&difficulty) {
                table.add_row(vec![
                    difficulty.to_string(),
                    stats.answered.to_string(),
                    stats.correct.to_string(),
                    format!("{:.1}s", stats.avg_response_time),
                ]);
            }
        }
        println!("\n{table}");
    }

    if let Some(catalog_path) = catalog_path {
        let catalog = parse_catalog(&catalog_path)?;
        let progress = compute_topic_progress(&catalog.questions, &session.responses);
        if !progress.is_empty() {
            let mut table = Table::new();
            table.set_header(vec!["Topic", "Accuracy"]);
            let mut topics: Vec<_> = progress.into_iter().collect();
            topics.sort_by(|a, b| a.0.cmp(&b.0));
            for (topic, accuracy) in topics {
                table.add_row(vec![topic, format!("{:.1}%", accuracy * 100.0)]);
            }
            println!("\n{table}");
        }
    }

    let insights = compute_insights(&session.responses, profile);
    println!("\nInsights:");
    for message in &insights.messages {
        println!("  - {message}");
    }

    Ok(())
}
