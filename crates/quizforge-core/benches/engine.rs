use criterion::{black_box, criterion_group, criterion_main, Criterion};

use chrono::Utc;
use quizforge_core::engine::{
    classify_state, select_next, update_profile, SeededSource, DEFAULT_WINDOW,
};
use quizforge_core::model::{Difficulty, LearnerProfile, LearnerState, Question, Response};

fn make_history(len: usize) -> Vec<Response> {
    (0..len)
        .map(|i| Response {
            id: format!("r{i}"),
            timestamp: Utc::now(),
            question_id: format!("q{i}"),
            selected_answer: "a".into(),
            correct: i % 3 != 0,
            response_time_seconds: (i % 20) as f64,
            difficulty: match i % 3 {
                0 => Difficulty::Easy,
                1 => Difficulty::Medium,
                _ => Difficulty::Hard,
            },
            hint_used: i % 5 == 0,
        })
        .collect()
}

fn make_catalog(len: usize) -> Vec<Question> {
    (0..len)
        .map(|i| Question {
            id: format!("c{i}"),
            difficulty: match i % 3 {
                0 => Difficulty::Easy,
                1 => Difficulty::Medium,
                _ => Difficulty::Hard,
            },
            topic: "bench".into(),
            prompt: format!("prompt {i}"),
            choices: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            correct_answer: "a".into(),
            hint: "hint".into(),
            explanation: "explanation".into(),
        })
        .collect()
}

fn bench_classify_state(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify_state");

    for len in [10usize, 100, 1000] {
        let history = make_history(len);
        group.bench_function(format!("history={len}"), |b| {
            b.iter(|| classify_state(black_box(&history), DEFAULT_WINDOW))
        });
    }

    group.finish();
}

fn bench_select_next(c: &mut Criterion) {
    let mut group = c.benchmark_group("select_next");

    let catalog = make_catalog(500);
    let history = make_history(250);
    group.bench_function("catalog=500,answered=250", |b| {
        let mut rng = SeededSource::new(42);
        b.iter(|| {
            select_next(
                black_box(&catalog),
                black_box(&history),
                LearnerState::Normal,
                &mut rng,
            )
        })
    });

    group.finish();
}

fn bench_update_profile(c: &mut Criterion) {
    let mut group = c.benchmark_group("update_profile");

    let profile = LearnerProfile::new("bench");
    for len in [100usize, 1000] {
        let history = make_history(len);
        group.bench_function(format!("history={len}"), |b| {
            b.iter(|| update_profile(black_box(&profile), black_box(&history)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_classify_state, bench_select_next, bench_update_profile);
criterion_main!(benches);
