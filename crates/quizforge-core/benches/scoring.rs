use criterion::{black_box, criterion_group, criterion_main, Criterion};

use quizforge_core::engine::QuizEngine;
use quizforge_core::generator::{
    build_options, DifficultyDistribution, QuestionGenerator,
};
use quizforge_core::model::{Difficulty, QuizQuestion};
use quizforge_core::registry::GeneratorRegistry;
use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};
use std::sync::Arc;
use uuid::Uuid;

struct BenchGenerator;

impl QuestionGenerator for BenchGenerator {
    fn id(&self) -> &str {
        "bench"
    }

    fn name(&self) -> &str {
        "Bench"
    }

    fn generate(
        &self,
        count: usize,
        _distribution: &DifficultyDistribution,
        rng: &mut dyn RngCore,
    ) -> Vec<QuizQuestion> {
        (0..count)
            .map(|i| {
                let (options, correct_option_id) = build_options(
                    format!("{i}"),
                    [
                        format!("{}", i + 1),
                        format!("{}", i + 2),
                        format!("{}", i + 3),
                    ],
                    rng,
                );
                QuizQuestion {
                    id: Uuid::new_v4(),
                    text: format!("question {i}"),
                    options,
                    correct_option_id,
                    difficulty: Difficulty::Medium,
                    explanation: None,
                }
            })
            .collect()
    }
}

fn bench_build_options(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_options");

    group.bench_function("short_texts", |b| {
        let mut rng = SmallRng::seed_from_u64(1);
        b.iter(|| {
            build_options(
                black_box("42".to_string()),
                black_box(["41".to_string(), "43".to_string(), "24".to_string()]),
                &mut rng,
            )
        })
    });

    group.bench_function("markup_texts", |b| {
        let mut rng = SmallRng::seed_from_u64(2);
        b.iter(|| {
            build_options(
                black_box("$\\frac{3}{4}$".to_string()),
                black_box([
                    "$\\frac{1}{4}$".to_string(),
                    "$\\frac{2}{4}$".to_string(),
                    "$\\frac{4}{4}$".to_string(),
                ]),
                &mut rng,
            )
        })
    });

    group.finish();
}

fn bench_calculate_result(c: &mut Criterion) {
    let mut group = c.benchmark_group("calculate_result");

    let registry = GeneratorRegistry::with_generators([
        Arc::new(BenchGenerator) as Arc<dyn QuestionGenerator>
    ]);
    let mut rng = SmallRng::seed_from_u64(3);
    let mut engine =
        QuizEngine::create_session(&registry, "bench", "bench", "bench", true, &mut rng)
            .expect("bench pool");
    while engine.session().current_question().is_some() {
        engine.submit_answer('A');
    }

    group.bench_function("grand_quiz", |b| {
        b.iter(|| black_box(&mut engine).calculate_result())
    });

    group.finish();
}

criterion_group!(benches, bench_build_options, bench_calculate_result);
criterion_main!(benches);
