//! The `quizforge play` command.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use quizforge_core::catalog::{self, Catalog};
use quizforge_core::engine::{QuizEngine, SessionState};
use quizforge_core::error::CatalogError;
use quizforge_core::model::{QuizQuestion, QuizResult};
use quizforge_generators::builtin_registry;

pub fn execute(
    catalog_path: PathBuf,
    course: String,
    unit: String,
    seed: Option<u64>,
    json: bool,
) -> Result<()> {
    let catalog = load_catalog(&catalog_path)?;
    let unit_entry = catalog.find_unit(&course, &unit)?;
    let generator_id = unit_entry
        .generator
        .clone()
        .ok_or_else(|| CatalogError::NoQuiz {
            unit: unit.clone(),
        })?;

    let registry = builtin_registry();
    let mut rng = match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };

    let mut engine = QuizEngine::create_session(
        &registry,
        &course,
        &unit,
        &generator_id,
        unit_entry.grand_quiz,
        &mut rng,
    )
    .with_context(|| format!("quiz unavailable for unit '{unit}' (topic '{generator_id}')"))?;

    println!("{} — {}", unit_entry.name, course);
    if unit_entry.grand_quiz {
        println!("Grand quiz: 20 questions.");
    }
    println!();

    let stdin = std::io::stdin();
    let mut input = stdin.lock();

    loop {
        run_attempt(&mut engine, &mut input)?;
        let result = engine.calculate_result();
        print_result(&result);

        if json {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }

        if result.stars == 3 || !prompt_retry(&mut input)? {
            break;
        }
        engine.retry();
        println!("\nFresh questions drawn — good luck!\n");
    }

    Ok(())
}

fn load_catalog(path: &Path) -> Result<Catalog> {
    if path.is_dir() {
        catalog::load_catalog_directory(path)
    } else {
        catalog::parse_catalog(path)
    }
}

/// Drive one attempt to completion: regular questions, then the bonus
/// question if the recovery rule fires.
fn run_attempt(engine: &mut QuizEngine, input: &mut impl BufRead) -> Result<()> {
    let regular_count = engine.session().regular_count();

    while engine.check_state() == SessionState::Continue {
        let number = engine.session().current_index + 1;
        let question = engine
            .session()
            .current_question()
            .expect("continue state implies a pending question")
            .clone();
        ask(engine, &question, &format!("Question {number}/{regular_count}"), input)?;
    }

    if engine.check_state() == SessionState::BonusNeeded {
        println!("One question missed — answer the bonus question to recover a star!");
        engine.add_bonus_question();
        if let Some(question) = engine.session().current_question().cloned() {
            ask(engine, &question, "Bonus question", input)?;
        }
    }

    Ok(())
}

/// Present one question, read a letter answer, and grade it.
fn ask(
    engine: &mut QuizEngine,
    question: &QuizQuestion,
    header: &str,
    input: &mut impl BufRead,
) -> Result<()> {
    println!("{header} [{}]: {}", question.difficulty, question.text);
    for option in &question.options {
        println!("  {}) {}", option.id, option.text);
    }

    let selected = loop {
        print!("Your answer [A-D]: ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        let read = input
            .read_line(&mut line)
            .context("failed to read answer")?;
        anyhow::ensure!(read > 0, "input ended before the quiz was complete");

        let answer = line.trim().to_uppercase();
        let mut chars = answer.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) if question.options.iter().any(|o| o.id == letter) => {
                break letter;
            }
            _ => println!("Please answer with one of A, B, C, D."),
        }
    };

    engine.submit_answer(selected);

    if selected == question.correct_option_id {
        println!("Correct!\n");
    } else {
        println!("Incorrect — the answer was {}.", question.correct_option_id);
        if let Some(explanation) = &question.explanation {
            println!("  {explanation}");
        }
        println!();
    }

    Ok(())
}

fn prompt_retry(input: &mut impl BufRead) -> Result<bool> {
    print!("Retry with fresh questions? [y/N]: ");
    std::io::stdout().flush()?;

    let mut line = String::new();
    // EOF counts as a decline.
    if input.read_line(&mut line)? == 0 {
        return Ok(false);
    }
    Ok(line.trim().eq_ignore_ascii_case("y"))
}

fn print_result(result: &QuizResult) {
    use comfy_table::{Cell, Table};

    let stars: String = (0..3)
        .map(|i| if i < result.stars { '★' } else { '☆' })
        .collect();

    let mut table = Table::new();
    table.set_header(vec!["Stars", "Correct", "Answered", "Bonus used"]);
    table.add_row(vec![
        Cell::new(&stars),
        Cell::new(result.correct_answers),
        Cell::new(result.total_questions),
        Cell::new(if result.bonus_used { "yes" } else { "no" }),
    ]);

    println!("\nResult:\n{table}\n");
}
