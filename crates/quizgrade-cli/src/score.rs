//! Scoring and output rendering.

use std::io::Write;

use anyhow::{Context, Result};
use clap::ValueEnum;
use comfy_table::{Cell, Table};

use quizgrade_core::{EvaluatorFactory, QuizEvaluator, ScoreReport, StrategyKind};

/// How the result is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The bare integer score.
    Score,
    /// A pretty-printed JSON score report.
    Json,
    /// A per-question table followed by a summary line.
    Table,
}

/// Score both JSON answer lists and write the result in `format`.
pub fn execute(
    user_json: &str,
    correct_json: &str,
    format: OutputFormat,
    strategy: StrategyKind,
) -> Result<()> {
    let user_answers = QuizEvaluator::parse_answer_list(user_json);
    let correct_answers = QuizEvaluator::parse_answer_list(correct_json);
    let evaluator = QuizEvaluator::with_strategy(EvaluatorFactory::create(strategy));

    let mut stdout = std::io::stdout().lock();

    match format {
        OutputFormat::Score => {
            let score = evaluator.calculate_score(&user_answers, &correct_answers)?;
            write!(stdout, "{score}")?;
        }
        OutputFormat::Json => {
            let report = evaluator.report(&user_answers, &correct_answers)?;
            let json =
                serde_json::to_string_pretty(&report).context("failed to serialize report")?;
            writeln!(stdout, "{json}")?;
        }
        OutputFormat::Table => {
            let report = evaluator.report(&user_answers, &correct_answers)?;
            writeln!(stdout, "{}", render_table(&report))?;
            writeln!(stdout, "Score: {}", report.summary_line())?;
            let unanswered = report.unanswered();
            if unanswered > 0 {
                writeln!(stdout, "Unanswered: {unanswered}")?;
            }
        }
    }

    stdout.flush()?;
    Ok(())
}

fn render_table(report: &ScoreReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["#", "Given", "Expected", "Result"]);

    for v in &report.verdicts {
        table.add_row(vec![
            Cell::new(v.index + 1),
            Cell::new(v.given.as_deref().unwrap_or("-")),
            Cell::new(&v.expected),
            Cell::new(if v.correct { "correct" } else { "wrong" }),
        ]);
    }

    table
}
