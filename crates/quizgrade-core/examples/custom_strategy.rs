//! Custom strategy example: plug a new scoring policy into the evaluator.
//!
//! ```bash
//! cargo run -p quizgrade-core --example custom_strategy
//! ```

use quizgrade_core::{normalize, EvaluationStrategy, QuizEvaluator, Score};

/// Accepts an answer when it matches the reference or any listed synonym.
///
/// Reference answers use `|` to separate accepted spellings, e.g. `"NYC|New York"`.
struct SynonymMatch;

impl EvaluationStrategy for SynonymMatch {
    fn name(&self) -> &str {
        "synonym"
    }

    fn evaluate(&self, user_answers: &[String], correct_answers: &[String]) -> Score {
        user_answers
            .iter()
            .zip(correct_answers)
            .filter(|(given, expected)| self.answers_match(given, expected))
            .count()
    }

    fn answers_match(&self, given: &str, expected: &str) -> bool {
        let given = normalize(given);
        expected.split('|').any(|option| normalize(option) == given)
    }
}

fn main() -> anyhow::Result<()> {
    let user = QuizEvaluator::try_parse_answer_list(r#"["new york", "Paris", "B"]"#)?;
    let correct = QuizEvaluator::try_parse_answer_list(r#"["NYC|New York", "paris", "C"]"#)?;

    let mut evaluator = QuizEvaluator::new();
    println!(
        "{:<10} {}",
        "exact",
        evaluator.report(&user, &correct)?.summary_line()
    );

    evaluator.set_strategy(Box::new(SynonymMatch));
    let report = evaluator.report(&user, &correct)?;
    println!("{:<10} {}", report.strategy, report.summary_line());

    for v in &report.verdicts {
        let mark = if v.correct { "ok" } else { "wrong" };
        println!(
            "  #{} {:<10} expected {:<15} {mark}",
            v.index + 1,
            v.given.as_deref().unwrap_or("-"),
            v.expected
        );
    }

    Ok(())
}
