//! quizgrade CLI: score a quiz submission against its answer key.

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use quizgrade_core::config::{load_config, load_config_from};
use quizgrade_core::StrategyKind;

mod score;

use score::OutputFormat;

#[derive(Parser)]
#[command(
    name = "quizgrade",
    version,
    about = "Score quiz answers against a reference answer key"
)]
struct Cli {
    /// User answers as a JSON array of strings (e.g. '["A","B","C"]')
    #[arg(allow_hyphen_values = true)]
    user_answers: Option<String>,

    /// Correct answers as a JSON array of strings, in the same order
    #[arg(allow_hyphen_values = true)]
    correct_answers: Option<String>,

    /// Extra positional arguments are accepted and ignored
    #[arg(hide = true, allow_hyphen_values = true)]
    extra: Vec<String>,

    /// Output format: score, json, table
    #[arg(long, value_enum, default_value = "score")]
    format: OutputFormat,

    /// Scoring strategy (default from config: "exact")
    #[arg(long)]
    strategy: Option<String>,

    /// Config file path
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let (Some(user_answers), Some(correct_answers)) =
        (cli.user_answers.as_deref(), cli.correct_answers.as_deref())
    else {
        print_usage();
        process::exit(1);
    };

    let result = run(
        user_answers,
        correct_answers,
        cli.format,
        cli.strategy.as_deref(),
        cli.config,
        cli.extra.len(),
    );

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(
    user_answers: &str,
    correct_answers: &str,
    format: OutputFormat,
    strategy: Option<&str>,
    config: Option<PathBuf>,
    extra: usize,
) -> Result<()> {
    let config = match config {
        Some(path) => load_config_from(Some(&path))?,
        None => load_config()?,
    };
    init_tracing(&config.log_filter);

    if extra > 0 {
        tracing::debug!("ignoring {extra} extra positional argument(s)");
    }

    let strategy = match strategy {
        Some(name) => name.parse::<StrategyKind>()?,
        None => config.strategy,
    };

    score::execute(user_answers, correct_answers, format, strategy)
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_usage() {
    println!("Usage: quizgrade <user_answers_json> <correct_answers_json>");
    println!(r#"Example: quizgrade '["A","B","C"]' '["A","B","D"]'"#);
}
