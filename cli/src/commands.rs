//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for command results
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable terminal output
    Text,
    /// JSON output
    Json,
}

/// CLI arguments for tress
#[derive(Parser, Debug)]
#[command(name = "tress")]
#[command(author, version, about = "Quiz-driven hair routine recommendations")]
#[command(long_about = r#"
Tress evaluates a customer's quiz answers against the recommendation rule
catalog: it validates the answers, reports quiz completion, ranks the
matching rules and generates the routine explanation.

The catalog comes from (first match wins):
1. --questions/--rules     Local JSON files
2. --remote                The quiz-configuration service (see [api] config)
3. built-in templates      The standard five-question hair quiz

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./tress.toml        Project-level config
3. ~/.config/tress/config.toml   Global config

Example:
  tress recommend --answers answers.json
  tress validate --answers answers.json --questions questions.json
  tress checkout --cart cart.json --email jo@example.com
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate quiz answers against the question catalog
    Validate(QuizArgs),

    /// Build a ranked routine recommendation from quiz answers
    Recommend(QuizArgs),

    /// Start a hosted checkout session for a cart
    Checkout(CheckoutArgs),
}

#[derive(clap::Args, Debug)]
pub struct QuizArgs {
    /// JSON file mapping question ids to answers
    #[arg(long, value_name = "PATH")]
    pub answers: PathBuf,

    /// JSON file with the question catalog (defaults to built-in templates)
    #[arg(long, value_name = "PATH", requires = "rules")]
    pub questions: Option<PathBuf>,

    /// JSON file with the rule catalog
    #[arg(long, value_name = "PATH", requires = "questions")]
    pub rules: Option<PathBuf>,

    /// Fetch the catalog from the quiz-configuration service
    #[arg(long, conflicts_with_all = ["questions", "rules"])]
    pub remote: bool,

    /// Bearer token for the service (remote mode)
    #[arg(long, value_name = "TOKEN")]
    pub token: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(clap::Args, Debug)]
pub struct CheckoutArgs {
    /// JSON file with the cart lines
    #[arg(long, value_name = "PATH")]
    pub cart: PathBuf,

    /// Customer email attached to the session
    #[arg(long)]
    pub email: Option<String>,

    /// Customer phone attached to the session
    #[arg(long)]
    pub phone: Option<String>,

    /// Bearer token for the service
    #[arg(long, value_name = "TOKEN")]
    pub token: Option<String>,
}
