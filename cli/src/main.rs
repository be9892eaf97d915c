//! CLI entrypoint for tress
//!
//! Wires the layers together: configuration, catalog source selection,
//! use-case execution and output formatting.

mod commands;
mod output;

use anyhow::{Context, Result};
use clap::Parser;
use commands::{CheckoutArgs, Cli, Command, OutputFormat, QuizArgs};
use std::path::Path;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tress_application::{
    BuildRoutineUseCase, CartItem, Customer, QuizCatalogSource, RoutineRecommendation,
    StartCheckoutUseCase, StaticCatalog,
};
use tress_domain::{AnswerSet, Question, Rule, validate_answers};
use tress_infrastructure::{
    ApiSession, CatalogClient, ConfigLoader, FileConfig, ThawaniCheckout, order_reference,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).map_err(|e| anyhow::anyhow!(e))?
    };
    info!(api = %config.api.base_url, "Loaded configuration");

    match cli.command {
        Command::Validate(args) => run_validate(&args, &config).await,
        Command::Recommend(args) => run_recommend(&args, &config).await,
        Command::Checkout(args) => run_checkout(&args, &config).await,
    }
}

async fn run_validate(args: &QuizArgs, config: &FileConfig) -> Result<()> {
    let answers = read_answers(&args.answers)?;
    let questions = if args.remote {
        catalog_client(args.token.as_deref(), config)?
            .load_questions()
            .await?
    } else if let Some(path) = &args.questions {
        read_json::<Vec<Question>>(path)?
    } else {
        tress_domain::template_questions()
    };

    let report = validate_answers(&answers, &questions);
    match args.output {
        OutputFormat::Text => println!("{}", output::format_report(&report)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    if !report.is_valid {
        std::process::exit(1);
    }
    Ok(())
}

async fn run_recommend(args: &QuizArgs, config: &FileConfig) -> Result<()> {
    let answers = read_answers(&args.answers)?;

    // === Dependency injection: pick the catalog source ===
    let recommendation = if args.remote {
        let client = Arc::new(catalog_client(args.token.as_deref(), config)?);
        build(client, &answers).await?
    } else if let (Some(questions), Some(rules)) = (&args.questions, &args.rules) {
        let catalog = StaticCatalog::new(
            read_json::<Vec<Question>>(questions)?,
            read_json::<Vec<Rule>>(rules)?,
        );
        build(Arc::new(catalog), &answers).await?
    } else {
        build(Arc::new(StaticCatalog::templates()), &answers).await?
    };

    match args.output {
        OutputFormat::Text => println!("{}", output::format_recommendation(&recommendation)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&recommendation)?),
    }
    Ok(())
}

async fn run_checkout(args: &CheckoutArgs, config: &FileConfig) -> Result<()> {
    let cart = read_json::<Vec<CartItem>>(&args.cart)?;
    let customer = Customer {
        email: args.email.clone(),
        phone: args.phone.clone(),
    };

    let mut session = ApiSession::new(&config.api.base_url);
    if let Some(token) = &args.token {
        session = session.with_token(token.as_str());
    }
    let gateway = Arc::new(ThawaniCheckout::new(session)?);
    let use_case = StartCheckoutUseCase::new(gateway, config.checkout.return_base_url.clone());

    let checkout = use_case
        .execute(order_reference(), &cart, &customer)
        .await?;

    println!("order reference: {}", checkout.client_reference_id);
    println!("pay url: {}", checkout.pay_url);
    Ok(())
}

async fn build<C: QuizCatalogSource + 'static>(
    catalog: Arc<C>,
    answers: &AnswerSet,
) -> Result<RoutineRecommendation> {
    Ok(BuildRoutineUseCase::new(catalog).execute(answers).await?)
}

fn catalog_client(token: Option<&str>, config: &FileConfig) -> Result<CatalogClient> {
    let mut session = ApiSession::new(&config.api.base_url);
    if let Some(token) = token {
        session = session.with_token(token);
    }
    Ok(CatalogClient::with_timeout(session, config.api.timeout())?)
}

fn read_answers(path: &Path) -> Result<AnswerSet> {
    read_json(path)
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("failed to parse {}", path.display()))
}
