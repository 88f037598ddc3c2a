use clap::Parser;

use critique::cli::Cli;
use critique::config;
use critique::output::ReviewWriter;
use critique::review::{GenaiBackend, ReviewChain, RoleModels, RunLogger, load_request};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr; stdout carries the review itself.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // A ./.env file may hold the API key; exported variables take precedence.
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_config(&cli)?;
    tracing::info!(
        junior = %config.junior_model,
        senior = %config.senior_model,
        manager = %config.manager_model,
        reviews_dir = %config.reviews_dir.display(),
        "Config loaded"
    );

    // Fail on a missing credential before touching the source file.
    let api_key = config::resolve_api_key(&config)?;

    let request = load_request(&cli.instruction, &cli.file).await?;
    tracing::info!(file = %cli.file.display(), chars = request.source.len(), "Source loaded");

    let mut logger = if config.session_log {
        RunLogger::new(&config.reviews_dir)?
    } else {
        RunLogger::disabled()
    };
    if let Some(path) = logger.log_path() {
        tracing::info!(path = %path.display(), "Run transcript");
    }

    let backend = GenaiBackend::new(api_key);
    let notes = ReviewChain::new(&backend, RoleModels::from_config(&config), &mut logger)
        .run(&request)
        .await?;

    println!("{}", notes.manager);

    let writer = ReviewWriter::new(&config.reviews_dir, &cli.file);
    let written = match writer.write(&notes, config.planner_notes).await {
        Ok(paths) => paths,
        Err(e) => {
            logger.log_error(None, &e.to_string());
            logger.log_run_end("failed");
            return Err(e.into());
        }
    };

    println!();
    for path in &written {
        logger.log_review_written(path);
        println!("✓ Review saved to: {}", path.display());
    }
    logger.log_run_end("completed");

    Ok(())
}
