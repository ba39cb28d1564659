use clap::Parser;
use foodtruck_finder::utils::{logger, validation::Validate};
use foodtruck_finder::{
    CliConfig, ConfigProvider, FinderEngine, PaginatedPresenter, SodaSource, StdinPrompt,
    SystemClock,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting foodtruck-finder");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let source = SodaSource::new(config.endpoint());
    let presenter = PaginatedPresenter::new(config.page_size());
    let engine = FinderEngine::new(source, SystemClock::new(), presenter);

    let mut out = std::io::stdout();
    let mut prompt = StdinPrompt::new();
    engine.run(&mut out, &mut prompt).await?;

    Ok(())
}
