use anyhow::Context;
use clap::Parser;
use solid_kata::core::runner;
use solid_kata::utils::{logger, validation::Validate};
use solid_kata::{CliConfig, ScenarioConfig};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_logger(config.verbose, config.log_json);

    tracing::info!("Starting solid-kata demos");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let scenario = match &config.scenario {
        Some(path) => ScenarioConfig::from_file(path)
            .with_context(|| format!("failed to load scenario from {}", path.display()))?,
        None => ScenarioConfig::default(),
    };

    if let Err(e) = scenario.validate() {
        tracing::error!("Scenario validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    for principle in config.selected_demos() {
        runner::run_demo(principle, &scenario);
    }

    tracing::info!("All selected demos completed");
    Ok(())
}
