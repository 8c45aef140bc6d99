use anyhow::Context;
use clap::Parser;
use neg_filter::utils::logger;
use neg_filter::{CliConfig, FilterEngine, NegativeFilterPipeline, StdoutSink};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger();

    tracing::info!("Starting neg-filter");
    tracing::debug!("CLI config: {:?}", config);

    let pipeline = NegativeFilterPipeline::new(StdoutSink::stdout(), config);
    let mut engine = FilterEngine::new(pipeline);

    let written = engine
        .run()
        .context("failed to write filtered values to stdout")?;
    tracing::info!("✅ Printed {} negative values", written);

    Ok(())
}
