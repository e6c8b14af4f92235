use anyhow::Context;
use clap::Parser;
use hippodrome::utils::{logger, validation::Validate};
use hippodrome::{
    CliConfig, ConsoleRenderer, Hippodrome, HippodromeError, OutputFormat, RaceEngine,
    RaceObserver, RaceRandom, RaceReport, RaceSettings, SilentObserver,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    tracing::info!("🐎 Starting hippodrome");
    if args.verbose {
        tracing::debug!("CLI config: {:?}", args);
    }

    let config = args.resolve().unwrap_or_else(|e| fail("Failed to load race", e));
    // 驗證配置
    if let Err(e) = config.validate() {
        fail("Race configuration validation failed", e);
    }

    let hippodrome = config
        .hippodrome()
        .unwrap_or_else(|e| fail("Failed to build the hippodrome", e));
    let source = RaceRandom::from_seed(config.seed());
    let settings = config.settings();

    let report = match args.format {
        OutputFormat::Text => run(hippodrome, source, ConsoleRenderer::stdout(), settings).await,
        OutputFormat::Json => run(hippodrome, source, SilentObserver, settings).await,
    }
    .unwrap_or_else(|e| fail("Race aborted", e));

    if args.format == OutputFormat::Json {
        let json =
            serde_json::to_string_pretty(&report).context("failed to serialize race report")?;
        println!("{}", json);
    }

    Ok(())
}

async fn run<O: RaceObserver>(
    track: Hippodrome,
    source: RaceRandom,
    observer: O,
    settings: RaceSettings,
) -> hippodrome::Result<RaceReport> {
    let mut engine = RaceEngine::new(track, source, observer, settings);
    engine.run().await
}

fn fail(context: &str, e: HippodromeError) -> ! {
    tracing::error!("❌ {}: {}", context, e);
    eprintln!("❌ {}", e);
    if e.is_validation() {
        eprintln!("💡 Check the horse names, speeds and distances in the race file");
    }
    std::process::exit(e.exit_code());
}
