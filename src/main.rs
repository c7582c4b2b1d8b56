use clap::Parser;
use courier_tracker::app::report;
use courier_tracker::utils::{logger, validation::Validate};
use courier_tracker::{build_tracker, CliConfig, TrackerError};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::debug!("CLI config: {:?}", cli);

    let config = match cli.resolve().and_then(|config| {
        config.validate()?;
        Ok(config)
    }) {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };

    let tracker = match build_tracker(&config) {
        Ok(tracker) => tracker,
        Err(e) => exit_with(&e),
    };

    let results = match tracker.track_batch(&cli.tracking_numbers).await {
        Ok(results) => results,
        Err(e) => exit_with(&e),
    };

    if cli.json {
        match report::render_json(&results) {
            Ok(json) => println!("{}", json),
            Err(e) => exit_with(&e),
        }
    } else {
        for result in &results {
            print!("{}", report::render_text(result));
        }
    }
}

fn exit_with(e: &TrackerError) -> ! {
    tracing::error!("❌ {} (Category: {:?})", e, e.category());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    std::process::exit(1);
}
