use anyhow::Result;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Instant;
use tracing::{error, info};

use lotto_report::args::OutputFormat;
use lotto_report::report::{render_json, render_text};
use lotto_report::utils::{setup_logging, validate_args};
use lotto_report::{get_game_data, Args, GameConfig, Report, ReportBuilder, Sampler};

async fn run(args: &Args) -> Result<Report> {
    let total_start_time = Instant::now();
    info!(action = "start", component = "main", game = args.game.slug(), "Starting report");

    let config = GameConfig::from_env(args.game)?;
    let records = get_game_data(args.game, &config, &args.cache_dir).await?;

    let sampler = (!args.no_lucky_pick).then(|| Sampler::new(args.max_attempts));
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    let report = ReportBuilder::new(args.game)
        .start_date(args.start_date)
        .sampler(sampler)
        .build(&records, &mut rng)?;

    info!(
        action = "complete",
        component = "main",
        duration_ms = total_start_time.elapsed().as_millis(),
        "Report completed successfully"
    );
    Ok(report)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    validate_args(&args)?;

    match run(&args).await {
        Ok(report) => {
            match args.format {
                OutputFormat::Text => print!("{}", render_text(&report, args.top)),
                OutputFormat::Json => println!("{}", render_json(&report)?),
            }
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Report failed");
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
