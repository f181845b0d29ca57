use anyhow::Result;
use clap::Parser;
use std::time::Instant;

use activity_report::{cli::Cli, create_local_pipeline};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.to_config();

    let pipeline = create_local_pipeline(&config, cli.quiet);

    let start_time = Instant::now();

    match pipeline.execute(&config).await {
        Ok(summary) => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            }
            println!(
                "DONE! Time Elapsed: {:.2} seconds",
                start_time.elapsed().as_secs_f64()
            );

            if summary.errors > 0 {
                eprintln!("{} reports could not be written", summary.errors);
                std::process::exit(1);
            }
        }
        Err(error) => {
            // 書き込み失敗は致命的。書き込み済みファイルはそのまま残す
            eprintln!("fatal: {error:#}");
            std::process::exit(1);
        }
    }

    Ok(())
}
