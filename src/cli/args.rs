use crate::core::config::{DEFAULT_OUTPUT_DIR, DEFAULT_USER_COUNT, DEFAULT_WORKER_COUNT};
use crate::core::{DefaultPipelineConfig, FailurePolicy, OpenMode};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "activity_report")]
#[command(about = "Generate synthetic users and write one activity report file per user")]
#[command(version)]
pub struct Cli {
    /// Number of users to generate
    #[arg(short, long, default_value_t = DEFAULT_USER_COUNT)]
    pub users: usize,

    /// Number of concurrent writer workers
    #[arg(short, long, default_value_t = DEFAULT_WORKER_COUNT)]
    pub workers: usize,

    /// Existing directory that receives the uid<id>.txt reports
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Simulated I/O latency per written report, in milliseconds
    #[arg(long, default_value_t = 1000)]
    pub delay_ms: u64,

    /// Pause after each generated user, in milliseconds
    #[arg(long, default_value_t = 100)]
    pub generation_delay_ms: u64,

    /// Seed for reproducible log contents
    #[arg(long)]
    pub seed: Option<u64>,

    /// Truncate existing report files instead of overwriting in place
    #[arg(long)]
    pub truncate: bool,

    /// Report write failures and keep going instead of aborting the run
    #[arg(long)]
    pub keep_going: bool,

    /// Suppress progress lines
    #[arg(short, long)]
    pub quiet: bool,

    /// Print the run summary as JSON
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// 引数からパイプライン設定を組み立てる
    pub fn to_config(&self) -> DefaultPipelineConfig {
        let mut config = DefaultPipelineConfig::new()
            .with_user_count(self.users)
            .with_worker_count(self.workers)
            .with_output_dir(&self.output_dir)
            .with_write_delay(Duration::from_millis(self.delay_ms))
            .with_generation_delay(Duration::from_millis(self.generation_delay_ms));

        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if self.truncate {
            config = config.with_open_mode(OpenMode::Truncate);
        }
        if self.keep_going {
            config = config.with_failure_policy(FailurePolicy::Continue);
        }
        config
    }
}
