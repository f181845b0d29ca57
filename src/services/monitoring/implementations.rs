// 進捗監視の具象実装

use crate::core::{ProgressReporter, RunSummary};
use async_trait::async_trait;

/// コンソール出力による進捗報告実装
#[derive(Debug, Default, Clone)]
pub struct ConsoleProgressReporter {
    quiet: bool,
}

impl ConsoleProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quiet() -> Self {
        Self { quiet: true }
    }
}

#[async_trait]
impl ProgressReporter for ConsoleProgressReporter {
    async fn report_started(&self, total_users: usize) {
        if !self.quiet {
            println!("generating {total_users} users...");
        }
    }

    async fn report_generated(&self, user_id: u32) {
        if !self.quiet {
            println!("generated user {user_id}");
        }
    }

    async fn report_writing(&self, _worker_id: usize, user_id: u32) {
        if !self.quiet {
            println!("WRITING FILE FOR UID {user_id}");
        }
    }

    async fn report_error(&self, target: &str, error: &str) {
        // エラーはquietでも出す
        eprintln!("error writing {target}: {error}");
    }

    async fn report_worker_finished(&self, worker_id: usize, _processed: usize) {
        if !self.quiet {
            println!("worker #{worker_id} finished");
        }
    }

    async fn report_completed(&self, summary: &RunSummary) {
        if !self.quiet {
            println!(
                "completed: {} written, {} errors",
                summary.written, summary.errors
            );
        }
    }
}

/// 何もしない進捗報告実装（テスト・ベンチマーク用）
#[derive(Debug, Default, Clone)]
pub struct NoOpProgressReporter;

impl NoOpProgressReporter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProgressReporter for NoOpProgressReporter {
    async fn report_started(&self, _total_users: usize) {
        // 何もしない
    }

    async fn report_generated(&self, _user_id: u32) {
        // 何もしない
    }

    async fn report_writing(&self, _worker_id: usize, _user_id: u32) {
        // 何もしない
    }

    async fn report_error(&self, _target: &str, _error: &str) {
        // 何もしない
    }

    async fn report_worker_finished(&self, _worker_id: usize, _processed: usize) {
        // 何もしない
    }

    async fn report_completed(&self, _summary: &RunSummary) {
        // 何もしない
    }
}
