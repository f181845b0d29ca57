// Pipeline - 生成ステージと書き込みステージのオーケストレーション
//
// 2つのステージは厳密に順番に実行する。生成ステージの全タスク完了（バリア1）を待ってからキューを封印し、
// その後に書き込みワーカーを起動して全ワーカーの終了（バリア2）を待つ。

use super::consumer::{spawn_consumers, wait_for_consumers, WorkerSettings};
use super::producer::{spawn_producers, wait_for_producers, ProducerSettings};
use super::queue;
use crate::core::{validate_config, PipelineConfig, ProgressReporter, RunSummary};
use crate::storage::ReportStorage;
use anyhow::Result;
use std::sync::Arc;
use std::time::Instant;

/// レポート生成パイプライン
pub struct ReportPipeline<S: ?Sized, R: ?Sized> {
    storage: Arc<S>,
    reporter: Arc<R>,
}

impl<S, R> ReportPipeline<S, R>
where
    S: ReportStorage + ?Sized + 'static,
    R: ProgressReporter + ?Sized + 'static,
{
    /// 新しいパイプラインを作成
    pub fn new(storage: Arc<S>, reporter: Arc<R>) -> Self {
        Self { storage, reporter }
    }

    /// パイプラインを実行
    pub async fn execute<C>(&self, config: &C) -> Result<RunSummary>
    where
        C: PipelineConfig + ?Sized,
    {
        validate_config(config)?;
        let start_time = Instant::now();

        let total_users = config.user_count();
        self.reporter.report_started(total_users).await;

        let (user_queue, receiver) = queue::bounded(config.queue_capacity());

        // 生成ステージ
        let producer_settings = ProducerSettings {
            base_seed: config.seed().unwrap_or_else(rand::random),
            max_log_entries: config.max_log_entries(),
            generation_delay: config.generation_delay(),
        };
        let producers = spawn_producers(
            total_users,
            producer_settings,
            &user_queue,
            Arc::clone(&self.reporter),
        );
        wait_for_producers(producers).await?;

        // バリア1通過後にのみ封印する
        user_queue.seal();

        // 書き込みステージ
        let worker_settings = WorkerSettings {
            write_delay: config.write_delay(),
            failure_policy: config.failure_policy(),
        };
        let workers = spawn_consumers(
            receiver,
            Arc::clone(&self.storage),
            Arc::clone(&self.reporter),
            worker_settings,
            config.worker_count(),
        );
        let outcomes = wait_for_consumers(workers).await?;

        let summary = RunSummary {
            total_users,
            written: outcomes.iter().map(|o| o.written).sum(),
            errors: outcomes.iter().map(|o| o.errors).sum(),
            per_worker: outcomes.iter().map(|o| o.processed()).collect(),
            elapsed_ms: start_time.elapsed().as_millis() as u64,
        };
        self.reporter.report_completed(&summary).await;

        Ok(summary)
    }
}
