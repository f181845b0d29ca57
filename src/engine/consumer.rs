// Consumer - レポート書き込みワーカー

use super::queue::QueueReceiver;
use crate::core::{FailurePolicy, ProgressReporter, ReportError};
use crate::storage::ReportStorage;
use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinSet;

/// ワーカー共通の設定
#[derive(Debug, Clone, Copy)]
pub struct WorkerSettings {
    /// 1件書き込むごとの擬似I/O待ち時間
    pub write_delay: Duration,
    pub failure_policy: FailurePolicy,
}

/// ワーカー1つ分の処理結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerOutcome {
    pub worker_id: usize,
    pub written: usize,
    pub errors: usize,
}

impl WorkerOutcome {
    /// このワーカーがキューから受け取った件数
    pub fn processed(&self) -> usize {
        self.written + self.errors
    }
}

/// 単一Consumerワーカーの本体
///
/// キューが封印済みかつ空になるまで取り出し続ける。FailFastでは最初の書き込み失敗で即座にエラーを返す。
pub async fn run_worker<S, R>(
    worker_id: usize,
    queue: QueueReceiver,
    storage: Arc<S>,
    reporter: Arc<R>,
    settings: WorkerSettings,
) -> Result<WorkerOutcome>
where
    S: ReportStorage + ?Sized,
    R: ProgressReporter + ?Sized,
{
    let mut outcome = WorkerOutcome {
        worker_id,
        written: 0,
        errors: 0,
    };

    while let Some(user) = queue.pop().await {
        reporter.report_writing(worker_id, user.id()).await;

        let report = user.activity_report();
        match storage.write_report(user.id(), &report).await {
            Ok(()) => outcome.written += 1,
            Err(error) => {
                let target = storage.target_for(user.id());
                reporter.report_error(&target, &format!("{error:#}")).await;
                match settings.failure_policy {
                    FailurePolicy::FailFast => return Err(error),
                    FailurePolicy::Continue => outcome.errors += 1,
                }
            }
        }

        // 擬似I/O待ち（このワーカーだけが止まる）
        if !settings.write_delay.is_zero() {
            tokio::time::sleep(settings.write_delay).await;
        }
    }

    reporter
        .report_worker_finished(worker_id, outcome.processed())
        .await;
    Ok(outcome)
}

/// Consumers: 固定数のワーカープールを起動
pub fn spawn_consumers<S, R>(
    queue: QueueReceiver,
    storage: Arc<S>,
    reporter: Arc<R>,
    settings: WorkerSettings,
    worker_count: usize,
) -> JoinSet<Result<WorkerOutcome>>
where
    S: ReportStorage + ?Sized + 'static,
    R: ProgressReporter + ?Sized + 'static,
{
    let mut workers = JoinSet::new();
    for worker_id in 0..worker_count {
        workers.spawn(run_worker(
            worker_id,
            queue.clone(),
            Arc::clone(&storage),
            Arc::clone(&reporter),
            settings,
        ));
    }
    workers
}

/// 書き込みステージのバリア: 全ワーカーの終了を待つ
///
/// いずれかのワーカーが失敗した時点で残りのワーカーを中断し、そのエラーを返す。
pub async fn wait_for_consumers(
    mut workers: JoinSet<Result<WorkerOutcome>>,
) -> Result<Vec<WorkerOutcome>> {
    let mut outcomes = Vec::new();
    while let Some(joined) = workers.join_next().await {
        match joined {
            Ok(Ok(outcome)) => outcomes.push(outcome),
            Ok(Err(error)) => {
                workers.abort_all();
                return Err(error);
            }
            Err(join_error) => {
                workers.abort_all();
                return Err(ReportError::from(join_error).into());
            }
        }
    }
    outcomes.sort_by_key(|outcome| outcome.worker_id);
    Ok(outcomes)
}
