// パイプラインのトレイト定義

use super::types::RunSummary;
use async_trait::async_trait;
use mockall::automock;

/// 進捗報告の抽象化トレイト
#[automock]
#[async_trait]
pub trait ProgressReporter: Send + Sync {
    /// 処理開始時の報告
    async fn report_started(&self, total_users: usize);

    /// ユーザー1件の生成完了
    async fn report_generated(&self, user_id: u32);

    /// ワーカーが書き込みを開始した
    async fn report_writing(&self, worker_id: usize, user_id: u32);

    /// エラー発生時の報告
    async fn report_error(&self, target: &str, error: &str);

    /// ワーカーがキューの枯渇を検知して終了した
    async fn report_worker_finished(&self, worker_id: usize, processed: usize);

    /// 処理完了時の報告
    async fn report_completed(&self, summary: &RunSummary);
}
