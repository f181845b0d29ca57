// パイプライン設定
//
// 既定値は固定ワークロード（ユーザー100件、ワーカー20）をそのまま再現する。

use super::error::{ReportError, ReportResult};
use mockall::automock;
use std::path::PathBuf;
use std::time::Duration;

/// 生成するユーザー数の既定値
pub const DEFAULT_USER_COUNT: usize = 100;
/// 書き込みワーカー数の既定値
pub const DEFAULT_WORKER_COUNT: usize = 20;
/// 出力ディレクトリの既定値（事前に存在している前提）
pub const DEFAULT_OUTPUT_DIR: &str = "users";
/// ユーザー1件あたりのログ件数の上限（この値は含まない）
pub const MAX_LOG_ENTRIES: usize = 1000;
/// 1件書き込むごとの擬似I/O待ち時間
pub const DEFAULT_WRITE_DELAY: Duration = Duration::from_secs(1);
/// Producerがユーザーを投入した後の待ち時間
pub const DEFAULT_GENERATION_DELAY: Duration = Duration::from_millis(100);
/// ユーザー数の上限（IDは `u32` で採番する）
pub const MAX_USER_COUNT: usize = u32::MAX as usize;

/// 出力ファイルの開き方
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpenMode {
    /// 既存内容を切り詰めずに先頭から上書きする（新しいレポートが短いと古い末尾が残る）
    #[default]
    Preserve,
    /// 既存内容を切り詰めてから書き込む
    Truncate,
}

/// 書き込み失敗時の方針
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// 最初の失敗で全ワーカーを中断し、実行全体をエラーで終える
    #[default]
    FailFast,
    /// 失敗を報告して次のレコードへ進む
    Continue,
}

/// パイプライン設定を抽象化するトレイト
#[automock]
pub trait PipelineConfig: Send + Sync {
    /// 生成するユーザー数
    fn user_count(&self) -> usize;

    /// 書き込みワーカー数
    fn worker_count(&self) -> usize;

    /// キューの容量
    fn queue_capacity(&self) -> usize;

    /// 1件書き込み後の待ち時間
    fn write_delay(&self) -> Duration;

    /// ユーザー生成後の待ち時間
    fn generation_delay(&self) -> Duration;

    /// ログ件数の上限（排他的）
    fn max_log_entries(&self) -> usize;

    fn open_mode(&self) -> OpenMode;

    fn failure_policy(&self) -> FailurePolicy;

    /// 乱数シード。Noneなら実行ごとに決める
    fn seed(&self) -> Option<u64>;
}

/// 設定値の整合性を検証
pub fn validate_config<C: PipelineConfig + ?Sized>(config: &C) -> ReportResult<()> {
    if config.worker_count() == 0 {
        return Err(ReportError::configuration(
            "ワーカー数は1以上である必要があります",
        ));
    }
    if config.max_log_entries() == 0 {
        return Err(ReportError::configuration(
            "ログ件数の上限は1以上である必要があります",
        ));
    }
    if config.queue_capacity() == 0 {
        return Err(ReportError::configuration(
            "キュー容量は1以上である必要があります",
        ));
    }
    if config.queue_capacity() > MAX_USER_COUNT {
        return Err(ReportError::configuration(format!(
            "キュー容量は{MAX_USER_COUNT}以下である必要があります"
        )));
    }
    if config.user_count() > MAX_USER_COUNT {
        return Err(ReportError::configuration(format!(
            "ユーザー数は{MAX_USER_COUNT}以下である必要があります"
        )));
    }
    // 書き込みワーカーはバリア1の後に起動するため、全件がキューに収まらないと投入が終わらない
    if config.queue_capacity() < config.user_count() {
        return Err(ReportError::configuration(
            "キュー容量はユーザー数以上である必要があります",
        ));
    }
    Ok(())
}

/// デフォルト設定実装
#[derive(Debug, Clone)]
pub struct DefaultPipelineConfig {
    user_count: usize,
    worker_count: usize,
    queue_capacity: Option<usize>,
    write_delay: Duration,
    generation_delay: Duration,
    max_log_entries: usize,
    open_mode: OpenMode,
    failure_policy: FailurePolicy,
    seed: Option<u64>,
    output_dir: PathBuf,
}

impl DefaultPipelineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// テスト用: 待ち時間なし
    pub fn immediate() -> Self {
        Self::default()
            .with_write_delay(Duration::ZERO)
            .with_generation_delay(Duration::ZERO)
    }

    pub fn with_user_count(mut self, user_count: usize) -> Self {
        self.user_count = user_count;
        self
    }

    pub fn with_worker_count(mut self, worker_count: usize) -> Self {
        self.worker_count = worker_count;
        self
    }

    pub fn with_queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = Some(capacity);
        self
    }

    pub fn with_write_delay(mut self, delay: Duration) -> Self {
        self.write_delay = delay;
        self
    }

    pub fn with_generation_delay(mut self, delay: Duration) -> Self {
        self.generation_delay = delay;
        self
    }

    pub fn with_max_log_entries(mut self, max: usize) -> Self {
        self.max_log_entries = max;
        self
    }

    pub fn with_open_mode(mut self, mode: OpenMode) -> Self {
        self.open_mode = mode;
        self
    }

    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn output_dir(&self) -> &PathBuf {
        &self.output_dir
    }
}

impl Default for DefaultPipelineConfig {
    fn default() -> Self {
        Self {
            user_count: DEFAULT_USER_COUNT,
            worker_count: DEFAULT_WORKER_COUNT,
            queue_capacity: None,
            write_delay: DEFAULT_WRITE_DELAY,
            generation_delay: DEFAULT_GENERATION_DELAY,
            max_log_entries: MAX_LOG_ENTRIES,
            open_mode: OpenMode::default(),
            failure_policy: FailurePolicy::default(),
            seed: None,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

impl PipelineConfig for DefaultPipelineConfig {
    fn user_count(&self) -> usize {
        self.user_count
    }

    fn worker_count(&self) -> usize {
        self.worker_count
    }

    fn queue_capacity(&self) -> usize {
        // 容量はユーザー数と同じ（投入がブロックしない）
        self.queue_capacity.unwrap_or(self.user_count).max(1)
    }

    fn write_delay(&self) -> Duration {
        self.write_delay
    }

    fn generation_delay(&self) -> Duration {
        self.generation_delay
    }

    fn max_log_entries(&self) -> usize {
        self.max_log_entries
    }

    fn open_mode(&self) -> OpenMode {
        self.open_mode
    }

    fn failure_policy(&self) -> FailurePolicy {
        self.failure_policy
    }

    fn seed(&self) -> Option<u64> {
        self.seed
    }
}
