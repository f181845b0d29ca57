// 高レベル公開API
// ReportPipelineを簡単に使用できるようにするための便利な関数

use super::ReportPipeline;
use crate::{
    core::{DefaultPipelineConfig, PipelineConfig},
    services::{ConsoleProgressReporter, NoOpProgressReporter},
    storage::local::LocalReportStorage,
};
use std::sync::Arc;

/// 設定の出力ディレクトリと開き方でローカル出力先を作成
pub fn local_storage_for(config: &DefaultPipelineConfig) -> LocalReportStorage {
    LocalReportStorage::new(config.output_dir()).with_open_mode(config.open_mode())
}

/// コンソール出力付きのローカルパイプラインを作成
///
/// `quiet` の場合は進捗行を出さず、エラー行だけを出力する
pub fn create_local_pipeline(
    config: &DefaultPipelineConfig,
    quiet: bool,
) -> ReportPipeline<LocalReportStorage, ConsoleProgressReporter> {
    let reporter = if quiet {
        ConsoleProgressReporter::quiet()
    } else {
        ConsoleProgressReporter::new()
    };
    ReportPipeline::new(Arc::new(local_storage_for(config)), Arc::new(reporter))
}

/// 静音版のローカルパイプラインを作成（テスト・バックグラウンド用）
pub fn create_quiet_local_pipeline(
    config: &DefaultPipelineConfig,
) -> ReportPipeline<LocalReportStorage, NoOpProgressReporter> {
    ReportPipeline::new(
        Arc::new(local_storage_for(config)),
        Arc::new(NoOpProgressReporter::new()),
    )
}
