// コアレイヤー - データ型、トレイト、エラー、設定
// 他のレイヤーから参照される基本的な抽象化を提供

pub mod config;
pub mod error;
pub mod traits;
pub mod types;

// 公開API - 明示的にエクスポートして曖昧性を回避
pub use config::{
    validate_config, DefaultPipelineConfig, FailurePolicy, OpenMode, PipelineConfig,
};
pub use error::{ReportError, ReportResult};
pub use traits::ProgressReporter;
pub use types::{Action, LogItem, RunSummary, User};
