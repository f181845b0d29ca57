// サービス層 - 機能別のビジネスロジック
// 各サービスは特定の責任を持ち、疎結合で設計されている

pub mod generation;
pub mod monitoring;

// 公開API - 各サービスの主要機能を明示的にエクスポート
pub use generation::{generate_logs, generate_user, rng_for, sample_action};
pub use monitoring::{ConsoleProgressReporter, NoOpProgressReporter};
