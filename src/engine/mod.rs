// エンジン層 - 2段パイプラインとオーケストレーション
// サービス層を組み合わせて生成から書き込みまでを実行する

pub mod api;
pub mod consumer;
pub mod pipeline;
pub mod producer;
pub mod queue;

#[cfg(test)]
pub(crate) mod test_support;

// 公開API - 主要エンジンクラス
pub use api::{create_local_pipeline, create_quiet_local_pipeline};
pub use pipeline::ReportPipeline;
