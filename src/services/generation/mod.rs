// ユーザー生成機能
// ランダムなアクティビティログを持つ合成ユーザーを作る

pub mod generator;

// 公開API
pub use generator::{generate_logs, generate_user, rng_for, sample_action};
