// 進捗監視機能
// 生成・書き込みの進捗、エラー通知、完了通知

pub mod implementations;

// 公開API
pub use implementations::{ConsoleProgressReporter, NoOpProgressReporter};
