// CLI層 - コマンドライン引数の定義
// 引数なしで実行すると固定ワークロードの既定値になる

pub mod args;

// 公開API
pub use args::*;
