// Generator - 単一ユーザーの生成

use crate::core::types::{Action, LogItem, User};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Producerタスクごとの独立した乱数生成器
///
/// タスク間で生成器を共有しないため同期は不要。同じ基底シードなら同じ序数で同じ系列になる。
pub fn rng_for(base_seed: u64, ordinal: usize) -> StdRng {
    StdRng::seed_from_u64(base_seed.wrapping_add(ordinal as u64))
}

/// 操作をランダムに選ぶ
///
/// 範囲は `0..ALL.len() - 1` で、最後の操作（`UpdatedAccount`）は選ばれない。
pub fn sample_action<R: Rng>(rng: &mut R) -> Action {
    Action::ALL[rng.random_range(0..Action::ALL.len() - 1)]
}

/// 指定件数のログを生成（時刻は生成時点の現在時刻）
pub fn generate_logs<R: Rng>(count: usize, rng: &mut R) -> Vec<LogItem> {
    (0..count)
        .map(|_| LogItem::now(sample_action(&mut *rng)))
        .collect()
}

/// 序数 `ordinal` のユーザーを生成（ID = ordinal + 1）
///
/// ログ件数は `0..max_log_entries` からランダムに決まる。
pub fn generate_user<R: Rng>(ordinal: usize, max_log_entries: usize, rng: &mut R) -> User {
    let count = rng.random_range(0..max_log_entries);
    User::new(ordinal as u32 + 1, generate_logs(count, rng))
}
