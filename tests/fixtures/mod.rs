// テストユーティリティ
// 出力ファイルの検査ヘルパー

use std::fs;
use std::path::Path;

/// 出力ディレクトリ内の `uid<id>.txt` ファイルをID順に列挙
pub fn report_ids(dir: &Path) -> Vec<u32> {
    let mut ids: Vec<u32> = fs::read_dir(dir)
        .unwrap()
        .filter_map(|entry| {
            let entry = entry.unwrap();
            if !entry.file_type().unwrap().is_file() {
                return None;
            }
            let name = entry.file_name().into_string().ok()?;
            name.strip_prefix("uid")?.strip_suffix(".txt")?.parse().ok()
        })
        .collect();
    ids.sort_unstable();
    ids
}

/// レポートを読み込み、ヘッダーがIDと一致することを確認してログ行を返す
pub fn read_report(dir: &Path, id: u32) -> Vec<String> {
    let content = fs::read_to_string(dir.join(format!("uid{id}.txt"))).unwrap();
    let mut lines = content.lines();

    assert_eq!(
        lines.next(),
        Some(format!("UID: {id}; Email: user{id}@company.com;").as_str())
    );
    assert_eq!(lines.next(), Some("Activity Log:"));
    lines.map(str::to_string).collect()
}
