// ユーザーレコードとアクティビティログのデータ型定義

use chrono::{DateTime, Local, SecondsFormat};
use serde::Serialize;
use std::fmt;

/// アクティビティログに記録される操作の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    LoggedIn,
    LoggedOut,
    CreatedRecord,
    DeletedRecord,
    UpdatedAccount,
}

impl Action {
    /// 設定済みの操作一覧（順序は固定）
    pub const ALL: [Action; 5] = [
        Action::LoggedIn,
        Action::LoggedOut,
        Action::CreatedRecord,
        Action::DeletedRecord,
        Action::UpdatedAccount,
    ];

    pub const fn label(&self) -> &'static str {
        match self {
            Self::LoggedIn => "logged in",
            Self::LoggedOut => "logged out",
            Self::CreatedRecord => "created record",
            Self::DeletedRecord => "deleted record",
            Self::UpdatedAccount => "updated account",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// ログ1件分（操作と発生時刻）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogItem {
    pub action: Action,
    pub timestamp: DateTime<Local>,
}

impl LogItem {
    pub fn new(action: Action, timestamp: DateTime<Local>) -> Self {
        Self { action, timestamp }
    }

    /// 現在時刻でログを作成
    pub fn now(action: Action) -> Self {
        Self::new(action, Local::now())
    }
}

/// 合成ユーザーレコード
///
/// 生成後は読み取り専用。ログの順序は生成順（＝時系列順）のまま保持される。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    id: u32,
    email: String,
    logs: Vec<LogItem>,
}

impl User {
    pub fn new(id: u32, logs: Vec<LogItem>) -> Self {
        Self {
            id,
            email: Self::email_for(id),
            logs,
        }
    }

    /// IDから決定的に導出されるメールアドレス
    pub fn email_for(id: u32) -> String {
        format!("user{id}@company.com")
    }

    /// レポートの出力ファイル名
    pub fn file_name_for(id: u32) -> String {
        format!("uid{id}.txt")
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn logs(&self) -> &[LogItem] {
        &self.logs
    }

    pub fn file_name(&self) -> String {
        Self::file_name_for(self.id)
    }

    /// アクティビティレポートを整形
    ///
    /// ヘッダー行の後に、ログ1件につき1行（0始まりの番号、操作、RFC 3339形式の時刻）を出力する。
    pub fn activity_report(&self) -> String {
        let mut output = format!(
            "UID: {}; Email: {};\nActivity Log:\n",
            self.id, self.email
        );
        for (index, item) in self.logs.iter().enumerate() {
            output.push_str(&format!(
                "{index}. [{}] at {}\n",
                item.action,
                item.timestamp.to_rfc3339_opts(SecondsFormat::Secs, true)
            ));
        }
        output
    }
}

/// 実行全体のサマリー
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub total_users: usize,
    pub written: usize,
    pub errors: usize,
    /// ワーカーごとの処理件数（インデックス＝ワーカーID）
    pub per_worker: Vec<usize>,
    pub elapsed_ms: u64,
}

impl RunSummary {
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed_ms as f64 / 1000.0
    }

    /// 全ワーカーの処理件数の合計
    pub fn delivered(&self) -> usize {
        self.per_worker.iter().sum()
    }
}
