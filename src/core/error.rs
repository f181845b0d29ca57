// レポート生成パイプラインのエラー型定義

use std::path::PathBuf;
use thiserror::Error;

/// パイプライン固有のエラー型
///
/// 生成処理は純粋なメモリ内計算のため失敗しない。失敗するのは出力先I/Oとタスク管理のみ。
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("出力ファイルを開けません: {} - {source}", path.display())]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("出力ファイルへの書き込みに失敗しました: {} - {source}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("キューは封印済みです（ユーザー {user_id} を投入できません）")]
    QueueSealed { user_id: u32 },

    #[error("タスクエラー: {source}")]
    TaskFailed {
        #[source]
        source: tokio::task::JoinError,
    },

    #[error("設定エラー: {message}")]
    Configuration { message: String },
}

impl ReportError {
    pub fn open_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::OpenFailed {
            path: path.into(),
            source,
        }
    }

    pub fn write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteFailed {
            path: path.into(),
            source,
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// 出力先I/Oに起因するエラーかどうか
    pub fn is_io(&self) -> bool {
        matches!(self, Self::OpenFailed { .. } | Self::WriteFailed { .. })
    }
}

impl From<tokio::task::JoinError> for ReportError {
    fn from(source: tokio::task::JoinError) -> Self {
        Self::TaskFailed { source }
    }
}

/// パイプライン処理の結果型
pub type ReportResult<T> = std::result::Result<T, ReportError>;
