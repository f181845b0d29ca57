use super::ReportStorage;
use crate::core::{OpenMode, ReportError, User};
use anyhow::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;

/// ローカルファイルシステム用のレポート出力先
///
/// 出力ディレクトリは事前に存在している前提で、ここでは作成しない。
#[derive(Debug, Clone)]
pub struct LocalReportStorage {
    root: PathBuf,
    mode: OpenMode,
}

impl LocalReportStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            mode: OpenMode::default(),
        }
    }

    pub fn with_open_mode(mut self, mode: OpenMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn open_mode(&self) -> OpenMode {
        self.mode
    }

    /// ユーザーIDに対応するファイルパス（`<root>/uid<id>.txt`）
    pub fn path_for(&self, user_id: u32) -> PathBuf {
        self.root.join(User::file_name_for(user_id))
    }

    fn open_options(&self) -> tokio::fs::OpenOptions {
        let mut options = tokio::fs::OpenOptions::new();
        options.read(true).write(true).create(true);
        if self.mode == OpenMode::Truncate {
            options.truncate(true);
        }
        options
    }
}

#[async_trait]
impl ReportStorage for LocalReportStorage {
    fn target_for(&self, user_id: u32) -> String {
        self.path_for(user_id).display().to_string()
    }

    async fn write_report(&self, user_id: u32, contents: &str) -> Result<()> {
        let path = self.path_for(user_id);

        let mut file = self
            .open_options()
            .open(&path)
            .await
            .map_err(|e| ReportError::open_failed(&path, e))?;

        // Preserveモードではオフセット0から上書きする
        file.write_all(contents.as_bytes())
            .await
            .map_err(|e| ReportError::write_failed(&path, e))?;
        file.flush()
            .await
            .map_err(|e| ReportError::write_failed(&path, e))?;

        Ok(())
    }
}
