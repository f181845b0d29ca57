use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

pub mod local;

/// レポート出力先のトレイト
#[automock]
#[async_trait]
pub trait ReportStorage: Send + Sync {
    /// ユーザーIDに対応する出力先の識別子（ローカルならファイルパス）
    fn target_for(&self, user_id: u32) -> String;

    /// レポート全文を書き込む
    async fn write_report(&self, user_id: u32, contents: &str) -> Result<()>;
}

// ReportStorage for Box<dyn ReportStorage>
#[async_trait]
impl ReportStorage for Box<dyn ReportStorage> {
    fn target_for(&self, user_id: u32) -> String {
        self.as_ref().target_for(user_id)
    }

    async fn write_report(&self, user_id: u32, contents: &str) -> Result<()> {
        self.as_ref().write_report(user_id, contents).await
    }
}
