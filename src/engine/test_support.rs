// テスト用のストレージ・レポーター実装

use crate::core::{ProgressReporter, ReportError, RunSummary};
use crate::storage::ReportStorage;
use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashSet;
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// 書き込み内容をメモリに記録するストレージ
#[derive(Debug, Default)]
pub struct RecordingStorage {
    written: Mutex<Vec<(u32, String)>>,
    failing: HashSet<u32>,
    attempts: AtomicUsize,
}

impl RecordingStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// 指定IDの書き込みだけ失敗させる
    pub fn failing_on(ids: &[u32]) -> Self {
        Self {
            failing: ids.iter().copied().collect(),
            ..Self::default()
        }
    }

    /// 書き込みに成功したID（書き込み順）
    pub fn written_ids(&self) -> Vec<u32> {
        self.written
            .lock()
            .unwrap()
            .iter()
            .map(|(id, _)| *id)
            .collect()
    }

    pub fn contents(&self, user_id: u32) -> Option<String> {
        self.written
            .lock()
            .unwrap()
            .iter()
            .find(|(id, _)| *id == user_id)
            .map(|(_, contents)| contents.clone())
    }

    /// 失敗も含めた書き込み試行回数
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ReportStorage for RecordingStorage {
    fn target_for(&self, user_id: u32) -> String {
        format!("mem://uid{user_id}.txt")
    }

    async fn write_report(&self, user_id: u32, contents: &str) -> Result<()> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        if self.failing.contains(&user_id) {
            return Err(ReportError::open_failed(
                self.target_for(user_id),
                io::Error::new(io::ErrorKind::PermissionDenied, "injected failure"),
            )
            .into());
        }
        self.written
            .lock()
            .unwrap()
            .push((user_id, contents.to_string()));
        Ok(())
    }
}

/// 報告イベント
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Started(usize),
    Generated(u32),
    Writing(usize, u32),
    Error(String),
    WorkerFinished(usize, usize),
    Completed,
}

/// 報告イベントを順に記録するレポーター
#[derive(Debug, Default)]
pub struct RecordingReporter {
    events: Mutex<Vec<Event>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    fn push(&self, event: Event) {
        self.events.lock().unwrap().push(event);
    }
}

#[async_trait]
impl ProgressReporter for RecordingReporter {
    async fn report_started(&self, total_users: usize) {
        self.push(Event::Started(total_users));
    }

    async fn report_generated(&self, user_id: u32) {
        self.push(Event::Generated(user_id));
    }

    async fn report_writing(&self, worker_id: usize, user_id: u32) {
        self.push(Event::Writing(worker_id, user_id));
    }

    async fn report_error(&self, target: &str, _error: &str) {
        self.push(Event::Error(target.to_string()));
    }

    async fn report_worker_finished(&self, worker_id: usize, processed: usize) {
        self.push(Event::WorkerFinished(worker_id, processed));
    }

    async fn report_completed(&self, _summary: &RunSummary) {
        self.push(Event::Completed);
    }
}
