// Producer - ユーザー生成ステージ

use super::queue::{QueueProducer, UserQueue};
use crate::core::ProgressReporter;
use crate::services::generation::{generate_user, rng_for};
use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Producerタスク共通の設定
#[derive(Debug, Clone, Copy)]
pub struct ProducerSettings {
    pub base_seed: u64,
    pub max_log_entries: usize,
    pub generation_delay: Duration,
}

/// 単一Producer: 序数 `ordinal` のユーザーを1件だけ生成して投入
pub fn spawn_single_producer<R>(
    ordinal: usize,
    settings: ProducerSettings,
    producer: QueueProducer,
    reporter: Arc<R>,
) -> JoinHandle<Result<()>>
where
    R: ProgressReporter + ?Sized + 'static,
{
    tokio::spawn(async move {
        let user = {
            let mut rng = rng_for(settings.base_seed, ordinal);
            generate_user(ordinal, settings.max_log_entries, &mut rng)
        };
        let user_id = user.id();

        producer.push(user).await?;
        reporter.report_generated(user_id).await;

        if !settings.generation_delay.is_zero() {
            tokio::time::sleep(settings.generation_delay).await;
        }
        Ok(())
    })
}

/// Producers: ユーザー1件につき1タスクを起動
pub fn spawn_producers<R>(
    count: usize,
    settings: ProducerSettings,
    queue: &UserQueue,
    reporter: Arc<R>,
) -> Vec<JoinHandle<Result<()>>>
where
    R: ProgressReporter + ?Sized + 'static,
{
    (0..count)
        .map(|ordinal| {
            spawn_single_producer(ordinal, settings, queue.producer(), Arc::clone(&reporter))
        })
        .collect()
}

/// 生成ステージのバリア: 全Producerの完了を待つ
pub async fn wait_for_producers(handles: Vec<JoinHandle<Result<()>>>) -> Result<usize> {
    let mut finished = 0;
    for handle in handles {
        handle.await??;
        finished += 1;
    }
    Ok(finished)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::queue::bounded;
    use crate::services::NoOpProgressReporter;
    use std::collections::HashSet;

    fn settings() -> ProducerSettings {
        ProducerSettings {
            base_seed: 11,
            max_log_entries: 20,
            generation_delay: Duration::ZERO,
        }
    }

    #[tokio::test]
    async fn test_producers_generate_every_id_once() {
        let (queue, receiver) = bounded(25);
        let handles = spawn_producers(25, settings(), &queue, Arc::new(NoOpProgressReporter));

        let finished = wait_for_producers(handles).await.unwrap();
        assert_eq!(finished, 25);
        queue.seal();

        let mut ids = Vec::new();
        while let Some(user) = receiver.pop().await {
            assert_eq!(user.email(), format!("user{}@company.com", user.id()));
            ids.push(user.id());
        }

        assert_eq!(ids.len(), 25);
        let unique: HashSet<u32> = ids.into_iter().collect();
        assert_eq!(unique, (1..=25).collect());
    }

    #[tokio::test]
    async fn test_producers_zero_count() {
        let (queue, receiver) = bounded(1);
        let handles = spawn_producers(0, settings(), &queue, Arc::new(NoOpProgressReporter));

        assert_eq!(wait_for_producers(handles).await.unwrap(), 0);
        queue.seal();
        assert!(receiver.pop().await.is_none());
    }

    #[tokio::test]
    async fn test_single_producer_reports_generated() {
        let (queue, receiver) = bounded(1);
        let mut reporter = crate::core::traits::MockProgressReporter::new();
        reporter
            .expect_report_generated()
            .with(mockall::predicate::eq(4))
            .times(1)
            .returning(|_| ());

        let handle = spawn_single_producer(3, settings(), queue.producer(), Arc::new(reporter));
        handle.await.unwrap().unwrap();
        queue.seal();

        assert_eq!(receiver.pop().await.unwrap().id(), 4);
    }

    #[tokio::test]
    async fn test_producer_fails_on_sealed_queue() {
        let (queue, _receiver) = bounded(1);
        let producer = queue.producer();
        queue.seal();

        let handle = spawn_single_producer(0, settings(), producer, Arc::new(NoOpProgressReporter));
        assert!(handle.await.unwrap().is_err());
    }
}
