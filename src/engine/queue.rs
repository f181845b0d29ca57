// Queue - ProducerとConsumerを繋ぐ容量付きキュー
//
// 封印前は `UserQueue` が唯一の強い送信側を持ち、Producerには弱い参照だけを渡す。
// `seal()` で強い送信側を手放すと、以降の投入は失敗し、受信側は残りを取り切った後に終端を返す。

use crate::core::{ReportError, User};
use anyhow::Result;
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};

/// 容量 `capacity` のキューを作成
pub fn bounded(capacity: usize) -> (UserQueue, QueueReceiver) {
    let (tx, rx) = mpsc::channel::<User>(capacity.max(1));
    (
        UserQueue { tx },
        QueueReceiver {
            rx: Arc::new(Mutex::new(rx)),
        },
    )
}

/// 封印前のキュー（投入ハンドルの発行元）
#[derive(Debug)]
pub struct UserQueue {
    tx: mpsc::Sender<User>,
}

impl UserQueue {
    /// Producer用の投入ハンドルを発行
    pub fn producer(&self) -> QueueProducer {
        QueueProducer {
            tx: self.tx.downgrade(),
        }
    }

    /// キューを封印する（一度だけ、所有権ごと消費）
    pub fn seal(self) {
        drop(self.tx);
    }
}

/// Producerタスクが持つ投入ハンドル
#[derive(Debug, Clone)]
pub struct QueueProducer {
    tx: mpsc::WeakSender<User>,
}

impl QueueProducer {
    /// ユーザーを投入（満杯なら空きが出るまで待つ）
    pub async fn push(&self, user: User) -> Result<()> {
        let user_id = user.id();
        let tx = self
            .tx
            .upgrade()
            .ok_or(ReportError::QueueSealed { user_id })?;
        tx.send(user)
            .await
            .map_err(|_| ReportError::QueueSealed { user_id })?;
        Ok(())
    }
}

/// Consumer側の共有受信ハンドル
///
/// 複数ワーカーで共有でき、各要素はちょうど1つのワーカーにだけ渡る。
#[derive(Debug, Clone)]
pub struct QueueReceiver {
    rx: Arc<Mutex<mpsc::Receiver<User>>>,
}

impl QueueReceiver {
    /// 次のユーザーを取り出す。封印済みかつ空ならNone（以降もずっとNone）
    pub async fn pop(&self) -> Option<User> {
        let mut rx = self.rx.lock().await;
        rx.recv().await
    }
}
