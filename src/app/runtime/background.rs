use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use crate::sources::CatalogClient;
use crate::state::LectureBatch;

/// What: Spawn the lecture fetch worker.
///
/// Inputs:
/// - `client`: Catalog client; its cache is shared by every request
/// - `req_rx`: Mount ids of dialogs waiting for lectures
/// - `batch_tx`: Where tagged results are delivered
///
/// Details:
/// - Each request runs on its own task so a slow catalog never delays a later
///   mount; the cache collapses the overlapping loads into one per catalog.
/// - Failures are logged and reported as a batch without lectures.
pub fn spawn_fetch_worker(
    client: CatalogClient,
    mut req_rx: mpsc::UnboundedReceiver<u64>,
    batch_tx: mpsc::UnboundedSender<LectureBatch>,
) {
    tokio::spawn(async move {
        while let Some(mount_id) = req_rx.recv().await {
            let client = client.clone();
            let tx = batch_tx.clone();
            tokio::spawn(async move {
                let lectures = match client.fetch_all_lectures().await {
                    Ok(list) => Some(list),
                    Err(e) => {
                        tracing::warn!(
                            mount_id,
                            error = %e,
                            "[Runtime] Lecture fetch failed"
                        );
                        None
                    }
                };
                let _ = tx.send(LectureBatch {
                    mount_id,
                    lectures,
                });
            });
        }
        tracing::debug!("[Runtime] Fetch worker stopped");
    });
}

/// What: Spawn the tick worker that drives periodic flushes and redraws.
pub fn spawn_tick_worker(tick_tx: mpsc::UnboundedSender<()>) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_millis(250));
        loop {
            interval.tick().await;
            if tick_tx.send(()).is_err() {
                break;
            }
        }
    });
}

/// What: Spawn event reading thread for terminal input.
///
/// Inputs:
/// - `headless`: When `true`, skip spawning the thread
/// - `event_tx`: Channel sender for terminal events
/// - `cancelled`: Atomic flag to signal thread cancellation
///
/// Details:
/// - Polls with a 50ms timeout so the cancellation flag is checked promptly.
pub fn spawn_event_thread(
    headless: bool,
    event_tx: mpsc::UnboundedSender<CEvent>,
    cancelled: Arc<AtomicBool>,
) {
    if headless {
        return;
    }
    std::thread::spawn(move || {
        while !cancelled.load(Ordering::Relaxed) {
            match crossterm::event::poll(Duration::from_millis(50)) {
                Ok(true) => {
                    // Transient read errors are skipped.
                    if let Ok(ev) = crossterm::event::read()
                        && (cancelled.load(Ordering::Relaxed) || event_tx.send(ev).is_err())
                    {
                        break;
                    }
                }
                Ok(false) | Err(_) => {}
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::CatalogLocation;

    #[tokio::test]
    /// What: Every request is answered with a batch tagged by its mount id
    ///
    /// - Input: Two requests against a local catalog directory
    /// - Output: Two batches carrying all lectures; one load per catalog
    async fn fetch_worker_tags_batches() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(
            dir.path().join("m.json"),
            r#"[{"id":"CS101","title":"Intro","credits":"3","major":"CS","grade":1,"schedule":"월1"}]"#,
        )
        .expect("write majors");
        std::fs::write(dir.path().join("l.json"), "[]").expect("write liberal arts");
        let client = CatalogClient::new(
            CatalogLocation::Dir(dir.path().to_path_buf()),
            "m.json",
            "l.json",
            Duration::from_secs(5),
        )
        .expect("client");

        let (req_tx, req_rx) = mpsc::unbounded_channel();
        let (batch_tx, mut batch_rx) = mpsc::unbounded_channel();
        spawn_fetch_worker(client.clone(), req_rx, batch_tx);
        req_tx.send(1).expect("send");
        req_tx.send(2).expect("send");

        let mut seen = Vec::new();
        for _ in 0..2 {
            let batch = batch_rx.recv().await.expect("batch");
            assert_eq!(batch.lectures.as_ref().map(Vec::len), Some(1));
            seen.push(batch.mount_id);
        }
        seen.sort_unstable();
        assert_eq!(seen, vec![1, 2]);
        assert_eq!(client.requests_issued(), 2);
    }

    #[tokio::test]
    /// What: A failing catalog yields a batch without lectures
    async fn fetch_worker_reports_failure() {
        let dir = tempfile::tempdir().expect("tempdir");
        let client = CatalogClient::new(
            CatalogLocation::Dir(dir.path().to_path_buf()),
            "missing.json",
            "also-missing.json",
            Duration::from_secs(5),
        )
        .expect("client");
        let (req_tx, req_rx) = mpsc::unbounded_channel();
        let (batch_tx, mut batch_rx) = mpsc::unbounded_channel();
        spawn_fetch_worker(client, req_rx, batch_tx);
        req_tx.send(7).expect("send");
        let batch = batch_rx.recv().await.expect("batch");
        assert_eq!(batch.mount_id, 7);
        assert!(batch.lectures.is_none());
    }
}
