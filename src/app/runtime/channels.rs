use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use crate::state::LectureBatch;

/// What: Channel definitions for runtime communication.
///
/// Details:
/// - The event loop owns every receiver; senders are cloned into the
///   terminal reader thread, the tick worker, and the fetch worker.
pub struct Channels {
    /// Terminal events from the reader thread.
    pub event_tx: mpsc::UnboundedSender<CEvent>,
    /// Receiver for terminal events.
    pub event_rx: mpsc::UnboundedReceiver<CEvent>,
    /// Set on exit to stop the reader thread.
    pub event_thread_cancelled: Arc<AtomicBool>,
    /// Mount ids of dialogs waiting for lectures.
    pub fetch_req_tx: mpsc::UnboundedSender<u64>,
    /// Taken by the fetch worker at startup.
    pub fetch_req_rx: Option<mpsc::UnboundedReceiver<u64>>,
    /// Mount-tagged lecture batches from the fetch worker.
    pub batch_tx: mpsc::UnboundedSender<LectureBatch>,
    /// Receiver for lecture batches.
    pub batch_rx: mpsc::UnboundedReceiver<LectureBatch>,
    /// Periodic ticks; also nudged after a page is revealed.
    pub tick_tx: mpsc::UnboundedSender<()>,
    /// Receiver for ticks.
    pub tick_rx: mpsc::UnboundedReceiver<()>,
}

impl Channels {
    /// What: Create every runtime channel.
    ///
    /// Details:
    /// - `fetch_req_rx` is handed to the fetch worker with `Option::take`.
    pub fn new() -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel::<CEvent>();
        let (fetch_req_tx, fetch_req_rx) = mpsc::unbounded_channel::<u64>();
        let (batch_tx, batch_rx) = mpsc::unbounded_channel::<LectureBatch>();
        let (tick_tx, tick_rx) = mpsc::unbounded_channel::<()>();
        Self {
            event_tx,
            event_rx,
            event_thread_cancelled: Arc::new(AtomicBool::new(false)),
            fetch_req_tx,
            fetch_req_rx: Some(fetch_req_rx),
            batch_tx,
            batch_rx,
            tick_tx,
            tick_rx,
        }
    }
}
