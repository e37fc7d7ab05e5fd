//! Background loading.
//!
//! Each table loads on its own thread and is announced over a channel. The
//! receiving side polls without blocking, so ingestion never stalls the
//! caller and tables arrive in whatever order they finish.

use std::thread;
use std::time::Duration;

use crossbeam_channel::{Receiver, RecvTimeoutError, Sender, TryRecvError, unbounded};

use crate::loader::{DatasetSource, LoadedDataset, load_dataset};

#[derive(Debug, Clone, PartialEq)]
pub enum IngestEvent {
    Loaded(LoadedDataset),
}

#[derive(Debug)]
pub struct IngestWorker {
    receiver: Receiver<IngestEvent>,
    pending: usize,
}

impl IngestWorker {
    /// Start one loader thread per source.
    pub fn spawn(sources: Vec<DatasetSource>) -> Self {
        let (sender, receiver) = unbounded();
        let pending = sources.len();
        for source in sources {
            spawn_loader(source, sender.clone());
        }
        Self { receiver, pending }
    }

    /// Next finished load, if any, without blocking.
    pub fn try_next(&mut self) -> Option<IngestEvent> {
        if self.pending == 0 {
            return None;
        }
        match self.receiver.try_recv() {
            Ok(event) => {
                self.pending -= 1;
                Some(event)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                tracing::warn!(pending = self.pending, "ingest threads exited without reporting");
                self.pending = 0;
                None
            }
        }
    }

    /// Wait up to `timeout` for the next finished load.
    pub fn next_timeout(&mut self, timeout: Duration) -> Option<IngestEvent> {
        if self.pending == 0 {
            return None;
        }
        match self.receiver.recv_timeout(timeout) {
            Ok(event) => {
                self.pending -= 1;
                Some(event)
            }
            Err(RecvTimeoutError::Timeout) => None,
            Err(RecvTimeoutError::Disconnected) => {
                self.pending = 0;
                None
            }
        }
    }

    pub fn pending(&self) -> usize {
        self.pending
    }

    pub fn is_finished(&self) -> bool {
        self.pending == 0
    }
}

fn spawn_loader(source: DatasetSource, sender: Sender<IngestEvent>) {
    let kind = source.kind;
    let thread_sender = sender.clone();
    let spawned = thread::Builder::new()
        .name(format!("ingest-{kind}"))
        .spawn(move || {
            let loaded = load_dataset(&source);
            if thread_sender.send(IngestEvent::Loaded(loaded)).is_err() {
                tracing::debug!(dataset = %kind, "ingest worker dropped, discarding load");
            }
        });
    if let Err(err) = spawned {
        tracing::error!(dataset = %kind, error = %err, "could not start ingest thread");
        let _ = sender.send(IngestEvent::Loaded(LoadedDataset::failed(kind)));
    }
}
