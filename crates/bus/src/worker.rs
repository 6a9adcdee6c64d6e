// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Periodic board worker
//!
//! Ticks on fixed deadlines: drain the queue into the list, then notify
//! listeners. A stop request wakes the thread early for one final tick.

use crate::bus::Board;
use crate::shared::Shared;
use eb_core::PipelineClock;
use std::io;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

pub(crate) struct Worker {
    handle: JoinHandle<()>,
    stop_tx: mpsc::Sender<()>,
}

impl Worker {
    pub(crate) fn spawn<C: PipelineClock>(
        board: Arc<Mutex<Board>>,
        shared: Arc<Shared>,
        clock: C,
        interval: Duration,
    ) -> io::Result<Self> {
        let (stop_tx, stop_rx) = mpsc::channel();
        let handle = thread::Builder::new()
            .name("eboard-worker".to_string())
            .spawn(move || run(&board, &shared, &clock, interval, &stop_rx))?;
        Ok(Self { handle, stop_tx })
    }

    /// Request the final tick and wait for the thread to exit
    pub(crate) fn stop(self) {
        let _ = self.stop_tx.send(());
        if self.handle.join().is_err() {
            tracing::error!("event board worker panicked");
        }
    }
}

fn run<C: PipelineClock>(
    board: &Mutex<Board>,
    shared: &Shared,
    clock: &C,
    interval: Duration,
    stop_rx: &mpsc::Receiver<()>,
) {
    tracing::debug!(interval = ?interval, "event board worker started");
    let mut deadline = Instant::now() + interval;

    loop {
        let timeout = deadline.saturating_duration_since(Instant::now());
        match stop_rx.recv_timeout(timeout) {
            Err(RecvTimeoutError::Timeout) => {
                tick(board, shared, clock);
                deadline += interval;
                // Skip missed ticks instead of bursting to catch up
                let now = Instant::now();
                if deadline < now {
                    deadline = now + interval;
                }
            }
            Ok(()) | Err(RecvTimeoutError::Disconnected) => {
                let flushed = tick(board, shared, clock);
                tracing::debug!(flushed, "event board worker stopped");
                break;
            }
        }
    }
}

fn tick<C: PipelineClock>(board: &Mutex<Board>, shared: &Shared, clock: &C) -> usize {
    board
        .lock()
        .unwrap_or_else(|e| e.into_inner())
        .tick(&shared.queue, clock)
}
