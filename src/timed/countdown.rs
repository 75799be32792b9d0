//! Cancellable fixed-period ticker
//!
//! A background task sends one tick per period through a channel of depth
//! one, so a slow consumer delays ticks instead of receiving a burst. The task
//! stops on [`Countdown::cancel`] or when the handle is dropped.

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

/// Handle to a running ticker
#[derive(Debug)]
pub struct Countdown {
    ticks: mpsc::Receiver<()>,
    task: JoinHandle<()>,
}

impl Countdown {
    /// Start ticking every `period`; the first tick arrives after one period
    ///
    /// Must be called from within a tokio runtime.
    #[must_use]
    pub fn every(period: Duration) -> Self {
        let (tx, ticks) = mpsc::channel(1);

        let task = tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if tx.send(()).await.is_err() {
                    break;
                }
            }
        });

        Self { ticks, task }
    }

    /// Wait for the next tick; false once the ticker has stopped
    pub async fn tick(&mut self) -> bool {
        self.ticks.recv().await.is_some()
    }

    /// Stop the ticker; pending and future `tick` calls return false
    pub fn cancel(&mut self) {
        self.task.abort();
        self.ticks.close();
        // Discard a tick that was already buffered
        while self.ticks.try_recv().is_ok() {}
    }
}

impl Drop for Countdown {
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn ticks_once_per_period() {
        let start = Instant::now();
        let mut countdown = Countdown::every(Duration::from_secs(1));

        assert!(countdown.tick().await);
        let first = start.elapsed();
        assert!(first >= Duration::from_secs(1) && first < Duration::from_secs(2));

        assert!(countdown.tick().await);
        assert!(countdown.tick().await);
        let third = start.elapsed();
        assert!(third >= Duration::from_secs(3) && third < Duration::from_secs(4));
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_stops_ticks() {
        let mut countdown = Countdown::every(Duration::from_secs(1));
        assert!(countdown.tick().await);

        countdown.cancel();
        assert!(!countdown.tick().await);
        assert!(!countdown.tick().await);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_discards_buffered_tick() {
        let mut countdown = Countdown::every(Duration::from_secs(1));

        // Let a tick land in the channel without consuming it
        time::sleep(Duration::from_millis(1500)).await;

        countdown.cancel();
        assert!(!countdown.tick().await);
    }
}
