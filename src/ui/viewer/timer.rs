// SPDX-License-Identifier: MPL-2.0
//! Host-side driver for the transition timer.
//!
//! The viewer never sleeps. It asks for a [`TransitionToken`] to be delivered
//! after a delay and may later ask for it to be cancelled. [`TransitionTimer`]
//! does both on a tokio runtime and aborts every outstanding sleep when
//! dropped, so tearing down the host cannot leave a timer behind.
//!
//! Even a token that slips through is harmless: the navigation controller
//! ignores tokens it is no longer waiting for.

use super::component::Effect;
use super::subcomponents::navigation::TransitionToken;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Waits for `delay` and yields `token`.
///
/// For hosts whose runtime turns futures into messages directly
/// (e.g. `Task::perform`).
pub async fn elapsed(token: TransitionToken, delay: Duration) -> TransitionToken {
    tokio::time::sleep(delay).await;
    token
}

/// Spawns and cancels transition sleeps, delivering elapsed tokens on a channel.
#[derive(Debug)]
pub struct TransitionTimer {
    sender: mpsc::UnboundedSender<TransitionToken>,
    pending: HashMap<TransitionToken, JoinHandle<()>>,
}

impl TransitionTimer {
    /// Creates a timer and the receiver on which elapsed tokens arrive.
    #[must_use]
    pub fn new() -> (Self, mpsc::UnboundedReceiver<TransitionToken>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (
            Self {
                sender,
                pending: HashMap::new(),
            },
            receiver,
        )
    }

    /// Starts a sleep for `token`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule(&mut self, token: TransitionToken, delay: Duration) {
        self.pending.retain(|_, handle| !handle.is_finished());
        let sender = self.sender.clone();
        let handle = tokio::spawn(async move {
            let token = elapsed(token, delay).await;
            // Receiver gone means the host is shutting down.
            let _ = sender.send(token);
        });
        if let Some(previous) = self.pending.insert(token, handle) {
            previous.abort();
        }
    }

    /// Aborts the sleep for `token`, if still running.
    pub fn cancel(&mut self, token: TransitionToken) {
        if let Some(handle) = self.pending.remove(&token) {
            handle.abort();
            log::trace!("{token} timer aborted");
        }
    }

    /// Applies the timer-related effects of a shell update; other effects are ignored.
    pub fn apply(&mut self, effects: &[Effect]) {
        for effect in effects {
            match *effect {
                Effect::ScheduleTransition { token, delay } => self.schedule(token, delay),
                Effect::CancelTransition { token } => self.cancel(token),
                _ => {}
            }
        }
    }

    /// Number of sleeps that have not finished yet.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending
            .values()
            .filter(|handle| !handle.is_finished())
            .count()
    }
}

impl Drop for TransitionTimer {
    fn drop(&mut self) {
        for (_, handle) in self.pending.drain() {
            handle.abort();
        }
    }
}
