//! One-shot rendezvous between a worker thread and its caller.
//!
//! A worker computes exactly one value and hands it over through a
//! zero-capacity channel, so the send completes only once the caller receives.
//! There is no timeout and no cancellation.

use std::sync::mpsc::{self, Receiver};
use std::thread::{self, JoinHandle};

use crate::error::HandoffError;

/// Message sent by the worker started with [`greet`].
pub const GREETING: &str = "Hi from the worker thread!";

/// Receiving end of a handoff started with [`spawn`].
#[derive(Debug)]
#[must_use = "the worker's value is lost unless `wait` is called"]
pub struct Handoff<T> {
    receiver: Receiver<T>,
    worker: JoinHandle<()>,
}

/// Runs `task` on a new thread and returns the handle to wait for its result.
///
/// # Errors
///
/// Returns [`HandoffError::Spawn`] if the thread cannot be created.
///
/// # Example
///
/// ```
/// let handoff = deckrs::handoff::spawn(|| 6 * 7).unwrap();
/// assert_eq!(handoff.wait().unwrap(), 42);
/// ```
pub fn spawn<T, F>(task: F) -> Result<Handoff<T>, HandoffError>
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    let (sender, receiver) = mpsc::sync_channel(0);

    let worker = thread::Builder::new()
        .name("handoff-worker".into())
        .spawn(move || {
            // Fails only when the handle was dropped without waiting.
            sender.send(task()).ok();
        })
        .map_err(HandoffError::Spawn)?;

    Ok(Handoff { receiver, worker })
}

/// Starts a worker that sends [`GREETING`].
///
/// # Errors
///
/// Returns [`HandoffError::Spawn`] if the thread cannot be created.
pub fn greet() -> Result<Handoff<&'static str>, HandoffError> {
    spawn(|| GREETING)
}

impl<T> Handoff<T> {
    /// Blocks until the worker sends its value, then joins the worker.
    ///
    /// # Errors
    ///
    /// Returns [`HandoffError::Disconnected`] if the worker exits or panics
    /// before sending.
    pub fn wait(self) -> Result<T, HandoffError> {
        let value = self
            .receiver
            .recv()
            .map_err(|_| HandoffError::Disconnected);

        if self.worker.join().is_err() {
            tracing::warn!("handoff worker panicked");
        }

        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dropped_handle_does_not_block_worker() {
        let handoff = spawn(|| 1).unwrap();
        let Handoff { receiver, worker } = handoff;
        drop(receiver);
        assert!(worker.join().is_ok());
    }
}
