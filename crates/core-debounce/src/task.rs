//! Async debounce stage between two channels.

use std::time::Duration;
use tokio::sync::mpsc::{Receiver, Sender};
use tokio::task::JoinHandle;
use tokio::time::{Instant, sleep};
use tracing::{debug, trace};

/// Forward only the latest value received on `rx` once `delay` passes with
/// no newer value. When `rx` closes, a pending value is flushed and the task
/// ends; when `tx` closes, the task ends immediately.
pub fn spawn_debounced<T>(mut rx: Receiver<T>, tx: Sender<T>, delay: Duration) -> JoinHandle<()>
where
    T: Send + 'static,
{
    tokio::spawn(async move {
        let timer = sleep(delay);
        tokio::pin!(timer);
        let mut pending: Option<T> = None;
        loop {
            tokio::select! {
                biased;
                msg = rx.recv() => match msg {
                    Some(value) => {
                        if pending.replace(value).is_some() {
                            trace!(target: "debounce", "debounce_superseded");
                        }
                        timer.as_mut().reset(Instant::now() + delay);
                    }
                    None => {
                        if let Some(value) = pending.take() {
                            let _ = tx.send(value).await;
                        }
                        debug!(target: "debounce", "debounce_input_closed");
                        break;
                    }
                },
                _ = tx.closed() => {
                    debug!(target: "debounce", "debounce_output_closed");
                    break;
                }
                _ = timer.as_mut(), if pending.is_some() => {
                    if let Some(value) = pending.take() {
                        if tx.send(value).await.is_err() {
                            debug!(target: "debounce", "debounce_output_closed");
                            break;
                        }
                    }
                }
            }
        }
    })
}
