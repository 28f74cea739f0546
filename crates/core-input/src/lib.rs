//! Terminal key source: crossterm events mapped to [`core_events::Event`] and
//! delivered over a bounded tokio channel.
//!
//! Each key is stamped with `Instant::now()` as it is read; sequence timeouts
//! downstream compare these stamps and never consult a clock themselves.

mod async_service;
mod key_token;

pub use async_service::AsyncInputShutdown;

use async_service::spawn_async_event_task;
use core_events::Event;
use tokio::task::JoinHandle;

/// Spawn the input task. Returns its handle and a shutdown trigger; the task
/// also stops when the receiving side of `sender` is dropped.
pub fn spawn_async_input(sender: tokio::sync::mpsc::Sender<Event>) -> (JoinHandle<()>, AsyncInputShutdown) {
    spawn_async_event_task(sender)
}
