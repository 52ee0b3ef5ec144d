use anyhow::Result;
use crossterm::event::{Event as CrosstermEvent, EventStream, KeyEvent, KeyEventKind};
use futures::StreamExt;
use std::time::Duration;
use tokio::sync::mpsc;

use crate::api::{StatsClient, UserStats};
use crate::app::{LookupOutcome, LookupTicket};
use crate::error::StatsError;

#[derive(Debug)]
pub enum Event {
    Key(KeyEvent),
    Tick,
    Resize(u16, u16),
    Lookup(LookupOutcome),
}

pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<Event>,
    tx: mpsc::UnboundedSender<Event>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let input_tx = tx.clone();

        tokio::spawn(async move {
            let mut reader = EventStream::new();
            let mut tick = tokio::time::interval(tick_rate);

            loop {
                tokio::select! {
                    _ = tick.tick() => {
                        if input_tx.send(Event::Tick).is_err() {
                            break;
                        }
                    }
                    Some(Ok(evt)) = reader.next() => {
                        let event = match evt {
                            // Windows reports both press and release.
                            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Event::Key(key),
                            CrosstermEvent::Resize(w, h) => Event::Resize(w, h),
                            _ => continue,
                        };
                        if input_tx.send(event).is_err() {
                            break;
                        }
                    }
                }
            }
        });

        Self { rx, tx }
    }

    pub async fn next(&mut self) -> Result<Event> {
        self.rx
            .recv()
            .await
            .ok_or_else(|| anyhow::anyhow!("Event channel closed"))
    }

    /// Runs `ticket` in the background and reports back with `Event::Lookup`.
    pub fn spawn_lookup(&self, client: StatsClient, ticket: LookupTicket) {
        let LookupTicket { seq, username } = ticket;
        supervise_lookup(self.tx.clone(), seq, async move {
            client.fetch_stats(&username).await
        });
    }
}

/// Runs `request` in its own task and awaits its join handle, so an outcome
/// for `seq` is delivered even if the request task panics.
pub fn supervise_lookup<F>(tx: mpsc::UnboundedSender<Event>, seq: u64, request: F)
where
    F: Future<Output = std::result::Result<UserStats, StatsError>> + Send + 'static,
{
    tokio::spawn(async move {
        let result = tokio::spawn(request)
            .await
            .unwrap_or_else(|e| Err(StatsError::Aborted(e.to_string())));
        let _ = tx.send(Event::Lookup(LookupOutcome { seq, result }));
    });
}
