//! Latest-query-wins supersession keyed by client.
//!
//! Each key owns a `watch` channel carrying a generation counter. Starting a
//! query bumps the counter; a ticket whose generation is no longer current has
//! been superseded.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tokio::sync::watch;

#[derive(Clone, Default)]
pub struct QuerySupervisor {
    channels: Arc<Mutex<HashMap<String, watch::Sender<u64>>>>,
}

impl QuerySupervisor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new query under `key`, superseding any query still running under it.
    pub fn begin(&self, key: &str) -> QueryTicket {
        let mut channels = match self.channels.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        // Keys with no live ticket left carry no state worth keeping.
        channels.retain(|_, sender| sender.receiver_count() > 0);

        let sender = channels
            .entry(key.to_string())
            .or_insert_with(|| watch::channel(0).0);
        sender.send_modify(|generation| *generation += 1);
        let generation = *sender.borrow();

        if generation > 1 {
            tracing::debug!("Query for client {} superseded (generation {})", key, generation);
        }

        QueryTicket {
            generation,
            receiver: sender.subscribe(),
        }
    }

    /// Number of keys with a query still holding a ticket.
    pub fn active_keys(&self) -> usize {
        let channels = match self.channels.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        channels
            .values()
            .filter(|sender| sender.receiver_count() > 0)
            .count()
    }
}

pub struct QueryTicket {
    generation: u64,
    receiver: watch::Receiver<u64>,
}

impl QueryTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_superseded(&self) -> bool {
        *self.receiver.borrow() != self.generation
    }

    /// Resolves once a newer query starts under the same key. Never resolves otherwise.
    pub async fn superseded(&mut self) {
        loop {
            if *self.receiver.borrow_and_update() != self.generation {
                return;
            }
            if self.receiver.changed().await.is_err() {
                std::future::pending::<()>().await;
            }
        }
    }
}
