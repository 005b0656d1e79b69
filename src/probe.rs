use std::{sync::Arc, time::Duration};

use tokio::{
    sync::{Mutex, watch},
    time::Instant,
};

use crate::{
    client::Client,
    prelude::*,
    reading::{Reading, Value},
    throttle::Throttle,
};

/// Cached, throttled access to the inverter readings.
///
/// One probe is shared by all the sensors of an inverter. The cached reading is replaced
/// as a whole on each successful update and is kept as is when an update fails.
pub struct Probe {
    client: Box<dyn Client>,
    throttle: Mutex<Throttle>,
    reading: watch::Sender<Option<Arc<Reading>>>,
}

impl Probe {
    /// Minimal time between two consecutive device updates.
    pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(30);

    #[must_use]
    pub fn new(client: Box<dyn Client>, interval: Duration) -> Self {
        Self {
            client,
            throttle: Mutex::new(Throttle::new(interval)),
            reading: watch::Sender::new(None),
        }
    }

    /// Update the cached reading, unless the last update has started less than the
    /// interval ago.
    ///
    /// Update errors are logged and swallowed.
    #[instrument(skip_all)]
    pub async fn refresh(&self) {
        let is_passed = self.throttle.lock().await.try_pass(Instant::now());
        if !is_passed {
            trace!("throttled");
            return;
        }
        debug!("updating…");
        match self.client.update().await {
            Ok(reading) => {
                debug!(n_values = reading.len(), "updated");
                self.reading.send_replace(Some(Arc::new(reading)));
            }
            Err(error) => {
                warn!("failed to update the reading: {error:#}");
            }
        }
    }

    /// Cached value of the attribute.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        self.reading.borrow().as_deref()?.get(name).cloned()
    }

    /// Whether any reading has ever been successfully cached.
    #[must_use]
    pub fn has_data(&self) -> bool {
        self.reading.borrow().is_some()
    }

    /// Watch the cached reading: the receiver is notified each time a new reading is cached.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Option<Arc<Reading>>> {
        self.reading.subscribe()
    }
}
