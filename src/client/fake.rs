use std::{
    collections::VecDeque,
    sync::{
        Arc,
        Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use async_trait::async_trait;

use crate::{attribute::AttributeDescriptor, client::Client, prelude::*, reading::Reading};

/// Scripted client: replays the queued update results in order.
#[derive(Clone, Default)]
pub struct FakeClient {
    serial_number: Option<String>,
    attributes: Vec<AttributeDescriptor>,
    updates: Arc<Mutex<VecDeque<Result<Reading>>>>,
    n_updates: Arc<AtomicUsize>,
}

impl FakeClient {
    pub fn new(serial_number: &str) -> Self {
        Self { serial_number: Some(serial_number.to_owned()), ..Self::default() }
    }

    /// Client which fails to read the hardware info.
    pub fn unreachable() -> Self {
        Self::default()
    }

    pub fn with_attribute(mut self, name: &str, label: &str, unit: &str) -> Self {
        self.attributes.push(
            AttributeDescriptor::builder().name(name).label(label).unit(unit).build(),
        );
        self
    }

    pub fn push_reading<'a>(&self, values: impl IntoIterator<Item = (&'a str, f64)>) {
        self.updates.lock().unwrap().push_back(Ok(values.into_iter().collect()));
    }

    pub fn push_failure(&self, message: &'static str) {
        self.updates.lock().unwrap().push_back(Err(anyhow::anyhow!(message)));
    }

    /// Number of `update()` calls made so far.
    pub fn n_updates(&self) -> usize {
        self.n_updates.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Client for FakeClient {
    async fn fetch_identity(&self) -> Result<String> {
        self.serial_number.clone().context("the inverter does not respond")
    }

    fn list_attributes(&self) -> Vec<AttributeDescriptor> {
        self.attributes.clone()
    }

    async fn update(&self) -> Result<Reading> {
        self.n_updates.fetch_add(1, Ordering::SeqCst);
        let update = self.updates.lock().unwrap().pop_front();
        update.context("no more scripted updates")?
    }
}
