//! Seam between the integration and the home-automation host.

use async_trait::async_trait;

use crate::{prelude::*, reading::Value, sensor::SensorDescription};

/// Read-only entity as seen by the host registry.
#[async_trait]
pub trait Entity: Send + Sync {
    /// Globally unique and stable identifier.
    fn unique_id(&self) -> &str;

    /// Display name.
    fn name(&self) -> &str;

    fn description(&self) -> &SensorDescription;

    /// Latest known value, `None` when there is no value for the entity.
    fn current_value(&self) -> Option<Value>;

    fn is_available(&self) -> bool;

    /// Called by the host on each poll.
    async fn refresh(&self);
}

/// Host side of the setup routine.
#[async_trait]
pub trait Platform: Send {
    /// Register the entities, refreshing each of them first when `update_before_add` is set.
    async fn add_entities(
        &mut self,
        entities: Vec<Box<dyn Entity>>,
        update_before_add: bool,
    ) -> Result;
}
