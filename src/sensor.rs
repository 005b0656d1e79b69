mod description;

use std::sync::Arc;

use async_trait::async_trait;

pub use self::description::{DeviceClass, SensorDescription, StateClass};
use crate::{platform::Entity, probe::Probe, reading::Value};

/// Single inverter attribute exposed as a sensor entity.
#[must_use]
#[derive(Clone)]
pub struct Sensor {
    name: String,
    unique_id: String,
    description: SensorDescription,
    probe: Arc<Probe>,
}

#[bon::bon]
impl Sensor {
    #[builder]
    pub fn new(
        device_name: &str,
        serial_number: &str,
        description: SensorDescription,
        probe: Arc<Probe>,
    ) -> Self {
        Self {
            name: format!("{device_name} {}", description.label),
            unique_id: format!("{serial_number}_{}", description.key),
            description,
            probe,
        }
    }
}

#[async_trait]
impl Entity for Sensor {
    fn unique_id(&self) -> &str {
        &self.unique_id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &SensorDescription {
        &self.description
    }

    fn current_value(&self) -> Option<Value> {
        self.probe.get(&self.description.key)
    }

    fn is_available(&self) -> bool {
        self.probe.has_data()
    }

    async fn refresh(&self) {
        self.probe.refresh().await;
    }
}
