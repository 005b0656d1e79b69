#[cfg(test)]
pub mod fake;

use async_trait::async_trait;

use crate::{attribute::AttributeDescriptor, prelude::*, reading::Reading};

/// Connection to a single inverter.
///
/// Implementations own the transport and register decoding. Everything above this trait
/// only sees the serial number, the attribute catalog and complete readings.
#[async_trait]
pub trait Client: Send + Sync {
    /// Read the hardware info and return the inverter serial number.
    async fn fetch_identity(&self) -> Result<String>;

    /// Static attribute catalog, in display order.
    fn list_attributes(&self) -> Vec<AttributeDescriptor>;

    /// Fetch a fresh reading of all the attributes.
    async fn update(&self) -> Result<Reading>;
}
