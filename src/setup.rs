use std::{collections::HashSet, num::NonZeroU8, sync::Arc};

use crate::{
    client::Client,
    config::Config,
    platform::{Entity, Platform},
    prelude::*,
    probe::Probe,
    sensor::{Sensor, SensorDescription},
};

/// Set up the sensor platform for a single inverter.
///
/// Fails when the configuration is invalid, the client cannot be created, or the
/// inverter does not return its hardware info. Once set up, the sensors never fail:
/// they become unavailable or stale instead.
#[instrument(skip_all, fields(port = %config.port, address = config.address.get()))]
pub async fn setup_platform<C, P>(
    config: &Config,
    connect: impl FnOnce(&str, NonZeroU8) -> Result<C>,
    platform: &mut P,
) -> Result
where
    C: Client + 'static,
    P: Platform + ?Sized,
{
    config.validate()?;
    let client = connect(&config.port, config.address).context("failed to create the client")?;
    info!("fetching the hardware info…");
    let serial_number =
        client.fetch_identity().await.context("failed to fetch the hardware info")?;
    info!(%serial_number, "fetched the hardware info");

    let device_name = config.device_name(&serial_number).to_owned();
    let attributes = client.list_attributes();
    let mut seen_names = HashSet::with_capacity(attributes.len());
    for attribute in &attributes {
        ensure!(
            seen_names.insert(attribute.name.as_str()),
            "duplicate attribute `{}` in the catalog",
            attribute.name,
        );
    }

    let probe = Arc::new(Probe::new(Box::new(client), config.scan_interval));
    let entities: Vec<Box<dyn Entity>> = attributes
        .iter()
        .map(|attribute| {
            let sensor = Sensor::builder()
                .device_name(&device_name)
                .serial_number(&serial_number)
                .description(SensorDescription::from(attribute))
                .probe(Arc::clone(&probe))
                .build();
            Box::new(sensor) as Box<dyn Entity>
        })
        .collect();

    info!(%device_name, n_sensors = entities.len(), "adding the sensors…");
    platform.add_entities(entities, true).await
}
