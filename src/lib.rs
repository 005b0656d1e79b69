#![allow(clippy::doc_markdown)]
#![doc = include_str!("../README.md")]

pub mod attribute;
pub mod client;
pub mod config;
pub mod platform;
mod prelude;
pub mod probe;
pub mod reading;
pub mod sensor;
pub mod setup;
pub mod throttle;

pub use self::{
    attribute::AttributeDescriptor,
    client::Client,
    config::Config,
    platform::{Entity, Platform},
    probe::Probe,
    reading::{Reading, Value},
    sensor::{DeviceClass, Sensor, SensorDescription, StateClass},
    setup::setup_platform,
};

/// Configure tracing for unit tests.
#[cfg(test)]
#[ctor::ctor]
fn init() {
    let _ = tracing_subscriber::fmt()
        .without_time()
        .compact()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}
