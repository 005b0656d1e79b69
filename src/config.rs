use std::{num::NonZeroU8, time::Duration};

use clap::Parser;
use serde::{Deserialize, Deserializer, de::Error as _};

use crate::{prelude::*, probe::Probe};

/// Integration settings, as given by the host or on the command line.
#[must_use]
#[derive(Clone, Debug, Parser, Deserialize)]
#[command(author, version, about)]
pub struct Config {
    /// Inverter connection target, for example `/dev/ttyUSB0`.
    #[clap(long, env = "GROWATT_PORT")]
    pub port: String,

    /// Inverter bus address.
    #[clap(long, default_value = "1", env = "GROWATT_ADDRESS")]
    #[serde(default = "Config::default_address")]
    pub address: NonZeroU8,

    /// Display name prefix for all the sensors, defaults to the inverter serial number.
    #[clap(long, default_value = "", env = "GROWATT_NAME")]
    #[serde(default)]
    pub name: String,

    /// Minimal time between two device updates.
    #[clap(
        long,
        default_value = "30s",
        env = "GROWATT_SCAN_INTERVAL",
        value_parser = humantime::parse_duration,
    )]
    #[serde(
        default = "Config::default_scan_interval",
        deserialize_with = "deserialize_duration"
    )]
    pub scan_interval: Duration,
}

impl Config {
    const fn default_address() -> NonZeroU8 {
        NonZeroU8::MIN
    }

    const fn default_scan_interval() -> Duration {
        Probe::DEFAULT_INTERVAL
    }

    pub fn validate(&self) -> Result {
        ensure!(!self.port.trim().is_empty(), "the port must not be empty");
        Ok(())
    }

    /// Configured display name, or the serial number when none is configured.
    #[must_use]
    pub fn device_name<'a>(&'a self, serial_number: &'a str) -> &'a str {
        if self.name.is_empty() { serial_number } else { &self.name }
    }
}

fn deserialize_duration<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
    let value = String::deserialize(deserializer)?;
    humantime::parse_duration(&value).map_err(D::Error::custom)
}
