use derive_more::Display;
use serde::Serialize;

use crate::attribute::AttributeDescriptor;

/// What a sensor physically measures.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, Serialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum DeviceClass {
    #[display("energy")]
    Energy,

    #[display("power")]
    Power,

    #[display("voltage")]
    Voltage,

    #[display("current")]
    Current,

    #[display("battery")]
    Battery,
}

impl DeviceClass {
    #[must_use]
    pub fn from_unit(unit: &str) -> Option<Self> {
        match unit {
            "kWh" => Some(Self::Energy),
            "kW" => Some(Self::Power),
            "V" => Some(Self::Voltage),
            "A" => Some(Self::Current),
            "%" => Some(Self::Battery),
            _ => None,
        }
    }
}

/// How the values of a sensor relate to each other over time.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, Serialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum StateClass {
    /// Instantaneous value, no accumulation.
    #[display("measurement")]
    Measurement,

    /// Monotonically increasing counter, like the energy yield of today.
    #[display("total_increasing")]
    TotalIncreasing,
}

impl StateClass {
    const CUMULATIVE_SUFFIXES: [&'static str; 2] = ["lifetime", "today"];

    #[must_use]
    pub fn from_attribute_name(name: &str) -> Self {
        if Self::CUMULATIVE_SUFFIXES.iter().any(|suffix| name.ends_with(suffix)) {
            Self::TotalIncreasing
        } else {
            Self::Measurement
        }
    }
}

/// Static presentation metadata of a sensor, derived once from the attribute descriptor.
#[must_use]
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct SensorDescription {
    pub key: String,
    pub label: String,
    pub unit: Option<String>,
    pub device_class: Option<DeviceClass>,
    pub state_class: StateClass,
}

impl From<&AttributeDescriptor> for SensorDescription {
    fn from(attribute: &AttributeDescriptor) -> Self {
        Self {
            key: attribute.name.clone(),
            label: attribute.label().to_owned(),
            unit: attribute.unit().map(ToOwned::to_owned),
            device_class: DeviceClass::from_unit(&attribute.unit),
            state_class: StateClass::from_attribute_name(&attribute.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn device_class_from_unit_ok() {
        assert_eq!(DeviceClass::from_unit("kWh"), Some(DeviceClass::Energy));
        assert_eq!(DeviceClass::from_unit("kW"), Some(DeviceClass::Power));
        assert_eq!(DeviceClass::from_unit("V"), Some(DeviceClass::Voltage));
        assert_eq!(DeviceClass::from_unit("A"), Some(DeviceClass::Current));
        assert_eq!(DeviceClass::from_unit("%"), Some(DeviceClass::Battery));
        assert_eq!(DeviceClass::from_unit("XYZ"), None);
        assert_eq!(DeviceClass::from_unit(""), None);
        assert_eq!(DeviceClass::from_unit("kwh"), None);
    }

    #[test]
    fn state_class_from_attribute_name_ok() {
        assert_eq!(StateClass::from_attribute_name("energy_today"), StateClass::TotalIncreasing);
        assert_eq!(
            StateClass::from_attribute_name("energy_lifetime"),
            StateClass::TotalIncreasing,
        );
        assert_eq!(StateClass::from_attribute_name("power_now"), StateClass::Measurement);
        assert_eq!(StateClass::from_attribute_name("today_power"), StateClass::Measurement);
    }

    #[test]
    fn description_from_attribute_ok() {
        let attribute = AttributeDescriptor::builder()
            .name("energy_today")
            .label("Energy today")
            .unit("kWh")
            .build();
        let description = SensorDescription::from(&attribute);
        assert_eq!(description.key, "energy_today");
        assert_eq!(description.label, "Energy today");
        assert_eq!(description.unit.as_deref(), Some("kWh"));
        assert_eq!(description.device_class, Some(DeviceClass::Energy));
        assert_eq!(description.state_class, StateClass::TotalIncreasing);
    }

    #[test]
    fn display_classes_ok() {
        assert_eq!(DeviceClass::Battery.to_string(), "battery");
        assert_eq!(StateClass::TotalIncreasing.to_string(), "total_increasing");
    }
}
