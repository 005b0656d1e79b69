use serde::Deserialize;

/// Single entry of the inverter attribute catalog.
#[must_use]
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, bon::Builder)]
pub struct AttributeDescriptor {
    /// Catalog-unique attribute key, for example `energy_today`.
    #[builder(into)]
    pub name: String,

    /// Human-readable label.
    #[serde(default, alias = "description")]
    #[builder(into, default)]
    pub label: String,

    /// Unit of measurement, empty when the value is dimensionless.
    #[serde(default)]
    #[builder(into, default)]
    pub unit: String,
}

impl AttributeDescriptor {
    /// Label to display, falling back to the attribute name.
    #[must_use]
    pub fn label(&self) -> &str {
        if self.label.is_empty() { &self.name } else { &self.label }
    }

    /// Unit of measurement, if any.
    #[must_use]
    pub fn unit(&self) -> Option<&str> {
        Some(self.unit.as_str()).filter(|unit| !unit.is_empty())
    }
}
