use std::collections::HashMap;

use derive_more::{Deref, Display, From};
use serde::{Deserialize, Serialize};

/// Current value of a single inverter attribute.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Display, From)]
#[serde(untagged)]
pub enum Value {
    Number(f64),
    Text(String),
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl Value {
    #[must_use]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            Self::Text(_) => None,
        }
    }
}

/// Complete snapshot of the inverter attributes, as returned by a single client update.
#[must_use]
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Deref, From)]
pub struct Reading(HashMap<String, Value>);

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Reading {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(name, value)| (name.into(), value.into())).collect())
    }
}
