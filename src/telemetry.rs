//! # Telemetry records
//!
//! A snapshot of stylus state as exchanged between components, keyed by [`Key`].
//!
//! # Quirks
//! A record may hold fields the transducer does *not* advertise in its proximity event, and advertised fields
//! may be missing. Use [`StylusTelemetry::retain_advertised`] to drop the former where that matters.

use smallvec::SmallVec;
use strum::{EnumCount, IntoEnumIterator};

use crate::{
    capability::Capabilities,
    keys::{Key, ValueKind},
};

/// A single telemetry value.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum Value {
    Bool(bool),
    Number(f32),
}

impl Value {
    #[must_use]
    pub const fn kind(self) -> ValueKind {
        match self {
            Self::Bool(_) => ValueKind::Bool,
            Self::Number(_) => ValueKind::Number,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Self::Number(value)
    }
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TelemetryError {
    #[error("{key} expects a {} value", expected.as_ref())]
    WrongKind { key: Key, expected: ValueKind },
    /// Attempted to store `NaN`.
    #[error("{key} was NaN")]
    NaN { key: Key },
}

/// Stylus state at some snapshot in time. Every field is optional, `None` meaning "not reported."
///
/// Numeric fields are passed through as the hardware reported them; ranges and units are device-specific.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StylusTelemetry {
    #[cfg_attr(
        feature = "serde",
        serde(rename = "stylus_active", default, skip_serializing_if = "Option::is_none")
    )]
    pub active: Option<bool>,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "stylus_pressure", default, skip_serializing_if = "Option::is_none")
    )]
    pub pressure: Option<f32>,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "barrel_pressure", default, skip_serializing_if = "Option::is_none")
    )]
    pub barrel_pressure: Option<f32>,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "stylus_twist", default, skip_serializing_if = "Option::is_none")
    )]
    pub twist: Option<f32>,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "stylus_tilt_x", default, skip_serializing_if = "Option::is_none")
    )]
    pub tilt_x: Option<f32>,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "stylus_tilt_y", default, skip_serializing_if = "Option::is_none")
    )]
    pub tilt_y: Option<f32>,
}

impl StylusTelemetry {
    /// Build a record from raw `(key, value)` pairs, as pulled out of a property dictionary.
    /// Keys this crate does not know about are skipped. Later duplicates overwrite earlier ones.
    #[allow(clippy::missing_errors_doc)]
    pub fn from_entries<'a, I, V>(entries: I) -> Result<Self, TelemetryError>
    where
        I: IntoIterator<Item = (&'a str, V)>,
        V: Into<Value>,
    {
        let mut this = Self::default();
        for (name, value) in entries {
            match Key::parse(name) {
                Ok(key) => this.set(key, value.into())?,
                Err(err) => log::debug!("skipping telemetry entry: {err}"),
            }
        }
        Ok(this)
    }
    /// Store a value, checking it has the right shape for the key.
    #[allow(clippy::missing_errors_doc)]
    pub fn set(&mut self, key: Key, value: Value) -> Result<(), TelemetryError> {
        let wrong_kind = TelemetryError::WrongKind {
            key,
            expected: key.value_kind(),
        };
        match value {
            Value::Bool(active) if key == Key::Active => self.active = Some(active),
            Value::Number(n) => {
                let slot = self.number_mut(key).ok_or(wrong_kind)?;
                if n.is_nan() {
                    return Err(TelemetryError::NaN { key });
                }
                *slot = Some(n);
            }
            Value::Bool(_) => return Err(wrong_kind),
        }
        Ok(())
    }
    /// Clear a field.
    pub fn clear(&mut self, key: Key) {
        match self.number_mut(key) {
            Some(slot) => *slot = None,
            None => self.active = None,
        }
    }
    #[must_use]
    pub fn get(&self, key: Key) -> Option<Value> {
        match key {
            Key::Active => self.active.map(Value::Bool),
            Key::Pressure => self.pressure.map(Value::Number),
            Key::BarrelPressure => self.barrel_pressure.map(Value::Number),
            Key::Twist => self.twist.map(Value::Number),
            Key::TiltX => self.tilt_x.map(Value::Number),
            Key::TiltY => self.tilt_y.map(Value::Number),
        }
    }
    /// All present fields, in key order.
    #[must_use]
    pub fn entries(&self) -> SmallVec<[(Key, Value); <Key as EnumCount>::COUNT]> {
        Key::iter()
            .filter_map(|key| self.get(key).map(|value| (key, value)))
            .collect()
    }
    /// The capability flags needed to carry every present field.
    #[must_use]
    pub fn capabilities(&self) -> Capabilities {
        self.entries()
            .iter()
            .filter_map(|(key, _)| key.capability())
            .fold(Capabilities::empty(), Capabilities::union)
    }
    /// A copy with every field not announced by `advertised` cleared. The active flag has no
    /// capability of its own and is always kept.
    #[must_use]
    pub fn retain_advertised(&self, advertised: Capabilities) -> Self {
        let mut this = *self;
        for key in Key::iter() {
            if key
                .capability()
                .is_some_and(|cap| !advertised.contains(cap))
            {
                this.clear(key);
            }
        }
        this
    }
    /// The slot of a numeric field, `None` for [`Key::Active`].
    fn number_mut(&mut self, key: Key) -> Option<&mut Option<f32>> {
        match key {
            Key::Active => None,
            Key::Pressure => Some(&mut self.pressure),
            Key::BarrelPressure => Some(&mut self.barrel_pressure),
            Key::Twist => Some(&mut self.twist),
            Key::TiltX => Some(&mut self.tilt_x),
            Key::TiltY => Some(&mut self.tilt_y),
        }
    }
}
