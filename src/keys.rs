//! # Telemetry keys
//!
//! String keys tagging stylus telemetry as it is passed between the HID driver and the component publishing
//! tablet events. Both sides look values up by these exact strings, so they must never change.
//!
//! The raw strings are available as constants for consumers that deal in plain dictionaries, and as [`Key`]
//! for everyone else.

use crate::capability::Capabilities;

/// Whether the stylus is currently active (in range and reporting). Carries a boolean.
pub const STYLUS_ACTIVE: &str = "stylus_active";
/// Tip pressure.
pub const STYLUS_PRESSURE: &str = "stylus_pressure";
/// Barrel, or side, pressure.
pub const BARREL_PRESSURE: &str = "barrel_pressure";
/// Azimuthal twist around the stylus' long axis.
pub const STYLUS_TWIST: &str = "stylus_twist";
pub const STYLUS_TILT_X: &str = "stylus_tilt_x";
pub const STYLUS_TILT_Y: &str = "stylus_tilt_y";

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Hash)]
#[error("unknown telemetry key {0:?}")]
pub struct UnknownKeyError(pub String);

/// The shape of the value stored under a [`Key`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::AsRefStr, strum::IntoStaticStr)]
pub enum ValueKind {
    Bool,
    Number,
}

/// A typed telemetry key. Declaration order is the order in which records list their fields.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::EnumCount,
    strum::EnumIter,
    strum::AsRefStr,
    strum::IntoStaticStr,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "&'static str", try_from = "String")
)]
pub enum Key {
    #[strum(serialize = "stylus_active")]
    Active,
    #[strum(serialize = "stylus_pressure")]
    Pressure,
    #[strum(serialize = "barrel_pressure")]
    BarrelPressure,
    #[strum(serialize = "stylus_twist")]
    Twist,
    #[strum(serialize = "stylus_tilt_x")]
    TiltX,
    #[strum(serialize = "stylus_tilt_y")]
    TiltY,
}

impl Key {
    /// The exact wire string of this key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => STYLUS_ACTIVE,
            Self::Pressure => STYLUS_PRESSURE,
            Self::BarrelPressure => BARREL_PRESSURE,
            Self::Twist => STYLUS_TWIST,
            Self::TiltX => STYLUS_TILT_X,
            Self::TiltY => STYLUS_TILT_Y,
        }
    }
    /// Parse a wire string. Matching is exact: no case folding, no trimming.
    #[allow(clippy::missing_errors_doc)]
    pub fn parse(key: &str) -> Result<Self, UnknownKeyError> {
        use strum::IntoEnumIterator;
        Self::iter()
            .find(|known| known.as_str() == key)
            .ok_or_else(|| UnknownKeyError(key.to_owned()))
    }
    /// The capability flag a proximity event sets to announce this field.
    /// `None` for [`Key::Active`], which is implied by proximity itself.
    #[must_use]
    pub const fn capability(self) -> Option<Capabilities> {
        match self {
            Self::Active => None,
            Self::Pressure => Some(Capabilities::PRESSURE),
            Self::BarrelPressure => Some(Capabilities::TANGENTIAL_PRESSURE),
            Self::Twist => Some(Capabilities::ROTATION),
            Self::TiltX => Some(Capabilities::TILT_X),
            Self::TiltY => Some(Capabilities::TILT_Y),
        }
    }
    #[must_use]
    pub const fn value_kind(self) -> ValueKind {
        match self {
            Self::Active => ValueKind::Bool,
            _ => ValueKind::Number,
        }
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Key {
    type Err = UnknownKeyError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Key {
    type Error = UnknownKeyError;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}
