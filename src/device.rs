//! # Device classes
//!
//! Wacom vendor pointer type codes, reported in the `vendor_pointer_type` field of a
//! [proximity event](crate::proximity::ProximityEvent). With a lookup table of hardware it is possible to
//! find the specific model; this crate only knows the general classes below.

use crate::{capability::Capabilities, pointer::PointerType};

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[error("unknown device class {0:#06x}")]
pub struct UnknownDeviceClassError(pub u16);

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::EnumCount,
    strum::EnumIter,
    strum::AsRefStr,
    strum::IntoStaticStr,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "u16", try_from = "u16")
)]
#[repr(u16)]
pub enum DeviceClass {
    GeneralStylus = 0x0802,
    Airbrush = 0x0902,
    GeneralMouse = 0x0006,
    /// Also sold as the 4D mouse, with a rotating body.
    ProMouse = 0x0004,
    /// A stylus sensing barrel rotation, such as the Art Pen.
    RotationStylus = 0x0804,
}

impl DeviceClass {
    #[must_use]
    pub const fn code(self) -> u16 {
        self as u16
    }
    #[must_use]
    pub const fn pointer_type(self) -> PointerType {
        match self {
            Self::GeneralStylus | Self::Airbrush | Self::RotationStylus => PointerType::Pen,
            Self::GeneralMouse | Self::ProMouse => PointerType::Cursor,
        }
    }
    /// The capabilities a device of this class usually advertises. Individual hardware may differ, so prefer
    /// the mask of an actual proximity event where one is available.
    #[must_use]
    pub const fn typical_capabilities(self) -> Capabilities {
        const BASE: Capabilities = Capabilities::DEVICE_ID
            .union(Capabilities::ABS_X)
            .union(Capabilities::ABS_Y)
            .union(Capabilities::BUTTONS);
        const STYLUS: Capabilities = BASE
            .union(Capabilities::PRESSURE)
            .union(Capabilities::TILT_X)
            .union(Capabilities::TILT_Y);

        match self {
            Self::GeneralStylus => STYLUS,
            // Finger wheel
            Self::Airbrush => STYLUS.union(Capabilities::TANGENTIAL_PRESSURE),
            Self::RotationStylus => STYLUS.union(Capabilities::ROTATION),
            Self::GeneralMouse => BASE,
            Self::ProMouse => BASE.union(Capabilities::ROTATION),
        }
    }
}

impl From<DeviceClass> for u16 {
    fn from(value: DeviceClass) -> Self {
        value.code()
    }
}

impl TryFrom<u16> for DeviceClass {
    type Error = UnknownDeviceClassError;
    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0x0802 => Ok(Self::GeneralStylus),
            0x0902 => Ok(Self::Airbrush),
            0x0006 => Ok(Self::GeneralMouse),
            0x0004 => Ok(Self::ProMouse),
            0x0804 => Ok(Self::RotationStylus),
            other => Err(UnknownDeviceClassError(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn decode_every_code() {
        for class in DeviceClass::iter() {
            assert_eq!(DeviceClass::try_from(class.code()), Ok(class));
        }
        assert_eq!(
            DeviceClass::try_from(0x0803u16),
            Err(UnknownDeviceClassError(0x0803))
        );
        assert_eq!(
            UnknownDeviceClassError(0x0803).to_string(),
            "unknown device class 0x0803"
        );
    }

    #[test]
    fn mice_are_cursors() {
        assert_eq!(DeviceClass::GeneralMouse.pointer_type(), PointerType::Cursor);
        assert_eq!(DeviceClass::ProMouse.pointer_type(), PointerType::Cursor);
        assert_eq!(DeviceClass::Airbrush.pointer_type(), PointerType::Pen);
    }

    #[test]
    fn typical_capabilities_build_on_each_other() {
        let stylus = DeviceClass::GeneralStylus.typical_capabilities();
        assert!(stylus.has_tilt());
        assert!(stylus.contains(Capabilities::PRESSURE));
        assert!(DeviceClass::Airbrush
            .typical_capabilities()
            .contains(stylus | Capabilities::TANGENTIAL_PRESSURE));
        assert!(DeviceClass::RotationStylus
            .typical_capabilities()
            .contains(Capabilities::ROTATION));

        let mouse = DeviceClass::GeneralMouse.typical_capabilities();
        assert!(!mouse.intersects(Capabilities::PRESSURE | Capabilities::TILT_X));
        assert_eq!(
            DeviceClass::ProMouse.typical_capabilities(),
            mouse | Capabilities::ROTATION
        );
    }
}
