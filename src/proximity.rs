//! # Proximity events
//!
//! Sent when a transducer enters or leaves the sensing range of a tablet. The [capabilities](Capabilities)
//! carried here describe which fields of every following tablet event are valid, until the transducer leaves.

use crate::{
    capability::Capabilities, device::DeviceClass, keys::Key, pointer::PointerType,
    telemetry::StylusTelemetry,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProximityEvent {
    /// USB vendor ID of the tablet.
    pub vendor_id: u16,
    pub tablet_id: u16,
    /// Index of the pointer on the tablet, for hardware supporting several at once.
    pub pointer_id: u16,
    /// System-assigned identifier, tying tablet events to this proximity event. Only meaningful if
    /// [`Capabilities::DEVICE_ID`] is set.
    pub device_id: u16,
    /// Raw vendor code, see [`DeviceClass`] for known values.
    pub vendor_pointer_type: u16,
    pub pointer_serial: u32,
    /// An identifier that is baked into the hardware of the transducer.
    /// A pen and its eraser will share the same id.
    pub unique_id: u64,
    pub capabilities: Capabilities,
    pub pointer_type: PointerType,
    /// `true` when entering proximity, `false` when leaving.
    pub entering: bool,
}

impl ProximityEvent {
    #[must_use]
    pub fn new(pointer_type: PointerType, capabilities: Capabilities, entering: bool) -> Self {
        Self {
            capabilities,
            pointer_type,
            entering,
            ..Default::default()
        }
    }
    /// An event for a device of a known class, advertising its typical capabilities.
    #[must_use]
    pub fn for_device(class: DeviceClass, entering: bool) -> Self {
        Self {
            vendor_pointer_type: class.code(),
            ..Self::new(class.pointer_type(), class.typical_capabilities(), entering)
        }
    }
    /// The vendor device class, or `None` if the code is not one this crate knows.
    #[must_use]
    pub fn device_class(&self) -> Option<DeviceClass> {
        DeviceClass::try_from(self.vendor_pointer_type).ok()
    }
    /// Whether tablet events following this one carry `key`. [`Key::Active`] is always carried.
    #[must_use]
    pub fn reports(&self, key: Key) -> bool {
        key.capability()
            .is_none_or(|cap| self.capabilities.contains(cap))
    }
    /// Drop every field of `telemetry` this event does not advertise.
    #[must_use]
    pub fn filter(&self, telemetry: &StylusTelemetry) -> StylusTelemetry {
        telemetry.retain_advertised(self.capabilities)
    }
}
