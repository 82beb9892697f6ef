//! # Capability masks
//!
//! The capabilities field of a proximity event says which fields of the tablet events that follow are valid
//! for the transducer. Values are shared with the OS tablet subsystem (`NX_TABLET_CAPABILITY_*` /
//! `kCGTabletProximityEventCapabilityMask`) and must stay bit-exact.
//!
//! ## History
//! Several masks were renamed or retired over the life of the tablet driver interface. Renames that kept
//! their value are available as deprecated aliases on [`Capabilities`]. Masks that were retired, and whose
//! bit now means something else, are listed in [`RetiredMask`].

use smallvec::SmallVec;
use strum::EnumCount;

use crate::keys::Key;

bitflags::bitflags! {
    /// Which fields of a tablet event are valid for a transducer.
    #[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(
        feature = "serde",
        derive(serde::Serialize, serde::Deserialize),
        serde(into = "u16", try_from = "u16")
    )]
    pub struct Capabilities: u16 {
        /// `NX_TABLET_CAPABILITY_DEVICEIDMASK`
        const DEVICE_ID = 0x0001;
        const ABS_X = 0x0002;
        const ABS_Y = 0x0004;
        const VENDOR1 = 0x0008;
        const VENDOR2 = 0x0010;
        const VENDOR3 = 0x0020;
        const BUTTONS = 0x0040;
        const TILT_X = 0x0080;
        const TILT_Y = 0x0100;
        const ABS_Z = 0x0200;
        const PRESSURE = 0x0400;
        const TANGENTIAL_PRESSURE = 0x0800;
        /// Legacy orientation flag. Prefer [`Self::TILT_X`] and [`Self::TILT_Y`], but this is still honored
        /// so that already-shipping applications keep working.
        const ORIENT_INFO = 0x1000;
        const ROTATION = 0x2000;
    }
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[error("undefined capability bits {0:#06x}")]
pub struct UndefinedBitsError(pub u16);

impl Capabilities {
    /// All three vendor-reserved bits.
    pub const VENDOR: Self = Self::VENDOR1.union(Self::VENDOR2).union(Self::VENDOR3);

    #[deprecated(note = "renamed to DEVICE_ID")]
    pub const CONTEXT_ID: Self = Self::DEVICE_ID;
    #[deprecated(note = "renamed to BUTTONS")]
    pub const BUTTON_STATES: Self = Self::BUTTONS;
    #[deprecated(note = "renamed to ABS_Z")]
    pub const Z_AXIS: Self = Self::ABS_Z;
    #[deprecated(note = "renamed to PRESSURE")]
    pub const TIP_PRESSURE: Self = Self::PRESSURE;
    #[deprecated(note = "renamed to TANGENTIAL_PRESSURE")]
    pub const BARREL_PRESSURE: Self = Self::TANGENTIAL_PRESSURE;

    /// Decode a raw mask, failing if any bit outside the defined flags is set.
    #[allow(clippy::missing_errors_doc)]
    pub fn from_raw(raw: u16) -> Result<Self, UndefinedBitsError> {
        Self::from_bits(raw).ok_or(UndefinedBitsError(raw & !Self::all().bits()))
    }
    /// Decode a raw mask, dropping any undefined bits.
    #[must_use]
    pub fn from_raw_lossy(raw: u16) -> Self {
        let caps = Self::from_bits_truncate(raw);
        if caps.bits() != raw {
            log::warn!(
                "dropping undefined capability bits {:#06x} from {raw:#06x}",
                raw & !Self::all().bits()
            );
        }
        caps
    }
    /// Whether tilt is reported, either through both tilt axes or the legacy orientation flag.
    #[must_use]
    pub fn has_tilt(self) -> bool {
        self.contains(Self::TILT_X | Self::TILT_Y) || self.contains(Self::ORIENT_INFO)
    }
    /// The telemetry keys announced by this mask, in key order.
    /// [`Key::Active`] is never included, as it has no flag.
    #[must_use]
    pub fn keys(self) -> SmallVec<[Key; <Key as EnumCount>::COUNT]> {
        use strum::IntoEnumIterator;
        Key::iter()
            .filter(|key| key.capability().is_some_and(|cap| self.contains(cap)))
            .collect()
    }
}

impl From<Capabilities> for u16 {
    fn from(value: Capabilities) -> Self {
        value.bits()
    }
}

impl TryFrom<u16> for Capabilities {
    type Error = UndefinedBitsError;
    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::from_raw(value)
    }
}

/// Masks that no longer exist, whose bit has since been given to another flag.
///
/// A raw mask from old software may set these bits with their old meaning. There is no way to tell from the
/// mask alone, so they are always decoded with their current meaning.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::AsRefStr, strum::IntoStaticStr, strum::EnumIter,
)]
pub enum RetiredMask {
    /// Had no relevance to the tablet event.
    ContextStatus,
    /// Had no relevance to the tablet event.
    TimeStamp,
    /// Had no relevance to the tablet event.
    ItemsChanged,
    /// Had no relevance to the tablet event.
    PacketSerialNum,
    /// Had no relevance to the tablet event.
    CursorIndex,
    /// Moved to [`Capabilities::ABS_X`].
    XAxis,
    /// Moved to [`Capabilities::ABS_Y`].
    YAxis,
}

impl RetiredMask {
    /// The flag now occupying this mask's old bit.
    #[must_use]
    pub const fn old_bit_now(self) -> Capabilities {
        match self {
            Self::ContextStatus => Capabilities::ABS_X,
            Self::TimeStamp => Capabilities::ABS_Y,
            Self::ItemsChanged => Capabilities::VENDOR1,
            Self::PacketSerialNum => Capabilities::VENDOR2,
            Self::CursorIndex => Capabilities::VENDOR3,
            Self::XAxis => Capabilities::TILT_X,
            Self::YAxis => Capabilities::TILT_Y,
        }
    }
    /// The flag that carries this mask's meaning today, if it survived a move.
    #[must_use]
    pub const fn successor(self) -> Option<Capabilities> {
        match self {
            Self::XAxis => Some(Capabilities::ABS_X),
            Self::YAxis => Some(Capabilities::ABS_Y),
            _ => None,
        }
    }
}
