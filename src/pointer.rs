//! # Pointer types
//!
//! Classifies the transducer reported in a proximity event. A single stylus with a tip and an eraser
//! shows up as *two* pointers, one for each end, which enter and leave proximity separately.
//!
//! Ordinals match `NX_TABLET_POINTER_*`.

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[error("unknown pointer type {0}")]
pub struct UnknownPointerTypeError(pub u32);

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
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
    serde(into = "u8", try_from = "u8")
)]
#[repr(u8)]
pub enum PointerType {
    /// Should never be reported by working hardware.
    #[default]
    Unknown = 0,
    /// The tip end of a stylus-like device.
    Pen = 1,
    /// Any puck-like device.
    Cursor = 2,
    /// The eraser end of a stylus-like device.
    Eraser = 3,
}

impl PointerType {
    #[must_use]
    pub const fn raw(self) -> u8 {
        self as u8
    }
    /// Decode, substituting [`PointerType::Unknown`] for values outside the enumeration.
    #[must_use]
    pub fn from_raw_lossy(raw: u32) -> Self {
        Self::try_from(raw).unwrap_or_else(|err| {
            log::warn!("{err}, treating as unknown");
            Self::Unknown
        })
    }
    /// Whether this is one end of a stylus, rather than a puck or unknown.
    #[must_use]
    pub const fn is_stylus_end(self) -> bool {
        matches!(self, Self::Pen | Self::Eraser)
    }
}

impl From<PointerType> for u8 {
    fn from(value: PointerType) -> Self {
        value.raw()
    }
}

impl TryFrom<u32> for PointerType {
    type Error = UnknownPointerTypeError;
    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Unknown),
            1 => Ok(Self::Pen),
            2 => Ok(Self::Cursor),
            3 => Ok(Self::Eraser),
            other => Err(UnknownPointerTypeError(other)),
        }
    }
}

impl TryFrom<u8> for PointerType {
    type Error = UnknownPointerTypeError;
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        u32::from(value).try_into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn ordinals() {
        assert_eq!(PointerType::Unknown.raw(), 0);
        assert_eq!(PointerType::Pen.raw(), 1);
        assert_eq!(PointerType::Cursor.raw(), 2);
        assert_eq!(PointerType::Eraser.raw(), 3);
    }

    #[test]
    fn decode_every_ordinal() {
        for ty in PointerType::iter() {
            assert_eq!(PointerType::try_from(ty.raw()), Ok(ty));
        }
        assert_eq!(
            PointerType::try_from(4u8),
            Err(UnknownPointerTypeError(4))
        );
        assert_eq!(
            PointerType::try_from(0x1_0001u32),
            Err(UnknownPointerTypeError(0x1_0001))
        );
    }

    #[test]
    fn lossy_falls_back_to_unknown() {
        assert_eq!(PointerType::from_raw_lossy(3), PointerType::Eraser);
        assert_eq!(PointerType::from_raw_lossy(42), PointerType::Unknown);
    }

    #[test]
    fn stylus_ends() {
        let ends: Vec<_> = PointerType::iter()
            .filter(|ty| ty.is_stylus_end())
            .collect();
        assert_eq!(ends, [PointerType::Pen, PointerType::Eraser]);
    }
}
