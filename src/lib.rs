//! # Shared [stylus telemetry keys](keys), [pointer types](pointer), and [capability masks](capability) 🐙✨
//!
//! The vocabulary spoken between a touchscreen / stylus HID driver and the component that turns its reports
//! into OS tablet events. Neither side owns it, so it lives here: every string and every bit is part of a
//! fixed contract with the OS tablet subsystem and with sibling components, and must never change.
//!
//! * [`keys`] - string keys tagging stylus telemetry.
//! * [`pointer`] - what kind of transducer is in proximity.
//! * [`capability`] - which tablet event fields a transducer reports, including the history of renamed and
//!   retired masks.
//! * [`device`] - Wacom vendor device class codes.
//! * [`telemetry`] and [`proximity`] - typed records built on the above.
//!
//! This crate does not talk to hardware, nor to the OS.
//!
//! ## Features
//! * `serde` - serialize masks, enums and records. Telemetry serializes to a flat map using the [`keys`] strings.
//!
//! ## Logging
//! Lossy decoding and skipped entries are reported through [`log`]. Install whatever logger you like.

#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod capability;
pub mod device;
pub mod keys;
pub mod pointer;
pub mod proximity;
pub mod telemetry;

pub use capability::Capabilities;
pub use device::DeviceClass;
pub use keys::Key;
pub use pointer::PointerType;
pub use proximity::ProximityEvent;
pub use telemetry::{StylusTelemetry, Value};
