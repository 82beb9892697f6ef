#![cfg(feature = "serde")]

use stylus_vocab::{Capabilities, DeviceClass, Key, PointerType, ProximityEvent, StylusTelemetry};

#[test]
fn enums_serialize_as_their_wire_values() {
    assert_eq!(serde_json::to_string(&Key::TiltX).unwrap(), r#""stylus_tilt_x""#);
    assert_eq!(serde_json::to_string(&PointerType::Eraser).unwrap(), "3");
    assert_eq!(
        serde_json::to_string(&DeviceClass::Airbrush).unwrap(),
        0x0902.to_string()
    );

    assert_eq!(
        serde_json::from_str::<Key>(r#""barrel_pressure""#).unwrap(),
        Key::BarrelPressure
    );
    assert!(serde_json::from_str::<Key>(r#""stylus_roll""#).is_err());
    assert!(serde_json::from_str::<PointerType>("7").is_err());
    assert!(serde_json::from_str::<DeviceClass>("1").is_err());
}

#[test]
fn proximity_event_round_trips() {
    let event = ProximityEvent {
        unique_id: 0x0123_4567_89AB,
        pointer_serial: 77,
        ..ProximityEvent::for_device(DeviceClass::RotationStylus, true)
    };
    let json = serde_json::to_string(&event).unwrap();
    let back: ProximityEvent = serde_json::from_str(&json).unwrap();
    assert_eq!(back, event);
    assert!(back.capabilities.contains(Capabilities::ROTATION));

    let value = serde_json::to_value(event).unwrap();
    assert_eq!(
        value["capabilities"],
        serde_json::json!(DeviceClass::RotationStylus.typical_capabilities().bits())
    );
}

#[test]
fn capabilities_travel_as_raw_bits() {
    assert_eq!(
        serde_json::to_string(&(Capabilities::PRESSURE | Capabilities::ABS_X)).unwrap(),
        "1026"
    );
    assert_eq!(
        serde_json::from_str::<Capabilities>("1024").unwrap(),
        Capabilities::PRESSURE
    );
    // 0xC400: PRESSURE plus both undefined bits.
    assert!(serde_json::from_str::<Capabilities>("50176").is_err());
    assert!(serde_json::from_str::<Capabilities>(r#""PRESSURE""#).is_err());
}

#[test]
fn telemetry_ignores_absent_fields() {
    let telemetry: StylusTelemetry =
        serde_json::from_str(r#"{"stylus_active": false, "stylus_pressure": 0.25}"#).unwrap();
    assert_eq!(
        telemetry,
        StylusTelemetry {
            active: Some(false),
            pressure: Some(0.25),
            ..Default::default()
        }
    );
    assert_eq!(
        serde_json::to_string(&StylusTelemetry::default()).unwrap(),
        "{}"
    );
}
