#![cfg(feature = "serde")]

use riderwire_message::common::{Message, Version};
use riderwire_message::device::Motor;
use riderwire_message::sensor::State;
use riderwire_message::system::{ModeFlight, Rotation};
use riderwire_message::{DataType, DeviceType, Header};

#[test]
fn header_serializes_tags_by_name() {
    let header = Header::new(DataType::Ping, 8, DeviceType::Controller, DeviceType::Drone);
    let json = serde_json::to_value(&header).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "data_type": "Ping",
            "length": 8,
            "from": "Controller",
            "to": "Drone",
        })
    );
    let back: Header = serde_json::from_value(json).unwrap();
    assert_eq!(back, header);
}

#[test]
fn nested_arrays_roundtrip_through_json() {
    let mut motor = Motor::default();
    motor.motor[3].rotation = Rotation::Counterclockwise;
    motor.motor[3].value = -250;
    let text = serde_json::to_string(&motor).unwrap();
    let back: Motor = serde_json::from_str(&text).unwrap();
    assert_eq!(back, motor);
}

#[test]
fn unknown_tag_name_is_rejected() {
    let json = serde_json::json!({
        "mode_system": "Running",
        "mode_flight": "Hovering",
        "mode_control_flight": "Attitude",
        "mode_movement": "Ready",
        "headless": "Normal",
        "control_speed": 1,
        "sensor_orientation": "Normal",
        "battery": 50,
    });
    assert!(serde_json::from_value::<State>(json.clone()).is_err());

    let mut fixed = json;
    fixed["mode_flight"] = serde_json::json!("Flight");
    let state: State = serde_json::from_value(fixed).unwrap();
    assert_eq!(state.mode_flight, ModeFlight::Flight);
}

#[test]
fn message_and_version_serialize_fields() {
    let json = serde_json::to_value(Message::new("hi")).unwrap();
    assert_eq!(json, serde_json::json!({ "message": "hi" }));

    let json = serde_json::to_value(Version::new(1, 2, 3)).unwrap();
    assert_eq!(json, serde_json::json!({ "build": 3, "minor": 2, "major": 1 }));
}
