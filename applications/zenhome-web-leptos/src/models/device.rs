use serde::{Deserialize, Serialize};

/// A device as served by the backend: sensors carry their latest reading
/// and derived unit, actuators carry nulls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceView {
    pub id: i64,
    pub name: String,
    pub is_sensor: bool,
    pub value: Option<f64>,
    pub recorded_at: Option<String>,
    pub unit: String,
}

/// One timestamped sample of a device series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementPoint {
    pub recorded_at: String,
    pub value: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_view_deserializes_backend_shape() {
        let json = r#"{
            "id": 1,
            "name": "Capteur Température",
            "is_sensor": true,
            "value": 21.5,
            "recorded_at": "2025-06-01T12:30:00",
            "unit": "°C"
        }"#;
        let device: DeviceView = serde_json::from_str(json).unwrap();
        assert_eq!(device.value, Some(21.5));
        assert_eq!(device.unit, "°C");
    }

    #[test]
    fn test_actuator_nulls_deserialize() {
        let json = r#"{
            "id": 4,
            "name": "Servo moteur",
            "is_sensor": false,
            "value": null,
            "recorded_at": null,
            "unit": ""
        }"#;
        let device: DeviceView = serde_json::from_str(json).unwrap();
        assert!(device.value.is_none());
        assert!(device.recorded_at.is_none());
    }
}
