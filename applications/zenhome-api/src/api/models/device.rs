use crate::repositories::devices::MeasurementRow;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A device with its latest reading. Actuators carry null value and
/// timestamp; sensors without measurements do too.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceView {
    pub id: i64,
    pub name: String,
    pub is_sensor: bool,
    pub value: Option<f64>,
    pub recorded_at: Option<NaiveDateTime>,
    pub unit: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeasurementPoint {
    pub recorded_at: NaiveDateTime,
    pub value: f64,
}

impl From<MeasurementRow> for MeasurementPoint {
    fn from(row: MeasurementRow) -> Self {
        Self {
            recorded_at: row.recorded_at,
            value: row.value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_device_view_serializes_nulls_for_actuators() {
        let view = DeviceView {
            id: 4,
            name: "Servo moteur".into(),
            is_sensor: false,
            value: None,
            recorded_at: None,
            unit: "".into(),
        };
        let json = serde_json::to_string(&view).unwrap();
        assert!(json.contains("\"value\":null"));
        assert!(json.contains("\"recorded_at\":null"));
        assert!(json.contains("\"unit\":\"\""));
    }

    #[test]
    fn test_measurement_point_roundtrip() {
        let point = MeasurementPoint {
            recorded_at: NaiveDate::from_ymd_opt(2025, 6, 1)
                .unwrap()
                .and_hms_opt(12, 30, 0)
                .unwrap(),
            value: 21.5,
        };
        let json = serde_json::to_string(&point).unwrap();
        let back: MeasurementPoint = serde_json::from_str(&json).unwrap();
        assert_eq!(back.value, 21.5);
        assert_eq!(back.recorded_at, point.recorded_at);
    }
}
