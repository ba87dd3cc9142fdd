use crate::api::models::device::{DeviceView, MeasurementPoint};
use crate::error::{AppError, Result};
use crate::repositories::DeviceRepository;

/// Static name-to-unit table for sensor display. Matching is
/// case-insensitive on the whole name; unmapped names get no unit.
const UNITS: &[(&str, &str)] = &[
    ("capteur température", "°C"),
    ("capteur lumière", "lux"),
    ("capteur humidité", "%"),
    ("distance", "cm"),
    ("capteur de distance", "cm"),
];

pub fn derive_unit(name: &str) -> &'static str {
    let lowered = name.to_lowercase();
    UNITS
        .iter()
        .find(|(n, _)| *n == lowered)
        .map(|(_, unit)| *unit)
        .unwrap_or("")
}

#[derive(Clone)]
pub struct DeviceService {
    repository: DeviceRepository,
}

impl DeviceService {
    pub fn new(repository: DeviceRepository) -> Self {
        Self { repository }
    }

    /// Every device, sensors carrying their latest reading and derived
    /// unit, actuators carrying nulls.
    pub async fn list(&self) -> Result<Vec<DeviceView>> {
        let rows = self.repository.list_with_latest().await?;
        Ok(rows
            .into_iter()
            .map(|row| {
                let unit = derive_unit(&row.name).to_string();
                let (value, recorded_at) = if row.is_sensor {
                    (row.value, row.recorded_at)
                } else {
                    (None, None)
                };
                DeviceView {
                    id: row.id,
                    name: row.name,
                    is_sensor: row.is_sensor,
                    value,
                    recorded_at,
                    unit,
                }
            })
            .collect())
    }

    /// Ascending series for one device. Unknown ids are a 404; a known
    /// device with no rows is an empty list, not an error.
    pub async fn measurements(&self, device_id: i64) -> Result<Vec<MeasurementPoint>> {
        if !self.repository.exists(device_id).await? {
            return Err(AppError::NotFound(format!(
                "No device with id {}",
                device_id
            )));
        }
        let rows = self.repository.measurements(device_id).await?;
        Ok(rows.into_iter().map(MeasurementPoint::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_for_known_sensors() {
        assert_eq!(derive_unit("Capteur Température"), "°C");
        assert_eq!(derive_unit("Capteur lumière"), "lux");
        assert_eq!(derive_unit("Capteur Humidité"), "%");
        assert_eq!(derive_unit("distance"), "cm");
        assert_eq!(derive_unit("Capteur de distance"), "cm");
    }

    #[test]
    fn test_unit_is_case_insensitive() {
        assert_eq!(derive_unit("CAPTEUR TEMPÉRATURE"), "°C");
        assert_eq!(derive_unit("capteur LUMIÈRE"), "lux");
    }

    #[test]
    fn test_unknown_names_get_empty_unit() {
        assert_eq!(derive_unit("Servo moteur"), "");
        assert_eq!(derive_unit(""), "");
        assert_eq!(derive_unit("température"), "");
    }
}
