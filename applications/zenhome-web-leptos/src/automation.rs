//! Threshold rule driving the window shutters.
//!
//! The rule runs entirely in the browser against the last fetched device
//! list and is re-evaluated whenever that list or a threshold changes.

use crate::models::DeviceView;
use std::collections::BTreeMap;

pub const SHUTTER_CLOSED: u8 = 0;
pub const SHUTTER_OPEN: u8 = 1;

/// Device id -> shutter/actuator state. Missing ids read as off/closed.
pub type ActuatorStates = BTreeMap<i64, u8>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    /// Above this temperature the shutters close (°C)
    pub temperature_c: f64,
    /// Below this light level the shutters open (lux)
    pub light_lux: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            temperature_c: 25.0,
            light_lux: 300.0,
        }
    }
}

/// Value of the first sensor whose name contains `needle`
/// (case-insensitive); None when no such sensor exists or it has no
/// reading yet.
fn sensor_value(devices: &[DeviceView], needle: &str) -> Option<f64> {
    devices
        .iter()
        .find(|d| d.is_sensor && d.name.to_lowercase().contains(needle))
        .and_then(|d| d.value)
}

fn is_shutter(device: &DeviceView) -> bool {
    if device.is_sensor {
        return false;
    }
    let name = device.name.to_lowercase();
    name.contains("servo") || name.contains("moteur")
}

/// Compute the desired shutter states.
///
/// Temperature takes priority: when a temperature reading exists the
/// shutters close iff it exceeds the temperature threshold, and the light
/// level is never consulted. Without a temperature reading, the shutters
/// open iff the light level is below the light threshold. With neither,
/// the current states are returned untouched (manual control keeps its
/// last word). Pure and idempotent: same inputs, same output.
pub fn evaluate(
    devices: &[DeviceView],
    thresholds: &Thresholds,
    current: &ActuatorStates,
) -> ActuatorStates {
    let shutters: Vec<i64> = devices.iter().filter(|d| is_shutter(d)).map(|d| d.id).collect();
    if shutters.is_empty() {
        return current.clone();
    }

    let temperature = sensor_value(devices, "température");
    let light = sensor_value(devices, "lumière");

    let desired = match (temperature, light) {
        (Some(t), _) => {
            if t > thresholds.temperature_c {
                SHUTTER_CLOSED
            } else {
                SHUTTER_OPEN
            }
        }
        (None, Some(l)) => {
            if l < thresholds.light_lux {
                SHUTTER_OPEN
            } else {
                SHUTTER_CLOSED
            }
        }
        (None, None) => return current.clone(),
    };

    let mut states = current.clone();
    for id in shutters {
        states.insert(id, desired);
    }
    states
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sensor(id: i64, name: &str, value: Option<f64>) -> DeviceView {
        DeviceView {
            id,
            name: name.into(),
            is_sensor: true,
            value,
            recorded_at: value.map(|_| "2025-06-01T12:00:00".into()),
            unit: "".into(),
        }
    }

    fn actuator(id: i64, name: &str) -> DeviceView {
        DeviceView {
            id,
            name: name.into(),
            is_sensor: false,
            value: None,
            recorded_at: None,
            unit: "".into(),
        }
    }

    fn fixture(temp: Option<f64>, light: Option<f64>) -> Vec<DeviceView> {
        vec![
            sensor(1, "Capteur Température", temp),
            sensor(2, "Capteur lumière", light),
            actuator(3, "Servo moteur"),
            actuator(4, "Moteur volet salon"),
            actuator(5, "LED"),
        ]
    }

    fn all_off() -> ActuatorStates {
        ActuatorStates::new()
    }

    #[test]
    fn test_hot_closes_all_shutters() {
        let states = evaluate(&fixture(Some(30.0), None), &Thresholds::default(), &all_off());
        assert_eq!(states.get(&3), Some(&SHUTTER_CLOSED));
        assert_eq!(states.get(&4), Some(&SHUTTER_CLOSED));
        // Non-shutter actuators are left alone
        assert_eq!(states.get(&5), None);
    }

    #[test]
    fn test_cool_opens_all_shutters() {
        let states = evaluate(&fixture(Some(20.0), None), &Thresholds::default(), &all_off());
        assert_eq!(states.get(&3), Some(&SHUTTER_OPEN));
        assert_eq!(states.get(&4), Some(&SHUTTER_OPEN));
    }

    #[test]
    fn test_temperature_at_threshold_opens() {
        // Strict comparison: 25.0 is not above 25.0
        let states = evaluate(&fixture(Some(25.0), None), &Thresholds::default(), &all_off());
        assert_eq!(states.get(&3), Some(&SHUTTER_OPEN));
    }

    #[test]
    fn test_dark_opens_when_no_temperature() {
        let states = evaluate(&fixture(None, Some(100.0)), &Thresholds::default(), &all_off());
        assert_eq!(states.get(&3), Some(&SHUTTER_OPEN));
    }

    #[test]
    fn test_bright_closes_when_no_temperature() {
        let states = evaluate(&fixture(None, Some(800.0)), &Thresholds::default(), &all_off());
        assert_eq!(states.get(&3), Some(&SHUTTER_CLOSED));
    }

    #[test]
    fn test_temperature_shadows_light() {
        // Dark room would open, but the heat rule wins
        let states = evaluate(
            &fixture(Some(30.0), Some(100.0)),
            &Thresholds::default(),
            &all_off(),
        );
        assert_eq!(states.get(&3), Some(&SHUTTER_CLOSED));
        assert_eq!(states.get(&4), Some(&SHUTTER_CLOSED));
    }

    #[test]
    fn test_no_readings_leaves_states_untouched() {
        let mut current = all_off();
        current.insert(3, SHUTTER_OPEN);
        let states = evaluate(&fixture(None, None), &Thresholds::default(), &current);
        assert_eq!(states, current);
    }

    #[test]
    fn test_no_shutters_returns_input_unchanged() {
        let devices = vec![sensor(1, "Capteur Température", Some(30.0)), actuator(5, "LED")];
        let mut current = all_off();
        current.insert(5, 1);
        let states = evaluate(&devices, &Thresholds::default(), &current);
        assert_eq!(states, current);
    }

    #[test]
    fn test_sensor_match_is_case_insensitive() {
        let devices = vec![
            sensor(1, "CAPTEUR TEMPÉRATURE", Some(30.0)),
            actuator(3, "SERVO MOTEUR"),
        ];
        let states = evaluate(&devices, &Thresholds::default(), &all_off());
        assert_eq!(states.get(&3), Some(&SHUTTER_CLOSED));
    }

    #[test]
    fn test_first_matching_sensor_wins_even_without_value() {
        // The rule reads the first température sensor; a second one with a
        // reading does not rescue it, so the light rule applies.
        let devices = vec![
            sensor(1, "Capteur Température salon", None),
            sensor(2, "Capteur Température cuisine", Some(30.0)),
            sensor(6, "Capteur lumière", Some(100.0)),
            actuator(3, "Servo moteur"),
        ];
        let states = evaluate(&devices, &Thresholds::default(), &all_off());
        assert_eq!(states.get(&3), Some(&SHUTTER_OPEN));
    }

    #[test]
    fn test_actuator_named_like_sensor_is_ignored() {
        // A "moteur température" actuator is a shutter, not a sensor
        let devices = vec![
            actuator(3, "Moteur température"),
            sensor(2, "Capteur lumière", Some(100.0)),
        ];
        let states = evaluate(&devices, &Thresholds::default(), &all_off());
        assert_eq!(states.get(&3), Some(&SHUTTER_OPEN));
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let devices = fixture(Some(30.0), Some(100.0));
        let thresholds = Thresholds::default();
        let first = evaluate(&devices, &thresholds, &all_off());
        let second = evaluate(&devices, &thresholds, &first);
        let third = evaluate(&devices, &thresholds, &second);
        assert_eq!(first, second);
        assert_eq!(second, third);
    }

    #[test]
    fn test_manual_override_survives_until_reevaluation() {
        let devices = fixture(Some(20.0), None);
        let thresholds = Thresholds::default();
        let mut states = evaluate(&devices, &thresholds, &all_off());
        assert_eq!(states.get(&3), Some(&SHUTTER_OPEN));

        // Manual close, then the next pass with unchanged inputs re-opens
        states.insert(3, SHUTTER_CLOSED);
        let next = evaluate(&devices, &thresholds, &states);
        assert_eq!(next.get(&3), Some(&SHUTTER_OPEN));
    }
}
