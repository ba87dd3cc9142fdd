use crate::automation::Thresholds;
use leptos::*;

pub const TEMPERATURE_MIN: f64 = -20.0;
pub const TEMPERATURE_MAX: f64 = 50.0;
pub const LIGHT_MIN: f64 = 0.0;
pub const LIGHT_MAX: f64 = 10_000.0;

/// Parse and range-check a temperature threshold input (°C)
pub fn parse_temperature(input: &str) -> Result<f64, String> {
    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| "Temperature threshold must be a number".to_string())?;
    if !(TEMPERATURE_MIN..=TEMPERATURE_MAX).contains(&value) {
        return Err(format!(
            "Temperature threshold must be between {} and {} °C",
            TEMPERATURE_MIN, TEMPERATURE_MAX
        ));
    }
    Ok(value)
}

/// Parse and range-check a light threshold input (lux)
pub fn parse_light(input: &str) -> Result<f64, String> {
    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| "Light threshold must be a number".to_string())?;
    if !(LIGHT_MIN..=LIGHT_MAX).contains(&value) {
        return Err(format!(
            "Light threshold must be between {} and {} lux",
            LIGHT_MIN, LIGHT_MAX
        ));
    }
    Ok(value)
}

/// Session-local threshold configuration shared through context
#[derive(Clone, Copy)]
pub struct ThresholdsContext {
    pub thresholds: ReadSignal<Thresholds>,
    pub set_thresholds: WriteSignal<Thresholds>,
}

pub fn provide_thresholds_context() {
    let (thresholds, set_thresholds) = create_signal(Thresholds::default());
    provide_context(ThresholdsContext {
        thresholds,
        set_thresholds,
    });
}

pub fn use_thresholds() -> ThresholdsContext {
    expect_context::<ThresholdsContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_temperature_accepts_range() {
        assert_eq!(parse_temperature("25"), Ok(25.0));
        assert_eq!(parse_temperature(" -5.5 "), Ok(-5.5));
        assert_eq!(parse_temperature("50"), Ok(50.0));
    }

    #[test]
    fn test_parse_temperature_rejects_bad_input() {
        assert!(parse_temperature("warm").is_err());
        assert!(parse_temperature("").is_err());
        assert!(parse_temperature("-40").is_err());
        assert!(parse_temperature("60").is_err());
    }

    #[test]
    fn test_parse_light_accepts_range() {
        assert_eq!(parse_light("300"), Ok(300.0));
        assert_eq!(parse_light("0"), Ok(0.0));
        assert_eq!(parse_light("10000"), Ok(10000.0));
    }

    #[test]
    fn test_parse_light_rejects_bad_input() {
        assert!(parse_light("-1").is_err());
        assert!(parse_light("10001").is_err());
        assert!(parse_light("bright").is_err());
    }
}
