use crate::automation::SHUTTER_OPEN;
use crate::models::DeviceView;
use leptos::*;

/// Card for a sensor: latest value with unit and timestamp, plus a
/// button to open its history chart.
#[component]
pub fn SensorCard(
    device: DeviceView,
    #[prop(into)] on_select: Callback<DeviceView>,
) -> impl IntoView {
    let selected = device.clone();
    let reading = match device.value {
        Some(value) => format!("{} {}", trim_number(value), device.unit),
        None => "No data".to_string(),
    };
    let recorded_at = device.recorded_at.clone();

    view! {
        <div class="card sensor-card">
            <h3>{device.name.clone()}</h3>
            <div class="sensor-value">{reading}</div>
            {recorded_at.map(|at| view! { <div class="subtitle">{at}</div> })}
            <button class="btn" on:click=move |_| on_select.call(selected.clone())>
                "History"
            </button>
        </div>
    }
}

/// Card for an actuator: current simulated state and a manual toggle.
/// The toggle wins until the next automation pass.
#[component]
pub fn ActuatorCard(
    device: DeviceView,
    state: u8,
    #[prop(into)] on_toggle: Callback<i64>,
) -> impl IntoView {
    let id = device.id;
    let on = state == SHUTTER_OPEN;
    let state_label = if on { "On" } else { "Off" };
    let action_label = if on { "Turn off" } else { "Turn on" };

    view! {
        <div class="card actuator-card">
            <h3>{device.name.clone()}</h3>
            <div class=format!("actuator-state {}", if on { "on" } else { "off" })>
                {state_label}
            </div>
            <button class="btn" on:click=move |_| on_toggle.call(id)>
                {action_label}
            </button>
        </div>
    }
}

/// Drop a trailing ".0" so integers read cleanly on the card
fn trim_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_number() {
        assert_eq!(trim_number(21.0), "21");
        assert_eq!(trim_number(21.54), "21.5");
        assert_eq!(trim_number(-3.0), "-3");
    }
}
