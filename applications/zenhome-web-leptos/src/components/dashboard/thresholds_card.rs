use crate::state::thresholds::{parse_light, parse_temperature};
use crate::state::use_thresholds;
use leptos::*;

/// Editor for the two automation thresholds. Values are validated on
/// apply and live only for the session.
#[component]
pub fn ThresholdsCard() -> impl IntoView {
    let ctx = use_thresholds();
    let current = ctx.thresholds.get_untracked();

    let (temperature_input, set_temperature_input) = create_signal(current.temperature_c.to_string());
    let (light_input, set_light_input) = create_signal(current.light_lux.to_string());
    let (error, set_error) = create_signal(Option::<String>::None);

    let on_apply = move |_| {
        let temperature = match parse_temperature(&temperature_input.get()) {
            Ok(v) => v,
            Err(msg) => {
                set_error.set(Some(msg));
                return;
            }
        };
        let light = match parse_light(&light_input.get()) {
            Ok(v) => v,
            Err(msg) => {
                set_error.set(Some(msg));
                return;
            }
        };
        set_error.set(None);
        ctx.set_thresholds.update(|t| {
            t.temperature_c = temperature;
            t.light_lux = light;
        });
    };

    view! {
        <div class="card thresholds-card">
            <h3>"Automation thresholds"</h3>
            <label>
                "Temperature (°C)"
                <input
                    type="text"
                    prop:value=temperature_input
                    on:input=move |ev| set_temperature_input.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Light (lux)"
                <input
                    type="text"
                    prop:value=light_input
                    on:input=move |ev| set_light_input.set(event_target_value(&ev))
                />
            </label>
            {move || error.get().map(|msg| view! { <p class="error-message">{msg}</p> })}
            <button class="btn" on:click=on_apply>
                "Apply"
            </button>
            <p class="subtitle">
                "Shutters close above the temperature threshold; without a \
                 temperature reading they open below the light threshold."
            </p>
        </div>
    }
}
