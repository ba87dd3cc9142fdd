use crate::api::ApiClient;
use crate::automation::{evaluate, ActuatorStates, SHUTTER_CLOSED, SHUTTER_OPEN};
use crate::export;
use crate::models::{DeviceView, MeasurementPoint};
use crate::state::{session, use_thresholds};
use leptos::*;
use leptos_router::Redirect;

use super::device_card::{ActuatorCard, SensorCard};
use super::measurement_chart::MeasurementChart;
use super::thresholds_card::ThresholdsCard;

/// Dashboard page: polls the device list, runs the shutter rule locally
/// and renders cards, the history chart and the threshold editor.
#[component]
pub fn Dashboard() -> impl IntoView {
    // Signed-in users only
    if session::get_account().is_none() {
        return view! { <Redirect path="/login" /> }.into_view();
    }

    let client = ApiClient::new();
    let client_devices = client.clone();
    let client_series = client;

    // Device list - refetch every 10 seconds
    let (devices_trigger, set_devices_trigger) = create_signal(0);
    let devices = create_local_resource(
        move || devices_trigger.get(),
        move |_| {
            let client = client_devices.clone();
            async move { client.get_devices().await }
        },
    );

    #[cfg(target_arch = "wasm32")]
    {
        use gloo_timers::callback::Interval;

        let devices_interval = Interval::new(10_000, move || {
            set_devices_trigger.update(|n| *n += 1);
        });
        on_cleanup(move || drop(devices_interval));
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = set_devices_trigger;

    // Actuator states: all off on page load, then written by the
    // automation rule and by manual toggles
    let (states, set_states) = create_signal(ActuatorStates::new());
    let ctx = use_thresholds();

    // Automation pass: re-runs when the device list or a threshold changes
    create_effect(move |_| {
        if let Some(Ok(device_list)) = devices.get() {
            let thresholds = ctx.thresholds.get();
            set_states.update(|current| {
                *current = evaluate(&device_list, &thresholds, current);
            });
        }
    });

    // Manual override, kept until the next automation pass
    let on_toggle = move |id: i64| {
        set_states.update(|current| {
            let state = current.entry(id).or_insert(SHUTTER_CLOSED);
            *state = if *state == SHUTTER_OPEN {
                SHUTTER_CLOSED
            } else {
                SHUTTER_OPEN
            };
        });
    };

    // Selected sensor and its series, fetched on demand
    let (selected, set_selected) = create_signal(Option::<DeviceView>::None);
    let series = create_local_resource(
        move || selected.get().map(|d| d.id),
        move |id| {
            let client = client_series.clone();
            async move {
                match id {
                    Some(id) => Some(client.get_measurements(id).await),
                    None => None,
                }
            }
        },
    );

    let (export_notice, set_export_notice) = create_signal(Option::<String>::None);
    let on_export = move |_| {
        let Some(device) = selected.get() else { return };
        let points: Vec<MeasurementPoint> = series
            .get()
            .flatten()
            .and_then(|result| result.ok())
            .unwrap_or_default();
        match export::build_csv(&device.name, &device.unit, &points) {
            Some(csv) => {
                set_export_notice.set(None);
                export::download_csv(&export::export_file_name(&device.name), &csv);
            }
            None => set_export_notice.set(Some("Nothing to export yet".into())),
        }
    };

    view! {
        <div class="dashboard">
            <Suspense fallback=move || view! { <p class="placeholder-text">"Loading devices..."</p> }>
                {move || {
                    devices.get().map(|result| match result {
                        Ok(device_list) => {
                            let cards = device_list
                                .iter()
                                .map(|device| {
                                    if device.is_sensor {
                                        view! {
                                            <SensorCard
                                                device=device.clone()
                                                on_select=move |d| set_selected.set(Some(d))
                                            />
                                        }
                                        .into_view()
                                    } else {
                                        let state = states
                                            .get()
                                            .get(&device.id)
                                            .copied()
                                            .unwrap_or(SHUTTER_CLOSED);
                                        view! {
                                            <ActuatorCard
                                                device=device.clone()
                                                state=state
                                                on_toggle=on_toggle
                                            />
                                        }
                                        .into_view()
                                    }
                                })
                                .collect_view();
                            view! { <div class="dashboard-grid">{cards}</div> }.into_view()
                        }
                        Err(e) => view! {
                            <div class="card card-error">
                                <h3>"Devices"</h3>
                                <div class="error-message">{format!("Error: {}", e)}</div>
                            </div>
                        }
                        .into_view(),
                    })
                }}
            </Suspense>

            <ThresholdsCard />

            {move || {
                selected.get().map(|device| {
                    let unit = store_value(device.unit.clone());
                    view! {
                        <div class="card chart-card">
                            <h3>{format!("History - {}", device.name)}</h3>
                            <Suspense fallback=move || {
                                view! { <p class="placeholder-text">"Loading history..."</p> }
                            }>
                                {move || {
                                    series.get().flatten().map(move |result| match result {
                                        Ok(points) if points.is_empty() => view! {
                                            <p class="subtitle">"No measurements yet"</p>
                                        }
                                        .into_view(),
                                        Ok(points) => view! {
                                            <MeasurementChart points=points unit=unit.get_value() />
                                        }
                                        .into_view(),
                                        Err(e) => view! {
                                            <p class="error-message">{format!("Error: {}", e)}</p>
                                        }
                                        .into_view(),
                                    })
                                }}
                            </Suspense>
                            <div class="chart-actions">
                                <button class="btn" on:click=on_export>"Export CSV"</button>
                                <button class="btn" on:click=move |_| set_selected.set(None)>
                                    "Close"
                                </button>
                                {move || {
                                    export_notice
                                        .get()
                                        .map(|msg| view! { <span class="info-message">{msg}</span> })
                                }}
                            </div>
                        </div>
                    }
                })
            }}
        </div>
    }
    .into_view()
}
