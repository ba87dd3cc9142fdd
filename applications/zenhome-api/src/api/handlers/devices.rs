use crate::api::handlers::users::parse_id;
use crate::api::models::device::{DeviceView, MeasurementPoint};
use crate::api::routes::AppState;
use crate::error::Result;
use axum::{
    extract::{Path, State},
    response::Json,
};

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<DeviceView>>> {
    let devices = state.devices.list().await?;
    Ok(Json(devices))
}

pub async fn measurements(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<MeasurementPoint>>> {
    let device_id = parse_id(&id)?;
    let series = state.devices.measurements(device_id).await?;
    Ok(Json(series))
}
