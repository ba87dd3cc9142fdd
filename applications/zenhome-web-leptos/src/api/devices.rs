use super::client::{ApiClient, ApiError};
use crate::models::{DeviceView, MeasurementPoint};

impl ApiClient {
    /// All devices with their latest reading and derived unit
    pub async fn get_devices(&self) -> Result<Vec<DeviceView>, ApiError> {
        self.get("/api/v1/devices").await
    }

    /// Full ascending time series for one device
    pub async fn get_measurements(&self, device_id: i64) -> Result<Vec<MeasurementPoint>, ApiError> {
        self.get(&format!("/api/v1/devices/{}/measurements", device_id))
            .await
    }
}
