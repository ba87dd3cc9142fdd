use crate::db::DbPool;
use crate::error::Result;
use chrono::NaiveDateTime;
use sqlx::FromRow;

/// Device from the legacy `composant` table, joined with its latest
/// measurement when one exists.
#[derive(Debug, Clone, FromRow)]
pub struct DeviceRow {
    pub id: i64,
    pub name: String,
    pub is_sensor: bool,
    pub value: Option<f64>,
    pub recorded_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, FromRow)]
pub struct MeasurementRow {
    pub recorded_at: NaiveDateTime,
    pub value: f64,
}

#[derive(Clone)]
pub struct DeviceRepository {
    pool: DbPool,
}

impl DeviceRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// All devices with their most recent measurement. The per-device
    /// lookup orders by date then id, so equal timestamps resolve
    /// deterministically.
    pub async fn list_with_latest(&self) -> Result<Vec<DeviceRow>> {
        let rows = sqlx::query_as::<_, DeviceRow>(
            r#"
            SELECT
                c.id,
                c.nom AS name,
                c.is_capteur AS is_sensor,
                m.valeur AS value,
                m.date AS recorded_at
            FROM composant c
            LEFT JOIN mesure m ON m.id = (
                SELECT m2.id
                FROM mesure m2
                WHERE m2.id_composant = c.id
                ORDER BY m2.date DESC, m2.id DESC
                LIMIT 1
            )
            ORDER BY c.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn exists(&self, device_id: i64) -> Result<bool> {
        let found: Option<(i64,)> = sqlx::query_as("SELECT id FROM composant WHERE id = ?")
            .bind(device_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(found.is_some())
    }

    /// Full ascending time series for one device. Empty when the device
    /// has no rows.
    pub async fn measurements(&self, device_id: i64) -> Result<Vec<MeasurementRow>> {
        let rows = sqlx::query_as::<_, MeasurementRow>(
            r#"
            SELECT date AS recorded_at, valeur AS value
            FROM mesure
            WHERE id_composant = ?
            ORDER BY date ASC, id ASC
            "#,
        )
        .bind(device_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
