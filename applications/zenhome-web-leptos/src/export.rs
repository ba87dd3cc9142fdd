//! Client-side CSV export of a measurement series.

use crate::models::MeasurementPoint;
use chrono::NaiveDateTime;

/// Build the CSV text for a series: semicolon-delimited, quoted fields,
/// one header row. Returns None for an empty series so the caller can
/// show a "nothing to export" notice instead of saving an empty file.
pub fn build_csv(device_name: &str, unit: &str, points: &[MeasurementPoint]) -> Option<String> {
    if points.is_empty() {
        return None;
    }

    let value_header = if unit.is_empty() {
        device_name.to_string()
    } else {
        format!("{} ({})", device_name, unit)
    };

    let mut csv = format!("{};{}\r\n", quote("Date"), quote(&value_header));
    for point in points {
        csv.push_str(&format!(
            "{};{}\r\n",
            quote(&format_timestamp(&point.recorded_at)),
            quote(&format_value(point.value)),
        ));
    }
    Some(csv)
}

/// File name for the exported series, derived from the device name.
pub fn export_file_name(device_name: &str) -> String {
    let slug: String = device_name
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect();
    format!("{}.csv", slug.trim_matches('_'))
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    }
}

/// Timestamps arrive as ISO strings from the backend; render them as
/// day-first date and time. Unparseable input passes through as is.
fn format_timestamp(raw: &str) -> String {
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, pattern) {
            return dt.format("%d/%m/%Y %H:%M:%S").to_string();
        }
    }
    raw.to_string()
}

/// Trigger a browser download of the CSV text.
#[allow(unused_variables)]
pub fn download_csv(file_name: &str, csv: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        let Some(window) = web_sys::window() else { return };
        let Some(document) = window.document() else { return };

        let parts = js_sys::Array::new();
        parts.push(&wasm_bindgen::JsValue::from_str(csv));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type("text/csv;charset=utf-8");

        let Ok(blob) = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options) else {
            return;
        };
        let Ok(url) = web_sys::Url::create_object_url_with_blob(&blob) else {
            return;
        };

        if let Ok(element) = document.create_element("a") {
            if let Ok(anchor) = element.dyn_into::<web_sys::HtmlAnchorElement>() {
                anchor.set_href(&url);
                anchor.set_download(file_name);
                anchor.click();
            }
        }
        let _ = web_sys::Url::revoke_object_url(&url);
    }
}
