use crate::models::MeasurementPoint;
use leptos::*;

const CHART_WIDTH: f64 = 640.0;
const CHART_HEIGHT: f64 = 240.0;
const CHART_PADDING: f64 = 16.0;

/// Map a series onto SVG polyline coordinates, left to right, higher
/// values up. A flat series draws at mid-height; a single point sits in
/// the horizontal middle.
pub fn polyline_points(values: &[f64], width: f64, height: f64, padding: f64) -> String {
    if values.is_empty() {
        return String::new();
    }

    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;

    let inner_w = width - 2.0 * padding;
    let inner_h = height - 2.0 * padding;
    let step = if values.len() > 1 {
        inner_w / (values.len() - 1) as f64
    } else {
        0.0
    };

    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let x = if values.len() > 1 {
                padding + step * i as f64
            } else {
                width / 2.0
            };
            let y = if span == 0.0 {
                height / 2.0
            } else {
                padding + inner_h * (1.0 - (v - min) / span)
            };
            format!("{:.1},{:.1}", x, y)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Line chart of one sensor series, as inline SVG
#[component]
pub fn MeasurementChart(points: Vec<MeasurementPoint>, unit: String) -> impl IntoView {
    let values: Vec<f64> = points.iter().map(|p| p.value).collect();
    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let path = polyline_points(&values, CHART_WIDTH, CHART_HEIGHT, CHART_PADDING);

    let first = points.first().map(|p| p.recorded_at.clone()).unwrap_or_default();
    let last = points.last().map(|p| p.recorded_at.clone()).unwrap_or_default();

    view! {
        <div class="chart">
            <svg
                viewBox=format!("0 0 {} {}", CHART_WIDTH, CHART_HEIGHT)
                preserveAspectRatio="none"
                class="chart-svg"
            >
                <polyline points=path fill="none" stroke="currentColor" stroke-width="2" />
            </svg>
            <div class="chart-scale">
                <span>{format!("min {} {}", min, unit)}</span>
                <span>{format!("max {} {}", max, unit)}</span>
            </div>
            <div class="chart-range">
                <span>{first}</span>
                <span>{last}</span>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_series_has_no_points() {
        assert_eq!(polyline_points(&[], 640.0, 240.0, 16.0), "");
    }

    #[test]
    fn test_two_points_span_the_chart() {
        let points = polyline_points(&[0.0, 10.0], 100.0, 100.0, 10.0);
        // min sits at the bottom padding line, max at the top
        assert_eq!(points, "10.0,90.0 90.0,10.0");
    }

    #[test]
    fn test_flat_series_draws_mid_height() {
        let points = polyline_points(&[5.0, 5.0, 5.0], 100.0, 100.0, 10.0);
        for pair in points.split(' ') {
            let y: f64 = pair.split(',').nth(1).unwrap().parse().unwrap();
            assert_eq!(y, 50.0);
        }
    }

    #[test]
    fn test_single_point_is_centered_horizontally() {
        let points = polyline_points(&[3.0], 100.0, 100.0, 10.0);
        assert_eq!(points, "50.0,50.0");
    }

    #[test]
    fn test_higher_values_map_to_smaller_y() {
        let points = polyline_points(&[1.0, 2.0, 3.0], 100.0, 100.0, 10.0);
        let ys: Vec<f64> = points
            .split(' ')
            .map(|pair| pair.split(',').nth(1).unwrap().parse().unwrap())
            .collect();
        assert!(ys[0] > ys[1] && ys[1] > ys[2]);
    }
}
