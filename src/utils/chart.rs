//! Maps data series onto SVG coordinates and chart dataset structures.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ChartError {
    #[error("a line needs at least two points, got {0}")]
    TooFewPoints(usize),
}

/// A labelled sample carrying one value per series.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    pub label: String,
    pub values: Vec<f64>,
}

impl SeriesPoint {
    pub fn new(label: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            values,
        }
    }

    /// Value of the given series, 0 if absent.
    pub fn value(&self, series: usize) -> f64 {
        self.values.get(series).copied().unwrap_or(0.0)
    }
}

/// Largest finite value selected by `key`, or 0 for an empty series.
pub fn series_max<T>(data: &[T], key: impl Fn(&T) -> f64) -> f64 {
    data.iter()
        .map(key)
        .filter(|v| v.is_finite())
        .fold(0.0, f64::max)
}

/// Computes (x, y) pairs for a polyline inside a `width` × `height` box.
///
/// x runs from 0 to `width` in equal steps. y is measured from the top, so
/// `max_value` maps to 0 and zero maps to `height`. A non-positive
/// `max_value` puts every point on the baseline.
pub fn chart_points<T>(
    data: &[T],
    key: impl Fn(&T) -> f64,
    max_value: f64,
    height: f64,
    width: f64,
) -> Result<Vec<(f64, f64)>, ChartError> {
    if data.len() < 2 {
        return Err(ChartError::TooFewPoints(data.len()));
    }

    let last = (data.len() - 1) as f64;
    let scale_ok = max_value.is_finite() && max_value > 0.0;

    Ok(data
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let x = i as f64 / last * width;
            let value = key(item);
            let ratio = if scale_ok && value.is_finite() {
                value / max_value
            } else {
                0.0
            };
            (x, height - ratio * height)
        })
        .collect())
}

/// Formats the points as an SVG `points` attribute: "x,y x,y ...".
///
/// Coordinates are rounded to two decimals, except x when the step between
/// points is finer than that and rounding would merge neighbours.
pub fn polyline_points<T>(
    data: &[T],
    key: impl Fn(&T) -> f64,
    max_value: f64,
    height: f64,
    width: f64,
) -> Result<String, ChartError> {
    let points = chart_points(data, key, max_value, height, width)?;
    let step = width / (points.len() - 1) as f64;
    let round_x = step >= 0.01;
    Ok(points
        .iter()
        .map(|&(x, y)| {
            let x = if round_x { round2(x) } else { x };
            format!("{},{}", x, round2(y))
        })
        .collect::<Vec<_>>()
        .join(" "))
}

/// Closes a polyline down to the baseline so it can be filled as an area.
pub fn area_points(line: &str, height: f64, width: f64) -> String {
    format!("0,{h} {line} {w},{h}", h = round2(height), w = round2(width))
}

/// Rounds to two decimals; `+ 0.0` turns `-0` into `0`.
fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0 + 0.0
}

/// Line dataset in the shape Chart.js consumes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineDataset {
    pub label: String,
    pub data: Vec<f64>,
    pub border_color: String,
    pub background_color: String,
    pub fill: bool,
    pub tension: f64,
}

pub fn line_dataset<T>(
    label: impl Into<String>,
    data: &[T],
    key: impl Fn(&T) -> f64,
    color: impl Into<String>,
) -> LineDataset {
    let color = color.into();
    LineDataset {
        label: label.into(),
        data: data
            .iter()
            .map(key)
            .map(|v| if v.is_finite() { v } else { 0.0 })
            .collect(),
        background_color: format!("{color}33"),
        border_color: color,
        fill: false,
        tension: 0.4,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn xs(points: &str) -> Vec<f64> {
        points
            .split(' ')
            .map(|pair| pair.split(',').next().unwrap().parse().unwrap())
            .collect()
    }

    fn ys(points: &str) -> Vec<f64> {
        points
            .split(' ')
            .map(|pair| pair.split(',').nth(1).unwrap().parse().unwrap())
            .collect()
    }

    #[test]
    fn test_polyline_scenario() {
        let points = polyline_points(&[10.0, 20.0, 30.0], |v| *v, 30.0, 50.0, 100.0).unwrap();
        assert_eq!(xs(&points), vec![0.0, 50.0, 100.0]);
        assert_eq!(ys(&points), vec![33.33, 16.67, 0.0]);
    }

    #[test]
    fn test_polyline_shape_for_various_lengths() {
        for len in 2..40 {
            let data: Vec<f64> = (0..len).map(|i| (i * 7 % 11) as f64).collect();
            let max = series_max(&data, |v| *v);
            let points = polyline_points(&data, |v| *v, max, 80.0, 300.0).unwrap();

            assert_eq!(points.split(' ').count(), len);
            let x = xs(&points);
            assert_eq!(x[0], 0.0);
            assert_eq!(*x.last().unwrap(), 300.0);
            assert!(x.windows(2).all(|w| w[0] < w[1]), "x not increasing for len {len}");
        }
    }

    #[test]
    fn test_dense_series_keeps_x_increasing() {
        let data: Vec<f64> = (0..1001).map(|i| (i % 13) as f64).collect();
        let max = series_max(&data, |v| *v);
        let points = polyline_points(&data, |v| *v, max, 50.0, 1.0).unwrap();

        let x = xs(&points);
        assert_eq!(x.len(), 1001);
        assert_eq!(x[0], 0.0);
        assert_eq!(*x.last().unwrap(), 1.0);
        assert!(x.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_value_just_above_max_has_no_negative_zero() {
        let points = polyline_points(&[0.0, 30.000_000_1], |v| *v, 30.0, 50.0, 100.0).unwrap();
        assert_eq!(points, "0,50 100,0");
    }

    #[test]
    fn test_single_point_is_rejected() {
        assert_eq!(
            polyline_points(&[5.0], |v| *v, 5.0, 10.0, 10.0),
            Err(ChartError::TooFewPoints(1))
        );
        let empty: [f64; 0] = [];
        assert_eq!(
            polyline_points(&empty, |v| *v, 5.0, 10.0, 10.0),
            Err(ChartError::TooFewPoints(0))
        );
    }

    #[test]
    fn test_zero_max_stays_on_baseline() {
        let points = polyline_points(&[0.0, 0.0, 0.0], |v| *v, 0.0, 50.0, 100.0).unwrap();
        assert!(!points.contains("NaN"));
        assert!(ys(&points).iter().all(|y| *y == 50.0));
    }

    #[test]
    fn test_key_selector_picks_series() {
        let data = vec![
            SeriesPoint::new("Jan", vec![1.0, 4.0]),
            SeriesPoint::new("Feb", vec![2.0, 2.0]),
        ];
        let points = polyline_points(&data, |p| p.value(1), 4.0, 10.0, 10.0).unwrap();
        assert_eq!(points, "0,0 10,5");
    }

    #[test]
    fn test_area_points_close_to_baseline() {
        assert_eq!(area_points("0,0 10,5", 10.0, 10.0), "0,10 0,0 10,5 10,10");
    }

    #[test]
    fn test_line_dataset_serializes_camel_case() {
        let dataset = line_dataset("Scope 1", &[1.0, f64::NAN], |v| *v, "#10b981");
        let json = serde_json::to_value(&dataset).unwrap();
        assert_eq!(json["borderColor"], "#10b981");
        assert_eq!(json["data"], serde_json::json!([1.0, 0.0]));
    }
}
