//! Derived metrics for progress bars, bar heights and donut segments.
//!
//! Inputs come straight from display data, so negative and non-finite values
//! are treated as zero rather than propagated into chart geometry.

use std::f64::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MetricsError {
    #[error("no values to compute shares from")]
    EmptyInput,

    #[error("values sum to zero")]
    ZeroTotal,
}

/// A categorised value to be expressed as a share of the whole.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricInput {
    pub category: String,
    pub value: f64,
}

impl MetricInput {
    pub fn new(category: impl Into<String>, value: f64) -> Self {
        Self {
            category: category.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MetricShare {
    pub category: String,
    pub value: f64,
    pub percentage_of_total: f64,
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 { value } else { 0.0 }
}

/// Expresses each value as a percentage of the sum, preserving order.
pub fn percentages_of_total(inputs: &[MetricInput]) -> Result<Vec<MetricShare>, MetricsError> {
    if inputs.is_empty() {
        return Err(MetricsError::EmptyInput);
    }

    let total: f64 = inputs.iter().map(|i| sanitize(i.value)).sum();
    if total <= 0.0 {
        return Err(MetricsError::ZeroTotal);
    }

    Ok(inputs
        .iter()
        .map(|i| MetricShare {
            category: i.category.clone(),
            value: i.value,
            percentage_of_total: sanitize(i.value) / total * 100.0,
        })
        .collect())
}

/// Like [`percentages_of_total`], but a zero total yields 0% for every item
/// and empty input yields no items.
pub fn shares_or_zero(inputs: &[MetricInput]) -> Vec<MetricShare> {
    match percentages_of_total(inputs) {
        Ok(shares) => shares,
        Err(MetricsError::ZeroTotal) => inputs
            .iter()
            .map(|i| MetricShare {
                category: i.category.clone(),
                value: i.value,
                percentage_of_total: 0.0,
            })
            .collect(),
        Err(MetricsError::EmptyInput) => Vec::new(),
    }
}

/// Scales values to 0-100 relative to the largest one (bar heights).
pub fn percentage_of_max(values: &[f64]) -> Vec<f64> {
    let max = values.iter().copied().map(sanitize).fold(0.0, f64::max);
    values
        .iter()
        .map(|&v| if max > 0.0 { sanitize(v) / max * 100.0 } else { 0.0 })
        .collect()
}

/// How far `current` has come towards `target`, clamped to 0-100.
pub fn progress_percent(current: f64, target: f64) -> f64 {
    if !target.is_finite() || target <= 0.0 || !current.is_finite() {
        return 0.0;
    }
    (current / target * 100.0).clamp(0.0, 100.0)
}

/// Stroke parameters for one arc of an SVG donut drawn with circles.
#[derive(Debug, Clone, PartialEq)]
pub struct DonutSegment {
    pub category: String,
    pub percentage: f64,
    /// Arc length along the circumference.
    pub length: f64,
    /// `stroke-dasharray` value: "<arc> <gap>".
    pub dash_array: String,
    /// `stroke-dashoffset` value placing the arc after the previous ones.
    pub dash_offset: f64,
}

pub fn circumference(radius: f64) -> f64 {
    2.0 * PI * radius
}

/// Lays segments end to end around a circle of the given radius.
pub fn donut_segments(shares: &[MetricShare], radius: f64) -> Vec<DonutSegment> {
    let circumference = circumference(radius);
    let mut consumed = 0.0;

    shares
        .iter()
        .map(|share| {
            let length = circumference * sanitize(share.percentage_of_total) / 100.0;
            let segment = DonutSegment {
                category: share.category.clone(),
                percentage: share.percentage_of_total,
                length,
                dash_array: format!("{:.2} {:.2}", length, circumference - length),
                dash_offset: -consumed,
            };
            consumed += length;
            segment
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(values: &[f64]) -> Vec<MetricInput> {
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| MetricInput::new(format!("c{i}"), v))
            .collect()
    }

    #[test]
    fn test_percentages_scenario() {
        let shares = percentages_of_total(&inputs(&[25.0, 40.0, 35.0])).unwrap();
        let pct: Vec<f64> = shares.iter().map(|s| s.percentage_of_total).collect();
        assert_eq!(pct, vec![25.0, 40.0, 35.0]);
        assert_eq!(shares[1].category, "c1");
    }

    #[test]
    fn test_percentages_sum_to_hundred() {
        let cases: &[&[f64]] = &[
            &[1.0],
            &[1.0, 2.0],
            &[0.1, 0.2, 0.3],
            &[1e-6, 5e6, 3.3],
            &[7.0, 0.0, 13.0, 0.5, 99.9],
            &[12_450.0, 8_320.0, 31_900.0],
        ];
        for values in cases {
            let sum: f64 = percentages_of_total(&inputs(values))
                .unwrap()
                .iter()
                .map(|s| s.percentage_of_total)
                .sum();
            assert!((sum - 100.0).abs() < 1e-9, "{values:?} summed to {sum}");
        }
    }

    #[test]
    fn test_empty_and_zero_total_are_distinguished() {
        assert_eq!(percentages_of_total(&[]), Err(MetricsError::EmptyInput));
        assert_eq!(
            percentages_of_total(&inputs(&[0.0, 0.0])),
            Err(MetricsError::ZeroTotal)
        );
    }

    #[test]
    fn test_shares_or_zero_guards_zero_total() {
        let shares = shares_or_zero(&inputs(&[0.0, 0.0, 0.0]));
        assert_eq!(shares.len(), 3);
        assert!(shares.iter().all(|s| s.percentage_of_total == 0.0));
        assert!(shares_or_zero(&[]).is_empty());
    }

    #[test]
    fn test_non_finite_values_count_as_zero() {
        let shares = percentages_of_total(&inputs(&[f64::NAN, 50.0, -10.0])).unwrap();
        assert_eq!(shares[0].percentage_of_total, 0.0);
        assert_eq!(shares[1].percentage_of_total, 100.0);
        assert_eq!(shares[2].percentage_of_total, 0.0);
    }

    #[test]
    fn test_percentage_of_max() {
        assert_eq!(percentage_of_max(&[10.0, 20.0, 40.0]), vec![25.0, 50.0, 100.0]);
        assert_eq!(percentage_of_max(&[0.0, 0.0]), vec![0.0, 0.0]);
        assert!(percentage_of_max(&[]).is_empty());
    }

    #[test]
    fn test_progress_percent_clamps() {
        assert_eq!(progress_percent(30.0, 60.0), 50.0);
        assert_eq!(progress_percent(90.0, 60.0), 100.0);
        assert_eq!(progress_percent(-5.0, 60.0), 0.0);
        assert_eq!(progress_percent(5.0, 0.0), 0.0);
    }

    #[test]
    fn test_donut_segments_cover_circumference() {
        let shares = percentages_of_total(&inputs(&[25.0, 40.0, 35.0])).unwrap();
        let segments = donut_segments(&shares, 40.0);
        let total: f64 = segments.iter().map(|s| s.length).sum();
        assert!((total - circumference(40.0)).abs() < 1e-9);

        assert_eq!(segments[0].dash_offset, 0.0);
        assert!((segments[1].dash_offset + segments[0].length).abs() < 1e-9);
        assert!((segments[2].dash_offset + segments[0].length + segments[1].length).abs() < 1e-9);
    }
}
