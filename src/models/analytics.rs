use crate::utils::chart::SeriesPoint;

/// Granularity selector for the analytics charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Period {
    #[default]
    Monthly,
    Quarterly,
    Yearly,
}

impl Period {
    pub fn label(&self) -> &'static str {
        match self {
            Period::Monthly => "Monthly",
            Period::Quarterly => "Quarterly",
            Period::Yearly => "Yearly",
        }
    }

    pub fn all() -> &'static [Period] {
        &[Period::Monthly, Period::Quarterly, Period::Yearly]
    }

    /// Months folded into one bucket.
    fn bucket_size(&self) -> usize {
        match self {
            Period::Monthly => 1,
            Period::Quarterly => 3,
            Period::Yearly => 12,
        }
    }
}

/// One month of emissions, per scope, in tCO₂e.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyEmissions {
    pub year: i32,
    /// 1-12
    pub month: u32,
    pub scope1: f64,
    pub scope2: f64,
    pub scope3: f64,
}

impl MonthlyEmissions {
    pub fn total(&self) -> f64 {
        self.scope1 + self.scope2 + self.scope3
    }
}

fn bucket_label(first: &MonthlyEmissions, period: Period) -> String {
    match period {
        Period::Monthly => format!(
            "{} {}",
            &crate::models::emissions::month_name(first.month)[..3],
            first.year
        ),
        Period::Quarterly => format!("Q{} {}", first.month.saturating_sub(1) / 3 + 1, first.year),
        Period::Yearly => first.year.to_string(),
    }
}

/// Sums consecutive months into buckets of the requested period.
///
/// Each resulting point carries `[scope1, scope2, scope3, total]`. `months`
/// is expected in chronological order starting on a bucket boundary; a
/// trailing partial bucket is kept.
pub fn aggregate(months: &[MonthlyEmissions], period: Period) -> Vec<SeriesPoint> {
    months
        .chunks(period.bucket_size())
        .filter_map(|chunk| {
            let first = chunk.first()?;
            let (s1, s2, s3) = chunk.iter().fold((0.0, 0.0, 0.0), |(a, b, c), m| {
                (a + m.scope1, b + m.scope2, c + m.scope3)
            });
            Some(SeriesPoint::new(
                bucket_label(first, period),
                vec![s1, s2, s3, s1 + s2 + s3],
            ))
        })
        .collect()
}

/// Keeps only the most recent `n` points.
pub fn latest(points: Vec<SeriesPoint>, n: usize) -> Vec<SeriesPoint> {
    let skip = points.len().saturating_sub(n);
    points.into_iter().skip(skip).collect()
}

/// Percentage change between the last two points of a series, if defined.
pub fn period_over_period(points: &[SeriesPoint], series: usize) -> Option<f64> {
    let [.., previous, current] = points else {
        return None;
    };
    let before = previous.value(series);
    if before == 0.0 {
        return None;
    }
    Some((current.value(series) - before) / before * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn months(year: i32, count: u32) -> Vec<MonthlyEmissions> {
        (1..=count)
            .map(|month| MonthlyEmissions {
                year,
                month,
                scope1: 1.0,
                scope2: 2.0,
                scope3: f64::from(month),
            })
            .collect()
    }

    #[test]
    fn test_quarterly_buckets() {
        let points = aggregate(&months(2024, 12), Period::Quarterly);
        assert_eq!(points.len(), 4);
        assert_eq!(points[0].label, "Q1 2024");
        assert_eq!(points[0].values, vec![3.0, 6.0, 6.0, 15.0]);
        assert_eq!(points[3].label, "Q4 2024");
    }

    #[test]
    fn test_yearly_keeps_partial_bucket() {
        let mut data = months(2023, 12);
        data.extend(months(2024, 2));
        let points = aggregate(&data, Period::Yearly);
        assert_eq!(points.len(), 2);
        assert_eq!(points[1].label, "2024");
        assert_eq!(points[1].value(0), 2.0);
    }

    #[test]
    fn test_monthly_labels() {
        let points = aggregate(&months(2024, 2), Period::Monthly);
        assert_eq!(points[1].label, "Feb 2024");
    }

    #[test]
    fn test_latest_and_change() {
        let points = latest(aggregate(&months(2024, 12), Period::Monthly), 3);
        assert_eq!(points.len(), 3);
        assert_eq!(points[0].label, "Oct 2024");

        // scope3 goes 11 -> 12
        let change = period_over_period(&points, 2).unwrap();
        assert!((change - 100.0 / 11.0).abs() < 1e-9);
        assert_eq!(period_over_period(&points[..1], 2), None);
    }
}
