use chrono::{DateTime, NaiveDate, Utc};

use crate::utils::metrics::progress_percent;

/// A source feeding the emissions inventory.
#[derive(Debug, Clone, PartialEq)]
pub struct DataSource {
    pub name: String,
    pub owner: String,
    pub records_received: u32,
    pub records_expected: u32,
    pub last_updated: NaiveDate,
}

impl DataSource {
    pub fn completeness(&self) -> f64 {
        progress_percent(
            f64::from(self.records_received),
            f64::from(self.records_expected),
        )
    }

    pub fn status(&self) -> CollectionStatus {
        match self.completeness() {
            c if c >= 100.0 => CollectionStatus::Complete,
            c if c >= 60.0 => CollectionStatus::InProgress,
            _ => CollectionStatus::Missing,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionStatus {
    Complete,
    InProgress,
    Missing,
}

impl CollectionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            CollectionStatus::Complete => "Complete",
            CollectionStatus::InProgress => "In Progress",
            CollectionStatus::Missing => "Data Gaps",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            CollectionStatus::Complete => "badge-completed",
            CollectionStatus::InProgress => "badge-in-progress",
            CollectionStatus::Missing => "badge-missing",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Framework {
    Gri,
    Cdp,
    Tcfd,
    Csrd,
}

impl Framework {
    pub fn label(&self) -> &'static str {
        match self {
            Framework::Gri => "GRI",
            Framework::Cdp => "CDP",
            Framework::Tcfd => "TCFD",
            Framework::Csrd => "CSRD",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReportStatus {
    Draft,
    Generated(DateTime<Utc>),
}

/// A framework disclosure report.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub name: String,
    pub framework: Framework,
    pub period: String,
    pub status: ReportStatus,
}

impl Report {
    pub fn draft(name: impl Into<String>, framework: Framework, period: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            framework,
            period: period.into(),
            status: ReportStatus::Draft,
        }
    }

    pub fn generate(&mut self, at: DateTime<Utc>) {
        self.status = ReportStatus::Generated(at);
    }

    pub fn is_generated(&self) -> bool {
        matches!(self.status, ReportStatus::Generated(_))
    }
}

/// Report count per framework, in first-seen order.
pub fn framework_counts(reports: &[Report]) -> Vec<(Framework, usize)> {
    let mut counts: Vec<(Framework, usize)> = Vec::new();
    for report in reports {
        match counts.iter_mut().find(|(f, _)| *f == report.framework) {
            Some((_, n)) => *n += 1,
            None => counts.push((report.framework, 1)),
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(received: u32, expected: u32) -> DataSource {
        DataSource {
            name: "Utility bills".to_string(),
            owner: "Facilities".to_string(),
            records_received: received,
            records_expected: expected,
            last_updated: NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
        }
    }

    #[test]
    fn test_completeness_status() {
        assert_eq!(source(12, 12).status(), CollectionStatus::Complete);
        assert_eq!(source(9, 12).status(), CollectionStatus::InProgress);
        assert_eq!(source(2, 12).status(), CollectionStatus::Missing);
        assert_eq!(source(0, 0).completeness(), 0.0);
    }

    #[test]
    fn test_generate_report() {
        let mut report = Report::draft("Annual GHG inventory", Framework::Gri, "FY2024");
        assert!(!report.is_generated());
        report.generate(Utc::now());
        assert!(report.is_generated());
    }

    #[test]
    fn test_framework_counts() {
        let reports = vec![
            Report::draft("a", Framework::Cdp, "2024"),
            Report::draft("b", Framework::Gri, "2024"),
            Report::draft("c", Framework::Cdp, "2023"),
        ];
        assert_eq!(
            framework_counts(&reports),
            vec![(Framework::Cdp, 2), (Framework::Gri, 1)]
        );
    }
}
