use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::error::AppError;

/// Emissions reduction initiative as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Initiative {
    #[serde(alias = "_id", default)]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub status: InitiativeStatus,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// Expected annual reduction in tCO₂e.
    #[serde(default)]
    pub expected_reduction: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InitiativeStatus {
    #[default]
    Planned,
    InProgress,
    Completed,
}

impl InitiativeStatus {
    pub fn label(&self) -> &'static str {
        match self {
            InitiativeStatus::Planned => "Planned",
            InitiativeStatus::InProgress => "In Progress",
            InitiativeStatus::Completed => "Completed",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            InitiativeStatus::Planned => "badge-planned",
            InitiativeStatus::InProgress => "badge-in-progress",
            InitiativeStatus::Completed => "badge-completed",
        }
    }
}

/// Request body for creating an initiative.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInitiative {
    pub title: String,
    pub description: String,
    pub category: String,
    pub expected_reduction: f64,
}

impl NewInitiative {
    /// Builds a request from raw form values.
    pub fn from_form(
        title: &str,
        description: &str,
        category: &str,
        expected_reduction: &str,
    ) -> Result<Self, AppError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(AppError::Validation("Title is required".to_string()));
        }

        let expected_reduction = match expected_reduction.trim() {
            "" => 0.0,
            raw => non_negative(raw, "Expected reduction")?,
        };

        Ok(Self {
            title: title.to_string(),
            description: description.trim().to_string(),
            category: category.trim().to_string(),
            expected_reduction,
        })
    }
}

/// User-defined reduction target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomTarget {
    #[serde(alias = "_id", default)]
    pub id: String,
    pub name: String,
    pub baseline_year: i32,
    pub target_year: i32,
    pub baseline_value: f64,
    pub target_value: f64,
    #[serde(default)]
    pub current_value: f64,
    #[serde(default = "default_unit")]
    pub unit: String,
}

fn default_unit() -> String {
    "tCO₂e".to_string()
}

impl CustomTarget {
    /// Share of the planned reduction achieved so far, 0-100.
    pub fn progress_percent(&self) -> f64 {
        crate::utils::metrics::progress_percent(
            self.baseline_value - self.current_value,
            self.baseline_value - self.target_value,
        )
    }

    /// Planned reduction relative to baseline, in percent.
    pub fn reduction_goal_percent(&self) -> f64 {
        if self.baseline_value > 0.0 {
            (self.baseline_value - self.target_value) / self.baseline_value * 100.0
        } else {
            0.0
        }
    }
}

/// Request body for creating a custom target.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCustomTarget {
    pub name: String,
    pub baseline_year: i32,
    pub target_year: i32,
    pub baseline_value: f64,
    pub target_value: f64,
}

impl NewCustomTarget {
    /// Builds a request from raw form values. The target must lie after the
    /// baseline, both in time and below it in value.
    pub fn from_form(
        name: &str,
        baseline_year: &str,
        target_year: &str,
        baseline_value: &str,
        target_value: &str,
    ) -> Result<Self, AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::Validation("Name is required".to_string()));
        }

        let baseline_year = year(baseline_year, "Baseline year")?;
        let target_year = year(target_year, "Target year")?;
        if target_year <= baseline_year {
            return Err(AppError::Validation(
                "Target year must be after the baseline year".to_string(),
            ));
        }

        let baseline_value = non_negative(baseline_value, "Baseline value")?;
        let target_value = non_negative(target_value, "Target value")?;
        if target_value >= baseline_value {
            return Err(AppError::Validation(
                "Target value must be below the baseline value".to_string(),
            ));
        }

        Ok(Self {
            name: name.to_string(),
            baseline_year,
            target_year,
            baseline_value,
            target_value,
        })
    }
}

fn year(raw: &str, field: &str) -> Result<i32, AppError> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| AppError::Validation(format!("{field} must be a year")))
}

fn non_negative(raw: &str, field: &str) -> Result<f64, AppError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
        .ok_or_else(|| AppError::Validation(format!("{field} must be a non-negative number")))
}

/// Headline figures for the overview section.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardData {
    pub total_emissions: f64,
    pub scope1: f64,
    pub scope2: f64,
    pub scope3: f64,
    /// Reduction against the baseline year, in percent.
    pub reduction_percent: f64,
    pub renewable_share: f64,
}

impl DashboardData {
    pub fn scope_sum(&self) -> f64 {
        self.scope1 + self.scope2 + self.scope3
    }

    /// Reported total, or the scope sum when the backend left it out.
    pub fn total_or_scope_sum(&self) -> f64 {
        if self.total_emissions > 0.0 {
            self.total_emissions
        } else {
            self.scope_sum()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_total_falls_back_to_scopes() {
        let data: DashboardData =
            serde_json::from_str(r#"{"scope1": 100, "scope2": 50.5, "scope3": 20}"#).unwrap();
        assert_eq!(data.total_emissions, 0.0);
        assert_eq!(data.total_or_scope_sum(), 170.5);

        let reported = DashboardData {
            total_emissions: 180.0,
            ..data
        };
        assert_eq!(reported.total_or_scope_sum(), 180.0);
    }

    #[test]
    fn test_initiative_accepts_mongo_id() {
        let json = r#"{
            "_id": "65f1",
            "title": "LED retrofit",
            "status": "inProgress",
            "expectedReduction": 120.5
        }"#;
        let initiative: Initiative = serde_json::from_str(json).unwrap();
        assert_eq!(initiative.id, "65f1");
        assert_eq!(initiative.status, InitiativeStatus::InProgress);
        assert_eq!(initiative.description, "");
    }

    #[test]
    fn test_custom_target_progress() {
        let target = CustomTarget {
            id: "t1".to_string(),
            name: "Net scope 1+2".to_string(),
            baseline_year: 2019,
            target_year: 2030,
            baseline_value: 1000.0,
            target_value: 500.0,
            current_value: 750.0,
            unit: default_unit(),
        };
        assert!((target.progress_percent() - 50.0).abs() < 1e-9);
        assert!((target.reduction_goal_percent() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_custom_target_without_planned_reduction() {
        let target = CustomTarget {
            id: String::new(),
            name: "Flat".to_string(),
            baseline_year: 2020,
            target_year: 2025,
            baseline_value: 0.0,
            target_value: 0.0,
            current_value: 0.0,
            unit: default_unit(),
        };
        assert_eq!(target.progress_percent(), 0.0);
        assert_eq!(target.reduction_goal_percent(), 0.0);
    }

    #[test]
    fn test_dashboard_data_defaults_missing_fields() {
        let data: DashboardData = serde_json::from_str(r#"{"scope1": 12.5}"#).unwrap();
        assert_eq!(data.scope1, 12.5);
        assert_eq!(data.total_emissions, 0.0);
    }

    #[test]
    fn test_new_initiative_from_form() {
        let initiative =
            NewInitiative::from_form("  Solar PPA ", "Rooftop arrays", "Energy", "").unwrap();
        assert_eq!(initiative.title, "Solar PPA");
        assert_eq!(initiative.expected_reduction, 0.0);

        assert!(matches!(
            NewInitiative::from_form(" ", "", "", "10"),
            Err(AppError::Validation(_))
        ));
        assert!(NewInitiative::from_form("Fleet", "", "", "-5").is_err());

        let body = serde_json::to_value(
            NewInitiative::from_form("Fleet", "", "Transport", "12.5").unwrap(),
        )
        .unwrap();
        assert_eq!(body["expectedReduction"], 12.5);
    }

    #[test]
    fn test_new_custom_target_from_form() {
        let target =
            NewCustomTarget::from_form("Scope 1+2", "2019", "2030", "1000", "580").unwrap();
        assert_eq!(target.target_year, 2030);
        assert_eq!(target.target_value, 580.0);

        // target year before baseline
        assert!(NewCustomTarget::from_form("x", "2030", "2019", "1000", "580").is_err());
        // target above baseline
        assert!(NewCustomTarget::from_form("x", "2019", "2030", "500", "580").is_err());
        assert!(NewCustomTarget::from_form("x", "20x9", "2030", "1000", "580").is_err());
    }
}
