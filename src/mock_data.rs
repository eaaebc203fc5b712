//! Literal display data for sections that have no backing API.

use chrono::NaiveDate;

use crate::models::{
    analytics::MonthlyEmissions,
    emissions::{EmissionEntry, FuelType},
    metrics::{ChangeType, MetricCard},
    reporting::{DataSource, Framework, Report},
};
use crate::utils::metrics::MetricInput;

pub const REPORTING_YEAR: i32 = 2024;

pub fn overview_cards() -> Vec<MetricCard> {
    vec![
        MetricCard::new("Total Emissions", "20,880 tCO₂e", "-8.2%", ChangeType::Decrease)
            .subtitle("vs 2023")
            .icon("🌍")
            .trend(vec![23.1, 22.8, 22.4, 21.9, 21.5, 20.9]),
        MetricCard::new("Carbon Intensity", "42.6 t/$M", "-5.1%", ChangeType::Decrease)
            .subtitle("per $M revenue")
            .icon("📉")
            .trend(vec![48.0, 46.9, 45.2, 44.1, 43.3, 42.6]),
        MetricCard::new("Renewable Energy", "38%", "+12%", ChangeType::Increase)
            .subtitle("of total electricity")
            .icon("☀️")
            .progress(38.0),
        MetricCard::new("Net Zero Progress", "31%", "+6%", ChangeType::Increase)
            .subtitle("towards 2040 goal")
            .icon("🎯")
            .progress(31.0),
    ]
}

pub fn emissions_by_scope() -> Vec<MetricInput> {
    vec![
        MetricInput::new("Scope 1", 4_820.0),
        MetricInput::new("Scope 2", 3_410.0),
        MetricInput::new("Scope 3", 12_650.0),
    ]
}

/// Three years of monthly emissions per scope, oldest first.
pub fn monthly_emissions() -> Vec<MonthlyEmissions> {
    const SCOPE1: [f64; 12] = [
        455.0, 430.0, 418.0, 402.0, 385.0, 371.0, 366.0, 374.0, 389.0, 405.0, 421.0, 448.0,
    ];
    const SCOPE2: [f64; 12] = [
        318.0, 305.0, 296.0, 281.0, 270.0, 279.0, 301.0, 298.0, 276.0, 268.0, 284.0, 309.0,
    ];
    const SCOPE3: [f64; 12] = [
        1_120.0, 1_085.0, 1_060.0, 1_032.0, 1_010.0, 1_044.0, 1_071.0, 1_058.0, 1_019.0, 998.0,
        1_026.0, 1_090.0,
    ];

    (REPORTING_YEAR - 2..=REPORTING_YEAR)
        .enumerate()
        .flat_map(|(i, year)| {
            // Each earlier year runs about 7% higher
            let factor = 1.0 + 0.07 * (2 - i) as f64;
            (0..12).map(move |m| MonthlyEmissions {
                year,
                month: m as u32 + 1,
                scope1: SCOPE1[m] * factor,
                scope2: SCOPE2[m] * factor,
                scope3: SCOPE3[m] * factor,
            })
        })
        .collect()
}

pub fn scope1_cards() -> Vec<MetricCard> {
    vec![
        MetricCard::new("Stationary Combustion", "2,910 tCO₂e", "-4.3%", ChangeType::Decrease)
            .subtitle("boilers and generators")
            .icon("🔥"),
        MetricCard::new("Mobile Combustion", "1,460 tCO₂e", "-9.8%", ChangeType::Decrease)
            .subtitle("company fleet")
            .icon("🚗"),
        MetricCard::new("Fugitive Emissions", "450 tCO₂e", "+1.2%", ChangeType::Increase)
            .subtitle("refrigerant leakage")
            .icon("❄️"),
    ]
}

pub fn stationary_entries() -> Vec<EmissionEntry> {
    vec![
        EmissionEntry {
            month: 1,
            year: REPORTING_YEAR,
            facility_id: "FAC-001".to_string(),
            fuel_type: FuelType::NaturalGas,
            quantity: 48_200.0,
            emission_factor: FuelType::NaturalGas.default_factor(),
            use_custom: false,
        },
        EmissionEntry {
            month: 1,
            year: REPORTING_YEAR,
            facility_id: "FAC-002".to_string(),
            fuel_type: FuelType::Diesel,
            quantity: 6_350.0,
            emission_factor: FuelType::Diesel.default_factor(),
            use_custom: false,
        },
        EmissionEntry {
            month: 2,
            year: REPORTING_YEAR,
            facility_id: "FAC-001".to_string(),
            fuel_type: FuelType::NaturalGas,
            quantity: 45_900.0,
            emission_factor: 1.98,
            use_custom: true,
        },
    ]
}

pub fn scope2_cards() -> Vec<MetricCard> {
    vec![
        MetricCard::new("Location-based", "3,410 tCO₂e", "-6.7%", ChangeType::Decrease)
            .subtitle("grid average factors")
            .icon("🏙️"),
        MetricCard::new("Market-based", "2,180 tCO₂e", "-14.2%", ChangeType::Decrease)
            .subtitle("after green tariffs and RECs")
            .icon("🧾"),
        MetricCard::new("Electricity Use", "14,630 MWh", "+2.1%", ChangeType::Increase)
            .subtitle("all sites")
            .icon("⚡"),
    ]
}

/// Scope 2 emissions per energy source in tCO₂e.
pub fn scope2_sources() -> Vec<MetricInput> {
    vec![
        MetricInput::new("Grid Electricity", 2_640.0),
        MetricInput::new("Purchased Steam", 510.0),
        MetricInput::new("District Cooling", 260.0),
    ]
}

pub fn scope2_entries() -> Vec<EmissionEntry> {
    vec![
        EmissionEntry {
            month: 1,
            year: REPORTING_YEAR,
            facility_id: "FAC-001".to_string(),
            fuel_type: FuelType::GridElectricity,
            quantity: 612_000.0,
            emission_factor: FuelType::GridElectricity.default_factor(),
            use_custom: false,
        },
        EmissionEntry {
            month: 1,
            year: REPORTING_YEAR,
            facility_id: "FAC-003".to_string(),
            fuel_type: FuelType::PurchasedSteam,
            quantity: 240_000.0,
            emission_factor: FuelType::PurchasedSteam.default_factor(),
            use_custom: false,
        },
    ]
}

/// Scope 3 emissions by GHG Protocol category in tCO₂e.
pub fn scope3_categories() -> Vec<MetricInput> {
    vec![
        MetricInput::new("Purchased Goods & Services", 5_480.0),
        MetricInput::new("Upstream Transportation", 1_960.0),
        MetricInput::new("Business Travel", 1_240.0),
        MetricInput::new("Employee Commuting", 870.0),
        MetricInput::new("Use of Sold Products", 2_310.0),
        MetricInput::new("Waste Generated", 420.0),
        MetricInput::new("End-of-Life Treatment", 370.0),
    ]
}

/// A published reduction target tracked against its baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetProgress {
    pub name: &'static str,
    pub label: &'static str,
    pub baseline_year: i32,
    pub target_year: i32,
    /// Planned reduction in percent of baseline.
    pub reduction_goal: f64,
    /// Reduction achieved so far in percent of baseline.
    pub achieved: f64,
}

pub fn sbti_targets() -> Vec<TargetProgress> {
    vec![
        TargetProgress {
            name: "Scope 1 & 2 absolute reduction",
            label: "SBTi 1.5°C aligned",
            baseline_year: 2019,
            target_year: 2030,
            reduction_goal: 42.0,
            achieved: 27.5,
        },
        TargetProgress {
            name: "Scope 3 supplier engagement",
            label: "SBTi validated",
            baseline_year: 2019,
            target_year: 2027,
            reduction_goal: 67.0,
            achieved: 41.0,
        },
        TargetProgress {
            name: "Net zero across value chain",
            label: "SBTi Net-Zero Standard",
            baseline_year: 2019,
            target_year: 2040,
            reduction_goal: 90.0,
            achieved: 18.0,
        },
    ]
}

/// Total emissions per year, oldest first.
pub fn yearly_performance() -> Vec<(String, f64)> {
    vec![
        ("2019".to_string(), 28_400.0),
        ("2020".to_string(), 24_900.0),
        ("2021".to_string(), 25_700.0),
        ("2022".to_string(), 23_800.0),
        ("2023".to_string(), 22_740.0),
        ("2024".to_string(), 20_880.0),
    ]
}

pub fn esg_kpis() -> Vec<(&'static str, Vec<MetricCard>)> {
    vec![
        (
            "Environmental",
            vec![
                MetricCard::new("Water Recycled", "46%", "+4%", ChangeType::Increase)
                    .icon("💧")
                    .progress(46.0),
                MetricCard::new("Waste Diverted", "72%", "+9%", ChangeType::Increase)
                    .icon("♻️")
                    .progress(72.0),
            ],
        ),
        (
            "Social",
            vec![
                MetricCard::new("Women in Leadership", "38%", "+3%", ChangeType::Increase)
                    .icon("👥")
                    .progress(38.0),
                MetricCard::new("Training Hours", "31 h/FTE", "0%", ChangeType::Neutral)
                    .icon("🎓")
                    .progress(77.5),
            ],
        ),
        (
            "Governance",
            vec![
                MetricCard::new("Independent Directors", "64%", "+6%", ChangeType::Increase)
                    .icon("🏛️")
                    .progress(64.0),
                MetricCard::new("Suppliers Screened", "83%", "+11%", ChangeType::Increase)
                    .icon("🔎")
                    .progress(83.0),
            ],
        ),
    ]
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

pub fn data_sources() -> Vec<DataSource> {
    vec![
        DataSource {
            name: "Utility invoices".to_string(),
            owner: "Facilities".to_string(),
            records_received: 144,
            records_expected: 144,
            last_updated: date(2024, 12, 31),
        },
        DataSource {
            name: "Fleet fuel cards".to_string(),
            owner: "Operations".to_string(),
            records_received: 1_880,
            records_expected: 2_400,
            last_updated: date(2024, 11, 30),
        },
        DataSource {
            name: "Supplier questionnaires".to_string(),
            owner: "Procurement".to_string(),
            records_received: 96,
            records_expected: 310,
            last_updated: date(2024, 10, 15),
        },
        DataSource {
            name: "Travel bookings".to_string(),
            owner: "Finance".to_string(),
            records_received: 4_210,
            records_expected: 4_500,
            last_updated: date(2024, 12, 20),
        },
    ]
}

pub fn reports() -> Vec<Report> {
    vec![
        Report::draft("Annual GHG Inventory", Framework::Gri, "FY2024"),
        Report::draft("Climate Change Questionnaire", Framework::Cdp, "FY2024"),
        Report::draft("Climate Risk Disclosure", Framework::Tcfd, "FY2024"),
        Report::draft("Sustainability Statement", Framework::Csrd, "FY2024"),
        Report::draft("Water Security Questionnaire", Framework::Cdp, "FY2024"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monthly_emissions_cover_three_years() {
        let months = monthly_emissions();
        assert_eq!(months.len(), 36);
        assert_eq!(months[0].year, REPORTING_YEAR - 2);
        assert_eq!(months[35].month, 12);
        assert!(months[35].total() < months[11].total());
    }
}
