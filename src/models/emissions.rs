use serde::{Deserialize, Serialize};

use super::error::AppError;

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// GHG Protocol emission scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scope {
    Scope1,
    Scope2,
    Scope3,
}

impl Scope {
    pub fn label(&self) -> &'static str {
        match self {
            Scope::Scope1 => "Scope 1",
            Scope::Scope2 => "Scope 2",
            Scope::Scope3 => "Scope 3",
        }
    }
}

/// Fuel or energy source recorded against an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FuelType {
    Diesel,
    Petrol,
    NaturalGas,
    Lpg,
    Coal,
    GridElectricity,
    PurchasedSteam,
    DistrictCooling,
}

impl FuelType {
    pub fn code(&self) -> &'static str {
        match self {
            FuelType::Diesel => "diesel",
            FuelType::Petrol => "petrol",
            FuelType::NaturalGas => "natural_gas",
            FuelType::Lpg => "lpg",
            FuelType::Coal => "coal",
            FuelType::GridElectricity => "grid_electricity",
            FuelType::PurchasedSteam => "purchased_steam",
            FuelType::DistrictCooling => "district_cooling",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FuelType::Diesel => "Diesel",
            FuelType::Petrol => "Petrol",
            FuelType::NaturalGas => "Natural Gas",
            FuelType::Lpg => "LPG",
            FuelType::Coal => "Coal",
            FuelType::GridElectricity => "Grid Electricity",
            FuelType::PurchasedSteam => "Purchased Steam",
            FuelType::DistrictCooling => "District Cooling",
        }
    }

    /// Unit the quantity is recorded in.
    pub fn unit(&self) -> &'static str {
        match self {
            FuelType::Diesel | FuelType::Petrol | FuelType::Lpg => "L",
            FuelType::NaturalGas => "m³",
            FuelType::Coal => "kg",
            FuelType::GridElectricity
            | FuelType::PurchasedSteam
            | FuelType::DistrictCooling => "kWh",
        }
    }

    /// Default emission factor in kg CO₂e per unit.
    pub fn default_factor(&self) -> f64 {
        match self {
            FuelType::Diesel => 2.68,
            FuelType::Petrol => 2.31,
            FuelType::NaturalGas => 2.02,
            FuelType::Lpg => 1.56,
            FuelType::Coal => 2.42,
            FuelType::GridElectricity => 0.233,
            FuelType::PurchasedSteam => 0.171,
            FuelType::DistrictCooling => 0.146,
        }
    }

    pub fn scope(&self) -> Scope {
        match self {
            FuelType::Diesel
            | FuelType::Petrol
            | FuelType::NaturalGas
            | FuelType::Lpg
            | FuelType::Coal => Scope::Scope1,
            FuelType::GridElectricity
            | FuelType::PurchasedSteam
            | FuelType::DistrictCooling => Scope::Scope2,
        }
    }

    /// Fuel types selectable for a given scope's entry form.
    pub fn options(scope: Scope) -> Vec<FuelType> {
        Self::all()
            .iter()
            .copied()
            .filter(|fuel| fuel.scope() == scope)
            .collect()
    }

    pub fn all() -> &'static [FuelType] {
        &[
            FuelType::Diesel,
            FuelType::Petrol,
            FuelType::NaturalGas,
            FuelType::Lpg,
            FuelType::Coal,
            FuelType::GridElectricity,
            FuelType::PurchasedSteam,
            FuelType::DistrictCooling,
        ]
    }
}

impl std::str::FromStr for FuelType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FuelType::all()
            .iter()
            .copied()
            .find(|fuel| fuel.code() == s)
            .ok_or_else(|| AppError::Validation(format!("Unknown fuel type: {s}")))
    }
}

/// A single row of the emissions data-entry table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionEntry {
    /// Month, 1-12.
    pub month: u32,
    pub year: i32,
    pub facility_id: String,
    pub fuel_type: FuelType,
    pub quantity: f64,
    /// Factor in kg CO₂e per unit; only used when `use_custom` is set.
    pub emission_factor: f64,
    pub use_custom: bool,
}

impl EmissionEntry {
    /// The factor that applies to this entry.
    pub fn effective_factor(&self) -> f64 {
        if self.use_custom {
            self.emission_factor
        } else {
            self.fuel_type.default_factor()
        }
    }

    /// Emissions in tCO₂e.
    pub fn emissions_tonnes(&self) -> f64 {
        self.quantity * self.effective_factor() / 1000.0
    }

    pub fn month_name(&self) -> &'static str {
        month_name(self.month)
    }

    /// "March 2024" style period label.
    pub fn period(&self) -> String {
        format!("{} {}", self.month_name(), self.year)
    }
}

pub fn month_name(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|i| MONTH_NAMES.get(i as usize))
        .copied()
        .unwrap_or("Unknown")
}

/// Raw form values for an entry before validation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EntryDraft {
    pub month: String,
    pub year: String,
    pub facility_id: String,
    pub fuel_type: String,
    pub quantity: String,
    pub emission_factor: String,
    pub use_custom: bool,
}

impl EntryDraft {
    /// Pre-fills a draft with the values of an existing entry.
    pub fn from_entry(entry: &EmissionEntry) -> Self {
        Self {
            month: entry.month.to_string(),
            year: entry.year.to_string(),
            facility_id: entry.facility_id.clone(),
            fuel_type: entry.fuel_type.code().to_string(),
            quantity: entry.quantity.to_string(),
            emission_factor: if entry.use_custom {
                entry.emission_factor.to_string()
            } else {
                String::new()
            },
            use_custom: entry.use_custom,
        }
    }

    /// Checks required fields and numeric values, producing an entry.
    pub fn validate(&self) -> Result<EmissionEntry, AppError> {
        let month = required(&self.month, "Month")?
            .parse::<u32>()
            .ok()
            .filter(|m| (1..=12).contains(m))
            .ok_or_else(|| AppError::Validation("Month must be between 1 and 12".to_string()))?;

        let year = required(&self.year, "Year")?
            .parse::<i32>()
            .map_err(|_| AppError::Validation(format!("Invalid year: {}", self.year)))?;

        let facility_id = required(&self.facility_id, "Facility")?.to_string();
        let fuel_type = required(&self.fuel_type, "Fuel type")?.parse::<FuelType>()?;
        let quantity = parse_amount(required(&self.quantity, "Quantity")?, "Quantity")?;

        let emission_factor = if self.use_custom {
            parse_amount(
                required(&self.emission_factor, "Custom emission factor")?,
                "Custom emission factor",
            )?
        } else {
            fuel_type.default_factor()
        };

        Ok(EmissionEntry {
            month,
            year,
            facility_id,
            fuel_type,
            quantity,
            emission_factor,
            use_custom: self.use_custom,
        })
    }
}

fn required<'a>(value: &'a str, field: &str) -> Result<&'a str, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(AppError::Validation(format!("{field} is required")))
    } else {
        Ok(trimmed)
    }
}

fn parse_amount(value: &str, field: &str) -> Result<f64, AppError> {
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
        .ok_or_else(|| AppError::Validation(format!("{field} must be a non-negative number")))
}

/// A staged change awaiting confirmation.
#[derive(Debug, Clone, PartialEq)]
pub enum PendingChange {
    Add(EmissionEntry),
    Replace { index: usize, entry: EmissionEntry },
}

impl PendingChange {
    pub fn entry(&self) -> &EmissionEntry {
        match self {
            PendingChange::Add(entry) | PendingChange::Replace { entry, .. } => entry,
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self, PendingChange::Replace { .. })
    }
}

/// In-memory table of emission entries.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EmissionsLedger {
    entries: Vec<EmissionEntry>,
}

impl EmissionsLedger {
    pub fn new(entries: Vec<EmissionEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[EmissionEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&EmissionEntry> {
        self.entries.get(index)
    }

    pub fn add(&mut self, entry: EmissionEntry) {
        self.entries.push(entry);
    }

    /// Replaces the entry at `index` wholesale.
    pub fn replace(&mut self, index: usize, entry: EmissionEntry) -> Result<(), AppError> {
        let slot = self
            .entries
            .get_mut(index)
            .ok_or_else(|| AppError::NotFound(format!("No entry at row {}", index + 1)))?;
        *slot = entry;
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<EmissionEntry, AppError> {
        if index < self.entries.len() {
            Ok(self.entries.remove(index))
        } else {
            Err(AppError::NotFound(format!("No entry at row {}", index + 1)))
        }
    }

    /// Merges a confirmed change into the table.
    pub fn apply(&mut self, change: PendingChange) -> Result<(), AppError> {
        match change {
            PendingChange::Add(entry) => {
                self.add(entry);
                Ok(())
            }
            PendingChange::Replace { index, entry } => self.replace(index, entry),
        }
    }

    /// Sum of all entries in tCO₂e.
    pub fn total_tonnes(&self) -> f64 {
        self.entries.iter().map(EmissionEntry::emissions_tonnes).sum()
    }

    /// Emissions per fuel type in first-seen order.
    pub fn totals_by_fuel(&self) -> Vec<(FuelType, f64)> {
        let mut totals: Vec<(FuelType, f64)> = Vec::new();
        for entry in &self.entries {
            match totals.iter_mut().find(|(fuel, _)| *fuel == entry.fuel_type) {
                Some((_, total)) => *total += entry.emissions_tonnes(),
                None => totals.push((entry.fuel_type, entry.emissions_tonnes())),
            }
        }
        totals
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diesel_draft() -> EntryDraft {
        EntryDraft {
            month: "3".to_string(),
            year: "2024".to_string(),
            facility_id: "FAC-001".to_string(),
            fuel_type: "diesel".to_string(),
            quantity: "1500".to_string(),
            emission_factor: String::new(),
            use_custom: false,
        }
    }

    #[test]
    fn test_validate_uses_default_factor() {
        let entry = diesel_draft().validate().unwrap();
        assert_eq!(entry.month, 3);
        assert_eq!(entry.fuel_type, FuelType::Diesel);
        assert_eq!(entry.effective_factor(), 2.68);
        assert!((entry.emissions_tonnes() - 4.02).abs() < 1e-9);
    }

    #[test]
    fn test_validate_requires_fields() {
        let mut draft = diesel_draft();
        draft.facility_id = "   ".to_string();
        let err = draft.validate().unwrap_err();
        assert_eq!(err.to_string(), "Invalid input: Facility is required");
    }

    #[test]
    fn test_validate_rejects_bad_numbers() {
        let mut draft = diesel_draft();
        draft.quantity = "-4".to_string();
        assert!(draft.validate().is_err());

        draft.quantity = "NaN".to_string();
        assert!(draft.validate().is_err());

        draft.quantity = "10".to_string();
        draft.month = "13".to_string();
        assert!(draft.validate().is_err());
    }

    #[test]
    fn test_custom_factor_required_when_enabled() {
        let mut draft = diesel_draft();
        draft.use_custom = true;
        assert!(draft.validate().is_err());

        draft.emission_factor = "3.0".to_string();
        let entry = draft.validate().unwrap();
        assert!((entry.emissions_tonnes() - 4.5).abs() < 1e-9);
    }

    #[test]
    fn test_draft_roundtrips_existing_entry() {
        let entry = diesel_draft().validate().unwrap();
        let draft = EntryDraft::from_entry(&entry);
        assert_eq!(draft.validate().unwrap(), entry);
    }

    #[test]
    fn test_fuel_options_by_scope() {
        let scope2 = FuelType::options(Scope::Scope2);
        assert!(scope2.contains(&FuelType::GridElectricity));
        assert!(!scope2.contains(&FuelType::Diesel));
    }

    #[test]
    fn test_month_name_out_of_range() {
        assert_eq!(month_name(1), "January");
        assert_eq!(month_name(0), "Unknown");
        assert_eq!(month_name(13), "Unknown");
    }
}
