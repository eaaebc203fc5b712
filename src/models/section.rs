use serde::{Deserialize, Serialize};

use super::error::AppError;

/// Top-level dashboard sections, one of which is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Section {
    #[default]
    Overview,
    Scope1,
    Scope2,
    Scope3,
    Targets,
    Performance,
    EsgKpis,
    Analytics,
    DataCollection,
    Reporting,
    Chatbot,
}

impl Section {
    /// Returns the slug used in storage and element ids.
    pub fn slug(&self) -> &'static str {
        match self {
            Section::Overview => "overview",
            Section::Scope1 => "scope1",
            Section::Scope2 => "scope2",
            Section::Scope3 => "scope3",
            Section::Targets => "targets",
            Section::Performance => "performance",
            Section::EsgKpis => "esg-kpis",
            Section::Analytics => "analytics",
            Section::DataCollection => "data-collection",
            Section::Reporting => "reporting",
            Section::Chatbot => "chatbot",
        }
    }

    /// Returns the navigation label.
    pub fn label(&self) -> &'static str {
        match self {
            Section::Overview => "Overview",
            Section::Scope1 => "Scope 1 Emissions",
            Section::Scope2 => "Scope 2 Emissions",
            Section::Scope3 => "Scope 3 Emissions",
            Section::Targets => "Targets & Goals",
            Section::Performance => "Performance",
            Section::EsgKpis => "ESG KPIs",
            Section::Analytics => "Analytics",
            Section::DataCollection => "Data Collection",
            Section::Reporting => "Reporting",
            Section::Chatbot => "Sustainability Assistant",
        }
    }

    /// Returns the navigation icon.
    pub fn icon(&self) -> &'static str {
        match self {
            Section::Overview => "📊",
            Section::Scope1 => "🏭",
            Section::Scope2 => "⚡",
            Section::Scope3 => "🚚",
            Section::Targets => "🎯",
            Section::Performance => "📈",
            Section::EsgKpis => "🌱",
            Section::Analytics => "🔍",
            Section::DataCollection => "🗂️",
            Section::Reporting => "📄",
            Section::Chatbot => "💬",
        }
    }

    /// All sections in navigation order.
    pub fn all() -> &'static [Section] {
        &[
            Section::Overview,
            Section::Scope1,
            Section::Scope2,
            Section::Scope3,
            Section::Targets,
            Section::Performance,
            Section::EsgKpis,
            Section::Analytics,
            Section::DataCollection,
            Section::Reporting,
            Section::Chatbot,
        ]
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Section {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::all()
            .iter()
            .copied()
            .find(|section| section.slug().eq_ignore_ascii_case(s))
            .ok_or_else(|| AppError::ConfigError(format!("Unknown section: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_parsing() {
        assert_eq!("scope2".parse::<Section>().unwrap(), Section::Scope2);
        assert_eq!("ESG-KPIS".parse::<Section>().unwrap(), Section::EsgKpis);
        assert!("billing".parse::<Section>().is_err());
    }

    #[test]
    fn test_slugs_are_unique() {
        let slugs: std::collections::HashSet<_> = Section::all().iter().map(|s| s.slug()).collect();
        assert_eq!(slugs.len(), Section::all().len());
    }
}
