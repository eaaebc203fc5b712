/// Direction of a metric's change relative to the previous period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeType {
    Increase,
    Decrease,
    Neutral,
}

impl ChangeType {
    /// Returns CSS class name for color coding.
    ///
    /// For emissions a decrease is the good direction, so it maps to the
    /// positive style.
    pub fn css_class(&self) -> &'static str {
        match self {
            ChangeType::Increase => "change-negative",
            ChangeType::Decrease => "change-positive",
            ChangeType::Neutral => "change-neutral",
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            ChangeType::Increase => "↑",
            ChangeType::Decrease => "↓",
            ChangeType::Neutral => "→",
        }
    }

    /// Classifies a signed delta.
    pub fn from_delta(delta: f64) -> Self {
        if delta > 0.0 {
            ChangeType::Increase
        } else if delta < 0.0 {
            ChangeType::Decrease
        } else {
            ChangeType::Neutral
        }
    }
}

/// Optional visual below a card's value.
#[derive(Debug, Clone, PartialEq)]
pub enum CardAccent {
    /// Progress bar, 0-100.
    Progress(f64),
    /// Sparkline samples.
    Trend(Vec<f64>),
}

/// Display record for a dashboard metric card.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricCard {
    pub title: String,
    pub value: String,
    pub change: String,
    pub change_type: ChangeType,
    pub subtitle: String,
    pub icon: &'static str,
    pub accent: Option<CardAccent>,
}

impl MetricCard {
    pub fn new(
        title: impl Into<String>,
        value: impl Into<String>,
        change: impl Into<String>,
        change_type: ChangeType,
    ) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            change: change.into(),
            change_type,
            subtitle: String::new(),
            icon: "📊",
            accent: None,
        }
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    pub fn icon(mut self, icon: &'static str) -> Self {
        self.icon = icon;
        self
    }

    pub fn progress(mut self, percent: f64) -> Self {
        self.accent = Some(CardAccent::Progress(percent));
        self
    }

    pub fn trend(mut self, samples: Vec<f64>) -> Self {
        self.accent = Some(CardAccent::Trend(samples));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_change_type_from_delta() {
        assert_eq!(ChangeType::from_delta(3.2), ChangeType::Increase);
        assert_eq!(ChangeType::from_delta(-0.1), ChangeType::Decrease);
        assert_eq!(ChangeType::from_delta(0.0), ChangeType::Neutral);
    }

    #[test]
    fn test_card_builder_sets_accent() {
        let card = MetricCard::new("Total", "12,450 tCO₂e", "-8.2%", ChangeType::Decrease)
            .subtitle("vs last year")
            .progress(64.0);
        assert_eq!(card.subtitle, "vs last year");
        assert_eq!(card.accent, Some(CardAccent::Progress(64.0)));
    }
}
