use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
    pub sent_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
            sent_at: Utc::now(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            text: text.into(),
            sent_at: Utc::now(),
        }
    }
}

pub const GREETING: &str = "Hi! I can explain your emissions scopes, targets and reporting. What would you like to know?";

const FALLBACK: &str = "I don't have an answer for that yet. Try asking about Scope 1, 2 or 3 emissions, targets, SBTi or reporting.";

// First matching keyword set wins, so more specific topics come first.
const TOPICS: &[(&[&str], &str)] = &[
    (
        &["scope 1", "scope1", "direct"],
        "Scope 1 covers direct emissions from sources you own or control, such as boilers, generators and company vehicles.",
    ),
    (
        &["scope 2", "scope2", "electricity", "energy"],
        "Scope 2 covers indirect emissions from purchased electricity, steam, heating and cooling.",
    ),
    (
        &["scope 3", "scope3", "supply chain", "value chain"],
        "Scope 3 covers all other indirect emissions across your value chain, from purchased goods to business travel and product end of life.",
    ),
    (
        &["sbti", "science based"],
        "The Science Based Targets initiative validates reduction targets against what climate science says is needed to limit warming to 1.5°C.",
    ),
    (
        &["target", "goal", "net zero"],
        "Your targets section tracks progress against each reduction goal. Custom targets compare the current value with baseline and target values.",
    ),
    (
        &["report", "gri", "cdp", "tcfd", "csrd"],
        "The reporting section lists framework reports (GRI, CDP, TCFD, CSRD) and lets you generate drafts from the latest data.",
    ),
    (
        &["tco2e", "co2e", "unit"],
        "tCO₂e means tonnes of carbon dioxide equivalent: other greenhouse gases are converted to the CO₂ amount with the same warming effect.",
    ),
    (
        &["hello", "hi", "hey"],
        GREETING,
    ),
];

/// Picks a canned answer by keyword.
pub fn reply_to(input: &str) -> &'static str {
    let normalized = input.to_lowercase();
    let words: Vec<&str> = normalized
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect();

    TOPICS
        .iter()
        .find(|(keywords, _)| {
            keywords.iter().any(|keyword| {
                if keyword.contains(' ') {
                    normalized.contains(keyword)
                } else {
                    words.contains(keyword)
                }
            })
        })
        .map(|(_, answer)| *answer)
        .unwrap_or(FALLBACK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_by_keyword() {
        assert!(reply_to("What is Scope 2?").starts_with("Scope 2"));
        assert!(reply_to("explain SBTi please").contains("Science Based Targets"));
        assert!(reply_to("how do I export a CDP report").contains("reporting section"));
    }

    #[test]
    fn test_single_words_match_whole_words_only() {
        // "this" contains "hi" but is not a greeting
        assert_eq!(reply_to("this"), FALLBACK);
        assert_eq!(reply_to("hi"), GREETING);
    }
}
