use std::{fmt::Display, ops::RangeInclusive};

use serde::Serialize;
use serde_with::skip_serializing_none;
use thiserror::Error;

pub type Err = anyhow::Error;
pub type Res<T> = Result<T, Err>;
pub type Void = Res<()>;

/// Urgency attached to a concluded triage conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Emergency,
    Urgent,
    Routine,
}

/// One step of a triage conversation.
///
/// A step either asks the caller another question, or concludes with an
/// outcome.  Only a concluded step carries an urgency level and tips.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "TriageStepBody")]
pub enum TriageStep {
    Ask { question: String, tone: String },
    Conclude { outcome: String, level: Urgency, tips: Vec<String>, tone: String },
}

impl TriageStep {
    /// Whether this step ends the conversation.
    pub fn is_terminal(&self) -> bool {
        matches!(self, TriageStep::Conclude { .. })
    }

    pub fn tone(&self) -> &str {
        match self {
            TriageStep::Ask { tone, .. } | TriageStep::Conclude { tone, .. } => tone,
        }
    }
}

/// Flat wire shape of a [`TriageStep`]; absent fields are omitted.
#[skip_serializing_none]
#[derive(Serialize)]
struct TriageStepBody {
    question: Option<String>,
    outcome: Option<String>,
    level: Option<Urgency>,
    tips: Option<Vec<String>>,
    tone: String,
}

impl From<TriageStep> for TriageStepBody {
    fn from(step: TriageStep) -> Self {
        match step {
            TriageStep::Ask { question, tone } => Self {
                question: Some(question),
                outcome: None,
                level: None,
                tips: None,
                tone,
            },
            TriageStep::Conclude { outcome, level, tips, tone } => Self {
                question: None,
                outcome: Some(outcome),
                level: Some(level),
                tips: Some(tips),
                tone,
            },
        }
    }
}

/// A request field that failed boundary validation.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("`{field}` {reason}")]
pub struct InvalidInput {
    pub field: &'static str,
    pub reason: String,
}

impl InvalidInput {
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self { field, reason: reason.into() }
    }
}

/// Ensures `value` lies within the inclusive `range`.
pub fn ensure_in_range<T>(field: &'static str, value: T, range: RangeInclusive<T>) -> Result<(), InvalidInput>
where
    T: PartialOrd + Display,
{
    if range.contains(&value) {
        Ok(())
    } else {
        Err(InvalidInput::new(field, format!("must be between {} and {}, got {}", range.start(), range.end(), value)))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_ask_omits_conclusion_fields() {
        let step = TriageStep::Ask {
            question: "Waar zit het?".to_string(),
            tone: "Vriendelijk".to_string(),
        };

        assert!(!step.is_terminal());
        assert_eq!(serde_json::to_value(&step).unwrap(), json!({ "question": "Waar zit het?", "tone": "Vriendelijk" }));
    }

    #[test]
    fn test_conclude_carries_level_and_tips() {
        let step = TriageStep::Conclude {
            outcome: "Bel 112.".to_string(),
            level: Urgency::Emergency,
            tips: vec!["Blijf niet alleen".to_string()],
            tone: "Urgent".to_string(),
        };

        assert!(step.is_terminal());
        assert_eq!(step.tone(), "Urgent");
        assert_eq!(
            serde_json::to_value(&step).unwrap(),
            json!({ "outcome": "Bel 112.", "level": "emergency", "tips": ["Blijf niet alleen"], "tone": "Urgent" })
        );
    }

    #[test]
    fn test_ensure_in_range() {
        assert!(ensure_in_range("severity", 1u8, 1..=5).is_ok());
        assert!(ensure_in_range("severity", 5u8, 1..=5).is_ok());

        let err = ensure_in_range("severity", 6u8, 1..=5).unwrap_err();
        assert_eq!(err.field, "severity");
        assert_eq!(err.to_string(), "`severity` must be between 1 and 5, got 6");
    }
}
