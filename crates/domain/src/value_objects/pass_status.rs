//! PassStatus - pass/fail verdict for a computed average

use serde::{Deserialize, Serialize};
use std::fmt;

/// Verdict produced by an averaging strategy's threshold
///
/// Rendered with the course's labels: "Aprovado" / "Reprovado".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PassStatus {
    /// Average reached the strategy's threshold
    #[serde(rename = "Aprovado")]
    Approved,
    /// Average fell short of the threshold
    #[serde(rename = "Reprovado")]
    Failed,
}

impl PassStatus {
    /// Classify `average` against an inclusive `threshold`
    pub fn from_threshold(average: f64, threshold: f64) -> Self {
        if average >= threshold {
            PassStatus::Approved
        } else {
            PassStatus::Failed
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PassStatus::Approved => "Aprovado",
            PassStatus::Failed => "Reprovado",
        }
    }

    pub fn is_approved(&self) -> bool {
        matches!(self, PassStatus::Approved)
    }
}

impl fmt::Display for PassStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_inclusive() {
        assert_eq!(PassStatus::from_threshold(5.0, 5.0), PassStatus::Approved);
        assert_eq!(PassStatus::from_threshold(4.99, 5.0), PassStatus::Failed);
        assert_eq!(PassStatus::from_threshold(7.0, 7.0), PassStatus::Approved);
    }

    #[test]
    fn test_labels() {
        assert_eq!(PassStatus::Approved.to_string(), "Aprovado");
        assert_eq!(PassStatus::Failed.to_string(), "Reprovado");
        assert!(PassStatus::Approved.is_approved());
        assert!(!PassStatus::Failed.is_approved());
    }

    #[test]
    fn test_serializes_as_label() {
        let json = serde_json::to_string(&PassStatus::Failed).unwrap();
        assert_eq!(json, "\"Reprovado\"");
    }
}
