//! Averaging strategies - interchangeable grade formulas for a course
//!
//! A strategy owns both its formula and its pass threshold; the two are
//! never configured separately.

use crate::errors::{DomainError, DomainResult};
use crate::value_objects::PassStatus;
use crate::Score;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Formula turning two scores into an average, plus its pass rule
pub trait AverageStrategy: fmt::Debug + Send + Sync {
    /// Average of the two scores
    fn compute_average(&self, score1: Score, score2: Score) -> DomainResult<f64>;

    /// Inclusive minimum average that passes
    fn pass_threshold(&self) -> f64;

    /// Human-readable name shown in reports
    fn label(&self) -> &'static str;

    /// Verdict for an average computed by this strategy
    fn classify(&self, average: f64) -> PassStatus {
        PassStatus::from_threshold(average, self.pass_threshold())
    }
}

fn ensure_finite(score1: Score, score2: Score) -> DomainResult<()> {
    for score in [score1, score2] {
        if !score.is_finite() {
            return Err(DomainError::InvalidScore(score));
        }
    }
    Ok(())
}

fn ensure_finite_average(average: f64, score1: Score, score2: Score) -> DomainResult<f64> {
    if !average.is_finite() {
        return Err(DomainError::NonFiniteAverage { score1, score2 });
    }
    Ok(average)
}

/// Simple mean; passes at 5
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Arithmetic;

impl AverageStrategy for Arithmetic {
    fn compute_average(&self, score1: Score, score2: Score) -> DomainResult<f64> {
        ensure_finite(score1, score2)?;
        ensure_finite_average((score1 + score2) / 2.0, score1, score2)
    }

    fn pass_threshold(&self) -> f64 {
        5.0
    }

    fn label(&self) -> &'static str {
        "Arithmetic Mean"
    }
}

/// Square root of the product; passes at 7
///
/// Undefined when the scores have opposite signs. The sign test runs on the
/// operands, since their floating-point product can underflow to `-0.0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Geometric;

impl AverageStrategy for Geometric {
    fn compute_average(&self, score1: Score, score2: Score) -> DomainResult<f64> {
        ensure_finite(score1, score2)?;
        if (score1 < 0.0 && score2 > 0.0) || (score1 > 0.0 && score2 < 0.0) {
            return Err(DomainError::UndefinedGeometricAverage { score1, score2 });
        }
        // abs: a zero score times a negative one gives -0.0
        ensure_finite_average((score1 * score2).abs().sqrt(), score1, score2)
    }

    fn pass_threshold(&self) -> f64 {
        7.0
    }

    fn label(&self) -> &'static str {
        "Geometric Mean"
    }
}

/// Names of the available averaging strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AverageKind {
    #[default]
    #[serde(alias = "aritmetica")]
    Arithmetic,
    #[serde(alias = "geometrica")]
    Geometric,
}

impl AverageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AverageKind::Arithmetic => "arithmetic",
            AverageKind::Geometric => "geometric",
        }
    }

    /// Parse from string representation
    pub fn parse_str(s: &str) -> DomainResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "arithmetic" | "aritmetica" => Ok(AverageKind::Arithmetic),
            "geometric" | "geometrica" => Ok(AverageKind::Geometric),
            _ => Err(DomainError::UnknownAverageStrategy(s.to_string())),
        }
    }

    /// All strategies in demo order
    pub fn all() -> Vec<AverageKind> {
        vec![AverageKind::Arithmetic, AverageKind::Geometric]
    }

    /// Shareable handle to the strategy this kind names
    pub fn strategy(&self) -> Arc<dyn AverageStrategy> {
        match self {
            AverageKind::Arithmetic => Arc::new(Arithmetic),
            AverageKind::Geometric => Arc::new(Geometric),
        }
    }
}

impl FromStr for AverageKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl fmt::Display for AverageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
