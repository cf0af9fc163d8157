//! Course - context holding two scores and the active averaging strategy

use crate::errors::{DomainError, DomainResult};
use crate::strategies::AverageStrategy;
use crate::value_objects::{GradeOutcome, PassStatus};
use crate::Score;
use std::sync::Arc;
use tracing::{debug, warn};

/// Course graded by a swappable [`AverageStrategy`]
///
/// Average and status are cached by [`Course::compute_average`] and are not
/// refreshed when scores or the strategy change afterwards.
#[derive(Debug, Clone)]
pub struct Course {
    name: String,
    score1: Score,
    score2: Score,
    strategy: Arc<dyn AverageStrategy>,
    outcome: Option<GradeOutcome>,
}

impl Course {
    pub fn new(strategy: Arc<dyn AverageStrategy>) -> Self {
        Self {
            name: String::new(),
            score1: 0.0,
            score2: 0.0,
            strategy,
            outcome: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn scores(&self) -> (Score, Score) {
        (self.score1, self.score2)
    }

    /// Store new scores; both must be finite
    pub fn set_scores(&mut self, score1: Score, score2: Score) -> DomainResult<()> {
        for score in [score1, score2] {
            if !score.is_finite() {
                return Err(DomainError::InvalidScore(score));
            }
        }
        self.score1 = score1;
        self.score2 = score2;
        Ok(())
    }

    pub fn strategy(&self) -> &dyn AverageStrategy {
        self.strategy.as_ref()
    }

    pub fn set_strategy(&mut self, strategy: Arc<dyn AverageStrategy>) {
        debug!(
            course = %self.name,
            from = self.strategy.label(),
            to = strategy.label(),
            "course average strategy swapped"
        );
        self.strategy = strategy;
    }

    /// Recompute and cache average and status from the current scores
    ///
    /// On error the previously cached outcome is left untouched.
    pub fn compute_average(&mut self) -> DomainResult<GradeOutcome> {
        let average = self
            .strategy
            .compute_average(self.score1, self.score2)
            .inspect_err(|e| {
                warn!(
                    course = %self.name,
                    strategy = self.strategy.label(),
                    error = %e,
                    "average computation failed"
                )
            })?;
        let outcome = GradeOutcome::new(average, self.strategy.classify(average));
        debug!(
            course = %self.name,
            strategy = self.strategy.label(),
            average,
            status = %outcome.status,
            "average computed"
        );
        self.outcome = Some(outcome);
        Ok(outcome)
    }

    pub fn outcome(&self) -> Option<GradeOutcome> {
        self.outcome
    }

    pub fn average(&self) -> Option<f64> {
        self.outcome.map(|o| o.average)
    }

    pub fn status(&self) -> Option<PassStatus> {
        self.outcome.map(|o| o.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategies::{Arithmetic, Geometric};

    fn course_with(strategy: Arc<dyn AverageStrategy>, s1: f64, s2: f64) -> Course {
        let mut course = Course::new(strategy);
        course.set_name("Design Patterns");
        course.set_scores(s1, s2).unwrap();
        course
    }

    #[test]
    fn test_nothing_cached_before_compute() {
        let course = course_with(Arc::new(Arithmetic), 10.0, 5.0);
        assert_eq!(course.average(), None);
        assert_eq!(course.status(), None);
        assert_eq!(course.name(), "Design Patterns");
        assert_eq!(course.scores(), (10.0, 5.0));
    }

    #[test]
    fn test_compute_and_swap() {
        let mut course = course_with(Arc::new(Arithmetic), 10.0, 5.0);
        let outcome = course.compute_average().unwrap();
        assert_eq!(outcome.average, 7.5);
        assert_eq!(outcome.status, PassStatus::Approved);
        assert_eq!(course.outcome(), Some(outcome));

        course.set_strategy(Arc::new(Geometric));
        // Cache is stale until recomputed
        assert_eq!(course.average(), Some(7.5));

        let outcome = course.compute_average().unwrap();
        assert_eq!(outcome.average, 50f64.sqrt());
        assert_eq!(course.status(), Some(PassStatus::Approved));
    }

    #[test]
    fn test_compute_is_idempotent() {
        let mut course = course_with(Arc::new(Geometric), 10.0, 3.0);
        let first = course.compute_average().unwrap();
        let second = course.compute_average().unwrap();
        assert_eq!(first, second);
        assert_eq!(first.status, PassStatus::Failed);
    }

    #[test]
    fn test_score_change_requires_recompute() {
        let mut course = course_with(Arc::new(Arithmetic), 10.0, 5.0);
        course.compute_average().unwrap();
        course.set_scores(2.0, 4.0).unwrap();
        assert_eq!(course.average(), Some(7.5));
        course.compute_average().unwrap();
        assert_eq!(course.average(), Some(3.0));
        assert_eq!(course.status(), Some(PassStatus::Failed));
    }

    #[test]
    fn test_undefined_geometric_keeps_previous_cache() {
        let mut course = course_with(Arc::new(Arithmetic), -4.0, 9.0);
        let arithmetic = course.compute_average().unwrap();
        assert_eq!(arithmetic.average, 2.5);

        course.set_strategy(Arc::new(Geometric));
        let err = course.compute_average().unwrap_err();
        assert!(err.is_undefined_result());
        assert_eq!(course.outcome(), Some(arithmetic));
    }

    #[test]
    fn test_rejects_non_finite_scores() {
        let mut course = course_with(Arc::new(Arithmetic), 10.0, 5.0);
        assert!(matches!(
            course.set_scores(f64::NAN, 1.0),
            Err(DomainError::InvalidScore(_))
        ));
        assert_eq!(course.scores(), (10.0, 5.0));
    }
}
