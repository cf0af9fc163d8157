use domain::{
    AverageKind, Cart, CartSummary, Course, DiscountKind, DomainResult, GradeOutcome, PassStatus,
};
use serde::Serialize;
use tracing::{info, warn};

use crate::config::{CartDemoConfig, CourseDemoConfig};

/// One cart priced under one policy
#[derive(Debug, Clone, Serialize)]
pub struct CartScenario {
    pub scenario: usize,
    pub policy: DiscountKind,
    #[serde(flatten)]
    pub summary: CartSummary,
}

/// One course averaged by one strategy
///
/// `outcome` is empty and `error` set when the strategy has no result for
/// the course's scores.
#[derive(Debug, Clone, Serialize)]
pub struct CourseScenario {
    pub scenario: usize,
    pub strategy: AverageKind,
    pub strategy_label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PassStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CourseScenario {
    pub fn outcome(&self) -> Option<GradeOutcome> {
        match (self.average, self.status) {
            (Some(average), Some(status)) => Some(GradeOutcome::new(average, status)),
            _ => None,
        }
    }
}

/// Price one cart under every configured policy, swapping in place
pub fn run_cart_demo(config: &CartDemoConfig) -> DomainResult<Vec<CartScenario>> {
    let mut cart = Cart::new(config.amount)?;
    info!(amount = config.amount, scenarios = config.policies.len(), "cart demo started");

    Ok(config
        .policies
        .iter()
        .enumerate()
        .map(|(i, kind)| {
            cart.set_policy(kind.policy());
            CartScenario {
                scenario: i + 1,
                policy: *kind,
                summary: cart.summary(),
            }
        })
        .collect())
}

/// Average one course under every configured strategy
///
/// A strategy with no result for the scores fails only its own scenario.
pub fn run_course_demo(config: &CourseDemoConfig) -> DomainResult<(Course, Vec<CourseScenario>)> {
    let strategies = &config.strategies;
    let first = strategies.first().copied().unwrap_or_default();

    let mut course = Course::new(first.strategy());
    course.set_name(config.name.as_str());
    course.set_scores(config.scores[0], config.scores[1])?;
    info!(course = %config.name, scenarios = strategies.len(), "course demo started");

    let mut scenarios = Vec::with_capacity(strategies.len());
    for (i, kind) in strategies.iter().enumerate() {
        course.set_strategy(kind.strategy());
        let mut scenario = CourseScenario {
            scenario: i + 1,
            strategy: *kind,
            strategy_label: course.strategy().label(),
            average: None,
            status: None,
            error: None,
        };
        match course.compute_average() {
            Ok(outcome) => {
                scenario.average = Some(outcome.average);
                scenario.status = Some(outcome.status);
            }
            Err(e) => {
                warn!(strategy = %kind, error = %e, "scenario skipped");
                scenario.error = Some(e.to_string());
            }
        }
        scenarios.push(scenario);
    }

    Ok((course, scenarios))
}
