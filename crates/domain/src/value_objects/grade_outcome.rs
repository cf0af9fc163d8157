//! GradeOutcome - cached result of a course's average computation

use crate::value_objects::PassStatus;
use serde::{Deserialize, Serialize};

/// Average and verdict computed together by one strategy
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradeOutcome {
    pub average: f64,
    pub status: PassStatus,
}

impl GradeOutcome {
    pub fn new(average: f64, status: PassStatus) -> Self {
        Self { average, status }
    }
}
