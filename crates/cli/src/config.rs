use anyhow::{Context, Result};
use domain::{AverageKind, DiscountKind};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Inputs for both demos; `Default` is the built-in demo
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub cart: CartDemoConfig,
    pub course: CourseDemoConfig,
}

/// Cart demo: one amount priced under each listed policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CartDemoConfig {
    pub amount: f64,
    pub policies: Vec<DiscountKind>,
}

impl Default for CartDemoConfig {
    fn default() -> Self {
        Self {
            amount: 1000.0,
            policies: DiscountKind::all(),
        }
    }
}

/// Course demo: one pair of scores averaged by each listed strategy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CourseDemoConfig {
    pub name: String,
    pub scores: [f64; 2],
    pub strategies: Vec<AverageKind>,
}

impl Default for CourseDemoConfig {
    fn default() -> Self {
        Self {
            name: "Design Patterns".to_string(),
            scores: [10.0, 5.0],
            strategies: AverageKind::all(),
        }
    }
}

impl DemoConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml_str(&raw).with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn from_toml_str(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }
}
