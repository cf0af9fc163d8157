//! Discount policies - interchangeable pricing rules for a cart
//!
//! Each policy is a stateless unit struct. `DiscountKind` names the closed
//! set of policies so callers can select one from a string.

use crate::errors::{DomainError, DomainResult};
use crate::Amount;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Pricing rule applied to a cart's original amount
///
/// Implementations must never return more than `amount` for a
/// non-negative input.
pub trait DiscountPolicy: fmt::Debug + Send + Sync {
    /// Discounted value of `amount`
    fn apply(&self, amount: Amount) -> Amount;

    /// Human-readable description shown in summaries
    fn label(&self) -> &'static str;

    /// Fraction taken off the original amount
    fn discount_rate(&self) -> f64;
}

/// 5% off for returning customers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegularCustomer;

impl DiscountPolicy for RegularCustomer {
    fn apply(&self, amount: Amount) -> Amount {
        amount * 0.95
    }

    fn label(&self) -> &'static str {
        "Regular Customer Discount (5%)"
    }

    fn discount_rate(&self) -> f64 {
        0.05
    }
}

/// 15% off for VIP customers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VipCustomer;

impl DiscountPolicy for VipCustomer {
    fn apply(&self, amount: Amount) -> Amount {
        amount * 0.85
    }

    fn label(&self) -> &'static str {
        "VIP Customer Discount (15%)"
    }

    fn discount_rate(&self) -> f64 {
        0.15
    }
}

/// 25% off during a promotion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Promotional;

impl DiscountPolicy for Promotional {
    fn apply(&self, amount: Amount) -> Amount {
        amount * 0.75
    }

    fn label(&self) -> &'static str {
        "Promotional Discount (25%)"
    }

    fn discount_rate(&self) -> f64 {
        0.25
    }
}

/// Full price; the cart's default policy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoDiscount;

impl DiscountPolicy for NoDiscount {
    fn apply(&self, amount: Amount) -> Amount {
        amount
    }

    fn label(&self) -> &'static str {
        "No Discount (0%)"
    }

    fn discount_rate(&self) -> f64 {
        0.0
    }
}

/// Names of the available discount policies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DiscountKind {
    Regular,
    Vip,
    #[serde(alias = "promo")]
    Promotional,
    #[default]
    #[serde(alias = "none")]
    NoDiscount,
}

impl DiscountKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiscountKind::Regular => "regular",
            DiscountKind::Vip => "vip",
            DiscountKind::Promotional => "promotional",
            DiscountKind::NoDiscount => "no-discount",
        }
    }

    /// Title of the demo scenario that uses this policy
    pub fn scenario_title(&self) -> &'static str {
        match self {
            DiscountKind::Regular => "Regular Customer",
            DiscountKind::Vip => "VIP Customer",
            DiscountKind::Promotional => "Special Promotion",
            DiscountKind::NoDiscount => "No Discount",
        }
    }

    /// Parse from string representation
    pub fn parse_str(s: &str) -> DomainResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "regular" => Ok(DiscountKind::Regular),
            "vip" => Ok(DiscountKind::Vip),
            "promotional" | "promo" => Ok(DiscountKind::Promotional),
            "no-discount" | "none" => Ok(DiscountKind::NoDiscount),
            _ => Err(DomainError::UnknownDiscountPolicy(s.to_string())),
        }
    }

    /// All policies in demo order
    pub fn all() -> Vec<DiscountKind> {
        vec![
            DiscountKind::Regular,
            DiscountKind::Vip,
            DiscountKind::Promotional,
            DiscountKind::NoDiscount,
        ]
    }

    /// Shareable handle to the policy this kind names
    pub fn policy(&self) -> Arc<dyn DiscountPolicy> {
        match self {
            DiscountKind::Regular => Arc::new(RegularCustomer),
            DiscountKind::Vip => Arc::new(VipCustomer),
            DiscountKind::Promotional => Arc::new(Promotional),
            DiscountKind::NoDiscount => Arc::new(NoDiscount),
        }
    }
}

impl FromStr for DiscountKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl fmt::Display for DiscountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(DiscountKind::Regular, 950.0, "Regular Customer Discount (5%)")]
    #[case(DiscountKind::Vip, 850.0, "VIP Customer Discount (15%)")]
    #[case(DiscountKind::Promotional, 750.0, "Promotional Discount (25%)")]
    #[case(DiscountKind::NoDiscount, 1000.0, "No Discount (0%)")]
    fn test_policy_on_thousand(
        #[case] kind: DiscountKind,
        #[case] expected: f64,
        #[case] label: &str,
    ) {
        let policy = kind.policy();
        assert_eq!(policy.apply(1000.0), expected);
        assert_eq!(policy.label(), label);
    }

    #[rstest]
    #[case(RegularCustomer.discount_rate(), 0.05)]
    #[case(VipCustomer.discount_rate(), 0.15)]
    #[case(Promotional.discount_rate(), 0.25)]
    #[case(NoDiscount.discount_rate(), 0.0)]
    fn test_discount_rates(#[case] rate: f64, #[case] expected: f64) {
        assert_eq!(rate, expected);
    }

    #[test]
    fn test_zero_amount_stays_zero() {
        for kind in DiscountKind::all() {
            assert_eq!(kind.policy().apply(0.0), 0.0);
        }
    }

    #[test]
    fn test_parse_round_trip() {
        for kind in DiscountKind::all() {
            assert_eq!(DiscountKind::parse_str(kind.as_str()).unwrap(), kind);
        }
        assert_eq!(DiscountKind::parse_str("VIP").unwrap(), DiscountKind::Vip);
        assert_eq!(DiscountKind::parse_str("promo").unwrap(), DiscountKind::Promotional);
        assert_eq!("none".parse::<DiscountKind>().unwrap(), DiscountKind::NoDiscount);
    }

    #[test]
    fn test_parse_unknown_rejected() {
        let err = DiscountKind::parse_str("gold").unwrap_err();
        assert_eq!(err, DomainError::UnknownDiscountPolicy("gold".to_string()));
        assert!(err.is_validation_error());
    }

    #[test]
    fn test_demo_order() {
        let kinds = DiscountKind::all();
        assert_eq!(kinds.len(), 4);
        assert_eq!(kinds[0], DiscountKind::Regular);
        assert_eq!(kinds[3], DiscountKind::NoDiscount);
    }

    #[test]
    fn test_serde_names() {
        let kinds: Vec<DiscountKind> =
            serde_json::from_str(r#"["regular", "vip", "promo", "none", "no-discount"]"#).unwrap();
        assert_eq!(
            kinds,
            vec![
                DiscountKind::Regular,
                DiscountKind::Vip,
                DiscountKind::Promotional,
                DiscountKind::NoDiscount,
                DiscountKind::NoDiscount,
            ]
        );
    }
}
