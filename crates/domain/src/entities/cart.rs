//! Cart - context holding an original amount and the active discount policy

use crate::errors::{DomainError, DomainResult};
use crate::strategies::{DiscountPolicy, NoDiscount};
use crate::Amount;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

/// Shopping cart priced by a swappable [`DiscountPolicy`]
///
/// The original amount is fixed at construction. Final price and savings
/// are always derived from the policy active at call time.
#[derive(Debug, Clone)]
pub struct Cart {
    original_amount: Amount,
    policy: Arc<dyn DiscountPolicy>,
}

impl Cart {
    /// Create a cart priced at full price ([`NoDiscount`])
    pub fn new(original_amount: Amount) -> DomainResult<Self> {
        Self::with_policy(original_amount, Arc::new(NoDiscount))
    }

    /// Create a cart with an initial policy
    pub fn with_policy(
        original_amount: Amount,
        policy: Arc<dyn DiscountPolicy>,
    ) -> DomainResult<Self> {
        if !original_amount.is_finite() || original_amount < 0.0 {
            return Err(DomainError::InvalidAmount(original_amount));
        }
        Ok(Self {
            original_amount,
            policy,
        })
    }

    pub fn original_amount(&self) -> Amount {
        self.original_amount
    }

    pub fn policy(&self) -> &dyn DiscountPolicy {
        self.policy.as_ref()
    }

    /// Replace the active policy; applies to every later computation
    pub fn set_policy(&mut self, policy: Arc<dyn DiscountPolicy>) {
        debug!(
            from = self.policy.label(),
            to = policy.label(),
            "cart discount policy swapped"
        );
        self.policy = policy;
    }

    pub fn final_price(&self) -> Amount {
        let price = self.policy.apply(self.original_amount);
        trace!(original = self.original_amount, price, policy = self.policy.label(), "final price");
        price
    }

    pub fn savings(&self) -> Amount {
        self.original_amount - self.final_price()
    }

    /// Snapshot of the cart under its current policy
    pub fn summary(&self) -> CartSummary {
        let final_price = self.final_price();
        CartSummary {
            original_amount: self.original_amount,
            policy_label: self.policy.label().to_string(),
            final_price,
            savings: self.original_amount - final_price,
        }
    }
}

/// Pricing report for one cart/policy pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartSummary {
    pub original_amount: Amount,
    pub policy_label: String,
    pub final_price: Amount,
    pub savings: Amount,
}

impl fmt::Display for CartSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== CART SUMMARY ===")?;
        writeln!(f, "Original Amount: R$ {:.2}", self.original_amount)?;
        writeln!(f, "Policy: {}", self.policy_label)?;
        writeln!(f, "Final Price: R$ {:.2}", self.final_price)?;
        writeln!(f, "Savings: R$ {:.2}", self.savings)?;
        write!(f, "====================")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategies::{DiscountKind, Promotional, RegularCustomer, VipCustomer};

    #[test]
    fn test_defaults_to_no_discount() {
        let cart = Cart::new(1000.0).unwrap();
        assert_eq!(cart.policy().label(), "No Discount (0%)");
        assert_eq!(cart.final_price(), 1000.0);
        assert_eq!(cart.savings(), 0.0);
    }

    #[test]
    fn test_rejects_invalid_amounts() {
        assert_eq!(Cart::new(-0.01).unwrap_err(), DomainError::InvalidAmount(-0.01));
        assert!(matches!(Cart::new(f64::NAN), Err(DomainError::InvalidAmount(_))));
        assert!(matches!(Cart::new(f64::INFINITY), Err(DomainError::InvalidAmount(_))));
        assert!(Cart::new(0.0).is_ok());
    }

    #[test]
    fn test_savings_is_exact_difference() {
        let mut cart = Cart::new(1234.56).unwrap();
        for kind in DiscountKind::all() {
            cart.set_policy(kind.policy());
            assert_eq!(cart.savings(), cart.original_amount() - cart.final_price());
            let summary = cart.summary();
            assert_eq!(summary.savings, summary.original_amount - summary.final_price);
        }
    }

    #[test]
    fn test_only_latest_policy_counts() {
        let mut cart = Cart::new(1000.0).unwrap();
        cart.set_policy(Arc::new(VipCustomer));
        cart.set_policy(Arc::new(Promotional));
        cart.set_policy(Arc::new(RegularCustomer));
        assert_eq!(cart.final_price(), 950.0);

        cart.set_policy(Arc::new(NoDiscount));
        assert_eq!(cart.final_price(), 1000.0);
    }

    #[test]
    fn test_policy_shared_between_carts() {
        let vip: Arc<dyn DiscountPolicy> = Arc::new(VipCustomer);
        let a = Cart::with_policy(100.0, Arc::clone(&vip)).unwrap();
        let b = Cart::with_policy(200.0, Arc::clone(&vip)).unwrap();
        assert_eq!(a.final_price(), 85.0);
        assert_eq!(b.final_price(), 170.0);
    }

    #[test]
    fn test_summary_rendering() {
        let mut cart = Cart::new(1000.0).unwrap();
        cart.set_policy(Arc::new(RegularCustomer));
        let rendered = cart.summary().to_string();
        assert!(rendered.contains("Original Amount: R$ 1000.00"));
        assert!(rendered.contains("Policy: Regular Customer Discount (5%)"));
        assert!(rendered.contains("Final Price: R$ 950.00"));
        assert!(rendered.contains("Savings: R$ 50.00"));
    }
}
