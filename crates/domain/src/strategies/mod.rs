//! Strategy families swapped at runtime by the contexts
//!
//! - Discount policies (Cart)
//! - Averaging formulas (Course)

pub mod average;
pub mod discount;

pub use average::{Arithmetic, AverageKind, AverageStrategy, Geometric};
pub use discount::{DiscountKind, DiscountPolicy, NoDiscount, Promotional, RegularCustomer, VipCustomer};
