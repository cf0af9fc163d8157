//! Domain Layer - strategy-driven pricing and grading
//!
//! Contains ONLY pure computation, no I/O:
//! - Strategies: interchangeable discount policies and averaging formulas
//! - Entities: the contexts (Cart, Course) that hold and swap a strategy
//! - Value Objects: small immutable results (PassStatus, GradeOutcome)
//!
//! Every strategy variant is stateless, so one instance can be shared by
//! any number of contexts through an `Arc`.

pub mod entities;
pub mod errors;
pub mod strategies;
pub mod value_objects;

// Re-export core domain types
pub use entities::{Cart, CartSummary, Course};
pub use errors::{DomainError, DomainResult, ErrorCategory};
pub use strategies::{
    Arithmetic, AverageKind, AverageStrategy, DiscountKind, DiscountPolicy, Geometric, NoDiscount,
    Promotional, RegularCustomer, VipCustomer,
};
pub use value_objects::{GradeOutcome, PassStatus};

/// Monetary amount in the cart's currency
pub type Amount = f64;
/// Single course score
pub type Score = f64;
