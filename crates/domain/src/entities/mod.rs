//! Domain Entities - contexts that delegate to a swappable strategy

pub mod cart;
pub mod course;

pub use cart::{Cart, CartSummary};
pub use course::Course;
