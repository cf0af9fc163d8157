//! Demo drivers for the cart-discount and course-grade strategies
//!
//! Both binaries share the same shape: parse flags, initialise logging,
//! resolve the demo config, run every scenario, print a report.

pub mod args;
pub mod config;
pub mod demos;
pub mod report;

pub use args::CommonArgs;
pub use config::{CartDemoConfig, CourseDemoConfig, DemoConfig};
pub use demos::{run_cart_demo, run_course_demo, CartScenario, CourseScenario};
