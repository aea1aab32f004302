//! The three stateless investment calculators.
//!
//! Every function here is pure: it takes plain numbers, never panics on bad
//! input, and signals an undefined result with `None`. Turning `None` into a
//! message for the user is left to [`crate::forms`].

pub mod future_value;
pub mod performance;
pub mod roi;

pub use future_value::{estimate_future_value, project_growth, ProjectionPoint};
pub use performance::{analyze_performance, average_return, period_returns, trailing_returns};
pub use roi::compute_roi;
