// Operations module - Derived metrics, prediction lookup and registration

pub mod metrics;
pub mod prediction;
pub mod volunteer;

pub use metrics::*;
pub use prediction::*;
pub use volunteer::*;
