//! Metrics vectors and the request-counter fold.
//!
//! ```text
//! MetricsVector (instant query result)
//!   ├── service_matches()  ← leading-segment label matching
//!   └── count_requests()   → RequestCounters per service
//! ```

pub mod counters;
pub mod matcher;
pub mod vector;

pub use counters::{MetricLabels, RequestCounters, count_requests};
pub use matcher::service_matches;
pub use vector::{MetricsVector, QueryResponse, Sample, decode_vector};
