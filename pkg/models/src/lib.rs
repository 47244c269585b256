//! View models served to the UI and the builders that produce them.
//!
//! ```text
//! ServiceDetails + MeshDetails + dependencies ─→ Service::with_details()     → Service
//! ServiceListDetails                          ─→ ServiceList::from_details() → ServiceList
//! ServiceList + MetricsVector                 ─→ process_request_counters()  → ServiceList'
//! ```
//!
//! Every builder is a pure function of its arguments; nothing is cached
//! between calls.

pub mod deployment;
pub mod mesh;
pub mod namespace;
pub mod service;
pub mod service_list;

pub use deployment::{Autoscaler, Deployment};
pub use mesh::{DestinationPolicy, RouteRule};
pub use namespace::Namespace;
pub use service::{Address, Dependencies, Endpoint, Port, Service};
pub use service_list::{ServiceList, ServiceOverview};
