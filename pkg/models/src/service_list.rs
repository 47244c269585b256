use pkg_metrics::{MetricLabels, MetricsVector, RequestCounters, count_requests};
use pkg_types::bundle::ServiceListDetails;
use pkg_types::deployment::{Deployment as RawDeployment, selector_matches};
use pkg_types::service::Service as RawService;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::namespace::Namespace;

/// List row for a service: replica totals of the deployments it selects
/// and its request counters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceOverview {
    pub name: String,
    pub replicas: u32,
    pub available_replicas: u32,
    pub unavailable_replicas: u32,
    pub request_count: f64,
    pub request_error_count: f64,
    pub error_rate: f64,
}

impl ServiceOverview {
    /// Sum the replica counters of every deployment whose labels include
    /// the service selector. Sums saturate at `u32::MAX`.
    pub fn from_service(service: &RawService, deployments: &[RawDeployment]) -> Self {
        let mut overview = Self {
            name: service.metadata.name.clone(),
            ..Default::default()
        };
        for deployment in deployments
            .iter()
            .filter(|d| selector_matches(&service.spec.selector, d.labels()))
        {
            let status = &deployment.status;
            overview.replicas = overview.replicas.saturating_add(status.replicas);
            overview.available_replicas = overview
                .available_replicas
                .saturating_add(status.available_replicas);
            overview.unavailable_replicas = overview
                .unavailable_replicas
                .saturating_add(status.unavailable_replicas);
        }
        overview
    }

    pub fn set_request_counters(&mut self, counters: RequestCounters) {
        self.request_count = counters.request_count;
        self.request_error_count = counters.request_error_count;
        self.error_rate = counters.error_rate;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceList {
    pub namespace: Namespace,
    pub services: Vec<ServiceOverview>,
}

impl ServiceList {
    pub fn new(namespace: &str) -> Self {
        Self {
            namespace: Namespace::new(namespace),
            services: Vec::new(),
        }
    }

    /// One overview per service, in the order the services were listed.
    pub fn from_details(namespace: &str, details: &ServiceListDetails) -> Self {
        let services: Vec<ServiceOverview> = details
            .services
            .iter()
            .map(|s| ServiceOverview::from_service(s, &details.deployments))
            .collect();
        debug!(
            "Namespace {}: {} services over {} deployments",
            namespace,
            services.len(),
            details.deployments.len()
        );
        Self {
            namespace: Namespace::new(namespace),
            services,
        }
    }

    /// Fill every overview's request counters from `vector`.
    ///
    /// Counters are recomputed from scratch, so running this twice with the
    /// same vector gives the same result.
    pub fn process_request_counters(&mut self, vector: &MetricsVector, labels: &MetricLabels) {
        for overview in &mut self.services {
            let counters = count_requests(vector, &overview.name, labels);
            debug!(
                "Service {}/{}: requests={} errors={} error_rate={:.4}",
                self.namespace.name,
                overview.name,
                counters.request_count,
                counters.request_error_count,
                counters.error_rate
            );
            overview.set_request_counters(counters);
        }
    }
}
