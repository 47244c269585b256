use pkg_constants::metrics::{
    DESTINATION_SERVICE_LABEL, ERROR_STATUS_THRESHOLD, RESPONSE_CODE_LABEL, SOURCE_SERVICE_LABEL,
};
use tracing::trace;

use crate::matcher::service_matches;
use crate::vector::{MetricsVector, Sample};

/// Names of the labels the request-counter fold reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricLabels {
    pub source: String,
    pub destination: String,
    pub response_code: String,
    /// Lowest response code counted as an error.
    pub error_status_threshold: u16,
}

impl Default for MetricLabels {
    fn default() -> Self {
        Self {
            source: SOURCE_SERVICE_LABEL.to_string(),
            destination: DESTINATION_SERVICE_LABEL.to_string(),
            response_code: RESPONSE_CODE_LABEL.to_string(),
            error_status_threshold: ERROR_STATUS_THRESHOLD,
        }
    }
}

/// Request totals for one service.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RequestCounters {
    pub request_count: f64,
    pub request_error_count: f64,
    /// `request_error_count / request_count`, or 0 when there were no requests.
    pub error_rate: f64,
}

impl RequestCounters {
    pub fn new(request_count: f64, request_error_count: f64) -> Self {
        let error_rate = if request_count > 0.0 {
            request_error_count / request_count
        } else {
            0.0
        };
        Self {
            request_count,
            request_error_count,
            error_rate,
        }
    }
}

/// Fields of a sample the fold needs; `None` when any label is missing.
struct Traffic<'a> {
    source: &'a str,
    destination: &'a str,
    response_code: &'a str,
}

impl<'a> Traffic<'a> {
    fn of(sample: &'a Sample, labels: &MetricLabels) -> Option<Self> {
        Some(Self {
            source: sample.label(&labels.source)?,
            destination: sample.label(&labels.destination)?,
            response_code: sample.label(&labels.response_code)?,
        })
    }

    fn touches(&self, service: &str) -> bool {
        service_matches(self.source, service) || service_matches(self.destination, service)
    }

    fn is_error(&self, threshold: u16) -> bool {
        self.response_code
            .trim()
            .parse::<u16>()
            .is_ok_and(|code| code >= threshold)
    }
}

/// Sum the samples where `service` is the caller or the callee.
///
/// A sample counts once even when the service is on both sides. Samples
/// missing any of the three labels are skipped.
pub fn count_requests(
    vector: &MetricsVector,
    service: &str,
    labels: &MetricLabels,
) -> RequestCounters {
    let mut requests = 0.0;
    let mut errors = 0.0;

    for sample in vector {
        let Some(traffic) = Traffic::of(sample, labels) else {
            trace!("Skipping sample without traffic labels: {:?}", sample.metric);
            continue;
        };
        if !traffic.touches(service) {
            continue;
        }
        requests += sample.value;
        if traffic.is_error(labels.error_status_threshold) {
            errors += sample.value;
        }
    }

    RequestCounters::new(requests, errors)
}
