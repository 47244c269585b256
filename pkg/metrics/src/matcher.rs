use pkg_constants::metrics::UNKNOWN_SERVICE;

/// Whether a `source_service`/`destination_service` label value refers to
/// `service`.
///
/// The label holds a fully-qualified name such as
/// `reviews.tutorial.svc.cluster.local`; it matches when its leading
/// dot-delimited segment equals the service name exactly. The `unknown`
/// sentinel never matches.
pub fn service_matches(label_value: &str, service: &str) -> bool {
    if service.is_empty() || label_value == UNKNOWN_SERVICE {
        return false;
    }
    let head = label_value
        .split_once('.')
        .map_or(label_value, |(head, _)| head);
    head == service
}
