//! Metric label constants.

/// Label carrying the fully-qualified name of the calling service.
pub const SOURCE_SERVICE_LABEL: &str = "source_service";

/// Label carrying the fully-qualified name of the called service.
pub const DESTINATION_SERVICE_LABEL: &str = "destination_service";

/// Label carrying the HTTP response code of the request.
pub const RESPONSE_CODE_LABEL: &str = "response_code";

/// Label value for traffic that originates or terminates outside the mesh.
/// Never matches any service.
pub const UNKNOWN_SERVICE: &str = "unknown";

/// Lowest response code counted as a request error (4xx and 5xx).
pub const ERROR_STATUS_THRESHOLD: u16 = 400;
