//! Filesystem path constants.

/// Default config file path for the meshlens CLI.
pub const DEFAULT_CONFIG: &str = "/etc/meshlens/config.yaml";
