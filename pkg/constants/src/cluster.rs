//! Cluster object constants.

/// Namespace used when neither the CLI nor the config file names one.
pub const DEFAULT_NAMESPACE: &str = "default";

/// Maximum length of a resource name.
pub const MAX_NAME_LEN: usize = 63;
