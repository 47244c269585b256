use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::meta::ObjectMeta;

// --- Deployment status ---

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentStatus {
    #[serde(default)]
    pub replicas: u32,
    #[serde(default)]
    pub available_replicas: u32,
    #[serde(default)]
    pub unavailable_replicas: u32,
    #[serde(default)]
    pub observed_generation: u64,
}

// --- Deployment spec ---

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeploymentSpec {
    #[serde(default)]
    pub replicas: u32,
}

// --- Deployment ---

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Deployment {
    #[serde(default)]
    pub metadata: ObjectMeta,
    #[serde(default)]
    pub spec: DeploymentSpec,
    #[serde(default)]
    pub status: DeploymentStatus,
}

impl Deployment {
    pub fn labels(&self) -> &HashMap<String, String> {
        &self.metadata.labels
    }
}

/// True when every key/value of `selector` is present in `labels`.
///
/// An empty selector is a subset of any label set and therefore matches.
pub fn selector_matches(
    selector: &HashMap<String, String>,
    labels: &HashMap<String, String>,
) -> bool {
    selector.iter().all(|(k, v)| labels.get(k) == Some(v))
}
