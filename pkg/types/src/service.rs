use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::meta::ObjectMeta;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceType {
    #[default]
    ClusterIP,
    NodePort,
    LoadBalancer,
    ExternalName,
}

impl std::fmt::Display for ServiceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceType::ClusterIP => write!(f, "ClusterIP"),
            ServiceType::NodePort => write!(f, "NodePort"),
            ServiceType::LoadBalancer => write!(f, "LoadBalancer"),
            ServiceType::ExternalName => write!(f, "ExternalName"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServicePort {
    #[serde(default)]
    pub name: String,
    #[serde(default = "default_protocol")]
    pub protocol: String,
    pub port: u16,
}

pub(crate) fn default_protocol() -> String {
    "TCP".to_string()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceSpec {
    #[serde(default, rename = "type")]
    pub service_type: ServiceType,
    #[serde(default, rename = "clusterIP")]
    pub cluster_ip: String,
    /// Label selector for matching the pods (and deployments) behind the service
    #[serde(default)]
    pub selector: HashMap<String, String>,
    #[serde(default)]
    pub ports: Vec<ServicePort>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Service {
    #[serde(default)]
    pub metadata: ObjectMeta,
    #[serde(default)]
    pub spec: ServiceSpec,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_orchestrator_shape() {
        let svc: Service = serde_json::from_str(
            r#"{
                "metadata": {"name": "reviews", "namespace": "tutorial",
                             "labels": {"app": "reviews"},
                             "creationTimestamp": "2018-03-08T17:44:00+03:00"},
                "spec": {"type": "NodePort", "clusterIP": "10.0.0.12",
                         "selector": {"app": "reviews"},
                         "ports": [{"name": "http", "port": 9080}]}
            }"#,
        )
        .unwrap();

        assert_eq!(svc.metadata.name, "reviews");
        assert_eq!(svc.metadata.creation_timestamp, "2018-03-08T17:44:00+03:00");
        assert_eq!(svc.spec.service_type, ServiceType::NodePort);
        assert_eq!(svc.spec.cluster_ip, "10.0.0.12");
        assert_eq!(svc.spec.ports[0].protocol, "TCP");
        assert_eq!(svc.spec.ports[0].port, 9080);
    }

    #[test]
    fn missing_spec_defaults_to_cluster_ip() {
        let svc: Service = serde_json::from_str(r#"{"metadata": {"name": "bare"}}"#).unwrap();
        assert_eq!(svc.spec.service_type.to_string(), "ClusterIP");
        assert!(svc.spec.ports.is_empty());
        assert!(svc.spec.selector.is_empty());
    }
}
