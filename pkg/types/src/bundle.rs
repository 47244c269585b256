//! Bundles handed over by the cluster-state and mesh-config clients.

use serde::{Deserialize, Serialize};

use crate::deployment::Deployment;
use crate::endpoint::Endpoints;
use crate::hpa::HorizontalPodAutoscaler;
use crate::mesh::MeshObject;
use crate::service::Service;

/// Everything the cluster knows about one service: the service object,
/// its endpoints, and every deployment and autoscaler in the namespace.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceDetails {
    #[serde(default)]
    pub service: Option<Service>,
    #[serde(default)]
    pub endpoints: Option<Endpoints>,
    #[serde(default)]
    pub deployments: Vec<Deployment>,
    #[serde(default)]
    pub autoscalers: Vec<HorizontalPodAutoscaler>,
}

/// Services and deployments of one namespace, used to build overviews.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceListDetails {
    #[serde(default)]
    pub services: Vec<Service>,
    #[serde(default)]
    pub deployments: Vec<Deployment>,
}

/// Routing rules and destination policies of one namespace.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeshDetails {
    #[serde(default)]
    pub route_rules: Vec<MeshObject>,
    #[serde(default)]
    pub destination_policies: Vec<MeshObject>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_decodes_to_empty_bundles() {
        let details: ServiceDetails = serde_json::from_str("{}").unwrap();
        assert!(details.service.is_none());
        assert!(details.endpoints.is_none());
        assert!(details.deployments.is_empty());

        let mesh: MeshDetails = serde_json::from_str("{}").unwrap();
        assert!(mesh.route_rules.is_empty());
        assert!(mesh.destination_policies.is_empty());
    }

    #[test]
    fn mesh_details_use_camel_case_keys() {
        let mesh: MeshDetails = serde_json::from_str(
            r#"{"routeRules": [{"spec": {"precedence": 2}}], "destinationPolicies": []}"#,
        )
        .unwrap();
        assert_eq!(mesh.route_rules.len(), 1);
        assert_eq!(mesh.route_rules[0].spec_value("precedence"), 2);
    }
}
