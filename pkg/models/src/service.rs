use pkg_types::bundle::{MeshDetails, ServiceDetails};
use pkg_types::endpoint::{EndpointAddress, EndpointPort, EndpointSubset, Endpoints};
use pkg_types::service::{Service as RawService, ServicePort};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

use crate::deployment::Deployment;
use crate::mesh::{DestinationPolicy, RouteRule};
use crate::namespace::Namespace;

/// Callers of a service grouped by the version label of the callee.
pub type Dependencies = BTreeMap<String, Vec<String>>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Port {
    pub name: String,
    pub protocol: String,
    pub port: u16,
}

impl From<&ServicePort> for Port {
    fn from(p: &ServicePort) -> Self {
        Self {
            name: p.name.clone(),
            protocol: p.protocol.clone(),
            port: p.port,
        }
    }
}

impl From<&EndpointPort> for Port {
    fn from(p: &EndpointPort) -> Self {
        Self {
            name: p.name.clone(),
            protocol: p.protocol.clone(),
            port: p.port,
        }
    }
}

/// One backend target of a service, usually a pod.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub kind: String,
    pub name: String,
    pub ip: String,
}

impl From<&EndpointAddress> for Address {
    fn from(a: &EndpointAddress) -> Self {
        let (kind, name) = a
            .target_ref
            .as_ref()
            .map(|r| (r.kind.clone(), r.name.clone()))
            .unwrap_or_default();
        Self {
            kind,
            name,
            ip: a.ip.clone(),
        }
    }
}

/// One endpoint subset: its addresses and the ports they serve.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    pub addresses: Vec<Address>,
    pub ports: Vec<Port>,
}

impl From<&EndpointSubset> for Endpoint {
    fn from(subset: &EndpointSubset) -> Self {
        Self {
            addresses: subset.addresses.iter().map(Address::from).collect(),
            ports: subset.ports.iter().map(Port::from).collect(),
        }
    }
}

impl Endpoint {
    /// One entry per subset, in subset order.
    pub fn from_endpoints(endpoints: &Endpoints) -> Vec<Self> {
        endpoints.subsets.iter().map(Endpoint::from).collect()
    }
}

/// Detailed view of a single service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub name: String,
    pub namespace: Namespace,
    #[serde(rename = "type")]
    pub service_type: String,
    pub ip: String,
    pub labels: HashMap<String, String>,
    pub ports: Vec<Port>,
    pub endpoints: Vec<Endpoint>,
    pub deployments: Vec<Deployment>,
    pub route_rules: Vec<RouteRule>,
    pub destination_policies: Vec<DestinationPolicy>,
    pub dependencies: Dependencies,
}

impl Service {
    /// Shell carrying only the identity of the service.
    pub fn new(name: &str, namespace: &str) -> Self {
        Self {
            name: name.to_string(),
            namespace: Namespace::new(namespace),
            ..Default::default()
        }
    }

    /// Merge cluster state, mesh config and pre-computed dependencies into
    /// the shell.
    ///
    /// A missing service object or endpoints leave the corresponding fields
    /// empty; a namespace without routing rules or policies yields empty
    /// lists.
    pub fn with_details(
        mut self,
        details: &ServiceDetails,
        mesh: &MeshDetails,
        dependencies: Dependencies,
    ) -> Self {
        if let Some(raw) = &details.service {
            self.set_service(raw);
        }
        if let Some(endpoints) = &details.endpoints {
            self.endpoints = Endpoint::from_endpoints(endpoints);
        }
        self.deployments = Deployment::from_raw_list(&details.deployments, &details.autoscalers);
        self.route_rules = mesh.route_rules.iter().map(RouteRule::from).collect();
        self.destination_policies = mesh
            .destination_policies
            .iter()
            .map(DestinationPolicy::from)
            .collect();
        self.dependencies = dependencies;

        debug!(
            "Service {}/{}: {} endpoints, {} deployments, {} route rules, {} policies",
            self.namespace.name,
            self.name,
            self.endpoints.len(),
            self.deployments.len(),
            self.route_rules.len(),
            self.destination_policies.len()
        );
        self
    }

    fn set_service(&mut self, raw: &RawService) {
        self.service_type = raw.spec.service_type.to_string();
        self.ip = raw.spec.cluster_ip.clone();
        self.labels = raw.metadata.labels.clone();
        self.ports = raw.spec.ports.iter().map(Port::from).collect();
    }
}
