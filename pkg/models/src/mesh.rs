use pkg_constants::mesh::{
    POLICY_CIRCUIT_BREAKER, POLICY_DESTINATION, POLICY_LOAD_BALANCING, POLICY_SOURCE,
    ROUTE_RULE_DESTINATION, ROUTE_RULE_HTTP_FAULT, ROUTE_RULE_PRECEDENCE, ROUTE_RULE_ROUTE,
};
use pkg_types::mesh::MeshObject;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// Fields are copied from the mesh object's spec without interpretation.
// An absent key stays `Null` and is left out of the serialized view.

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteRule {
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub destination: Value,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub precedence: Value,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub route: Value,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub http_fault: Value,
}

impl From<&MeshObject> for RouteRule {
    fn from(obj: &MeshObject) -> Self {
        Self {
            destination: obj.spec_value(ROUTE_RULE_DESTINATION),
            precedence: obj.spec_value(ROUTE_RULE_PRECEDENCE),
            route: obj.spec_value(ROUTE_RULE_ROUTE),
            http_fault: obj.spec_value(ROUTE_RULE_HTTP_FAULT),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationPolicy {
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub source: Value,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub destination: Value,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub load_balancing: Value,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub circuit_breaker: Value,
}

impl From<&MeshObject> for DestinationPolicy {
    fn from(obj: &MeshObject) -> Self {
        Self {
            source: obj.spec_value(POLICY_SOURCE),
            destination: obj.spec_value(POLICY_DESTINATION),
            load_balancing: obj.spec_value(POLICY_LOAD_BALANCING),
            circuit_breaker: obj.spec_value(POLICY_CIRCUIT_BREAKER),
        }
    }
}
