use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::meta::ObjectMeta;

/// A raw mesh routing or policy object.
///
/// The spec is open-ended; consumers pull out the top-level keys they know
/// and copy them verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeshObject {
    #[serde(default)]
    pub metadata: ObjectMeta,
    #[serde(default)]
    pub spec: Map<String, Value>,
}

impl MeshObject {
    pub fn with_spec(spec: Map<String, Value>) -> Self {
        Self {
            metadata: ObjectMeta::default(),
            spec,
        }
    }

    /// Clone of the top-level spec entry `key`, or `Value::Null` when absent.
    pub fn spec_value(&self, key: &str) -> Value {
        self.spec.get(key).cloned().unwrap_or(Value::Null)
    }
}
