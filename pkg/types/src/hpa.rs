use serde::{Deserialize, Serialize};

use crate::meta::ObjectMeta;

// --- HPA scale target ---

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrossVersionObjectReference {
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub name: String,
}

// --- HPA status ---

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HPAStatus {
    #[serde(default)]
    pub observed_generation: Option<u64>,
    #[serde(default)]
    pub current_replicas: u32,
    #[serde(default)]
    pub desired_replicas: u32,
    #[serde(default, rename = "currentCPUUtilizationPercentage")]
    pub current_cpu_utilization_percentage: Option<u32>,
    #[serde(default)]
    pub last_scale_time: Option<String>,
}

// --- HPA spec ---

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HPASpec {
    #[serde(default)]
    pub scale_target_ref: CrossVersionObjectReference,
    #[serde(default)]
    pub min_replicas: Option<u32>,
    #[serde(default)]
    pub max_replicas: u32,
    /// Target average CPU utilization (percentage, e.g. 80 = 80%)
    #[serde(default, rename = "targetCPUUtilizationPercentage")]
    pub target_cpu_utilization_percentage: Option<u32>,
}

// --- HPA ---

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HorizontalPodAutoscaler {
    #[serde(default)]
    pub metadata: ObjectMeta,
    #[serde(default)]
    pub spec: HPASpec,
    #[serde(default)]
    pub status: HPAStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_uppercase_cpu_fields() {
        let hpa: HorizontalPodAutoscaler = serde_json::from_str(
            r#"{
                "metadata": {"name": "reviews-v1"},
                "spec": {"scaleTargetRef": {"kind": "Deployment", "name": "reviews-v1"},
                         "minReplicas": 1, "maxReplicas": 10,
                         "targetCPUUtilizationPercentage": 50},
                "status": {"observedGeneration": 50, "currentReplicas": 3,
                           "desiredReplicas": 4, "currentCPUUtilizationPercentage": 70}
            }"#,
        )
        .unwrap();

        assert_eq!(hpa.spec.scale_target_ref.name, "reviews-v1");
        assert_eq!(hpa.spec.min_replicas, Some(1));
        assert_eq!(hpa.spec.target_cpu_utilization_percentage, Some(50));
        assert_eq!(hpa.status.observed_generation, Some(50));
        assert_eq!(hpa.status.current_cpu_utilization_percentage, Some(70));
    }

    #[test]
    fn optional_fields_stay_absent() {
        let hpa: HorizontalPodAutoscaler =
            serde_json::from_str(r#"{"metadata": {"name": "x"}, "spec": {"maxReplicas": 3}}"#)
                .unwrap();
        assert_eq!(hpa.spec.min_replicas, None);
        assert_eq!(hpa.status.observed_generation, None);
        assert_eq!(hpa.status.current_cpu_utilization_percentage, None);
    }
}
