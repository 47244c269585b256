use pkg_types::deployment::Deployment as RawDeployment;
use pkg_types::hpa::HorizontalPodAutoscaler;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Autoscaler attached to a deployment. All-zero when the deployment has
/// none.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Autoscaler {
    pub name: String,
    pub labels: HashMap<String, String>,
    pub created_at: String,
    pub min_replicas: u32,
    pub max_replicas: u32,
    #[serde(rename = "targetCPUUtilizationPercentage")]
    pub target_cpu_utilization_percentage: u32,
    pub current_replicas: u32,
    pub desired_replicas: u32,
    pub observed_generation: u64,
    #[serde(rename = "currentCPUUtilizationPercentage")]
    pub current_cpu_utilization_percentage: u32,
}

impl From<&HorizontalPodAutoscaler> for Autoscaler {
    fn from(hpa: &HorizontalPodAutoscaler) -> Self {
        Self {
            name: hpa.metadata.name.clone(),
            labels: hpa.metadata.labels.clone(),
            created_at: hpa.metadata.creation_timestamp.clone(),
            min_replicas: hpa.spec.min_replicas.unwrap_or(0),
            max_replicas: hpa.spec.max_replicas,
            target_cpu_utilization_percentage: hpa
                .spec
                .target_cpu_utilization_percentage
                .unwrap_or(0),
            current_replicas: hpa.status.current_replicas,
            desired_replicas: hpa.status.desired_replicas,
            observed_generation: hpa.status.observed_generation.unwrap_or(0),
            current_cpu_utilization_percentage: hpa
                .status
                .current_cpu_utilization_percentage
                .unwrap_or(0),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deployment {
    pub name: String,
    pub labels: HashMap<String, String>,
    pub created_at: String,
    pub replicas: u32,
    pub available_replicas: u32,
    pub unavailable_replicas: u32,
    pub autoscaler: Autoscaler,
}

impl Deployment {
    pub fn new(raw: &RawDeployment, autoscaler: Option<&HorizontalPodAutoscaler>) -> Self {
        Self {
            name: raw.metadata.name.clone(),
            labels: raw.metadata.labels.clone(),
            created_at: raw.metadata.creation_timestamp.clone(),
            replicas: raw.status.replicas,
            available_replicas: raw.status.available_replicas,
            unavailable_replicas: raw.status.unavailable_replicas,
            autoscaler: autoscaler.map(Autoscaler::from).unwrap_or_default(),
        }
    }

    /// Build one view per raw deployment, pairing each with the autoscaler
    /// of the same name. When several autoscalers share a name the first
    /// one wins.
    pub fn from_raw_list(
        deployments: &[RawDeployment],
        autoscalers: &[HorizontalPodAutoscaler],
    ) -> Vec<Self> {
        let mut by_name: HashMap<&str, &HorizontalPodAutoscaler> = HashMap::new();
        for hpa in autoscalers {
            by_name.entry(hpa.metadata.name.as_str()).or_insert(hpa);
        }

        deployments
            .iter()
            .map(|d| Self::new(d, by_name.get(d.metadata.name.as_str()).copied()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pkg_types::deployment::DeploymentStatus;
    use pkg_types::hpa::{HPASpec, HPAStatus};
    use pkg_types::meta::ObjectMeta;

    fn make_deployment(
        name: &str,
        replicas: u32,
        available: u32,
        unavailable: u32,
    ) -> RawDeployment {
        RawDeployment {
            metadata: ObjectMeta {
                name: name.to_string(),
                namespace: "tutorial".to_string(),
                labels: HashMap::from([("app".to_string(), "reviews".to_string())]),
                creation_timestamp: "2018-03-08T17:44:00+03:00".to_string(),
            },
            status: DeploymentStatus {
                replicas,
                available_replicas: available,
                unavailable_replicas: unavailable,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn make_hpa(name: &str, min: Option<u32>, max: u32) -> HorizontalPodAutoscaler {
        HorizontalPodAutoscaler {
            metadata: ObjectMeta {
                creation_timestamp: "2018-03-08T17:45:00+03:00".to_string(),
                ..ObjectMeta::named(name)
            },
            spec: HPASpec {
                min_replicas: min,
                max_replicas: max,
                target_cpu_utilization_percentage: Some(50),
                ..Default::default()
            },
            status: HPAStatus {
                observed_generation: Some(50),
                current_replicas: 3,
                desired_replicas: 4,
                current_cpu_utilization_percentage: Some(70),
                last_scale_time: None,
            },
        }
    }

    #[test]
    fn pairs_autoscaler_by_name() {
        let views = Deployment::from_raw_list(
            &[make_deployment("x", 3, 1, 2), make_deployment("y", 2, 2, 0)],
            &[make_hpa("x", Some(1), 10)],
        );

        assert_eq!(views.len(), 2);
        let x = &views[0];
        assert_eq!(x.name, "x");
        assert_eq!(x.created_at, "2018-03-08T17:44:00+03:00");
        assert_eq!((x.replicas, x.available_replicas, x.unavailable_replicas), (3, 1, 2));
        assert_eq!(x.autoscaler.name, "x");
        assert_eq!(x.autoscaler.created_at, "2018-03-08T17:45:00+03:00");
        assert_eq!(x.autoscaler.min_replicas, 1);
        assert_eq!(x.autoscaler.max_replicas, 10);
        assert_eq!(x.autoscaler.target_cpu_utilization_percentage, 50);
        assert_eq!(x.autoscaler.current_replicas, 3);
        assert_eq!(x.autoscaler.desired_replicas, 4);
        assert_eq!(x.autoscaler.observed_generation, 50);
        assert_eq!(x.autoscaler.current_cpu_utilization_percentage, 70);

        assert_eq!(views[1].name, "y");
        assert_eq!(views[1].autoscaler, Autoscaler::default());
        assert!(views[1].autoscaler.name.is_empty());
        assert!(views[1].autoscaler.labels.is_empty());
    }

    #[test]
    fn absent_optionals_default_to_zero() {
        let mut hpa = make_hpa("x", None, 4);
        hpa.spec.target_cpu_utilization_percentage = None;
        hpa.status.observed_generation = None;
        hpa.status.current_cpu_utilization_percentage = None;

        let autoscaler = Autoscaler::from(&hpa);
        assert_eq!(autoscaler.min_replicas, 0);
        assert_eq!(autoscaler.max_replicas, 4);
        assert_eq!(autoscaler.target_cpu_utilization_percentage, 0);
        assert_eq!(autoscaler.observed_generation, 0);
        assert_eq!(autoscaler.current_cpu_utilization_percentage, 0);
    }

    #[test]
    fn first_autoscaler_wins_on_duplicate_names() {
        let views = Deployment::from_raw_list(
            &[make_deployment("x", 1, 1, 0)],
            &[make_hpa("x", Some(2), 5), make_hpa("x", Some(3), 9)],
        );
        assert_eq!(views[0].autoscaler.min_replicas, 2);
        assert_eq!(views[0].autoscaler.max_replicas, 5);
    }

    #[test]
    fn autoscaler_matches_on_exact_name_only() {
        let views = Deployment::from_raw_list(
            &[make_deployment("reviews-v1", 1, 1, 0)],
            &[make_hpa("reviews", Some(1), 3), make_hpa("reviews-v1-canary", Some(1), 3)],
        );
        assert_eq!(views[0].autoscaler, Autoscaler::default());
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let view = Deployment::new(&make_deployment("x", 1, 1, 0), None);
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["availableReplicas"], 1);
        assert_eq!(json["createdAt"], "2018-03-08T17:44:00+03:00");
        assert_eq!(json["autoscaler"]["targetCPUUtilizationPercentage"], 0);
    }
}
