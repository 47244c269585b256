use serde::{Deserialize, Serialize};

/// meshlens configuration file (YAML).
///
/// Example `config.yaml`:
/// ```yaml
/// namespace: tutorial
/// source-label: source_service
/// destination-label: destination_service
/// response-code-label: response_code
/// error-status-threshold: 400
/// log-json: false
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub namespace: Option<String>,
    #[serde(default, alias = "source-label")]
    pub source_label: Option<String>,
    #[serde(default, alias = "destination-label")]
    pub destination_label: Option<String>,
    #[serde(default, alias = "response-code-label")]
    pub response_code_label: Option<String>,
    #[serde(default, alias = "error-status-threshold")]
    pub error_status_threshold: Option<u16>,
    #[serde(default, alias = "log-json")]
    pub log_json: Option<bool>,
}

/// Load a YAML config file, returning the default if the file doesn't exist.
pub fn load_config_file<T: serde::de::DeserializeOwned + Default>(path: &str) -> anyhow::Result<T> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Ok(T::default());
        }
        Err(e) => return Err(e.into()),
    };
    parse_config(&content)
}

/// Parse YAML config text. An empty document yields the default.
pub fn parse_config<T: serde::de::DeserializeOwned + Default>(content: &str) -> anyhow::Result<T> {
    if content.trim().is_empty() {
        return Ok(T::default());
    }
    let config: T = serde_yaml::from_str(content)?;
    Ok(config)
}
