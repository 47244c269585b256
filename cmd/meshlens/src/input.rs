//! Loading of the collaborator bundles handed to the CLI as JSON files.

use anyhow::{Context, Result};
use pkg_metrics::{MetricsVector, decode_vector};
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::debug;

async fn read_file(path: &Path) -> Result<Vec<u8>> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;
    debug!("Read {} ({} bytes)", path.display(), bytes.len());
    Ok(bytes)
}

pub async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let bytes = read_file(path).await?;
    serde_json::from_slice(&bytes).with_context(|| format!("failed to decode {}", path.display()))
}

/// Like `read_json`, but an omitted path yields the empty bundle.
pub async fn read_json_or_default<T: DeserializeOwned + Default>(path: Option<&Path>) -> Result<T> {
    match path {
        Some(p) => read_json(p).await,
        None => Ok(T::default()),
    }
}

pub async fn read_metrics(path: Option<&Path>) -> Result<Option<MetricsVector>> {
    let Some(path) = path else {
        return Ok(None);
    };
    let bytes = read_file(path).await?;
    let vector = decode_vector(&bytes)
        .with_context(|| format!("failed to decode metrics from {}", path.display()))?;
    Ok(Some(vector))
}
