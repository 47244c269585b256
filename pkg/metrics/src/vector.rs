//! Instant-query result vectors.
//!
//! A vector is decoded either from a bare list of samples or from the
//! query API envelope:
//!
//! ```json
//! {"status": "success",
//!  "data": {"resultType": "vector",
//!           "result": [{"metric": {"response_code": "200"},
//!                       "value": [1520520240.781, "5"]}]}}
//! ```

use anyhow::{Context, Result, anyhow, bail};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One labeled value of an instant vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    #[serde(default)]
    pub metric: HashMap<String, String>,
    pub value: f64,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
}

impl Sample {
    pub fn label(&self, name: &str) -> Option<&str> {
        self.metric.get(name).map(String::as_str)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetricsVector {
    pub samples: Vec<Sample>,
}

impl MetricsVector {
    pub fn new(samples: Vec<Sample>) -> Self {
        Self { samples }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl FromIterator<Sample> for MetricsVector {
    fn from_iter<I: IntoIterator<Item = Sample>>(iter: I) -> Self {
        Self {
            samples: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a MetricsVector {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

// --- Query API envelope ---

#[derive(Debug, Clone, Deserialize)]
pub struct QueryResponse {
    pub status: String,
    #[serde(default)]
    pub data: Option<QueryData>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryData {
    pub result_type: String,
    #[serde(default)]
    pub result: Vec<RawSample>,
}

/// Sample as the query API encodes it: `[<unix seconds>, "<value>"]`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawSample {
    #[serde(default)]
    pub metric: HashMap<String, String>,
    pub value: (f64, String),
}

impl TryFrom<RawSample> for Sample {
    type Error = anyhow::Error;

    fn try_from(raw: RawSample) -> Result<Self> {
        let (secs, value) = raw.value;
        let value: f64 = value
            .trim()
            .parse()
            .with_context(|| format!("sample value '{}' is not a number", value))?;
        let timestamp = DateTime::from_timestamp_millis((secs * 1000.0).round() as i64)
            .ok_or_else(|| anyhow!("sample timestamp {} is out of range", secs))?;
        Ok(Sample {
            metric: raw.metric,
            value,
            timestamp,
        })
    }
}

impl QueryResponse {
    pub fn into_vector(self) -> Result<MetricsVector> {
        if self.status != "success" {
            bail!(
                "query failed with status '{}': {}",
                self.status,
                self.error.as_deref().unwrap_or("no error message")
            );
        }
        let data = self
            .data
            .ok_or_else(|| anyhow!("query response has no data"))?;
        if data.result_type != "vector" {
            bail!("expected a vector result, got '{}'", data.result_type);
        }
        data.result.into_iter().map(Sample::try_from).collect()
    }
}

/// Decode a vector from JSON, accepting a bare sample list or a query
/// API envelope.
pub fn decode_vector(bytes: &[u8]) -> Result<MetricsVector> {
    let doc: serde_json::Value =
        serde_json::from_slice(bytes).context("metrics document is not valid JSON")?;
    if doc.is_object() && doc.get("status").is_some() {
        let response: QueryResponse =
            serde_json::from_value(doc).context("malformed query response")?;
        response.into_vector()
    } else {
        serde_json::from_value(doc).context("malformed sample list")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_query_envelope() {
        let vector = decode_vector(
            br#"{"status": "success",
                 "data": {"resultType": "vector",
                          "result": [
                            {"metric": {"destination_service": "reviews.tutorial.svc.cluster.local",
                                        "response_code": "200"},
                             "value": [1520520240.781, "5"]},
                            {"metric": {}, "value": [1520520240.781, "1.5"]}]}}"#,
        )
        .unwrap();

        assert_eq!(vector.len(), 2);
        assert_eq!(vector.samples[0].value, 5.0);
        assert_eq!(vector.samples[0].label("response_code"), Some("200"));
        assert_eq!(vector.samples[0].timestamp.timestamp_millis(), 1_520_520_240_781);
        assert_eq!(vector.samples[1].value, 1.5);
    }

    #[test]
    fn decodes_bare_sample_list() {
        let vector = decode_vector(
            br#"[{"metric": {"response_code": "500"}, "value": 2.5, "timestamp": 1000}]"#,
        )
        .unwrap();
        assert_eq!(vector.len(), 1);
        assert_eq!(vector.samples[0].value, 2.5);
        assert_eq!(vector.samples[0].timestamp.timestamp_millis(), 1000);
    }

    #[test]
    fn empty_result_is_empty_vector() {
        let vector = decode_vector(
            br#"{"status": "success", "data": {"resultType": "vector", "result": []}}"#,
        )
        .unwrap();
        assert!(vector.is_empty());
    }

    #[test]
    fn rejects_failed_query() {
        let err = decode_vector(br#"{"status": "error", "error": "bad_data"}"#).unwrap_err();
        assert!(err.to_string().contains("bad_data"));
    }

    #[test]
    fn rejects_matrix_result() {
        let matrix = br#"{"status": "success", "data": {"resultType": "matrix", "result": []}}"#;
        assert!(decode_vector(matrix).is_err());
    }

    #[test]
    fn rejects_non_numeric_value() {
        assert!(
            decode_vector(
                br#"{"status": "success",
                     "data": {"resultType": "vector",
                              "result": [{"metric": {}, "value": [1.0, "lots"]}]}}"#
            )
            .is_err()
        );
    }
}
