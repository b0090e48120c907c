use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A single nuclei finding.
///
/// Every known field is optional in the source; missing ones default to empty. Keys
/// the dashboard does not model are carried in `extra` and written back unchanged.
///
/// Deserializing from any JSON object succeeds. Fields of an unexpected type are
/// coerced rather than rejected, so template drift never costs a finding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VulnerabilityRecord {
    #[serde(rename = "template-id", default, deserialize_with = "string_or_default")]
    pub template_id: String,
    #[serde(rename = "matched-at", default, deserialize_with = "string_or_default")]
    pub matched_at: String,
    #[serde(default, deserialize_with = "info_or_default")]
    pub info: VulnerabilityInfo,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VulnerabilityInfo {
    #[serde(default, deserialize_with = "string_or_default")]
    pub name: String,
    #[serde(default, deserialize_with = "one_or_many")]
    pub author: Vec<String>,
    #[serde(default, deserialize_with = "string_or_default")]
    pub severity: String,
    #[serde(default, deserialize_with = "string_or_default")]
    pub description: String,
    #[serde(default, deserialize_with = "one_or_many")]
    pub reference: Vec<String>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub tags: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl VulnerabilityRecord {
    pub fn severity(&self) -> Severity {
        Severity::from(self.info.severity.as_str())
    }
}

/// Coarse severity bucket used for ordering and summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Unknown,
    Info,
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub const ALL: [Severity; 6] = [
        Severity::Critical,
        Severity::High,
        Severity::Medium,
        Severity::Low,
        Severity::Info,
        Severity::Unknown,
    ];
}

impl From<&str> for Severity {
    fn from(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "info" | "informational" => Self::Info,
            "low" => Self::Low,
            "medium" | "moderate" => Self::Medium,
            "high" => Self::High,
            "critical" => Self::Critical,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Unknown => "unknown",
            Self::Info => "info",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        };
        f.write_str(label)
    }
}

/// A non-object `info` keeps its raw value under this key of `info.extra`.
pub const RAW_INFO_KEY: &str = "raw";

/// nuclei writes list fields as a single value, an array, or `null` depending on the
/// template. All of them collapse into a `Vec`.
fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => Vec::new(),
        Value::Array(values) => values.into_iter().filter_map(scalar_text).collect(),
        other => scalar_text(other).into_iter().collect(),
    })
}

fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Null => None,
        other => Some(other.to_string()),
    }
}

fn info_or_default<'de, D>(deserializer: D) -> Result<VulnerabilityInfo, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(VulnerabilityInfo::default()),
        value @ Value::Object(_) => {
            serde_json::from_value(value).map_err(serde::de::Error::custom)
        }
        other => {
            let mut info = VulnerabilityInfo::default();
            info.extra.insert(RAW_INFO_KEY.to_string(), other);
            Ok(info)
        }
    }
}

fn string_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}
