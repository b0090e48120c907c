//! # Concatenated Host Stream
//!
//! The HTTP prober appends one JSON object per host to `web_full_info.txt` with no
//! separator and no enclosing array: `{...}{...}{...}`.
//!
//! Two ways of splitting it are offered (see [`HostStreamMode`]). `Repair` is the
//! dashboard's historical behaviour and stays the default: it rewrites every `}{` into
//! `},{`, wraps the text in `[...]` and parses it as one array. Any malformed object
//! makes the whole file yield nothing, and a string value containing `}{` is rewritten
//! along with the real boundaries. `Stream` feeds the raw text to a streaming
//! deserializer instead and is immune to both.

use std::sync::OnceLock;

use regex::Regex;
use reconview_common::config::HostStreamMode;
use reconview_common::error::{IngestError, IngestResult};
use reconview_common::models::host::HostRecord;
use serde_json::Value;
use tracing::{debug, warn};

use super::ArtifactParser;

static OBJECT_BOUNDARY: OnceLock<Regex> = OnceLock::new();

fn object_boundary() -> &'static Regex {
    OBJECT_BOUNDARY.get_or_init(|| Regex::new(r"\}\s*\{").expect("boundary pattern is valid"))
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HostStream {
    mode: HostStreamMode,
}

impl HostStream {
    pub fn new(mode: HostStreamMode) -> Self {
        Self { mode }
    }
}

impl ArtifactParser for HostStream {
    type Output = Vec<HostRecord>;

    fn category(&self) -> &'static str {
        "hosts"
    }

    fn parse(&self, raw: &str) -> IngestResult<Self::Output> {
        let values = match self.mode {
            HostStreamMode::Repair => parse_repaired(raw)?,
            HostStreamMode::Stream => parse_streamed(raw)?,
        };
        Ok(into_records(values))
    }
}

/// Rewrites `}{` boundaries into a JSON array and parses it in one go.
pub fn parse_repaired(raw: &str) -> IngestResult<Vec<Value>> {
    let repaired = object_boundary().replace_all(raw.trim(), "},{");
    let array = format!("[{repaired}]");
    Ok(serde_json::from_str(&array)?)
}

/// Parses back-to-back JSON values without rewriting the text.
///
/// Values before the first malformed one are kept. If the very first value is
/// malformed, the error is returned.
pub fn parse_streamed(raw: &str) -> IngestResult<Vec<Value>> {
    let mut values = Vec::new();
    for item in serde_json::Deserializer::from_str(raw).into_iter::<Value>() {
        match item {
            Ok(value) => values.push(value),
            Err(e) if values.is_empty() => return Err(IngestError::Json(e)),
            Err(e) => {
                warn!(
                    "Host stream truncated after {} objects: {}",
                    values.len(),
                    e
                );
                break;
            }
        }
    }
    Ok(values)
}

fn into_records(values: Vec<Value>) -> Vec<HostRecord> {
    values
        .into_iter()
        .filter_map(|value| match HostRecord::try_from(value) {
            Ok(record) => Some(record),
            Err(other) => {
                debug!("Skipping non-object host entry: {}", other);
                None
            }
        })
        .collect()
}
