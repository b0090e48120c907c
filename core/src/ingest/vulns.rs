use reconview_common::error::IngestResult;
use reconview_common::models::vulnerability::VulnerabilityRecord;
use serde_json::Value;
use tracing::{debug, warn};

use super::ArtifactParser;

/// nuclei's JSON export: one finding per line.
///
/// Lines are independent. One that is not valid JSON is dropped and the rest are kept.
/// Every line that parses to a JSON object becomes a finding, whatever the types of its
/// fields. Top-level scalars and arrays carry no finding and are skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct NucleiFindings;

impl ArtifactParser for NucleiFindings {
    type Output = Vec<VulnerabilityRecord>;

    fn category(&self) -> &'static str {
        "vulnerabilities"
    }

    fn parse(&self, raw: &str) -> IngestResult<Self::Output> {
        let mut findings = Vec::new();
        let mut dropped = 0usize;

        for (idx, line) in raw.split('\n').enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let value = match serde_json::from_str::<Value>(line) {
                Ok(value) => value,
                Err(e) => {
                    dropped += 1;
                    debug!("Skipping finding on line {}: {}", idx + 1, e);
                    continue;
                }
            };
            if !value.is_object() {
                dropped += 1;
                debug!("Skipping non-object finding on line {}", idx + 1);
                continue;
            }
            match serde_json::from_value::<VulnerabilityRecord>(value) {
                Ok(finding) => findings.push(finding),
                Err(e) => {
                    dropped += 1;
                    debug!("Skipping finding on line {}: {}", idx + 1, e);
                }
            }
        }

        if dropped > 0 {
            warn!(
                "Dropped {} unparseable nuclei lines, kept {}",
                dropped,
                findings.len()
            );
        }
        Ok(findings)
    }
}
