//! # Artifact Ingestion
//!
//! Each recon artifact has its own format parser in a submodule. Parsers are pure: they
//! take the file content and return records or an [`IngestError`].
//!
//! Reading the file and deciding what to do with a failure happens exactly once, in
//! [`Tolerant`]. A category whose file is missing, unreadable or malformed comes back
//! empty and the reason goes to the log. A scan may legitimately lack any artifact, and
//! one broken file must never hide the rest of the scan.

use std::path::Path;

use reconview_common::error::{IngestError, IngestResult};
use tracing::{debug, warn};

pub mod hosts;
pub mod lines;
pub mod portscan;
pub mod screenshot;
pub mod vulns;

/// A format parser for one kind of artifact.
pub trait ArtifactParser {
    type Output: Default;

    /// Short label used in log lines (`hosts`, `ports`, ...).
    fn category(&self) -> &'static str;

    fn parse(&self, raw: &str) -> IngestResult<Self::Output>;
}

/// Wraps a parser so that reading through it can never fail.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tolerant<P> {
    parser: P,
}

pub fn tolerant<P: ArtifactParser>(parser: P) -> Tolerant<P> {
    Tolerant { parser }
}

impl<P: ArtifactParser> Tolerant<P> {
    /// Reads and parses `path`, degrading to an empty output on any failure.
    pub async fn read(&self, path: &Path) -> P::Output {
        match self.try_read(path).await {
            Ok(output) => output,
            Err(e) => {
                report(self.parser.category(), path, &e);
                P::Output::default()
            }
        }
    }

    /// Same as [`Tolerant::read`] but hands the failure back instead of swallowing it.
    pub async fn try_read(&self, path: &Path) -> IngestResult<P::Output> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| IngestError::from_io(path, e))?;
        let raw = String::from_utf8_lossy(&bytes);
        self.parser.parse(&raw)
    }

    pub fn parser(&self) -> &P {
        &self.parser
    }
}

fn report(category: &str, path: &Path, error: &IngestError) {
    if error.is_absence() {
        debug!("No {} data at {}, returning empty", category, path.display());
    } else {
        warn!(
            "Could not load {} from {}, returning empty: {}",
            category,
            path.display(),
            error
        );
    }
}
