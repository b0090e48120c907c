use std::path::{Path, PathBuf};

use async_trait::async_trait;
use reconview_common::config::{Config, HostStreamMode};
use reconview_common::error::CatalogError;
use reconview_common::layout::{SCREENSHOTS_DIR, ScanLayout};
use reconview_common::models::host::HostRecord;
use reconview_common::models::osint::OsintBundle;
use reconview_common::models::port::PortRecord;
use reconview_common::models::scan::ScanId;
use reconview_common::models::vulnerability::VulnerabilityRecord;
use tracing::debug;

use super::ScanRepository;
use crate::catalog;
use crate::ingest::hosts::HostStream;
use crate::ingest::lines::LineList;
use crate::ingest::portscan::NmapXml;
use crate::ingest::vulns::NucleiFindings;
use crate::ingest::{screenshot, tolerant};

/// Reads scans straight from the recon pipeline's output directory.
#[derive(Debug, Clone)]
pub struct FsScanRepository {
    root: PathBuf,
    media_prefix: String,
    host_stream: HostStreamMode,
}

impl FsScanRepository {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let defaults = Config::default();
        Self {
            root: root.into(),
            media_prefix: defaults.media_prefix,
            host_stream: defaults.host_stream,
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self {
            root: cfg.recon_root.clone(),
            media_prefix: cfg.media_prefix.clone(),
            host_stream: cfg.host_stream,
        }
    }

    pub fn with_media_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.media_prefix = prefix.into();
        self
    }

    pub fn with_host_stream(mut self, mode: HostStreamMode) -> Self {
        self.host_stream = mode;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn layout(&self, scan: &ScanId) -> ScanLayout {
        ScanLayout::new(&self.root, scan)
    }

    /// Public reference for a screenshot file, as served by the static route.
    fn screenshot_reference(&self, scan: &ScanId, file: &str) -> String {
        format!(
            "{}/{}/{}/{}",
            self.media_prefix.trim_end_matches('/'),
            scan,
            SCREENSHOTS_DIR,
            file
        )
    }
}

#[async_trait]
impl ScanRepository for FsScanRepository {
    async fn list_scans(&self) -> Result<Vec<ScanId>, CatalogError> {
        catalog::list_scans(&self.root).await
    }

    async fn subdomains(&self, scan: &ScanId) -> Vec<String> {
        tolerant(LineList::new("subdomains"))
            .read(&self.layout(scan).subdomains())
            .await
    }

    async fn hosts(&self, scan: &ScanId) -> Vec<HostRecord> {
        let layout = self.layout(scan);
        let mut hosts = tolerant(HostStream::new(self.host_stream))
            .read(&layout.web_full_info())
            .await;

        let shots = layout.screenshots();
        for host in hosts.iter_mut() {
            let Some(url) = host.url() else { continue };
            if let Some(file) = screenshot::resolve(url, &shots).await {
                host.set_screenshot(self.screenshot_reference(scan, &file));
            }
        }

        debug!("Loaded {} hosts for {}", hosts.len(), scan);
        hosts
    }

    async fn vulnerabilities(&self, scan: &ScanId) -> Vec<VulnerabilityRecord> {
        tolerant(NucleiFindings).read(&self.layout(scan).nuclei_info()).await
    }

    async fn osint(&self, scan: &ScanId) -> OsintBundle {
        let layout = self.layout(scan);
        let (emails_path, dorks_path) = (layout.emails(), layout.dorks());
        let email_reader = tolerant(LineList::new("emails"));
        let dork_reader = tolerant(LineList::new("dorks"));

        let (emails, dorks) = tokio::join!(
            email_reader.read(&emails_path),
            dork_reader.read(&dorks_path),
        );
        OsintBundle { emails, dorks }
    }

    async fn ports(&self, scan: &ScanId) -> Vec<PortRecord> {
        tolerant(NmapXml).read(&self.layout(scan).portscan()).await
    }
}
