//! # Recon Service
//!
//! The use cases the CLI and HTTP adapters call. Each query is independent: it re-reads
//! whatever it needs through the [`ScanRepository`] and keeps nothing afterwards.

use reconview_common::error::CatalogError;
use reconview_common::models::host::HostRecord;
use reconview_common::models::osint::OsintBundle;
use reconview_common::models::port::PortRecord;
use reconview_common::models::report::ScanReport;
use reconview_common::models::scan::ScanId;
use reconview_common::models::vulnerability::VulnerabilityRecord;
use tracing::debug;

use crate::repository::ScanRepository;

pub struct ReconService {
    repo: Box<dyn ScanRepository>,
}

impl ReconService {
    pub fn new(repo: Box<dyn ScanRepository>) -> Self {
        Self { repo }
    }

    pub async fn list_scans(&self) -> Result<Vec<ScanId>, CatalogError> {
        self.repo.list_scans().await
    }

    pub async fn subdomains(&self, scan: &ScanId) -> Vec<String> {
        self.repo.subdomains(scan).await
    }

    pub async fn hosts(&self, scan: &ScanId) -> Vec<HostRecord> {
        self.repo.hosts(scan).await
    }

    pub async fn vulnerabilities(&self, scan: &ScanId) -> Vec<VulnerabilityRecord> {
        self.repo.vulnerabilities(scan).await
    }

    pub async fn osint(&self, scan: &ScanId) -> OsintBundle {
        self.repo.osint(scan).await
    }

    pub async fn ports(&self, scan: &ScanId) -> Vec<PortRecord> {
        self.repo.ports(scan).await
    }

    /// Reads every category of `scan` concurrently.
    ///
    /// Unlike the per-category queries, this refuses scans the catalog does not list,
    /// since a report for a typo'd name would silently be empty.
    pub async fn report(&self, scan: &ScanId) -> Result<ScanReport, CatalogError> {
        let scans = self.repo.list_scans().await?;
        if !scans.contains(scan) {
            return Err(CatalogError::UnknownScan(scan.to_string()));
        }

        let (subdomains, hosts, vulnerabilities, osint, ports) = tokio::join!(
            self.repo.subdomains(scan),
            self.repo.hosts(scan),
            self.repo.vulnerabilities(scan),
            self.repo.osint(scan),
            self.repo.ports(scan),
        );

        debug!(
            "Report for {}: {} subdomains, {} hosts, {} findings, {} ports",
            scan,
            subdomains.len(),
            hosts.len(),
            vulnerabilities.len(),
            ports.len()
        );

        Ok(ScanReport {
            scan: scan.clone(),
            subdomains,
            hosts,
            vulnerabilities,
            osint,
            ports,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct Canned;

    #[async_trait]
    impl ScanRepository for Canned {
        async fn list_scans(&self) -> Result<Vec<ScanId>, CatalogError> {
            Ok(vec!["alpha".parse().unwrap()])
        }

        async fn subdomains(&self, _scan: &ScanId) -> Vec<String> {
            vec!["a.alpha".into(), "b.alpha".into()]
        }

        async fn hosts(&self, _scan: &ScanId) -> Vec<HostRecord> {
            Vec::new()
        }

        async fn vulnerabilities(&self, _scan: &ScanId) -> Vec<VulnerabilityRecord> {
            vec![VulnerabilityRecord::default()]
        }

        async fn osint(&self, _scan: &ScanId) -> OsintBundle {
            OsintBundle::default()
        }

        async fn ports(&self, _scan: &ScanId) -> Vec<PortRecord> {
            Vec::new()
        }
    }

    #[tokio::test]
    async fn report_collects_every_category() {
        let service = ReconService::new(Box::new(Canned));
        let report = service.report(&"alpha".parse().unwrap()).await.unwrap();

        assert_eq!(report.scan.as_str(), "alpha");
        assert_eq!(report.subdomains.len(), 2);
        assert_eq!(report.vulnerabilities.len(), 1);
        assert!(report.hosts.is_empty());
    }

    #[tokio::test]
    async fn report_rejects_scans_missing_from_the_catalog() {
        let service = ReconService::new(Box::new(Canned));
        let err = service.report(&"beta".parse().unwrap()).await.unwrap_err();
        assert!(matches!(err, CatalogError::UnknownScan(name) if name == "beta"));
    }
}
