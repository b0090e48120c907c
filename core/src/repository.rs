//! # Scan Repository (Outbound Port)
//!
//! The contract the application reads scans through. [`ReconService`](crate::service::ReconService)
//! depends on this trait only; [`fs::FsScanRepository`] is the adapter that reads the
//! recon pipeline's directory tree.
//!
//! Only [`ScanRepository::list_scans`] can fail. Every per-category read returns
//! whatever could be recovered, which may be nothing.

use async_trait::async_trait;
use reconview_common::error::CatalogError;
use reconview_common::models::host::HostRecord;
use reconview_common::models::osint::OsintBundle;
use reconview_common::models::port::PortRecord;
use reconview_common::models::scan::ScanId;
use reconview_common::models::vulnerability::VulnerabilityRecord;

pub mod fs;

#[async_trait]
pub trait ScanRepository: Send + Sync {
    async fn list_scans(&self) -> Result<Vec<ScanId>, CatalogError>;

    async fn subdomains(&self, scan: &ScanId) -> Vec<String>;

    /// Probed hosts, with a `screenshot` reference attached where an image exists.
    async fn hosts(&self, scan: &ScanId) -> Vec<HostRecord>;

    async fn vulnerabilities(&self, scan: &ScanId) -> Vec<VulnerabilityRecord>;

    async fn osint(&self, scan: &ScanId) -> OsintBundle;

    async fn ports(&self, scan: &ScanId) -> Vec<PortRecord>;
}
