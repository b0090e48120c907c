//! # Scan Directory Layout
//!
//! Where the recon pipeline drops each artifact inside a scan directory:
//!
//! ```text
//! <recon root>/<scan>/
//! ├── subdomains/subdomains.txt      line list
//! ├── webs/web_full_info.txt         concatenated JSON objects
//! ├── screenshots/<derived>.png      images
//! ├── nuclei_output/info_json.txt    NDJSON findings
//! ├── osint/emails.txt               line list
//! ├── osint/dorks.txt                line list
//! └── hosts/portscan_active.xml      nmap XML
//! ```

use std::path::{Path, PathBuf};

use crate::models::scan::ScanId;

pub const SCREENSHOTS_DIR: &str = "screenshots";

#[derive(Debug, Clone)]
pub struct ScanLayout {
    dir: PathBuf,
}

impl ScanLayout {
    pub fn new(recon_root: &Path, scan: &ScanId) -> Self {
        Self {
            dir: recon_root.join(scan.as_str()),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn subdomains(&self) -> PathBuf {
        self.dir.join("subdomains").join("subdomains.txt")
    }

    pub fn web_full_info(&self) -> PathBuf {
        self.dir.join("webs").join("web_full_info.txt")
    }

    pub fn screenshots(&self) -> PathBuf {
        self.dir.join(SCREENSHOTS_DIR)
    }

    pub fn nuclei_info(&self) -> PathBuf {
        self.dir.join("nuclei_output").join("info_json.txt")
    }

    pub fn emails(&self) -> PathBuf {
        self.dir.join("osint").join("emails.txt")
    }

    pub fn dorks(&self) -> PathBuf {
        self.dir.join("osint").join("dorks.txt")
    }

    pub fn portscan(&self) -> PathBuf {
        self.dir.join("hosts").join("portscan_active.xml")
    }
}
