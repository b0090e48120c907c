use std::collections::BTreeMap;

use serde::Serialize;

use super::host::HostRecord;
use super::osint::OsintBundle;
use super::port::PortRecord;
use super::scan::ScanId;
use super::vulnerability::{Severity, VulnerabilityRecord};

/// Every category of one scan, read in a single pass.
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub scan: ScanId,
    pub subdomains: Vec<String>,
    pub hosts: Vec<HostRecord>,
    pub vulnerabilities: Vec<VulnerabilityRecord>,
    pub osint: OsintBundle,
    pub ports: Vec<PortRecord>,
}

impl ScanReport {
    pub fn severity_counts(&self) -> BTreeMap<Severity, usize> {
        let mut counts = BTreeMap::new();
        for vuln in &self.vulnerabilities {
            *counts.entry(vuln.severity()).or_insert(0) += 1;
        }
        counts
    }

    /// Open ports grouped by IP, in the order hosts first appear in the report.
    pub fn open_ports_by_ip(&self) -> Vec<(&str, Vec<&PortRecord>)> {
        let mut grouped: Vec<(&str, Vec<&PortRecord>)> = Vec::new();
        for port in self.ports.iter().filter(|p| p.is_open()) {
            match grouped.iter_mut().find(|(ip, _)| *ip == port.ip) {
                Some((_, ports)) => ports.push(port),
                None => grouped.push((port.ip.as_str(), vec![port])),
            }
        }
        grouped
    }

    pub fn screenshot_count(&self) -> usize {
        self.hosts.iter().filter(|h| h.screenshot().is_some()).count()
    }
}
