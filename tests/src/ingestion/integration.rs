use std::sync::Arc;

use reconview_common::config::HostStreamMode;
use reconview_common::models::scan::ScanId;
use reconview_common::models::vulnerability::Severity;
use reconview_core::repository::fs::FsScanRepository;
use reconview_core::service::ReconService;

use crate::utils::{NUCLEI, ReconTree};

fn service(tree: &ReconTree) -> ReconService {
    ReconService::new(Box::new(FsScanRepository::new(tree.root())))
}

fn scan(name: &str) -> ScanId {
    name.parse().expect("valid scan id")
}

#[tokio::test]
async fn full_scan_report_counts() -> anyhow::Result<()> {
    let tree = ReconTree::new();
    tree.full_scan("scanA");

    let report = service(&tree).report(&scan("scanA")).await?;

    assert_eq!(
        report.subdomains,
        ["www.example.com", "api.example.com", "dev.example.com", "www.example.com"],
        "blank lines dropped, duplicates kept"
    );
    assert_eq!(report.hosts.len(), 4);
    assert_eq!(report.vulnerabilities.len(), 3);
    assert_eq!(report.osint.emails, ["admin@example.com", "security@example.com"]);
    assert!(report.osint.dorks.is_empty(), "dorks file was never written");
    assert_eq!(report.ports.len(), 4);
    assert_eq!(report.screenshot_count(), 2);
    Ok(())
}

#[tokio::test]
async fn repeated_reads_are_identical() -> anyhow::Result<()> {
    let tree = ReconTree::new();
    tree.full_scan("scanA");
    let service = service(&tree);

    let first = serde_json::to_string(&service.report(&scan("scanA")).await?)?;
    let second = serde_json::to_string(&service.report(&scan("scanA")).await?)?;
    assert_eq!(first, second);
    Ok(())
}

#[tokio::test]
async fn hosts_get_screenshot_references() {
    let tree = ReconTree::new();
    tree.full_scan("scanA");

    let hosts = service(&tree).hosts(&scan("scanA")).await;
    let shots: Vec<Option<&str>> = hosts.iter().map(|h| h.screenshot()).collect();
    assert_eq!(
        shots,
        [
            Some("/recon_data/scanA/screenshots/www_example_com.png"),
            Some("/recon_data/scanA/screenshots/https:__api.example.com:8443_v1.png"),
            None,
            None,
        ]
    );

    assert_eq!(hosts[0].get("status_code"), Some(&serde_json::json!(200)));
    assert_eq!(hosts[3].url(), None, "records without a url are still listed");
}

#[tokio::test]
async fn host_stream_modes_agree_on_wellformed_output() {
    let tree = ReconTree::new();
    tree.full_scan("scanA");

    let repaired = service(&tree).hosts(&scan("scanA")).await;
    let streamed = ReconService::new(Box::new(
        FsScanRepository::new(tree.root()).with_host_stream(HostStreamMode::Stream),
    ))
    .hosts(&scan("scanA"))
    .await;
    assert_eq!(repaired, streamed);
}

#[tokio::test]
async fn bad_finding_lines_are_dropped_individually() {
    let tree = ReconTree::new();
    tree.full_scan("scanA");

    let total = NUCLEI.lines().filter(|l| !l.trim().is_empty()).count();
    let vulns = service(&tree).vulnerabilities(&scan("scanA")).await;
    assert_eq!(vulns.len(), total - 1);

    let ids: Vec<&str> = vulns.iter().map(|v| v.template_id.as_str()).collect();
    assert_eq!(ids, ["tech-detect", "git-config", "CVE-2021-44228"]);
    assert_eq!(vulns[2].severity(), Severity::Critical);
    assert_eq!(vulns[2].info.author, ["melbadry9"]);
    assert!(vulns[2].info.reference.is_empty());
    assert_eq!(vulns[0].extra.get("type"), Some(&serde_json::json!("http")));
}

#[tokio::test]
async fn ports_share_hostnames_per_host() {
    let tree = ReconTree::new();
    tree.full_scan("scanA");

    let ports = service(&tree).ports(&scan("scanA")).await;
    let ids: Vec<(&str, &str, &str)> = ports
        .iter()
        .map(|p| (p.ip.as_str(), p.portid.as_str(), p.state.as_str()))
        .collect();
    assert_eq!(
        ids,
        [
            ("93.184.216.34", "80", "open"),
            ("93.184.216.34", "443", "open"),
            ("93.184.216.34", "1935", "closed"),
            ("203.0.113.10", "22", "open"),
        ]
    );

    assert!(Arc::ptr_eq(&ports[0].hostnames, &ports[2].hostnames));
    assert_eq!(ports[0].hostnames[..], ["www.example.com", "example.com"]);
    assert!(ports[3].hostnames.is_empty());
    assert_eq!(ports[2].service, "", "closed port without a service element");
    assert_eq!(ports[3].banner().as_deref(), Some("OpenSSH 8.9p1 Ubuntu 3ubuntu0.6"));
}

#[tokio::test]
async fn corrupt_artifacts_degrade_to_empty() -> anyhow::Result<()> {
    let tree = ReconTree::new();
    let layout = tree.full_scan("scanA");
    tree.write(layout.portscan(), "<nmaprun><host><address addr=\"10.0.0.1\"/>");
    tree.write(layout.web_full_info(), "{\"url\": ");

    let report = service(&tree).report(&scan("scanA")).await?;
    assert!(report.ports.is_empty());
    assert!(report.hosts.is_empty());
    assert_eq!(report.vulnerabilities.len(), 3, "other categories unaffected");
    Ok(())
}
