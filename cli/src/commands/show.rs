use std::time::Instant;

use colored::*;
use reconview_common::config::Config;
use reconview_common::models::report::ScanReport;
use reconview_common::models::scan::ScanId;
use reconview_common::models::vulnerability::Severity;
use reconview_core::repository::fs::FsScanRepository;
use reconview_core::service::ReconService;

use crate::rprint;
use crate::terminal::print::Detail;
use crate::terminal::{colors, format, print};

pub async fn show(scan: &str, json: bool, cfg: &Config) -> anyhow::Result<()> {
    let scan: ScanId = scan.parse()?;
    let service = ReconService::new(Box::new(FsScanRepository::from_config(cfg)));

    let start_time = Instant::now();
    let report: ScanReport = service.report(&scan).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_overview(&report, cfg);
    print_hosts(&report, cfg);
    print_findings(&report, cfg);
    print_ports(&report, cfg);

    if cfg.quiet == 0 {
        let elapsed: ColoredString = format!("{:.2}s", start_time.elapsed().as_secs_f64()).bold().yellow();
        print::fat_separator();
        print::centerln(&format!("Loaded {} in {elapsed}", scan.as_str().color(colors::PRIMARY)));
    }
    Ok(())
}

fn print_overview(report: &ScanReport, cfg: &Config) {
    print::header(&format!("scan {}", report.scan), cfg.quiet);

    let rows: [(&str, String); 7] = [
        ("Subdomains", report.subdomains.len().to_string()),
        ("Web hosts", report.hosts.len().to_string()),
        ("Screenshots", report.screenshot_count().to_string()),
        ("Findings", report.vulnerabilities.len().to_string()),
        ("Emails", report.osint.emails.len().to_string()),
        ("Dorks", report.osint.dorks.len().to_string()),
        ("Port records", report.ports.len().to_string()),
    ];
    print::set_key_width(rows.iter().map(|(k, _)| *k));
    for (key, value) in rows {
        print::aligned_line(key, value);
    }
}

fn print_hosts(report: &ScanReport, cfg: &Config) {
    print::header("web hosts", cfg.quiet);
    if report.hosts.is_empty() {
        print::no_results("web hosts");
        return;
    }

    for (idx, host) in report.hosts.iter().enumerate() {
        let name = host.url().unwrap_or("No url");
        match cfg.quiet {
            2 => {
                rprint!(name);
            }
            _ => {
                print::tree_head(idx, name);
                print::details(&format::host_to_details(host));
            }
        }
    }
}

fn print_findings(report: &ScanReport, cfg: &Config) {
    print::header("findings by severity", cfg.quiet);
    if report.vulnerabilities.is_empty() {
        print::no_results("findings");
        return;
    }

    let counts = report.severity_counts();
    let details: Vec<Detail> = Severity::ALL
        .iter()
        .filter_map(|sev| counts.get(sev).map(|n| (sev, n)))
        .map(|(sev, n)| (format::severity(*sev).input, n.to_string().bold()))
        .collect();
    print::details(&details);

    let mut notable: Vec<_> = report
        .vulnerabilities
        .iter()
        .filter(|v| v.severity() >= Severity::Medium)
        .collect();
    notable.sort_by_key(|v| std::cmp::Reverse(v.severity()));

    for vuln in notable {
        let line = format!(
            "{} {} {}",
            format::severity(vuln.severity()),
            vuln.info.name.color(colors::TEXT_DEFAULT),
            vuln.matched_at.color(colors::URL)
        );
        match cfg.quiet {
            2 => {
                rprint!(&line);
            }
            _ => print::print_status(line),
        }
    }
}

fn print_ports(report: &ScanReport, cfg: &Config) {
    print::header("open ports", cfg.quiet);
    let grouped = report.open_ports_by_ip();
    if grouped.is_empty() {
        print::no_results("open ports");
        return;
    }

    for (idx, (ip, ports)) in grouped.iter().enumerate() {
        let head = format!("{} {}", ip.color(colors::IPV4_ADDR), format::hostnames(ports[0]));
        print::tree_head(idx, &head);
        let details: Vec<Detail> = ports.iter().copied().map(format::port_to_detail).collect();
        print::details(&details);
        if idx + 1 != grouped.len() {
            rprint!();
        }
    }
}
