use crate::terminal::colors;
use crate::terminal::print::Detail;
use colored::*;
use reconview_common::models::host::HostRecord;
use reconview_common::models::port::PortRecord;
use reconview_common::models::vulnerability::Severity;

pub fn severity(sev: Severity) -> ColoredString {
    let label = sev.to_string();
    match sev {
        Severity::Critical => label.color(colors::SEVERITY_CRITICAL).bold(),
        Severity::High => label.color(colors::SEVERITY_HIGH).bold(),
        Severity::Medium => label.color(colors::SEVERITY_MEDIUM),
        Severity::Low => label.color(colors::SEVERITY_LOW),
        Severity::Info => label.color(colors::SEVERITY_INFO),
        Severity::Unknown => label.dimmed(),
    }
}

/// `22/tcp ssh (OpenSSH 8.9p1)`
pub fn port_to_detail(port: &PortRecord) -> Detail {
    let key = format!("{}/{}", port.portid, port.protocol);
    let mut value = if port.service.is_empty() {
        String::from("unknown")
    } else {
        port.service.clone()
    };
    if let Some(banner) = port.banner() {
        value.push_str(&format!(" ({banner})"));
    }
    (key, value.color(colors::TEXT_DEFAULT))
}

pub fn host_to_details(host: &HostRecord) -> Vec<Detail> {
    let mut details = Vec::new();
    let fields = [
        ("Title", host.title()),
        ("Server", host.webserver()),
        ("Type", host.content_type()),
    ];
    for (key, value) in fields {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            details.push((key.to_string(), value.color(colors::TEXT_DEFAULT)));
        }
    }
    if let Some(shot) = host.screenshot() {
        details.push(("Shot".to_string(), shot.color(colors::ACCENT)));
    }
    details
}

pub fn hostnames(port: &PortRecord) -> ColoredString {
    if port.hostnames.is_empty() {
        return "No hostname".dimmed();
    }
    port.hostnames.join(", ").color(colors::HOSTNAME)
}
