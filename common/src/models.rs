//! # Domain Models
//!
//! Read-only views of what the recon pipeline wrote to disk. Every value here is rebuilt
//! from the files on each request and never mutated afterwards.
//!
//! ## Entities
//! * [`scan::ScanId`]: The directory name of one completed scan.
//! * [`host::HostRecord`]: One probed web host, kept as an open JSON record.
//! * [`vulnerability::VulnerabilityRecord`]: One nuclei finding.
//! * [`port::PortRecord`]: One `(host, port)` pair from the port scan.
//! * [`osint::OsintBundle`]: Harvested emails and dorks.
//! * [`report::ScanReport`]: Everything above for a single scan.

pub mod host;
pub mod osint;
pub mod port;
pub mod report;
pub mod scan;
pub mod vulnerability;
