use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// One `(host, port)` pair from the port scan.
///
/// `hostnames` belongs to the host, not the port: every record of the same host points
/// at the same list. Attributes missing from the report are empty strings so the record
/// shape never changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortRecord {
    pub ip: String,
    pub hostnames: Arc<[String]>,
    pub portid: String,
    pub protocol: String,
    pub state: String,
    pub service: String,
    pub product: String,
    pub version: String,
}

impl PortRecord {
    pub fn is_open(&self) -> bool {
        self.state == "open"
    }

    /// `product version`, or whichever half is present.
    pub fn banner(&self) -> Option<String> {
        match (self.product.is_empty(), self.version.is_empty()) {
            (true, true) => None,
            (false, true) => Some(self.product.clone()),
            (true, false) => Some(self.version.clone()),
            (false, false) => Some(format!("{} {}", self.product, self.version)),
        }
    }
}
