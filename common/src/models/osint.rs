use serde::{Deserialize, Serialize};

/// Harvested OSINT for a scan. Either list is empty when its file is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OsintBundle {
    pub emails: Vec<String>,
    pub dorks: Vec<String>,
}

impl OsintBundle {
    pub fn is_empty(&self) -> bool {
        self.emails.is_empty() && self.dorks.is_empty()
    }
}
