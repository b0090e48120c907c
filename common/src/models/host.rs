use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const URL_KEY: &str = "url";
pub const SCREENSHOT_KEY: &str = "screenshot";

/// One probed web host as written by the HTTP prober.
///
/// The prober emits far more keys than the dashboard knows about, so the record is the
/// raw JSON object with typed accessors for the handful of keys that matter. Unknown
/// keys survive a round trip untouched and in their original order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HostRecord(Map<String, Value>);

impl HostRecord {
    pub fn url(&self) -> Option<&str> {
        self.str_field(URL_KEY)
    }

    pub fn title(&self) -> Option<&str> {
        self.str_field("title")
    }

    pub fn webserver(&self) -> Option<&str> {
        self.str_field("webserver")
    }

    pub fn content_type(&self) -> Option<&str> {
        self.str_field("content_type")
    }

    pub fn screenshot(&self) -> Option<&str> {
        self.str_field(SCREENSHOT_KEY)
    }

    pub fn set_screenshot(&mut self, reference: String) {
        self.0.insert(SCREENSHOT_KEY.to_string(), Value::String(reference));
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }
}

impl From<Map<String, Value>> for HostRecord {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl TryFrom<Value> for HostRecord {
    /// Hands the value back when it is not a JSON object.
    type Error = Value;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(other),
        }
    }
}
