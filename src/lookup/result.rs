use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};

// `mac` is taken by the looked-up address in flattened output
const VENDOR_MAC_FIELD: &str = "vendor_mac";

/// Vendor details for a single MAC, as returned by the lookup API.
///
/// Field names are lower-cased on the way in so `companyName`,
/// `CompanyName` and `companyname` all end up under `companyname`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LookupResult {
    mac: String,
    #[serde(flatten)]
    fields: BTreeMap<String, Value>,
}

impl LookupResult {
    pub fn new(mac: impl Into<String>, details: Map<String, Value>) -> Self {
        let fields = details
            .into_iter()
            .map(|(key, value)| {
                let key = key.to_lowercase();
                if key == "mac" {
                    (VENDOR_MAC_FIELD.to_string(), value)
                } else {
                    (key, value)
                }
            })
            .collect();
        LookupResult {
            mac: mac.into(),
            fields,
        }
    }

    /// Builds a result from the raw `vendorDetails` value. `null` means the
    /// API knows nothing about the prefix.
    pub fn from_vendor_details(mac: impl Into<String>, details: &Value) -> Option<Self> {
        match details {
            Value::Object(map) => Some(LookupResult::new(mac, map.clone())),
            Value::Null => Some(LookupResult::new(mac, Map::new())),
            _ => None,
        }
    }

    pub fn mac(&self) -> &str {
        &self.mac
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(&name.to_lowercase())
    }

    pub fn fields(&self) -> &BTreeMap<String, Value> {
        &self.fields
    }

    pub fn company_name(&self) -> Option<String> {
        self.field("companyName").and_then(value_to_text)
    }
}

pub fn value_to_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
