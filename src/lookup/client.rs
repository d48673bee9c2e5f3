use std::collections::HashSet;

use serde_json::Value;
use tracing::{debug, info};

use super::result::LookupResult;
use super::transport::Transport;
use super::validation::{validate_api_key, validate_mac};
use crate::errors::{LookupError, Result};
use crate::utils::common::Progress;

pub struct MacLookupClient<T: Transport> {
    transport: T,
    progress: Progress,
}

impl<T: Transport> MacLookupClient<T> {
    pub fn new(transport: T, progress: Progress) -> Self {
        MacLookupClient {
            transport,
            progress,
        }
    }

    pub fn query(&self, mac: &str, api_key: &str) -> Result<LookupResult> {
        let response = self.transport.get(mac, api_key)?;
        if response.status != 200 {
            return Err(LookupError::Api {
                mac: mac.to_string(),
                status: response.status,
            });
        }

        let data: Value =
            serde_json::from_str(&response.body).map_err(|e| LookupError::Decode {
                mac: mac.to_string(),
                reason: e.to_string(),
            })?;
        let details = data.get("vendorDetails").unwrap_or(&Value::Null);
        LookupResult::from_vendor_details(mac, details).ok_or_else(|| LookupError::Decode {
            mac: mac.to_string(),
            reason: "vendorDetails is not an object".to_string(),
        })
    }

    /// Looks up every distinct MAC in a comma separated list, one request at
    /// a time. The first failure of any kind aborts the batch.
    pub fn lookup_all(&self, mac_list: &str, api_key: Option<&str>) -> Result<Vec<LookupResult>> {
        let api_key = validate_api_key(api_key)?;

        let mut seen = HashSet::new();
        let macs: Vec<&str> = mac_list
            .split(',')
            .map(str::trim)
            .filter(|mac| seen.insert(*mac))
            .collect();
        debug!(requested = macs.len(), "unique MAC addresses to look up");

        let mut results = Vec::with_capacity(macs.len());
        for mac in macs {
            validate_mac(mac)?;
            self.progress
                .report(&format!("Looking up vendor for {}...", mac));
            let result = self.query(mac, api_key)?;
            info!(mac, company = ?result.company_name(), "lookup complete");
            results.push(result);
        }
        Ok(results)
    }
}
