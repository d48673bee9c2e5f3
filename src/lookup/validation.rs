use lazy_static::lazy_static;
use regex::Regex;

use crate::errors::{LookupError, Result};

// 12 bare hex digits, or 17 with ':' / '.' delimiters
const VALID_MAC_LENGTHS: [usize; 2] = [12, 17];

lazy_static! {
    static ref HEX_ONLY: Regex = Regex::new(r"^[0-9A-F:.]+$").unwrap();
}

pub fn validate_api_key(api_key: Option<&str>) -> Result<&str> {
    match api_key {
        Some(key) if !key.is_empty() => Ok(key),
        _ => Err(LookupError::validation("API key was not provided.")),
    }
}

pub fn validate_mac_length(mac: &str) -> Result<()> {
    if !VALID_MAC_LENGTHS.contains(&mac.chars().count()) {
        return Err(LookupError::validation(format!(
            "MAC address ({}) did not pass length validation.",
            mac
        )));
    }
    Ok(())
}

/// Only upper-case hex digits and delimiters pass, callers upper-case first.
pub fn validate_hex_only(mac: &str) -> Result<()> {
    if !HEX_ONLY.is_match(mac) {
        return Err(LookupError::validation(format!(
            "MAC Address ({}) did not pass hex-only validation.",
            mac
        )));
    }
    Ok(())
}

pub fn validate_mac(mac: &str) -> Result<()> {
    validate_mac_length(mac)?;
    validate_hex_only(mac)
}
