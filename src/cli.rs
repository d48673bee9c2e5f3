use std::io::Write;
use std::time::Duration;

use argparse::{ArgumentParser, Print, Store, StoreOption, StoreTrue};

use crate::lookup::transport::DEFAULT_API_URL;

pub const API_KEY_ENV: &str = "API_KEY";
pub const API_URL_ENV: &str = "MAC_LOOKUP_API_URL";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq)]
pub struct CliOptions {
    /// Upper-cased comma separated list, exactly as given otherwise.
    pub mac: String,
    pub json: bool,
    pub all_fields: bool,
    pub api_url: Option<String>,
    pub timeout: u64,
    pub verbose: bool,
}

impl CliOptions {
    /// Flag wins over the environment, the environment over the built-in endpoint.
    pub fn resolve_api_url(&self, from_env: Option<String>) -> String {
        self.api_url
            .clone()
            .or(from_env.filter(|url| !url.is_empty()))
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

/// Parses `args` (program name first). On `Err` the parser has already
/// written help, version or a usage error; the value is the exit code.
pub fn parse_args(
    args: Vec<String>,
    stdout: &mut dyn Write,
    stderr: &mut dyn Write,
) -> Result<CliOptions, i32> {
    let mut mac = String::new();
    let mut json = false;
    let mut all_fields = false;
    let mut api_url: Option<String> = None;
    let mut timeout = DEFAULT_TIMEOUT_SECS;
    let mut verbose = false;

    {
        let mut ap = ArgumentParser::new();
        ap.set_description("Gathers company name from https://macaddress.io");
        ap.refer(&mut mac)
            .add_option(
                &["-m", "--mac"],
                Store,
                "The MAC address, or a comma separated list of mac addresses to query.",
            )
            .required();
        ap.refer(&mut json).add_option(
            &["-j", "--json"],
            StoreTrue,
            "Print results as JSON instead of a table",
        );
        ap.refer(&mut all_fields).add_option(
            &["-a", "--all-fields"],
            StoreTrue,
            "Show every vendor field returned by the API, not just the company",
        );
        ap.refer(&mut api_url).add_option(
            &["-u", "--api-url"],
            StoreOption,
            "Override the lookup endpoint (also MAC_LOOKUP_API_URL)",
        );
        ap.refer(&mut timeout).add_option(
            &["-t", "--timeout"],
            Store,
            "Per-request timeout in seconds",
        );
        ap.refer(&mut verbose)
            .add_option(&["-v", "--verbose"], StoreTrue, "Enable verbose mode!");
        ap.add_option(
            &["-V", "--version"],
            Print(env!("CARGO_PKG_VERSION").to_string()),
            "Show version",
        );
        ap.parse(args, stdout, stderr)?;
    }

    if timeout == 0 {
        let _ = writeln!(stderr, "Error: --timeout must be at least 1 second");
        return Err(2);
    }

    Ok(CliOptions {
        mac: mac.to_uppercase(),
        json,
        all_fields,
        api_url,
        timeout,
        verbose,
    })
}
