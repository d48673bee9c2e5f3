mod cli;
mod errors;
mod lookup;
mod utils;

use std::env;
use std::io;

use cli::{parse_args, API_KEY_ENV, API_URL_ENV};
use lookup::client::MacLookupClient;
use lookup::transport::HttpTransport;
use tracing::debug;
use utils::common::{
    print_error, redact_api_key, setup_logging, Progress, EXIT_CODE_LOOKUP_FAILED,
    EXIT_CODE_REPORTED, LOOKUP_FAILED_MSG,
};
use utils::output::Output;

fn main() {
    // Parse command-line arguments
    let opts = match parse_args(
        env::args().collect(),
        &mut io::stdout(),
        &mut io::stderr(),
    ) {
        Ok(opts) => opts,
        Err(code) => std::process::exit(code),
    };
    setup_logging(opts.verbose);

    let progress = Progress::new(opts.verbose, opts.json);
    progress.report("Verbose mode enabled!");

    // Get API Key, a missing key is reported by the lookup itself
    let api_key = env::var(API_KEY_ENV).ok();
    if let Some(key) = api_key.as_deref().filter(|k| !k.is_empty()) {
        progress.report(&format!("Using API key {}", redact_api_key(key)));
    }

    let api_url = opts.resolve_api_url(env::var(API_URL_ENV).ok());
    debug!(%api_url, timeout_secs = opts.timeout, "lookup endpoint configured");
    let transport = match HttpTransport::new(&api_url, opts.timeout()) {
        Ok(transport) => transport,
        Err(e) => {
            println!("{}", LOOKUP_FAILED_MSG);
            print_error(&e.to_string(), EXIT_CODE_LOOKUP_FAILED);
            return;
        }
    };
    let client = MacLookupClient::new(transport, progress);

    match client.lookup_all(&opts.mac, api_key.as_deref()) {
        Ok(results) => {
            if opts.json {
                match Output::json(&results) {
                    Ok(json) => println!("{}", json),
                    Err(e) => print_error(&e.to_string(), EXIT_CODE_LOOKUP_FAILED),
                }
            } else {
                println!("{}", Output::format_results(&results, opts.all_fields));
            }
        }
        Err(e) if e.is_fatal() => {
            println!("{}", LOOKUP_FAILED_MSG);
            print_error(&e.to_string(), EXIT_CODE_LOOKUP_FAILED);
        }
        Err(e) => print_error(&e.to_string(), EXIT_CODE_REPORTED),
    }
}
