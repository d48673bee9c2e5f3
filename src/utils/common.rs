use tracing_subscriber::EnvFilter;

// define static exit codes and message
pub const EXIT_CODE_REPORTED: i32 = 101;
pub const EXIT_CODE_LOOKUP_FAILED: i32 = 102;
pub const LOOKUP_FAILED_MSG: &str = "Exception caught while making requests to the api.macaddress.io API";

pub fn print_error(error: &str, error_code: i32) {
    if error.to_lowercase().starts_with("warning") {
        println!("[❕] {}", error);
    } else {
        println!("[‼️] {}", error);
    }
    if error_code != EXIT_CODE_REPORTED {
        std::process::exit(error_code);
    }
}

/// Where `[+]` progress lines go. JSON output owns stdout, so they move
/// to stderr there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Progress {
    Quiet,
    Stdout,
    Stderr,
}

impl Progress {
    pub fn new(verbose: bool, json: bool) -> Self {
        match (verbose, json) {
            (false, _) => Progress::Quiet,
            (true, false) => Progress::Stdout,
            (true, true) => Progress::Stderr,
        }
    }

    pub fn report(&self, message: &str) {
        match self {
            Progress::Quiet => {}
            Progress::Stdout => println!("[+] {}", message),
            Progress::Stderr => eprintln!("[+] {}", message),
        }
    }
}

/// Logs go to stderr so the table or JSON on stdout stays clean.
pub fn setup_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug,reqwest=info,hyper=info")
        } else {
            EnvFilter::new("warn")
        }
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

pub fn redact_api_key(api_key: &str) -> String {
    let visible: String = api_key.chars().take(4).collect();
    if api_key.chars().count() <= 4 {
        return "********".to_string();
    }
    format!("{}********", visible)
}
