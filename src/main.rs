//! Command-line front end: parses one JSON text and dumps the resulting tree.

use clap::Parser;
use loose_json::{Limits, DEFAULT_PARSE_DEPTH};
use std::io::Read;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "loose-json")]
#[command(about = "Parse a JSON text and print the decoded value tree", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON text to parse. Read from stdin when omitted.
    text: Option<String>,

    /// Print the value re-serialized as compact JSON instead of the tree dump
    #[arg(long)]
    serialize: bool,

    /// Deepest array/object nesting accepted by the parser
    #[arg(long, default_value_t = DEFAULT_PARSE_DEPTH)]
    max_depth: usize,
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(msg) => {
            eprintln!("error: {msg}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<String, String> {
    let text = match cli.text {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|err| format!("reading stdin: {err}"))?;
            buf
        }
    };

    let limits = Limits::new().with_parse_depth(cli.max_depth);
    let value = loose_json::parse_with_limits(&text, limits).map_err(|err| err.to_string())?;

    if cli.serialize {
        loose_json::serialize_with_limits(&value, limits).map_err(|err| err.to_string())
    } else {
        Ok(format!("{value:#?}"))
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
