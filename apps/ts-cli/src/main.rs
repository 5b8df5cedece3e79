use clap::{Parser, Subcommand};
use serde_json::Value;
use std::io::{self, BufRead, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use ts_api::{health, run_analysis, Defaults};

#[derive(Parser)]
#[command(name = "ts-cli")]
#[command(about = "thermsink CLI - heat-sink junction-temperature analysis", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve one analysis request (JSON payload)
    Solve {
        /// Path to the request JSON file (stdin when omitted)
        input: Option<PathBuf>,
        /// Pretty-print the response document
        #[arg(long)]
        pretty: bool,
    },
    /// Answer newline-delimited JSON requests on stdin until EOF
    Serve,
    /// Print the liveness document
    Health,
}

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Solve { input, pretty } => cmd_solve(input.as_deref(), pretty),
        Commands::Serve => cmd_serve(),
        Commands::Health => cmd_health(),
    }
}

fn cmd_solve(input: Option<&Path>, pretty: bool) -> ExitCode {
    let raw = match read_payload(input) {
        Ok(raw) => raw,
        Err(err) => {
            eprintln!("error: failed to read request: {err}");
            return ExitCode::FAILURE;
        }
    };

    let payload: Value = match serde_json::from_str(&raw) {
        Ok(payload) => payload,
        Err(_) => {
            println!("{}", error_doc("Request must be valid JSON"));
            return ExitCode::FAILURE;
        }
    };

    match run_analysis(&payload, &Defaults::default()) {
        Ok(response) => {
            let doc = if pretty {
                serde_json::to_string_pretty(&response)
            } else {
                serde_json::to_string(&response)
            };
            match doc {
                Ok(doc) => {
                    println!("{doc}");
                    ExitCode::SUCCESS
                }
                Err(err) => {
                    eprintln!("error: failed to serialize response: {err}");
                    ExitCode::FAILURE
                }
            }
        }
        Err(err) => {
            if !err.is_client_error() {
                tracing::error!(error = %err, "analysis failed");
            }
            println!("{}", error_doc(&err.client_message()));
            ExitCode::FAILURE
        }
    }
}

/// One request per stdin line, one response document per stdout line.
/// Bad input is answered inline, never crashes the loop.
fn cmd_serve() -> ExitCode {
    tracing::info!("serving NDJSON requests on stdin");

    let defaults = Defaults::default();
    let stdin = io::stdin();
    let stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                eprintln!("error: stdin read failed: {err}");
                return ExitCode::FAILURE;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let reply = reply_for(&line, &defaults);
        let mut out = stdout.lock();
        if writeln!(out, "{reply}").and_then(|()| out.flush()).is_err() {
            // Downstream closed the pipe; nothing left to serve
            return ExitCode::SUCCESS;
        }
    }

    ExitCode::SUCCESS
}

fn cmd_health() -> ExitCode {
    match serde_json::to_string(&health()) {
        Ok(doc) => {
            println!("{doc}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn read_payload(input: Option<&Path>) -> io::Result<String> {
    match input {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut raw = String::new();
            io::stdin().read_to_string(&mut raw)?;
            Ok(raw)
        }
    }
}

fn reply_for(line: &str, defaults: &Defaults) -> String {
    let payload: Value = match serde_json::from_str(line) {
        Ok(payload) => payload,
        Err(_) => return error_doc("Request must be valid JSON"),
    };

    match run_analysis(&payload, defaults) {
        Ok(response) => serde_json::to_string(&response)
            .unwrap_or_else(|_| error_doc("Internal server error")),
        Err(err) => {
            if !err.is_client_error() {
                tracing::error!(error = %err, "analysis failed");
            }
            error_doc(&err.client_message())
        }
    }
}

fn error_doc(message: &str) -> String {
    serde_json::json!({ "error": message }).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const REFERENCE_REQUEST: &str = r#"{
        "processor": {"die_length": 0.0525, "die_width": 0.045, "power": 150.0},
        "heat_sink": {"sink_length": 0.09, "sink_width": 0.116, "base_thickness": 0.0025,
                      "number_of_fins": 60, "fin_thickness": 0.0008, "fin_height": 0.0245},
        "tim": {"thermal_conductivity": 4.0, "thickness": 0.0001},
        "air": {"velocity": 1.0, "thermal_conductivity": 0.0262,
                "kinematic_viscosity": 1.57e-5, "prandtl_number": 0.71},
        "ambient": {"temperature": 25.0},
        "junction_to_case_resistance": 0.1
    }"#;

    #[test]
    fn serve_reply_for_valid_request() {
        let line = REFERENCE_REQUEST.replace('\n', " ");
        let reply = reply_for(&line, &Defaults::default());
        let doc: Value = serde_json::from_str(&reply).unwrap();
        assert!(doc["junction_temperature"].as_f64().unwrap() > 55.0);
        assert!(doc["resistances"]["total"].as_f64().unwrap() > 0.0);
        assert!(doc.get("error").is_none());
    }

    #[test]
    fn serve_reply_for_garbage_is_an_error_document() {
        let reply = reply_for("not json at all", &Defaults::default());
        let doc: Value = serde_json::from_str(&reply).unwrap();
        assert_eq!(doc["error"], "Request must be valid JSON");
    }

    #[test]
    fn serve_reply_for_bad_field_names_the_field() {
        let line = REFERENCE_REQUEST
            .replace('\n', " ")
            .replace("\"power\": 150.0", "\"power\": -1.0");
        let reply = reply_for(&line, &Defaults::default());
        let doc: Value = serde_json::from_str(&reply).unwrap();
        assert!(doc["error"].as_str().unwrap().contains("processor.power"));
    }
}
