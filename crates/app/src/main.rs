//! huffviz: command-line driver for the Huffman codec.
//!
//! With no arguments it generates a sample text, encodes it, prints the
//! report, and verifies the round trip. Other modes serve the JSON
//! contract (`--json`, `--encode-request`, `--decode-request`) or the
//! binary container (`--compress`, `--decompress`).

mod config;
mod report;
mod textgen;

use std::error::Error;
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use std::process::ExitCode;

use huffviz_core::api::{self, DecodeRequest, EncodeRequest, ErrorResponse};
use huffviz_core::container;
use serde::Serialize;

use config::{Config, Mode};

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("error: {message}");
            eprintln!("try --help for usage");
            return ExitCode::from(2);
        }
    };

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_failure(&config.mode, err.as_ref());
            ExitCode::FAILURE
        }
    }
}

/// JSON modes put the error envelope on stdout for the caller to parse;
/// everything else goes to stderr.
fn report_failure(mode: &Mode, err: &dyn Error) {
    match mode {
        Mode::Json | Mode::EncodeRequest(_) | Mode::DecodeRequest(_) => {
            let envelope = ErrorResponse {
                error: err.to_string(),
            };
            match serde_json::to_string_pretty(&envelope) {
                Ok(body) => println!("{body}"),
                Err(_) => eprintln!("error: {err}"),
            }
        }
        _ => eprintln!("error: {err}"),
    }
}

fn run(config: &Config) -> Result<(), Box<dyn Error>> {
    match &config.mode {
        Mode::Report => run_report(config),
        Mode::Json => run_json(config),
        Mode::EncodeRequest(path) => run_encode_request(path),
        Mode::DecodeRequest(path) => run_decode_request(path),
        Mode::Compress(path) => run_compress(config, path),
        Mode::Decompress(path) => run_decompress(config, path),
    }
}

/// Resolve the input text: inline beats file beats generated sample.
/// Returns the text and a one-line description for the report header.
fn load_text(config: &Config) -> Result<(String, String), Box<dyn Error>> {
    if let Some(text) = &config.text {
        return Ok((text.clone(), "inline text".to_string()));
    }
    if let Some(path) = &config.input_file {
        let text = fs::read_to_string(path)
            .map_err(|err| format!("{}: {err}", path.display()))?;
        return Ok((text, path.display().to_string()));
    }
    let text = textgen::generate_text(config.seed, config.sample_chars, config.distribution);
    let source = format!(
        "generated sample (seed {}, {} chars, {} distribution)",
        config.seed, config.sample_chars, config.distribution
    );
    Ok((text, source))
}

fn run_report(config: &Config) -> Result<(), Box<dyn Error>> {
    let (text, source) = load_text(config)?;
    println!("=== Session ===");
    println!("Source: {source}");
    println!();

    let response = api::encode(&EncodeRequest { text: text.clone() })?;
    report::print_report(&text, &response, config.show_tree);

    if config.verify {
        let decoded = api::decode(&DecodeRequest {
            encoded: response.encoded.clone(),
            frequency_table: response.frequency_table.clone(),
        })?;
        println!();
        if decoded.decoded == text {
            println!("Round trip: OK ({} characters match)", text.chars().count());
        } else {
            return Err("round trip FAILED: decoded text differs from input".into());
        }
    }
    Ok(())
}

fn run_json(config: &Config) -> Result<(), Box<dyn Error>> {
    let (text, _) = load_text(config)?;
    let response = api::encode(&EncodeRequest { text })?;
    print_json(&response)
}

fn run_encode_request(path: &Path) -> Result<(), Box<dyn Error>> {
    let body = read_input(path)?;
    let request: EncodeRequest =
        serde_json::from_str(&body).map_err(|err| format!("invalid encode request: {err}"))?;
    let response = api::encode(&request)?;
    print_json(&response)
}

fn run_decode_request(path: &Path) -> Result<(), Box<dyn Error>> {
    let body = read_input(path)?;
    let request: DecodeRequest =
        serde_json::from_str(&body).map_err(|err| format!("invalid decode request: {err}"))?;
    let response = api::decode(&request)?;
    print_json(&response)
}

fn run_compress(config: &Config, input: &Path) -> Result<(), Box<dyn Error>> {
    let text = fs::read_to_string(input)
        .map_err(|err| format!("{}: {err}", input.display()))?;
    let bytes = container::compress(&text)?;

    // from_args guarantees --out is present for this mode
    let out = config
        .output_file
        .as_ref()
        .ok_or("--compress requires --out")?;
    fs::write(out, &bytes).map_err(|err| format!("{}: {err}", out.display()))?;

    println!("Input:  {} bytes ({} characters)", text.len(), text.chars().count());
    println!("Output: {} bytes -> {}", bytes.len(), out.display());
    println!(
        "Packed ratio: {:.3}",
        bytes.len() as f64 / text.len() as f64
    );
    Ok(())
}

fn run_decompress(config: &Config, input: &Path) -> Result<(), Box<dyn Error>> {
    let bytes = fs::read(input).map_err(|err| format!("{}: {err}", input.display()))?;
    let text = container::decompress(&bytes)?;

    match &config.output_file {
        Some(out) => {
            fs::write(out, &text).map_err(|err| format!("{}: {err}", out.display()))?;
            println!("Input:  {} bytes", bytes.len());
            println!("Output: {} characters -> {}", text.chars().count(), out.display());
        }
        None => {
            print!("{text}");
            io::stdout().flush()?;
        }
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn read_input(path: &Path) -> Result<String, Box<dyn Error>> {
    if path == Path::new("-") {
        let mut body = String::new();
        io::stdin().read_to_string(&mut body)?;
        Ok(body)
    } else {
        Ok(fs::read_to_string(path).map_err(|err| format!("{}: {err}", path.display()))?)
    }
}
