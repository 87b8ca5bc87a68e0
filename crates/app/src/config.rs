//! Configuration for the huffviz CLI.
//!
//! Handles parsing command-line arguments and filling in sensible
//! defaults (including a reproducible seed for generated sample text).
//!
//! # Philosophy
//!
//! The tool should work with ZERO arguments: generate a sample text,
//! encode it, and print the full report. The seed is always shown so
//! runs are reproducible.

use std::path::PathBuf;

use crate::textgen::Distribution;

/// What the run does with its input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Human-readable encode report (default)
    Report,
    /// Print the encode response as JSON
    Json,
    /// Read an encode request JSON from a file ('-' = stdin)
    EncodeRequest(PathBuf),
    /// Read a decode request JSON from a file ('-' = stdin)
    DecodeRequest(PathBuf),
    /// Pack a text file into a binary container
    Compress(PathBuf),
    /// Unpack a binary container back to text
    Decompress(PathBuf),
}

/// Complete configuration for one run.
#[derive(Debug, Clone)]
pub struct Config {
    // === Input ===
    /// Inline text to encode (overrides generation)
    pub text: Option<String>,

    /// Input text file (overrides generation)
    pub input_file: Option<PathBuf>,

    // === Sample generation ===
    /// Seed for generated sample text
    pub seed: u64,

    /// Length of generated sample text in characters
    pub sample_chars: usize,

    /// Character distribution of the sample
    pub distribution: Distribution,

    // === Behavior ===
    pub mode: Mode,

    /// Output path for --compress / --decompress
    pub output_file: Option<PathBuf>,

    /// Whether the report renders the laid-out tree
    pub show_tree: bool,

    /// Whether the report decodes back and checks the round trip
    pub verify: bool,
}

impl Config {
    /// Parse configuration from command-line arguments.
    ///
    /// If --seed is not provided, a time-based seed is used (and printed
    /// by the report, so any run can be reproduced).
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        let mut text: Option<String> = None;
        let mut input_file: Option<PathBuf> = None;
        let mut seed: Option<u64> = None;
        let mut sample_chars: Option<usize> = None;
        let mut distribution: Option<Distribution> = None;
        let mut mode: Option<Mode> = None;
        let mut output_file: Option<PathBuf> = None;
        let mut show_tree = false;
        let mut verify = true;

        fn set_mode(slot: &mut Option<Mode>, new: Mode, flag: &str) -> Result<(), String> {
            if slot.is_some() {
                return Err(format!("{flag} conflicts with an earlier mode flag"));
            }
            *slot = Some(new);
            Ok(())
        }

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--text" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--text requires a string".to_string());
                    }
                    text = Some(args[i].clone());
                }
                "--in" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--in requires a path".to_string());
                    }
                    input_file = Some(PathBuf::from(&args[i]));
                }
                "--seed" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--seed requires a number".to_string());
                    }
                    seed = Some(args[i].parse().map_err(|_| "invalid seed")?);
                }
                "--sample-chars" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--sample-chars requires a number".to_string());
                    }
                    sample_chars = Some(args[i].parse().map_err(|_| "invalid sample-chars")?);
                }
                "--distribution" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--distribution requires a name".to_string());
                    }
                    distribution = Some(args[i].parse()?);
                }
                "--json" => {
                    set_mode(&mut mode, Mode::Json, "--json")?;
                }
                "--encode-request" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--encode-request requires a path".to_string());
                    }
                    set_mode(
                        &mut mode,
                        Mode::EncodeRequest(PathBuf::from(&args[i])),
                        "--encode-request",
                    )?;
                }
                "--decode-request" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--decode-request requires a path".to_string());
                    }
                    set_mode(
                        &mut mode,
                        Mode::DecodeRequest(PathBuf::from(&args[i])),
                        "--decode-request",
                    )?;
                }
                "--compress" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--compress requires a path".to_string());
                    }
                    set_mode(
                        &mut mode,
                        Mode::Compress(PathBuf::from(&args[i])),
                        "--compress",
                    )?;
                }
                "--decompress" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--decompress requires a path".to_string());
                    }
                    set_mode(
                        &mut mode,
                        Mode::Decompress(PathBuf::from(&args[i])),
                        "--decompress",
                    )?;
                }
                "--out" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--out requires a path".to_string());
                    }
                    output_file = Some(PathBuf::from(&args[i]));
                }
                "--show-tree" => {
                    show_tree = true;
                }
                "--no-verify" => {
                    verify = false;
                }
                "--help" | "-h" => {
                    print_help();
                    std::process::exit(0);
                }
                _ => {
                    return Err(format!("unknown argument: {}", args[i]));
                }
            }
            i += 1;
        }

        if text.is_some() && input_file.is_some() {
            return Err("use either --text or --in, not both".to_string());
        }

        let mode = mode.unwrap_or(Mode::Report);
        if matches!(mode, Mode::Compress(_)) && output_file.is_none() {
            return Err("--compress requires --out".to_string());
        }

        // Determine seed (explicit or time-based)
        let seed = seed.unwrap_or_else(|| {
            use std::time::{SystemTime, UNIX_EPOCH};
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap()
                .as_millis() as u64
        });

        Ok(Config {
            text,
            input_file,
            seed,
            sample_chars: sample_chars.unwrap_or(400),
            distribution: distribution.unwrap_or(Distribution::English),
            mode,
            output_file,
            show_tree,
            verify,
        })
    }
}

fn print_help() {
    println!("huffviz: Huffman text codec with visualization-ready output");
    println!();
    println!("USAGE:");
    println!("    huffviz [OPTIONS]");
    println!();
    println!("INPUT (default: generated sample):");
    println!("    --text <STRING>         Encode this text");
    println!("    --in <PATH>             Encode the contents of this file");
    println!("    --seed <N>              Sample generation seed (default: time-based)");
    println!("    --sample-chars <N>      Sample length (default: 400)");
    println!("    --distribution <NAME>   uniform | english | repetitive (default: english)");
    println!();
    println!("MODES (default: human-readable report):");
    println!("    --json                  Print the encode response as JSON");
    println!("    --encode-request <PATH> Serve an encode request JSON ('-' = stdin)");
    println!("    --decode-request <PATH> Serve a decode request JSON ('-' = stdin)");
    println!("    --compress <PATH>       Pack a text file into a container (needs --out)");
    println!("    --decompress <PATH>     Unpack a container; prints text unless --out");
    println!();
    println!("OPTIONS:");
    println!("    --out <PATH>            Output path for --compress / --decompress");
    println!("    --show-tree             Render the laid-out tree in the report");
    println!("    --no-verify             Skip the decode-back check in the report");
    println!("    --help, -h              Print this help");
    println!();
    println!("EXAMPLES:");
    println!("    huffviz                                  # Encode a generated sample");
    println!("    huffviz --seed 42 --show-tree            # Deterministic run with tree");
    println!("    huffviz --text 'aaabbc' --json           # Contract JSON for one input");
    println!("    huffviz --compress notes.txt --out n.hvz # Pack a file");
    println!("    huffviz --decompress n.hvz               # Unpack to stdout");
    println!();
}
