// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! shalit-check - password check against a build-time SHA-256 digest
//!
//! The default reference digest is computed by the compiler from a string
//! literal; the binary only carries the 32 digest bytes.
//!
//! # Usage
//!
//! ```bash
//! # Check against the built-in digest (exit 0 = match, 1 = mismatch)
//! shalit-check myverysecretpassword
//!
//! # Check against an explicit digest
//! shalit-check --digest ba7816bf...f20015ad abc
//!
//! # Using a configuration file
//! shalit-check --config shalit.toml hunter2
//!
//! # Print the digest of a value
//! shalit-check hash hunter2
//! ```
//!
//! Exit codes: 0 match, 1 mismatch, 2 usage or configuration error.

mod config;

use clap::{Parser, Subcommand};
use config::{CheckConfig, ConfigError};
use shalit::{compute, sha256, Digest, Verdict, Verifier};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use zeroize::Zeroizing;

/// Built-in reference digest
const DEFAULT_REFERENCE: Digest = sha256!("myverysecretpassword");

const EXIT_MATCH: i32 = 0;
const EXIT_MISMATCH: i32 = 1;
const EXIT_USAGE: i32 = 2;

/// Check a password against a SHA-256 reference digest
#[derive(Parser, Debug)]
#[command(name = "shalit-check")]
#[command(about = "Check a password against a SHA-256 reference digest")]
#[command(version)]
#[command(arg_required_else_help = true, args_conflicts_with_subcommands = true)]
struct Args {
    /// Password to check
    password: Option<String>,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Reference digest as 64 hex digits (overrides the config file)
    #[arg(long, env = "SHALIT_REFERENCE_DIGEST", hide_env_values = true)]
    digest: Option<Digest>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the SHA-256 digest of a value
    Hash {
        /// Value to hash (UTF-8)
        text: String,
    },

    /// Generate example configuration file
    GenConfig {
        /// Output file path
        #[arg(short, long, default_value = "shalit.toml")]
        output: PathBuf,
    },

    /// Validate a configuration file
    Validate {
        /// Configuration file path
        #[arg(short, long)]
        config: PathBuf,
    },
}

fn main() {
    let args = Args::parse();

    let code = match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            EXIT_USAGE
        }
    };
    std::process::exit(code);
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Args) -> Result<i32, ConfigError> {
    // Subcommands never read the config file
    if let Some(cmd) = args.command {
        init_logging(args.log_level.as_deref().unwrap_or("warn"));
        return match cmd {
            Commands::Hash { text } => cmd_hash(&text),
            Commands::GenConfig { output } => cmd_gen_config(output),
            Commands::Validate { config } => cmd_validate(config),
        };
    }

    let config = match args.config {
        Some(ref path) => CheckConfig::from_file(path)?,
        None => CheckConfig::default(),
    };
    init_logging(args.log_level.as_deref().unwrap_or(&config.log_level));

    let Some(password) = args.password else {
        eprintln!("[ERROR] Usage: shalit-check <PASSWORD>");
        return Ok(EXIT_USAGE);
    };
    let password = Zeroizing::new(password);

    let verifier = Verifier::new(resolve_reference(args.digest, &config));
    match verifier.check(password.as_bytes()) {
        Verdict::Match => {
            println!("good password!");
            Ok(EXIT_MATCH)
        }
        Verdict::Mismatch => {
            println!("bad password!");
            Ok(EXIT_MISMATCH)
        }
    }
}

/// Flag or environment first, then the config file, then the built-in digest.
fn resolve_reference(flag: Option<Digest>, config: &CheckConfig) -> Digest {
    if let Some(digest) = flag {
        tracing::debug!("reference digest from --digest / SHALIT_REFERENCE_DIGEST");
        return digest;
    }
    if let Some(digest) = config.reference_digest {
        tracing::debug!("reference digest from config file");
        return digest;
    }
    tracing::debug!("using built-in reference digest");
    DEFAULT_REFERENCE
}

fn cmd_hash(text: &str) -> Result<i32, ConfigError> {
    println!("{}", compute(text.as_bytes()));
    Ok(EXIT_MATCH)
}

fn cmd_gen_config(output: PathBuf) -> Result<i32, ConfigError> {
    let config = CheckConfig {
        reference_digest: Some(DEFAULT_REFERENCE),
        ..Default::default()
    };

    std::fs::write(&output, config.to_toml()?)?;
    println!("Generated configuration file: {}", output.display());
    Ok(EXIT_MATCH)
}

fn cmd_validate(config_path: PathBuf) -> Result<i32, ConfigError> {
    match CheckConfig::from_file(&config_path) {
        Ok(config) => {
            println!("Configuration valid!");
            match config.reference_digest {
                Some(digest) => println!("Reference digest: {}", digest),
                None => println!("Reference digest: built-in"),
            }
            println!("Log level: {}", config.log_level);
            Ok(EXIT_MATCH)
        }
        Err(e) => {
            eprintln!("Configuration invalid: {}", e);
            Ok(EXIT_USAGE)
        }
    }
}
