//! `classicrypt` command-line driver.
//!
//! Selects a cipher from a TOML file (`--config`) or from flags
//! (`--cipher`, `--key`, ...) and runs one operation on the given text.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use classicrypt::{AnyCipher, Cipher, CipherError, CipherSpec, Config};

#[derive(Debug, Parser)]
#[command(name = "classicrypt", version, about = "Classical text ciphers")]
struct Cli {
    /// TOML file with a `[cipher]` table; overrides the cipher flags.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Cipher to use when no configuration file is given.
    #[arg(long, value_enum, global = true)]
    cipher: Option<Kind>,

    /// Key for Playfair and Vigenère.
    #[arg(short, long, global = true)]
    key: Option<String>,

    /// Vigenère autokey mode.
    #[arg(long, global = true)]
    autokey: bool,

    /// Caesar shift (default 3).
    #[arg(long, global = true)]
    shift: Option<u8>,

    /// Monoalphabetic table, one symbol per letter A..Z.
    #[arg(long, global = true)]
    table: Option<String>,

    /// Increase log verbosity (-v, -vv, -vvv). `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Kind {
    Caesar,
    Monoalphabetic,
    Playfair,
    Vigenere,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Encrypt TEXT and print the ciphertext.
    Encrypt { text: String },
    /// Decrypt TEXT and print the plaintext.
    Decrypt { text: String },
    /// Encrypt TEXT, then decrypt the result; print both.
    Demo { text: String },
    /// Print the Playfair grid for the configured key.
    Grid,
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn spec_from_flags(cli: &Cli) -> Result<CipherSpec, CipherError> {
    let required = |kind: &'static str, parameter: &'static str, value: &Option<String>| {
        value
            .clone()
            .ok_or(CipherError::MissingParameter { kind, parameter })
    };
    Ok(match cli.cipher.unwrap_or(Kind::Playfair) {
        Kind::Caesar => CipherSpec::Caesar { shift: cli.shift },
        Kind::Monoalphabetic => CipherSpec::Monoalphabetic {
            table: required("monoalphabetic", "table", &cli.table)?,
        },
        Kind::Playfair => CipherSpec::Playfair {
            key: required("playfair", "key", &cli.key)?,
        },
        Kind::Vigenere => CipherSpec::Vigenere {
            key: required("vigenere", "key", &cli.key)?,
            autokey: cli.autokey,
        },
    })
}

fn resolve_spec(cli: &Cli) -> Result<CipherSpec> {
    match &cli.config {
        Some(path) => {
            let config = Config::load(path)
                .with_context(|| format!("loading configuration from {}", path.display()))?;
            Ok(config.cipher)
        }
        None => Ok(spec_from_flags(cli)?),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let spec = resolve_spec(&cli)?;
    debug!(?spec, "resolved cipher");
    let cipher = spec.build().context("building cipher")?;
    info!(cipher = cipher.name(), "cipher ready");

    match &cli.command {
        Command::Encrypt { text } => println!("{}", cipher.encrypt(text)?),
        Command::Decrypt { text } => println!("{}", cipher.decrypt(text)?),
        Command::Demo { text } => {
            let ciphertext = cipher.encrypt(text)?;
            println!("{}", ciphertext);
            println!("{}", cipher.decrypt(&ciphertext)?);
        }
        Command::Grid => match &cipher {
            AnyCipher::Playfair(playfair) => println!("{}", playfair.grid()),
            other => bail!("'{}' has no grid, use --cipher playfair", other.name()),
        },
    }

    Ok(())
}
