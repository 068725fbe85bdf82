mod args;

use args::{Cli, Commands, CommonArgs};
use clap::Parser;

use std::fs;
use std::process::ExitCode;
use std::time::Instant;

use aesgf::{Cipher, Key, Mode};
use thiserror::Error;
use tracing::{debug, info};
use tracing_subscriber::filter::LevelFilter;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("--iv is required with --mode {0}")]
    MissingIv(Mode),

    #[error("invalid --iv hex: {0}")]
    InvalidIvHex(#[from] hex::FromHexError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Aes(#[from] aesgf::Error),
}

fn main() -> ExitCode {
    let args = Cli::parse();
    init_logging(args.verbose);

    match aes_cli(args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn aes_cli(command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Encrypt(enc) => {
            let mode: Mode = enc.common.mode.into();

            // read plaintext from input path
            let plaintext = fs::read(&enc.common.input)?;

            // read or generate key
            let key = if enc.gen_key {
                let rand_key = match enc.key_size {
                    args::KeySize::Bits128 => Key::rand_key_128()?,
                    args::KeySize::Bits192 => Key::rand_key_192()?,
                    args::KeySize::Bits256 => Key::rand_key_256()?,
                };
                fs::write(&enc.common.key, rand_key.as_bytes())?;
                info!(path = %enc.common.key.display(), "wrote generated key");
                rand_key.as_bytes().to_vec()
            } else {
                fs::read(&enc.common.key)?
            };

            let iv = if enc.gen_iv {
                let iv = aesgf::random_iv()?;
                println!("IV = {}", hex::encode(iv));
                iv.to_vec()
            } else {
                resolve_iv(mode, &enc.common)?
            };

            let start = Instant::now();
            let ciphertext = Cipher::new(mode).encrypt(&plaintext, &key, &iv)?;
            let duration = start.elapsed();

            fs::write(&enc.common.output, &ciphertext)?;
            println!(
                "Encrypted {} bytes in {} ms",
                plaintext.len(),
                duration.as_millis()
            );
            Ok(())
        }
        Commands::Decrypt(common) => {
            let mode: Mode = common.mode.into();

            // read inputs
            let ciphertext = fs::read(&common.input)?;
            let key = fs::read(&common.key)?;
            let iv = resolve_iv(mode, &common)?;

            let start = Instant::now();
            let plaintext = Cipher::new(mode).decrypt(&ciphertext, &key, &iv)?;
            let duration = start.elapsed();

            fs::write(&common.output, &plaintext)?;
            println!(
                "Decrypted {} bytes in {} ms",
                plaintext.len(),
                duration.as_millis()
            );
            Ok(())
        }
    }
}

fn resolve_iv(mode: Mode, common: &CommonArgs) -> Result<Vec<u8>, CliError> {
    match &common.iv {
        Some(hex) => {
            if !mode.requires_iv() {
                debug!("ignoring --iv in ECB mode");
            }
            Ok(parse_hex(hex)?)
        }
        None if mode.requires_iv() => Err(CliError::MissingIv(mode)),
        None => Ok(Vec::new()),
    }
}

fn parse_hex(s: &str) -> Result<Vec<u8>, hex::FromHexError> {
    let digits: String = s.chars().filter(|c| !c.is_whitespace()).collect();
    hex::decode(digits)
}
