// keygen-core/src/main.rs
//
// `keygen` - terminal front end over the session API.

use std::io::BufRead;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use keygen_core::api::{self, Clipboard};
use keygen_core::error::ClipboardError;
use keygen_core::{Chain, KeygenConfig, KeypairRecord, OutputFormat, WalletMnemonic, WalletSession};
use serde_json::json;

#[derive(Parser)]
#[command(name = "keygen")]
#[command(about = "Generate Solana and Ethereum keypairs from a BIP-39 mnemonic")]
struct Cli {
    /// Print private keys instead of masking them
    #[arg(long, global = true)]
    reveal: bool,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a new 12-word mnemonic
    Generate {
        /// Copy the phrase to the clipboard
        #[arg(long)]
        copy: bool,
    },
    /// Check a mnemonic's word count, wordlist membership and checksum
    Validate {
        #[arg(required = true, num_args = 1..)]
        words: Vec<String>,
    },
    /// Derive consecutive wallets for one chain
    Derive {
        /// Phrase to import, `-` reads one line from stdin. Generated when omitted.
        #[arg(long)]
        mnemonic: Option<String>,
        /// solana | ethereum (sol, eth)
        #[arg(long)]
        chain: Option<Chain>,
        #[arg(long, default_value_t = 1)]
        count: u32,
        /// Copy the last public key / address to the clipboard
        #[arg(long)]
        copy: bool,
    },
    /// Replay a sequence of adds (and deletes) against one session
    Session {
        #[arg(long)]
        mnemonic: Option<String>,
        /// Chains to add in order, e.g. `sol,eth,sol`
        #[arg(long, value_delimiter = ',', required = true)]
        plan: Vec<Chain>,
        /// Delete after the plan ran, e.g. `sol:0`
        #[arg(long, value_parser = parse_delete)]
        delete: Vec<(Chain, usize)>,
    },
}

/// System clipboard backed by `arboard`
struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        clipboard
            .set_text(text.to_string())
            .map_err(|e| ClipboardError::Unavailable(e.to_string()))
    }
}

struct Output {
    reveal: bool,
    format: OutputFormat,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config = KeygenConfig::load().context("loading configuration")?;
    api::init_core(&config)?;

    let out = Output {
        reveal: cli.reveal || config.reveal_secrets,
        format: if cli.json { OutputFormat::Json } else { config.output },
    };

    match cli.command {
        Commands::Generate { copy } => {
            let mut session = WalletSession::new();
            let words = session.generate_mnemonic()?;
            out.phrase(&words);
            if copy {
                api::copy_mnemonic(&session, &mut SystemClipboard)?;
                eprintln!("Mnemonic copied to clipboard");
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Validate { words } => {
            // A single quoted argument is split like an import would be
            let words: Vec<String> = words
                .iter()
                .flat_map(|w| w.split_whitespace())
                .map(String::from)
                .collect();
            let result = WalletMnemonic::from_words(&words);
            out.validation(result.as_ref().err().map(ToString::to_string));
            Ok(if result.is_ok() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Commands::Derive {
            mnemonic,
            chain,
            count,
            copy,
        } => {
            let chain = chain
                .or(config.default_chain)
                .context("no chain given, pass --chain or set default_chain")?;
            let mut session = open_session(mnemonic.as_deref(), &out)?;
            session.select_chain(chain);

            let mut records = Vec::with_capacity(count as usize);
            for _ in 0..count {
                records.push(session.add_wallet(chain)?);
            }
            out.records(&records)?;

            if let (true, Some(last)) = (copy, records.last()) {
                api::copy_text(&mut SystemClipboard, last.public_id())?;
                eprintln!("{} copied to clipboard", last.public_id());
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Session {
            mnemonic,
            plan,
            delete,
        } => {
            let mut session = open_session(mnemonic.as_deref(), &out)?;
            for chain in plan {
                session.select_chain(chain);
                session.add_wallet(chain)?;
            }
            for (chain, position) in delete {
                api::delete_wallet(&mut session, chain, position)?;
            }

            let records: Vec<KeypairRecord> = Chain::ALL
                .iter()
                .flat_map(|chain| session.wallets(*chain))
                .collect();
            out.records(&records)?;
            if out.format == OutputFormat::Text {
                println!("next index: {}", session.current_index());
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Session seeded from `--mnemonic`, stdin, or a fresh phrase.
fn open_session(mnemonic: Option<&str>, out: &Output) -> anyhow::Result<WalletSession> {
    let mut session = WalletSession::new();
    match mnemonic {
        Some("-") => {
            let mut line = String::new();
            std::io::stdin()
                .lock()
                .read_line(&mut line)
                .context("reading mnemonic from stdin")?;
            session.import_mnemonic(&line)?;
        }
        Some(phrase) => {
            session.import_mnemonic(phrase)?;
        }
        None => {
            let words = session.generate_mnemonic()?;
            eprintln!("No mnemonic given, generated a new one. Write it down:");
            out.phrase(&words);
        }
    }
    Ok(session)
}

fn parse_delete(s: &str) -> Result<(Chain, usize), String> {
    let (chain, position) = s
        .split_once(':')
        .ok_or_else(|| format!("expected <chain>:<position>, got '{}'", s))?;
    let position = position
        .parse::<usize>()
        .map_err(|e| format!("bad position '{}': {}", position, e))?;
    Ok((chain.parse()?, position))
}

impl Output {
    fn phrase(&self, words: &[String]) {
        match self.format {
            OutputFormat::Text => {
                for (i, word) in words.iter().enumerate() {
                    println!("{:>2}. {}", i + 1, word);
                }
            }
            OutputFormat::Json => println!("{}", json!({ "mnemonic": words })),
        }
    }

    fn validation(&self, error: Option<String>) {
        match (self.format, error) {
            (OutputFormat::Text, None) => println!("valid"),
            (OutputFormat::Text, Some(e)) => println!("invalid: {}", e),
            (OutputFormat::Json, error) => {
                println!("{}", json!({ "valid": error.is_none(), "error": error }))
            }
        }
    }

    fn records(&self, records: &[KeypairRecord]) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Text => {
                for record in records {
                    println!(
                        "[{:<8}] {:<18} {}",
                        record.chain(),
                        record.path(),
                        record.public_id()
                    );
                    if self.reveal {
                        println!("           secret: {}", record.private_key());
                    }
                }
            }
            OutputFormat::Json => {
                let mut values = Vec::with_capacity(records.len());
                for record in records {
                    let mut value = serde_json::to_value(record)?;
                    if !self.reveal {
                        value["privateKey"] = json!("[hidden]");
                    }
                    values.push(value);
                }
                println!("{}", serde_json::Value::Array(values));
            }
        }
        Ok(())
    }
}
