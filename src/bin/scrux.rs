use clap::{crate_version, Parser};

use rand::rngs::OsRng;
use std::error::Error;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;
use zeroize::Zeroize;

use scrux::config::ScruxConfig;
use scrux::constants::DEFAULT_CONFIG_DIR;
use scrux::mnemonic::{read_phrase, recover_text_lossy, Wordlist};
use scrux::share::Share;
use scrux::sss::{combine_shares, combine_shares_checked, refresh_shares, split_secret};

#[derive(Debug, Parser)]
#[command(name = "scrux")]
#[command(version = crate_version!())]
#[command(
    about = "SCRUX - split a secret phrase into paper shares",
    long_about = "SCRUX splits a secret, usually a mnemonic phrase, into a number of shares using Shamir's Secret Sharing over GF(256). Any threshold number of shares rebuild the secret, fewer reveal nothing about it. Shares are printed as hex strings, one per line, prefixed with their index. Defaults for the threshold, the number of shares, the mnemonic length and the word list are read from conf.toml in the config directory and can be overridden with SCRUX_* environment variables. Nothing is stored: shares exist only in the output of the split command."
)]
enum CliArgument {
    /// Generate a random mnemonic phrase from a word list.
    Generate {
        /// Number of words in the phrase.
        #[clap(long, short)]
        words: Option<usize>,

        /// Word list file, one word per line.
        #[clap(long)]
        wordlist: Option<PathBuf>,
    },
    /// Split a secret into shares.
    Split {
        /// Share threshold.
        #[clap(long, short)]
        threshold: Option<usize>,

        /// Number of shares to generate.
        #[clap(long, short)]
        shares: Option<usize>,

        /// Secret to split. Read from stdin when omitted, which keeps it out
        /// of shell history and the process list.
        #[clap(long)]
        secret: Option<String>,

        /// Print the shares as a JSON object keyed by index
        #[clap(long)]
        json: bool,
    },
    /// Combine hex shares to rebuild a secret.
    Combine {
        /// Threshold the secret was split with. When given, shares beyond the
        /// threshold are checked against the others.
        #[clap(long, short)]
        threshold: Option<usize>,

        /// Shares as hex strings.
        #[clap(required = true)]
        shares: Vec<String>,
    },
    /// Re-randomize a complete set of shares without changing the secret.
    Refresh {
        /// Share threshold.
        #[clap(long, short)]
        threshold: usize,

        /// Shares as hex strings.
        #[clap(required = true)]
        shares: Vec<String>,
    },
}

#[derive(Parser, Debug)]
#[clap(name = "scrux")]
struct Opt {
    /// Directory holding conf.toml.
    #[clap(long, short, default_value = DEFAULT_CONFIG_DIR)]
    config_dir: PathBuf,

    /// Subcommand to run.
    #[clap(subcommand)]
    argument: CliArgument,
}

fn main() -> Result<(), Box<dyn Error>> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();

    let opt = Opt::parse();
    let config = ScruxConfig::new(&opt.config_dir)?;
    debug!("Using config: {:?}", config);

    match opt.argument {
        CliArgument::Generate { words, wordlist } => {
            let path = wordlist
                .or_else(|| config.wordlist.clone())
                .ok_or("No word list configured. Pass --wordlist or set wordlist in conf.toml.")?;
            let count = words.unwrap_or(config.word_count);

            let wordlist = Wordlist::load(&path)?;
            debug!("Drawing {} words from {} candidates.", count, wordlist.len());

            let mut phrase = wordlist.generate_phrase(count, &mut OsRng);
            println!("{}", phrase);
            phrase.zeroize();
        }

        CliArgument::Split {
            threshold,
            shares,
            secret,
            json,
        } => {
            let mut secret = match secret {
                Some(secret) => secret,
                None => {
                    if std::io::stdin().is_terminal() {
                        eprintln!("Enter the secret, then press Ctrl-D:");
                    }
                    read_phrase(std::io::stdin().lock())?
                }
            };
            let threshold = threshold.unwrap_or(config.threshold);
            let shares = shares.unwrap_or(config.shares);
            debug!("Splitting with threshold {} into {} shares.", threshold, shares);

            let split_shares = split_secret(secret.as_bytes(), threshold, shares, &mut OsRng);
            secret.zeroize();
            let split_shares = split_shares?;

            if json {
                println!("{}", serde_json::to_string_pretty(&split_shares)?);
            } else {
                println!(
                    "✂️  Secret has been split into {} shares, any {} of them recover it:",
                    shares, threshold
                );
                for (index, share) in &split_shares {
                    println!("  {}: {}", index, share);
                }
            }
        }

        CliArgument::Combine { threshold, shares } => {
            let shares = parse_shares(&shares)?;
            debug!("Combining {} shares.", shares.len());

            let secret = match threshold {
                Some(threshold) => combine_shares_checked(&shares, threshold)?,
                None => combine_shares(&shares)?,
            };

            let (mut secret, valid) = recover_text_lossy(&secret);
            if !valid {
                warn!("Recovered bytes are not valid UTF-8, too few or mismatched shares?");
            }
            println!("🔑 secret: {}", secret);
            secret.zeroize();
        }

        CliArgument::Refresh { threshold, shares } => {
            let mut shares = parse_shares(&shares)?;
            refresh_shares(&mut shares, threshold, &mut OsRng)?;

            println!("🔄 Refreshed {} shares, discard the old ones:", shares.len());
            for share in &shares {
                println!("  {}: {}", share.index(), share);
            }
        }
    }

    Ok(())
}

fn parse_shares(input: &[String]) -> Result<Vec<Share>, Box<dyn Error>> {
    let shares = input
        .iter()
        .map(|s| strip_index_label(s).parse::<Share>())
        .collect::<Result<Vec<_>, _>>()?;
    Ok(shares)
}

/// Accepts shares copied from split output, e.g. `2: 02A1...`.
fn strip_index_label(s: &str) -> &str {
    match s.split_once(':') {
        Some((_, share)) => share,
        None => s,
    }
}
