//! Command line argument parsing for the easyspeak CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// easyspeak - A rule-based English to Easyspeak translator
#[derive(Parser, Debug, Clone)]
#[command(name = "easyspeak")]
#[command(about = "A rule-based English to Easyspeak translator")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct EasyspeakArgs {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl EasyspeakArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose.saturating_add(1)
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Translate text
    Translate(TranslateArgs),

    /// Show the lexicon tables or look up a word
    Lexicon(LexiconArgs),
}

/// Arguments for translating text
#[derive(Parser, Debug, Clone)]
pub struct TranslateArgs {
    /// Text to translate (read from --input or stdin when omitted)
    #[arg(value_name = "TEXT", conflicts_with = "input")]
    pub text: Option<String>,

    /// File to translate
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Options file (JSON, e.g. {"strictMode": false})
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Omit the present-tense particle (turns strict mode off)
    #[arg(long)]
    pub lenient: bool,

    /// Show the steps applied to each sentence
    #[arg(long)]
    pub steps: bool,
}

/// Arguments for the lexicon command
#[derive(Parser, Debug, Clone)]
pub struct LexiconArgs {
    /// Word to look up (table sizes are shown when omitted)
    #[arg(value_name = "WORD")]
    pub word: Option<String>,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
