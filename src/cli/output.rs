//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{EasyspeakArgs, OutputFormat};
use crate::error::Result;
use crate::lexicon::{WordClass, WordEntry};
use crate::translate::TranslationResult;

/// Human-readable rendering of a command result.
pub trait HumanOutput {
    fn to_human(&self) -> String;
}

/// Result of the translate command.
#[derive(Debug, Serialize)]
pub struct TranslationReport {
    #[serde(flatten)]
    pub result: TranslationResult,

    /// Print the per-sentence steps in human output. JSON always has them.
    #[serde(skip)]
    pub show_steps: bool,
}

/// Number of entries in one lexicon table.
#[derive(Debug, Serialize, Deserialize)]
pub struct TableSize {
    pub table: WordClass,
    pub entries: usize,
}

/// Result of the lexicon command without a word.
#[derive(Debug, Serialize, Deserialize)]
pub struct LexiconSummary {
    pub tables: Vec<TableSize>,
}

/// Result of the lexicon command for one word.
#[derive(Debug, Serialize, Deserialize)]
pub struct WordLookup {
    pub word: String,
    pub entries: Vec<WordEntry>,
}

/// Output a result in the specified format.
pub fn output_result<T>(message: &str, result: &T, args: &EasyspeakArgs) -> Result<()>
where
    T: Serialize + HumanOutput,
{
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: HumanOutput>(message: &str, result: &T, args: &EasyspeakArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }

    println!("{}", result.to_human());
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &EasyspeakArgs) -> Result<()> {
    println!("{}", format_json(result, args.pretty)?);
    Ok(())
}

fn format_json<T: Serialize>(result: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    Ok(json)
}

impl HumanOutput for TranslationReport {
    fn to_human(&self) -> String {
        let mut out = self.result.output.clone();

        if self.show_steps {
            for (i, sentence) in self.result.steps.iter().enumerate() {
                out.push_str(&format!("\n\nSentence {}: {}", i + 1, sentence.sentence));
                for step in &sentence.steps {
                    out.push_str(&format!("\n  {step}"));
                }
            }
        }

        out
    }
}

impl HumanOutput for LexiconSummary {
    fn to_human(&self) -> String {
        self.tables
            .iter()
            .map(|t| format!("{:<10} {}", t.table.name(), t.entries))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl HumanOutput for WordLookup {
    fn to_human(&self) -> String {
        if self.entries.is_empty() {
            return format!("{}: not in the lexicon", self.word);
        }

        self.entries
            .iter()
            .map(|entry| match &entry.translation {
                Some(translation) => format!("{}: {} -> {translation}", self.word, entry.class),
                None => format!("{}: {}", self.word, entry.class),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
