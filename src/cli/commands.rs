//! Command implementations for the easyspeak CLI.

use std::fs;
use std::io::{self, Read};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::lexicon::LexiconSet;
use crate::translate::{TranslationOptions, TranslationResult, translate};

/// Execute a CLI command.
pub fn execute_command(args: EasyspeakArgs) -> Result<()> {
    match &args.command {
        Command::Translate(translate_args) => translate_text(translate_args, &args),
        Command::Lexicon(lexicon_args) => show_lexicon(lexicon_args, &args),
    }
}

/// Translate the input text.
fn translate_text(args: &TranslateArgs, cli_args: &EasyspeakArgs) -> Result<()> {
    let result = run_translate(args)?;

    output_result(
        "Translation",
        &TranslationReport {
            result,
            show_steps: args.steps,
        },
        cli_args,
    )
}

/// Read the input, resolve the options and translate.
pub fn run_translate(args: &TranslateArgs) -> Result<TranslationResult> {
    let options = resolve_options(args)?;
    let text = read_input(args)?;

    log::info!(
        "translating {} bytes (strict mode {})",
        text.len(),
        if options.strict_mode { "on" } else { "off" }
    );

    Ok(translate(&text, &options))
}

/// Options from the config file (or defaults), with `--lenient` applied last.
pub fn resolve_options(args: &TranslateArgs) -> Result<TranslationOptions> {
    let options = match &args.config {
        Some(path) => {
            log::debug!("loading options from {}", path.display());
            TranslationOptions::from_file(path)?
        }
        None => TranslationOptions::default(),
    };

    if args.lenient {
        Ok(options.with_strict_mode(false))
    } else {
        Ok(options)
    }
}

/// The text argument, else the input file, else stdin.
pub fn read_input(args: &TranslateArgs) -> Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }

    if let Some(path) = &args.input {
        log::debug!("reading input from {}", path.display());
        return Ok(fs::read_to_string(path)?);
    }

    let mut text = String::new();
    io::stdin().read_to_string(&mut text)?;
    Ok(text)
}

/// Show table sizes, or classify one word.
fn show_lexicon(args: &LexiconArgs, cli_args: &EasyspeakArgs) -> Result<()> {
    let lexicon = LexiconSet::builtin();

    match &args.word {
        Some(word) => output_result(
            "Lexicon lookup",
            &WordLookup {
                word: word.trim().to_lowercase(),
                entries: lexicon.classify(word),
            },
            cli_args,
        ),
        None => output_result(
            "Lexicon tables",
            &LexiconSummary {
                tables: lexicon
                    .table_sizes()
                    .into_iter()
                    .map(|(table, entries)| TableSize { table, entries })
                    .collect(),
            },
            cli_args,
        ),
    }
}
