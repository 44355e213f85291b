use std::sync::Arc;

use easyspeak::analysis::analyzer::analyzer::Analyzer;
use easyspeak::analysis::analyzer::standard::StandardAnalyzer;
use easyspeak::analysis::char_filter::whitespace::normalize;
use easyspeak::analysis::token::Token;
use easyspeak::error::Result;
use easyspeak::grammar::{detect_and_strip_negation, strip_auxiliaries};
use easyspeak::lexicon::LexiconSet;
use easyspeak::translate::{TranslationOptions, TranslationResult, Translator, translate};

fn strict(text: &str) -> TranslationResult {
    translate(text, &TranslationOptions::default())
}

fn tokens(words: &[&str]) -> Vec<Token> {
    words
        .iter()
        .enumerate()
        .map(|(i, w)| Token::new(*w, i))
        .collect()
}

#[test]
fn present_statement_in_strict_mode_marks_tense_after_subject() {
    let result = strict("I eat.");
    assert_eq!(result.output, "mi na eat");

    let steps = result.steps[0].steps.steps();
    assert!(steps.contains(&r#"Tokenize: ["i","eat"]"#.to_string()));
    assert!(steps.contains(&"Question: no".to_string()));
    assert!(steps.contains(&"Tense: na".to_string()));
    assert!(steps.contains(&r#"Lexicon: ["mi","eat"]"#.to_string()));
}

#[test]
fn past_negated_statement_appends_negation_particle() {
    let result = strict("I did not eat.");
    assert_eq!(result.output, "mi pa eat no");

    let steps = result.steps[0].steps.steps();
    assert!(steps.contains(&"Tense: pa".to_string()));
    assert!(steps.contains(&"Negation: yes".to_string()));
    assert_eq!(
        steps.last().map(String::as_str),
        Some("Detected negation; appended 'no'.")
    );
}

#[test]
fn future_question_strips_auxiliary_and_appends_question_particle() {
    let result = strict("Will you go home?");
    assert_eq!(result.output, "yu fu go home ma");

    let steps = result.steps[0].steps.steps();
    assert!(steps.contains(&r#"Strip auxiliaries: ["you","go","home"]"#.to_string()));
    assert!(steps.contains(&"Inserted tense particle 'fu' after subject.".to_string()));
}

#[test]
fn lenient_mode_omits_present_particle_only() {
    let lenient = TranslationOptions::lenient();

    let result = translate("I eat.", &lenient);
    assert_eq!(result.output, "mi eat");
    assert!(
        result.steps[0]
            .steps
            .iter()
            .any(|s| s == "Strict mode off and tense is 'na'; omitted tense particle.")
    );

    assert_eq!(translate("I ate yesterday.", &lenient).output, "mi pa ate yesterday");
    assert_eq!(translate("We eat soon.", &lenient).output, "we fu eat soon");
}

#[test]
fn document_translation_keeps_sentence_order() -> Result<()> {
    let translator = Translator::new()?;
    let text = "I eat.  Will you go home?\r\n\r\n   I did not eat!";

    let result = translator.translate(text, &TranslationOptions::default());

    assert_eq!(result.output, "mi na eat\nyu fu go home ma\nmi pa eat no");
    let sentences: Vec<&str> = result.steps.iter().map(|s| s.sentence.as_str()).collect();
    assert_eq!(sentences, vec!["I eat.", "Will you go home?", "I did not eat!"]);

    for (sentence, output) in result.steps.iter().zip(result.output.lines()) {
        let single = translator.translate_sentence(&sentence.sentence, &TranslationOptions::default());
        assert_eq!(single.output, output);
        assert_eq!(single.steps, sentence.steps);
    }
    Ok(())
}

#[test]
fn empty_and_unusual_input_never_fails() {
    assert_eq!(strict("").output, "");
    assert!(strict("").steps.is_empty());
    assert!(strict("\n \n\t").steps.is_empty());

    // Two sentences with nothing to render.
    let result = strict("... !!!");
    assert_eq!(result.output, "\n");
    assert_eq!(result.steps.len(), 2);

    assert_eq!(strict("Zebras gallop quietly.").output, "na zebras gallop quietly");
    assert_eq!(strict("Ünïcödé wörds, 42 times!").output, "na n c d w rds 42 times");
}

#[test]
fn contractions_are_detected_as_negation() {
    assert_eq!(strict("I don't like the hospital.").output, "mi na like heal place no");
    assert_eq!(strict("They can't go to school tomorrow.").output, "de fu go to learn place tomorrow no");
    assert_eq!(strict("Didn't you see my car?").output, "yu na see mi move tool no ma");
}

#[test]
fn determiner_no_keeps_the_main_verb() {
    assert_eq!(strict("I have no car.").output, "mi na have move tool no");
    assert_eq!(strict("She is no doctor.").output, "she na is doctor no");
    assert_eq!(strict("I do not have a car.").output, "mi na have move tool no");
}

#[test]
fn result_serializes_with_output_and_sentence_steps() -> Result<()> {
    let result = strict("I eat.");
    let value: serde_json::Value = serde_json::to_value(&result)?;

    assert_eq!(value["output"], "mi na eat");
    assert_eq!(value["steps"][0]["sentence"], "I eat.");
    assert!(value["steps"][0]["steps"].is_array());

    let back: TranslationResult = serde_json::from_value(value)?;
    assert_eq!(back, result);
    Ok(())
}

#[test]
fn normalization_is_idempotent() {
    let samples = [
        "",
        "  a  b  ",
        "line\r\nbreak",
        "\ttabbed\t\tout\t",
        "already normal",
        "\u{2003}em space\u{2003}",
    ];

    for sample in samples {
        let once = normalize(sample);
        assert_eq!(normalize(&once), once, "{sample:?}");
    }
}

#[test]
fn tokens_only_contain_the_token_alphabet() -> Result<()> {
    let analyzer = StandardAnalyzer::new()?;
    let samples = [
        "Hello, World!",
        "It's 5 o'clock; don't be late...",
        "tabs\tand\nnewlines",
        "ÀÉÎ mixed ß text",
        "--- *** ???",
        "e-mail: someone@example.com",
    ];

    for sample in samples {
        for token in analyzer.analyze(sample) {
            assert!(!token.text.is_empty());
            assert!(
                token
                    .text
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '\''),
                "{:?} from {sample:?}",
                token.text
            );
        }
    }
    Ok(())
}

#[test]
fn auxiliary_stripping_never_empties_a_sequence() {
    let lexicon = LexiconSet::builtin();
    let inputs: [&[&str]; 5] = [
        &["will"],
        &["do", "did", "will"],
        &["can", "you", "go"],
        &["you", "can", "go"],
        &["must", "must", "must", "go"],
    ];

    for input in inputs {
        let stripped = strip_auxiliaries(&tokens(input), &lexicon);
        assert!(!stripped.is_empty(), "{input:?}");
        assert!(stripped.len() <= input.len());
    }
}

#[test]
fn negation_stripping_flags_only_when_a_marker_is_removed() {
    let lexicon: Arc<LexiconSet> = LexiconSet::builtin();
    let cases: [(&[&str], bool); 5] = [
        (&["i", "eat"], false),
        (&["i", "did", "not", "eat"], true),
        (&["won't", "go"], true),
        (&["nt"], true),
        (&["nothing", "is", "now"], false),
    ];

    for (input, expected) in cases {
        let outcome = detect_and_strip_negation(&tokens(input), &lexicon);
        assert_eq!(outcome.negated, expected, "{input:?}");
        assert!(outcome.tokens.len() <= input.len());
        if !expected {
            assert_eq!(outcome.tokens.len(), input.len());
        }
    }
}
