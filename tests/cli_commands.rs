use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

fn easyspeak(args: &[&str], stdin: Option<&str>) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_easyspeak"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    {
        let mut child_stdin = child.stdin.take().unwrap();
        if let Some(input) = stdin {
            child_stdin.write_all(input.as_bytes()).unwrap();
        }
    }

    child.wait_with_output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn translate_text_argument() {
    let output = easyspeak(&["translate", "I did not eat."], None);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "mi pa eat no\n");
}

#[test]
fn translate_reads_stdin_when_no_text_is_given() {
    let output = easyspeak(&["translate", "--lenient"], Some("I eat.\nWill you go home?\n"));

    assert!(output.status.success());
    assert_eq!(stdout(&output), "mi eat\nyu fu go home ma\n");
}

#[test]
fn translate_file_with_config_and_steps() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("input.txt");
    let config = dir.path().join("options.json");
    fs::write(&input, "I eat.").unwrap();
    fs::write(&config, r#"{"strictMode": false}"#).unwrap();

    let output = easyspeak(
        &[
            "translate",
            "-i",
            input.to_str().unwrap(),
            "-c",
            config.to_str().unwrap(),
            "--steps",
        ],
        None,
    );

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.starts_with("mi eat\n\nSentence 1: I eat.\n"));
    assert!(text.contains("  Strict mode off and tense is 'na'; omitted tense particle."));
}

#[test]
fn translate_json_output() {
    let output = easyspeak(&["--format", "json", "translate", "Will you go home?"], None);

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["output"], "yu fu go home ma");
    assert_eq!(value["steps"][0]["sentence"], "Will you go home?");
    assert_eq!(value["steps"][0]["steps"][3], "Tense: fu");
}

#[test]
fn single_verbose_flag_enables_info_logging() {
    let output = easyspeak(&["translate", "I eat."], None);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "mi na eat\n");
    assert!(output.stderr.is_empty());

    let output = easyspeak(&["-v", "translate", "I eat."], None);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "Translation\n\nmi na eat\n");
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("[INFO] translating 6 bytes (strict mode on)"));
    assert!(!stderr.contains("[DEBUG]"));
}

#[test]
fn lexicon_lookup() {
    let output = easyspeak(&["lexicon", "Restaurant"], None);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "restaurant: noun -> food place\n");

    let output = easyspeak(&["-f", "json", "lexicon"], None);
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["tables"][0]["table"], "pronoun");
    assert_eq!(value["tables"][0]["entries"], 23);
}

#[test]
fn missing_input_file_exits_with_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.txt");

    let output = easyspeak(&["translate", "-i", missing.to_str().unwrap()], None);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.starts_with("Error: I/O error:"));
}

#[test]
fn malformed_config_exits_with_error() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("options.json");
    fs::write(&config, "{ strictMode: nope").unwrap();

    let output = easyspeak(&["translate", "I eat.", "-c", config.to_str().unwrap()], None);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Config error: invalid options file"));
}
