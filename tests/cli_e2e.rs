//! End-to-end CLI tests for the webinar-topics binary.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Builds a command isolated from the user's config file and `RUST_LOG`.
fn webinar_topics(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("webinar-topics").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env_remove("RUST_LOG");
    cmd
}

fn write_config(config_home: &TempDir, contents: &str) {
    let dir = config_home.path().join("webinar-topics");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.toml"), contents).unwrap();
}

/// Test that the binary can be invoked with no input and exits with code 0.
#[test]
fn test_binary_invocation_returns_zero() {
    let home = TempDir::new().unwrap();
    webinar_topics(&home)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

/// Test that --help displays usage information and exits with code 0.
#[test]
fn test_binary_help_displays_usage() {
    let home = TempDir::new().unwrap();
    webinar_topics(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Group near-duplicate webinar topic"));
}

/// Test that --version displays version and exits with code 0.
#[test]
fn test_binary_version_displays_version() {
    let home = TempDir::new().unwrap();
    webinar_topics(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("webinar-topics"));
}

/// Test that invalid flags cause non-zero exit.
#[test]
fn test_binary_invalid_flag_returns_error() {
    let home = TempDir::new().unwrap();
    webinar_topics(&home)
        .arg("--invalid-flag")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_binary_groups_positional_topics() {
    let home = TempDir::new().unwrap();
    webinar_topics(&home)
        .args(["Resume writing", "Mock interviews", "Resume writing tips"])
        .assert()
        .success()
        .stdout(
            "1. Resume writing (2)\n   - Resume writing\n   - Resume writing tips\n\
             2. Mock interviews (1)\n   - Mock interviews\n",
        );
}

#[test]
fn test_binary_groups_stdin_lines_and_skips_comments() {
    let home = TempDir::new().unwrap();
    webinar_topics(&home)
        .write_stdin("# topic requests\nCloud computing\n\ncloud computing\nAlumni meetup\n")
        .assert()
        .success()
        .stdout(
            "1. Cloud computing (2)\n   - Cloud computing\n   - cloud computing\n\
             2. Alumni meetup (1)\n   - Alumni meetup\n",
        );
}

#[test]
fn test_binary_json_in_json_out_sorted_by_size() {
    let home = TempDir::new().unwrap();
    let output = webinar_topics(&home)
        .args(["--input-format", "json", "--format", "json", "--sort", "size"])
        .write_stdin(
            r#"[
                {"topic": "Startups", "email": "a@example.edu"},
                {"topic": "Higher studies abroad", "status": "approved"},
                {"topic": "Higher studies in abroad"}
            ]"#,
        )
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let groups = value.as_array().unwrap();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0]["representative"], "Higher studies abroad");
    assert_eq!(groups[0]["count"], 2);
    assert_eq!(groups[1]["representative"], "Startups");
}

#[test]
fn test_binary_empty_json_input_prints_empty_array() {
    let home = TempDir::new().unwrap();
    webinar_topics(&home)
        .args(["--input-format", "json", "--format", "json", "-q"])
        .write_stdin("[]")
        .assert()
        .success()
        .stdout("[]\n");
}

#[test]
fn test_binary_empty_text_input_prints_nothing() {
    let home = TempDir::new().unwrap();
    webinar_topics(&home)
        .args(["-q"])
        .write_stdin("# only comments\n\n")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_binary_groups_non_ascii_near_duplicates() {
    let home = TempDir::new().unwrap();
    webinar_topics(&home)
        .args(["-q", "日本語", "日本語x"])
        .assert()
        .success()
        .stdout("1. 日本語 (2)\n   - 日本語\n   - 日本語x\n");
}

#[test]
fn test_binary_reads_input_file() {
    let home = TempDir::new().unwrap();
    let topics = home.path().join("topics.txt");
    fs::write(&topics, "AI Ethics\nai ethics\n").unwrap();

    webinar_topics(&home)
        .args(["--ignore-case", "--input"])
        .arg(&topics)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("1. AI Ethics (2)\n"));
}

#[test]
fn test_binary_missing_input_file_fails() {
    let home = TempDir::new().unwrap();
    webinar_topics(&home)
        .args(["--input", "/nonexistent/topics.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("/nonexistent/topics.txt"));
}

#[test]
fn test_binary_invalid_json_fails() {
    let home = TempDir::new().unwrap();
    webinar_topics(&home)
        .args(["--input-format", "json"])
        .write_stdin("{not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid JSON"));
}

#[test]
fn test_binary_rejects_threshold_out_of_range() {
    let home = TempDir::new().unwrap();
    webinar_topics(&home)
        .args(["--threshold", "1.0", "cat"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("threshold"));
}

#[test]
fn test_binary_custom_threshold_merges_more() {
    let home = TempDir::new().unwrap();
    webinar_topics(&home)
        .args(["--threshold", "0.4", "cat", "bat", "hat"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("1. cat (3)\n"));
}

#[test]
fn test_binary_compare_reports_score() {
    let home = TempDir::new().unwrap();
    webinar_topics(&home)
        .args(["compare", "night", "nacht"])
        .assert()
        .success()
        .stdout(predicate::str::contains("similarity = 0.2500"))
        .stdout(predicate::str::contains("threshold = 0.6"))
        .stdout(predicate::str::contains("result = would not group"));
}

#[test]
fn test_binary_compare_ignore_case() {
    let home = TempDir::new().unwrap();
    webinar_topics(&home)
        .args(["compare", "Resume Writing", "resume  writing", "--ignore-case"])
        .assert()
        .success()
        .stdout(predicate::str::contains("similarity = 1.0000"))
        .stdout(predicate::str::contains("result = would group"));
}

#[test]
fn test_binary_config_show_defaults() {
    let home = TempDir::new().unwrap();
    webinar_topics(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config_file = not found (using defaults)"))
        .stdout(predicate::str::contains("threshold = 0.6"))
        .stdout(predicate::str::contains("sort = input"))
        .stdout(predicate::str::contains("verbosity = default"));
}

#[test]
fn test_binary_config_file_sets_defaults() {
    let home = TempDir::new().unwrap();
    write_config(
        &home,
        "threshold = 0.75 # stricter\nsort = \"size\"\nverbosity = \"quiet\"\n",
    );
    webinar_topics(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config_file = loaded"))
        .stdout(predicate::str::contains("threshold = 0.75"))
        .stdout(predicate::str::contains("sort = size"))
        .stdout(predicate::str::contains("verbosity = quiet"));
}

#[test]
fn test_binary_cli_flag_overrides_config_file() {
    let home = TempDir::new().unwrap();
    write_config(&home, "threshold = 0.75\n");
    webinar_topics(&home)
        .args(["config", "show", "--threshold", "0.5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("threshold = 0.5"));
}

#[test]
fn test_binary_invalid_config_file_fails() {
    let home = TempDir::new().unwrap();
    write_config(&home, "colour = \"blue\"\n");
    webinar_topics(&home)
        .arg("cat")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown configuration key"));
}

/// Test that -v flag works (verbose mode) and logs go to stderr.
#[test]
fn test_binary_verbose_logs_to_stderr() {
    let home = TempDir::new().unwrap();
    webinar_topics(&home)
        .args(["-v", "alumni", "alumni"])
        .assert()
        .success()
        .stdout("1. alumni (2)\n   - alumni\n   - alumni\n")
        .stderr(predicate::str::contains("Grouping complete"));
}

/// Test that -q flag works (quiet mode).
#[test]
fn test_binary_quiet_flag_suppresses_logs() {
    let home = TempDir::new().unwrap();
    webinar_topics(&home)
        .args(["-q", "alumni"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}
