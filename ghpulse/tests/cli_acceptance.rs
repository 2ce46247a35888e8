use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

struct CliTestEnv {
    temp_dir: TempDir,
    home: PathBuf,
    xdg_config: PathBuf,
    xdg_state: PathBuf,
}

impl CliTestEnv {
    fn new() -> Self {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let base = temp_dir.path().to_path_buf();
        let home = base.join("home");
        let xdg_config = base.join("xdg-config");
        let xdg_state = base.join("xdg-state");

        fs::create_dir_all(&home).expect("failed to create HOME");
        fs::create_dir_all(&xdg_config).expect("failed to create XDG_CONFIG_HOME");
        fs::create_dir_all(&xdg_state).expect("failed to create XDG_STATE_HOME");

        Self {
            temp_dir,
            home,
            xdg_config,
            xdg_state,
        }
    }

    fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        fs::write(&path, content).expect("failed to write test file");
        path
    }
}

fn calendar_fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../ghpulse-core/tests/fixtures/calendar.json")
}

fn run_ghpulse(env: &CliTestEnv, args: &[&str]) -> Output {
    Command::new(assert_cmd::cargo::cargo_bin!("ghpulse"))
        .args(args)
        .env("HOME", &env.home)
        .env("XDG_CONFIG_HOME", &env.xdg_config)
        .env("XDG_STATE_HOME", &env.xdg_state)
        .env_remove("RUST_LOG")
        .output()
        .unwrap_or_else(|e| panic!("failed to execute ghpulse: {e}"))
}

fn assert_success(args: &[&str], output: &Output) {
    assert!(
        output.status.success(),
        "ghpulse {:?} failed\nstdout:\n{}\nstderr:\n{}",
        args,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn insights_json_from_calendar_file() {
    let env = CliTestEnv::new();
    let fixture = calendar_fixture();
    let args = ["insights", "--file", fixture.to_str().unwrap(), "--export", "json"];

    let output = run_ghpulse(&env, &args);
    assert_success(&args, &output);

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(json["longest_streak"], 4);
    assert_eq!(json["active_days"], 13);
    assert_eq!(json["total_contributions"], 37);
    assert_eq!(json["busiest_weekday"], 2);
    assert_eq!(json["busiest_day"]["date"], "2024-01-16");
}

#[test]
fn insights_terminal_from_day_array() {
    let env = CliTestEnv::new();
    let file = env.write_file(
        "days.json",
        r#"[
            {"date": "2024-06-13", "contributionCount": 1},
            {"date": "2024-06-14", "contributionCount": 0},
            {"date": "2024-06-15", "contributionCount": 7},
            {"date": "bad", "contributionCount": 3}
        ]"#,
    );
    let args = ["insights", "--file", file.to_str().unwrap()];

    let output = run_ghpulse(&env, &args);
    assert_success(&args, &output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("CONTRIBUTION INSIGHTS"));
    assert!(stdout.contains("Busiest weekday: Saturday"));
    assert!(stdout.contains("Jun 15, 2024 (7 contributions)"));
    assert!(stdout.contains("1 malformed record skipped"));
}

#[test]
fn insights_calendar_with_null_count_still_loads() {
    let env = CliTestEnv::new();
    let file = env.write_file(
        "calendar.json",
        r#"{"weeks": [{"contributionDays": [
            {"date": "2024-01-01", "contributionCount": 3},
            {"date": "2024-01-02", "contributionCount": null},
            {"contributionCount": 5},
            {"date": "2024-01-03", "contributionCount": 4}
        ]}]}"#,
    );
    let args = ["insights", "--file", file.to_str().unwrap(), "--export", "json"];

    let output = run_ghpulse(&env, &args);
    assert_success(&args, &output);

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(json["total_days"], 2);
    assert_eq!(json["skipped_records"], 2);
    assert_eq!(json["longest_streak"], 2);
}

#[test]
fn insights_markdown_for_empty_series() {
    let env = CliTestEnv::new();
    let file = env.write_file("empty.json", "[]");
    let args = ["insights", "--file", file.to_str().unwrap(), "--export", "md"];

    let output = run_ghpulse(&env, &args);
    assert_success(&args, &output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("# Contribution Insights"));
    assert!(stdout.contains("*Not enough contribution data.*"));
}

#[test]
fn unknown_export_format_fails() {
    let env = CliTestEnv::new();
    let fixture = calendar_fixture();
    let args = ["insights", "--file", fixture.to_str().unwrap(), "--export", "csv"];

    let output = run_ghpulse(&env, &args);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown export format"));
}

#[test]
fn unknown_sort_key_fails_before_network() {
    let env = CliTestEnv::new();
    let args = ["achievements", "octocat", "--sort", "stars"];

    let output = run_ghpulse(&env, &args);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown sort key: stars"));
}

#[test]
fn invalid_config_file_is_reported() {
    let env = CliTestEnv::new();
    let config_dir = env.xdg_config.join("ghpulse");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.toml"), "[api]\nbase_url = \"localhost\"\n").unwrap();

    let fixture = calendar_fixture();
    let args = ["insights", "--file", fixture.to_str().unwrap()];
    let output = run_ghpulse(&env, &args);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to load configuration"));
}
