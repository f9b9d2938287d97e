use std::io::{BufRead, BufReader};
use std::process::{Command, Output, Stdio};

use lunar_charge_sim::config::ScenarioConfig;

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lunar-charge-sim"))
        .args(args)
        .output()
        .expect("lunar-charge-sim process should run")
}

fn stdout_of(output: &Output) -> String {
    assert!(
        output.status.success(),
        "run failed: stderr={}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout.clone()).expect("stdout should be valid UTF-8")
}

fn summary_value<'a>(stdout: &'a str, key: &str) -> &'a str {
    stdout
        .lines()
        .find_map(|line| line.strip_prefix(key))
        .map(str::trim)
        .unwrap_or_else(|| panic!("missing {key:?} in stdout:\n{stdout}"))
}

#[test]
fn default_preset_prints_one_line_per_hour() {
    let stdout = stdout_of(&run_cli(&["--hours", "3"]));
    let status: Vec<&str> = stdout.lines().filter(|l| l.starts_with("Hour: ")).collect();

    assert_eq!(status.len(), 3);
    assert_eq!(
        status[0],
        "Hour: 0, Sunlight: 1.00, Power Generated: 400.00 W, Battery Charge Level: 342.00 Wh"
    );
    assert!(status[2].starts_with("Hour: 2, "));
    assert!(stdout.contains("--- Run Summary ---"));
    assert_eq!(summary_value(&stdout, "Hours simulated:"), "3 (3 daylight)");
}

#[test]
fn zero_hours_prints_only_summary() {
    let stdout = stdout_of(&run_cli(&["--hours", "0"]));
    assert!(!stdout.lines().any(|l| l.starts_with("Hour: ")));
    assert_eq!(summary_value(&stdout, "Hours simulated:"), "0 (0 daylight)");
}

#[test]
fn quiet_scenario_file_prints_summary_only() {
    let stdout = stdout_of(&run_cli(&["--scenario", "scenarios/lunar_month.toml", "--quiet"]));
    assert!(!stdout.lines().any(|l| l.starts_with("Hour: ")));
    assert_eq!(summary_value(&stdout, "Hours simulated:"), "672 (336 daylight)");
    assert_eq!(summary_value(&stdout, "Energy generated:"), "134400.00 Wh");
}

#[test]
fn presets_produce_distinct_dynamics() {
    let month = stdout_of(&run_cli(&["--preset", "lunar_month", "--quiet"]));
    let large = stdout_of(&run_cli(&["--preset", "large_array", "--quiet"]));
    let mean = |s: &str| -> f64 {
        summary_value(s, "Mean charge:")
            .trim_end_matches(" Wh")
            .parse()
            .expect("mean charge should be numeric")
    };
    assert!(
        mean(&large) > mean(&month),
        "large array should hold more charge on average"
    );
}

#[test]
fn shipped_scenarios_parse_and_validate() {
    for path in ["scenarios/lunar_month.toml", "scenarios/short_cycle.toml"] {
        let scenario = ScenarioConfig::from_toml_file(path.as_ref())
            .unwrap_or_else(|e| panic!("{path}: {e}"));
        assert!(scenario.validate().is_empty(), "{path} should validate");
    }
    let lunar = ScenarioConfig::from_toml_file("scenarios/lunar_month.toml".as_ref())
        .expect("lunar_month.toml parses");
    assert_eq!(lunar, ScenarioConfig::lunar_month());
}

#[test]
fn invalid_scenario_fails_before_simulating() {
    let output = run_cli(&["--scenario", "scenarios/invalid_battery.toml"]);
    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stdout.contains("Hour: "));
    assert!(
        stderr.contains("discharge_rate_per_hour"),
        "stderr should name the bad field: {stderr}"
    );
}

#[test]
fn unknown_preset_is_rejected() {
    let output = run_cli(&["--preset", "mars_sol"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("mars_sol"));
}

#[test]
fn telemetry_out_writes_csv() {
    let path = std::env::temp_dir().join(format!(
        "lunar-charge-sim-telemetry-{}.csv",
        std::process::id()
    ));
    let path_str = path.to_str().expect("temp path is UTF-8");
    stdout_of(&run_cli(&["--hours", "5", "--quiet", "--telemetry-out", path_str]));

    let csv = std::fs::read_to_string(&path).expect("CSV should be written");
    let _ = std::fs::remove_file(&path);
    let mut lines = csv.lines();
    assert_eq!(
        lines.next(),
        Some("hour,sunlight,power_generated_w,charge_level_wh")
    );
    assert_eq!(lines.next(), Some("0,1.00,400.0000,342.0000"));
    assert_eq!(lines.count(), 4);
}

#[test]
fn huge_hour_count_streams_without_preallocating() {
    let hours = usize::MAX.to_string();
    let mut child = Command::new(env!("CARGO_BIN_EXE_lunar-charge-sim"))
        .args(["--hours", hours.as_str()])
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("lunar-charge-sim process should start");

    let stdout = child.stdout.take().expect("stdout is piped");
    let mut first = String::new();
    BufReader::new(stdout)
        .read_line(&mut first)
        .expect("first status line should be readable");
    let _ = child.kill();
    let _ = child.wait();

    assert!(
        first.starts_with("Hour: 0, Sunlight: 1.00"),
        "expected a status line before any allocation failure, got {first:?}"
    );
}
