use std::process::Command;

fn temp_path(label: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "secret-notes-cli-{label}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
    ))
}

#[test]
fn cli_list_scenarios_writes_output() {
    let exe = env!("CARGO_BIN_EXE_secret-notes-tester");
    let output_path = temp_path("list");
    let status = Command::new(exe)
        .args(["--list-scenarios", "--output"])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let content = std::fs::read_to_string(&output_path).expect("read output");
    assert!(content.contains("Available scenarios"));
    assert!(content.contains("full-unlock"));
    let _ = std::fs::remove_file(output_path);
}

#[test]
fn cli_runs_all_scenarios_with_json_report() {
    let exe = env!("CARGO_BIN_EXE_secret-notes-tester");
    let output_path = temp_path("run");
    let output = Command::new(exe)
        .args([
            "--report",
            "json",
            "--scenarios",
            "all",
            "--iterations",
            "2",
            "--seeds",
            "1,0x2a",
            "--output",
        ])
        .arg(&output_path)
        .output()
        .expect("run cli");
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Secret Notes Automated Tester"));

    let report = std::fs::read_to_string(&output_path).expect("read report");
    let results: Vec<serde_json::Value> = serde_json::from_str(&report).expect("json report");
    assert_eq!(results.len(), 9 * 2);
    assert!(results.iter().all(|r| r["passed"] == true));
    let _ = std::fs::remove_file(output_path);
}

#[test]
fn cli_rejects_unknown_scenarios() {
    let exe = env!("CARGO_BIN_EXE_secret-notes-tester");
    let output = Command::new(exe)
        .args(["--scenarios", "smoke,moonwalk", "--iterations", "1"])
        .output()
        .expect("run cli");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("moonwalk"));
}
