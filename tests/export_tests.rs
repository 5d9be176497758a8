mod common;
use common::{sc_with, setup_test_config, temp_out};
use std::fs;

#[test]
fn test_export_crew_csv_selected() {
    let cfg = setup_test_config("export_crew_csv");
    let out = temp_out("export_crew_csv", "csv");

    sc_with(&cfg)
        .args([
            "--contractor", "c-1", "export", "--what", "crew", "--format", "csv", "--file", &out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with("id,name,trade,daily_rate,status,phone,contractor_id"));
    assert!(content.contains("Deepak Yadav"));
    assert!(!content.contains("Imran Shaikh"));
}

#[test]
fn test_export_attendance_json() {
    let cfg = setup_test_config("export_attendance_json");
    let out = temp_out("export_attendance_json", "json");

    sc_with(&cfg)
        .args(["export", "--what", "attendance", "--format", "json", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let v: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    assert_eq!(v.as_array().map(|a| a.len()), Some(3));
    assert_eq!(v[0]["id"], "a-3");
    assert_eq!(v[1]["presence"], "absent");
}

#[test]
fn test_export_dashboard_default_target() {
    let cfg = setup_test_config("export_dashboard");
    let out = temp_out("export_dashboard", "json");

    sc_with(&cfg)
        .args(["--contractor", "c-2", "export", "--format", "json", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let v: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    assert_eq!(v["crew_size"], 1);
    assert_eq!(v["crew_health_pct"], 0);
    assert_eq!(v["risks"][0]["kind"], "attendance_follow_up");
}

#[test]
fn test_export_existing_file_needs_force() {
    let cfg = setup_test_config("export_force");
    let out = temp_out("export_force", "csv");
    fs::write(&out, "old").expect("seed file");

    sc_with(&cfg)
        .args(["export", "--what", "payments", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure();
    assert_eq!(fs::read_to_string(&out).expect("read"), "old");

    sc_with(&cfg)
        .args(["export", "--what", "payments", "--file", &out, "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).expect("read").contains("deduction"));
}
