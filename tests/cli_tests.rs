mod common;
use common::{CLEAN_CSV, SAMPLE_CSV, Workspace};
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

#[test]
fn test_anomalies_reports_both_checks() {
    let ws = Workspace::new();
    let data = ws.write("sample.csv", SAMPLE_CSV);

    ws.rta()
        .args(["--data", &data, "anomalies"])
        .assert()
        .success()
        .stdout(contains("Missing Break Time"))
        .stdout(contains("1 record(s) with missing break time"))
        .stdout(contains("Pay periods in dataset: 2"))
        .stdout(contains("Missing Pay Periods"))
        .stdout(contains("E003"));
}

#[test]
fn test_anomalies_break_time_only() {
    let ws = Workspace::new();
    let data = ws.write("sample.csv", SAMPLE_CSV);

    ws.rta()
        .args(["--data", &data, "anomalies", "--kind", "break-time"])
        .assert()
        .success()
        .stdout(contains("E001"))
        .stdout(contains("E002").not())
        .stdout(contains("Pay periods in dataset").not());
}

#[test]
fn test_anomalies_clean_dataset() {
    let ws = Workspace::new();
    let data = ws.write("clean.csv", CLEAN_CSV);

    ws.rta()
        .args(["--data", &data, "anomalies"])
        .assert()
        .success()
        .stdout(contains("No records with missing break time found."))
        .stdout(contains("No employees with missing pay periods found."));
}

#[test]
fn test_range_narrows_the_snapshot() {
    let ws = Workspace::new();
    let data = ws.write("sample.csv", SAMPLE_CSV);

    // only the first period left: everyone present in it is complete
    ws.rta()
        .args([
            "--data",
            &data,
            "--range",
            "2024-01-01:2024-01-14",
            "anomalies",
            "--kind",
            "pay-periods",
        ])
        .assert()
        .success()
        .stdout(contains("Pay periods in dataset: 1"))
        .stdout(contains("No employees with missing pay periods found."));
}

#[test]
fn test_invalid_range_fails() {
    let ws = Workspace::new();
    let data = ws.write("sample.csv", SAMPLE_CSV);

    ws.rta()
        .args(["--data", &data, "--range", "2024-1", "convert"])
        .assert()
        .failure()
        .stderr(contains("Error"));
}

#[test]
fn test_convert_prints_payroll_columns() {
    let ws = Workspace::new();
    let data = ws.write("sample.csv", SAMPLE_CSV);

    ws.rta()
        .args(["--data", &data, "convert"])
        .assert()
        .success()
        .stdout(contains("E_Hourly Regular_Hours"))
        .stdout(contains("E_Overtime_Hours"))
        .stdout(contains("E003"));
}

#[test]
fn test_hours_with_chart() {
    let ws = Workspace::new();
    let data = ws.write("sample.csv", SAMPLE_CSV);

    ws.rta()
        .args(["--data", &data, "hours", "--chart"])
        .assert()
        .success()
        .stdout(contains("2024-01-14"))
        .stdout(contains("82.50"))
        .stdout(contains("4.2% OT"));
}

#[test]
fn test_summary_with_pay() {
    let ws = Workspace::new();
    let data = ws.write("sample.csv", SAMPLE_CSV);

    ws.rta()
        .args(["--data", &data, "summary", "--pay"])
        .assert()
        .success()
        .stdout(contains("Total Hours per Store"))
        .stdout(contains("Total Pay per Store"))
        .stdout(contains("3350.00"));
}

#[test]
fn test_positions_chart() {
    let ws = Workspace::new();
    let data = ws.write("sample.csv", SAMPLE_CSV);

    ws.rta()
        .args(["--data", &data, "positions", "--chart"])
        .assert()
        .success()
        .stdout(contains("Number of Employees per Position per Store"))
        .stdout(contains("Cashier"))
        .stdout(contains("Manager"));
}

#[test]
fn test_verbose_logs_go_to_stderr() {
    let ws = Workspace::new();
    let data = ws.write("sample.csv", SAMPLE_CSV);

    ws.rta()
        .args(["-v", "--data", &data, "anomalies"])
        .assert()
        .success()
        .stderr(contains("timekeeping data loaded"))
        .stdout(contains("timekeeping data loaded").not());

    ws.rta()
        .args(["--data", &data, "anomalies"])
        .assert()
        .success()
        .stderr(contains("timekeeping data loaded").not());
}

#[test]
fn test_missing_data_file_fails() {
    let ws = Workspace::new();
    let missing = ws.out("nope.csv");

    ws.rta()
        .args(["--data", &missing.to_string_lossy(), "anomalies"])
        .assert()
        .failure()
        .stderr(contains("Data file not found"));
}

#[test]
fn test_malformed_row_fails_with_row_number() {
    let ws = Workspace::new();
    let bad = SAMPLE_CSV.replace("E003,Cy,Store B", "E003,Cy,");
    let data = ws.write("bad.csv", &bad);

    ws.rta()
        .args(["--data", &data, "anomalies"])
        .assert()
        .failure()
        .stderr(contains("row 5"))
        .stderr(contains("store"));
}

#[test]
fn test_export_missing_pay_periods_csv() {
    let ws = Workspace::new();
    let data = ws.write("sample.csv", SAMPLE_CSV);
    let out = ws.out("periods.csv");

    ws.rta()
        .args([
            "--data",
            &data,
            "export",
            "--report",
            "missing-pay-periods",
            "--format",
            "csv",
            "--file",
            &out.to_string_lossy(),
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some(
            "employee_id,store,description,minor,rate_type,begin_date,end_date,regular_hours,overtime_hours,total_hours"
        )
    );
    assert!(lines.next().expect("data row").starts_with("E003,Store B,Cashier"));
    assert_eq!(lines.next(), None);
}

#[test]
fn test_export_missing_break_time_json() {
    let ws = Workspace::new();
    let data = ws.write("sample.csv", SAMPLE_CSV);
    let out = ws.out("breaks.json");

    ws.rta()
        .args([
            "--data",
            &data,
            "export",
            "--report",
            "missing-break-time",
            "--format",
            "json",
            "--file",
            &out.to_string_lossy(),
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let json: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = json.as_array().expect("array");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["employee_id"], "E001");
    assert!(rows[0]["break_time"].is_null());
}

#[test]
fn test_export_empty_report_still_writes_file() {
    let ws = Workspace::new();
    let data = ws.write("clean.csv", CLEAN_CSV);
    let out = ws.out("empty.json");

    ws.rta()
        .args([
            "--data",
            &data,
            "export",
            "--report",
            "missing-break-time",
            "--format",
            "json",
            "--file",
            &out.to_string_lossy(),
        ])
        .assert()
        .success()
        .stdout(contains("is empty"));

    let content = fs::read_to_string(&out).expect("read exported json");
    assert_eq!(content.trim(), "[]");
}

#[test]
fn test_export_xlsx_and_pdf() {
    let ws = Workspace::new();
    let data = ws.write("sample.csv", SAMPLE_CSV);

    for (format, name, magic) in [
        ("xlsx", "summary.xlsx", &b"PK"[..]),
        ("pdf", "summary.pdf", &b"%PDF"[..]),
    ] {
        let out = ws.out(name);
        ws.rta()
            .args([
                "--data",
                &data,
                "export",
                "--report",
                "summary-hours",
                "--format",
                format,
                "--file",
                &out.to_string_lossy(),
            ])
            .assert()
            .success();

        let bytes = fs::read(&out).expect("read exported file");
        assert!(bytes.starts_with(magic), "{format} signature");
    }
}

#[test]
fn test_export_keeps_ids_and_hours_unrounded() {
    let ws = Workspace::new();
    let data = ws.write(
        "precise.csv",
        "\
EmployeeID,Store,Description,Minor,RateType,RateTimeFrame,BeginDate,EndDate,RegularHours,OvertimeHours,TotalHours,BreakTime
007,Store A,Cashier,Front,Hourly,Biweekly,2024-01-01,2024-01-14,7.125,0.5,7.625,
",
    );

    let csv_out = ws.out("conversion.csv");
    ws.rta()
        .args([
            "--data",
            &data,
            "export",
            "--report",
            "conversion",
            "--format",
            "csv",
            "--file",
            &csv_out.to_string_lossy(),
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&csv_out).expect("read exported csv");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines, ["Key,E_Hourly Regular_Hours,E_Overtime_Hours", "007,7.125,0.5"]);

    let xlsx_out = ws.out("breaks.xlsx");
    ws.rta()
        .args([
            "--data",
            &data,
            "export",
            "--report",
            "missing-break-time",
            "--format",
            "xlsx",
            "--file",
            &xlsx_out.to_string_lossy(),
        ])
        .assert()
        .success();
    assert!(fs::read(&xlsx_out).expect("read xlsx").starts_with(b"PK"));
}

#[test]
fn test_export_requires_absolute_path() {
    let ws = Workspace::new();
    let data = ws.write("sample.csv", SAMPLE_CSV);

    ws.rta()
        .args([
            "--data",
            &data,
            "export",
            "--report",
            "conversion",
            "--file",
            "relative.csv",
        ])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_export_existing_file_without_force_is_cancelled() {
    let ws = Workspace::new();
    let data = ws.write("sample.csv", SAMPLE_CSV);
    let out = ws.write("existing.csv", "keep me");

    ws.rta()
        .args(["--data", &data, "export", "--report", "conversion", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("export cancelled"));

    assert_eq!(fs::read_to_string(&out).expect("read"), "keep me");

    ws.rta()
        .args([
            "--data",
            &data,
            "export",
            "--report",
            "conversion",
            "--file",
            &out,
            "--force",
        ])
        .assert()
        .success();

    assert!(fs::read_to_string(&out).expect("read").starts_with("Key,"));
}

#[test]
fn test_init_writes_config_and_config_print_reads_it() {
    let ws = Workspace::new();

    ws.rta()
        .args(["init", "--data-file", "payroll.csv"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    let conf = ws.path().join("home").join("rtimeaudit.conf");
    let content = fs::read_to_string(&conf).expect("config written");
    assert!(content.contains("payroll.csv"));

    ws.rta()
        .args(["config", "--print", "--check"])
        .assert()
        .success()
        .stdout(contains("payroll.csv"))
        .stdout(contains("Configuration file is complete."));
}

#[test]
fn test_init_test_mode_does_not_write_config() {
    let ws = Workspace::new();

    ws.rta().args(["--test", "init"]).assert().success();

    assert!(!ws.path().join("home").join("rtimeaudit.conf").exists());
}

#[test]
fn test_config_check_lists_missing_fields() {
    let ws = Workspace::new();
    let home = ws.path().join("home");
    fs::create_dir_all(&home).expect("create home");
    fs::write(home.join("rtimeaudit.conf"), "data_file: /tmp/x.csv\n").expect("write conf");

    ws.rta()
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("Missing field 'delimiter'"))
        .stdout(contains("Missing field 'chart_width'"));
}

#[test]
fn test_configured_data_file_is_used_without_flag() {
    let ws = Workspace::new();
    let data = ws.write("sample.csv", SAMPLE_CSV);

    ws.rta().args(["init", "--data-file", &data]).assert().success();

    ws.rta()
        .args(["anomalies", "--kind", "pay-periods"])
        .assert()
        .success()
        .stdout(contains("E003"));
}
