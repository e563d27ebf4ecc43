#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use rtimeaudit::models::{RateType, TimeRecord};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Two pay periods; E001 misses a break time, E002 is salaried without
/// break times, E003 only appears in the second period.
pub const SAMPLE_CSV: &str = "\
EmployeeID,EmployeeName,Store,Description,Minor,RateType,RateTimeFrame,BeginDate,EndDate,RegularHours,OvertimeHours,TotalHours,BreakTime,RegPay,OverPay,TotalPay
E001,Ann,Store A,Cashier,Front,Hourly,Biweekly,2024-01-01,2024-01-14,80,5,85,2.5,1600,150,1750
E001,Ann,Store A,Cashier,Front,Hourly,Biweekly,2024-01-15,2024-01-28,80,0,80,,1600,0,1600
E002,Bob,Store B,Manager,Office,Salary,Monthly,2024-01-01,2024-01-14,80,0,80,,3000,0,3000
E002,Bob,Store B,Manager,Office,Salary,Monthly,2024-01-15,2024-01-28,80,0,80,,3000,0,3000
E003,Cy,Store B,Cashier,Front,Hourly,Biweekly,2024-01-15,2024-01-28,70,10,80,3,1400,300,1700
";

/// Every employee in every period, all break times present.
pub const CLEAN_CSV: &str = "\
EmployeeID,Store,Description,Minor,RateType,RateTimeFrame,BeginDate,EndDate,RegularHours,OvertimeHours,TotalHours,BreakTime
E001,Store A,Cashier,Front,Hourly,Biweekly,2024-01-01,2024-01-14,80,0,80,2
E001,Store A,Cashier,Front,Hourly,Biweekly,2024-01-15,2024-01-28,80,0,80,2
E002,Store A,Cashier,Front,Hourly,Biweekly,2024-01-01,2024-01-14,80,0,80,2
E002,Store A,Cashier,Front,Hourly,Biweekly,2024-01-15,2024-01-28,80,0,80,2
";

/// Isolated workspace: config home and data files live in a temp dir.
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write(&self, name: &str, content: &str) -> String {
        let p = self.dir.path().join(name);
        fs::write(&p, content).expect("write fixture");
        p.to_string_lossy().to_string()
    }

    pub fn out(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Binary with the configuration home pointed inside the workspace.
    pub fn rta(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("rtimeaudit");
        cmd.env("RTIMEAUDIT_HOME", self.dir.path().join("home"));
        cmd.env_remove("RUST_LOG");
        cmd
    }
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

/// Minimal record for library tests.
pub fn rec(id: &str, begin: &str, end: &str, rate: &str, break_time: Option<f64>) -> TimeRecord {
    TimeRecord {
        employee_id: id.to_string(),
        employee_name: None,
        store: "Store A".to_string(),
        description: "Cashier".to_string(),
        minor: "Front".to_string(),
        rate_type: RateType::from_csv_str(rate),
        rate_time_frame: "Biweekly".to_string(),
        begin_date: date(begin),
        end_date: date(end),
        regular_hours: 80.0,
        overtime_hours: 0.0,
        total_hours: 80.0,
        break_time,
        reg_pay: None,
        over_pay: None,
        total_pay: None,
    }
}
