mod common;
use common::{SAMPLE_CSV, date, rec};
use rtimeaudit::core::conversion::conversion_table;
use rtimeaudit::core::hours::average_hours;
use rtimeaudit::core::positions::position_counts;
use rtimeaudit::core::summary::store_summary;
use rtimeaudit::core::{Cell, ReportKind, ReportTable};
use rtimeaudit::ingest::read_records;
use rtimeaudit::models::TimeRecord;

fn sample() -> Vec<TimeRecord> {
    read_records(SAMPLE_CSV.as_bytes(), ',').expect("parse sample")
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_conversion_table_one_row_per_record() {
    let rows = conversion_table(&sample());

    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0].key, "E001");
    assert_eq!(rows[0].regular_hours, 80.0);
    assert_eq!(rows[0].overtime_hours, 5.0);
    assert_eq!(rows[4].key, "E003");

    let json = serde_json::to_value(&rows[0]).expect("serialize");
    assert_eq!(json["Key"], "E001");
    assert_eq!(json["E_Hourly Regular_Hours"], 80.0);
    assert_eq!(json["E_Overtime_Hours"], 5.0);
}

#[test]
fn test_average_hours_per_period_end() {
    let rows = average_hours(&sample());

    assert_eq!(rows.len(), 2);

    assert_eq!(rows[0].end_date, date("2024-01-14"));
    assert_eq!(rows[0].records, 2);
    assert!(approx(rows[0].avg_total_hours, 82.5));
    assert!(approx(rows[0].avg_overtime_hours, 2.5));
    assert!(approx(rows[0].ot_percent.expect("percent"), 3.0));

    assert_eq!(rows[1].end_date, date("2024-01-28"));
    assert_eq!(rows[1].records, 3);
    assert!(approx(rows[1].avg_total_hours, 80.0));
    assert!(approx(rows[1].ot_percent.expect("percent"), 4.2));
}

#[test]
fn test_store_summary_hours_and_pay() {
    let stores = store_summary(&sample());

    assert_eq!(stores.len(), 2);
    let a = &stores[0];
    assert_eq!(a.store, "Store A");
    assert_eq!(a.employees, 2);
    assert!(approx(a.total_hours, 165.0));
    assert!(approx(a.hours_view().ot_percent.expect("percent"), 3.0));
    assert!(approx(a.total_pay, 3350.0));
    assert!(approx(a.pay_view().ot_percent.expect("percent"), 4.5));

    let b = &stores[1];
    assert_eq!(b.store, "Store B");
    assert_eq!(b.employees, 3);
    assert!(approx(b.regular_hours, 230.0));
    assert!(approx(b.hours_view().ot_percent.expect("percent"), 4.2));
    assert!(approx(b.pay_view().ot_percent.expect("percent"), 3.9));
}

#[test]
fn test_store_summary_without_pay_columns() {
    let mut records = sample();
    for r in &mut records {
        r.reg_pay = None;
        r.over_pay = None;
        r.total_pay = None;
    }

    let stores = store_summary(&records);
    assert_eq!(stores[0].total_pay, 0.0);
    assert_eq!(stores[0].pay_view().ot_percent, None);
}

#[test]
fn test_position_counts_fill_missing_stores_with_zero() {
    let groups = position_counts(&sample());

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].description, "Cashier");
    assert_eq!(
        groups[0].stores,
        vec![("Store A".to_string(), 2), ("Store B".to_string(), 1)]
    );
    assert_eq!(groups[1].description, "Manager");
    assert_eq!(
        groups[1].stores,
        vec![("Store A".to_string(), 0), ("Store B".to_string(), 2)]
    );
}

#[test]
fn test_report_table_shapes() {
    let records = sample();

    let breaks = ReportTable::build(ReportKind::MissingBreakTime, &records).expect("build");
    assert_eq!(breaks.headers.len(), 11);
    assert_eq!(breaks.rows.len(), 1);
    assert_eq!(breaks.rows[0][0], "E001");
    assert_eq!(breaks.rows[0][5], "2024-01-15");
    assert_eq!(breaks.rows[0][10], "");
    assert!(breaks.json[0]["break_time"].is_null());
    assert_eq!(breaks.json[0]["rate_type"], "Hourly");

    let periods = ReportTable::build(ReportKind::MissingPayPeriods, &records).expect("build");
    assert_eq!(periods.headers.len(), 10);
    assert!(!periods.headers.contains(&"break_time"));
    assert_eq!(periods.rows.len(), 1);
    assert_eq!(periods.rows[0][0], "E003");
    assert!(periods.json[0].get("break_time").is_none());

    let hours = ReportTable::build(ReportKind::Hours, &records).expect("build");
    assert_eq!(hours.rows[1][4], "4.2");
}

#[test]
fn test_empty_snapshot_builds_empty_tables() {
    for kind in [
        ReportKind::Conversion,
        ReportKind::Hours,
        ReportKind::SummaryHours,
        ReportKind::SummaryPay,
        ReportKind::Positions,
        ReportKind::MissingBreakTime,
        ReportKind::MissingPayPeriods,
    ] {
        let table = ReportTable::build(kind, &[]).expect("build");
        assert!(table.is_empty(), "{} should be empty", kind.as_str());
        assert_eq!(table.json, serde_json::json!([]));
    }
}

#[test]
fn test_counts_skip_rows_without_employee_name() {
    let mut manager = rec("E9", "2024-01-01", "2024-01-14", "Salary", None);
    manager.store = "Store B".to_string();
    manager.description = "Manager".to_string();

    let mut cashier = rec("E1", "2024-01-01", "2024-01-14", "Hourly", Some(1.0));
    cashier.employee_name = Some("Ann".to_string());

    let records = vec![manager, cashier];

    let groups = position_counts(&records);
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].description, "Cashier");
    assert_eq!(
        groups[0].stores,
        vec![("Store A".to_string(), 1), ("Store B".to_string(), 0)]
    );
    assert_eq!(groups[1].description, "Manager");
    assert_eq!(
        groups[1].stores,
        vec![("Store A".to_string(), 0), ("Store B".to_string(), 0)]
    );

    let stores = store_summary(&records);
    let counts: Vec<(&str, usize)> = stores
        .iter()
        .map(|s| (s.store.as_str(), s.employees))
        .collect();
    assert_eq!(counts, [("Store A", 1), ("Store B", 0)]);
}

#[test]
fn test_positions_follow_store_then_description_order() {
    let mut records = Vec::new();
    for (store, description) in [
        ("Store C", "Cook"),
        ("Store A", "Manager"),
        ("Store B", "Cashier"),
    ] {
        let mut r = rec("E1", "2024-01-01", "2024-01-14", "Hourly", Some(1.0));
        r.employee_name = Some("Ann".to_string());
        r.store = store.to_string();
        r.description = description.to_string();
        records.push(r);
    }

    let groups = position_counts(&records);
    let descriptions: Vec<&str> = groups.iter().map(|g| g.description.as_str()).collect();
    assert_eq!(descriptions, ["Manager", "Cashier", "Cook"]);

    let stores: Vec<&str> = groups[0].stores.iter().map(|(s, _)| s.as_str()).collect();
    assert_eq!(stores, ["Store A", "Store B", "Store C"]);
}

#[test]
fn test_cells_keep_types_and_full_precision() {
    let mut r = rec("007", "2024-01-01", "2024-01-14", "Hourly", None);
    r.regular_hours = 7.125;
    let records = vec![r];

    let conversion = ReportTable::build(ReportKind::Conversion, &records).expect("build");
    let cells = conversion.cells();
    assert_eq!(
        cells[0],
        vec![
            Cell::Text("007".to_string()),
            Cell::Number(7.125),
            Cell::Number(0.0),
        ]
    );
    assert_eq!(cells[0][1].to_string(), "7.125");

    let breaks = ReportTable::build(ReportKind::MissingBreakTime, &records).expect("build");
    let cells = breaks.cells();
    assert_eq!(cells[0][0], Cell::Text("007".to_string()));
    assert_eq!(cells[0][4], Cell::Text("Hourly".to_string()));
    assert_eq!(cells[0][5], Cell::Date(date("2024-01-01")));
    assert_eq!(cells[0][10], Cell::Blank);
    assert_eq!(cells[0][5].to_string(), "2024-01-01");
}
