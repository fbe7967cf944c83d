use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

fn planner(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("planner").unwrap();
    cmd.env("FAMILY_PLANNER_DIR", dir.path())
        .env_remove("FAMILY_PLANNER_PLAN")
        .env_remove("RUST_LOG");
    cmd
}

fn initialized() -> TempDir {
    let dir = TempDir::new().unwrap();
    planner(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(contains("Default household plan written to"));
    dir
}

const SMALL_PLAN: &str = r#"{
  "income": { "salary": 10000000 },
  "categories": [
    { "name": "Living", "items": [ { "name": "All", "amount": 7000000 } ] }
  ],
  "emergency_fund": 1000000,
  "projection": { "horizon_months": 3, "monthly_growth_rate": 0.0 },
  "milestones": [
    { "name": "First 4M", "target": 4000000 },
    { "name": "Too far", "target": 50000000 }
  ]
}"#;

#[test]
fn init_then_summary_shows_allocation() {
    let dir = initialized();

    planner(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(contains("Monthly Allocation Summary"))
        .stdout(contains("Essentials"))
        .stdout(contains("Car Fund"))
        .stdout(contains("Expenses exceed income"));
}

#[test]
fn init_refuses_to_overwrite_without_force() {
    let dir = initialized();

    planner(&dir)
        .arg("init")
        .assert()
        .failure()
        .stderr(contains("--force"));

    planner(&dir).args(["init", "--force"]).assert().success();
}

#[test]
fn summary_without_plan_points_to_init() {
    let dir = TempDir::new().unwrap();

    planner(&dir)
        .arg("summary")
        .assert()
        .failure()
        .stderr(contains("planner init"));
}

#[test]
fn project_uses_horizon_and_start_month() {
    let dir = initialized();

    planner(&dir)
        .args(["project", "--horizon", "3", "--start", "2026-01"])
        .assert()
        .success()
        .stdout(contains("Savings Projection - 3 months"))
        .stdout(contains("Mar 2026"));
}

#[test]
fn invalid_horizon_is_rejected() {
    let dir = initialized();

    planner(&dir)
        .args(["project", "--horizon", "0"])
        .assert()
        .failure()
        .stderr(contains("Invalid horizon"));

    planner(&dir)
        .args(["project", "--horizon", "37"])
        .assert()
        .failure()
        .stderr(contains("Invalid horizon"));
}

#[test]
fn milestones_from_custom_plan() {
    let dir = TempDir::new().unwrap();
    let plan = dir.path().join("small.json");
    std::fs::write(&plan, SMALL_PLAN).unwrap();

    planner(&dir)
        .arg("--plan")
        .arg(&plan)
        .arg("milestones")
        .assert()
        .success()
        .stdout(contains("First 4M"))
        .stdout(contains("month 2"))
        .stdout(contains("not reached within horizon"));
}

#[test]
fn health_reports_advice() {
    let dir = initialized();

    planner(&dir)
        .arg("health")
        .assert()
        .success()
        .stdout(contains("Financial Health"))
        .stdout(contains("Expenses exceed income"));
}

#[test]
fn tips_lists_fixed_tips() {
    let dir = TempDir::new().unwrap();

    planner(&dir)
        .arg("tips")
        .assert()
        .success()
        .stdout(contains("50-30-20"));
}

#[test]
fn export_projection_csv() {
    let dir = initialized();
    let output = dir.path().join("projection.csv");

    planner(&dir)
        .arg("export")
        .arg(&output)
        .args(["--format", "csv", "--horizon", "6"])
        .assert()
        .success()
        .stdout(contains("Exported 6 months"));

    let csv = std::fs::read_to_string(&output).unwrap();
    assert!(csv.starts_with("Month,Income,Expenditure,Net Savings,Cumulative Savings"));
    assert_eq!(csv.lines().count(), 7);
}

#[test]
fn export_yaml_contains_evaluation() {
    let dir = initialized();
    let output = dir.path().join("plan-export.yaml");

    planner(&dir)
        .arg("export")
        .arg(&output)
        .args(["--format", "yaml"])
        .assert()
        .success();

    let yaml = std::fs::read_to_string(&output).unwrap();
    assert!(yaml.starts_with("# Family Planner Export"));
    assert!(yaml.contains("grand_total_expenditure"));
}

#[test]
fn config_shows_paths() {
    let dir = TempDir::new().unwrap();

    planner(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(contains("Family Planner Configuration"))
        .stdout(contains("plan.yaml"));
}

#[test]
fn export_without_output_goes_to_exports_dir() {
    let dir = initialized();

    planner(&dir)
        .args(["export", "--format", "allocation-csv"])
        .assert()
        .success()
        .stdout(contains("allocation.csv"));

    let csv = std::fs::read_to_string(dir.path().join("exports").join("allocation.csv")).unwrap();
    assert!(csv.starts_with("Category,Kind,Amount,Percent of Income"));
}

#[test]
fn plan_amounts_written_with_another_symbol() {
    let dir = TempDir::new().unwrap();
    let plan = dir.path().join("dollars.yaml");
    std::fs::write(
        &plan,
        "income:\n  salary: \"$ 10,000\"\ncategories:\n  - name: Living\n    items:\n      - name: Rent\n        amount: \"$ 4,000\"\n",
    )
    .unwrap();

    planner(&dir)
        .arg("--plan")
        .arg(&plan)
        .arg("summary")
        .assert()
        .success()
        .stdout(contains("Rp 6,000"));
}
