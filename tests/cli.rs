use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn cards_json() -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    file.write_all(
        br#"[
            {"card_name": "Discover", "current_balance": 500.00,
             "minimum_payment": 25.00, "payment_due_date": "5th", "apr": 20.0},
            {"card_name": "Amex", "current_balance": 2000.00,
             "minimum_payment": 60.00, "payment_due_date": "28th", "apr": 20.0}
        ]"#,
    )
    .unwrap();
    file
}

#[test]
fn schedules_cards_from_a_json_file() {
    let file = cards_json();

    Command::cargo_bin("cc-paydown")
        .unwrap()
        .args(["--file", file.path().to_str().unwrap()])
        .args(["--budget", "200", "--detailed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CREDIT CARD SUMMARY"))
        .stdout(predicate::str::contains("DEBT PAYOFF SCHEDULE"))
        .stdout(predicate::str::contains("Payoff Order: Discover, Amex"))
        .stdout(predicate::str::contains("Month 1:"));
}

#[test]
fn schedules_cards_from_a_csv_file() {
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    file.write_all(
        b"Card Name,Current Balance,Credit Limit,Minimum Payment,Payment Due Date\n\
          Visa,1200.00,5000.00,50.00,15th\n",
    )
    .unwrap();

    Command::cargo_bin("cc-paydown")
        .unwrap()
        .args(["--file", file.path().to_str().unwrap()])
        .args(["--budget", "200", "--default-apr", "24.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Payoff Time: 7 months"))
        .stdout(predicate::str::contains("Total Interest Paid: $91.57"));
}

#[test]
fn infeasible_budget_fails_with_shortfall() {
    let file = cards_json();

    Command::cargo_bin("cc-paydown")
        .unwrap()
        .args(["--file", file.path().to_str().unwrap()])
        .args(["--budget", "50"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("less than the minimum payments required"))
        .stderr(predicate::str::contains("short by 35.00"));
}

#[test]
fn calendar_mode_renders_the_requested_month() {
    let file = cards_json();

    Command::cargo_bin("cc-paydown")
        .unwrap()
        .args(["--file", file.path().to_str().unwrap()])
        .args(["--calendar-month", "2024-07"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PAYMENT CALENDAR - July 2024"))
        .stdout(predicate::str::contains("5th"))
        .stdout(predicate::str::contains("28th"));
}

#[test]
fn unsupported_file_type_is_rejected() {
    let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
    file.write_all(b"whatever").unwrap();

    Command::cargo_bin("cc-paydown")
        .unwrap()
        .args(["--file", file.path().to_str().unwrap(), "--budget", "100"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported file type"));
}
