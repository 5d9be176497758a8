use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{sc_with, setup_test_config};

#[test]
fn test_session_prints_summary_after_each_change() {
    let cfg = setup_test_config("session_summary");

    sc_with(&cfg)
        .arg("session")
        .write_stdin("select c-1\nstatus w-4 present\nquit\n")
        .assert()
        .success()
        .stdout(contains("select | crew 3 | present 2"))
        .stdout(contains("worker_status | crew 3 | present 3"))
        .stdout(contains("Session closed after 2 change(s)"));
}

#[test]
fn test_session_quiet_skips_summaries() {
    let cfg = setup_test_config("session_quiet");

    sc_with(&cfg)
        .args(["session", "--quiet"])
        .write_stdin("pay w-2 deduction 300 damaged rebar\n")
        .assert()
        .success()
        .stdout(contains("Recorded deduction for w-2 (n-1)"))
        .stdout(contains("payment_add |").not());
}

#[test]
fn test_session_keeps_going_after_errors() {
    let cfg = setup_test_config("session_errors");

    sc_with(&cfg)
        .arg("session")
        .write_stdin("fly away\nstatus w-99 leave\n# comment\nattend w-1 present 8\nshow\n")
        .assert()
        .success()
        .stderr(contains("unknown command 'fly'"))
        .stderr(contains("not found: w-99"))
        .stdout(contains("Logged w-1 as present (n-1)"))
        .stdout(contains("Crew: 4 | Present: 2"));
}

#[test]
fn test_session_changes_feed_later_views() {
    let cfg = setup_test_config("session_views");

    sc_with(&cfg)
        .arg("session")
        .write_stdin("select c-1\npay w-1 deduction 100\npay w-2 deduction 200\nshow\nlog\n")
        .assert()
        .success()
        .stdout(contains("Review 3 deductions before the next payout"))
        .stdout(contains("(n-2)"))
        .stdout(contains("w-2 deduction 200"));
}
