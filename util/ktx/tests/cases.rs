// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! End-to-end tests: case definition, registry lookup, and log output.

use std::sync::Mutex;

use ktx::{TestCase, def_case, find_case, ktx_check, ktx_require, run_case};
use log::{Metadata, Record};

#[def_case]
fn demo_math(tc: &mut TestCase) {
    ktx_check!(tc, 2 + 2, 4);
    ktx_check!(tc, 10 / 2, 5);
}

#[def_case]
fn demo_require_abort(tc: &mut TestCase) {
    ktx_require!(tc, 1, 2);
    ktx_check!(tc, 3, 3);
    ktx_check!(tc, 4, 5);
}

/// Collects every formatted log line for inspection.
struct CaptureLog {
    lines: Mutex<Vec<String>>,
}

impl log::Log for CaptureLog {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        self.lines.lock().unwrap().push(record.args().to_string());
    }

    fn flush(&self) {}
}

static CAPTURE: CaptureLog = CaptureLog {
    lines: Mutex::new(Vec::new()),
};

fn drain_lines() -> Vec<String> {
    std::mem::take(&mut *CAPTURE.lines.lock().unwrap())
}

#[test]
fn test_registry_lookup() {
    let case = find_case("demo_math").unwrap();
    assert_eq!(case.name(), "demo_math");
    assert_eq!(case.module(), "cases");

    assert!(find_case("demo_require_abort").is_some());
    assert!(find_case("no_such_case").is_none());
    assert!(run_case("no_such_case").is_none());
}

// Everything that emits log lines lives in this one test so the captured
// buffer is not interleaved by parallel test threads.
#[test]
fn test_run_case_log_and_report_output() {
    let _ = log::set_logger(&CAPTURE);
    log::set_max_level(log::LevelFilter::Info);
    drain_lines();

    // A case whose checks all pass: three lines per evaluated check.
    let tc = run_case("demo_math").unwrap();
    assert_eq!(tc.test_count(), 2);
    assert_eq!(tc.eval_count(), 2);
    assert_eq!(tc.fail_count(), 0);
    assert_eq!(tc.result(), 0);

    let lines = drain_lines();
    assert_eq!(
        lines,
        [
            "demo_math: PASS",
            "\tEvaluation: 4 == 4",
            "\tExpression: 2 + 2 == 4",
            "demo_math: PASS",
            "\tEvaluation: 5 == 5",
            "\tExpression: 10 / 2 == 5",
        ]
    );

    // A failing require truncates the case: the two skipped checks are
    // attempted but leave no trace in the log.
    let tc = run_case("demo_require_abort").unwrap();
    assert_eq!(tc.test_count(), 3);
    assert_eq!(tc.eval_count(), 1);
    assert_eq!(tc.fail_count(), 1);
    assert_eq!(tc.result(), 1);
    assert!(tc.is_skipping());

    let lines = drain_lines();
    assert_eq!(
        lines,
        [
            "demo_require_abort: FAILED",
            "\tEvaluation: 1 == 2",
            "\tExpression: 1 == 2",
        ]
    );

    tc.report();
    let lines = drain_lines();
    assert_eq!(
        lines,
        [
            "[*] TESTCASE Report",
            " | TC Name   : demo_require_abort",
            " | Testnum   : 3",
            " | Result    : FAILED",
            " | Tested    : 1",
            " | Passed    : 0",
            " | Failed    : 1",
            "[*]",
        ]
    );

    // Reporting again emits the same lines; the record is unchanged.
    tc.report();
    assert_eq!(drain_lines().len(), 8);
    assert_eq!(tc.result(), 1);
}
