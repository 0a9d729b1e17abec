// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! The test-case record and assertion engine.

/// Outcome of a single equality check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The two values compared equal (also returned for skipped checks).
    Equal,
    /// The two values differed.
    NotEqual,
}

/// Per-case statistics record.
///
/// Holds the counters for one named test case and the one-way skip latch.
/// All state lives inline; construction cannot fail and there is nothing to
/// tear down. A `TestCase` must be exclusively owned by one thread for its
/// whole lifetime — the `&mut` receivers enforce that, and there is no
/// internal synchronization.
///
/// Counter invariant: `fail_count <= eval_count <= test_count`.
#[derive(Debug, Clone)]
pub struct TestCase {
    name: &'static str,
    test_count: u64,
    eval_count: u64,
    fail_count: u64,
    skip_next: bool,
}

impl TestCase {
    /// Create a fresh record for the case named `name`.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            test_count: 0,
            eval_count: 0,
            fail_count: 0,
            skip_next: false,
        }
    }

    /// Evaluate one check.
    ///
    /// `eval` is the precomputed comparison of the two operands after the
    /// `u64` funnel; `expr` is the source text of the comparison, logged
    /// verbatim for diagnostics. Every call counts as an attempt. Once the
    /// skip latch is set, the check is neither evaluated, logged, nor
    /// scored, and the verdict short-circuits to [`Verdict::Equal`] — a
    /// skipped check never signals a new failure.
    pub fn check(&mut self, eval: bool, expr: &str, value1: u64, value2: u64) -> Verdict {
        self.test_count += 1;
        if self.skip_next {
            return Verdict::Equal;
        }

        info!("{}: {}", self.name, if eval { "PASS" } else { "FAILED" });
        info!("\tEvaluation: {} == {}", value1, value2);
        info!("\tExpression: {}", expr);

        self.eval_count += 1;
        if eval {
            Verdict::Equal
        } else {
            self.fail_count += 1;
            Verdict::NotEqual
        }
    }

    /// Latch the case into skip mode.
    ///
    /// One-way: there is no transition back for the lifetime of this record.
    /// Invoked by `ktx_require!` when a required check fails.
    pub fn skip_remaining(&mut self) {
        self.skip_next = true;
    }

    /// Case name, as given at construction.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Checks attempted, skipped or not.
    pub const fn test_count(&self) -> u64 {
        self.test_count
    }

    /// Checks actually evaluated.
    pub const fn eval_count(&self) -> u64 {
        self.eval_count
    }

    /// Evaluated checks that compared false.
    pub const fn fail_count(&self) -> u64 {
        self.fail_count
    }

    /// Whether the skip latch is set.
    pub const fn is_skipping(&self) -> bool {
        self.skip_next
    }

    /// Fail count, verbatim. Zero means the case passed.
    pub const fn result(&self) -> u64 {
        self.fail_count
    }

    /// Emit the summary report for this case.
    ///
    /// Pure read; calling it repeatedly emits the same lines.
    pub fn report(&self) {
        info!("[*] TESTCASE Report");
        info!(" | TC Name   : {}", self.name);
        info!(" | Testnum   : {}", self.test_count);
        info!(
            " | Result    : {}",
            if self.fail_count != 0 { "FAILED" } else { "PASS" }
        );
        info!(" | Tested    : {}", self.eval_count);
        info!(" | Passed    : {}", self.eval_count - self.fail_count);
        info!(" | Failed    : {}", self.fail_count);
        info!("[*]");
    }
}
