// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! The case registry: named test cases and their bodies.
//!
//! Cases defined with `#[def_case]` register a [`CaseDescriptor`] in the
//! [`CASES`] distributed slice at static-initialization time. The host runs
//! one case at a time by name; there is no suite orchestration here.

use linkme::distributed_slice;

use crate::case::TestCase;

/// All registered test cases.
#[distributed_slice]
pub static CASES: [CaseDescriptor];

/// One registered case: its name, defining module, and body.
#[derive(Debug)]
pub struct CaseDescriptor {
    name: &'static str,
    module: &'static str,
    body: fn(&mut TestCase),
}

impl CaseDescriptor {
    /// Build a descriptor. Called from `#[def_case]` expansion.
    pub const fn new(name: &'static str, module: &'static str, body: fn(&mut TestCase)) -> Self {
        Self { name, module, body }
    }

    /// Case name.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Path of the module that defined the case.
    pub const fn module(&self) -> &'static str {
        self.module
    }

    /// Run the case body against a fresh record and return the record.
    pub fn run(&self) -> TestCase {
        let mut tc = TestCase::new(self.name);
        (self.body)(&mut tc);
        tc
    }
}

/// Look up a registered case by name.
pub fn find_case(name: &str) -> Option<&'static CaseDescriptor> {
    CASES.iter().find(|case| case.name == name)
}

/// Run the named case and return its finished record, or `None` if no case
/// with that name is registered. The caller queries `result()` and emits
/// `report()` on the returned record.
pub fn run_case(name: &str) -> Option<TestCase> {
    find_case(name).map(CaseDescriptor::run)
}
