// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Kernel Test eXpressions.
//!
//! A minimal test-case framework for kernel code: no allocator, no host
//! runner, no unwinding. A test case is a named [`TestCase`] record holding
//! check statistics, mutated by equality checks written with [`ktx_check!`]
//! and [`ktx_require!`] and reported through the `log` facade. Whatever
//! logger the host installs is the output sink.
//!
//! ```rust
//! use ktx::{ktx_check, ktx_require, TestCase};
//!
//! let mut tc = TestCase::new("sample");
//! ktx_check!(tc, 2 + 2, 4);
//! ktx_require!(tc, 1, 1);
//! assert_eq!(tc.result(), 0);
//! ```
//!
//! Cases meant to be run by name are defined with [`def_case`] and looked up
//! through the registry (see [`run_case`]).

#![cfg_attr(not(test), no_std)]

#[macro_use]
extern crate log;

mod case;
mod registry;

pub use case::{TestCase, Verdict};
// Re-export the def_case macro from the ktx-macros crate
pub use ktx_macros::def_case;
pub use registry::{CASES, CaseDescriptor, find_case, run_case};

// Macro support, not public API.
#[doc(hidden)]
pub mod __private {
    pub use linkme;
}

/// Evaluate one equality check against a test case.
///
/// Both operands are funneled through `u64`; the caller guarantees the
/// conversion is lossless (integers, pointers, unit enums). The expression
/// text is captured for the log, never re-evaluated. Evaluates to the
/// [`Verdict`], which a plain ("soft") check simply discards.
#[macro_export]
macro_rules! ktx_check {
    ($tc:expr, $lhs:expr, $rhs:expr) => {{
        let value1 = ($lhs) as u64;
        let value2 = ($rhs) as u64;
        $tc.check(value1 == value2, stringify!($lhs == $rhs), value1, value2)
    }};
}

/// Like [`ktx_check!`], but a failing comparison latches the test case into
/// skip mode: every later check in the same case is counted as attempted and
/// otherwise ignored.
#[macro_export]
macro_rules! ktx_require {
    ($tc:expr, $lhs:expr, $rhs:expr) => {{
        if $crate::ktx_check!($tc, $lhs, $rhs) == $crate::Verdict::NotEqual {
            $tc.skip_remaining();
        }
    }};
}
