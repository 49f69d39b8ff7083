//! Shared imports and helpers for the integration tests.
#![allow(unfulfilled_lint_expectations)]

#[expect(unused_imports, reason = "not every test file drives the binary")]
pub use assert_cmd::{Command, prelude::*};
#[expect(unused_imports, reason = "not every test file drives the binary")]
pub use predicates::prelude::*;
#[expect(unused_imports, reason = "not every test file uses fixtures")]
pub use rstest::{fixture, rstest};

#[macro_use]
#[path = "../common/mod.rs"]
mod common;
#[expect(unused_imports, reason = "re-exporting sample exports")]
pub use common::*;

/// Command for the `rtsbb` binary built by this package.
#[expect(dead_code, reason = "only the CLI tests run the binary")]
pub fn rtsbb() -> Command {
    Command::cargo_bin("rtsbb").expect("Failed to create cargo command for rtsbb")
}
