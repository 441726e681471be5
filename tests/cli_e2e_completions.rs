//! End-to-end tests for the `completions` command.

mod common;
use common::prelude::*;

#[test]
fn test_completions_bash() {
    TestFixture::new()
        .command()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("docwiki"))
        .stdout(predicate::str::contains("validate"));
}

#[test]
fn test_completions_zsh() {
    TestFixture::new()
        .command()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef docwiki"));
}

#[test]
fn test_completions_unknown_shell() {
    TestFixture::new()
        .command()
        .args(["completions", "tcsh"])
        .assert()
        .code(2);
}
