mod common;

use assert_cmd::Command as AssertCommand;
use common::TestStore;
use predicates::prelude::*;

#[cfg(unix)]
use common::host_segments;

#[cfg(unix)]
#[test]
fn test_run_forwards_arguments_and_output() {
    let store = TestStore::new();
    let (platform, arch) = host_segments();
    store.deposit_script(
        "echo-tool",
        &platform,
        &arch,
        "echo-tool",
        "#!/bin/sh\necho \"args: $@\"\n",
    );

    AssertCommand::new(env!("CARGO_BIN_EXE_binvoke"))
        .args(["run", "echo-tool"])
        .arg("--base")
        .arg(store.base())
        .args(["--", "hello", "world"])
        .assert()
        .success()
        .stdout(predicate::str::contains("args: hello world"));
}

#[cfg(unix)]
#[test]
fn test_run_forwards_child_exit_status() {
    let store = TestStore::new();
    let (platform, arch) = host_segments();
    store.deposit_script("failing", &platform, &arch, "failing", "#!/bin/sh\nexit 7\n");

    AssertCommand::new(env!("CARGO_BIN_EXE_binvoke"))
        .args(["run", "failing"])
        .arg("--base")
        .arg(store.base())
        .assert()
        .failure()
        .code(7);
}

#[cfg(unix)]
#[test]
fn test_run_resolves_candidates_in_priority_order() {
    let store = TestStore::new();
    let (platform, arch) = host_segments();
    store.deposit_script(
        "tool",
        &platform,
        &arch,
        "tool-preferred",
        "#!/bin/sh\necho preferred\n",
    );
    store.deposit_script("tool", &platform, &arch, "tool", "#!/bin/sh\necho fallback\n");

    AssertCommand::new(env!("CARGO_BIN_EXE_binvoke"))
        .args(["run", "tool", "--name", "tool-preferred", "--name", "tool"])
        .arg("--base")
        .arg(store.base())
        .assert()
        .success()
        .stdout(predicate::str::contains("preferred"));
}

#[test]
fn test_run_not_downloaded_exits_127_without_spawning() {
    let store = TestStore::new();

    AssertCommand::new(env!("CARGO_BIN_EXE_binvoke"))
        .args(["run", "ghost"])
        .arg("--base")
        .arg(store.base())
        .assert()
        .failure()
        .code(127)
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_run_unsupported_platform_exits_3() {
    let store = TestStore::new();

    AssertCommand::new(env!("CARGO_BIN_EXE_binvoke"))
        .args(["run", "ghost"])
        .arg("--base")
        .arg(store.base())
        .args(["--platform", "plan9", "--arch", "mips"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Unsupported platform"));
}

#[test]
fn test_run_empty_package_name_exits_2() {
    let store = TestStore::new();

    AssertCommand::new(env!("CARGO_BIN_EXE_binvoke"))
        .args(["run", " "])
        .arg("--base")
        .arg(store.base())
        .assert()
        .failure()
        .code(2);
}
