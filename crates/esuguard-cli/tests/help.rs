use assert_cmd::Command;

/// Helper to get a Command for the esuguard binary.
#[allow(deprecated)]
fn esuguard_cmd() -> Command {
    Command::cargo_bin("esuguard").unwrap()
}

#[test]
fn help_works() {
    esuguard_cmd().arg("--help").assert().success();
}
