use assert_cmd::cargo::cargo_bin_cmd;

fn run_help(args: &[&str]) {
    let mut cmd = cargo_bin_cmd!("mapic");
    cmd.args(args).arg("--help").assert().success();
}

#[test]
fn every_cli_command_has_help_path() {
    // top-level
    run_help(&[]);

    run_help(&["querystring"]);
    run_help(&["apply"]);
    run_help(&["key"]);
    run_help(&["verify"]);
    run_help(&["nodes"]);
}
