use super::test_helpers::{stderr, stdout, Sandbox, FIVE_COMMITS};

#[test]
fn test_stack_prints_display_entries_newest_first() {
    let sandbox = Sandbox::new();
    let tool = sandbox.tool_printing(FIVE_COMMITS);

    let output = sandbox.run_with_tool(&tool, &["stack"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "Wire up settings page\n\
         Add settings model\n\
         Extract form helpers\n\
         Rename widgets\n\
         Initial scaffolding\n"
    );
}

#[test]
fn test_stack_strips_escape_codes() {
    let sandbox = Sandbox::new();
    let tool = sandbox.tool_printing(
        "\x1b[33m* a1b2c3d\x1b[m \x1b[1;32m(tag)\x1b[m Fix bug\n\x1b[33m* e4f5a6b\x1b[m Initial commit",
    );

    let output = sandbox.run_with_tool(&tool, &["stack"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "Fix bug\nInitial commit\n");
}

#[test]
fn test_stack_json() {
    let sandbox = Sandbox::new();
    let tool = sandbox.tool_printing("* a1b2c3d (tag) Fix bug\n* e4f5a6b Initial commit");

    let output = sandbox.run_with_tool(&tool, &["stack", "--json"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let entries: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(entries.as_array().unwrap().len(), 2);
    assert_eq!(entries[0]["display"], "Fix bug");
    assert_eq!(entries[1]["raw"], "* e4f5a6b Initial commit");
}

#[test]
fn test_landed_stack_is_shown_verbatim() {
    let sandbox = Sandbox::new();
    let message = "* a1b2c3d Fix bug\nThis branch has already landed.";
    let tool = sandbox.tool_printing(message);

    let output = sandbox.run_with_tool(&tool, &["stack"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), format!("{message}\n"));
}

#[test]
fn test_missing_tool_prints_instructions_and_fails() {
    let sandbox = Sandbox::new();
    let missing = sandbox.missing_tool();

    let output = sandbox.run_with_tool(&missing, &["stack"]);
    assert!(!output.status.success());
    assert!(stdout(&output).contains("requires mdm"));
    assert!(stdout(&output).contains("Please install it and try again"));
    assert!(stderr(&output).contains("Command not found"));
}

#[test]
fn test_failing_tool_exits_non_zero() {
    let sandbox = Sandbox::new();
    let tool = sandbox.tool_script("echo 'fatal: not a git repository' >&2\nexit 128");

    let output = sandbox.run_with_tool(&tool, &["stack"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("not a git repository"));
    assert!(!stdout(&output).contains("requires mdm"));
}

#[test]
fn test_configured_tool_path_is_used() {
    let sandbox = Sandbox::new();
    let tool = sandbox.tool_printing("* 1234567 Only commit");

    let set = sandbox.run(&["config", "set", "tool.path", tool.to_str().unwrap()]);
    assert!(set.status.success(), "stderr: {}", stderr(&set));

    let output = sandbox.run(&["stack"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "Only commit\n");
}

#[test]
fn test_stack_strips_raw_c1_escapes() {
    let sandbox = Sandbox::new();
    let tool = sandbox.tool_script(r"printf '\23333m* a1b2c3d\2330m Fix bug\n* e4f5a6b Initial commit\n'");

    let output = sandbox.run_with_tool(&tool, &["stack"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "Fix bug\nInitial commit\n");
}
