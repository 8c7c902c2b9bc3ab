use super::test_helpers::{stderr, stdout, Sandbox, FIVE_COMMITS};

fn review_base(index: &str) -> std::process::Output {
    let sandbox = Sandbox::new();
    let tool = sandbox.tool_printing(FIVE_COMMITS);
    sandbox.run_with_tool(&tool, &["review-base", index])
}

#[test]
fn test_top_of_stack() {
    let output = review_base("0");
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "BASE+4\n");
}

#[test]
fn test_bottom_of_stack() {
    let output = review_base("4");
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "BASE\n");
}

#[test]
fn test_middle_of_stack() {
    let output = review_base("2");
    assert_eq!(stdout(&output), "BASE+2\n");
}

#[test]
fn test_out_of_range_index_fails() {
    let output = review_base("5");
    assert!(!output.status.success());
    assert!(stderr(&output).contains("out of range"));
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_landed_stack_has_no_base() {
    let sandbox = Sandbox::new();
    let tool = sandbox.tool_printing("Nothing to review: already landed");

    let output = sandbox.run_with_tool(&tool, &["review-base", "0"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "Nothing to review: already landed\n");
}

#[test]
fn test_missing_tool_fails() {
    let sandbox = Sandbox::new();
    let missing = sandbox.missing_tool();

    let output = sandbox.run_with_tool(&missing, &["review-base", "0"]);
    assert!(!output.status.success());
    assert!(stdout(&output).contains("requires mdm"));
}
