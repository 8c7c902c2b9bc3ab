use super::test_helpers::{stderr, stdout, Sandbox};
use std::fs;

#[test]
fn test_get_default_value() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["config", "get", "tool.review_command"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "mdm git review\n");
}

#[test]
fn test_default_tool_path_follows_home() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["config", "get", "tool.path"]);
    let expected = sandbox
        .dir
        .path()
        .join("Projects/material-motion-tools/contributor_tools/git/git");
    assert_eq!(stdout(&output).trim_end(), expected.to_str().unwrap());
}

#[test]
fn test_set_persists_and_unset_restores() {
    let sandbox = Sandbox::new();

    let set = sandbox.run(&["config", "set", "display.panel_name", "reviews"]);
    assert!(set.status.success(), "stderr: {}", stderr(&set));
    let saved = fs::read_to_string(sandbox.config_path()).unwrap();
    assert!(saved.contains("\"panel_name\": \"reviews\""));

    let get = sandbox.run(&["config", "get", "display.panel_name"]);
    assert_eq!(stdout(&get), "reviews\n");

    let unset = sandbox.run(&["config", "unset", "display.panel_name"]);
    assert!(unset.status.success());
    let get = sandbox.run(&["config", "get", "display.panel_name"]);
    assert_eq!(stdout(&get), "phabricator_panel\n");
}

#[test]
fn test_unknown_key_fails() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["config", "set", "tool.colour", "red"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Unknown config key"));
}

#[test]
fn test_corrupt_config_is_reported() {
    let sandbox = Sandbox::new();
    fs::write(sandbox.config_path(), "{ invalid json }").unwrap();

    let output = sandbox.run(&["stack"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Failed to parse config file"));
}

#[test]
fn test_list_shows_every_key() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["config", "list"]);
    assert!(output.status.success());
    let text = stdout(&output);
    for key in ["tool.path", "tool.stack_verb", "display.landed_marker"] {
        assert!(text.contains(key), "missing {key} in:\n{text}");
    }
}
