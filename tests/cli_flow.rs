mod common;

use common::TestContext;
use predicates::prelude::*;
use serde_json::json;

#[test]
fn show_lists_default_boxes_in_render_order() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Profile: default"))
        .stdout(predicate::str::contains("selected-text"))
        .stdout(predicate::str::contains("clipboard-content"))
        .stdout(predicate::str::contains("text3"));
}

#[test]
fn user_can_compose_and_combine() {
    let ctx = TestContext::new();
    ctx.exclude_mirrors();

    ctx.cli().args(["box", "set", "text1", "x"]).assert().success();
    ctx.cli().args(["box", "set", "text2", "y"]).assert().success();
    ctx.cli().args(["box", "include", "text2", "off"]).assert().success();
    ctx.cli().args(["box", "set", "text3", "z"]).assert().success();

    ctx.cli()
        .arg("combine")
        .assert()
        .success()
        .stdout(predicate::str::contains("Copied 2 box(es)"));

    assert_eq!(ctx.clipboard(), "x\nz");
}

#[test]
fn single_use_box_is_cleared_after_combine() {
    let ctx = TestContext::new();
    ctx.exclude_mirrors();
    ctx.cli().args(["box", "set", "text1", "once"]).assert().success();
    ctx.cli().args(["box", "single-use", "text1", "on"]).assert().success();

    ctx.cli().arg("combine").assert().success().stdout(predicate::str::contains("text1"));

    assert_eq!(ctx.clipboard(), "once");
    assert_eq!(ctx.box_text("default", 0), "");
}

#[test]
fn paste_prepends_in_append_mode() {
    let ctx = TestContext::new();
    ctx.cli().args(["box", "set", "text1", "A"]).assert().success();
    ctx.cli().args(["box", "append", "text1", "on"]).assert().success();
    ctx.set_clipboard("B");

    ctx.cli().args(["box", "paste", "text1"]).assert().success();

    assert_eq!(ctx.box_text("default", 0), "B\nA");
}

#[test]
fn added_box_can_be_moved_and_removed() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["box", "add", "--name", "Notes", "--text", "hi", "--at", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added box text4"));
    assert_eq!(ctx.order("default")[0], "text4");

    ctx.cli().args(["box", "move", "text4", "99"]).assert().success();
    assert_eq!(ctx.order("default").last().map(String::as_str), Some("text4"));

    ctx.cli().args(["box", "remove", "text4"]).assert().success();
    assert!(!ctx.order("default").contains(&"text4".to_string()));
}

#[test]
fn mirror_boxes_cannot_be_removed() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["box", "remove", "selected-text"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn fixed_box_name_is_read_only() {
    let ctx = TestContext::new();
    ctx.cli().args(["box", "add-fixed", "signature"]).assert().success();

    ctx.cli()
        .args(["box", "rename", "text4", "Other"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not support renaming"));
}

#[test]
fn unknown_box_is_reported() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["box", "set", "text42", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Box 'text42' not found"));
}

#[test]
fn stale_order_entries_are_ignored() {
    let ctx = TestContext::new();
    ctx.seed_storage(json!({
        "default": {"boxes": [{"id": "text1", "text": "only"}]},
        "order_default": ["text9", "text1", "clipboard-content", "selected-text"]
    }));

    ctx.cli()
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("only"))
        .stdout(predicate::str::contains("text9").not());

    ctx.cli().arg("combine").assert().success();
    assert_eq!(ctx.clipboard(), "only");
}

#[test]
fn user_can_use_command_aliases() {
    let ctx = TestContext::new();
    ctx.exclude_mirrors();

    ctx.cli().args(["b", "set", "text1", "alias"]).assert().success();
    ctx.cli().arg("c").assert().success();

    assert_eq!(ctx.clipboard(), "alias");
}

#[test]
fn empty_included_box_leaves_a_blank_line() {
    let ctx = TestContext::new();
    ctx.exclude_mirrors();
    ctx.cli().args(["box", "set", "text1", "x"]).assert().success();
    ctx.cli().args(["box", "set", "text3", "z"]).assert().success();

    ctx.cli()
        .arg("combine")
        .assert()
        .success()
        .stdout(predicate::str::contains("Copied 3 box(es)"));

    assert_eq!(ctx.clipboard(), "x\n\nz");
}

#[test]
fn invalid_config_is_reported() {
    let ctx = TestContext::new();
    std::fs::write(ctx.home().join("config.toml"), "[sync]\ninterval_ms = 0\n").unwrap();

    ctx.cli()
        .arg("show")
        .assert()
        .failure()
        .stderr(predicate::str::contains("interval_ms"));
}
