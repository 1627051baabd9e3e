mod common;

use common::TestContext;
use predicates::prelude::*;

#[test]
fn watch_once_mirrors_clipboard() {
    let ctx = TestContext::new();
    ctx.set_clipboard("copied");

    ctx.cli()
        .args(["watch", "--once"])
        .assert()
        .success()
        .stdout(predicate::str::contains("updated clipboard"))
        .stdout(predicate::str::contains("Finished after 1 tick(s)"));

    assert_eq!(ctx.storage()["default"]["clipboardContent"], "copied");
}

#[test]
fn watch_respects_disabled_clipboard_toggle() {
    let ctx = TestContext::new();
    ctx.cli().args(["prefs", "set", "auto-clipboard", "off"]).assert().success();
    ctx.set_clipboard("ignored");

    ctx.cli().args(["watch", "--once"]).assert().success();

    assert!(ctx.storage().get("default").is_none());
}

#[test]
fn watch_runs_requested_number_of_ticks() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["watch", "--ticks", "3", "--interval-ms", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Finished after 3 tick(s)"));
}

#[cfg(unix)]
#[test]
fn watch_asks_selection_command_for_selected_text() {
    let ctx = TestContext::with_sync(
        r#"
[sync]
selection = "command"
selection_command = ["sh", "-c", "cat >/dev/null; printf '{\"selectedText\":\"picked\"}'"]
interval_ms = 10
"#,
    );

    ctx.cli()
        .args(["watch", "--once"])
        .assert()
        .success()
        .stdout(predicate::str::contains("updated selected text"));

    assert_eq!(ctx.storage()["default"]["selectedText"], "picked");
}

#[cfg(unix)]
#[test]
fn failing_selection_command_does_not_stop_watch() {
    let ctx = TestContext::with_sync(
        r#"
[sync]
selection = "command"
selection_command = ["sh", "-c", "exit 3"]
"#,
    );
    ctx.set_clipboard("still works");

    ctx.cli().args(["watch", "--once"]).assert().success();

    assert_eq!(ctx.storage()["default"]["clipboardContent"], "still works");
}
