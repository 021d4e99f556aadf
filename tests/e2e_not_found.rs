mod common;
use common::cli::{QuestWorkspace, parse_json, run_quest};
use std::fs;

#[test]
fn test_not_found_leaves_journal_byte_identical() {
    let workspace = QuestWorkspace::new();
    run_quest(&workspace, ["add", "Find the idol", "--due", "soon"], "add");
    let before = fs::read(workspace.journal_path()).expect("journal");

    for args in [
        vec!["done", "42"],
        vec!["edit", "42", "Rewritten"],
        vec!["delete", "42"],
    ] {
        let output = run_quest(&workspace, &args, "missing");
        assert!(output.status.success(), "{args:?} should exit 0");
        assert!(output.stdout.contains("Quest #42 not found in the journal."));
        assert_eq!(fs::read(workspace.journal_path()).expect("journal"), before);
    }
}

#[test]
fn test_not_found_on_empty_journal_creates_no_file() {
    let workspace = QuestWorkspace::new();
    let output = run_quest(&workspace, ["done", "1"], "done");
    assert!(output.status.success());
    assert!(!workspace.journal_path().exists());
}

#[test]
fn test_not_found_json_output() {
    let workspace = QuestWorkspace::new();
    let output = run_quest(&workspace, ["delete", "7", "--json"], "delete_json");
    assert!(output.status.success());

    let out = parse_json(&output);
    assert_eq!(out["action"], "deleted");
    assert_eq!(out["id"], 7);
    assert_eq!(out["found"], false);
    assert!(out.get("quest").is_none());
}

#[test]
fn test_negative_id_is_not_found() {
    let workspace = QuestWorkspace::new();
    run_quest(&workspace, ["add", "Find the idol"], "add");
    let before = fs::read(workspace.journal_path()).expect("journal");

    for args in [vec!["done", "-1"], vec!["edit", "-1", "x"], vec!["delete", "-1"]] {
        let output = run_quest(&workspace, &args, "negative_id");
        assert!(output.status.success(), "{args:?} should exit 0");
        assert!(output.stdout.contains("Quest #-1 not found in the journal."));
        assert_eq!(fs::read(workspace.journal_path()).expect("journal"), before);
    }
}
