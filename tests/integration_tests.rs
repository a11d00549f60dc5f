mod common;
use common::{init_store_with_project, pgk, setup_test_store};
use predicates::prelude::*;

#[test]
fn test_project_add_becomes_active() {
    let store = setup_test_store("project_add_becomes_active");
    let pid = init_store_with_project(&store, "Thesis");

    pgk()
        .args(["--store", &store, "project", "--list"])
        .assert()
        .success()
        .stdout(predicate::str::contains(&pid))
        .stdout(predicate::str::contains("Thesis"))
        .stdout(predicate::str::contains(format!("* {pid}")));
}

#[test]
fn test_project_rename_and_delete() {
    let store = setup_test_store("project_rename_and_delete");
    let pid = init_store_with_project(&store, "Old Name");

    pgk()
        .args(["--store", &store, "project", "--rename", &pid, "New Name"])
        .assert()
        .success();

    pgk()
        .args(["--store", &store, "project", "--list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("New Name"));

    pgk()
        .args(["--store", &store, "project", "--del", &pid])
        .assert()
        .success();

    pgk()
        .args(["--store", &store, "project", "--list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("New Name").not());
}

#[test]
fn test_delete_unknown_project_fails() {
    let store = setup_test_store("delete_unknown_project");
    init_store_with_project(&store, "Only One");

    pgk()
        .args(["--store", &store, "project", "--del", "proj_nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("proj_nope"));
}

#[test]
fn test_add_and_list_task() {
    let store = setup_test_store("add_and_list_task");
    let pid = init_store_with_project(&store, "Garden");

    pgk()
        .args([
            "--store", &store, "add", "Plant tomatoes", "--desc", "Back bed", "--in", "3",
            "--unit", "days", "--project", &pid,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Plant tomatoes"));

    pgk()
        .args(["--store", &store, "list", "--project", &pid, "--details"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Plant tomatoes"))
        .stdout(predicate::str::contains("3 days"))
        .stdout(predicate::str::contains("Back bed"));
}

#[test]
fn test_list_all_view_shows_project_labels() {
    let store = setup_test_store("list_all_view");
    pgk()
        .args(["--store", &store, "--test", "init"])
        .assert()
        .success();

    // untouched store serves the default sample data
    pgk()
        .args(["--store", &store, "list", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Most Pressing"))
        .stdout(predicate::str::contains("PROJECT"))
        .stdout(predicate::str::contains("Website Redesign"))
        .stdout(predicate::str::contains("Mobile App"));
}

#[test]
fn test_done_toggles_completion() {
    let store = setup_test_store("done_toggles");
    pgk()
        .args(["--store", &store, "--test", "init"])
        .assert()
        .success();

    // task "1" comes from the default dataset
    pgk()
        .args(["--store", &store, "done", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("marked complete"));

    pgk()
        .args(["--store", &store, "done", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("reopened"));
}

#[test]
fn test_dup_appends_copy() {
    let store = setup_test_store("dup_appends_copy");
    pgk()
        .args(["--store", &store, "--test", "init"])
        .assert()
        .success();

    pgk()
        .args(["--store", &store, "dup", "1"])
        .assert()
        .success();

    pgk()
        .args(["--store", &store, "list", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Design Element (copy)"));
}

#[test]
fn test_del_completed_clears_done_tasks() {
    let store = setup_test_store("del_completed");
    pgk()
        .args(["--store", &store, "--test", "init"])
        .assert()
        .success();

    pgk().args(["--store", &store, "done", "1"]).assert().success();

    pgk()
        .args(["--store", &store, "del", "--completed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleared 1"));

    pgk()
        .args(["--store", &store, "list", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Design Element").not());
}

#[test]
fn test_del_without_args_fails() {
    let store = setup_test_store("del_without_args");
    pgk()
        .args(["--store", &store, "del"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--completed"));
}

#[test]
fn test_use_unknown_project_fails() {
    let store = setup_test_store("use_unknown_project");
    pgk()
        .args(["--store", &store, "--test", "init"])
        .assert()
        .success();

    pgk()
        .args(["--store", &store, "use", "proj_nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("proj_nope"));
}

#[test]
fn test_use_all_switches_view() {
    let store = setup_test_store("use_all_switches_view");
    let pid = init_store_with_project(&store, "Solo");

    pgk()
        .args(["--store", &store, "use", &pid])
        .assert()
        .success();

    pgk()
        .args(["--store", &store, "use", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("all-tasks view"));

    pgk()
        .args(["--store", &store, "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Most Pressing"));
}

#[test]
fn test_tasks_survive_process_restarts() {
    let store = setup_test_store("tasks_survive_restarts");
    let pid = init_store_with_project(&store, "Persistent");

    pgk()
        .args([
            "--store", &store, "add", "Check, with \"quotes\"", "--in", "90", "--unit",
            "minutes", "--project", &pid,
        ])
        .assert()
        .success();

    // separate process: the task comes back from the store, quoting intact
    pgk()
        .args(["--store", &store, "list", "--project", &pid])
        .assert()
        .success()
        .stdout(predicate::str::contains("Check, with \"quotes\""));
}
