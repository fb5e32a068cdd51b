//! CLI integration tests using the REAL confbundle binary

mod common;

use common::{TestWorkspace, confbundle_cmd};
use predicates::prelude::*;
use serial_test::serial;

#[test]
fn test_help_output() {
    confbundle_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("update"))
        .stdout(predicate::str::contains("unbundle"))
        .stdout(predicate::str::contains("backup"))
        .stdout(predicate::str::contains("purge"));
}

#[test]
fn test_version_output() {
    confbundle_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("confbundle"));
}

#[test]
fn test_generate_creates_bundle() {
    let workspace = TestWorkspace::with_sample_tree();

    workspace
        .cmd()
        .arg("generate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated"))
        .stdout(predicate::str::contains("2 entries"))
        .stdout(predicate::str::contains("2 tracked file(s) found, 0 not readable"));

    let bundle = workspace.read_file("configs_bundle.yaml");
    assert!(bundle.starts_with("# Configuration bundle"));
    assert!(bundle.contains("# Generated at: "));
    assert!(bundle.contains("run_basic_yaml:\n  path: \"run/basic.yaml\"\n"));
    assert!(bundle.contains("run_plugins_web_yml:\n"));
    assert!(!bundle.contains("notes"));
    assert!(workspace.list_dir("backups").is_empty());
}

#[test]
fn test_generate_twice_backs_up_previous_bundle() {
    let workspace = TestWorkspace::with_sample_tree();
    workspace.cmd().arg("generate").assert().success();
    workspace.cmd().arg("generate").assert().success();

    let backups = workspace.list_dir("backups");
    assert_eq!(backups.len(), 1);
    assert!(backups[0].starts_with("configs_bundle.yaml."));
    assert!(backups[0].ends_with(".bak"));
}

#[test]
fn test_generate_without_tracked_files_is_a_notice() {
    let workspace = TestWorkspace::new();
    workspace.write_file("run/readme.md", "# nothing tracked\n");

    workspace
        .cmd()
        .arg("generate")
        .assert()
        .success()
        .stdout(predicate::str::contains("No tracked documents"))
        .stderr(predicate::str::contains("Error:").not());

    assert!(!workspace.file_exists("configs_bundle.yaml"));
    assert!(!workspace.file_exists("backups"));
}

#[test]
fn test_update_merges_new_files() {
    let workspace = TestWorkspace::with_sample_tree();
    workspace.cmd().arg("generate").assert().success();

    workspace.write_file("run/extra.yaml", "extra: true\n");
    workspace
        .cmd()
        .arg("update")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 added"));

    let bundle = workspace.read_file("configs_bundle.yaml");
    assert!(bundle.contains("run_extra_yaml:"));
    assert!(bundle.contains("run_basic_yaml:"));
    assert!(workspace.list_dir("backups").is_empty());
}

#[test]
fn test_unbundle_round_trip() {
    let workspace = TestWorkspace::with_sample_tree();
    workspace.cmd().arg("generate").assert().success();

    let bundle = workspace
        .read_file("configs_bundle.yaml")
        .replace("port: 8080", "port: 9090");
    workspace.write_file("configs_bundle.yaml", &bundle);

    workspace
        .cmd()
        .args(["unbundle", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 2 file(s) back"));

    assert_eq!(
        workspace.read_file("run/basic.yaml"),
        "name: demo\nport: 9090\n"
    );
    assert_eq!(
        workspace.read_file("run/plugins/web.yml"),
        "enabled: true\nroutes:\n  - /\n"
    );
    // one backup per overwritten file
    assert_eq!(workspace.list_dir("backups").len(), 2);
}

#[test]
fn test_unbundle_creates_missing_files() {
    let workspace = TestWorkspace::new();
    workspace.write_file(
        "configs_bundle.yaml",
        "run_new_yaml:\n  path: \"run/deep/new.yaml\"\n  content: |\n    fresh: true\n\n\n",
    );

    workspace
        .cmd()
        .args(["unbundle", "-y"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 new"));

    assert_eq!(workspace.read_file("run/deep/new.yaml"), "fresh: true\n");
}

#[test]
fn test_unbundle_skips_incomplete_entries() {
    let workspace = TestWorkspace::new();
    workspace.write_file(
        "configs_bundle.yaml",
        "a:\n  path: \"run/a.yaml\"\n  content: \"a: 1\\n\"\n\
         b:\n  content: \"b: 1\\n\"\n\
         c:\n  path: \"run/c.yaml\"\n  content: \"c: 1\\n\"\n",
    );

    workspace
        .cmd()
        .args(["unbundle", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 2 file(s) back"))
        .stdout(predicate::str::contains("missing path"));
}

#[test]
fn test_unbundle_empty_bundle_is_a_notice() {
    let workspace = TestWorkspace::new();
    workspace.write_file("configs_bundle.yaml", "# nothing here\n");

    workspace
        .cmd()
        .args(["unbundle", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("has no entries"));
}

#[test]
fn test_unbundle_without_bundle_fails() {
    let workspace = TestWorkspace::new();
    workspace
        .cmd()
        .args(["unbundle", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Bundle not found"));
}

#[test]
fn test_unbundle_malformed_bundle_fails() {
    let workspace = TestWorkspace::new();
    workspace.write_file("configs_bundle.yaml", "a: [unclosed\n");
    workspace
        .cmd()
        .args(["unbundle", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed bundle"));
}

#[test]
fn test_backup_snapshots_tree() {
    let workspace = TestWorkspace::with_sample_tree();

    workspace
        .cmd()
        .arg("backup")
        .assert()
        .success()
        .stdout(predicate::str::contains("Backed up 2 file(s)"));

    let backups = workspace.list_dir("backups");
    assert_eq!(backups.len(), 1);
    assert!(backups[0].starts_with("yaml_full_backup_"));

    let snapshot = format!("backups/{}", backups[0]);
    assert_eq!(
        workspace.read_file(&format!("{snapshot}/basic.yaml")),
        "name: demo\nport: 8080\n"
    );
    assert!(workspace.file_exists(&format!("{snapshot}/plugins/web.yml")));
    assert!(!workspace.file_exists(&format!("{snapshot}/notes.txt")));
}

#[test]
fn test_purge_with_yes_removes_store() {
    let workspace = TestWorkspace::with_sample_tree();
    workspace.cmd().arg("backup").assert().success();

    workspace
        .cmd()
        .args(["purge", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted backup store"));

    assert!(!workspace.file_exists("backups"));
    assert!(workspace.file_exists("run/basic.yaml"));
}

#[test]
fn test_purge_without_store() {
    let workspace = TestWorkspace::new();
    workspace
        .cmd()
        .args(["purge", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No backups to delete"));
}

#[test]
fn test_custom_config_file() {
    let workspace = TestWorkspace::new();
    workspace.write_file("conf/app.yaml", "a: 1\n");
    workspace.write_file(
        "confbundle.yaml",
        "source_dir: conf\nbundle_file: out/all.yaml\nbanner: Team configs\n",
    );

    workspace.cmd().arg("generate").assert().success();

    let bundle = workspace.read_file("out/all.yaml");
    assert!(bundle.starts_with("# Team configs\n"));
    assert!(bundle.contains("conf_app_yaml:"));
}

#[test]
fn test_invalid_config_fails() {
    let workspace = TestWorkspace::new();
    workspace.write_file("confbundle.yaml", "sources: run\n");

    workspace
        .cmd()
        .arg("generate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse configuration file"));
}

#[test]
fn test_completions_unknown_shell() {
    confbundle_cmd()
        .args(["completions", "tcsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown shell"));
}

#[test]
#[serial]
fn test_root_from_environment() {
    let workspace = TestWorkspace::with_sample_tree();

    confbundle_cmd()
        .env("CONFBUNDLE_ROOT", &workspace.path)
        .arg("generate")
        .assert()
        .success();

    assert!(workspace.file_exists("configs_bundle.yaml"));
}

#[test]
#[serial]
fn test_root_flag_overrides_environment() {
    let workspace = TestWorkspace::with_sample_tree();
    let other = TestWorkspace::new();

    confbundle_cmd()
        .env("CONFBUNDLE_ROOT", &other.path)
        .arg("--root")
        .arg(&workspace.path)
        .arg("generate")
        .assert()
        .success();

    assert!(workspace.file_exists("configs_bundle.yaml"));
    assert!(!other.file_exists("configs_bundle.yaml"));
}

#[test]
fn test_root_defaults_to_current_dir() {
    let workspace = TestWorkspace::with_sample_tree();

    confbundle_cmd()
        .current_dir(&workspace.path)
        .arg("generate")
        .assert()
        .success();

    assert!(workspace.file_exists("configs_bundle.yaml"));
}
