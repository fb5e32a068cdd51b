//! Library-level tests of the bundle engine on a real file system

mod common;

use common::TestWorkspace;
use confbundle::config::{BundlerConfig, Layout};
use confbundle::engine::BundleEngine;
use confbundle::error::BundlerError;
use confbundle::prompt::{AssumeYes, ScriptedPrompt};
use confbundle::report::{PurgeOutcome, UnbundleOutcome};

fn engine_for(workspace: &TestWorkspace) -> BundleEngine {
    BundleEngine::open(Layout::with_defaults(&workspace.path).unwrap())
}

#[test]
fn test_round_trip_preserves_awkward_content() {
    let workspace = TestWorkspace::new();
    let awkward = [
        ("run/indented.yaml", "  leading: spaces\nnext: line\n"),
        ("run/tabbed.yaml", "\tkey: tab\n"),
        ("run/gaps.yaml", "a: 1\n\n\nb: 2\n"),
        ("run/quotes.yaml", "text: \"it's # not a comment\"\n"),
        ("run/crlf.yaml", "a: 1\r\nb: 2\r\nc: x\u{2028}y\n"),
        ("run/.yaml", "dot: named\n"),
    ];
    for (path, content) in awkward {
        workspace.write_file(path, content);
    }

    let engine = engine_for(&workspace);
    engine.generate().unwrap();

    for (path, _) in awkward {
        workspace.write_file(path, "clobbered: true\n");
    }
    let outcome = engine.unbundle(&mut AssumeYes).unwrap();
    assert!(matches!(outcome, UnbundleOutcome::Completed(_)));

    for (path, content) in awkward {
        assert_eq!(workspace.read_file(path), content, "{path}");
    }
}

#[test]
fn test_source_dir_at_project_root_ignores_own_files() {
    let workspace = TestWorkspace::new();
    workspace.write_file("app.yaml", "a: 1\n");
    let layout = BundlerConfig {
        source_dir: ".".into(),
        ..BundlerConfig::default()
    }
    .resolve(&workspace.path)
    .unwrap();
    let engine = BundleEngine::open(layout);

    engine.generate().unwrap();
    engine.backup_all().unwrap();
    let report = engine.generate().unwrap();

    // the bundle, its backup and the snapshot are never bundled themselves
    assert_eq!(report.total_entries, 1);
}

#[test]
fn test_declined_purge_keeps_backups() {
    let workspace = TestWorkspace::new();
    workspace.write_file("run/app.yaml", "a: 1\n");
    let engine = engine_for(&workspace);
    engine.backup_all().unwrap();

    let mut prompt = ScriptedPrompt::new([false]);
    let outcome = engine.purge_backups(&mut prompt).unwrap();

    assert_eq!(outcome, PurgeOutcome::Cancelled);
    assert_eq!(workspace.list_dir("backups").len(), 1);
}

#[test]
fn test_empty_bundle_is_a_notice() {
    let workspace = TestWorkspace::new();
    workspace.write_file("configs_bundle.yaml", "# nothing here\n");

    let err = engine_for(&workspace).unbundle(&mut AssumeYes).unwrap_err();

    assert!(matches!(err, BundlerError::BundleEmpty { .. }));
    assert!(err.is_notice());
}
