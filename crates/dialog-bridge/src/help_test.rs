//! Tests for the help dialog client.

use std::fs;

use crate::config::{DEFAULT_HELP_TEXT_SIZE, HELP_DEFAULT_HEIGHT, HELP_DEFAULT_WIDTH};
use crate::error::BridgeError;
use crate::help::HelpDialog;
use crate::test_support::{Call, calls, spawn_recording};

#[test]
fn test_new_window_has_default_geometry() {
    let (_actor, handle, recorder) = spawn_recording();
    let help = HelpDialog::new(handle).unwrap();

    assert_eq!(help.x().unwrap(), 0);
    assert_eq!(help.y().unwrap(), 0);
    assert_eq!(help.w().unwrap(), HELP_DEFAULT_WIDTH);
    assert_eq!(help.h().unwrap(), HELP_DEFAULT_HEIGHT);
    assert_eq!(help.text_size().unwrap(), DEFAULT_HELP_TEXT_SIZE);
    assert!(!help.visible().unwrap());
    assert_eq!(help.value().unwrap(), None);
    // Nothing presented while hidden
    assert!(calls(&recorder).is_empty());
}

#[test]
fn test_load_reads_file() {
    let (_actor, handle, _recorder) = spawn_recording();
    let dir = tempfile::tempdir().unwrap();
    let page = dir.path().join("index.html");
    fs::write(&page, "<h1>Help</h1><p>Press F1.</p>").unwrap();

    let help = HelpDialog::new(handle).unwrap();
    help.load(&page).unwrap();
    assert_eq!(help.value().unwrap().as_deref(), Some("<h1>Help</h1><p>Press F1.</p>"));
}

#[test]
fn test_failed_load_keeps_previous_content() {
    let (_actor, handle, _recorder) = spawn_recording();
    let dir = tempfile::tempdir().unwrap();

    let help = HelpDialog::new(handle).unwrap();
    help.set_value(Some("<p>old</p>")).unwrap();

    let missing = dir.path().join("missing.html");
    match help.load(&missing) {
        Err(BridgeError::Io { path, .. }) => assert_eq!(path, missing),
        other => panic!("Expected Io error, got: {:?}", other),
    }
    assert_eq!(help.value().unwrap().as_deref(), Some("<p>old</p>"));
}

#[test]
fn test_show_presents_and_changes_re_present() {
    let (_actor, handle, recorder) = spawn_recording();
    let help = HelpDialog::new(handle).unwrap();

    help.show().unwrap();
    assert!(help.visible().unwrap());
    help.position(40, 50).unwrap();
    help.set_text_size(16).unwrap();

    let calls = calls(&recorder);
    assert_eq!(calls.len(), 3);
    match &calls[2] {
        Call::PresentHelp(id, window) => {
            assert_eq!(*id, help.id());
            assert_eq!((window.x, window.y), (40, 50));
            assert_eq!(window.text_size, 16);
            assert!(window.visible);
        }
        other => panic!("Expected PresentHelp, got: {:?}", other),
    }
}

#[test]
fn test_hide_dismisses_once() {
    let (_actor, handle, recorder) = spawn_recording();
    let help = HelpDialog::new(handle).unwrap();

    help.show().unwrap();
    help.hide().unwrap();
    help.hide().unwrap();

    assert!(!help.visible().unwrap());
    let dismissals = calls(&recorder)
        .into_iter()
        .filter(|c| matches!(c, Call::DismissHelp(_)))
        .count();
    assert_eq!(dismissals, 1);
}

#[test]
fn test_resize_updates_every_dimension() {
    let (_actor, handle, _recorder) = spawn_recording();
    let help = HelpDialog::new(handle).unwrap();

    help.resize(1, 2, 300, 200).unwrap();
    assert_eq!(
        (help.x().unwrap(), help.y().unwrap(), help.w().unwrap(), help.h().unwrap()),
        (1, 2, 300, 200)
    );
}

#[test]
fn test_empty_value_clears_content() {
    let (_actor, handle, _recorder) = spawn_recording();
    let help = HelpDialog::new(handle).unwrap();

    help.set_value(Some("<p>x</p>")).unwrap();
    help.set_value(Some("")).unwrap();
    assert_eq!(help.value().unwrap(), None);
}

#[test]
fn test_drop_frees_the_window() {
    let (_actor, handle, recorder) = spawn_recording();
    let help = HelpDialog::new(handle.clone()).unwrap();
    let id = help.id();
    help.show().unwrap();
    drop(help);

    // Runs after the queued destroy
    let remaining = handle.call(|state| state.help_window_count()).unwrap();
    assert_eq!(remaining, 0);
    assert!(calls(&recorder).contains(&Call::DismissHelp(id)));
}

#[test]
fn test_shutdown_closes_visible_windows() {
    let (actor, handle, recorder) = spawn_recording();
    let help = HelpDialog::new(handle).unwrap();
    let id = help.id();
    help.show().unwrap();

    actor.shutdown();
    assert!(calls(&recorder).contains(&Call::DismissHelp(id)));
    assert!(matches!(help.visible(), Err(BridgeError::Disconnected)));
}

#[test]
fn test_windows_get_distinct_ids() {
    let (_actor, handle, _recorder) = spawn_recording();
    let first = HelpDialog::new(handle.clone()).unwrap();
    let second = HelpDialog::new(handle).unwrap();
    assert_ne!(first.id(), second.id());
}

#[test]
fn test_handle_to_destroyed_window_reports_closed() {
    let (_actor, handle, _recorder) = spawn_recording();
    let help = HelpDialog::new(handle.clone()).unwrap();
    let id = help.id();

    handle.call(move |state| state.destroy_help(id)).unwrap();

    assert!(matches!(help.visible(), Err(BridgeError::HelpWindowClosed(closed)) if closed == id));
    assert!(matches!(help.set_text_size(20), Err(BridgeError::HelpWindowClosed(_))));
    // The actor itself is still up
    assert_eq!(handle.call(|_| 1).unwrap(), 1);
}
