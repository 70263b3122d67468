// tests/core_stays_headless.rs
// Fails if the annotation core or settings reach into the GUI layer.
// Allowed: the handler that opens the native file dialog.

use std::fs;
use std::path::{Path, PathBuf};

fn collect_rs_files(dir: &Path, files: &mut Vec<PathBuf>) {
    if let Ok(entries) = fs::read_dir(dir) {
        for e in entries.flatten() {
            let p = e.path();
            if p.is_dir() {
                collect_rs_files(&p, files);
            } else if p.extension().map(|s| s == "rs").unwrap_or(false) {
                files.push(p);
            }
        }
    }
}

fn is_whitelisted(path: &Path) -> bool {
    let p = path.to_string_lossy();
    // The pick-file handler is the one place allowed to show a dialog
    p.contains("/annotation/handler.rs") || p.contains("\\annotation\\handler.rs")
}

fn offenders_in(dir: &Path, bad_patterns: &[&str]) -> Vec<(String, String)> {
    let mut files = Vec::new();
    collect_rs_files(dir, &mut files);

    let mut offenders = Vec::new();
    for file in files {
        if is_whitelisted(&file) {
            continue;
        }
        let content = match fs::read_to_string(&file) {
            Ok(c) => c,
            Err(_) => continue,
        };
        for pat in bad_patterns {
            if content.contains(pat) {
                offenders.push((file.to_string_lossy().to_string(), pat.to_string()));
            }
        }
    }
    offenders
}

fn report(offenders: Vec<(String, String)>, hint: &str) {
    if !offenders.is_empty() {
        let mut msg = String::from("Layer boundary violations found:\n");
        for (file, pat) in offenders {
            msg.push_str(&format!("  {} contains pattern '{}': {}\n", file, pat, hint));
        }
        panic!("{}", msg);
    }
}

#[test]
fn annotation_core_has_no_gui_dependencies() {
    let src_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("src");
    let bad_patterns = ["bevy_egui", "egui::", "rfd::", "crate::ui"];

    report(
        offenders_in(&src_dir.join("annotation"), &bad_patterns),
        "send an event instead",
    );
    report(
        offenders_in(&src_dir.join("settings"), &bad_patterns),
        "settings must load without a window",
    );
}

#[test]
fn ui_never_mutates_the_session_directly() {
    let ui_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("src").join("ui");
    // The window only reads the session; changes go through request events.
    let bad_patterns = ["ResMut<AnnotationSession>", "AnnotationStore::save", ".save_current("];

    report(
        offenders_in(&ui_dir, &bad_patterns),
        "write a Request* event instead",
    );
}
