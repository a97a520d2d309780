#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A temp dir with a settings file enabling only the German Book of Mormon.
fn german_only() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(
        &path,
        r#"{"ui_language":"de","content":{"books":{"bom":true,"ot":false,"nt":false},"languages":{"de":true,"en":false}}}"#,
    )
    .unwrap();
    (dir, path)
}

fn liahona() -> Command {
    let mut cmd = Command::cargo_bin("liahona").unwrap();
    cmd.env_remove("LIAHONA_LANGUAGE_SET").env_remove("RUST_LOG");
    cmd
}

// ---------------------------------------------------------------------------
// draw
// ---------------------------------------------------------------------------

#[test]
fn draw_with_fixed_inputs_is_deterministic() {
    let (_dir, path) = german_only();
    let args = [
        "draw",
        "--hold-ms",
        "650",
        "--distance",
        "120",
        "--now",
        "1000",
        "--settings",
        path.to_str().unwrap(),
    ];

    let first = liahona().args(args).assert().success();
    let first = String::from_utf8(first.get_output().stdout.clone()).unwrap();
    assert!(first.contains("1 Nephi 17:33"));
    assert!(first.contains("gospellibrary://content/scriptures/bofm/1-ne/17?verse=33#p33"));
    assert!(first.contains(
        "https://www.churchofjesuschrist.org/study/scriptures/bofm/1-ne/17.33?lang=deu#p33"
    ));

    liahona()
        .args(args)
        .assert()
        .success()
        .stdout(predicate::eq(first));
}

#[test]
fn draw_distance_has_pointer_precision() {
    let (_dir, path) = german_only();
    let draw = |distance: &str| {
        let out = liahona()
            .args(["draw", "--hold-ms", "900", "--now", "2000", "--distance", distance])
            .args(["--settings", path.to_str().unwrap()])
            .assert()
            .success();
        String::from_utf8(out.get_output().stdout.clone()).unwrap()
    };
    assert_eq!(draw("16777216"), draw("16777217"));
}

#[test]
fn draw_short_press_fails_with_hint() {
    let (_dir, path) = german_only();
    liahona()
        .args(["draw", "--hold-ms", "400", "--now", "5000"])
        .args(["--settings", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Länger fokussieren"));
}

#[test]
fn draw_rejects_negative_hold() {
    let (_dir, path) = german_only();
    liahona()
        .args(["draw", "--hold-ms=-5", "--settings", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("hold-ms"));
}

#[test]
fn draw_without_settings_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.json");
    liahona()
        .args(["draw", "--now", "123456", "--settings", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("gospellibrary://content/scriptures/"));
    assert!(!path.exists());
}

// ---------------------------------------------------------------------------
// books
// ---------------------------------------------------------------------------

#[test]
fn books_lists_active_catalog() {
    let (_dir, path) = german_only();
    liahona()
        .args(["books", "--settings", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Worte Mormons")
                .and(predicate::str::contains("15 books"))
                .and(predicate::str::contains("Genesis").not()),
        );
}

#[test]
fn books_defaults_to_everything() {
    let dir = TempDir::new().unwrap();
    liahona()
        .args(["books", "--settings"])
        .arg(dir.path().join("none.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("96 books"));
}

#[test]
fn books_with_empty_selection_falls_back() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(
        &path,
        r#"{"content":{"books":{"bom":false,"ot":false,"nt":false}}}"#,
    )
    .unwrap();
    liahona()
        .args(["books", "--settings", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("15 books").and(predicate::str::contains("Jakob")));
}

#[test]
fn books_with_garbage_settings_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, "{ not json").unwrap();
    liahona()
        .args(["books", "--settings", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("96 books"));
}

// ---------------------------------------------------------------------------
// link
// ---------------------------------------------------------------------------

#[test]
fn link_prints_both_urls() {
    liahona()
        .args(["link", "john", "3", "16", "--lang", "en"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("gospellibrary://content/scriptures/nt/john/3?verse=16#p16")
                .and(predicate::str::contains(
                    "https://www.churchofjesuschrist.org/study/scriptures/nt/john/3.16?lang=eng#p16",
                )),
        );
}

#[test]
fn link_unknown_book_fails() {
    liahona()
        .args(["link", "narnia", "1", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("narnia"));
}

#[test]
fn link_out_of_range_fails() {
    liahona()
        .args(["link", "enos", "2", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("chapters 1-1"));
    liahona()
        .args(["link", "enos", "1", "28"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("verses 1-27"));
}

// ---------------------------------------------------------------------------
// settings
// ---------------------------------------------------------------------------

#[test]
fn settings_set_then_show() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested/settings.json");
    let path_str = path.to_str().unwrap();

    liahona()
        .args(["settings", "set", "ot=false", "de=false", "--ui", "en"])
        .args(["--settings", path_str])
        .assert()
        .success()
        .stdout(predicate::str::contains("settings saved"));

    let saved = fs::read_to_string(&path).unwrap();
    assert!(saved.contains("\"ui_language\": \"en\""));
    assert!(saved.contains("\"ot\": false"));

    liahona()
        .args(["settings", "show", "--settings", path_str])
        .assert()
        .success()
        .stdout(predicate::str::contains("42 books"));
}

#[test]
fn settings_set_rejects_unknown_flag() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    liahona()
        .args(["settings", "set", "apocrypha=true"])
        .args(["--settings", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown content flag"));
    assert!(!path.exists());
}

#[test]
fn settings_set_requires_a_change() {
    let dir = TempDir::new().unwrap();
    liahona()
        .args(["settings", "set", "--settings"])
        .arg(dir.path().join("s.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("nothing to change"));
}

#[test]
fn settings_reset_writes_defaults() {
    let (_dir, path) = german_only();
    liahona()
        .args(["settings", "reset", "--settings", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("96 books"));
    let saved = fs::read_to_string(&path).unwrap();
    assert!(saved.contains("\"nt\": true"));
}

#[test]
fn language_set_env_changes_defaults() {
    let dir = TempDir::new().unwrap();
    liahona()
        .env("LIAHONA_LANGUAGE_SET", "de-only")
        .args(["books", "--settings"])
        .arg(dir.path().join("none.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("15 books"));
}
