use config_better::{AppDirs, Platform};
use std::collections::HashMap;
use tempfile::TempDir;

fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

fn unix_resolver(home: &TempDir) -> AppDirs<HashMap<String, String>> {
    let vars = env(&[("HOME", home.path().to_str().expect("utf-8 temp path"))]);
    AppDirs::with_env("notarealapp", false, Platform::Unix, vars).expect("resolver")
}

// --- makedirs ---

#[test]
fn makedirs_creates_all_three_directories() {
    let home = TempDir::new().expect("temp dir");
    let dirs = unix_resolver(&home);

    dirs.makedirs().expect("makedirs");

    assert!(dirs.data().unwrap().is_dir());
    assert!(dirs.config().unwrap().is_dir());
    assert!(dirs.cache().unwrap().is_dir());
}

#[test]
fn makedirs_is_idempotent() {
    let home = TempDir::new().expect("temp dir");
    let dirs = unix_resolver(&home);

    dirs.makedirs().expect("first makedirs");
    dirs.makedirs().expect("second makedirs");

    assert!(dirs.data().unwrap().is_dir());
}

#[test]
fn makedirs_leaves_existing_contents_alone() {
    let home = TempDir::new().expect("temp dir");
    let dirs = unix_resolver(&home);

    dirs.makedirs().expect("makedirs");
    let marker = dirs.config().unwrap().join("settings.toml");
    std::fs::write(&marker, "theme = \"dark\"\n").expect("write marker");

    dirs.makedirs().expect("makedirs again");
    assert!(marker.exists());
}

#[test]
fn makedirs_creates_override_directories() {
    let home = TempDir::new().expect("temp dir");
    let xdg_data = TempDir::new().expect("temp dir");
    let vars = env(&[
        ("HOME", home.path().to_str().unwrap()),
        ("XDG_DATA_HOME", xdg_data.path().to_str().unwrap()),
    ]);
    let dirs = AppDirs::with_env("notarealapp", false, Platform::Unix, vars).expect("resolver");

    dirs.makedirs().expect("makedirs");

    assert!(xdg_data.path().join("notarealapp").is_dir());
    assert!(home.path().join(".config").join("notarealapp").is_dir());
}

// --- rmdirs ---

#[test]
fn rmdirs_removes_all_three_directories() {
    let home = TempDir::new().expect("temp dir");
    let dirs = unix_resolver(&home);

    dirs.makedirs().expect("makedirs");
    dirs.rmdirs().expect("rmdirs");

    assert!(!dirs.data().unwrap().exists());
    assert!(!dirs.config().unwrap().exists());
    assert!(!dirs.cache().unwrap().exists());
}

#[test]
fn rmdirs_without_makedirs_is_a_noop() {
    let home = TempDir::new().expect("temp dir");
    let dirs = unix_resolver(&home);

    dirs.rmdirs().expect("rmdirs");
}

#[test]
fn rmdirs_removes_directory_contents() {
    let home = TempDir::new().expect("temp dir");
    let dirs = unix_resolver(&home);

    dirs.makedirs().expect("makedirs");
    let nested = dirs.data().unwrap().join("nested");
    std::fs::create_dir_all(&nested).expect("nested dir");
    std::fs::write(nested.join("blob.bin"), [0u8; 16]).expect("write blob");

    dirs.rmdirs().expect("rmdirs");
    assert!(!dirs.data().unwrap().exists());
}

// --- Windows shared-parent cleanup ---

#[test]
fn rmdirs_on_windows_removes_the_shared_parent() {
    let appdata = TempDir::new().expect("temp dir");
    let vars = env(&[("APPDATA", appdata.path().to_str().unwrap())]);
    let dirs = AppDirs::with_env("fakeapp", false, Platform::Windows, vars).expect("resolver");

    dirs.makedirs().expect("makedirs");
    let parent = appdata.path().join("fakeapp");
    assert!(parent.is_dir());

    dirs.rmdirs().expect("rmdirs");
    assert!(!parent.exists());
    assert!(appdata.path().is_dir());
}

#[test]
fn rmdirs_on_windows_keeps_the_parent_when_an_override_is_set() {
    let appdata = TempDir::new().expect("temp dir");
    let override_base = TempDir::new().expect("temp dir");
    let vars = env(&[
        ("APPDATA", appdata.path().to_str().unwrap()),
        ("XDG_CACHE_HOME", override_base.path().to_str().unwrap()),
    ]);
    let dirs = AppDirs::with_env("fakeapp", false, Platform::Windows, vars).expect("resolver");

    dirs.makedirs().expect("makedirs");
    let parent = appdata.path().join("fakeapp");
    assert!(parent.is_dir());

    dirs.rmdirs().expect("rmdirs");
    // Data and Config lived under the parent and are gone, but the parent
    // itself survives since the cache went elsewhere.
    assert!(parent.is_dir());
    assert!(!dirs.cache().unwrap().exists());
}

#[test]
fn rmdirs_with_posix_layout_skips_the_windows_cleanup() {
    let home = TempDir::new().expect("temp dir");
    let appdata = TempDir::new().expect("temp dir");
    let foreign = appdata.path().join("fakeapp");
    std::fs::create_dir_all(&foreign).expect("foreign dir");

    let vars = env(&[
        ("HOME", home.path().to_str().unwrap()),
        ("APPDATA", appdata.path().to_str().unwrap()),
    ]);
    let dirs = AppDirs::with_env("fakeapp", true, Platform::Windows, vars).expect("resolver");

    dirs.makedirs().expect("makedirs");
    dirs.rmdirs().expect("rmdirs");

    assert!(foreign.is_dir());
}
