use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::NamedTempFile;

// Init logger for tests
#[ctor::ctor]
pub fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

pub const KEYMAP_DOC: &str = r#"{
    "author_uid": "uid-1",
    "title": "Test layout",
    "desc": "two layers",
    "label_lang": "en-us",
    "layout_options": [],
    "keycodes": [
        { "0,0": 16900, "0,1": 4, "0,2": 23537 },
        { "0,0": 20737, "0,1": 22016, "0,2": 1 }
    ],
    "vendor_id": 18003,
    "product_id": 1,
    "product_name": "Test Board"
}"#;

/// Write `content` to a temporary file which lives as long as the handle.
#[allow(dead_code)]
pub fn temp_file(content: &str, suffix: &str) -> (PathBuf, NamedTempFile) {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    (file.path().to_path_buf(), file)
}

/// Run the `remap` binary in a fresh directory so no stray `remap.toml` is picked up.
#[allow(dead_code)]
pub fn remap(args: &[&str]) -> Output {
    let dir = tempfile::tempdir().unwrap();
    Command::new(env!("CARGO_BIN_EXE_remap"))
        .current_dir(dir.path())
        .args(args)
        .output()
        .expect("Failed to execute remap")
}
