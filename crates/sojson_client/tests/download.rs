use std::fs;

use chrono::{TimeZone, Utc};
use sojson_client::{download_filename, is_download_filename, save_download, write_atomically};
use tempfile::tempdir;

#[test]
fn filename_replaces_colons_and_drops_fraction() {
    let now = Utc.with_ymd_and_hms(2026, 10, 16, 8, 5, 9).unwrap();
    let name = download_filename(now);

    assert_eq!(name, "sojson_result_2026-10-16T08-05-09.json");
    assert!(is_download_filename(&name));
}

#[test]
fn current_time_produces_valid_name() {
    assert!(is_download_filename(&download_filename(Utc::now())));
    assert!(!is_download_filename("sojson_result_2026-10-16T08:05:09.json"));
    assert!(!is_download_filename("result.json"));
}

#[test]
fn download_content_matches_buffer_verbatim() {
    let dir = tempdir().unwrap();
    let target_dir = dir.path().join("nested/downloads");
    let now = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
    let content = "{\n  \"a\": \"ü\"\n}\n";

    let path = save_download(&target_dir, now, content).unwrap();

    assert_eq!(
        path.file_name().unwrap().to_str().unwrap(),
        "sojson_result_2026-01-02T03-04-05.json"
    );
    assert_eq!(fs::read_to_string(&path).unwrap(), content);
}

#[test]
fn atomic_write_replaces_existing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("buffer.json");
    fs::write(&path, "old").unwrap();

    write_atomically(&path, "new").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "new");
}

#[test]
fn download_into_a_file_path_fails() {
    let dir = tempdir().unwrap();
    let blocker = dir.path().join("not_a_dir");
    fs::write(&blocker, "x").unwrap();

    assert!(save_download(&blocker, Utc::now(), "{}").is_err());
}
