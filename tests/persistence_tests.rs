mod common;

use std::fs;

use common::{at, january_snapshot};
use resale_core::{
    to_delimited_text,
    utils::persistence::{export_file_name, write_export},
    LedgerError,
};

#[test]
fn file_name_stamps_at_second_resolution() {
    let stamp = at(2024, 2, 10);
    assert_eq!(
        export_file_name("ResaleLedger-Items", stamp),
        "ResaleLedger-Items-20240210-120000.csv"
    );
}

#[test]
fn repeated_exports_one_second_apart_get_distinct_names() {
    let first = at(2024, 2, 10);
    let second = first + chrono::Duration::seconds(1);
    assert_ne!(
        export_file_name("ResaleLedger-Items", first),
        export_file_name("ResaleLedger-Items", second)
    );
}

#[test]
fn write_export_persists_text_and_returns_path() {
    let dir = tempfile::tempdir().expect("temp dir");
    let text = to_delimited_text(&january_snapshot());

    let path = write_export(dir.path(), "ResaleLedger-Items", at(2024, 3, 1), &text)
        .expect("write export");
    assert!(path.exists());
    assert_eq!(path.extension().and_then(|e| e.to_str()), Some("csv"));

    let written = fs::read_to_string(&path).expect("read back");
    assert_eq!(written, text);
    // Staging file is gone after the rename.
    assert!(!path.with_extension("tmp").exists());
}

#[test]
fn write_to_missing_directory_is_a_recoverable_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("not-created");
    let result = write_export(&missing, "ResaleLedger-Items", at(2024, 3, 1), "header-only");
    assert!(matches!(result, Err(LedgerError::Io(_))));
}
