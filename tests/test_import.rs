//! Tests for the `import` command reading person records from JSON files.

mod common;

use common::{amy, bob, carl_active, service_with};
use staffbook::error::CommandError;
use staffbook::parser::CommandParser;
use staffbook::services::AddressBookService;
use std::fs;
use std::path::Path;

fn run_import(service: &mut AddressBookService, path: &Path) -> Result<String, CommandError> {
    CommandParser::new()
        .parse_command(&format!("import {}", path.display()))
        .expect("import command should parse")
        .execute(service)
        .map(|r| r.feedback().to_string())
}

#[test]
fn test_import_adds_new_and_skips_duplicates() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("people.json");
    fs::write(&path, serde_json::to_string(&vec![amy(), bob(), carl_active()]).unwrap()).unwrap();

    // Amy is already present, so only Bob and Carl land.
    let mut service = service_with(vec![amy()]);
    let feedback = run_import(&mut service, &path).unwrap();
    assert_eq!(feedback, "Imported 2 persons (1 duplicates skipped)");
    assert_eq!(service.book().len(), 3);

    // Importing the same file again adds nothing.
    let feedback = run_import(&mut service, &path).unwrap();
    assert_eq!(feedback, "Imported 0 persons (3 duplicates skipped)");
    assert_eq!(service.book().len(), 3);
}

#[test]
fn test_import_missing_file_is_command_error() {
    let mut service = service_with(vec![]);
    let err = run_import(&mut service, Path::new("does/not/exist.json")).unwrap_err();
    let CommandError::ImportFailed(message) = err else {
        panic!("expected ImportFailed");
    };
    assert!(message.contains("does/not/exist.json"));
}

#[test]
fn test_import_invalid_record_rejects_whole_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(
        &path,
        r#"[{"name":"Valid Person","phone":"911","email":"v@example.com","address":"a",
            "org_id":"0000000001","device_info":"Dev-1"},
           {"name":"Bad Phone","phone":"x","email":"b@example.com","address":"a",
            "org_id":"0000000002","device_info":"Dev-2"}]"#,
    )
    .unwrap();

    let mut service = service_with(vec![]);
    assert!(matches!(
        run_import(&mut service, &path),
        Err(CommandError::ImportFailed(_))
    ));
    // Nothing was applied.
    assert!(service.book().is_empty());
}
