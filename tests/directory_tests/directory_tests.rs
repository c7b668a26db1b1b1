//! Directory Tests
//!
//! Tests verify:
//! - Insert / find / remove
//! - Name uniqueness and length limits
//! - Newest-first listing order

use mfs::directory::{Directory, FileRecord};
use mfs::MfsError;

// =============================================================================
// Helper Functions
// =============================================================================

fn record(name: &str, size: usize, slot: usize) -> FileRecord {
    FileRecord {
        name: name.to_string(),
        size,
        created: "Mon Oct 19 12:00:00 2026".to_string(),
        slot,
    }
}

fn names(directory: &Directory) -> Vec<&str> {
    directory.list().into_iter().map(|r| r.name.as_str()).collect()
}

// =============================================================================
// Basic Operations Tests
// =============================================================================

#[test]
fn test_new_directory_is_empty() {
    let directory = Directory::new(255);

    assert!(directory.is_empty());
    assert_eq!(directory.len(), 0);
    assert!(directory.list().is_empty());
}

#[test]
fn test_insert_and_find() {
    let mut directory = Directory::new(255);

    directory.insert(record("notes.txt", 10, 3)).unwrap();

    let found = directory.find("notes.txt").unwrap();
    assert_eq!(found.size, 10);
    assert_eq!(found.slot, 3);
    assert!(directory.contains("notes.txt"));
}

#[test]
fn test_find_missing() {
    let directory = Directory::new(255);

    assert!(matches!(
        directory.find("ghost"),
        Err(MfsError::NotFound(name)) if name == "ghost"
    ));
}

#[test]
fn test_duplicate_name_rejected() {
    let mut directory = Directory::new(255);
    directory.insert(record("a", 1, 0)).unwrap();

    let result = directory.insert(record("a", 2, 1));

    assert!(matches!(result, Err(MfsError::AlreadyExists(_))));
    assert_eq!(directory.find("a").unwrap().size, 1);
    assert_eq!(directory.len(), 1);
}

#[test]
fn test_name_length_limit() {
    let mut directory = Directory::new(8);

    directory.insert(record("12345678", 1, 0)).unwrap();
    let result = directory.insert(record("123456789", 1, 1));

    assert!(matches!(result, Err(MfsError::NameTooLong { len: 9, max: 8 })));
}

#[test]
fn test_empty_name_rejected() {
    let mut directory = Directory::new(8);

    assert!(matches!(
        directory.insert(record("", 1, 0)),
        Err(MfsError::InvalidName)
    ));
}

#[test]
fn test_remove_returns_record() {
    let mut directory = Directory::new(255);
    directory.insert(record("a", 7, 2)).unwrap();

    let removed = directory.remove("a").unwrap();

    assert_eq!(removed, record("a", 7, 2));
    assert!(directory.is_empty());
    assert!(matches!(directory.remove("a"), Err(MfsError::NotFound(_))));
}

// =============================================================================
// Ordering Tests
// =============================================================================

#[test]
fn test_list_is_newest_first() {
    let mut directory = Directory::new(255);

    directory.insert(record("a", 1, 0)).unwrap();
    directory.insert(record("b", 1, 1)).unwrap();
    directory.insert(record("c", 1, 2)).unwrap();

    assert_eq!(names(&directory), vec!["c", "b", "a"]);
}

#[test]
fn test_list_after_remove_from_middle() {
    let mut directory = Directory::new(255);
    for (slot, name) in ["a", "b", "c", "d"].iter().enumerate() {
        directory.insert(record(name, 1, slot)).unwrap();
    }

    directory.remove("b").unwrap();

    assert_eq!(names(&directory), vec!["d", "c", "a"]);
}

#[test]
fn test_reinserted_name_lists_as_newest() {
    let mut directory = Directory::new(255);
    directory.insert(record("a", 1, 0)).unwrap();
    directory.insert(record("b", 1, 1)).unwrap();

    directory.remove("a").unwrap();
    directory.insert(record("a", 1, 0)).unwrap();

    assert_eq!(names(&directory), vec!["a", "b"]);
}
