/*!
 * Tests for file utility functions
 */

use anyhow::Result;
use bookshelf::file_utils::FileManager;
use crate::common;

/// Test that file_exists returns true for existing files
#[test]
fn test_file_exists_withExistingFile_shouldReturnTrue() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file = common::create_test_file(temp_dir.path(), "test_file_exists.tmp", "test content")?;

    assert!(FileManager::file_exists(&test_file));
    assert!(!FileManager::dir_exists(&test_file));

    Ok(())
}

/// Test that file_exists returns false for non-existent files
#[test]
fn test_file_exists_withNonExistentFile_shouldReturnFalse() {
    assert!(!FileManager::file_exists("non_existent_file.tmp"));
}

/// find_files only returns matching extensions, in path order
#[test]
fn test_find_files_withMixedExtensions_shouldReturnSortedMatches() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_test_file(temp_dir.path(), "b.json", "[]")?;
    common::create_test_file(temp_dir.path(), "a.JSON", "[]")?;
    common::create_test_file(temp_dir.path(), "notes.txt", "skip")?;
    common::create_test_file(temp_dir.path(), "sub/c.json", "[]")?;

    let files = FileManager::find_files(temp_dir.path(), ".json")?;
    let names: Vec<String> = files
        .iter()
        .map(|p| p.strip_prefix(temp_dir.path()).unwrap().to_string_lossy().replace('\\', "/"))
        .collect();

    assert_eq!(names, vec!["a.JSON", "b.json", "sub/c.json"]);
    Ok(())
}

/// write_to_file creates missing parent directories
#[test]
fn test_write_to_file_withMissingParent_shouldCreateIt() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("deep").join("dir").join("out.txt");

    FileManager::write_to_file(&path, "hello")?;

    assert_eq!(FileManager::read_to_string(&path)?, "hello");
    Ok(())
}

/// Reading a missing file mentions the path
#[test]
fn test_read_to_string_withMissingFile_shouldFail() {
    let result = FileManager::read_to_string("definitely_missing_file.txt");
    assert!(result.is_err());
    assert!(format!("{:#}", result.unwrap_err()).contains("definitely_missing_file.txt"));
}
