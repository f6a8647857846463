// tests/archive_test.rs
use std::collections::BTreeSet;
use std::fs::{self, File};
use std::io::Read;

use changelog_release::archive::zip_folder;
use tempfile::TempDir;

fn entry_names(path: &std::path::Path) -> BTreeSet<String> {
    let archive = zip::ZipArchive::new(File::open(path).unwrap()).unwrap();
    archive.file_names().map(str::to_string).collect()
}

fn build_tree(root: &std::path::Path) {
    fs::create_dir_all(root.join("nested/deeper")).unwrap();
    fs::create_dir_all(root.join("empty")).unwrap();
    fs::write(root.join("top.txt"), "top").unwrap();
    fs::write(root.join(".hidden"), "hidden").unwrap();
    fs::write(root.join("nested/deeper/leaf.txt"), "leaf").unwrap();
}

#[test]
fn test_entries_are_prefixed_with_folder_name() {
    let dir = TempDir::new().unwrap();
    let folder = dir.path().join("dist");
    build_tree(&folder);
    let output = dir.path().join("dist.zip");

    zip_folder(&folder, &output).unwrap();

    let expected: BTreeSet<String> = ["dist/top.txt", "dist/.hidden", "dist/nested/deeper/leaf.txt"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(entry_names(&output), expected);
}

#[test]
fn test_contents_are_deflated_and_intact() {
    let dir = TempDir::new().unwrap();
    let folder = dir.path().join("pkg");
    build_tree(&folder);
    let output = dir.path().join("pkg.zip");

    zip_folder(&folder, &output).unwrap();

    let mut archive = zip::ZipArchive::new(File::open(&output).unwrap()).unwrap();
    let mut leaf = archive.by_name("pkg/nested/deeper/leaf.txt").unwrap();
    assert_eq!(leaf.compression(), zip::CompressionMethod::Deflated);
    let mut contents = String::new();
    leaf.read_to_string(&mut contents).unwrap();
    assert_eq!(contents, "leaf");
}

#[test]
fn test_trailing_separator_in_folder_path() {
    let dir = TempDir::new().unwrap();
    let folder = dir.path().join("dist");
    build_tree(&folder);
    let output = dir.path().join("out.zip");

    let with_slash = format!("{}/", folder.display());
    zip_folder(&with_slash, &output).unwrap();

    assert!(entry_names(&output).contains("dist/top.txt"));
}

#[test]
fn test_rearchiving_replaces_output() {
    let dir = TempDir::new().unwrap();
    let folder = dir.path().join("dist");
    build_tree(&folder);
    let output = dir.path().join("dist.zip");

    zip_folder(&folder, &output).unwrap();
    let first = entry_names(&output);

    fs::remove_file(folder.join("top.txt")).unwrap();
    zip_folder(&folder, &output).unwrap();
    let second = entry_names(&output);

    assert_eq!(first.len(), second.len() + 1);
    assert!(!second.contains("dist/top.txt"));
}

#[test]
fn test_empty_folder_gives_empty_archive() {
    let dir = TempDir::new().unwrap();
    let folder = dir.path().join("nothing");
    fs::create_dir(&folder).unwrap();
    let output = dir.path().join("nothing.zip");

    zip_folder(&folder, &output).unwrap();
    assert!(entry_names(&output).is_empty());
}

#[cfg(unix)]
#[test]
fn test_symlinked_folder_keeps_link_name() {
    let dir = TempDir::new().unwrap();
    let real = dir.path().join("build_output");
    fs::create_dir(&real).unwrap();
    fs::write(real.join("a.txt"), "a").unwrap();
    let link = dir.path().join("dist");
    std::os::unix::fs::symlink(&real, &link).unwrap();
    let output = dir.path().join("dist.zip");

    zip_folder(&link, &output).unwrap();

    let expected: BTreeSet<String> = ["dist/a.txt".to_string()].into_iter().collect();
    assert_eq!(entry_names(&output), expected);
}

#[cfg(unix)]
#[test]
fn test_file_symlink_is_stored_as_file() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("target.txt");
    fs::write(&target, "linked contents").unwrap();
    let folder = dir.path().join("dist");
    fs::create_dir(&folder).unwrap();
    std::os::unix::fs::symlink(&target, folder.join("link.txt")).unwrap();
    let output = dir.path().join("dist.zip");

    zip_folder(&folder, &output).unwrap();

    let mut archive = zip::ZipArchive::new(File::open(&output).unwrap()).unwrap();
    let mut entry = archive.by_name("dist/link.txt").unwrap();
    let mut contents = String::new();
    entry.read_to_string(&mut contents).unwrap();
    assert_eq!(contents, "linked contents");
}

#[cfg(unix)]
#[test]
fn test_directory_symlink_is_not_descended() {
    let dir = TempDir::new().unwrap();
    let other = dir.path().join("other");
    fs::create_dir(&other).unwrap();
    fs::write(other.join("outside.txt"), "x").unwrap();
    let folder = dir.path().join("dist");
    fs::create_dir(&folder).unwrap();
    fs::write(folder.join("inside.txt"), "y").unwrap();
    std::os::unix::fs::symlink(&other, folder.join("linked_dir")).unwrap();
    let output = dir.path().join("dist.zip");

    zip_folder(&folder, &output).unwrap();

    let expected: BTreeSet<String> = ["dist/inside.txt".to_string()].into_iter().collect();
    assert_eq!(entry_names(&output), expected);
}

#[cfg(unix)]
#[test]
fn test_dangling_symlink_is_error() {
    let dir = TempDir::new().unwrap();
    let folder = dir.path().join("dist");
    fs::create_dir(&folder).unwrap();
    fs::write(folder.join("a.txt"), "a").unwrap();
    std::os::unix::fs::symlink(folder.join("gone"), folder.join("dangling")).unwrap();
    let output = dir.path().join("dist.zip");

    let err = zip_folder(&folder, &output).unwrap_err();
    assert!(matches!(err, changelog_release::ReleaseError::Io(_)));
}
