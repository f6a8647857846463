// tests/git_ops_test.rs
use changelog_release::git_ops::GitRepo;
use changelog_release::ReleaseError;
use git2::{Repository, Signature};
use tempfile::TempDir;

/// Repository with one commit, a `v1.0.0` tag and an `origin` remote.
fn setup_repo() -> TempDir {
    let dir = TempDir::new().unwrap();
    let repo = Repository::init(dir.path()).unwrap();

    let sig = Signature::now("Test", "test@example.com").unwrap();
    let tree_id = repo.index().unwrap().write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();
    let commit_id = repo
        .commit(Some("HEAD"), &sig, &sig, "initial", &tree, &[])
        .unwrap();
    let commit = repo.find_commit(commit_id).unwrap();
    repo.tag_lightweight("v1.0.0", commit.as_object(), false)
        .unwrap();
    repo.remote("origin", "https://example.invalid/repo.git")
        .unwrap();

    dir
}

#[test]
fn test_tag_exists() {
    let dir = setup_repo();
    let repo = GitRepo::discover(dir.path()).unwrap();

    assert!(repo.tag_exists("v1.0.0").unwrap());
    assert!(!repo.tag_exists("v1.1.0-beta").unwrap());
}

#[test]
fn test_has_remote() {
    let dir = setup_repo();
    let repo = GitRepo::discover(dir.path()).unwrap();

    assert!(repo.has_remote("origin").unwrap());
    assert!(!repo.has_remote("upstream").unwrap());
}

#[test]
fn test_ensure_can_publish() {
    let dir = setup_repo();
    let repo = GitRepo::discover(dir.path()).unwrap();

    assert!(repo.ensure_can_publish("v1.1.0-beta", "origin").is_ok());

    let err = repo.ensure_can_publish("v1.0.0", "origin").unwrap_err();
    assert!(matches!(err, ReleaseError::Tag(_)));
    assert!(err.to_string().contains("already exists"));

    let err = repo.ensure_can_publish("v1.1.0", "upstream").unwrap_err();
    assert!(err.to_string().contains("no remote named 'upstream'"));
}

#[test]
fn test_discover_from_subdirectory() {
    let dir = setup_repo();
    let sub = dir.path().join("src");
    std::fs::create_dir(&sub).unwrap();

    let repo = GitRepo::discover(&sub).unwrap();
    assert!(repo.tag_exists("v1.0.0").unwrap());
}

#[test]
fn test_url_remote_passes_preflight() {
    let dir = setup_repo();
    let repo = GitRepo::discover(dir.path()).unwrap();

    assert!(repo
        .ensure_can_publish("v1.1.0", "https://example.invalid/fork.git")
        .is_ok());
    assert!(repo
        .ensure_can_publish("v1.1.0", "git@example.invalid:owner/fork.git")
        .is_ok());

    // The existing-tag check still applies
    assert!(repo
        .ensure_can_publish("v1.0.0", "https://example.invalid/fork.git")
        .is_err());
}
