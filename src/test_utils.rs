//! Test utilities for creating temporary git repositories

#![cfg(test)]

use std::path::PathBuf;
use tempfile::TempDir;

/// A temporary git repository for testing
pub struct TestRepo {
    pub dir: TempDir,
    pub path: PathBuf,
}

impl TestRepo {
    /// Create a new empty git repository
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().to_path_buf();

        let repo = git2::Repository::init(&path).expect("Failed to init repo");

        // Configure user for commits
        let mut config = repo.config().expect("Failed to get config");
        config
            .set_str("user.name", "Test User")
            .expect("Failed to set user.name");
        config
            .set_str("user.email", "test@example.com")
            .expect("Failed to set user.email");

        Self { dir, path }
    }

    /// Create a repository with an initial commit
    pub fn with_initial_commit() -> Self {
        let test_repo = Self::new();
        test_repo.create_file("README.md", "# Test Repo");
        test_repo.stage_file("README.md");
        test_repo.create_commit("Initial commit");
        test_repo
    }

    /// Get the repository path as a string
    pub fn path_str(&self) -> String {
        self.path.to_string_lossy().to_string()
    }

    /// Get the git2 repository
    pub fn repo(&self) -> git2::Repository {
        git2::Repository::open(&self.path).expect("Failed to open repo")
    }

    /// Create a file with content
    pub fn create_file(&self, name: &str, content: &str) {
        let file_path = self.path.join(name);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Stage a file
    pub fn stage_file(&self, name: &str) {
        let repo = self.repo();
        let mut index = repo.index().expect("Failed to get index");
        index
            .add_path(std::path::Path::new(name))
            .expect("Failed to stage file");
        index.write().expect("Failed to write index");
    }

    /// Commit whatever is staged, returning the new commit hash
    pub fn create_commit(&self, message: &str) -> String {
        let repo = self.repo();

        let mut index = repo.index().expect("Failed to get index");
        let tree_oid = index.write_tree().expect("Failed to write tree");
        let tree = repo.find_tree(tree_oid).expect("Failed to find tree");
        let sig = repo.signature().expect("Failed to get signature");

        let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit> = parent.as_ref().into_iter().collect();

        repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .expect("Failed to create commit")
            .to_string()
    }

    /// Create a branch at the current HEAD, returning its tip hash
    pub fn create_branch(&self, name: &str) -> String {
        let repo = self.repo();
        let head = repo.head().expect("Failed to get HEAD");
        let commit = head.peel_to_commit().expect("Failed to get commit");
        repo.branch(name, &commit, false)
            .expect("Failed to create branch");
        commit.id().to_string()
    }

    /// Checkout a branch
    pub fn checkout_branch(&self, name: &str) {
        let repo = self.repo();
        let branch = repo
            .find_branch(name, git2::BranchType::Local)
            .expect("Failed to find branch");
        let obj = branch
            .get()
            .peel(git2::ObjectType::Commit)
            .expect("Failed to peel");
        repo.checkout_tree(&obj, None).expect("Failed to checkout");
        repo.set_head(branch.get().name().unwrap())
            .expect("Failed to set HEAD");
    }

    /// Get the current branch name
    pub fn current_branch(&self) -> String {
        let repo = self.repo();
        let head = repo.head().expect("Failed to get HEAD");
        head.shorthand().unwrap_or("").to_string()
    }

    /// Get the HEAD commit hash
    pub fn head_oid(&self) -> String {
        let repo = self.repo();
        let head = repo.head().expect("Failed to get HEAD");
        head.target().expect("Failed to get target").to_string()
    }

    /// Detach HEAD at the current commit
    pub fn detach_head(&self) {
        let repo = self.repo();
        let head = repo.head().expect("Failed to get HEAD");
        let oid = head.target().expect("Failed to get target");
        repo.set_head_detached(oid).expect("Failed to detach HEAD");
    }

    /// Create a remote-tracking ref at the current HEAD, e.g. `origin/main`
    pub fn create_remote_ref(&self, name: &str) {
        let repo = self.repo();
        let head = repo.head().expect("Failed to get HEAD");
        let oid = head.target().expect("Failed to get target");
        repo.reference(
            &format!("refs/remotes/{name}"),
            oid,
            false,
            "test remote ref",
        )
        .expect("Failed to create remote ref");
    }

    /// Create an annotated tag at the current HEAD
    pub fn create_tag(&self, name: &str) {
        let repo = self.repo();
        let head = repo.head().expect("Failed to get HEAD");
        let commit = head.peel_to_commit().expect("Failed to get commit");
        let sig = repo.signature().expect("Failed to get signature");
        repo.tag(
            name,
            commit.as_object(),
            &sig,
            &format!("Tag {}", name),
            false,
        )
        .expect("Failed to create tag");
    }
}

impl Default for TestRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_repo() {
        let repo = TestRepo::new();
        assert!(repo.path.exists());
        assert!(repo.path.join(".git").exists());
    }

    #[test]
    fn test_create_commit_moves_head() {
        let repo = TestRepo::with_initial_commit();
        let first = repo.head_oid();
        repo.create_file("a.txt", "a");
        repo.stage_file("a.txt");
        let second = repo.create_commit("second");
        assert_ne!(first, second);
        assert_eq!(repo.head_oid(), second);
    }

    #[test]
    fn test_checkout_branch() {
        let repo = TestRepo::with_initial_commit();
        repo.create_branch("feature");
        repo.checkout_branch("feature");
        assert_eq!(repo.current_branch(), "feature");
    }

    #[test]
    fn test_remote_ref_is_listed() {
        let repo = TestRepo::with_initial_commit();
        repo.create_remote_ref("origin/main");
        let git_repo = repo.repo();
        assert!(git_repo.find_reference("refs/remotes/origin/main").is_ok());
    }
}
