//! Git backend that shells out to the `git` binary

use std::path::PathBuf;
use std::process::Command;

use crate::error::{MizzenError, Result};
use crate::models::RewriteSelection;

use super::GitBackend;

/// `for-each-ref` atoms matching the ref catalog's record layout.
const REF_FORMAT: &str =
    "%(refname)|%(refname:short)|%(committerdate:iso-strict)|%(authorname)|%(objectname)|%(subject)";

/// `git log` placeholders matching the commit parser's record layout.
const LOG_FORMAT: &str = "%H|%P|%an|%ad|%s|%D";

/// Runs real git commands against one repository.
///
/// Every method is a single invocation plus line splitting; graph logic
/// lives entirely on the engine side.
#[derive(Debug)]
pub struct GitCli {
    repo_path: PathBuf,
}

impl GitCli {
    /// Open a backend against `repo_path`, verifying a repository is there.
    pub fn open(repo_path: impl Into<PathBuf>) -> Result<Self> {
        let cli = GitCli {
            repo_path: repo_path.into(),
        };
        match cli.run(&["rev-parse", "--git-dir"]) {
            Ok(_) => Ok(cli),
            Err(MizzenError::GitCommand(_)) => Err(MizzenError::RepositoryNotFound(
                cli.repo_path.display().to_string(),
            )),
            Err(e) => Err(e),
        }
    }

    /// Command with the no-popup settings every git invocation needs:
    /// no credential prompts, no console window on Windows.
    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new("git");
        cmd.arg("-C").arg(&self.repo_path);
        cmd.args(args);
        cmd.env("GIT_TERMINAL_PROMPT", "0");

        #[cfg(target_os = "windows")]
        {
            use std::os::windows::process::CommandExt;
            // CREATE_NO_WINDOW, prevents CMD popups
            cmd.creation_flags(0x08000000);
        }

        cmd
    }

    fn run(&self, args: &[&str]) -> Result<String> {
        let output = self.command(args).output()?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(MizzenError::GitCommand(stderr));
        }
        String::from_utf8(output.stdout).map_err(|_| MizzenError::InvalidOutput)
    }

    fn run_lines(&self, args: &[&str]) -> Result<Vec<String>> {
        Ok(self
            .run(args)?
            .lines()
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    /// Best-effort single-line query; None on failure or empty output.
    fn query(&self, args: &[&str]) -> Option<String> {
        let out = self.run(args).ok()?;
        let line = out.trim();
        if line.is_empty() {
            None
        } else {
            Some(line.to_string())
        }
    }
}

impl GitBackend for GitCli {
    fn list_refs(&self) -> Result<Vec<String>> {
        let format = format!("--format={REF_FORMAT}");
        self.run_lines(&[
            "for-each-ref",
            "--sort=-committerdate",
            &format,
            "refs/heads",
            "refs/remotes",
        ])
    }

    fn current_branch(&self) -> Option<String> {
        self.query(&["branch", "--show-current"])
    }

    fn log_commits(&self, limit: usize) -> Result<Vec<String>> {
        let count = limit.to_string();
        let format = format!("--pretty=format:{LOG_FORMAT}");
        self.run_lines(&[
            "log",
            "--all",
            "--topo-order",
            "--date=iso-strict",
            "-n",
            &count,
            &format,
        ])
    }

    fn current_head(&self) -> Option<String> {
        self.query(&["rev-parse", "HEAD"])
    }

    fn working_tree_clean(&self) -> Option<bool> {
        match self.run(&["status", "--porcelain"]) {
            Ok(out) => Some(out.trim().is_empty()),
            Err(e) => {
                tracing::warn!("could not determine working tree status: {e}");
                None
            }
        }
    }

    fn first_parent(&self, hash: &str) -> Option<String> {
        let rev = format!("{hash}^");
        self.query(&["rev-parse", &rev])
    }

    fn squash(&self, selection: &RewriteSelection, message: &str) -> Result<String> {
        self.run(&["reset", "--soft", &selection.base_hash])?;
        self.run(&["commit", "-m", message])?;
        self.current_head()
            .ok_or_else(|| MizzenError::GitCommand("HEAD missing after squash".to_string()))
    }

    fn drop_commits(&self, selection: &RewriteSelection) -> Result<String> {
        self.run(&["reset", "--hard", &selection.base_hash])?;
        self.current_head()
            .ok_or_else(|| MizzenError::GitCommand("HEAD missing after drop".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestRepo;

    #[test]
    fn test_open_rejects_non_repository() {
        let dir = tempfile::tempdir().unwrap();
        let err = GitCli::open(dir.path()).unwrap_err();
        assert!(matches!(err, MizzenError::RepositoryNotFound(_)));
    }

    #[test]
    fn test_open_accepts_repository() {
        let repo = TestRepo::with_initial_commit();
        assert!(GitCli::open(repo.path_str()).is_ok());
    }

    #[test]
    fn test_list_refs_yields_pipe_records() {
        let repo = TestRepo::with_initial_commit();
        let cli = GitCli::open(repo.path_str()).unwrap();

        let refs = cli.list_refs().unwrap();
        assert_eq!(refs.len(), 1);
        let fields: Vec<&str> = refs[0].splitn(6, '|').collect();
        assert_eq!(fields.len(), 6);
        assert!(fields[0].starts_with("refs/heads/"));
    }

    #[test]
    fn test_log_commits_newest_first_with_limit() {
        let repo = TestRepo::with_initial_commit();
        repo.create_file("a.txt", "one");
        repo.stage_file("a.txt");
        repo.create_commit("second");
        repo.create_file("b.txt", "two");
        repo.stage_file("b.txt");
        let third = repo.create_commit("third");

        let cli = GitCli::open(repo.path_str()).unwrap();
        let lines = cli.log_commits(2).unwrap();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with(&third));
    }

    #[test]
    fn test_current_branch_and_head() {
        let repo = TestRepo::with_initial_commit();
        let cli = GitCli::open(repo.path_str()).unwrap();

        assert_eq!(cli.current_branch(), Some(repo.current_branch()));
        assert_eq!(cli.current_head(), Some(repo.head_oid()));
    }

    #[test]
    fn test_working_tree_status_tracks_changes() {
        let repo = TestRepo::with_initial_commit();
        let cli = GitCli::open(repo.path_str()).unwrap();

        assert_eq!(cli.working_tree_clean(), Some(true));
        repo.create_file("dirty.txt", "changes");
        assert_eq!(cli.working_tree_clean(), Some(false));
    }

    #[test]
    fn test_first_parent_stops_at_root() {
        let repo = TestRepo::with_initial_commit();
        let root = repo.head_oid();
        repo.create_file("a.txt", "one");
        repo.stage_file("a.txt");
        let second = repo.create_commit("second");

        let cli = GitCli::open(repo.path_str()).unwrap();
        assert_eq!(cli.first_parent(&second), Some(root.clone()));
        assert_eq!(cli.first_parent(&root), None);
    }

    #[test]
    fn test_drop_resets_to_base() {
        let repo = TestRepo::with_initial_commit();
        let base = repo.head_oid();
        repo.create_file("a.txt", "one");
        repo.stage_file("a.txt");
        let tip = repo.create_commit("second");

        let cli = GitCli::open(repo.path_str()).unwrap();
        let selection = RewriteSelection {
            ordered_hashes: vec![tip],
            base_hash: base.clone(),
        };
        let new_head = cli.drop_commits(&selection).unwrap();
        assert_eq!(new_head, base);
    }
}
