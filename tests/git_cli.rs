//! Runs the full pipeline against the real `git` binary in a temp directory.
//! Skipped when git is not installed.

mod common;

use common::{date, seeded_plan};
use graphword::git::{execute_plan, init_repository, GitCli, Identity, VersionControl};
use graphword::pattern::Intensity;
use std::path::Path;
use std::process::Command;
use std::sync::atomic::AtomicBool;

fn git_available() -> bool {
    GitCli::default().version().is_ok()
}

fn git_stdout(root: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .arg("-C")
        .arg(root)
        .args(args)
        .output()
        .unwrap();
    assert!(output.status.success(), "git {:?} failed", args);
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

#[test]
fn test_backdated_history_in_real_repository() {
    if !git_available() {
        eprintln!("git not found, skipping");
        return;
    }

    let dir = tempfile::tempdir().unwrap();
    // Every git child process, the seed commit included, reads this instead
    // of the user's ~/.gitconfig
    let gitconfig = dir.path().join(".gitconfig");
    std::fs::write(&gitconfig, "[commit]\n\tgpgsign = false\n").unwrap();
    std::env::set_var("HOME", dir.path());
    std::env::set_var("XDG_CONFIG_HOME", dir.path());
    std::env::set_var("GIT_CONFIG_GLOBAL", &gitconfig);
    std::env::set_var("GIT_CONFIG_NOSYSTEM", "1");

    let root = dir.path().join("hi");
    let git = GitCli::default();
    assert_eq!(git.global_config("commit.gpgsign").unwrap().as_deref(), Some("false"));
    assert_eq!(git.global_config("user.name").unwrap(), None);
    let identity = Identity {
        name: "Pattern Bot".to_string(),
        email: "bot@example.com".to_string(),
    };
    let plan = seeded_plan("HI", date(2024, 1, 7), Intensity::Light, 3);

    init_repository(&git, &root, "HI", &identity).unwrap();

    let created = execute_plan(&git, &root, &plan, &AtomicBool::new(false), |_, _| {}).unwrap();
    assert_eq!(created, 56);

    let count: usize = git_stdout(&root, &["rev-list", "--count", "HEAD"])
        .parse()
        .unwrap();
    assert_eq!(count, 57);

    assert_eq!(git_stdout(&root, &["branch", "--show-current"]), "main");
    assert_eq!(
        git_stdout(&root, &["config", "--local", "user.email"]),
        "bot@example.com"
    );

    let dates = git_stdout(
        &root,
        &["log", "--reverse", "--format=%ad", "--date=format:%Y-%m-%d"],
    );
    let backdated: Vec<&str> = dates.lines().skip(1).collect();
    assert_eq!(backdated.len(), 56);
    // H's left column starts on the anchor Sunday
    assert_eq!(backdated[0], "2024-01-07");
    assert!(backdated.iter().all(|d| d.starts_with("2024-")));
}
