//! Shared helpers for integration tests.

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use graphword::git::{GitError, VersionControl};
use graphword::pattern::{build_matrix, plan, Intensity, Plan};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn seeded_plan(word: &str, anchor: NaiveDate, intensity: Intensity, seed: u64) -> Plan {
    let matrix = build_matrix(word).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    plan(&matrix, anchor, intensity, &mut rng).unwrap()
}

/// Records every call; never touches the filesystem.
#[derive(Default)]
pub struct FakeVcs {
    pub global: HashMap<String, String>,
    /// Zero-based index of the empty commit that should fail
    pub fail_commit_at: Option<usize>,
    pub calls: RefCell<Vec<String>>,
    pub commits: RefCell<Vec<(PathBuf, NaiveDateTime, String)>>,
    attempts: Cell<usize>,
}

impl FakeVcs {
    pub fn with_identity(name: &str, email: &str) -> Self {
        let mut global = HashMap::new();
        global.insert("user.name".to_string(), name.to_string());
        global.insert("user.email".to_string(), email.to_string());
        Self {
            global,
            ..Default::default()
        }
    }

    pub fn failing_at(mut self, index: usize) -> Self {
        self.fail_commit_at = Some(index);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }
}

impl VersionControl for FakeVcs {
    fn version(&self) -> Result<String, GitError> {
        Ok("git version 2.43.0".to_string())
    }

    fn init(&self, root: &Path) -> Result<(), GitError> {
        self.record(format!("init {}", root.display()));
        Ok(())
    }

    fn global_config(&self, key: &str) -> Result<Option<String>, GitError> {
        self.record(format!("global_config {}", key));
        Ok(self.global.get(key).cloned())
    }

    fn config_set(&self, _root: &Path, key: &str, value: &str) -> Result<(), GitError> {
        self.record(format!("config_set {}={}", key, value));
        Ok(())
    }

    fn commit_file(&self, _root: &Path, file: &Path, message: &str) -> Result<(), GitError> {
        self.record(format!("commit_file {} {}", file.display(), message));
        Ok(())
    }

    fn rename_branch(&self, _root: &Path, name: &str) -> Result<(), GitError> {
        self.record(format!("rename_branch {}", name));
        Ok(())
    }

    fn commit_empty(
        &self,
        root: &Path,
        when: NaiveDateTime,
        message: &str,
    ) -> Result<(), GitError> {
        let attempt = self.attempts.get();
        self.attempts.set(attempt + 1);
        if self.fail_commit_at == Some(attempt) {
            return Err(GitError::CommandFailed {
                command: format!("git commit --allow-empty -m \"{}\"", message),
                code: 128,
                stderr: "fatal: simulated failure".to_string(),
            });
        }
        self.commits
            .borrow_mut()
            .push((root.to_path_buf(), when, message.to_string()));
        Ok(())
    }
}
