use super::error::GitError;
use super::VersionControl;
use crate::pattern::CommitDescriptor;
use chrono::NaiveDateTime;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use tracing::debug;

/// [`VersionControl`] backed by the `git` executable.
#[derive(Clone, Debug)]
pub struct GitCli {
    program: String,
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new("git")
    }
}

impl GitCli {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn output(&self, root: Option<&Path>, args: &[&str]) -> Result<(String, Output), GitError> {
        let command = describe(&self.program, root, args);
        let mut cmd = Command::new(&self.program);
        if let Some(root) = root {
            cmd.arg("-C").arg(root);
        }
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        debug!(%command, "running git");
        let output = cmd.output().map_err(|source| GitError::SpawnFailed {
            command: command.clone(),
            source,
        })?;
        Ok((command, output))
    }

    fn run(&self, root: Option<&Path>, args: &[&str]) -> Result<String, GitError> {
        let (command, output) = self.output(root, args)?;
        if !output.status.success() {
            return Err(failure(command, &output));
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

fn failure(command: String, output: &Output) -> GitError {
    GitError::CommandFailed {
        command,
        code: output.status.code().unwrap_or(-1),
        stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
    }
}

fn quote(arg: &str) -> String {
    if arg.is_empty() || arg.contains(char::is_whitespace) || arg.contains('"') {
        format!("\"{}\"", arg.replace('"', "\\\""))
    } else {
        arg.to_string()
    }
}

/// Printable command line, used in logs and error messages.
pub fn describe(program: &str, root: Option<&Path>, args: &[&str]) -> String {
    let mut parts = vec![quote(program)];
    if let Some(root) = root {
        parts.push("-C".to_string());
        parts.push(quote(&root.display().to_string()));
    }
    parts.extend(args.iter().map(|a| quote(a)));
    parts.join(" ")
}

/// The commit a descriptor turns into, as shown in dry-run output.
pub fn commit_command_line(descriptor: &CommitDescriptor) -> String {
    format!(
        "git commit --allow-empty --date=\"{}\" -m \"{}\"",
        descriptor.git_date(),
        descriptor.label
    )
}

impl VersionControl for GitCli {
    fn version(&self) -> Result<String, GitError> {
        self.run(None, &["--version"])
    }

    fn init(&self, root: &Path) -> Result<(), GitError> {
        let root = root.to_string_lossy();
        self.run(None, &["init", "--quiet", root.as_ref()]).map(|_| ())
    }

    fn global_config(&self, key: &str) -> Result<Option<String>, GitError> {
        let (command, output) = self.output(None, &["config", "--global", "--get", key])?;
        // git config exits 1 when the key is unset
        match output.status.code() {
            Some(0) => {
                let value = String::from_utf8_lossy(&output.stdout).trim().to_string();
                Ok(Some(value).filter(|v| !v.is_empty()))
            }
            Some(1) => Ok(None),
            _ => Err(failure(command, &output)),
        }
    }

    fn config_set(&self, root: &Path, key: &str, value: &str) -> Result<(), GitError> {
        self.run(Some(root), &["config", "--local", key, value])
            .map(|_| ())
    }

    fn commit_file(&self, root: &Path, file: &Path, message: &str) -> Result<(), GitError> {
        let file = file.to_string_lossy();
        self.run(Some(root), &["add", "--", file.as_ref()])?;
        self.run(Some(root), &["commit", "--quiet", "-m", message])
            .map(|_| ())
    }

    fn rename_branch(&self, root: &Path, name: &str) -> Result<(), GitError> {
        self.run(Some(root), &["branch", "-M", name]).map(|_| ())
    }

    fn commit_empty(
        &self,
        root: &Path,
        when: NaiveDateTime,
        message: &str,
    ) -> Result<(), GitError> {
        let date = format!("--date={}", when.format("%Y-%m-%dT%H:%M:%S"));
        self.run(
            Some(root),
            &["commit", "--allow-empty", "--quiet", &date, "-m", message],
        )
        .map(|_| ())
    }
}
