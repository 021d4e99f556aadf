//! Helpers for driving the `quest` binary inside a scratch directory.

use std::ffi::OsStr;
use std::fs;
use std::path::PathBuf;
use std::process::ExitStatus;

use assert_cmd::Command;
use tempfile::TempDir;

/// A temporary working directory the binary runs in.
pub struct QuestWorkspace {
    _temp: TempDir,
    pub root: PathBuf,
}

impl QuestWorkspace {
    pub fn new() -> Self {
        let temp = tempfile::tempdir().expect("create temp dir");
        let root = temp.path().to_path_buf();
        Self { _temp: temp, root }
    }

    /// The default journal in the workspace root.
    pub fn journal_path(&self) -> PathBuf {
        self.root.join("quests.json")
    }

    pub fn read_journal(&self) -> Vec<serde_json::Value> {
        let content = fs::read_to_string(self.journal_path()).expect("read journal");
        serde_json::from_str(&content).expect("journal is a JSON array")
    }

    /// A `quest` command rooted here, isolated from the caller's environment.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("quest").expect("quest binary");
        cmd.current_dir(&self.root)
            .env_remove("QUEST_FILE")
            .env_remove("QUEST_CONFIG")
            .env_remove("RUST_LOG");
        cmd
    }
}

/// Captured result of one invocation.
pub struct CmdOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

pub fn run_quest<I, S>(workspace: &QuestWorkspace, args: I, label: &str) -> CmdOutput
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    run_quest_with_env(workspace, args, &[], label)
}

pub fn run_quest_with_env<I, S>(
    workspace: &QuestWorkspace,
    args: I,
    env: &[(&str, &str)],
    label: &str,
) -> CmdOutput
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut cmd = workspace.command();
    cmd.args(args);
    for (key, value) in env {
        cmd.env(key, value);
    }

    let output = cmd.output().expect("run quest");
    let result = CmdOutput {
        status: output.status,
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    };

    if !result.status.success() {
        eprintln!("[{label}] exit={:?}\nstderr:\n{}", result.status.code(), result.stderr);
    }
    result
}

/// Parse stdout of a `--json` invocation.
pub fn parse_json(output: &CmdOutput) -> serde_json::Value {
    serde_json::from_str(&output.stdout).expect("stdout is JSON")
}
