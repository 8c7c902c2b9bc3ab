use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// A scratch HOME with an optional fake stack tool inside it
pub struct Sandbox {
    pub dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("config.json")
    }

    /// Install a tool that prints `stdout` for the `tree` verb
    pub fn tool_printing(&self, stdout: &str) -> PathBuf {
        self.tool_script(&format!(
            "if [ \"$1\" != \"tree\" ]; then echo \"unknown verb $1\" >&2; exit 2; fi\n\
             cat <<'__STACK__'\n{stdout}\n__STACK__"
        ))
    }

    /// Install a tool with an arbitrary shell body
    pub fn tool_script(&self, body: &str) -> PathBuf {
        let path = self.dir.path().join("bin").join("git");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    pub fn missing_tool(&self) -> PathBuf {
        self.dir.path().join("not-installed").join("git")
    }

    /// Run `sr` with the sandbox config, colors off
    pub fn run(&self, args: &[&str]) -> Output {
        run_sr(self.dir.path(), &self.config_path(), args)
    }

    /// Run `sr` against an explicit tool path
    pub fn run_with_tool(&self, tool: &Path, args: &[&str]) -> Output {
        let mut full: Vec<&str> = vec!["--git-path", tool.to_str().unwrap()];
        full.extend_from_slice(args);
        self.run(&full)
    }
}

fn run_sr(home: &Path, config: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sr"))
        .arg("--no-color")
        .arg("--config")
        .arg(config)
        .args(args)
        .env("HOME", home)
        .env_remove("RUST_LOG")
        .output()
        .expect("sr should run")
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

pub const FIVE_COMMITS: &str = "* a1b2c3d (HEAD -> feature) Wire up settings page\n\
* b2c3d4e Add settings model\n\
* c3d4e5f (origin/feature) Extract form helpers\n\
* d4e5f6a Rename widgets\n\
* e5f6a7b Initial scaffolding";
