use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub library: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(&home).expect("create isolated home");

        let library = tmp.path().join("manuals");
        fs::create_dir_all(&library).expect("create library dir");

        Self {
            _tmp: tmp,
            home,
            library,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("mansort");
        cmd.env("HOME", &self.home);
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn sort_json(&self, extra: &[&str]) -> Value {
        let library = self.library.to_str().expect("library path utf8").to_string();
        let mut args = vec!["sort", library.as_str()];
        args.extend_from_slice(extra);
        self.run_json(&args)
    }

    /// Writes a PDF stand-in plus its sidecar into the library (or a
    /// subdirectory of it) and returns the PDF path.
    pub fn add_manual(&self, rel_dir: &str, stem: &str, metadata: &Value) -> PathBuf {
        let dir = if rel_dir.is_empty() {
            self.library.clone()
        } else {
            self.library.join(rel_dir)
        };
        fs::create_dir_all(&dir).expect("create manual dir");
        let pdf = dir.join(format!("{}.pdf", stem));
        fs::write(&pdf, b"%PDF-1.4\n%fixture\n").expect("write pdf");
        fs::write(
            dir.join(format!("{}.json", stem)),
            serde_json::to_string_pretty(metadata).expect("serialize metadata"),
        )
        .expect("write sidecar");
        pdf
    }

    pub fn add_manual_without_sidecar(&self, stem: &str) -> PathBuf {
        let pdf = self.library.join(format!("{}.pdf", stem));
        fs::write(&pdf, b"%PDF-1.4\n%fixture\n").expect("write pdf");
        pdf
    }
}

pub fn action_for<'a>(report: &'a Value, suffix: &str) -> &'a Value {
    report["actions"]
        .as_array()
        .expect("actions array")
        .iter()
        .find(|a| {
            a["file"]
                .as_str()
                .map(|f| f.ends_with(suffix))
                .unwrap_or(false)
        })
        .unwrap_or_else(|| panic!("no action for {}", suffix))
}

pub fn assert_pair_in(folder: &Path, stem: &str) {
    assert!(
        folder.join(format!("{}.pdf", stem)).exists(),
        "missing {}.pdf in {}",
        stem,
        folder.display()
    );
    assert!(
        folder.join(format!("{}.json", stem)).exists(),
        "missing {}.json in {}",
        stem,
        folder.display()
    );
}
