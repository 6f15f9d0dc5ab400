#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub scratch: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(&home).expect("create isolated home");
        let scratch = tmp.path().join("scratch");
        fs::create_dir_all(&scratch).expect("create scratch dir");

        Self {
            _tmp: tmp,
            home,
            scratch,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("profile-prompt");
        cmd.env("HOME", &self.home)
            .env_remove("RUST_LOG")
            .env_remove("WAYLAND_DISPLAY");
        cmd
    }

    pub fn config_dir(&self) -> PathBuf {
        self.home.join(".config/profile-prompt")
    }

    pub fn stored_blob_path(&self) -> PathBuf {
        self.config_dir().join("profile_prompt_builder_v1.json")
    }

    pub fn write_stored_blob(&self, raw: &str) {
        fs::create_dir_all(self.config_dir()).expect("create config dir");
        fs::write(self.stored_blob_path(), raw).expect("write stored blob");
    }

    pub fn read_stored_blob(&self) -> Value {
        let raw = fs::read_to_string(self.stored_blob_path()).expect("stored blob exists");
        serde_json::from_str(&raw).expect("stored blob is json")
    }

    pub fn write_settings(&self, raw: &str) {
        fs::create_dir_all(self.config_dir()).expect("create config dir");
        fs::write(self.config_dir().join("settings.toml"), raw).expect("write settings");
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

    pub fn run_json_failure(&self, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .arg("--json")
            .args(args)
            .assert()
            .failure()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("error json output")
    }

    pub fn run_text(&self, args: &[&str]) -> String {
        let mut cmd = self.cmd();
        let out = cmd
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        String::from_utf8(out).expect("utf8 stdout")
    }
}
