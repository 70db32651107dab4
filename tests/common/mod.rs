#![allow(dead_code)]

use std::path::PathBuf;

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use serde_json::Value;
use tempfile::TempDir;

pub const BASIC_CONFIG: &str = r#"{
  "version": "1",
  "packages": [
    {
      "path": "internal/db",
      "schema": "schema.sql",
      "queries": "query.sql",
      "emit_json_tags": true,
      "overrides": [
        {"go_type": "*github.com/segmentio/ksuid.KSUID", "column": "authors.id"}
      ]
    }
  ],
  "overrides": [
    {"go_type": "github.com/google/uuid.UUID", "db_type": "uuid"}
  ]
}"#;

pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn with_file(name: &str, body: &str) -> Self {
        let dir = tempfile::tempdir().expect("temp dir");
        std::fs::write(dir.path().join(name), body).expect("write config");
        Self { dir }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("sqlgen");
        cmd.current_dir(self.dir.path())
            .env_remove("SQLGEN_CONFIG")
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1");
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let output = self
            .cmd()
            .args(args)
            .arg("--json")
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&output).expect("json")
    }
}
