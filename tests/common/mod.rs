use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A stub firmware utility that answers every built-in query with a healthy
/// fixed value, standing in for `vcgencmd` on real hardware.
pub const HEALTHY_STUB: &str = r#"#!/usr/bin/env sh
case "$1" in
get_throttled) echo "throttled=0x0" ;;
measure_clock)
    case "$2" in
    arm) echo "frequency(48)=1500398464" ;;
    v3d) echo "frequency(46)=500000992" ;;
    *) echo "frequency(1)=500000992" ;;
    esac
    ;;
measure_volts)
    case "$2" in
    core) echo "volt=0.8700V" ;;
    *) echo "volt=1.100V" ;;
    esac
    ;;
measure_temp) echo "temp=42.8'C" ;;
*) echo "unknown subcommand: $1" >&2; exit 64 ;;
esac
"#;

/// Same as [`HEALTHY_STUB`] but the v3d clock query fails with no stdout.
pub const V3D_FAILING_STUB: &str = r#"#!/usr/bin/env sh
case "$1" in
get_throttled) echo "throttled=0x0" ;;
measure_clock)
    case "$2" in
    arm) echo "frequency(48)=1500398464" ;;
    v3d) echo "mailbox timed out" >&2; exit 2 ;;
    *) echo "frequency(1)=500000992" ;;
    esac
    ;;
measure_volts)
    case "$2" in
    core) echo "volt=0.8700V" ;;
    *) echo "volt=1.100V" ;;
    esac
    ;;
measure_temp) echo "temp=42.8'C" ;;
*) echo "unknown subcommand: $1" >&2; exit 64 ;;
esac
"#;

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub stub: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self::with_stub(HEALTHY_STUB)
    }

    pub fn with_stub(script: &str) -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(&home).expect("create isolated home");

        let stub = write_stub(tmp.path(), script);

        Self {
            _tmp: tmp,
            home,
            stub,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("picheck");
        cmd.env("HOME", &self.home)
            .arg("--vcgencmd")
            .arg(&self.stub)
            .arg("--no-sudo");
        cmd
    }

    pub fn write_checks(&self, content: &str) -> PathBuf {
        let path = self.home.join("checks.json");
        fs::write(&path, content).expect("write checks file");
        path
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
}

fn write_stub(base: &Path, script: &str) -> PathBuf {
    let path = base.join("vcgencmd");
    fs::write(&path, script).expect("write stub utility");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(&path).expect("stub metadata").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).expect("mark stub executable");
    }
    path
}
