use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
use std::sync::OnceLock;

use bentree_testkit::{fixture_path as shared_fixture_path, stdout_json, target_dir as workspace_target_dir};

static BENTREE_BIN: OnceLock<PathBuf> = OnceLock::new();

pub(crate) fn fixture_path(name: &str) -> PathBuf {
	shared_fixture_path(name)
}

pub(crate) fn run_bentree(args: &[&str]) -> Output {
	Command::new(bentree_bin()).args(args).output().expect("bentree command executes")
}

pub(crate) fn run_bentree_with_stdin(args: &[&str], stdin: &[u8]) -> Output {
	let mut child = Command::new(bentree_bin())
		.args(args)
		.stdin(Stdio::piped())
		.stdout(Stdio::piped())
		.stderr(Stdio::piped())
		.spawn()
		.expect("bentree command spawns");
	child
		.stdin
		.take()
		.expect("stdin is piped")
		.write_all(stdin)
		.expect("stdin accepts input");
	child.wait_with_output().expect("bentree command completes")
}

pub(crate) fn run_bentree_json(args: &[&str]) -> serde_json::Value {
	stdout_json(&run_bentree(args))
}

/// Assert failure and return stderr text.
pub(crate) fn run_bentree_err(args: &[&str]) -> String {
	let output = run_bentree(args);
	assert!(!output.status.success(), "bentree {args:?} should fail");
	assert_eq!(output.status.code(), Some(1));
	assert!(output.stdout.is_empty(), "failed command should not print to stdout");
	String::from_utf8_lossy(&output.stderr).into_owned()
}

fn bentree_bin() -> &'static PathBuf {
	BENTREE_BIN.get_or_init(resolve_bentree_bin)
}

fn resolve_bentree_bin() -> PathBuf {
	if let Ok(path) = std::env::var("CARGO_BIN_EXE_bentree") {
		return PathBuf::from(path);
	}

	let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
	let target_dir = workspace_target_dir();

	let mut bin = target_dir.join("debug");
	bin.push(if cfg!(windows) { "bentree.exe" } else { "bentree" });

	let status = Command::new("cargo")
		.current_dir(&manifest_dir)
		.args(["build", "--quiet", "--bin", "bentree"])
		.status()
		.expect("cargo build executes");
	assert!(status.success(), "failed to build bentree binary at {}", bin.display());

	bin
}
