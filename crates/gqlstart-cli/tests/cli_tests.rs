//! End-to-end tests for the `gqlstart` binary.
//!
//! Every test points `--config` at a file inside its own temp dir so the
//! user's real configuration never leaks in. Steps that shell out to
//! `npx`/`yarn` are switched off unless the test replaces the command.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

fn gqlstart() -> Command {
    cargo_bin_cmd!("gqlstart")
}

/// Isolated workspace: a temp dir with a config file that disables both
/// external steps.
struct Workspace {
    dir: TempDir,
    config: PathBuf,
}

impl Workspace {
    fn new() -> Self {
        Self::with_config("[defaults]\ninstall = false\ngenerate = false\n")
    }

    fn with_config(contents: &str) -> Self {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("config.toml");
        fs::write(&config, contents).unwrap();
        Self { dir, config }
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    fn cmd(&self) -> Command {
        let mut cmd = gqlstart();
        cmd.current_dir(self.path())
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .arg("--config")
            .arg(&self.config);
        cmd
    }
}

// ── help / version ────────────────────────────────────────────────────────────

#[test]
fn help_lists_subcommands() {
    gqlstart()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("new"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn version_flag_prints_package_version() {
    gqlstart()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn new_help_mentions_flags() {
    gqlstart()
        .args(["new", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--template"))
        .stdout(predicate::str::contains("--no-install"))
        .stdout(predicate::str::contains("--force"));
}

#[test]
fn unknown_flag_is_usage_error() {
    gqlstart()
        .args(["new", "--bogus"])
        .assert()
        .code(2);
}

// ── new ───────────────────────────────────────────────────────────────────────

#[test]
fn new_creates_project_in_fresh_directory() {
    let ws = Workspace::new();

    ws.cmd()
        .args(["new", "my-server"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Copied template files"));

    let project = ws.path().join("my-server");
    assert!(project.join("package.json").is_file());
    assert!(project.join("graphqlgen.yml").is_file());
    assert!(project.join("src/schema.graphql").is_file());
}

#[test]
fn new_with_named_template() {
    let ws = Workspace::new();

    ws.cmd()
        .args(["new", "flow-app", "-t", "flow-yoga"])
        .assert()
        .success();

    assert!(ws.path().join("flow-app/.flowconfig").is_file());
}

#[test]
fn new_without_dir_uses_current_directory() {
    let ws = Workspace::new();
    let target = ws.path().join("here");
    fs::create_dir(&target).unwrap();

    ws.cmd()
        .current_dir(&target)
        .arg("new")
        .assert()
        .success();

    assert!(target.join("package.json").is_file());
}

#[test]
fn new_unknown_template_exits_not_found() {
    let ws = Workspace::new();

    ws.cmd()
        .args(["new", "app", "-t", "cobol-yoga"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Unknown template 'cobol-yoga'"))
        .stderr(predicate::str::contains("typescript-yoga"));

    assert!(!ws.path().join("app").exists());
}

#[test]
fn new_refuses_non_empty_directory() {
    let ws = Workspace::new();
    let target = ws.path().join("busy");
    fs::create_dir(&target).unwrap();
    fs::write(target.join("README.md"), "mine").unwrap();

    ws.cmd()
        .args(["new", "busy"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("must be empty"))
        .stderr(predicate::str::contains("README.md"));

    assert!(!target.join("package.json").exists());
    assert_eq!(fs::read_to_string(target.join("README.md")).unwrap(), "mine");
}

#[test]
fn new_accepts_directory_with_only_git_metadata() {
    let ws = Workspace::new();
    let target = ws.path().join("repo");
    fs::create_dir_all(target.join(".git")).unwrap();
    fs::write(target.join(".gitignore"), "node_modules\n").unwrap();

    ws.cmd().args(["new", "repo"]).assert().success();

    assert!(target.join("package.json").is_file());
}

#[test]
fn new_force_overwrites_into_non_empty_directory() {
    let ws = Workspace::new();
    let target = ws.path().join("busy");
    fs::create_dir(&target).unwrap();
    fs::write(target.join("package.json"), "{}").unwrap();
    fs::write(target.join("NOTES.md"), "keep me").unwrap();

    ws.cmd()
        .args(["new", "busy", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("is not empty"));

    let manifest = fs::read_to_string(target.join("package.json")).unwrap();
    assert!(manifest.contains("graphqlgen"));
    assert_eq!(fs::read_to_string(target.join("NOTES.md")).unwrap(), "keep me");
}

#[test]
fn new_dry_run_writes_nothing() {
    let ws = Workspace::new();

    ws.cmd()
        .args(["new", "planned", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"))
        .stdout(predicate::str::contains("typescript-yoga"));

    assert!(!ws.path().join("planned").exists());
}

#[test]
fn new_json_output_reports_outcome() {
    let ws = Workspace::new();

    let assert = ws
        .cmd()
        .args(["--output-format", "json", "new", "json-app"])
        .assert()
        .success();

    let report: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(report["template"], "typescript-yoga");
    assert_eq!(report["stage"], "complete");
    assert_eq!(report["steps"]["materialize"], "done");
    assert_eq!(report["steps"]["generate"], "skipped");
    assert_eq!(report["steps"]["install"], "skipped");
    assert!(report["files_written"].as_u64().unwrap() > 0);
    assert!(report["error"].is_null());
}

#[test]
fn template_from_config_is_used_by_default() {
    let ws = Workspace::with_config(
        "[defaults]\ntemplate = \"typescript-apollo\"\ninstall = false\ngenerate = false\n",
    );

    ws.cmd()
        .args(["--output-format", "json", "new", "apollo", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"template\": \"typescript-apollo\""));
}

#[test]
fn skipped_steps_do_not_read_their_command_settings() {
    let ws = Workspace::with_config(
        "[commands]\ngenerate = []\npackage_manager = \"bun\"\n",
    );

    ws.cmd()
        .args(["new", "files-only", "--no-generate", "--no-install"])
        .assert()
        .success();

    assert!(ws.path().join("files-only/package.json").is_file());
}

#[cfg(unix)]
#[test]
fn failing_generator_exits_non_zero_but_keeps_files() {
    let ws = Workspace::with_config(
        "[defaults]\ninstall = false\n\n[commands]\ngenerate = [\"false\"]\n",
    );

    ws.cmd()
        .args(["new", "broken"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Model generation failed"));

    assert!(ws.path().join("broken/package.json").is_file());
}

#[cfg(unix)]
#[test]
fn generator_runs_inside_target_directory() {
    let ws = Workspace::with_config(
        "[defaults]\ninstall = false\n\n\
         [commands]\ngenerate = [\"sh\", \"-c\", \"touch generated.marker\"]\n",
    );

    ws.cmd()
        .args(["new", "gen-app"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated models"));

    assert!(ws.path().join("gen-app/generated.marker").is_file());
}

// ── list ──────────────────────────────────────────────────────────────────────

#[test]
fn list_json_contains_builtin_templates() {
    let ws = Workspace::new();

    let assert = ws.cmd().args(["list", "--format", "json"]).assert().success();
    let templates: serde_json::Value =
        serde_json::from_slice(&assert.get_output().stdout).unwrap();
    let names: Vec<&str> = templates
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|t| t["name"].as_str())
        .collect();

    assert_eq!(names, ["typescript-yoga", "flow-yoga", "typescript-apollo"]);
}

#[test]
fn list_includes_user_templates() {
    let ws = Workspace::new();
    let templates = ws.path().join("templates");
    let custom = templates.join("my-stack");
    fs::create_dir_all(custom.join("template")).unwrap();
    fs::write(
        custom.join("template.toml"),
        "[template]\nname = \"my-stack\"\ndescription = \"In-house stack\"\n",
    )
    .unwrap();
    fs::write(custom.join("template/package.json"), "{}").unwrap();
    fs::write(
        &ws.config,
        format!(
            "[templates]\nlocal_path = \"{}\"\n",
            templates.display().to_string().replace('\\', "/")
        ),
    )
    .unwrap();

    ws.cmd()
        .args(["list", "--format", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("my-stack"))
        .stdout(predicate::str::contains("typescript-yoga"));
}

// ── init / config ─────────────────────────────────────────────────────────────

#[test]
fn init_writes_config_to_explicit_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested/gqlstart.toml");

    gqlstart()
        .env("NO_COLOR", "1")
        .arg("--config")
        .arg(&path)
        .arg("init")
        .assert()
        .success();

    let written = fs::read_to_string(&path).unwrap();
    assert!(written.contains("[defaults]"));
    assert!(written.contains("typescript-yoga"));
}

#[test]
fn init_does_not_clobber_without_force() {
    let ws = Workspace::new();

    ws.cmd()
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));

    assert_eq!(
        fs::read_to_string(&ws.config).unwrap(),
        "[defaults]\ninstall = false\ngenerate = false\n"
    );
}

#[test]
fn config_set_then_get() {
    let ws = Workspace::new();

    ws.cmd()
        .args(["config", "set", "defaults.template", "flow-yoga"])
        .assert()
        .success();

    ws.cmd()
        .args(["config", "get", "defaults.template"])
        .assert()
        .success()
        .stdout(predicate::str::contains("defaults.template = flow-yoga"));

    // Values already in the file survive.
    ws.cmd()
        .args(["config", "get", "defaults.install"])
        .assert()
        .success()
        .stdout(predicate::str::contains("defaults.install = false"));
}

#[test]
fn config_set_rejects_bad_value() {
    let ws = Workspace::new();

    ws.cmd()
        .args(["config", "set", "defaults.install", "sometimes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected true or false"));
}

#[test]
fn config_get_unknown_key_is_configuration_error() {
    let ws = Workspace::new();

    ws.cmd()
        .args(["config", "get", "nope.key"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn config_path_prints_explicit_file() {
    let ws = Workspace::new();

    ws.cmd()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn malformed_config_exits_with_configuration_code() {
    let ws = Workspace::with_config("[defaults\n");

    ws.cmd().arg("list").assert().code(4);
}

// ── completions ───────────────────────────────────────────────────────────────

#[test]
fn bash_completions_are_generated() {
    gqlstart()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gqlstart"));
}
