use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

const CUSTOM_SPEC: &str = r#"{
    "keywords": ["let", "invoke", "fn"],
    "assignment": "be",
    "call": "invoke",
    "function": "fn"
}"#;

/// Helper to get the compiled binary path
fn get_binary_path() -> PathBuf {
    // Get the directory where cargo places test binaries
    let mut path = env::current_exe().unwrap();
    path.pop(); // Remove test executable name

    // Check if we're in a 'deps' directory (integration tests)
    if path.ends_with("deps") {
        path.pop(); // Go up to debug or release
    }

    path.push(format!("specrun{}", env::consts::EXE_SUFFIX));

    // If the binary doesn't exist in debug, try building it first
    if !path.exists() {
        let build_output = Command::new("cargo")
            .args(["build", "--bin", "specrun"])
            .output()
            .expect("Failed to build binary");

        if !build_output.status.success() {
            panic!(
                "Failed to build specrun binary: {}",
                String::from_utf8_lossy(&build_output.stderr)
            );
        }
    }

    path
}

/// Helper to create a temporary directory for tests
fn create_temp_dir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Helper to create a langspec.json in a directory
fn create_spec_file(dir: &Path, content: &str) {
    fs::write(dir.join("langspec.json"), content).unwrap();
}

/// Run the binary in `dir` with HOME pointed at `home`.
fn run_in(dir: &Path, home: &Path, args: &[&str]) -> Output {
    Command::new(get_binary_path())
        .args(args)
        .current_dir(dir)
        .env("HOME", home) // Override HOME to avoid loading ~/.langspec.json
        .output()
        .expect("Failed to execute command")
}

fn execution_output(stdout: &str) -> &str {
    stdout
        .split("=== EXECUTION ===\n")
        .nth(1)
        .expect("no execution section")
}

#[test]
fn test_version_flag() {
    let output = Command::new(get_binary_path())
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_sample_with_default_spec() {
    let temp_dir = create_temp_dir();

    let output = run_in(temp_dir.path(), temp_dir.path(), &[]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No langspec.json found"));
    assert!(stdout.starts_with("Loading LanguageSpec..."));
    assert!(stdout.contains("=== IR ===\nfunc main {\n    x = 15\n    call print x\n}\n"));
    assert_eq!(execution_output(&stdout), "15\n");
}

#[test]
fn test_spec_file_in_current_directory() {
    let temp_dir = create_temp_dir();
    create_spec_file(temp_dir.path(), CUSTOM_SPEC);

    let output = run_in(temp_dir.path(), temp_dir.path(), &[]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("fn main {\n    x be 15\n    invoke print x\n}\n"));
    assert_eq!(execution_output(&stdout), "15\n");
}

#[test]
fn test_spec_file_search_upward() {
    let temp_dir = create_temp_dir();
    create_spec_file(temp_dir.path(), CUSTOM_SPEC);

    let subdir = temp_dir.path().join("subdir");
    fs::create_dir(&subdir).unwrap();

    let output = run_in(&subdir, temp_dir.path(), &[]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("invoke print x"));
}

#[test]
fn test_home_spec_file_fallback() {
    let temp_dir = create_temp_dir();
    fs::write(temp_dir.path().join(".langspec.json"), CUSTOM_SPEC).unwrap();

    let project = temp_dir.path().join("project");
    fs::create_dir(&project).unwrap();

    let output = run_in(&project, temp_dir.path(), &[]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("fn main {"));
}

#[test]
fn test_local_spec_precedence() {
    let temp_dir = create_temp_dir();
    fs::write(temp_dir.path().join(".langspec.json"), CUSTOM_SPEC).unwrap();

    let project = temp_dir.path().join("project");
    fs::create_dir(&project).unwrap();
    create_spec_file(
        &project,
        r#"{"keywords": ["var"], "assignment": "=", "call": "call", "function": "func"}"#,
    );

    let output = run_in(&project, temp_dir.path(), &[]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("func main {"));
}

#[test]
fn test_explicit_spec_and_source_file() {
    let temp_dir = create_temp_dir();
    let spec_path = temp_dir.path().join("mylang.json");
    fs::write(&spec_path, CUSTOM_SPEC).unwrap();
    fs::write(
        temp_dir.path().join("prog.toy"),
        "fn start() {\n  let a be 3\n  let b be a\n  invoke print b\n  invoke print c\n}\n",
    )
    .unwrap();

    let output = run_in(
        temp_dir.path(),
        temp_dir.path(),
        &["--spec", spec_path.to_str().unwrap(), "prog.toy"],
    );

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(
        "fn start {\n    a be 3\n    b be a\n    invoke print b\n    invoke print c\n}\n"
    ));
    assert_eq!(execution_output(&stdout), "3\n(undefined) c\n");
}

#[test]
fn test_ir_only_skips_execution() {
    let temp_dir = create_temp_dir();

    let output = run_in(temp_dir.path(), temp_dir.path(), &["--ir-only"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("=== IR ==="));
    assert!(!stdout.contains("=== EXECUTION ==="));
}

#[test]
fn test_invalid_spec_file() {
    let temp_dir = create_temp_dir();
    create_spec_file(
        temp_dir.path(),
        r#"{"keywords": ["var"], "assignment": "=", "call": "call"}"#,
    );

    let output = run_in(temp_dir.path(), temp_dir.path(), &[]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error loading spec"));
    assert!(stderr.contains("missing field 'function'"));
}

#[test]
fn test_malformed_spec_json() {
    let temp_dir = create_temp_dir();
    create_spec_file(temp_dir.path(), r#"{"keywords": ["var""#);

    let output = run_in(temp_dir.path(), temp_dir.path(), &[]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("malformed spec file"));
}

#[test]
fn test_parse_error_reports_token() {
    let temp_dir = create_temp_dir();
    fs::write(temp_dir.path().join("bad.toy"), "func main() { var x = }").unwrap();

    let output = run_in(temp_dir.path(), temp_dir.path(), &["bad.toy"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Parse error: bad.toy: 'var' at token 5"));
    assert!(stderr.contains("{ var x = }"));
    assert!(stderr.contains("^^^"));
}

#[test]
fn test_missing_source_file() {
    let temp_dir = create_temp_dir();

    let output = run_in(temp_dir.path(), temp_dir.path(), &["nope.toy"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error reading file 'nope.toy'"));
}

#[test]
fn test_missing_open_brace_points_at_end_of_input() {
    let temp_dir = create_temp_dir();
    fs::write(temp_dir.path().join("bad.toy"), "func main() var x = 1").unwrap();

    let output = run_in(temp_dir.path(), temp_dir.path(), &["bad.toy"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no '{' opening a function body before token 8"));
    assert!(stderr.contains("  x = 1\n        ^"));
}
