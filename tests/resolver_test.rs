//! End-to-end resolution tests over real filesystem fixtures.
//!
//! These run the full strategy chain with the real `SystemRunner`; the
//! package-manager query is pointed at fake scripts in a temp dir so no
//! real package manager is needed.

use std::fs;
use std::path::{Path, PathBuf};

use binscout::resolver::{ManagerQuery, PatternTable, Resolver, ToolSpec};
use binscout::shell::SystemRunner;
use tempfile::TempDir;

fn create_fake_binary(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, "#!/bin/sh\n").unwrap();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
    }
}

/// Write an executable script with the given body.
#[cfg(unix)]
fn create_script(path: &Path, body: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, format!("#!/bin/sh\n{body}\n")).unwrap();
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
}

fn no_env(_: &str) -> Result<String, std::env::VarError> {
    Err(std::env::VarError::NotPresent)
}

/// Spec whose glob patterns and manager query can't hit the real machine.
fn isolated_spec(temp: &TempDir) -> ToolSpec {
    ToolSpec::npm_tool("claude")
        .with_manager_query(ManagerQuery::new("this-manager-does-not-exist-12345"))
        .with_patterns(PatternTable::new(vec![format!(
            "{}/versions/*/bin/claude",
            temp.path().display()
        )]))
}

#[test]
fn search_path_hit_short_circuits_globbing() {
    let temp = TempDir::new().unwrap();
    let bin_dir = temp.path().join("bin");
    create_fake_binary(&bin_dir.join("claude"));
    // A glob match also exists, but the search path must win.
    create_fake_binary(&temp.path().join("versions/v20.0.0/bin/claude"));

    let spec = isolated_spec(&temp);
    let runner = SystemRunner::new();
    let resolver = Resolver::new(&spec, &runner);

    let resolution = resolver.resolve_with_env(no_env, &[bin_dir.clone()], temp.path());
    assert_eq!(resolution.path, bin_dir.join("claude"));
}

#[cfg(unix)]
#[test]
fn manager_script_output_locates_global_install() {
    let temp = TempDir::new().unwrap();
    let global_bin = temp.path().join("npm-global/bin");
    create_fake_binary(&global_bin.join("claude"));

    // Fake manager that prints its "global bin dir" like `npm bin -g`.
    let manager = temp.path().join("fake-npm");
    create_script(&manager, &format!("echo '{}'", global_bin.display()));

    let spec = isolated_spec(&temp)
        .with_manager_query(ManagerQuery::new(&manager.to_string_lossy()));
    let runner = SystemRunner::new();
    let resolver = Resolver::new(&spec, &runner);

    let resolution = resolver.resolve_with_env(no_env, &[], temp.path());
    assert_eq!(resolution.path, global_bin.join("claude"));
}

#[cfg(unix)]
#[test]
fn failing_manager_falls_through_to_patterns() {
    let temp = TempDir::new().unwrap();
    create_fake_binary(&temp.path().join("versions/v18.17.0/bin/claude"));

    let manager = temp.path().join("broken-npm");
    create_script(&manager, "exit 1");

    let spec = isolated_spec(&temp)
        .with_manager_query(ManagerQuery::new(&manager.to_string_lossy()));
    let runner = SystemRunner::new();
    let resolver = Resolver::new(&spec, &runner);

    let resolution = resolver.resolve_with_env(no_env, &[], temp.path());
    assert!(resolution
        .path
        .to_string_lossy()
        .contains("versions/v18.17.0"));
}

#[cfg(unix)]
#[test]
fn hanging_manager_is_killed_and_skipped() {
    let temp = TempDir::new().unwrap();
    create_fake_binary(&temp.path().join("versions/v18.17.0/bin/claude"));

    let manager = temp.path().join("hanging-npm");
    create_script(&manager, "sleep 30");

    let spec = isolated_spec(&temp)
        .with_manager_query(ManagerQuery::new(&manager.to_string_lossy()));
    let runner = SystemRunner::with_timeout(std::time::Duration::from_millis(200));
    let resolver = Resolver::new(&spec, &runner);

    let resolution = resolver.resolve_with_env(no_env, &[], temp.path());
    assert!(resolution
        .path
        .to_string_lossy()
        .contains("versions/v18.17.0"));
}

#[test]
fn empty_machine_resolves_to_bare_name() {
    let temp = TempDir::new().unwrap();
    let spec = isolated_spec(&temp);
    let runner = SystemRunner::new();
    let resolver = Resolver::new(&spec, &runner);

    let resolution = resolver.resolve_with_env(no_env, &[], temp.path());
    assert_eq!(resolution.path, PathBuf::from("claude"));
    assert!(!resolution.is_verified());
}
