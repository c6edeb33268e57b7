// Shared fixtures for process tests
#![cfg(unix)]

use std::fs;
use std::os::unix::fs::symlink;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn system_binary(name: &str) -> PathBuf {
    ["/bin", "/usr/bin"]
        .iter()
        .map(|dir| Path::new(dir).join(name))
        .find(|path| path.exists())
        .unwrap_or_else(|| panic!("{} not found in /bin or /usr/bin", name))
}

/// A working directory with `bin/echo_ok` (exits 0), `bin/fail` (exits 1)
/// and `bin/sh`, plus an empty `scripts/` directory.
///
/// Executables are symlinks to system binaries so nothing freshly written
/// is ever exec'd.
pub fn fixture_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let bin = dir.path().join("bin");
    fs::create_dir(&bin).unwrap();
    fs::create_dir(dir.path().join("scripts")).unwrap();

    symlink(system_binary("true"), bin.join("echo_ok")).unwrap();
    symlink(system_binary("false"), bin.join("fail")).unwrap();
    symlink(system_binary("sh"), bin.join("sh")).unwrap();
    dir
}

/// Write `scripts/<name>`, meant to be run as `bin/sh scripts/<name>`.
pub fn write_script(root: &Path, name: &str, body: &str) {
    fs::write(root.join("scripts").join(name), body).unwrap();
}
