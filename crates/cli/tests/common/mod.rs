//! Shared test utilities for spfr-cli integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Write throwaway parameter files.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper will be hermetic by default.
//! - `SPFR_*` variables from the host never leak into tests.

use assert_cmd::Command;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

/// Returns a hermetic `spfr-cli` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - `SPFR_CONFIG_PATH` and `SPFR_MAX_BYTES` are cleared.
/// - `RUST_LOG` is cleared so diagnostics use the default level.
pub fn spfr_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("spfr-cli");

    cmd.env("DOTENV_DISABLED", "1");
    cmd.env_remove("SPFR_CONFIG_PATH")
        .env_remove("SPFR_MAX_BYTES")
        .env_remove("RUST_LOG");

    cmd
}

/// Writes `contents` to a temporary parameter file kept alive by the returned handle.
pub fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}

/// Path of the bundled demo parameter file.
#[allow(dead_code)]
pub fn demo_config() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../demos/test.config")
}
