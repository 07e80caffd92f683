//! # Integration tests for the command line of `rescalc`.
//!
//! Every test runs the compiled binary in its own temporary working
//! directory, so a `rescalc.toml` in the repository never leaks in.
//!
//! ## Test Plan
//!
//! + [x] Test each of the three calculations.
//! + [x] Test the reservation command.
//! + [x] Test the input errors and their exit status.
//! + [x] Test reading defaults from `rescalc.toml`.
//! + [x] Test `rescalc --version`.

mod calculate;
mod config;
mod errors;
mod version;

use std::path::PathBuf;

use rescalc_lib::config::Config;
use tempdir::TempDir;

/// The testing environment passed to individual #[test](s)
struct TestEnv {
    rescalc_path: PathBuf,
    temp_dir: TempDir,
}

#[macro_export]
macro_rules! rescalc {
    ($env:expr; $($arg:expr),*) => {
        {
            std::process::Command::new(&$env.rescalc_path)
                .args(&[$($arg),*])
                .current_dir($env.temp_dir.path())
                .env("RUST_BACKTRACE", "0")
                .env_remove("RUST_LIB_BACKTRACE")
                .output()
                .unwrap()
        }
    };
    ($env:expr; $($arg:expr),*; $msg:expr) => {
        {
            let out = $crate::rescalc!($env; $($arg),*);
            if !out.status.success() {
                panic!("rescalc {} failed: {}", $msg, String::from_utf8(out.stderr).unwrap());
            } else {
                out
            }
        }
    };
}

fn save_rescalc_toml(conf: &Config, temp_dir: &TempDir) -> PathBuf {
    let conf_path = temp_dir.path().join("rescalc.toml");
    let conf_str = toml::to_string(&conf).unwrap();
    std::fs::write(&conf_path, conf_str).unwrap();
    conf_path
}

fn stdout(out: &std::process::Output) -> String {
    String::from_utf8(out.stdout.clone()).unwrap()
}

fn stderr(out: &std::process::Output) -> String {
    String::from_utf8(out.stderr.clone()).unwrap()
}

fn init() -> TestEnv {
    let rescalc_path = PathBuf::from(env!("CARGO_BIN_EXE_rescalc"));
    assert!(
        rescalc_path.exists(),
        "\nTest setup couldn't find the rescalc executable.
    [Expected to find it at: {:?}]\n",
        rescalc_path
    );

    let temp_dir = TempDir::new_in(env!("CARGO_TARGET_TMPDIR"), "rescalc").unwrap();

    TestEnv {
        rescalc_path,
        temp_dir,
    }
}
