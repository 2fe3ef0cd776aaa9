//! Invokes the system C compiler on a translated term and runs the
//! resulting executable (§2b, §6 "C-compiler interface").
//!
//! Grounded in the original implementation's `get_cc_invocation` /
//! `compile_and_run`. The Windows/MSVC branch of that original is
//! deliberately not ported — this driver only ever shells out to a
//! Unix-style `cc`.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

#[derive(Debug)]
pub enum DriverError {
    Io(std::io::Error),
    CompileFailed(String),
    RunFailed(String),
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::CompileFailed(output) => write!(f, "compilation failed: {output}"),
            Self::RunFailed(output) => write!(f, "program exited with an error: {output}"),
        }
    }
}

impl std::error::Error for DriverError {}

impl From<std::io::Error> for DriverError {
    fn from(err: std::io::Error) -> Self {
        DriverError::Io(err)
    }
}

pub type Result<T> = std::result::Result<T, DriverError>;

/// Write `translated` to a temporary C file, compile and run it,
/// returning the residual value's standard output. Intermediate files
/// are removed unless `keep_c` is set.
pub fn compile_and_run(translated: &str, cc: &Path, keep_c: bool) -> Result<String> {
    let c_path = PathBuf::from("lambdac_tmp.c");
    fs::write(&c_path, translated)?;

    let result = run_compiled(&c_path, cc);

    if !keep_c {
        let _ = fs::remove_file(&c_path);
    }

    result
}

fn run_compiled(c_path: &Path, cc: &Path) -> Result<String> {
    let exe_path = PathBuf::from("lambdac_tmp.out");

    log::trace!("invoking {cc:?} on {c_path:?}");
    let compile_output = Command::new(cc)
        .arg("-o")
        .arg(&exe_path)
        .arg(c_path)
        .output()?;

    if !compile_output.status.success() {
        return Err(DriverError::CompileFailed(format!(
            "{}\n{}",
            String::from_utf8_lossy(&compile_output.stdout),
            String::from_utf8_lossy(&compile_output.stderr)
        )));
    }

    let run_result = Command::new(exe_path.canonicalize()?).output();
    let _ = fs::remove_file(&exe_path);

    let run_output = run_result?;
    if !run_output.status.success() {
        return Err(DriverError::RunFailed(
            String::from_utf8_lossy(&run_output.stderr).into_owned(),
        ));
    }

    Ok(String::from_utf8_lossy(&run_output.stdout).into_owned())
}
