//! Invocation of the zoxide jump database.

use dfm_types::FmResult;
use std::ffi::OsString;
use std::process::{Command, Stdio};
use tracing::debug;

/// Outcome of a single zoxide query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The index resolved the query to a directory. Trimmed, otherwise opaque.
    Path(String),
    /// The index found nothing. `status` is the child's exit code,
    /// `None` when it was killed by a signal.
    NoMatch { status: Option<i32> },
}

/// Handle to the zoxide binary.
pub struct Zoxide {
    program: OsString,
}

impl Default for Zoxide {
    fn default() -> Self {
        Self::new("zoxide")
    }
}

impl Zoxide {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Ask the index for a directory.
    ///
    /// `Some(text)` runs a directed query; `None` hands selection to the
    /// tool's interactive chooser. stdin and stderr stay attached to the
    /// terminal so the chooser can drive it, stdout is captured. Blocks
    /// until the child exits.
    ///
    /// A successful exit with nothing on stdout counts as no match; an
    /// empty path is never handed to the host.
    pub fn query(&self, query: Option<&str>) -> FmResult<Resolution> {
        let mut cmd = Command::new(&self.program);
        cmd.arg("query");
        match query {
            Some(text) => {
                cmd.arg(text);
            }
            None => {
                cmd.arg("-i");
            }
        }

        let output = cmd
            .stdin(Stdio::inherit())
            .stderr(Stdio::inherit())
            .output()?;
        debug!("zoxide query exited with {:?}", output.status.code());

        if !output.status.success() {
            return Ok(Resolution::NoMatch {
                status: output.status.code(),
            });
        }

        let path = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if path.is_empty() {
            return Ok(Resolution::NoMatch {
                status: output.status.code(),
            });
        }
        Ok(Resolution::Path(path))
    }
}
