//! Oracle backed by an external program.

use super::{OracleError, TextOracle};
use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};
use tracing::{debug, trace};

/// Runs a program once per prompt.
///
/// The prompt is written to the program's stdin and its stdout is the
/// answer, so any LLM command-line client can serve as the oracle.
#[derive(Debug, Clone)]
pub struct CommandOracle {
    program: String,
    args: Vec<String>,
}

impl CommandOracle {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

impl TextOracle for CommandOracle {
    fn respond(&self, prompt: &str) -> Result<String, OracleError> {
        debug!(program = %self.program, "Asking oracle");
        trace!(prompt, "Oracle prompt");

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()?;

        // The program may exit without reading its input.
        if let Some(mut stdin) = child.stdin.take() {
            match stdin.write_all(prompt.as_bytes()) {
                Err(e) if e.kind() != ErrorKind::BrokenPipe => return Err(e.into()),
                _ => {}
            }
        }

        let output = child.wait_with_output()?;
        if !output.status.success() {
            return Err(OracleError::ExitCode(output.status.code().unwrap_or(-1)));
        }

        let answer = String::from_utf8(output.stdout)?;
        trace!(answer = %answer, "Oracle answer");
        Ok(answer)
    }
}
