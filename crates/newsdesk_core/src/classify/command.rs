//! External model runner backend.
//!
//! # Responsibility
//! - Delegate single-example inference to a configured external process
//!   wrapping the pre-trained model artifact.
//! - Coerce the runner's stdout into an integer class id.
//!
//! # Invariants
//! - The article text travels over stdin, so arbitrary content (quotes,
//!   newlines, shell metacharacters) needs no escaping.
//! - Spawn or IO failure maps to `Unavailable`; a reply that is not an
//!   integer maps to `InvalidOutput`.

use super::{CategoryId, Classifier, ClassifyError};
use log::{error, info};
use std::io::Write;
use std::process::{Command, Stdio};

/// Classifier that shells out to a model runner command once per inference.
///
/// Constructed once at startup and reused for every request; the handle
/// itself is immutable.
pub struct CommandClassifier {
    program: String,
    args: Vec<String>,
}

impl CommandClassifier {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Parses a full command line (program followed by arguments) split on
    /// whitespace.
    pub fn from_command_line(command_line: &str) -> Option<Self> {
        let mut parts = command_line.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(Self::new(program, parts.collect()))
    }
}

impl Classifier for CommandClassifier {
    fn classify(&self, text: &str) -> Result<CategoryId, ClassifyError> {
        info!(
            "event=classify module=classify status=start backend=command program={}",
            self.program
        );

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|err| {
                error!(
                    "event=classify module=classify status=error backend=command error_code=spawn_failed error={err}"
                );
                ClassifyError::Unavailable(format!(
                    "failed to start model runner `{}`: {err}",
                    self.program
                ))
            })?;

        // stdin must be closed before waiting, or the runner blocks on read.
        {
            let mut stdin = child.stdin.take().ok_or_else(|| {
                ClassifyError::Unavailable("model runner stdin was not captured".to_string())
            })?;
            stdin.write_all(text.as_bytes()).map_err(|err| {
                ClassifyError::Unavailable(format!("failed to send text to model runner: {err}"))
            })?;
        }

        let output = child.wait_with_output().map_err(|err| {
            ClassifyError::Unavailable(format!("failed to collect model runner output: {err}"))
        })?;

        if !output.status.success() {
            error!(
                "event=classify module=classify status=error backend=command error_code=runner_failed exit={}",
                output.status
            );
            return Err(ClassifyError::Unavailable(format!(
                "model runner exited with {}",
                output.status
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let raw = stdout.trim();
        let category_id = raw.parse::<CategoryId>().map_err(|_| {
            error!(
                "event=classify module=classify status=error backend=command error_code=uncoercible_output"
            );
            ClassifyError::InvalidOutput(format!("expected an integer class id, got `{raw}`"))
        })?;

        info!("event=classify module=classify status=ok backend=command category_id={category_id}");
        Ok(category_id)
    }
}
