//! External process execution
//!
//! Spawns tools in the project directory and streams their output into
//! the log. Every invocation is attempted exactly once; there is no
//! timeout.

use std::path::PathBuf;
use std::process::Stdio;

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Command;

use crate::config::defaults::{MIN_REDACTED_SECRET_LEN, REDACTED};
use crate::error::ExecError;

/// Runs an external program to completion
#[allow(async_fn_in_trait)]
pub trait ExecRunner {
    /// Run `program` with `args`, failing on a non-zero exit
    async fn run_executable(&mut self, program: &str, args: &[String]) -> Result<(), ExecError>;
}

/// Masks secret values in anything that reaches the log
///
/// Secrets of at least [`MIN_REDACTED_SECRET_LEN`] bytes are replaced
/// wherever they occur. Shorter ones are only replaced where they make up
/// a whole whitespace-separated word.
#[derive(Debug, Clone, Default)]
pub struct Redactor {
    secrets: Vec<String>,
    short_secrets: Vec<String>,
}

impl Redactor {
    /// Register a value that must never be logged
    pub fn add(&mut self, secret: &str) {
        if secret.is_empty() || self.contains(secret) {
            return;
        }
        if secret.len() < MIN_REDACTED_SECRET_LEN {
            tracing::warn!(
                "secret is shorter than {MIN_REDACTED_SECRET_LEN} characters; \
                 it is only masked where it appears as a separate word"
            );
            self.short_secrets.push(secret.to_string());
        } else {
            self.secrets.push(secret.to_string());
        }
    }

    fn contains(&self, secret: &str) -> bool {
        self.secrets
            .iter()
            .chain(&self.short_secrets)
            .any(|s| s == secret)
    }

    /// Replace all registered secrets in `text`
    pub fn redact(&self, text: &str) -> String {
        let masked = self
            .secrets
            .iter()
            .fold(text.to_string(), |acc, secret| acc.replace(secret.as_str(), REDACTED));
        if self.short_secrets.is_empty() {
            return masked;
        }
        mask_words(&masked, &self.short_secrets)
    }
}

/// Replace every whitespace-separated word equal to one of `secrets`,
/// keeping the original whitespace
fn mask_words(text: &str, secrets: &[String]) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while !rest.is_empty() {
        let word_start = rest.len() - rest.trim_start().len();
        out.push_str(&rest[..word_start]);
        rest = &rest[word_start..];

        let word_end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        let word = &rest[..word_end];
        if secrets.iter().any(|s| s == word) {
            out.push_str(REDACTED);
        } else {
            out.push_str(word);
        }
        rest = &rest[word_end..];
    }
    out
}

/// Production runner backed by tokio processes
#[derive(Debug)]
pub struct ProcessRunner {
    /// Working directory for every spawned process
    work_dir: PathBuf,
    redactor: Redactor,
}

impl ProcessRunner {
    /// Create a runner spawning processes in `work_dir`
    pub fn new(work_dir: impl Into<PathBuf>) -> Self {
        Self {
            work_dir: work_dir.into(),
            redactor: Redactor::default(),
        }
    }

    /// Mask `secret` in logged command lines and output
    #[must_use]
    pub fn with_secret(mut self, secret: &str) -> Self {
        self.redactor.add(secret);
        self
    }

    fn command_line(&self, program: &str, args: &[String]) -> String {
        let mut line = program.to_string();
        for arg in args {
            line.push(' ');
            line.push_str(arg);
        }
        self.redactor.redact(&line)
    }
}

impl ExecRunner for ProcessRunner {
    async fn run_executable(&mut self, program: &str, args: &[String]) -> Result<(), ExecError> {
        let resolved = which::which(program).map_err(|_| ExecError::NotFound {
            program: program.to_string(),
        })?;

        tracing::info!("running command: {}", self.command_line(program, args));

        let mut child = Command::new(&resolved)
            .args(args)
            .current_dir(&self.work_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| ExecError::Spawn {
                program: program.to_string(),
                source: e,
            })?;

        let stdout = child.stdout.take();
        let stderr = child.stderr.take();
        tokio::join!(
            stream_lines(stdout, program, &self.redactor, false),
            stream_lines(stderr, program, &self.redactor, true),
        );

        let status = child.wait().await.map_err(|e| ExecError::Spawn {
            program: program.to_string(),
            source: e,
        })?;

        if status.success() {
            tracing::debug!("{program} finished successfully");
            Ok(())
        } else {
            Err(ExecError::ExitStatus {
                program: program.to_string(),
                code: status.code(),
            })
        }
    }
}

/// Log each output line of a child process
///
/// Lines are read as raw bytes so output that is not valid UTF-8 is still
/// logged (lossily) and the pipe is drained until the child closes it.
async fn stream_lines<R>(reader: Option<R>, program: &str, redactor: &Redactor, is_stderr: bool)
where
    R: AsyncRead + Unpin,
{
    let Some(reader) = reader else {
        return;
    };
    let mut reader = BufReader::new(reader);
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf).await {
            Ok(0) => break,
            Ok(_) => {
                let raw = buf.strip_suffix(b"\n").unwrap_or(&buf[..]);
                let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
                let line = redactor.redact(&String::from_utf8_lossy(raw));
                if is_stderr {
                    tracing::warn!(target: "pybuild::tool", tool = program, "{line}");
                } else {
                    tracing::info!(target: "pybuild::tool", tool = program, "{line}");
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => {}
            Err(e) => {
                tracing::debug!("stopped reading output of {program}: {e}");
                // Keep the pipe open for the child until it exits
                let _ = tokio::io::copy(&mut reader, &mut tokio::io::sink()).await;
                break;
            }
        }
    }
}
