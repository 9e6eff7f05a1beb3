//! External command execution behind a narrow capability trait.
//!
//! The resolver only needs one thing from the outside world's processes:
//! `run(program, args)` with captured output and an exit status. Keeping
//! that behind [`ProcessRunner`] lets tests substitute a mock instead of
//! spawning real package-manager processes.

use crate::error::{BinscoutError, Result};
use std::io::{BufRead, BufReader};
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

/// Result of executing an external command.
#[derive(Debug, Clone)]
pub struct ProcessOutput {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether the command succeeded (exit code 0).
    pub success: bool,
}

impl ProcessOutput {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            duration,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
        duration: Duration,
    ) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            duration,
            success: false,
        }
    }
}

/// Capability for invoking an external command and capturing its output.
///
/// Implementations must not inherit stdio from the parent; callers rely on
/// `stdout` holding everything the command printed.
pub trait ProcessRunner {
    /// Run `program` with `args`, capturing stdout and stderr.
    ///
    /// A nonzero exit is NOT an error; it is reported through
    /// [`ProcessOutput::success`]. Errors are reserved for spawn failures
    /// and timeouts.
    fn run(&self, program: &str, args: &[&str]) -> Result<ProcessOutput>;
}

/// System-backed [`ProcessRunner`] with an enforced timeout.
///
/// The timeout exists so a wedged package-manager query can't hang
/// startup; expiry kills the child and returns
/// [`BinscoutError::CommandTimeout`].
#[derive(Debug, Clone)]
pub struct SystemRunner {
    timeout: Duration,
}

impl SystemRunner {
    /// Default time budget for a single invocation.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

    /// Create a runner with the default timeout.
    pub fn new() -> Self {
        Self {
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Create a runner with a custom timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Default for SystemRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<ProcessOutput> {
        let start = Instant::now();
        let rendered = render_command(program, args);

        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|_| BinscoutError::SpawnFailed {
                command: rendered.clone(),
            })?;

        let stdout = child.stdout.take().unwrap();
        let stderr = child.stderr.take().unwrap();

        // Drain both pipes on background threads so the child can't block
        // on a full pipe while we poll for exit.
        let stdout_handle = thread::spawn(move || read_to_string(stdout));
        let stderr_handle = thread::spawn(move || read_to_string(stderr));

        let status = loop {
            match child.try_wait()? {
                Some(status) => break status,
                None => {
                    if start.elapsed() >= self.timeout {
                        let _ = child.kill();
                        let _ = child.wait();
                        tracing::debug!("command timed out: {}", rendered);
                        return Err(BinscoutError::CommandTimeout {
                            command: rendered,
                            seconds: self.timeout.as_secs(),
                        });
                    }
                    thread::sleep(Duration::from_millis(10));
                }
            }
        };

        let stdout_output = stdout_handle.join().unwrap_or_default();
        let stderr_output = stderr_handle.join().unwrap_or_default();
        let duration = start.elapsed();

        if status.success() {
            Ok(ProcessOutput::success(
                stdout_output,
                stderr_output,
                duration,
            ))
        } else {
            Ok(ProcessOutput::failure(
                status.code(),
                stdout_output,
                stderr_output,
                duration,
            ))
        }
    }
}

/// Collect a pipe's contents line by line.
fn read_to_string<R: std::io::Read>(pipe: R) -> String {
    let reader = BufReader::new(pipe);
    let mut output = String::new();
    for line in reader.lines().map_while(std::result::Result::ok) {
        output.push_str(&line);
        output.push('\n');
    }
    output
}

/// Render a command line for error messages.
fn render_command(program: &str, args: &[&str]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_successful_command() {
        let runner = SystemRunner::new();
        let result = runner.run("echo", &["hello"]).unwrap();

        assert!(result.success);
        assert_eq!(result.exit_code, Some(0));
        assert!(result.stdout.contains("hello"));
    }

    #[cfg(unix)]
    #[test]
    fn run_failing_command() {
        let runner = SystemRunner::new();
        let result = runner.run("sh", &["-c", "exit 3"]).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, Some(3));
    }

    #[cfg(unix)]
    #[test]
    fn run_captures_stderr_separately() {
        let runner = SystemRunner::new();
        let result = runner
            .run("sh", &["-c", "echo out; echo err >&2"])
            .unwrap();

        assert!(result.stdout.contains("out"));
        assert!(result.stderr.contains("err"));
        assert!(!result.stdout.contains("err"));
    }

    #[test]
    fn run_nonexistent_program_is_spawn_error() {
        let runner = SystemRunner::new();
        let result = runner.run("this-command-does-not-exist-12345", &[]);

        assert!(matches!(
            result,
            Err(BinscoutError::SpawnFailed { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn run_enforces_timeout() {
        let runner = SystemRunner::with_timeout(Duration::from_millis(100));
        let result = runner.run("sleep", &["5"]);

        assert!(matches!(
            result,
            Err(BinscoutError::CommandTimeout { .. })
        ));
    }

    #[test]
    fn render_command_joins_args() {
        assert_eq!(render_command("npm", &["bin", "-g"]), "npm bin -g");
        assert_eq!(render_command("npm", &[]), "npm");
    }
}
