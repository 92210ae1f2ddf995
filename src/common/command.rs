use crate::error::Result;
use derive_more::Deref;
use log::{debug, error};
use std::{
    fmt::Display,
    io,
    process::{Command, ExitStatus},
    time::{Duration, Instant},
};

/// Exit code used when the program could not be found, as shells do
const NOT_FOUND: i32 = 127;
/// Exit code used when the program was found but could not be started
const NOT_EXECUTABLE: i32 = 126;
/// Offset added to the signal number of a child killed by a signal
const SIGNAL_OFFSET: i32 = 128;

/// The command to run, as given on the command line
#[derive(Deref, Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandLine(Vec<String>);

/// Outcome of running a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Execution {
    /// Exit code of the command
    pub code: i32,
    /// Wall-clock time between spawning the command and it finishing
    pub elapsed: Duration,
}

impl From<Vec<String>> for CommandLine {
    fn from(args: Vec<String>) -> Self {
        Self(args)
    }
}

impl Display for CommandLine {
    /// Arguments joined by single spaces, without any quoting
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0.join(" "))
    }
}

impl CommandLine {
    /// Shell-quoted form of the command line, for logs
    fn quoted(&self) -> String {
        shlex::try_join(self.0.iter().map(String::as_str))
            .unwrap_or_else(|_| self.to_string())
    }

    /// Run the command with inherited standard streams and wait for it to finish
    ///
    /// Failing to start the command is not an error; it is reported through the
    /// exit code like a shell would.
    pub fn run(&self) -> Result<Execution> {
        let Some((program, args)) = self.0.split_first() else {
            return Ok(Execution {
                code: 0,
                elapsed: Duration::ZERO,
            });
        };

        debug!("running {}", self.quoted());

        let start = Instant::now();
        let code = match Command::new(program).args(args).spawn() {
            Ok(mut child) => exit_code(child.wait()?),
            Err(e) => {
                error!("could not run '{program}': {e}");
                spawn_failure_code(&e)
            }
        };
        let elapsed = start.elapsed();

        debug!("'{}' exited with {code} after {elapsed:?}", self.quoted());

        Ok(Execution { code, elapsed })
    }
}

/// Exit code to report for a finished child
///
/// A child killed by signal N reports 128 + N, the way shells do, rather
/// than a negative status truncated to 256 - N by the process exit.
fn exit_code(status: ExitStatus) -> i32 {
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return SIGNAL_OFFSET + signal;
        }
    }

    status.code().unwrap_or(1)
}

/// Exit code to report for a child that could not be started
fn spawn_failure_code(e: &io::Error) -> i32 {
    match e.kind() {
        io::ErrorKind::NotFound => NOT_FOUND,
        _ => NOT_EXECUTABLE,
    }
}
