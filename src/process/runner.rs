//! Blocking subprocess execution with captured stdout

use std::ffi::OsStr;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::error::{Error, Result};

/// Runs external programs directly, without a shell
#[derive(Debug, Clone, Default)]
pub struct CommandRunner {
    /// Working directory for spawned programs, the caller's when unset
    cwd: Option<PathBuf>,
}

impl CommandRunner {
    /// Create a runner using the current working directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a runner that starts programs in `cwd`
    pub fn with_cwd(cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: Some(cwd.into()),
        }
    }

    /// Get the configured working directory
    pub fn cwd(&self) -> Option<&PathBuf> {
        self.cwd.as_ref()
    }

    /// Run `args[0]` with the remaining arguments and return its stdout.
    ///
    /// Blocks until the program exits. Stderr goes straight to the caller's
    /// stderr and the exit status is ignored.
    pub fn run<S: AsRef<OsStr>>(&self, args: &[S]) -> Result<String> {
        let (program, rest) = args.split_first().ok_or(Error::EmptyCommand)?;
        let program_name = program.as_ref().to_string_lossy().into_owned();

        let mut command = Command::new(program);
        command
            .args(rest)
            .stdin(Stdio::inherit())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit());
        if let Some(ref cwd) = self.cwd {
            command.current_dir(cwd);
        }

        tracing::debug!("Spawning: {}", program_name);
        let output = command.output().map_err(|source| Error::Spawn {
            program: program_name.clone(),
            source,
        })?;
        tracing::debug!("{} exited with {}", program_name, output.status);

        String::from_utf8(output.stdout).map_err(|source| Error::Decode {
            program: program_name,
            source,
        })
    }
}

/// Run a command in the current working directory and return its stdout
pub fn run_command<S: AsRef<OsStr>>(args: &[S]) -> Result<String> {
    CommandRunner::new().run(args)
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_run_captures_stdout() {
        let output = run_command(&["echo", "hello"]).unwrap();
        assert_eq!(output, "hello\n");
    }

    #[test]
    fn test_arguments_are_not_shell_expanded() {
        let output = run_command(&["echo", "$HOME", "*", "a;b"]).unwrap();
        assert_eq!(output, "$HOME * a;b\n");
    }

    #[test]
    fn test_nonzero_exit_is_not_an_error() {
        let output = run_command(&["sh", "-c", "printf partial; exit 3"]).unwrap();
        assert_eq!(output, "partial");
    }

    #[test]
    fn test_stderr_is_not_captured() {
        let output = run_command(&["sh", "-c", "echo out; echo err >&2"]).unwrap();
        assert_eq!(output, "out\n");
    }

    #[test]
    fn test_missing_program_is_spawn_error() {
        let err = run_command(&["definitely-not-a-real-program-7f3a"]).unwrap_err();
        assert!(matches!(err, Error::Spawn { .. }), "{err:?}");
    }

    #[test]
    fn test_empty_command() {
        let err = run_command::<&str>(&[]).unwrap_err();
        assert!(matches!(err, Error::EmptyCommand));
    }

    #[test]
    fn test_invalid_utf8_is_decode_error() {
        let err = run_command(&["printf", "\\377"]).unwrap_err();
        assert!(matches!(err, Error::Decode { .. }), "{err:?}");
    }

    #[test]
    fn test_with_cwd() {
        let tmp = tempfile::tempdir().unwrap();
        let runner = CommandRunner::with_cwd(tmp.path());
        assert_eq!(runner.cwd(), Some(&tmp.path().to_path_buf()));

        let output = runner.run(&["pwd"]).unwrap();
        let reported = std::fs::canonicalize(output.trim_end()).unwrap();
        assert_eq!(reported, std::fs::canonicalize(tmp.path()).unwrap());
    }
}
