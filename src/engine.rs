//! Engine discovery and process invocation.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::{LaunchError, ScanConfig};

/// Entry point of the external analysis engine.
///
/// The launcher only ever hands an engine a flat token list and reads back an
/// exit code; tests substitute a recording implementation for the real
/// process.
pub trait AnalysisEngine {
    /// Run the engine with the given tokens and return its exit code.
    fn run(&self, args: &[String]) -> Result<i32, LaunchError>;
}

/// Detected PMD installation
#[derive(Debug, Clone)]
pub struct PmdToolset {
    pub executable: PathBuf,
}

impl PmdToolset {
    /// Locate the PMD executable on PATH.
    pub fn detect() -> Result<Self, LaunchError> {
        for name in ["pmd", "pmd.bat"] {
            if let Ok(executable) = which::which(name) {
                log::debug!("found PMD at {}", executable.display());
                return Ok(Self { executable });
            }
        }
        Err(LaunchError::EngineNotFound)
    }

    /// Use a specific executable without probing PATH.
    pub fn with_executable<P: AsRef<Path>>(path: P) -> Self {
        Self {
            executable: path.as_ref().to_path_buf(),
        }
    }

    /// Full command line for the given configuration, for display.
    pub fn command_line(&self, config: &ScanConfig) -> String {
        let mut tokens = vec![self.executable.to_string_lossy().to_string()];
        tokens.extend(config.to_args());
        tokens.join(" ")
    }
}

impl AnalysisEngine for PmdToolset {
    fn run(&self, args: &[String]) -> Result<i32, LaunchError> {
        log::debug!("running {} {}", self.executable.display(), args.join(" "));

        let status = Command::new(&self.executable)
            .args(args)
            .status()
            .map_err(|source| LaunchError::Spawn {
                exe: self.executable.to_string_lossy().to_string(),
                source,
            })?;

        // A signal-terminated engine reports no code; treat it as a failure.
        Ok(status.code().unwrap_or(1))
    }
}
