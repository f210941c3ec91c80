//! pmd-launch - Configurable CLI launcher for the PMD static analysis engine
//!
//! Resolves a directory to scan, builds a fixed PMD invocation (report format,
//! report file, ruleset) and hands it to the installed `pmd` executable. All
//! scanning, rule evaluation, and report writing happen inside PMD; this crate
//! only marshals arguments and passes the engine's exit code through.
//!
//! # Example
//!
//! ```no_run
//! use pmd_launch::{launch, PmdToolset, ScanConfig};
//!
//! let config = ScanConfig::default()
//!     .target("/tmp/project")
//!     .format("xml");
//!
//! let toolset = PmdToolset::detect().unwrap();
//! let code = launch(&config, &toolset).unwrap();
//! std::process::exit(code);
//! ```

pub mod engine;

use std::path::{Path, PathBuf};
use thiserror::Error;

pub use engine::{AnalysisEngine, PmdToolset};

/// Directory scanned when no path is given on the command line.
pub const DEFAULT_TARGET_DIR: &str = ".";

/// Report format requested from PMD by default.
pub const DEFAULT_REPORT_FORMAT: &str = "csv";

/// File the report is written to by default.
pub const DEFAULT_REPORT_FILE: &str = "../logs/log.csv";

/// Ruleset applied when none is named.
pub const DEFAULT_RULESET: &str = "rulesets/processing.xml";

#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("PMD executable not found on PATH. Install from https://pmd.github.io/")]
    EngineNotFound,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to launch {exe}: {source}")]
    Spawn {
        exe: String,
        #[source]
        source: std::io::Error,
    },
}

/// Scan configuration
///
/// Holds everything the launcher forwards to PMD. Values start from the
/// built-in defaults and are overridden field by field; the target path is
/// kept verbatim, with no normalization or existence check.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Directory handed to PMD as `-d`
    pub target_dir: PathBuf,
    /// Report format handed to PMD as `-f`, if any
    pub format: Option<String>,
    /// Report file handed to PMD as `-r`, if any
    pub report_file: Option<PathBuf>,
    /// Ruleset reference handed to PMD as `-R`
    pub ruleset: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            target_dir: PathBuf::from(DEFAULT_TARGET_DIR),
            format: Some(DEFAULT_REPORT_FORMAT.to_string()),
            report_file: Some(PathBuf::from(DEFAULT_REPORT_FILE)),
            ruleset: DEFAULT_RULESET.to_string(),
        }
    }
}

impl ScanConfig {
    /// Set the directory to scan
    pub fn target<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.target_dir = path.as_ref().to_path_buf();
        self
    }

    /// Set the report format
    pub fn format<S: Into<String>>(mut self, format: S) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Set the report file
    pub fn report_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.report_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the ruleset reference
    pub fn ruleset<S: Into<String>>(mut self, ruleset: S) -> Self {
        self.ruleset = ruleset.into();
        self
    }

    /// Drop the `-f`/`-r` pair so PMD writes its report to stdout in its own
    /// default format.
    pub fn report_to_stdout(mut self) -> Self {
        self.format = None;
        self.report_file = None;
        self
    }

    /// Token vector handed to the engine.
    ///
    /// Order is fixed: `-d <dir>`, then `-f <format>` and `-r <file>` when
    /// configured, then `-R <ruleset>`. Absent optionals contribute no tokens.
    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec![
            "-d".to_string(),
            self.target_dir.to_string_lossy().to_string(),
        ];

        if let Some(ref format) = self.format {
            args.push("-f".to_string());
            args.push(format.clone());
        }

        if let Some(ref report) = self.report_file {
            args.push("-r".to_string());
            args.push(report.to_string_lossy().to_string());
        }

        args.push("-R".to_string());
        args.push(self.ruleset.clone());

        args
    }

    /// Validate the configuration
    ///
    /// The ruleset is the only value that must be present; everything else is
    /// either a built-in constant or raw passthrough the engine interprets.
    pub fn validate(&self) -> Result<(), LaunchError> {
        if self.ruleset.trim().is_empty() {
            return Err(LaunchError::InvalidConfig(
                "No ruleset reference specified".into(),
            ));
        }
        Ok(())
    }
}

/// Validate the configuration and hand its token vector to the engine.
///
/// Returns the engine's exit code untouched. The launcher inspects nothing
/// else: a missing target directory, a malformed ruleset, or an engine
/// internal error all surface only through the engine's own exit code and
/// stderr.
pub fn launch(config: &ScanConfig, engine: &dyn AnalysisEngine) -> Result<i32, LaunchError> {
    config.validate()?;
    engine.run(&config.to_args())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ScanConfig::default();
        assert_eq!(config.target_dir, PathBuf::from(DEFAULT_TARGET_DIR));
        assert_eq!(config.format.as_deref(), Some(DEFAULT_REPORT_FORMAT));
        assert_eq!(config.ruleset, DEFAULT_RULESET);
    }

    #[test]
    fn test_default_target_in_args() {
        let args = ScanConfig::default().to_args();
        assert_eq!(args[0], "-d");
        assert_eq!(args[1], DEFAULT_TARGET_DIR);
    }

    #[test]
    fn test_target_override_is_verbatim() {
        let args = ScanConfig::default().target("relative/../weird//path").to_args();
        assert_eq!(args[1], "relative/../weird//path");
    }

    #[test]
    fn test_example_token_sequence() {
        let args = ScanConfig::default().target("/tmp/project").to_args();
        assert_eq!(
            args,
            vec![
                "-d",
                "/tmp/project",
                "-f",
                "csv",
                "-r",
                "../logs/log.csv",
                "-R",
                "rulesets/processing.xml",
            ]
        );
    }

    #[test]
    fn test_ruleset_always_present() {
        let with_report = ScanConfig::default().to_args();
        let without_report = ScanConfig::default().report_to_stdout().to_args();

        for args in [with_report, without_report] {
            let pos = args.iter().position(|t| t == "-R").unwrap();
            assert_eq!(args[pos + 1], DEFAULT_RULESET);
        }
    }

    #[test]
    fn test_stdout_report_leaves_no_stray_tokens() {
        let args = ScanConfig::default().target("src").report_to_stdout().to_args();
        assert_eq!(args, vec!["-d", "src", "-R", "rulesets/processing.xml"]);
        assert!(!args.iter().any(String::is_empty));
    }

    #[test]
    fn test_builder_overrides() {
        let config = ScanConfig::default()
            .target("lib")
            .format("xml")
            .report_file("out/report.xml")
            .ruleset("rulesets/custom.xml");

        assert_eq!(
            config.to_args(),
            vec![
                "-d",
                "lib",
                "-f",
                "xml",
                "-r",
                "out/report.xml",
                "-R",
                "rulesets/custom.xml",
            ]
        );
    }

    #[test]
    fn test_validate_empty_ruleset() {
        let config = ScanConfig::default().ruleset("  ");
        assert!(matches!(
            config.validate(),
            Err(LaunchError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_validate_default_config() {
        assert!(ScanConfig::default().validate().is_ok());
    }
}
