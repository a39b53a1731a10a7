//! Format command implementation

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use duanju_core::TextNormalizer;

use crate::config::CliConfig;
use crate::error::CliError;

/// Arguments for the format command
#[derive(Debug, Args)]
pub struct FormatArgs {
    /// Input file (falls back to the config file's files.input)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output file (default: config's files.output, then stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress status output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl FormatArgs {
    /// Execute the format command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting text normalization");
        log::debug!("Arguments: {:?}", self);

        let config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };

        let input = self
            .input
            .clone()
            .or(config.files.input)
            .ok_or(CliError::MissingInput)?;
        let output = self.output.clone().or(config.files.output);

        let normalizer = TextNormalizer::new();
        match output {
            Some(path) => {
                let report = normalizer.normalize_file(&input, &path)?;
                if !self.quiet {
                    eprintln!("Detected encoding: {}", report.encoding);
                    eprintln!(
                        "✓ Wrote {} ({} breaks inserted)",
                        path.display(),
                        report.breaks_inserted
                    );
                }
            }
            None => {
                let decoded = normalizer.detect_and_read(&input)?;
                if !self.quiet {
                    eprintln!("Detected encoding: {}", decoded.encoding);
                }
                let formatted = normalizer.segmenter().segment(&decoded.text);
                let mut stdout = std::io::stdout();
                stdout.write_all(formatted.as_bytes())?;
                stdout.flush()?;
            }
        }

        Ok(())
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .init();
        }
    }
}
