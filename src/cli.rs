use clap::Parser;
use protstat::AnalysisError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error("Invalid argument: {0}")]
    Argument(String),

    #[error("Logging setup failed: {0}")]
    Logging(String),
}

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Protstat - descriptive physicochemical statistics of protein sequences"
)]
pub struct Cli {
    /// One or more amino acid sequences (single-letter codes, any case)
    #[arg(required = true, value_name = "SEQUENCE")]
    pub sequences: Vec<String>,

    /// pH used for the net charge estimate
    #[arg(long, default_value_t = protstat::protein::DEFAULT_PH, value_name = "PH")]
    pub ph: f64,

    /// Treat inputs as coding DNA and analyze the translated protein
    #[arg(long)]
    pub dna: bool,

    /// Log to stderr instead of a file under ~/.protstat/logs
    #[arg(long)]
    pub no_log_file: bool,
}

impl Cli {
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=14.0).contains(&self.ph) {
            return Err(CliError::Argument(format!(
                "pH must be between 0 and 14, got {}",
                self.ph
            )));
        }
        Ok(())
    }
}
