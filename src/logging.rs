use std::error::Error;
use std::path::{Path, PathBuf};
use chrono::Utc;
use log::{info, error, debug};
use env_logger::{Builder, Target};

pub const LOG_LEVEL_VAR: &str = "PROTSTAT_LOG_LEVEL";

/// Directory holding the timestamped log files
pub fn log_directory() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".protstat")
        .join("logs")
}

fn create_log_file(log_dir: &Path) -> Result<PathBuf, Box<dyn Error>> {
    std::fs::create_dir_all(log_dir)?;
    Ok(log_dir.join(format!("protstat_{}.log", Utc::now().format("%Y%m%d_%H%M%S"))))
}

/// Initialize logging to a timestamped file, or to stderr when `to_file` is false
pub fn init_logging(to_file: bool) -> Result<Option<PathBuf>, Box<dyn Error>> {
    let mut builder = Builder::from_default_env();
    builder.format(|buf, record| {
        use std::io::Write;
        writeln!(buf,
            "{} [{}] [{}:{}] {}",
            Utc::now().format("%Y-%m-%d %H:%M:%S%.3f UTC"),
            record.level(),
            record.module_path().unwrap_or("unknown"),
            record.line().unwrap_or(0),
            record.args()
        )
    });

    let log_file = if to_file {
        let log_dir = log_directory();
        let log_file = create_log_file(&log_dir)?;
        builder.target(Target::Pipe(Box::new(std::fs::File::create(&log_file)?)));
        Some(log_file)
    } else {
        builder.target(Target::Stderr);
        None
    };

    builder.try_init()?;

    info!("Logging system initialized");
    if let Some(path) = &log_file {
        info!("Log file: {path:?}");
    }

    Ok(log_file)
}

/// Map the level named in `PROTSTAT_LOG_LEVEL` onto `RUST_LOG`
pub fn set_log_level() {
    let level = std::env::var(LOG_LEVEL_VAR)
        .unwrap_or_else(|_| "info".to_string())
        .to_lowercase();

    std::env::set_var("RUST_LOG", format!("protstat={}", parse_level(&level)));
}

fn parse_level(level: &str) -> &'static str {
    match level {
        "trace" => "trace",
        "debug" => "debug",
        "info" => "info",
        "warn" => "warn",
        "error" => "error",
        _ => {
            eprintln!("Invalid log level '{level}', defaulting to 'info'");
            "info"
        }
    }
}

pub fn log_system_info() {
    info!("=== Protstat Starting ===");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));
    info!("Build target: {}", std::env::consts::ARCH);
    info!("Operating system: {}", std::env::consts::OS);
    info!("Available CPU cores: {}", num_cpus::get());

    for (key, value) in std::env::vars() {
        if key.starts_with("PROTSTAT_") || key == "RUST_LOG" {
            debug!("  {key}: {value}");
        }
    }
}

pub fn log_shutdown() {
    info!("=== Protstat Finished at {} ===", Utc::now().format("%Y-%m-%d %H:%M:%S UTC"));
}

/// Log an error that ends the run, echoing it to stderr
pub fn log_critical_error(error: &str, context: Option<&str>) {
    match context {
        Some(ctx) => {
            error!("CRITICAL ERROR [{ctx}]: {error}");
            eprintln!("error [{ctx}]: {error}");
        }
        None => {
            error!("CRITICAL ERROR: {error}");
            eprintln!("error: {error}");
        }
    }
}
