use std::path::PathBuf;

use chrono::Local;
use configatron::{Configatron, ConfigurationJson};
use error::{CaseforgeError, ErrorKind};
use tracing::{level_filters::LevelFilter, Level};
use tracing_appender::{
    non_blocking::{NonBlocking, WorkerGuard},
    rolling,
};
use tracing_subscriber::{
    fmt::format::{DefaultFields, Format},
    FmtSubscriber,
};

pub mod casing;
pub mod configatron;
pub mod error;
pub mod intaker;

pub use casing::{
    convert, to_camel_case, to_dot_case, to_kebab_case, CaseBoundary, CaseStyle, Converter,
};
pub use error::InvalidInputReason;
pub use intaker::RawInput;

pub type CaseforgeResult<T> = Result<T, CaseforgeError>;

/// Name of the configuration file looked up in the runtime's working directory.
pub const CONFIG_FILE_NAME: &str = "caseforge.config.json";

pub type CaseforgeLogSubscriber = FmtSubscriber<DefaultFields, Format, LevelFilter, NonBlocking>;

/// Owns the settings a caller (typically an HTTP layer) converts with.
#[derive(Clone, PartialEq, Debug)]
pub struct CaseforgeRuntime {
    current_dir: PathBuf,
    configatron: Configatron,
}

impl CaseforgeRuntime {
    pub fn new(current_dir: PathBuf) -> Self {
        Self {
            current_dir,
            configatron: Configatron::default(),
        }
    }

    pub fn get_configatron(&self) -> &Configatron {
        &self.configatron
    }

    /// Returns a converter following the currently loaded configuration.
    pub fn converter(&self) -> Converter {
        self.configatron.build_converter()
    }

    /// Loads `caseforge.config.json` from the working directory, replacing the current settings.
    ///
    /// # Errors
    /// - `ErrorKind::ConfigFileReadError` when the file can not be read.
    /// - `ErrorKind::ConfigFileParsingError` when its content is not a valid configuration.
    pub fn load_caseforge_config(&mut self) -> CaseforgeResult<()> {
        let config_path = self.current_dir.join(CONFIG_FILE_NAME);

        let raw_config = std::fs::read_to_string(&config_path).map_err(|err| {
            CaseforgeError::raise_general_error(
                ErrorKind::ConfigFileReadError,
                &format!(
                    "Failed to read `{}`: {}",
                    config_path.to_string_lossy(),
                    err
                ),
            )
        })?;

        let config_json: ConfigurationJson = serde_json::from_str(&raw_config).map_err(|err| {
            CaseforgeError::raise_general_error(
                ErrorKind::ConfigFileParsingError,
                &format!(
                    "Failed to parse `{}`: {}",
                    config_path.to_string_lossy(),
                    err
                ),
            )
        })?;

        self.configatron = Configatron::from(config_json);

        Ok(())
    }

    fn generate_log_filename(&self) -> String {
        let timestamp = Local::now().format("%Y-%m-%d_%H-%M-%S").to_string();

        format!("caseforge_log_{}.log", timestamp)
    }

    /// Builds a trace-level subscriber writing to `logs/` under the working directory.
    ///
    /// The returned guard flushes the writer when dropped, so it has to outlive the subscriber.
    pub fn generate_log_subscriber(&self) -> (CaseforgeLogSubscriber, WorkerGuard) {
        let file_name = self.generate_log_filename();
        let file_appender = rolling::never(self.current_dir.join("logs"), file_name);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::TRACE)
            .with_writer(non_blocking)
            .finish();

        (subscriber, guard)
    }
}
