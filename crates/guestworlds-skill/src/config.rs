//! Server configuration read from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use guestworlds_calendar::application::schedule_loader;
use guestworlds_calendar::domain::schedule::Schedule;
use guestworlds_calendar::domain::season;

use crate::error::AppError;

const HOST_VAR: &str = "HOST";
const PORT_VAR: &str = "PORT";
const SCHEDULE_VAR: &str = "GUESTWORLDS_SCHEDULE";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

/// Settings for the skill server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// YAML schedule replacing the built-in one, if set.
    pub schedule_path: Option<PathBuf>,
}

impl SkillConfig {
    /// Reads `HOST`, `PORT`, and `GUESTWORLDS_SCHEDULE` from the process
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `PORT` is not a valid port number.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `PORT` is not a valid port number.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let host = lookup(HOST_VAR).unwrap_or_else(|| DEFAULT_HOST.to_owned());
        let port = match lookup(PORT_VAR) {
            Some(raw) => raw
                .parse()
                .map_err(|e| AppError::Config(format!("{PORT_VAR} must be a valid u16: {e}")))?,
            None => DEFAULT_PORT,
        };
        let schedule_path = lookup(SCHEDULE_VAR)
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            host,
            port,
            schedule_path,
        })
    }

    /// The address to listen on.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `host:port` is not a socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr, AppError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))
    }

    /// Loads the configured schedule file, or the built-in schedule when
    /// none is configured.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Schedule` if the file cannot be read or is invalid.
    pub fn load_schedule(&self) -> Result<Schedule, AppError> {
        match &self.schedule_path {
            Some(path) => Ok(schedule_loader::load_schedule(path)?),
            None => Ok(season::built_in_schedule()),
        }
    }
}
