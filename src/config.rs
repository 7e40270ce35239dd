//! Configuration resolved once at process start

use std::path::PathBuf;
use std::time::Duration;
use chrono::NaiveDate;
use log::debug;
use uuid::Uuid;

use crate::error::Error;
use crate::request::PregenRand;

pub const DEFAULT_API_PATH: &str
  = "https://api.random.org/json-rpc/4/invoke";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);
pub const DEFAULT_SEPARATOR: &str = " ";

/// Key baked in at build time, if any
pub const EMBEDDED_API_KEY: Option<&str>
  = option_env!("RANDAPI_DEFAULT_API_KEY");

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig
{   /// JSON-RPC endpoint
    pub api_path: String
  , /// Validated API key
    pub api_key: String
  , /// Deadline for the single request
    pub timeout: Duration
  , /// Pregenerated randomization selector
    pub pregen: PregenRand
  , /// Log request metadata after completion
    pub verbose: bool
  , /// Suppress warnings
    pub quiet: bool
  , pub separator: String
  , /// Value stream goes here instead of stdout
    pub output_file: Option<PathBuf>
}

impl Default for AppConfig
{   fn default() -> Self
    {   AppConfig
        {   api_path: DEFAULT_API_PATH.to_string()
          , api_key: String::new()
          , timeout: DEFAULT_TIMEOUT
          , pregen: PregenRand::default()
          , verbose: false
          , quiet: false
          , separator: DEFAULT_SEPARATOR.to_string()
          , output_file: None
        }
    }
}

/// Pick the explicit key, else the embedded one; it must be a UUID
pub fn resolve_api_key(
  explicit: Option<&str>
, embedded: Option<&str>
) -> Result<String, Error>
{   let key = explicit
      .filter(|k| !k.is_empty())
      .or(embedded.filter(|k| !k.is_empty()))
      .map(str::trim)
      .ok_or_else(|| Error::InvalidConfiguration(
        "api key is required".to_string()
      ))?;

    Uuid::parse_str(key).map_err(|e| {
      Error::InvalidConfiguration(format!("api-key: {}", e))
    })?;

    debug!("API key resolved");
    Ok(key.to_string())
}

/// Build the pregen selector from `--pr-id` / `--pr-date`
///
/// The date must be `YYYY-MM-DD` and not later than `today`.
pub fn resolve_pregen(
  id: Option<String>
, date: Option<String>
, today: NaiveDate
) -> Result<PregenRand, Error>
{   let id = id.filter(|s| !s.is_empty());
    let date = date.filter(|s| !s.is_empty());

    if id.is_some() && date.is_some()
    {   return Err(Error::InvalidConfiguration(
          "only pr-id OR pr-date is allowed. Not both".to_string()
        ));
    }

    if let Some(d) = &date
    {   let parsed = NaiveDate::parse_from_str(d, "%Y-%m-%d")
          .map_err(|e| Error::InvalidConfiguration(
            format!("invalid date format {:?}: {}", d, e)
          ))?;
        if parsed > today
        {   return Err(Error::InvalidConfiguration(
              "latest allowed date is today".to_string()
            ));
        }
    }

    PregenRand::new(id, date)
}

/// Hide all but the last quarter of a key
pub fn mask_api_key(key: &str) -> String
{   if key.is_empty()
    {   return "unset".to_string();
    }
    let chars: Vec<char> = key.chars().collect();
    let masked = chars.len() - chars.len() / 4;
    let visible: String = chars[masked..].iter().collect();
    format!("{}{}", "*".repeat(masked), visible)
}
