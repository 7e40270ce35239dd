//! Rendering of generated values and usage status

use std::io::Write;
use log::{info, warn};

use crate::error::Error;
use crate::response::ApiInfo;
use crate::usage::UsageStatus;

/// Daily quota of the service, used for the low-quota warning
const MAX_REQUESTS: f64 = 1_000.0;
const MAX_BITS: f64 = 250_000.0;
const WARN_THRESHOLD_PERCENT: f64 = 5.0;

/// Percentages of the daily quota still available
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuotaLeft
{   pub requests_percent: f64
  , pub bits_percent: f64
}

impl QuotaLeft
{   pub fn from_info(info: &ApiInfo) -> Self
    {   QuotaLeft
        {   requests_percent: 100.0 * info.requests_left as f64 / MAX_REQUESTS
          , bits_percent: 100.0 * info.bits_left as f64 / MAX_BITS
        }
    }

    pub fn is_low(&self) -> bool
    {   self.requests_percent <= WARN_THRESHOLD_PERCENT
          || self.bits_percent <= WARN_THRESHOLD_PERCENT
    }
}

pub struct OutputProcessor
{   verbose: bool
  , quiet: bool
  , separator: String
  , writer: Box<dyn Write + Send>
}

impl OutputProcessor
{   pub fn new(
      verbose: bool
    , quiet: bool
    , separator: impl Into<String>
    , writer: Box<dyn Write + Send>
    ) -> Self
    {   OutputProcessor
        {   verbose
          , quiet
          , separator: separator.into()
          , writer
        }
    }

    /// Write values joined by the separator, one line
    pub fn generate_rand_output(
      &mut self
    , values: &[String]
    , api_info: &ApiInfo
    ) -> Result<(), Error>
    {   self.api_info_output(api_info);

        writeln!(self.writer, "{}", values.join(self.separator.as_str()))?;
        self.writer.flush()?;
        Ok(())
    }

    pub fn generate_usage_output(&mut self, status: &UsageStatus)
      -> Result<(), Error>
    {   writeln!(
          self.writer,
          "Usage statistic for API key {}:",
          status.api_key
        )?;
        writeln!(self.writer, "  Status:        {}", status.status)?;
        writeln!(self.writer, "  CreationTime:  {}", status.creation_time)?;
        writeln!(self.writer, "  TotalRequests: {}", status.total_requests)?;
        writeln!(self.writer, "  TotalBits:     {}", status.total_bits)?;
        writeln!(self.writer, "  RequestsLeft:  {}", status.requests_left)?;
        writeln!(self.writer, "  BitsLeft:      {}", status.bits_left)?;
        self.writer.flush()?;
        Ok(())
    }

    fn api_info_output(&self, api_info: &ApiInfo)
    {   if self.quiet
        {   return;
        }

        let quota = QuotaLeft::from_info(api_info);
        if quota.is_low()
        {   warn!(
              "requests left    - {:.2}% - {}",
              quota.requests_percent, api_info.requests_left
            );
            warn!(
              "random bits left - {:.2}% - {}",
              quota.bits_percent, api_info.bits_left
            );
        }

        if !self.verbose
        {   return;
        }

        info!(
          "request {} finished at {}",
          api_info.id, api_info.timestamp
        );
        info!("requests left: {}", api_info.requests_left);
        info!("random bits left: {}", api_info.bits_left);
        info!("random bits used: {}", api_info.bits_used);
        info!("advisory delay: {}ms", api_info.advisory_delay);
    }
}
