//! Account usage status (`getUsage`)

use serde::{Deserialize, Serialize};

use crate::time::RandTime;

pub const USAGE_METHOD: &str = "getUsage";

#[derive(Debug, Clone, Serialize)]
pub(crate) struct UsageParams<'a>
{   #[serde(rename = "apiKey")]
    pub api_key: &'a str
}

/// Usage counters for one API key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageStatus
{   /// Stamped by the client, the service does not echo it
    #[serde(skip)]
    pub api_key: String
  , pub status: String
  , pub creation_time: RandTime
  , pub total_requests: u64
  , pub total_bits: u64
  , pub requests_left: u64
  , pub bits_left: u64
}
