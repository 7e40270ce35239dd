//! JSON-RPC response envelope and result types

use log::{debug, error, trace};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;
use uuid::Uuid;

use crate::error::Error;
use crate::request::JSON_RPC_VERSION;
use crate::time::RandTime;

/// Remote-reported failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse
{   pub code: i64
  , pub message: String
}

/// Random values plus their completion time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomData
{   /// Shape depends on the operation
    pub data: Box<RawValue>
  , #[serde(rename = "completionTime")]
    pub completion_time: RandTime
}

/// Successful `result` of a generate* call
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RandResponseResult
{   pub random: RandomData
  , pub bits_used: u64
  , pub bits_left: u64
  , pub requests_left: u64
  , pub advisory_delay: u64
}

impl RandResponseResult
{   /// Decode `random.data` into the operation's item type
    pub fn decode_data<T: DeserializeOwned>(&self) -> Result<Vec<T>, Error>
    {   serde_json::from_str(self.random.data.get())
          .map_err(|e| {
            error!("Random data does not match item type: {}", e);
            Error::DataDecodeFailed(e.to_string())
          })
    }
}

/// Wire envelope, as decoded, before any invariant is checked
#[derive(Debug, Deserialize)]
pub struct RandResponse<T>
{   #[serde(default)]
    pub id: Option<Uuid>
  , #[serde(rename = "jsonrpc", default)]
    pub jsonrpc_version: String
  , pub result: Option<T>
  , #[serde(default)]
    pub error: Option<ErrorResponse>
}

/// An envelope that passed every protocol check
#[derive(Debug, Clone)]
pub struct Reply<T>
{   /// `None` when the service did not echo an id
    pub id: Option<Uuid>
  , pub result: T
}

impl<T: DeserializeOwned> RandResponse<T>
{   /// Decode and validate raw bytes
    ///
    /// Check order: error envelope, missing result, protocol version.
    /// Correlation is left to the caller, which owns the request id.
    pub fn parse(data: &[u8]) -> Result<Reply<T>, Error>
    {   trace!("Parsing {} response bytes", data.len());

        let resp: RandResponse<T> = serde_json::from_slice(data)
          .map_err(|e| {
            error!("Decode response: {}", e);
            Error::DecodeFailed(e)
          })?;

        if let Some(err) = resp.error
        {   error!("Service error {}: {}", err.code, err.message);
            return Err(Error::ErrorInResponse
            {   code: err.code
              , message: err.message
            });
        }

        let result = resp.result.ok_or_else(|| {
          error!("Response carries neither result nor error");
          Error::MissingResult
        })?;

        if resp.jsonrpc_version != JSON_RPC_VERSION
        {   error!(
              "Unexpected json rpc version: {:?}",
              resp.jsonrpc_version
            );
            return Err(Error::UnexpectedProtocolVersion(
              resp.jsonrpc_version
            ));
        }

        debug!("Response parsed, id: {:?}", resp.id);
        Ok(Reply
        {   id: resp.id
          , result
        })
    }
}

/// Metadata handed to the output layer alongside the values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiInfo
{   pub id: Uuid
  , pub timestamp: RandTime
  , pub bits_used: u64
  , pub bits_left: u64
  , pub requests_left: u64
  , pub advisory_delay: u64
}

impl ApiInfo
{   pub fn new(id: Uuid, result: &RandResponseResult) -> Self
    {   ApiInfo
        {   id
          , timestamp: result.random.completion_time
          , bits_used: result.bits_used
          , bits_left: result.bits_left
          , requests_left: result.requests_left
          , advisory_delay: result.advisory_delay
        }
    }
}
