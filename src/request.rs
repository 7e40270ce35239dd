//! JSON-RPC request envelope and its builder

use log::{debug, error, trace};
use serde::{ser, Deserialize, Serialize, Serializer};
use serde_json::value::RawValue;
use uuid::Uuid;

use crate::error::Error;

/// The only protocol version spoken or accepted
pub const JSON_RPC_VERSION: &str = "2.0";

/// Outgoing envelope
/// `params` is serialized once, when the request is built
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomRequest
{   pub id: Uuid
  , #[serde(rename = "jsonrpc")]
    pub jsonrpc_version: String
  , pub method: String
  , params: Box<RawValue>
}

impl RandomRequest
{   /// Serialized params as sent on the wire
    pub fn params(&self) -> &RawValue
    {   &self.params
    }
}

/// Build a request for `method` with a fresh id
///
/// `None`, or params that serialize to `null`, are rejected with
/// [`Error::InvalidParameters`]. Nothing touches the network here.
pub fn new_request<P>(method: &str, params: Option<&P>)
  -> Result<RandomRequest, Error>
where
  P: Serialize + ?Sized
{   let params = params.ok_or_else(|| {
      error!("No params for method: {}", method);
      Error::InvalidParameters
    })?;

    if method.is_empty()
    {   error!("Empty method name");
        return Err(Error::InvalidParameters);
    }

    let raw = serde_json::value::to_raw_value(params)
      .map_err(|e| {
        error!("Failed to encode params for {}: {}", method, e);
        Error::SerializationFailed(e)
      })?;

    if raw.get() == "null"
    {   error!("Params for {} serialized to null", method);
        return Err(Error::InvalidParameters);
    }

    let request = RandomRequest
    {   id: Uuid::new_v4()
      , jsonrpc_version: JSON_RPC_VERSION.to_string()
      , method: method.to_string()
      , params: raw
    };

    debug!("Built request {} for {}", request.id, request.method);
    trace!("Request params: {}", request.params.get());
    Ok(request)
}

/// Pregenerated randomization selector
///
/// Serializes to `null` when empty, to the set value otherwise.
/// Both set is an error, at construction and at serialization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PregenRand
{   pub id: Option<String>
  , pub date: Option<String>
}

const ERR_BOTH_PREGEN: &str = "only one of date or id is allowed";

impl PregenRand
{   pub fn new(id: Option<String>, date: Option<String>)
      -> Result<Self, Error>
    {   if id.is_some() && date.is_some()
        {   return Err(Error::invalid_argument(ERR_BOTH_PREGEN));
        }
        Ok(PregenRand { id, date })
    }

    pub fn by_id(id: impl Into<String>) -> Self
    {   PregenRand { id: Some(id.into()), date: None }
    }

    pub fn by_date(date: impl Into<String>) -> Self
    {   PregenRand { id: None, date: Some(date.into()) }
    }

    pub fn is_set(&self) -> bool
    {   self.id.is_some() || self.date.is_some()
    }
}

impl Serialize for PregenRand
{   fn serialize<S: Serializer>(&self, serializer: S)
      -> Result<S::Ok, S::Error>
    {   match (&self.id, &self.date)
        {   (None, None) => serializer.serialize_none()
          , (Some(id), None) => serializer.serialize_str(id)
          , (None, Some(date)) => serializer.serialize_str(date)
          , (Some(_), Some(_)) => {
              Err(ser::Error::custom(ERR_BOTH_PREGEN))
            }
        }
    }
}
