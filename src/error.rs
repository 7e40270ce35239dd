use thiserror::Error;
use uuid::Uuid;

/// Stable classification of an [`Error`]
/// Callers branch on this instead of matching messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind
{   /// Bad parameters, caught before any network activity
    InvalidInput
  , /// Network failure, timeout or non-200 status
    Transport
  , /// Response could not be trusted as a JSON-RPC reply
    ProtocolViolation
  , /// The service answered with its own error envelope
    RemoteReported
  , /// Response id does not belong to the request
    CorrelationFailure
  , /// Invalid configuration resolved at startup
    Configuration
  , /// Rendering to the output stream failed
    Output
}

/// Error type for randapi operations
#[derive(Debug, Error)]
pub enum Error
{   /// Params were absent when building a request
    #[error("invalid parameters")]
    InvalidParameters
  , /// Params could not be serialized
    #[error("encode payload: {0}")]
    SerializationFailed(#[source] serde_json::Error)
  , /// A per-operation argument is out of range
    #[error("{0}")]
    InvalidArgument(String)
  , /// Configuration rejected at startup
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String)
  , /// HTTP request failed before a status was received
    #[error("execute request: {0}")]
    Http(#[from] reqwest::Error)
  , /// Deadline elapsed before the full response was read
    #[error("execute request: deadline of {0:?} exceeded")]
    Timeout(std::time::Duration)
  , /// Anything other than 200 OK
    #[error("unexpected status code: {0}")]
    UnexpectedStatusCode(u16)
  , /// Body is not a well-formed envelope
    #[error("invalid response: decode response: {0}")]
    DecodeFailed(#[source] serde_json::Error)
  , /// The service reported an error
    #[error("invalid response: error in response: {code} - {message}")]
    ErrorInResponse
    {   code: i64
      , message: String
    }
  , /// Neither result nor error in the envelope
    #[error("invalid response: missing result in response")]
    MissingResult
  , /// jsonrpc field is not "2.0"
    #[error("invalid response: unexpected json rpc version: {0}")]
    UnexpectedProtocolVersion(String)
  , /// Response id differs from request id
    #[error("request and response id mismatch: {response} != {request}")]
    RequestResponseMismatch
    {   response: String
      , request: Uuid
    }
  , /// random.data does not match the operation's item type
    #[error("decode result: {0}")]
    DataDecodeFailed(String)
  , /// Writing rendered output failed
    #[error("write output: {0}")]
    Output(#[from] std::io::Error)
}

impl Error
{   /// Classify the error
    pub fn kind(&self) -> ErrorKind
    {   match self
        {   Error::InvalidParameters
          | Error::SerializationFailed(_)
          | Error::InvalidArgument(_) => ErrorKind::InvalidInput
          , Error::InvalidConfiguration(_) => ErrorKind::Configuration
          , Error::Http(_)
          | Error::Timeout(_)
          | Error::UnexpectedStatusCode(_) => ErrorKind::Transport
          , Error::DecodeFailed(_)
          | Error::MissingResult
          | Error::UnexpectedProtocolVersion(_)
          | Error::DataDecodeFailed(_) => ErrorKind::ProtocolViolation
          , Error::ErrorInResponse { .. } => ErrorKind::RemoteReported
          , Error::RequestResponseMismatch { .. }
              => ErrorKind::CorrelationFailure
          , Error::Output(_) => ErrorKind::Output
        }
    }

    pub(crate) fn invalid_argument(msg: impl Into<String>) -> Self
    {   Error::InvalidArgument(msg.into())
    }
}
