use std::time::Duration;
use log::{debug, error, info, trace};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::Error;
use crate::operations::Operation;
use crate::request::{new_request, RandomRequest};
use crate::response::{ApiInfo, RandResponse, RandResponseResult};
use crate::usage::{UsageParams, UsageStatus, USAGE_METHOD};

pub const USER_AGENT: &str
  = concat!("randapi/", env!("CARGO_PKG_VERSION"));

const CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Values produced by one generate* call
#[derive(Debug, Clone)]
pub struct Generated
{   pub values: Vec<String>
  , pub api_info: ApiInfo
}

/// Client for the randomness JSON-RPC endpoint
///
/// Holds no per-call state; every call is one POST.
#[derive(Debug, Clone)]
pub struct RandClient
{   api_path: Url
  , timeout: Duration
  , http_client: reqwest::Client
}

impl RandClient
{   pub fn new(api_path: &str, timeout: Duration) -> Result<Self, Error>
    {   debug!("Creating RandClient for {}", api_path);
        let api_path = Url::parse(api_path).map_err(|e| {
          error!("Bad api path {:?}: {}", api_path, e);
          Error::InvalidConfiguration(
            format!("api path {:?}: {}", api_path, e)
          )
        })?;

        let http_client = reqwest::Client::builder()
          .user_agent(USER_AGENT)
          .build()?;

        Ok(RandClient
        {   api_path
          , timeout
          , http_client
        })
    }

    pub fn api_path(&self) -> &Url
    {   &self.api_path
    }

    pub fn timeout(&self) -> Duration
    {   self.timeout
    }

    /// Send a built request and return its checked result
    pub async fn execute_request(
      &self
    , request: &RandomRequest
    ) -> Result<RandResponseResult, Error>
    {   debug!("Executing {} ({})", request.method, request.id);
        self.round_trip(request).await
    }

    /// Fetch usage counters for `api_key`
    pub async fn get_usage(&self, api_key: &str)
      -> Result<UsageStatus, Error>
    {   debug!("Requesting usage status");
        let params = UsageParams { api_key };
        let request = new_request(USAGE_METHOD, Some(&params))?;

        let mut usage: UsageStatus = self.round_trip(&request).await?;
        usage.api_key = api_key.to_string();
        Ok(usage)
    }

    /// Validate, build, execute and decode one operation
    pub async fn generate<O: Operation>(&self, op: &O)
      -> Result<Generated, Error>
    {   op.validate()?;

        let request = new_request(O::METHOD, Some(op))?;
        let result = self.execute_request(&request).await?;

        let items: Vec<O::Item> = result.decode_data()?;
        info!(
          "{} returned {} values",
          O::METHOD, items.len()
        );

        Ok(Generated
        {   values: op.present(items)?
          , api_info: ApiInfo::new(request.id, &result)
        })
    }

    /// POST, status gate, parse, correlate
    async fn round_trip<T: DeserializeOwned>(
      &self
    , request: &RandomRequest
    ) -> Result<T, Error>
    {   let body = serde_json::to_vec(request).map_err(|e| {
          error!("Failed to encode request: {}", e);
          Error::SerializationFailed(e)
        })?;
        trace!("Request body: {}", String::from_utf8_lossy(&body));

        let data = tokio::time::timeout(self.timeout, self.post(body))
          .await
          .map_err(|_| {
            error!(
              "Request {} timed out after {:?}",
              request.id, self.timeout
            );
            Error::Timeout(self.timeout)
          })??;

        let reply = RandResponse::<T>::parse(&data)?;

        match reply.id
        {   Some(id) if id == request.id => Ok(reply.result)
          , other => {
              let response = other
                .map(|id| id.to_string())
                .unwrap_or_else(|| "<none>".to_string());
              error!(
                "Response id {} does not match request id {}",
                response, request.id
              );
              Err(Error::RequestResponseMismatch
              {   response
                , request: request.id
              })
            }
        }
    }

    /// Bytes of a 200 response, nothing else
    async fn post(&self, body: Vec<u8>) -> Result<Vec<u8>, Error>
    {   let response = self.http_client
          .post(self.api_path.clone())
          .header(reqwest::header::CONTENT_TYPE, CONTENT_TYPE)
          .body(body)
          .send()
          .await
          .map_err(|e| {
            error!("HTTP error: {}", e);
            Error::Http(e)
          })?;

        let status = response.status();
        trace!("Response status: {}", status);

        if status != StatusCode::OK
        {   error!("Unexpected status code: {}", status);
            return Err(Error::UnexpectedStatusCode(status.as_u16()));
        }

        let bytes = response.bytes().await.map_err(|e| {
          error!("Failed to read body: {}", e);
          Error::Http(e)
        })?;
        Ok(bytes.to_vec())
    }
}
