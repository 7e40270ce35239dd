use base64::Engine;
use serde::Serialize;

use crate::error::Error;
use crate::request::PregenRand;
use super::{check_number, check_range, Operation};

/// Size limit in bits, for one blob and for the whole batch
pub const SIZE_MAX: u64 = 1_048_576;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BlobFormat
{   #[default]
    Base64
  , Hex
}

impl BlobFormat
{   fn check(self, item: &str) -> Result<(), Error>
    {   let decoded = match self
        {   BlobFormat::Hex => hex::decode(item)
              .map(|_| ())
              .map_err(|e| e.to_string())
          , BlobFormat::Base64 => base64::engine::general_purpose::STANDARD
              .decode(item)
              .map(|_| ())
              .map_err(|e| e.to_string())
        };
        decoded.map_err(|e| {
          Error::DataDecodeFailed(format!("decode random data: {}", e))
        })
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlobParams
{   pub api_key: String
  , pub n: u32
  , /// Bits per blob
    pub size: u64
  , pub format: BlobFormat
  , #[serde(rename = "pregeneratedRandomization")]
    pub pregen: PregenRand
}

impl BlobParams
{   pub fn new(
      api_key: impl Into<String>
    , size: u64
    , n: u32
    , format: BlobFormat
    , pregen: PregenRand
    ) -> Self
    {   BlobParams
        {   api_key: api_key.into()
          , n
          , size
          , format
          , pregen
        }
    }
}

impl Operation for BlobParams
{   const METHOD: &'static str = "generateBlobs";
    type Item = String;

    fn validate(&self) -> Result<(), Error>
    {   check_range("size", self.size, 1, SIZE_MAX)?;
        check_number(self.n)?;

        if self.size % 8 != 0
        {   return Err(Error::invalid_argument(
              "`size` parameter must be divisible by 8"
            ));
        }

        let total = self.size * u64::from(self.n);
        if total > SIZE_MAX
        {   return Err(Error::invalid_argument(format!(
              "total size {} must not exceed {}",
              total, SIZE_MAX
            )));
        }
        Ok(())
    }

    /// Items are printed as received once they decode cleanly
    fn present(&self, items: Vec<String>) -> Result<Vec<String>, Error>
    {   for item in &items
        {   self.format.check(item)?;
        }
        Ok(items)
    }
}
