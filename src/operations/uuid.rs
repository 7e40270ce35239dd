use serde::Serialize;

use crate::error::Error;
use crate::request::PregenRand;
use super::{check_number, Operation};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UuidParams
{   pub api_key: String
  , pub n: u32
  , #[serde(rename = "pregeneratedRandomization")]
    pub pregen: PregenRand
}

impl UuidParams
{   pub fn new(api_key: impl Into<String>, n: u32, pregen: PregenRand)
      -> Self
    {   UuidParams
        {   api_key: api_key.into()
          , n
          , pregen
        }
    }
}

impl Operation for UuidParams
{   const METHOD: &'static str = "generateUUIDs";
    type Item = ::uuid::Uuid;

    fn validate(&self) -> Result<(), Error>
    {   check_number(self.n)
    }
}
