use serde::Serialize;

use crate::error::Error;
use crate::request::PregenRand;
use super::{check_number, check_range, Operation};

/// Bound on both ends of the integer range
pub const RANGE_MAX_MIN: i64 = 1_000_000_000;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegerParams
{   pub api_key: String
  , pub n: u32
  , pub min: i64
  , pub max: i64
  , pub replacement: bool
  , pub base: u8
  , #[serde(rename = "pregeneratedRandomization")]
    pub pregen: PregenRand
}

impl IntegerParams
{   /// `unique` asks for values without replacement
    pub fn new(
      api_key: impl Into<String>
    , min: i64
    , max: i64
    , n: u32
    , unique: bool
    , pregen: PregenRand
    ) -> Self
    {   IntegerParams
        {   api_key: api_key.into()
          , n
          , min
          , max
          , replacement: !unique
          , base: 10
          , pregen
        }
    }
}

impl Operation for IntegerParams
{   const METHOD: &'static str = "generateIntegers";
    type Item = i64;

    fn validate(&self) -> Result<(), Error>
    {   check_range("from", self.min, -RANGE_MAX_MIN, RANGE_MAX_MIN)?;
        check_range("to", self.max, -RANGE_MAX_MIN, RANGE_MAX_MIN)?;
        check_number(self.n)?;

        if self.min > self.max
        {   return Err(Error::invalid_argument(format!(
              "`from` ({}) must not be greater than `to` ({})",
              self.min, self.max
            )));
        }

        let possible = self.max - self.min + 1;
        if !self.replacement && i64::from(self.n) > possible
        {   return Err(Error::invalid_argument(format!(
              "`number` of unique requested values is greater than possible with max possible {}",
              possible
            )));
        }
        Ok(())
    }
}
