use serde::Serialize;

use crate::error::Error;
use crate::request::PregenRand;
use super::{check_number, check_range, Operation};

pub const RANGE_MAX_MIN: f64 = 1_000_000.0;
pub const MIN_SIGNIFICANT_DIGITS: u32 = 2;
pub const MAX_SIGNIFICANT_DIGITS: u32 = 14;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GaussianParams
{   pub api_key: String
  , pub n: u32
  , pub mean: f64
  , pub standard_deviation: f64
  , pub significant_digits: u32
  , #[serde(rename = "pregeneratedRandomization")]
    pub pregen: PregenRand
}

impl GaussianParams
{   pub fn new(
      api_key: impl Into<String>
    , mean: f64
    , deviation: f64
    , significant_digits: u32
    , n: u32
    , pregen: PregenRand
    ) -> Self
    {   GaussianParams
        {   api_key: api_key.into()
          , n
          , mean
          , standard_deviation: deviation
          , significant_digits
          , pregen
        }
    }
}

impl Operation for GaussianParams
{   const METHOD: &'static str = "generateGaussians";
    type Item = f64;

    fn validate(&self) -> Result<(), Error>
    {   check_range("mean", self.mean, -RANGE_MAX_MIN, RANGE_MAX_MIN)?;
        check_range(
          "deviation"
        , self.standard_deviation
        , -RANGE_MAX_MIN
        , RANGE_MAX_MIN
        )?;
        check_range(
          "signdig"
        , self.significant_digits
        , MIN_SIGNIFICANT_DIGITS
        , MAX_SIGNIFICANT_DIGITS
        )?;
        check_number(self.n)
    }
}
