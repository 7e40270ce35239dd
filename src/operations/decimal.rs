use serde::Serialize;

use crate::error::Error;
use crate::request::PregenRand;
use super::{check_number, check_range, Operation};

pub const DECIMAL_PLACES_MAX: u32 = 14;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecimalParams
{   pub api_key: String
  , pub n: u32
  , pub decimal_places: u32
  , pub replacement: bool
  , #[serde(rename = "pregeneratedRandomization")]
    pub pregen: PregenRand
  , /// Multiplier applied to every value client-side
    #[serde(skip)]
    pub base: f64
}

impl DecimalParams
{   pub fn new(
      api_key: impl Into<String>
    , base: f64
    , places: u32
    , n: u32
    , unique: bool
    , pregen: PregenRand
    ) -> Self
    {   DecimalParams
        {   api_key: api_key.into()
          , n
          , decimal_places: places
          , replacement: !unique
          , pregen
          , base
        }
    }
}

impl Operation for DecimalParams
{   const METHOD: &'static str = "generateDecimalFractions";
    type Item = f64;

    fn validate(&self) -> Result<(), Error>
    {   if self.base == 0.0 || !self.base.is_finite()
        {   return Err(Error::invalid_argument(
              "`base` param is invalid: must be a non-zero number"
            ));
        }
        check_range("places", self.decimal_places, 1, DECIMAL_PLACES_MAX)?;
        check_number(self.n)?;

        let possible = 10u64.pow(self.decimal_places);
        if !self.replacement && u64::from(self.n) > possible
        {   return Err(Error::invalid_argument(format!(
              "`number` of unique requested values is greater than possible with decimal places = {}",
              self.decimal_places
            )));
        }
        Ok(())
    }

    fn present(&self, items: Vec<f64>) -> Result<Vec<String>, Error>
    {   // round away float noise from the multiplication
        let scale = 10f64.powi(DECIMAL_PLACES_MAX as i32);
        Ok(items.into_iter()
          .map(|v| {
            let product = v * self.base;
            let rounded = (product * scale).round() / scale;
            if rounded.is_finite() { rounded } else { product }
          })
          .map(|v| v.to_string())
          .collect())
    }
}
