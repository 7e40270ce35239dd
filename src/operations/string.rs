use serde::Serialize;

use crate::error::Error;
use crate::request::PregenRand;
use super::{check_number, check_range, Operation};

pub const MAX_STRING_LEN: u32 = 32;
pub const MAX_CHARSET_LEN: usize = 128;
pub const DEFAULT_CHARSET: &str
  = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StringParams
{   pub api_key: String
  , pub n: u32
  , pub length: u32
  , pub characters: String
  , pub replacement: bool
  , #[serde(rename = "pregeneratedRandomization")]
    pub pregen: PregenRand
}

impl StringParams
{   /// Repeated characters in `charset` are dropped, first one wins
    pub fn new(
      api_key: impl Into<String>
    , length: u32
    , charset: &str
    , n: u32
    , unique: bool
    , pregen: PregenRand
    ) -> Self
    {   StringParams
        {   api_key: api_key.into()
          , n
          , length
          , characters: dedup_charset(charset)
          , replacement: !unique
          , pregen
        }
    }
}

pub fn dedup_charset(charset: &str) -> String
{   let mut out = String::with_capacity(charset.len());
    for c in charset.chars()
    {   if !out.contains(c)
        {   out.push(c);
        }
    }
    out
}

impl Operation for StringParams
{   const METHOD: &'static str = "generateStrings";
    type Item = String;

    fn validate(&self) -> Result<(), Error>
    {   check_range("length", self.length, 1, MAX_STRING_LEN)?;

        let charset_len = self.characters.chars().count();
        check_range("charset length", charset_len, 1, MAX_CHARSET_LEN)?;
        check_number(self.n)?;

        if !self.replacement
        {   let possible = (charset_len as f64).powi(self.length as i32);
            if possible < f64::from(self.n)
            {   return Err(Error::invalid_argument(format!(
                  "`number` of unique requested values is greater than possible with max possible {}",
                  possible
                )));
            }
        }
        Ok(())
    }
}
