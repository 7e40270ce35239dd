use std::fmt;
use std::str::FromStr;
use serde::Serialize;

use crate::error::Error;
use crate::request::PregenRand;
use super::{check_number, IntegerParams, Operation};

/// How a flip is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CoinFace
{   #[default]
    Eng
  , Ukr
  , Num
}

impl CoinFace
{   fn sides(self) -> [&'static str; 2]
    {   match self
        {   CoinFace::Eng => ["heads", "tails"]
          , CoinFace::Ukr => ["решка", "орел"]
          , CoinFace::Num => ["0", "1"]
        }
    }
}

impl FromStr for CoinFace
{   type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err>
    {   match s
        {   "eng" => Ok(CoinFace::Eng)
          , "ukr" => Ok(CoinFace::Ukr)
          , "num" => Ok(CoinFace::Num)
          , other => Err(Error::invalid_argument(format!(
              "`format` param is invalid: must be one of eng, ukr, num, got {:?}",
              other
            )))
        }
    }
}

impl fmt::Display for CoinFace
{   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {   let name = match self
        {   CoinFace::Eng => "eng"
          , CoinFace::Ukr => "ukr"
          , CoinFace::Num => "num"
        };
        write!(f, "{}", name)
    }
}

/// A coin flip is an integer draw from {0, 1}
#[derive(Debug, Clone, Serialize)]
pub struct CoinParams
{   #[serde(flatten)]
    pub draw: IntegerParams
  , #[serde(skip)]
    pub face: CoinFace
}

impl CoinParams
{   pub fn new(
      api_key: impl Into<String>
    , n: u32
    , face: CoinFace
    , pregen: PregenRand
    ) -> Self
    {   CoinParams
        {   draw: IntegerParams::new(api_key, 0, 1, n, false, pregen)
          , face
        }
    }
}

impl Operation for CoinParams
{   const METHOD: &'static str = IntegerParams::METHOD;
    type Item = i64;

    fn validate(&self) -> Result<(), Error>
    {   check_number(self.draw.n)
    }

    fn present(&self, items: Vec<i64>) -> Result<Vec<String>, Error>
    {   let sides = self.face.sides();
        items.into_iter()
          .map(|v| match v
          {   0 => Ok(sides[0].to_string())
            , 1 => Ok(sides[1].to_string())
            , _ => Err(Error::DataDecodeFailed(
                format!("invalid coin value {}", v)
              ))
          })
          .collect()
    }
}
