//! Wire timestamp used by the randomness service

use std::fmt;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Exact wire pattern, e.g. `2022-08-25 12:15:44Z`
pub const WIRE_FORMAT: &str = "%Y-%m-%d %H:%M:%SZ";

/// Pattern used when showing timestamps to a user
pub const DISPLAY_FORMAT: &str = "%H:%M:%S %d-%m-%Y";

/// Byte positions of the separators in a wire timestamp
const WIRE_SEPARATORS: [(usize, u8); 6] =
  [(4, b'-'), (7, b'-'), (10, b' '), (13, b':'), (16, b':'), (19, b'Z')];
const WIRE_LEN: usize = 20;

#[derive(Debug, thiserror::Error)]
pub enum TimeError
{   #[error("expected `YYYY-MM-DD hh:mm:ssZ`, got {0:?}")]
    Shape(String)
  , #[error(transparent)]
    Parse(#[from] chrono::ParseError)
}

/// UTC timestamp bound to [`WIRE_FORMAT`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RandTime(pub DateTime<Utc>);

impl RandTime
{   /// Parse the fixed wire pattern; any other shape fails
    pub fn parse(s: &str) -> Result<Self, TimeError>
    {   let s = s.trim();
        if !has_wire_shape(s)
        {   return Err(TimeError::Shape(s.to_string()));
        }
        let naive = NaiveDateTime::parse_from_str(s, WIRE_FORMAT)?;
        Ok(RandTime(naive.and_utc()))
    }

    pub fn to_wire(&self) -> String
    {   self.0.format(WIRE_FORMAT).to_string()
    }

    pub fn datetime(&self) -> DateTime<Utc>
    {   self.0
    }
}

// chrono accepts single digit fields and a signed year
fn has_wire_shape(s: &str) -> bool
{   let bytes = s.as_bytes();
    bytes.len() == WIRE_LEN
      && bytes.iter().enumerate().all(|(i, b)| {
        match WIRE_SEPARATORS.iter().find(|(pos, _)| *pos == i)
        {   Some((_, sep)) => b == sep
          , None => b.is_ascii_digit()
        }
      })
}

impl From<DateTime<Utc>> for RandTime
{   fn from(t: DateTime<Utc>) -> Self
    {   RandTime(t)
    }
}

impl fmt::Display for RandTime
{   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {   write!(f, "{}", self.0.format(DISPLAY_FORMAT))
    }
}

impl Serialize for RandTime
{   fn serialize<S: Serializer>(&self, serializer: S)
      -> Result<S::Ok, S::Error>
    {   serializer.serialize_str(&self.to_wire())
    }
}

impl<'de> Deserialize<'de> for RandTime
{   fn deserialize<D: Deserializer<'de>>(deserializer: D)
      -> Result<Self, D::Error>
    {   let raw = String::deserialize(deserializer)?;
        RandTime::parse(&raw).map_err(|e| {
          de::Error::custom(format!("parse randTime {:?}: {}", raw, e))
        })
    }
}
