//! Operation descriptors, one per generate* method

pub mod blob;
pub mod coin;
pub mod decimal;
pub mod gaussian;
pub mod integer;
pub mod string;
pub mod uuid;

use std::fmt::Display;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Error;

pub use blob::{BlobFormat, BlobParams};
pub use coin::{CoinFace, CoinParams};
pub use decimal::DecimalParams;
pub use gaussian::GaussianParams;
pub use integer::IntegerParams;
pub use string::StringParams;
pub use self::uuid::UuidParams;

/// Upper bound on `n` shared by every generate* method
pub const NUMBER_MAX: u32 = 10_000;

/// A method name plus its serializable params
pub trait Operation: Serialize
{   /// JSON-RPC method name
    const METHOD: &'static str;

    /// Element type of `random.data`
    type Item: DeserializeOwned + Display;

    /// Range checks, run before the request is built
    fn validate(&self) -> Result<(), Error>;

    /// Turn decoded items into printable values
    fn present(&self, items: Vec<Self::Item>)
      -> Result<Vec<String>, Error>
    {   Ok(items.iter().map(|v| v.to_string()).collect())
    }
}

pub(crate) fn check_number(n: u32) -> Result<(), Error>
{   check_range("number", n, 1, NUMBER_MAX)
}

pub(crate) fn check_range<T>(name: &str, value: T, min: T, max: T)
  -> Result<(), Error>
where
  T: PartialOrd + Display
{   // written this way so NaN is rejected
    if !(value >= min && value <= max)
    {   return Err(Error::invalid_argument(format!(
          "`{}` param is invalid: must be in [{}, {}], got {}",
          name, min, max, value
        )));
    }
    Ok(())
}
