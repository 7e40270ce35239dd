use serde_json::json;
use randapi::operations::{
  BlobFormat, BlobParams, CoinFace, CoinParams, DecimalParams,
  GaussianParams, IntegerParams, Operation, StringParams, UuidParams,
};
use randapi::operations::string::dedup_charset;
use randapi::{Error, ErrorKind, PregenRand};

const KEY: &str = "c6418ada-7874-4907-9367-f43c446686d3";

fn none() -> PregenRand
{   PregenRand::default()
}

fn assert_invalid<O: Operation>(op: &O, name: &str)
{   let err = op.validate().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput, "{}", name);
}

#[test]
fn test_integer_validation()
{   assert!(IntegerParams::new(KEY, -17, 50, 3, false, none()).validate().is_ok());
    assert!(IntegerParams::new(KEY, 1, 3, 3, true, none()).validate().is_ok());

    assert_invalid(&IntegerParams::new(KEY, -1_000_000_001, 5, 1, false, none()), "from");
    assert_invalid(&IntegerParams::new(KEY, 0, 1_000_000_001, 1, false, none()), "to");
    assert_invalid(&IntegerParams::new(KEY, 0, 10, 0, false, none()), "zero n");
    assert_invalid(&IntegerParams::new(KEY, 0, 10, 10_001, false, none()), "big n");
    assert_invalid(&IntegerParams::new(KEY, 10, 0, 1, false, none()), "from > to");
    assert_invalid(&IntegerParams::new(KEY, 1, 3, 4, true, none()), "unique");
}

#[test]
fn test_coin_params_and_faces()
{   let op = CoinParams::new(KEY, 2, CoinFace::Ukr, PregenRand::by_id("x"));
    assert_eq!(serde_json::to_value(&op).unwrap(), json!({
      "apiKey": KEY,
      "n": 2,
      "min": 0,
      "max": 1,
      "replacement": true,
      "base": 10,
      "pregeneratedRandomization": "x"
    }));
    assert_eq!(op.present(vec![0, 1]).unwrap(), vec!["решка", "орел"]);

    let num = CoinParams::new(KEY, 2, CoinFace::Num, none());
    assert_eq!(num.present(vec![1, 0]).unwrap(), vec!["1", "0"]);

    let err = num.present(vec![2]).unwrap_err();
    assert!(matches!(err, Error::DataDecodeFailed(_)));

    assert_eq!("eng".parse::<CoinFace>().unwrap(), CoinFace::Eng);
    assert!("fr".parse::<CoinFace>().is_err());
    assert_invalid(&CoinParams::new(KEY, 0, CoinFace::Eng, none()), "coin n");
}

#[test]
fn test_decimal_validation_and_presentation()
{   let op = DecimalParams::new(KEY, 10.0, 2, 3, false, none());
    assert!(op.validate().is_ok());
    assert_eq!(serde_json::to_value(&op).unwrap(), json!({
      "apiKey": KEY,
      "n": 3,
      "decimalPlaces": 2,
      "replacement": true,
      "pregeneratedRandomization": null
    }));
    assert_eq!(
      op.present(vec![0.12, 0.5, 0.07]).unwrap()
    , vec!["1.2", "5", "0.7"]
    );

    assert_invalid(&DecimalParams::new(KEY, 0.0, 2, 1, false, none()), "base");
    assert_invalid(&DecimalParams::new(KEY, 1.0, 0, 1, false, none()), "places");
    assert_invalid(&DecimalParams::new(KEY, 1.0, 15, 1, false, none()), "places");
    assert_invalid(&DecimalParams::new(KEY, 1.0, 1, 11, true, none()), "unique");
}

#[test]
fn test_gaussian_validation()
{   let op = GaussianParams::new(KEY, 0.0, 1.0, 8, 5, none());
    assert!(op.validate().is_ok());
    let value = serde_json::to_value(&op).unwrap();
    assert_eq!(value["standardDeviation"], json!(1.0));
    assert_eq!(value["significantDigits"], json!(8));

    assert_invalid(&GaussianParams::new(KEY, 1e7, 1.0, 8, 1, none()), "mean");
    assert_invalid(&GaussianParams::new(KEY, 0.0, f64::NAN, 8, 1, none()), "deviation");
    assert_invalid(&GaussianParams::new(KEY, 0.0, 1.0, 1, 1, none()), "signdig");
    assert_invalid(&GaussianParams::new(KEY, 0.0, 1.0, 15, 1, none()), "signdig");
}

#[test]
fn test_string_validation()
{   assert_eq!(dedup_charset("abcabcd"), "abcd");

    let op = StringParams::new(KEY, 4, "aabb<&>", 2, true, none());
    assert_eq!(op.characters, "ab<&>");
    assert!(op.validate().is_ok());
    assert_eq!(serde_json::to_value(&op).unwrap()["replacement"], json!(false));

    assert_invalid(&StringParams::new(KEY, 0, "ab", 1, false, none()), "length");
    assert_invalid(&StringParams::new(KEY, 33, "ab", 1, false, none()), "length");
    assert_invalid(&StringParams::new(KEY, 2, "", 1, false, none()), "charset");
    assert_invalid(&StringParams::new(KEY, 2, "ab", 5, true, none()), "unique");

    let long: String = (0u32..200).filter_map(char::from_u32).collect();
    assert_invalid(&StringParams::new(KEY, 2, &long, 1, false, none()), "long charset");
}

#[test]
fn test_uuid_validation()
{   let op = UuidParams::new(KEY, 2, none());
    assert!(op.validate().is_ok());
    assert_eq!(UuidParams::METHOD, "generateUUIDs");
    assert_invalid(&UuidParams::new(KEY, 0, none()), "n");
}

#[test]
fn test_blob_validation_and_decoding()
{   let op = BlobParams::new(KEY, 16, 2, BlobFormat::Hex, none());
    assert!(op.validate().is_ok());
    assert_eq!(serde_json::to_value(&op).unwrap()["format"], json!("hex"));
    assert_eq!(
      op.present(vec!["ab01".into(), "ffee".into()]).unwrap()
    , vec!["ab01", "ffee"]
    );
    assert!(op.present(vec!["zz".into()]).is_err());

    let b64 = BlobParams::new(KEY, 8, 1, BlobFormat::Base64, none());
    assert_eq!(serde_json::to_value(&b64).unwrap()["format"], json!("base64"));
    assert!(b64.present(vec!["qw==".into()]).is_ok());
    assert!(b64.present(vec!["***".into()]).is_err());

    assert_invalid(&BlobParams::new(KEY, 0, 1, BlobFormat::Hex, none()), "size");
    assert_invalid(&BlobParams::new(KEY, 12, 1, BlobFormat::Hex, none()), "size % 8");
    assert_invalid(&BlobParams::new(KEY, 1_048_576, 2, BlobFormat::Hex, none()), "total");
}
