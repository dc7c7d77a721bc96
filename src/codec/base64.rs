use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::Engine;

use super::Codec;
use crate::error::{DecodexError, Result};
use crate::types::{CodecMeta, Method, Params};

const STANDARD_ALPHABET: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

// Encode with padding; decode accepts padded and unpadded input alike.
const ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

pub struct Base64;

impl Codec for Base64 {
    fn meta(&self) -> CodecMeta {
        CodecMeta {
            method: Method::Base64,
            name: "base64",
            aliases: &["b64"],
            label: "Base64",
            alphabet: STANDARD_ALPHABET,
            description: "RFC 4648 Base64 with padding",
        }
    }

    fn encode(&self, input: &[u8], _params: &Params) -> Result<String> {
        Ok(ENGINE.encode(input))
    }

    fn decode(&self, input: &str, _params: &Params) -> Result<Vec<u8>> {
        ENGINE
            .decode(input)
            .map_err(|e| DecodexError::decode("base64", e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_man() {
        assert_eq!(Base64.encode(b"Man", &Params::default()).unwrap(), "TWFu");
    }

    #[test]
    fn test_decode_man() {
        assert_eq!(Base64.decode("TWFu", &Params::default()).unwrap(), b"Man");
    }

    #[test]
    fn test_encode_pads() {
        assert_eq!(Base64.encode(b"Ma", &Params::default()).unwrap(), "TWE=");
        assert_eq!(Base64.encode(b"M", &Params::default()).unwrap(), "TQ==");
    }

    #[test]
    fn test_decode_accepts_missing_padding() {
        assert_eq!(Base64.decode("TWE", &Params::default()).unwrap(), b"Ma");
        assert_eq!(Base64.decode("TWE=", &Params::default()).unwrap(), b"Ma");
    }

    #[test]
    fn test_roundtrip() {
        let data = b"The quick brown fox jumps over the lazy dog";
        let encoded = Base64.encode(data, &Params::default()).unwrap();
        assert_eq!(Base64.decode(&encoded, &Params::default()).unwrap(), data);
    }

    #[test]
    fn test_decode_invalid() {
        assert!(Base64.decode("TW!u", &Params::default()).is_err());
        assert!(Base64.decode("TWFuA", &Params::default()).is_err());
    }

    #[test]
    fn test_empty() {
        assert_eq!(Base64.encode(&[], &Params::default()).unwrap(), "");
        assert_eq!(Base64.decode("", &Params::default()).unwrap(), Vec::<u8>::new());
    }
}
