use super::Codec;
use crate::error::{DecodexError, Result};
use crate::types::{CodecMeta, Method, Params};

// Bitcoin alphabet: 0, O, I and l are excluded as visually ambiguous.
const ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

pub struct Base58;

impl Codec for Base58 {
    fn meta(&self) -> CodecMeta {
        CodecMeta {
            method: Method::Base58,
            name: "base58",
            aliases: &["b58"],
            label: "Base58",
            alphabet: ALPHABET,
            description: "Base58 (Bitcoin alphabet)",
        }
    }

    fn encode(&self, input: &[u8], _params: &Params) -> Result<String> {
        Ok(bs58::encode(input)
            .with_alphabet(bs58::Alphabet::BITCOIN)
            .into_string())
    }

    fn decode(&self, input: &str, _params: &Params) -> Result<Vec<u8>> {
        bs58::decode(input)
            .with_alphabet(bs58::Alphabet::BITCOIN)
            .into_vec()
            .map_err(|e| match e {
                bs58::decode::Error::InvalidCharacter { character, index } => {
                    DecodexError::invalid_char(character, index)
                }
                _ => DecodexError::decode("base58", e.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode() {
        assert_eq!(Base58.encode(b"Hello World", &Params::default()).unwrap(), "JxF12TrwUP45BMd");
    }

    #[test]
    fn test_decode() {
        assert_eq!(Base58.decode("JxF12TrwUP45BMd", &Params::default()).unwrap(), b"Hello World");
    }

    #[test]
    fn test_leading_zero_bytes_become_ones() {
        let data = b"\x00\x00Hello";
        let encoded = Base58.encode(data, &Params::default()).unwrap();
        assert!(encoded.starts_with("11"));
        assert_eq!(Base58.decode(&encoded, &Params::default()).unwrap(), data);
    }

    #[test]
    fn test_roundtrip() {
        let data = b"The quick brown fox jumps over the lazy dog";
        let encoded = Base58.encode(data, &Params::default()).unwrap();
        assert_eq!(Base58.decode(&encoded, &Params::default()).unwrap(), data);
    }

    #[test]
    fn test_decode_rejects_ambiguous_glyphs() {
        for bad in ["0", "O", "I", "l"] {
            assert!(Base58.decode(bad, &Params::default()).is_err(), "'{}' accepted", bad);
        }
    }

    #[test]
    fn test_decode_invalid_char_position() {
        match Base58.decode("JxF0", &Params::default()) {
            Err(DecodexError::InvalidCharacter { char: ch, position }) => {
                assert_eq!(ch, '0');
                assert_eq!(position, 3);
            }
            other => panic!("expected InvalidCharacter, got {:?}", other),
        }
    }

    #[test]
    fn test_empty() {
        assert_eq!(Base58.encode(&[], &Params::default()).unwrap(), "");
        assert_eq!(Base58.decode("", &Params::default()).unwrap(), Vec::<u8>::new());
    }
}
