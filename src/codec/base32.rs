use data_encoding::{Encoding, Specification};
use std::sync::OnceLock;

use super::util;
use super::Codec;
use crate::error::{DecodexError, Result};
use crate::types::{CodecMeta, Method, Params};

const RFC4648_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

static ENCODING: OnceLock<Encoding> = OnceLock::new();

fn encoding() -> &'static Encoding {
    ENCODING.get_or_init(|| {
        let mut spec = Specification::new();
        spec.symbols.push_str(RFC4648_ALPHABET);
        spec.padding = Some('=');
        spec.encoding().unwrap()
    })
}

/// Restores the canonical `=` padding for an unpadded symbol run. Lengths
/// that can never occur in valid Base32 (1, 3, 6 mod 8) are left alone and
/// rejected by the decoder.
fn pad_to_base32(input: &str) -> String {
    let padding = match input.len() % 8 {
        0 => 0,
        2 => 6,
        4 => 4,
        5 => 3,
        7 => 1,
        _ => 0,
    };
    format!("{}{}", input, "=".repeat(padding))
}

pub struct Base32;

impl Codec for Base32 {
    fn meta(&self) -> CodecMeta {
        CodecMeta {
            method: Method::Base32,
            name: "base32",
            aliases: &["b32"],
            label: "Base32",
            alphabet: RFC4648_ALPHABET,
            description: "RFC 4648 Base32 with padding",
        }
    }

    fn encode(&self, input: &[u8], _params: &Params) -> Result<String> {
        Ok(encoding().encode(input))
    }

    fn decode(&self, input: &str, _params: &Params) -> Result<Vec<u8>> {
        let normalized = input.to_uppercase();
        util::validate_alphabet_with_padding(&normalized, RFC4648_ALPHABET)?;

        let padded = pad_to_base32(normalized.trim_end_matches('='));
        encoding()
            .decode(padded.as_bytes())
            .map_err(|e| DecodexError::decode("base32", e.to_string()))
    }
}
