use super::Codec;
use crate::error::{DecodexError, Result};
use crate::types::{CodecMeta, Method, Params};

// Hex, binary and octal share the same shape: one space-separated token per
// byte, fixed width on encode, any width accepted on decode.

fn encode_tokens(input: &[u8], radix: u32) -> String {
    input
        .iter()
        .map(|b| match radix {
            16 => format!("{:02x}", b),
            8 => format!("{:03o}", b),
            _ => format!("{:08b}", b),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn decode_tokens(input: &str, radix: u32, method: &'static str) -> Result<Vec<u8>> {
    input
        .split_whitespace()
        .map(|token| {
            u8::from_str_radix(token, radix)
                .map_err(|_| DecodexError::decode(method, format!("invalid {} token '{}'", method, token)))
        })
        .collect()
}

pub struct Hex;

impl Codec for Hex {
    fn meta(&self) -> CodecMeta {
        CodecMeta {
            method: Method::Hex,
            name: "hex",
            aliases: &["base16"],
            label: "Hex",
            alphabet: "0123456789abcdef",
            description: "Hexadecimal, space-separated bytes",
        }
    }

    fn encode(&self, input: &[u8], _params: &Params) -> Result<String> {
        Ok(encode_tokens(input, 16))
    }

    fn decode(&self, input: &str, _params: &Params) -> Result<Vec<u8>> {
        decode_tokens(input, 16, "hex")
    }
}

pub struct Binary;

impl Codec for Binary {
    fn meta(&self) -> CodecMeta {
        CodecMeta {
            method: Method::Binary,
            name: "binary",
            aliases: &["bin", "base2"],
            label: "Binary",
            alphabet: "01",
            description: "Binary, space-separated bytes",
        }
    }

    fn encode(&self, input: &[u8], _params: &Params) -> Result<String> {
        Ok(encode_tokens(input, 2))
    }

    fn decode(&self, input: &str, _params: &Params) -> Result<Vec<u8>> {
        decode_tokens(input, 2, "binary")
    }
}

pub struct Octal;

impl Codec for Octal {
    fn meta(&self) -> CodecMeta {
        CodecMeta {
            method: Method::Octal,
            name: "octal",
            aliases: &["oct", "base8"],
            label: "Octal",
            alphabet: "01234567",
            description: "Octal, space-separated bytes",
        }
    }

    fn encode(&self, input: &[u8], _params: &Params) -> Result<String> {
        Ok(encode_tokens(input, 8))
    }

    fn decode(&self, input: &str, _params: &Params) -> Result<Vec<u8>> {
        decode_tokens(input, 8, "octal")
    }
}
