use super::util;
use super::Codec;
use crate::error::Result;
use crate::types::{CodecMeta, Method, Params};

/// Reduces an arbitrary shift to 0..26; negative shifts rotate backwards.
fn normalize_shift(shift: i64) -> u8 {
    shift.rem_euclid(26) as u8
}

fn rotate_byte(byte: u8, shift: u8) -> u8 {
    match byte {
        b'A'..=b'Z' => (byte - b'A' + shift) % 26 + b'A',
        b'a'..=b'z' => (byte - b'a' + shift) % 26 + b'a',
        _ => byte,
    }
}

fn rotate(input: &[u8], shift: u8) -> Vec<u8> {
    input.iter().map(|&b| rotate_byte(b, shift)).collect()
}

pub struct Rot13;

impl Codec for Rot13 {
    fn meta(&self) -> CodecMeta {
        CodecMeta {
            method: Method::Rot13,
            name: "rot13",
            aliases: &["rot-13"],
            label: "ROT13",
            alphabet: "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz",
            description: "ROT13 letter rotation (self-inverse)",
        }
    }

    fn encode(&self, input: &[u8], _params: &Params) -> Result<String> {
        Ok(util::bytes_to_chars(&rotate(input, 13)))
    }

    fn decode(&self, input: &str, _params: &Params) -> Result<Vec<u8>> {
        let bytes: Vec<u8> = input.chars().map(|c| c as u8).collect();
        Ok(rotate(&bytes, 13))
    }
}

pub struct RotN;

impl RotN {
    fn shift(params: &Params) -> u8 {
        normalize_shift(params.shift.unwrap_or(13))
    }
}

impl Codec for RotN {
    fn meta(&self) -> CodecMeta {
        CodecMeta {
            method: Method::RotN,
            name: "rot-n",
            aliases: &["rotn", "rot"],
            label: "ROT-N",
            alphabet: "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz",
            description: "Letter rotation by a chosen shift (default 13)",
        }
    }

    fn encode(&self, input: &[u8], params: &Params) -> Result<String> {
        Ok(util::bytes_to_chars(&rotate(input, Self::shift(params))))
    }

    fn decode(&self, input: &str, params: &Params) -> Result<Vec<u8>> {
        let bytes: Vec<u8> = input.chars().map(|c| c as u8).collect();
        let inverse = (26 - Self::shift(params)) % 26;
        Ok(rotate(&bytes, inverse))
    }
}

pub struct Caesar;

impl Caesar {
    fn shift(params: &Params) -> u8 {
        normalize_shift(params.shift.unwrap_or(3))
    }
}

impl Codec for Caesar {
    fn meta(&self) -> CodecMeta {
        CodecMeta {
            method: Method::Caesar,
            name: "caesar",
            aliases: &["caesar-cipher"],
            label: "Caesar Cipher",
            alphabet: "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz",
            description: "Caesar cipher with a chosen shift (default 3)",
        }
    }

    fn encode(&self, input: &[u8], params: &Params) -> Result<String> {
        Ok(util::bytes_to_chars(&rotate(input, Self::shift(params))))
    }

    fn decode(&self, input: &str, params: &Params) -> Result<Vec<u8>> {
        let bytes: Vec<u8> = input.chars().map(|c| c as u8).collect();
        let inverse = (26 - Self::shift(params)) % 26;
        Ok(rotate(&bytes, inverse))
    }
}
