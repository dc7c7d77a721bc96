use super::Codec;
use crate::error::{DecodexError, Result};
use crate::types::{CodecMeta, Method, Params};

// 85 consecutive printable codes starting at '!' (ASCII 33); 'z' is the
// shorthand for a four-zero-byte group.
const ALPHABET: &str = "!\"#$%&'()*+,-./0123456789:;<=>?@ABCDEFGHIJKLMNOPQRSTUVWXYZ[\\]^_`abcdefghijklmnopqrstu";

fn encode_ascii85(input: &[u8]) -> String {
    let mut result = String::from("<~");

    for chunk in input.chunks(4) {
        let mut val: u32 = 0;
        for (i, &byte) in chunk.iter().enumerate() {
            val |= (byte as u32) << (24 - i * 8);
        }

        if chunk.len() == 4 && val == 0 {
            result.push('z');
        } else {
            let mut digits = [0u8; 5];
            let mut v = val;
            for digit in digits.iter_mut().rev() {
                *digit = (v % 85) as u8;
                v /= 85;
            }
            // A short final chunk emits one more digit than it has bytes.
            for &digit in digits.iter().take(chunk.len() + 1) {
                result.push((digit + 33) as char);
            }
        }
    }

    result.push_str("~>");
    result
}

fn decode_group(digits: &[u8], method: &'static str) -> Result<[u8; 4]> {
    // Pad with the highest symbol ('u'); widened arithmetic so an overlong
    // group is caught instead of wrapping.
    let mut val: u64 = 0;
    for i in 0..5 {
        let d = digits.get(i).copied().unwrap_or(84);
        val = val * 85 + d as u64;
    }
    if val > u32::MAX as u64 {
        return Err(DecodexError::decode(method, "group value overflows 32 bits"));
    }
    let val = val as u32;
    Ok([(val >> 24) as u8, (val >> 16) as u8, (val >> 8) as u8, val as u8])
}

fn decode_ascii85(input: &str) -> Result<Vec<u8>> {
    let stripped = if input.starts_with("<~") && input.ends_with("~>") && input.len() >= 4 {
        &input[2..input.len() - 2]
    } else {
        input
    };

    let mut result = Vec::new();
    let mut group: Vec<u8> = Vec::with_capacity(5);

    for (pos, c) in stripped.chars().enumerate() {
        if c == 'z' {
            if !group.is_empty() {
                return Err(DecodexError::decode("base85", "'z' inside a group"));
            }
            result.extend_from_slice(&[0, 0, 0, 0]);
            continue;
        }

        if !('!'..='u').contains(&c) {
            return Err(DecodexError::invalid_char(c, pos));
        }

        group.push(c as u8 - 33);
        if group.len() == 5 {
            result.extend_from_slice(&decode_group(&group, "base85")?);
            group.clear();
        }
    }

    if !group.is_empty() {
        if group.len() == 1 {
            return Err(DecodexError::decode("base85", "truncated final group"));
        }
        let bytes = decode_group(&group, "base85")?;
        result.extend_from_slice(&bytes[..group.len() - 1]);
    }

    Ok(result)
}

pub struct Ascii85;

impl Codec for Ascii85 {
    fn meta(&self) -> CodecMeta {
        CodecMeta {
            method: Method::Base85,
            name: "base85",
            aliases: &["b85", "ascii85"],
            label: "Base85",
            alphabet: ALPHABET,
            description: "Ascii85/Base85 with <~ ~> delimiters",
        }
    }

    fn encode(&self, input: &[u8], _params: &Params) -> Result<String> {
        Ok(encode_ascii85(input))
    }

    fn decode(&self, input: &str, _params: &Params) -> Result<Vec<u8>> {
        decode_ascii85(input)
    }
}
