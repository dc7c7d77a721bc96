use super::util;
use super::Codec;
use crate::error::{DecodexError, Result};
use crate::types::{CodecMeta, Method, Params};

/// Normalizes the user key to uppercase letters. Non-letters are dropped; a
/// key with no letters at all cannot drive the cipher.
fn key_shifts(params: &Params) -> Result<Vec<u8>> {
    let key = params
        .key
        .as_deref()
        .ok_or_else(|| DecodexError::invalid_argument("vigenere requires a key"))?;

    let shifts: Vec<u8> = key
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase() as u8 - b'A')
        .collect();

    if shifts.is_empty() {
        return Err(DecodexError::invalid_argument("vigenere key must contain at least one letter"));
    }
    Ok(shifts)
}

/// Shifts letters by the repeating key; non-letters pass through without
/// advancing the key position.
fn apply(input: &[u8], shifts: &[u8], decrypt: bool) -> Vec<u8> {
    let mut key_pos = 0;
    input
        .iter()
        .map(|&byte| match byte {
            b'A'..=b'Z' | b'a'..=b'z' => {
                let base = if byte.is_ascii_uppercase() { b'A' } else { b'a' };
                let k = shifts[key_pos % shifts.len()];
                key_pos += 1;
                let shift = if decrypt { 26 - k } else { k };
                (byte - base + shift) % 26 + base
            }
            _ => byte,
        })
        .collect()
}

pub struct Vigenere;

impl Codec for Vigenere {
    fn meta(&self) -> CodecMeta {
        CodecMeta {
            method: Method::Vigenere,
            name: "vigenere",
            aliases: &["vigenère"],
            label: "Vigenere Cipher",
            alphabet: "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz",
            description: "Vigenère cipher with a repeating letter key",
        }
    }

    fn encode(&self, input: &[u8], params: &Params) -> Result<String> {
        let shifts = key_shifts(params)?;
        Ok(util::bytes_to_chars(&apply(input, &shifts, false)))
    }

    fn decode(&self, input: &str, params: &Params) -> Result<Vec<u8>> {
        let shifts = key_shifts(params)?;
        let bytes: Vec<u8> = input.chars().map(|c| c as u8).collect();
        Ok(apply(&bytes, &shifts, true))
    }
}
