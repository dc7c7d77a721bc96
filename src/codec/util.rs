use crate::error::{DecodexError, Result};

pub fn validate_alphabet_with_padding(input: &str, alphabet: &str) -> Result<()> {
    for (pos, ch) in input.chars().enumerate() {
        if !alphabet.contains(ch) && ch != '=' {
            return Err(DecodexError::invalid_char(ch, pos));
        }
    }
    Ok(())
}

/// Renders bytes as one char per byte (code points 0-255), the byte-valued
/// text model shared by the letter ciphers.
pub fn bytes_to_chars(input: &[u8]) -> String {
    input.iter().map(|&b| b as char).collect()
}
