use super::Codec;
use crate::error::Result;
use crate::types::{CodecMeta, Method, Params};

pub struct UnicodeEscape;

impl Codec for UnicodeEscape {
    fn meta(&self) -> CodecMeta {
        CodecMeta {
            method: Method::Unicode,
            name: "unicode",
            aliases: &["unicode-escape"],
            label: "Unicode Escape",
            alphabet: "",
            description: "\\uXXXX escape sequences, one per byte",
        }
    }

    fn encode(&self, input: &[u8], _params: &Params) -> Result<String> {
        Ok(input.iter().map(|b| format!("\\u{:04x}", b)).collect())
    }

    fn decode(&self, input: &str, _params: &Params) -> Result<Vec<u8>> {
        let mut result = Vec::new();
        let chars: Vec<char> = input.chars().collect();
        let mut i = 0;

        while i < chars.len() {
            if chars[i] == '\\'
                && i + 6 <= chars.len()
                && chars[i + 1] == 'u'
                && chars[i + 2..i + 6].iter().all(|c| c.is_ascii_hexdigit())
            {
                let hex: String = chars[i + 2..i + 6].iter().collect();
                // Validated as hex above, so this cannot fail.
                let code = u32::from_str_radix(&hex, 16).unwrap_or(0);
                if code <= 0xFF {
                    result.push(code as u8);
                    i += 6;
                    continue;
                }
                if let Some(c) = char::from_u32(code) {
                    let mut buf = [0u8; 4];
                    result.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
                    i += 6;
                    continue;
                }
            }
            let mut buf = [0u8; 4];
            result.extend_from_slice(chars[i].encode_utf8(&mut buf).as_bytes());
            i += 1;
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode() {
        assert_eq!(UnicodeEscape.encode(b"Hi", &Params::default()).unwrap(), "\\u0048\\u0069");
        assert_eq!(UnicodeEscape.encode(&[0xff], &Params::default()).unwrap(), "\\u00ff");
    }

    #[test]
    fn test_decode() {
        assert_eq!(UnicodeEscape.decode("\\u0048\\u0069", &Params::default()).unwrap(), b"Hi");
    }

    #[test]
    fn test_decode_uppercase_hex() {
        assert_eq!(UnicodeEscape.decode("\\u004A", &Params::default()).unwrap(), b"J");
    }

    #[test]
    fn test_decode_high_codepoint_as_utf8() {
        assert_eq!(UnicodeEscape.decode("\\u4e2d", &Params::default()).unwrap(), "中".as_bytes());
    }

    #[test]
    fn test_decode_leaves_malformed_escapes() {
        assert_eq!(UnicodeEscape.decode("\\u00", &Params::default()).unwrap(), b"\\u00");
        assert_eq!(UnicodeEscape.decode("\\u00zz", &Params::default()).unwrap(), b"\\u00zz");
        assert_eq!(UnicodeEscape.decode("\\x41", &Params::default()).unwrap(), b"\\x41");
    }

    #[test]
    fn test_decode_passes_plain_text() {
        assert_eq!(UnicodeEscape.decode("hello", &Params::default()).unwrap(), b"hello");
    }

    #[test]
    fn test_decode_mixed() {
        assert_eq!(UnicodeEscape.decode("a\\u0062c", &Params::default()).unwrap(), b"abc");
    }

    #[test]
    fn test_roundtrip() {
        let data = b"The quick brown fox";
        let encoded = UnicodeEscape.encode(data, &Params::default()).unwrap();
        assert_eq!(UnicodeEscape.decode(&encoded, &Params::default()).unwrap(), data);
    }

    #[test]
    fn test_empty() {
        assert_eq!(UnicodeEscape.encode(&[], &Params::default()).unwrap(), "");
        assert_eq!(UnicodeEscape.decode("", &Params::default()).unwrap(), Vec::<u8>::new());
    }
}
