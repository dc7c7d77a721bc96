use super::Codec;
use crate::error::{DecodexError, Result};
use crate::types::{CodecMeta, Method, Params};

// The unreserved set of URL component encoding: alphanumerics plus the
// marks that stay literal.
fn is_unreserved(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~' | '!' | '*' | '\'' | '(' | ')')
}

pub struct UrlEncoding;

impl Codec for UrlEncoding {
    fn meta(&self) -> CodecMeta {
        CodecMeta {
            method: Method::Url,
            name: "url",
            aliases: &["urlencoding", "percent"],
            label: "URL Encoding",
            alphabet: "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_.~!*'()%",
            description: "URL component percent-encoding",
        }
    }

    fn encode(&self, input: &[u8], _params: &Params) -> Result<String> {
        let mut result = String::new();
        for &byte in input {
            let c = byte as char;
            if byte.is_ascii() && is_unreserved(c) {
                result.push(c);
            } else {
                result.push_str(&format!("%{:02X}", byte));
            }
        }
        Ok(result)
    }

    fn decode(&self, input: &str, _params: &Params) -> Result<Vec<u8>> {
        let mut result = Vec::new();
        let mut chars = input.chars();

        while let Some(c) = chars.next() {
            if c == '%' {
                let hex1 = chars
                    .next()
                    .ok_or_else(|| DecodexError::decode("url", "incomplete percent sequence"))?;
                let hex2 = chars
                    .next()
                    .ok_or_else(|| DecodexError::decode("url", "incomplete percent sequence"))?;

                let hex_str = format!("{}{}", hex1, hex2);
                let byte = u8::from_str_radix(&hex_str, 16).map_err(|_| {
                    DecodexError::decode("url", format!("invalid percent sequence %{}", hex_str))
                })?;
                result.push(byte);
            } else {
                let mut buf = [0u8; 4];
                result.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
            }
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode() {
        assert_eq!(UrlEncoding.encode(b"Hello World", &Params::default()).unwrap(), "Hello%20World");
        assert_eq!(UrlEncoding.encode(b"a+b=c", &Params::default()).unwrap(), "a%2Bb%3Dc");
        assert_eq!(UrlEncoding.encode(b"100%", &Params::default()).unwrap(), "100%25");
    }

    #[test]
    fn test_unreserved_stay_literal() {
        let unreserved = b"AZaz09-_.~!*'()";
        let encoded = UrlEncoding.encode(unreserved, &Params::default()).unwrap();
        assert_eq!(encoded.as_bytes(), unreserved);
    }

    #[test]
    fn test_decode() {
        assert_eq!(UrlEncoding.decode("Hello%20World", &Params::default()).unwrap(), b"Hello World");
        assert_eq!(UrlEncoding.decode("test%40example.com", &Params::default()).unwrap(), b"test@example.com");
    }

    #[test]
    fn test_decode_lowercase_hex() {
        assert_eq!(UrlEncoding.decode("%2f", &Params::default()).unwrap(), b"/");
    }

    #[test]
    fn test_roundtrip() {
        let data = b"Hello, World! @#$%^&*()";
        let encoded = UrlEncoding.encode(data, &Params::default()).unwrap();
        assert_eq!(UrlEncoding.decode(&encoded, &Params::default()).unwrap(), data);
    }

    #[test]
    fn test_utf8_bytes_roundtrip() {
        let data = "caf\u{e9} 世界".as_bytes();
        let encoded = UrlEncoding.encode(data, &Params::default()).unwrap();
        assert_eq!(UrlEncoding.decode(&encoded, &Params::default()).unwrap(), data);
    }

    #[test]
    fn test_invalid_sequences() {
        assert!(UrlEncoding.decode("%", &Params::default()).is_err());
        assert!(UrlEncoding.decode("%2", &Params::default()).is_err());
        assert!(UrlEncoding.decode("%ZZ", &Params::default()).is_err());
    }

    #[test]
    fn test_empty() {
        assert_eq!(UrlEncoding.encode(&[], &Params::default()).unwrap(), "");
        assert_eq!(UrlEncoding.decode("", &Params::default()).unwrap(), Vec::<u8>::new());
    }
}
