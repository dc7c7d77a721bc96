use super::Codec;
use crate::error::Result;
use crate::types::{CodecMeta, Method, Params};

fn entity_for(byte: u8) -> Option<&'static str> {
    Some(match byte {
        b'&' => "&amp;",
        b'<' => "&lt;",
        b'>' => "&gt;",
        b'"' => "&quot;",
        b'\'' => "&#39;",
        b'/' => "&#x2F;",
        b'`' => "&#x60;",
        b'=' => "&#x3D;",
        _ => return None,
    })
}

fn char_for(name: &str) -> Option<char> {
    Some(match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        _ => {
            let code = if let Some(hex) = name.strip_prefix("#x").or_else(|| name.strip_prefix("#X")) {
                u32::from_str_radix(hex, 16).ok()?
            } else if let Some(dec) = name.strip_prefix('#') {
                dec.parse::<u32>().ok()?
            } else {
                return None;
            };
            char::from_u32(code)?
        }
    })
}

/// Code points 0-255 map back to single bytes; anything above emits its
/// UTF-8 bytes.
fn push_char(out: &mut Vec<u8>, c: char) {
    let code = c as u32;
    if code <= 0xFF {
        out.push(code as u8);
    } else {
        let mut buf = [0u8; 4];
        out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
    }
}

pub struct HtmlEntities;

impl Codec for HtmlEntities {
    fn meta(&self) -> CodecMeta {
        CodecMeta {
            method: Method::Html,
            name: "html",
            aliases: &["htmlentities"],
            label: "HTML Entity",
            alphabet: "",
            description: "HTML entity escaping for reserved characters",
        }
    }

    fn encode(&self, input: &[u8], _params: &Params) -> Result<String> {
        let mut result = String::new();
        for &byte in input {
            match entity_for(byte) {
                Some(entity) => result.push_str(entity),
                None => push_byte(&mut result, byte),
            }
        }
        Ok(result)
    }

    fn decode(&self, input: &str, _params: &Params) -> Result<Vec<u8>> {
        let mut result = Vec::new();
        let chars: Vec<char> = input.chars().collect();
        let mut i = 0;

        while i < chars.len() {
            if chars[i] == '&' {
                // Entity names are short; give up past a small window so a
                // bare ampersand stays literal.
                let end = chars[i + 1..]
                    .iter()
                    .take(10)
                    .position(|&c| c == ';')
                    .map(|off| i + 1 + off);
                if let Some(end) = end {
                    let name: String = chars[i + 1..end].iter().collect();
                    if let Some(c) = char_for(&name) {
                        push_char(&mut result, c);
                        i = end + 1;
                        continue;
                    }
                }
            }
            push_char(&mut result, chars[i]);
            i += 1;
        }

        Ok(result)
    }
}

fn push_byte(out: &mut String, byte: u8) {
    out.push(byte as char);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_reserved() {
        assert_eq!(
            HtmlEntities.encode(b"<a href=\"x\">&amp;</a>", &Params::default()).unwrap(),
            "&lt;a href&#x3D;&quot;x&quot;&gt;&amp;amp;&lt;&#x2F;a&gt;"
        );
    }

    #[test]
    fn test_encode_apostrophe_and_backtick() {
        assert_eq!(HtmlEntities.encode(b"it's `x`", &Params::default()).unwrap(), "it&#39;s &#x60;x&#x60;");
    }

    #[test]
    fn test_decode_named() {
        assert_eq!(
            HtmlEntities.decode("&lt;b&gt;&amp;&quot;&apos;", &Params::default()).unwrap(),
            b"<b>&\"'"
        );
    }

    #[test]
    fn test_decode_numeric() {
        assert_eq!(HtmlEntities.decode("&#39;&#x2F;&#65;", &Params::default()).unwrap(), b"'/A");
    }

    #[test]
    fn test_decode_unknown_entity_passes_through() {
        assert_eq!(HtmlEntities.decode("&bogus;", &Params::default()).unwrap(), b"&bogus;");
        assert_eq!(HtmlEntities.decode("a & b", &Params::default()).unwrap(), b"a & b");
    }

    #[test]
    fn test_decode_high_codepoint_as_utf8() {
        assert_eq!(HtmlEntities.decode("&#x4e2d;", &Params::default()).unwrap(), "中".as_bytes());
    }

    #[test]
    fn test_roundtrip() {
        let data = b"5 < 6 && \"quotes\" = 'fine' / `sure`";
        let encoded = HtmlEntities.encode(data, &Params::default()).unwrap();
        assert_eq!(HtmlEntities.decode(&encoded, &Params::default()).unwrap(), data);
    }

    #[test]
    fn test_roundtrip_high_bytes() {
        let data = &[b'<', 0xe9, 0xff, b'>'];
        let encoded = HtmlEntities.encode(data, &Params::default()).unwrap();
        assert_eq!(HtmlEntities.decode(&encoded, &Params::default()).unwrap(), data);
    }

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(HtmlEntities.encode(b"hello world", &Params::default()).unwrap(), "hello world");
        assert_eq!(HtmlEntities.decode("hello world", &Params::default()).unwrap(), b"hello world");
    }

    #[test]
    fn test_empty() {
        assert_eq!(HtmlEntities.encode(&[], &Params::default()).unwrap(), "");
        assert_eq!(HtmlEntities.decode("", &Params::default()).unwrap(), Vec::<u8>::new());
    }
}
