use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::codec::Registry;
use crate::error::DecodexError;

pub struct Context {
    pub registry: &'static Registry,
}

impl Context {
    pub fn new(registry: &'static Registry) -> Self {
        Self { registry }
    }
}

impl Default for Context {
    fn default() -> Self {
        Self {
            registry: Registry::global(),
        }
    }
}

/// The fixed set of transformation methods. Registry entries are indexed by
/// discriminant, so the declaration order must match the registration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Method {
    Base64,
    Base32,
    Base58,
    Base85,
    Url,
    Html,
    Unicode,
    Hex,
    Binary,
    Octal,
    Rot13,
    RotN,
    Caesar,
    Vigenere,
    Morse,
}

impl Method {
    pub const ALL: [Method; 15] = [
        Method::Base64,
        Method::Base32,
        Method::Base58,
        Method::Base85,
        Method::Url,
        Method::Html,
        Method::Unicode,
        Method::Hex,
        Method::Binary,
        Method::Octal,
        Method::Rot13,
        Method::RotN,
        Method::Caesar,
        Method::Vigenere,
        Method::Morse,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Method::Base64 => "base64",
            Method::Base32 => "base32",
            Method::Base58 => "base58",
            Method::Base85 => "base85",
            Method::Url => "url",
            Method::Html => "html",
            Method::Unicode => "unicode",
            Method::Hex => "hex",
            Method::Binary => "binary",
            Method::Octal => "octal",
            Method::Rot13 => "rot13",
            Method::RotN => "rot-n",
            Method::Caesar => "caesar",
            Method::Vigenere => "vigenere",
            Method::Morse => "morse",
        }
    }
}

impl FromStr for Method {
    type Err = DecodexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Ok(match normalized.as_str() {
            "base64" | "b64" => Method::Base64,
            "base32" | "b32" => Method::Base32,
            "base58" | "b58" => Method::Base58,
            "base85" | "b85" | "ascii85" => Method::Base85,
            "url" | "urlencoding" | "percent" => Method::Url,
            "html" | "htmlentities" | "html-entities" => Method::Html,
            "unicode" | "unicode-escape" => Method::Unicode,
            "hex" | "base16" => Method::Hex,
            "binary" | "bin" | "base2" => Method::Binary,
            "octal" | "oct" | "base8" => Method::Octal,
            "rot13" | "rot-13" => Method::Rot13,
            "rot-n" | "rotn" | "rot" => Method::RotN,
            "caesar" | "caesar-cipher" => Method::Caesar,
            "vigenere" | "vigenère" => Method::Vigenere,
            "morse" | "morsecode" | "morse-code" => Method::Morse,
            _ => return Err(DecodexError::unsupported_method(s)),
        })
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Method-specific parameters. Methods ignore fields they do not use; a
/// missing shift falls back to the per-method default (13 for ROT-N, 3 for
/// Caesar), and a missing Vigenère key is an invalid argument.
#[derive(Debug, Clone, Default)]
pub struct Params {
    pub shift: Option<i64>,
    pub key: Option<String>,
}

impl Params {
    pub fn with_shift(shift: i64) -> Self {
        Self {
            shift: Some(shift),
            key: None,
        }
    }

    pub fn with_key(key: impl Into<String>) -> Self {
        Self {
            shift: None,
            key: Some(key.into()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CodecMeta {
    #[serde(skip)]
    pub method: Method,
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    /// Display label used for auto-detect candidates.
    pub label: &'static str,
    pub alphabet: &'static str,
    pub description: &'static str,
}

/// One scored decoding produced by the auto-detect engine. Exists only for
/// the duration of a single detect invocation.
#[derive(Debug, Clone, Serialize)]
pub struct Candidate {
    pub label: String,
    pub text: String,
    pub score: f64,
}

#[derive(Debug, Clone)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
    Literal(Vec<u8>),
}

impl InputSource {
    pub fn parse(s: &str) -> Self {
        match s {
            "-" => InputSource::Stdin,
            s if s.starts_with('@') => InputSource::File(PathBuf::from(&s[1..])),
            s => {
                // Warn if input looks like a path
                if Self::looks_like_path(s) {
                    eprintln!("Warning: treating '{}' as literal data. Use @{} to read from file.", s, s);
                }
                InputSource::Literal(s.as_bytes().to_vec())
            }
        }
    }

    fn looks_like_path(s: &str) -> bool {
        if s.contains('/') || s.contains('\\') {
            return true;
        }
        let extensions = [".txt", ".bin", ".dat", ".json", ".log"];
        extensions.iter().any(|ext| s.ends_with(ext))
    }
}

#[derive(Debug, Clone)]
pub enum OutputDest {
    Stdout,
    File(PathBuf),
}

impl OutputDest {
    pub fn parse(s: &str) -> Self {
        match s {
            "-" => OutputDest::Stdout,
            s if s.starts_with('@') => OutputDest::File(PathBuf::from(&s[1..])),
            s => OutputDest::File(PathBuf::from(s)),
        }
    }
}
