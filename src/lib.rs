//! Text transformation library: paired encode/decode codecs (Base64/32/58/85,
//! hex/binary/octal, URL/HTML/Unicode escaping, classical letter ciphers and
//! Morse code), a readability heuristic, and an auto-detect engine that
//! guesses how an unlabeled blob of text was encoded.

pub mod codec;
pub mod detect;
pub mod error;
pub mod score;
pub mod types;

pub use codec::{Codec, Registry};
pub use detect::auto_detect as auto_detect_with;
pub use error::{DecodexError, ExitCode, Result};
pub use score::{is_readable_text, score_readability};
pub use types::{Candidate, CodecMeta, Context, Method, Params};

/// Encodes text with the named method. Text is treated as its UTF-8 bytes.
pub fn encode(method: Method, text: &str, params: &Params) -> Result<String> {
    Registry::global().get(method).encode(text.as_bytes(), params)
}

/// Decodes text with the named method. Decoded bytes that are not valid
/// UTF-8 are rendered lossily.
pub fn decode(method: Method, text: &str, params: &Params) -> Result<String> {
    let bytes = Registry::global().get(method).decode(text, params)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Runs the auto-detect engine against unlabeled input using the global
/// registry.
pub fn auto_detect(text: &str) -> Result<Vec<Candidate>> {
    detect::auto_detect(&Context::default(), text)
}
