mod base32;
mod base58;
mod base64;
mod base85;
mod html;
mod morse;
mod radix;
mod rot;
mod unicode;
mod url;
mod vigenere;
pub mod registry;
pub(crate) mod util;

pub use registry::Registry;

use crate::error::Result;
use crate::types::{CodecMeta, Params};

/// A paired encode/decode transform for one named method. Implementations
/// are pure: same input and params always produce the same output, with no
/// side effects beyond the returned value.
pub trait Codec: Send + Sync {
    fn meta(&self) -> CodecMeta;
    fn encode(&self, input: &[u8], params: &Params) -> Result<String>;
    fn decode(&self, input: &str, params: &Params) -> Result<Vec<u8>>;

    fn name(&self) -> &'static str {
        self.meta().name
    }
}
