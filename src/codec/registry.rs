use std::sync::OnceLock;

use super::Codec;
use crate::error::Result;
use crate::types::{CodecMeta, Method};

macro_rules! register_codecs {
    ($($method:ident => $module:ident :: $codec:ident),* $(,)?) => {
        fn build_registry() -> Registry {
            let codecs: Vec<Box<dyn Codec>> = vec![
                $(Box::new(super::$module::$codec)),*
            ];

            // Entries are fetched by Method discriminant; the registration
            // order above must match the Method declaration order.
            for (idx, codec) in codecs.iter().enumerate() {
                debug_assert_eq!(
                    codec.meta().method as usize,
                    idx,
                    "registry order mismatch for '{}'",
                    codec.name()
                );
            }

            Registry { codecs }
        }

        #[cfg(test)]
        fn registered_methods() -> Vec<Method> {
            vec![$(Method::$method),*]
        }
    };
}

register_codecs! {
    Base64 => base64::Base64,
    Base32 => base32::Base32,
    Base58 => base58::Base58,
    Base85 => base85::Ascii85,
    Url => url::UrlEncoding,
    Html => html::HtmlEntities,
    Unicode => unicode::UnicodeEscape,
    Hex => radix::Hex,
    Binary => radix::Binary,
    Octal => radix::Octal,
    Rot13 => rot::Rot13,
    RotN => rot::RotN,
    Caesar => rot::Caesar,
    Vigenere => vigenere::Vigenere,
    Morse => morse::Morse,
}

static REGISTRY: OnceLock<Registry> = OnceLock::new();

pub struct Registry {
    codecs: Vec<Box<dyn Codec>>,
}

impl Registry {
    fn new() -> Self {
        build_registry()
    }

    pub fn global() -> &'static Registry {
        REGISTRY.get_or_init(Registry::new)
    }

    pub fn get(&self, method: Method) -> &dyn Codec {
        self.codecs[method as usize].as_ref()
    }

    /// Resolves a user-supplied method name (or alias) to its codec.
    pub fn lookup(&self, name: &str) -> Result<&dyn Codec> {
        let method: Method = name.parse()?;
        Ok(self.get(method))
    }

    pub fn list(&self) -> Vec<CodecMeta> {
        self.codecs.iter().map(|c| c.meta()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_methods_registered_in_order() {
        let registry = Registry::global();
        assert_eq!(registered_methods(), Method::ALL.to_vec());
        for method in Method::ALL {
            assert_eq!(registry.get(method).meta().method, method);
        }
    }

    #[test]
    fn test_lookup_by_name_and_alias() {
        let registry = Registry::global();
        assert_eq!(registry.lookup("base64").unwrap().name(), "base64");
        assert_eq!(registry.lookup("b58").unwrap().name(), "base58");
        assert!(registry.lookup("nonsense").is_err());
    }

    #[test]
    fn test_meta_name_matches_method_name() {
        for meta in Registry::global().list() {
            assert_eq!(meta.name, meta.method.name());
        }
    }
}
