use std::collections::HashMap;
use std::sync::OnceLock;

use super::Codec;
use crate::error::Result;
use crate::types::{CodecMeta, Method, Params};

// International Morse plus the common punctuation extensions.
const TABLE: &[(char, &str)] = &[
    ('A', ".-"), ('B', "-..."), ('C', "-.-."), ('D', "-.."), ('E', "."),
    ('F', "..-."), ('G', "--."), ('H', "...."), ('I', ".."), ('J', ".---"),
    ('K', "-.-"), ('L', ".-.."), ('M', "--"), ('N', "-."), ('O', "---"),
    ('P', ".--."), ('Q', "--.-"), ('R', ".-."), ('S', "..."), ('T', "-"),
    ('U', "..-"), ('V', "...-"), ('W', ".--"), ('X', "-..-"), ('Y', "-.--"),
    ('Z', "--.."), ('1', ".----"), ('2', "..---"), ('3', "...--"), ('4', "....-"),
    ('5', "....."), ('6', "-...."), ('7', "--..."), ('8', "---.."), ('9', "----."),
    ('0', "-----"), ('.', ".-.-.-"), (',', "--..--"), ('?', "..--.."),
    ('\'', ".----."), ('!', "-.-.--"), ('/', "-..-."), ('(', "-.--."),
    (')', "-.--.-"), ('&', ".-..."), (':', "---..."), (';', "-.-.-."),
    ('=', "-...-"), ('+', ".-.-."), ('-', "-....-"), ('_', "..--.-"),
    ('"', ".-..-."), ('$', "...-..-"), ('@', ".--.-."),
];

static ENCODE_MAP: OnceLock<HashMap<char, &'static str>> = OnceLock::new();
static DECODE_MAP: OnceLock<HashMap<&'static str, char>> = OnceLock::new();

fn encode_map() -> &'static HashMap<char, &'static str> {
    ENCODE_MAP.get_or_init(|| TABLE.iter().copied().collect())
}

fn decode_map() -> &'static HashMap<&'static str, char> {
    DECODE_MAP.get_or_init(|| TABLE.iter().map(|&(c, code)| (code, c)).collect())
}

pub struct Morse;

impl Codec for Morse {
    fn meta(&self) -> CodecMeta {
        CodecMeta {
            method: Method::Morse,
            name: "morse",
            aliases: &["morsecode", "morse-code"],
            label: "Morse Code",
            alphabet: ".-",
            description: "Morse code, letters joined by spaces and words by three spaces",
        }
    }

    fn encode(&self, input: &[u8], _params: &Params) -> Result<String> {
        let text: String = input.iter().map(|&b| b as char).collect();
        let words: Vec<String> = text
            .split(' ')
            .map(|word| {
                word.chars()
                    .map(|c| {
                        let upper = c.to_ascii_uppercase();
                        match encode_map().get(&upper) {
                            Some(code) => (*code).to_string(),
                            // Characters without a code pass through untouched.
                            None => c.to_string(),
                        }
                    })
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect();
        Ok(words.join("   "))
    }

    fn decode(&self, input: &str, _params: &Params) -> Result<Vec<u8>> {
        let decoded: String = input
            .split("   ")
            .map(|word| {
                word.split(' ')
                    .filter(|symbol| !symbol.is_empty())
                    .map(|symbol| match decode_map().get(symbol) {
                        Some(&c) => c.to_string(),
                        None => symbol.to_string(),
                    })
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join(" ");
        Ok(decoded.into_bytes())
    }
}
