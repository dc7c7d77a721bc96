use serde::Serialize;

use crate::io::read_input;
use decodex::error::Result;
use decodex::types::{Context, InputSource, Params};

#[derive(Debug, Serialize)]
pub struct DecodeResult {
    pub method: &'static str,
    pub decoded: String,
}

pub fn run_decode(ctx: &Context, method_name: &str, input: &InputSource, params: &Params) -> Result<Vec<u8>> {
    let codec = ctx.registry.lookup(method_name)?;
    let data = read_input(input)?;
    let text = String::from_utf8_lossy(&data);
    codec.decode(&text, params)
}

pub fn run_decode_json(
    ctx: &Context,
    method_name: &str,
    input: &InputSource,
    params: &Params,
) -> Result<DecodeResult> {
    let codec = ctx.registry.lookup(method_name)?;
    let data = read_input(input)?;
    let text = String::from_utf8_lossy(&data);
    let decoded = codec.decode(&text, params)?;
    Ok(DecodeResult {
        method: codec.name(),
        decoded: String::from_utf8_lossy(&decoded).into_owned(),
    })
}
