use serde::Serialize;

use crate::io::read_input;
use decodex::error::Result;
use decodex::types::{Context, InputSource, Params};

#[derive(Debug, Serialize)]
pub struct EncodeResult {
    pub method: &'static str,
    pub encoded: String,
}

pub fn run_encode(ctx: &Context, method_name: &str, input: &InputSource, params: &Params) -> Result<String> {
    let codec = ctx.registry.lookup(method_name)?;
    let data = read_input(input)?;
    codec.encode(&data, params)
}

pub fn run_encode_json(
    ctx: &Context,
    method_name: &str,
    input: &InputSource,
    params: &Params,
) -> Result<EncodeResult> {
    let codec = ctx.registry.lookup(method_name)?;
    let data = read_input(input)?;
    let encoded = codec.encode(&data, params)?;
    Ok(EncodeResult {
        method: codec.name(),
        encoded,
    })
}
