use decodex::error::Result;
use decodex::types::{CodecMeta, Context};

pub fn run_info(ctx: &Context, method_name: &str) -> Result<CodecMeta> {
    let codec = ctx.registry.lookup(method_name)?;
    Ok(codec.meta())
}
