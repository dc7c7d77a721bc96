use serde::Serialize;

use crate::io::read_input;
use decodex::detect::auto_detect;
use decodex::error::Result;
use decodex::types::{Candidate, Context, InputSource};

#[derive(Debug, Serialize)]
pub struct DetectResult {
    pub schema_version: u32,
    pub candidates: Vec<Candidate>,
    pub input_preview: String,
}

pub fn run_detect(ctx: &Context, input: InputSource, top_n: usize) -> Result<DetectResult> {
    let data = read_input(&input)?;
    let text = String::from_utf8_lossy(&data);
    let trimmed = text.trim();

    let mut candidates = auto_detect(ctx, trimmed)?;
    candidates.truncate(top_n);

    let preview = if trimmed.chars().count() > 60 {
        let head: String = trimmed.chars().take(60).collect();
        format!("{}...", head)
    } else {
        trimmed.to_string()
    };

    Ok(DetectResult {
        schema_version: 1,
        candidates,
        input_preview: preview,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_base64_literal() {
        let ctx = Context::default();
        let result = run_detect(&ctx, InputSource::Literal(b"TWFu".to_vec()), 10).unwrap();
        assert!(result
            .candidates
            .iter()
            .any(|c| c.text == "Man" && c.label.contains("Base64")));
    }

    #[test]
    fn test_detect_trims_surrounding_whitespace() {
        let ctx = Context::default();
        let result = run_detect(&ctx, InputSource::Literal(b"  TWFu\n".to_vec()), 10).unwrap();
        assert!(result.candidates.iter().any(|c| c.text == "Man"));
        assert_eq!(result.input_preview, "TWFu");
    }

    #[test]
    fn test_detect_respects_top() {
        let ctx = Context::default();
        let result = run_detect(&ctx, InputSource::Literal(b"Uryyb gurer zl sevraq".to_vec()), 3).unwrap();
        assert!(result.candidates.len() <= 3);
    }

    #[test]
    fn test_detect_long_input_preview_truncated() {
        let ctx = Context::default();
        let long = "TWFu".repeat(40);
        let result = run_detect(&ctx, InputSource::Literal(long.into_bytes()), 5).unwrap();
        assert!(result.input_preview.ends_with("..."));
        assert_eq!(result.input_preview.chars().count(), 63);
    }
}
