//! Heuristic "try all methods" decoder: runs pattern-gated codec variants
//! and cipher sweeps against unlabeled input, then filters, deduplicates and
//! ranks the readable results.

use crate::error::{DecodexError, Result};
use crate::score::{is_readable_text, score_readability};
use crate::types::{Candidate, Context, Method, Params};

/// Two candidates whose scores differ by more than this are always kept in
/// score order; within the band, length preferences may reorder them.
const SCORE_BAND: f64 = 15.0;

/// Dedupe window: candidates sharing this many leading characters of
/// decoded text count as the same finding.
const DEDUPE_PREFIX: usize = 50;

pub fn auto_detect(ctx: &Context, input: &str) -> Result<Vec<Candidate>> {
    if input.is_empty() {
        return Err(DecodexError::invalid_argument("input is empty"));
    }

    let mut candidates = gather_candidates(ctx, input);
    candidates = dedupe_candidates(candidates);
    rank_candidates(&mut candidates);
    Ok(candidates)
}

fn gather_candidates(ctx: &Context, input: &str) -> Vec<Candidate> {
    let mut candidates = Vec::new();

    base64_variants(ctx, input, &mut candidates);
    cleaned_radix_variants(ctx, input, &mut candidates);

    // One plain decode attempt per method; the keyed and swept ciphers are
    // handled separately.
    for method in Method::ALL {
        match method {
            Method::Vigenere | Method::RotN | Method::Caesar => continue,
            _ => {}
        }
        let codec = ctx.registry.get(method);
        if let Ok(decoded) = codec.decode(input, &Params::default()) {
            push_candidate(&mut candidates, input, codec.meta().label.to_string(), &decoded, 0.0);
        }
    }

    rot_sweep(ctx, input, &mut candidates);
    caesar_sweep(ctx, input, &mut candidates);

    candidates
}

/// Adds a candidate if the decoded text is a real finding: non-empty,
/// different from the input, and readable.
fn push_candidate(candidates: &mut Vec<Candidate>, input: &str, label: String, decoded: &[u8], bonus: f64) {
    let text = String::from_utf8_lossy(decoded).into_owned();
    if text.is_empty() || text == input || !is_readable_text(&text) {
        return;
    }
    let score = score_readability(&text) + bonus;
    candidates.push(Candidate { label, text, score });
}

fn is_base64_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '+' | '/' | '-' | '_')
}

/// Matches `chars+={0,2}` for the given symbol predicate.
fn matches_base64_shape(input: &str, symbol: impl Fn(char) -> bool) -> bool {
    let trimmed = input.trim_end_matches('=');
    let padding = input.len() - trimmed.len();
    padding <= 2 && !trimmed.is_empty() && trimmed.chars().all(symbol)
}

fn base64_variants(ctx: &Context, input: &str, candidates: &mut Vec<Candidate>) {
    if !matches_base64_shape(input, is_base64_char) {
        return;
    }
    let base64 = ctx.registry.get(Method::Base64);

    if matches_base64_shape(input, |c| c.is_ascii_alphanumeric() || matches!(c, '+' | '/')) {
        let standard_readable = base64
            .decode(input, &Params::default())
            .map(|d| is_readable_text(&String::from_utf8_lossy(&d)))
            .unwrap_or(false);

        // Padding variants only matter when the verbatim decode fails to
        // produce readable text; otherwise the plain attempt already covers
        // this input.
        if !standard_readable {
            let stripped = input.trim_end_matches('=');
            for pad in 0..=2 {
                let padded = format!("{}{}", stripped, "=".repeat(pad));
                if padded == input {
                    continue;
                }
                if let Ok(decoded) = base64.decode(&padded, &Params::default()) {
                    push_candidate(candidates, input, format!("Base64 (padding={})", pad), &decoded, 5.0);
                }
            }
        }
    }

    if matches_base64_shape(input, |c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_')) {
        let swapped: String = input
            .chars()
            .map(|c| match c {
                '-' => '+',
                '_' => '/',
                other => other,
            })
            .collect();
        if swapped != input {
            if let Ok(decoded) = base64.decode(&swapped, &Params::default()) {
                push_candidate(candidates, input, "URL-safe Base64".to_string(), &decoded, 5.0);
            }
        }
    }
}

/// Matches `(digit{width}separator?)+`: fixed-width digit groups, each
/// optionally followed by one non-digit character.
fn matches_grouped(input: &str, width: usize, is_digit: impl Fn(char) -> bool) -> bool {
    let chars: Vec<char> = input.chars().collect();
    if chars.is_empty() {
        return false;
    }
    let mut i = 0;
    while i < chars.len() {
        if i + width > chars.len() || !chars[i..i + width].iter().all(|&c| is_digit(c)) {
            return false;
        }
        i += width;
        if i < chars.len() && !is_digit(chars[i]) {
            i += 1;
        }
    }
    true
}

fn cleaned_radix_variants(ctx: &Context, input: &str, candidates: &mut Vec<Candidate>) {
    if matches_grouped(input, 2, |c| c.is_ascii_hexdigit()) {
        let cleaned: String = input.chars().filter(|c| c.is_ascii_hexdigit()).collect();
        let spaced = space_groups(&cleaned, 2);
        if let Ok(decoded) = ctx.registry.get(Method::Hex).decode(&spaced, &Params::default()) {
            push_candidate(candidates, input, "Hex (cleaned)".to_string(), &decoded, 3.0);
        }
    }

    if matches_grouped(input, 8, |c| matches!(c, '0' | '1')) {
        let cleaned: String = input.chars().filter(|c| matches!(c, '0' | '1')).collect();
        let spaced = space_groups(&cleaned, 8);
        if let Ok(decoded) = ctx.registry.get(Method::Binary).decode(&spaced, &Params::default()) {
            push_candidate(candidates, input, "Binary (cleaned)".to_string(), &decoded, 3.0);
        }
    }
}

fn space_groups(digits: &str, width: usize) -> String {
    digits
        .as_bytes()
        .chunks(width)
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Tries every ROT shift; the 1..=13 range gets a bonus as the more common
/// choice, and shift 13 is called out as ROT13.
fn rot_sweep(ctx: &Context, input: &str, candidates: &mut Vec<Candidate>) {
    let rot = ctx.registry.get(Method::RotN);
    for shift in 1..=25 {
        if let Ok(decoded) = rot.decode(input, &Params::with_shift(shift)) {
            let label = if shift == 13 {
                "ROT13 (ROT-13)".to_string()
            } else {
                format!("ROT-{}", shift)
            };
            let bonus = if shift <= 13 { 5.0 } else { 0.0 };
            push_candidate(candidates, input, label, &decoded, bonus);
        }
    }
}

fn caesar_sweep(ctx: &Context, input: &str, candidates: &mut Vec<Candidate>) {
    let caesar = ctx.registry.get(Method::Caesar);
    for shift in 1..=25 {
        if let Ok(decoded) = caesar.decode(input, &Params::with_shift(shift)) {
            push_candidate(candidates, input, format!("Caesar Cipher (Shift={})", shift), &decoded, 0.0);
        }
    }
}

fn prefix(text: &str) -> String {
    text.chars().take(DEDUPE_PREFIX).collect()
}

/// Collapses candidates whose decoded text shares the dedupe prefix; the
/// higher score wins, first seen wins ties.
fn dedupe_candidates(candidates: Vec<Candidate>) -> Vec<Candidate> {
    let mut unique: Vec<Candidate> = Vec::new();

    for candidate in candidates {
        let key = prefix(&candidate.text);
        match unique.iter_mut().find(|c| prefix(&c.text) == key) {
            Some(existing) => {
                if candidate.score > existing.score {
                    *existing = candidate;
                }
            }
            None => unique.push(candidate),
        }
    }

    unique
}

/// 0 for text of comfortable length, 1 for text too long or too short to
/// be a convincing decoding.
fn length_class(candidate: &Candidate) -> u8 {
    let len = candidate.text.chars().count();
    if len > 200 || len < 3 {
        1
    } else {
        0
    }
}

/// Sorts by score descending, then applies a second stable pass: within a
/// score band, candidates of comfortable length beat very long or very
/// short ones. The second comparator keys on the precomputed length class,
/// which keeps it a total order.
fn rank_candidates(candidates: &mut [Candidate]) {
    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));

    candidates.sort_by(|a, b| {
        if (b.score - a.score).abs() > SCORE_BAND {
            return b.score.total_cmp(&a.score);
        }

        length_class(a)
            .cmp(&length_class(b))
            .then_with(|| b.score.total_cmp(&a.score))
    });
}
