//! Heuristic readability scoring for decoded candidates.

const PUNCTUATION: &str = ".,;:!?'\"()[]{}";

fn is_control(c: char) -> bool {
    matches!(c, '\u{0}'..='\u{1f}' | '\u{7f}')
}

fn is_printable(c: char) -> bool {
    matches!(c, '\u{20}'..='\u{7e}')
}

/// Counts word segments: one more than the number of whitespace runs, so
/// leading and trailing whitespace each add a segment.
fn count_words(text: &str) -> usize {
    let mut runs = 0;
    let mut in_run = false;
    for c in text.chars() {
        if c.is_whitespace() {
            if !in_run {
                runs += 1;
                in_run = true;
            }
        } else {
            in_run = false;
        }
    }
    runs + 1
}

/// Cheap filter for "could a human read this": some letters, mostly
/// printable, few control characters. Deliberately lenient; the score does
/// the fine ranking.
pub fn is_readable_text(text: &str) -> bool {
    let len = text.chars().count();
    if len < 3 {
        return false;
    }

    let alpha = text.chars().filter(|c| c.is_ascii_alphabetic()).count();
    let printable = text.chars().filter(|&c| is_printable(c)).count();
    let control = text.chars().filter(|&c| is_control(c)).count();

    let len = len as f64;
    alpha as f64 / len > 0.05 && printable as f64 / len > 0.7 && (control as f64) / len < 0.2
}

/// Scores text readability in [0, 100]. Rewards a high letter ratio, a
/// natural lowercase/uppercase mix, and plausible word and punctuation
/// densities; penalizes control characters and very short text.
pub fn score_readability(text: &str) -> f64 {
    let len = text.chars().count();
    if len == 0 {
        return 0.0;
    }

    let alpha = text.chars().filter(|c| c.is_ascii_alphabetic()).count();
    let lower = text.chars().filter(|c| c.is_ascii_lowercase()).count();
    let upper = text.chars().filter(|c| c.is_ascii_uppercase()).count();
    let punctuation = text.chars().filter(|&c| PUNCTUATION.contains(c)).count();
    let control = text.chars().filter(|&c| is_control(c)).count();
    let words = count_words(text);

    let alpha_ratio = alpha as f64 / len as f64;
    let lower_ratio = if lower > 0 && upper > 0 {
        lower as f64 / (lower + upper) as f64
    } else {
        0.0
    };
    let word_ratio = words as f64 / len as f64;
    let punct_ratio = if words > 0 {
        punctuation as f64 / words as f64
    } else {
        0.0
    };

    let mut score = alpha_ratio * 40.0;

    if lower_ratio > 0.5 && lower_ratio < 0.95 {
        score += 20.0;
    }
    if word_ratio > 0.1 && word_ratio < 0.3 {
        score += 15.0;
    }
    if punct_ratio > 0.05 && punct_ratio < 0.5 {
        score += 15.0;
    }

    score -= control as f64 * 5.0;

    if len < 10 {
        score -= (10 - len) as f64 * 2.0;
    }

    score.clamp(0.0, 100.0)
}
