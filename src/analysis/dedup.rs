//! Option de-duplication heuristic.
//!
//! Two option strings count as duplicates when they are equal after
//! lowercasing and trimming, or when the fraction of shared words (ignoring
//! words of length <= 2) over the larger option's word count exceeds 0.8.
//! Word comparison strips surrounding punctuation so that variants differing
//! only by case and punctuation are still caught.

/// Threshold above which two options are considered the same.
const SIMILARITY_THRESHOLD: f64 = 0.8;

/// Minimum word length to participate in the overlap count.
const MIN_WORD_LEN: usize = 3;

fn significant_words(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|w| {
            w.trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase()
        })
        .filter(|w| w.len() >= MIN_WORD_LEN)
        .collect()
}

/// Fraction of shared significant words over the larger option's word count.
pub fn similarity(a: &str, b: &str) -> f64 {
    let words_a = significant_words(a);
    let words_b = significant_words(b);
    let larger = words_a.len().max(words_b.len());
    if larger == 0 {
        return 0.0;
    }
    let shared = words_a.iter().filter(|w| words_b.contains(w)).count();
    shared as f64 / larger as f64
}

/// Whether two options are duplicates under the similarity rule.
pub fn is_duplicate(a: &str, b: &str) -> bool {
    let a_norm = a.trim().to_lowercase();
    let b_norm = b.trim().to_lowercase();
    a_norm == b_norm || similarity(a, b) > SIMILARITY_THRESHOLD
}

/// First collision between a candidate option set and previously used
/// options, if any.
pub fn find_collision<'a>(
    options: &'a [String],
    used: &'a [String],
) -> Option<(&'a str, &'a str)> {
    for option in options {
        for prior in used {
            if is_duplicate(option, prior) {
                return Some((option.as_str(), prior.as_str()));
            }
        }
    }
    None
}
