//! Bigram similarity scoring for topic strings.

use std::collections::HashMap;

/// Scores two strings with the Sørensen–Dice coefficient over character bigrams.
///
/// The result is in `[0, 1]`. Whitespace is removed before bigrams are taken,
/// so `"web dev"` and `"webdev"` are equal. Equal strings (including two empty
/// strings) score `1.0`; unequal strings shorter than two characters score `0.0`.
///
/// Lengths are counted in `char`s. `strsim::sorensen_dice` divides by byte
/// length, which under-scores accented and CJK topics, so the bigram multiset
/// is counted here instead.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn dice_similarity(a: &str, b: &str) -> f64 {
    let a = strip_whitespace(a);
    let b = strip_whitespace(b);

    if a == b {
        return 1.0;
    }
    if a.len() < 2 || b.len() < 2 {
        return 0.0;
    }

    let mut bigrams: HashMap<(char, char), usize> = HashMap::new();
    for pair in a.windows(2) {
        *bigrams.entry((pair[0], pair[1])).or_insert(0) += 1;
    }

    let mut shared = 0_usize;
    for pair in b.windows(2) {
        if let Some(count) = bigrams.get_mut(&(pair[0], pair[1]))
            && *count > 0
        {
            *count -= 1;
            shared += 1;
        }
    }

    let total = (a.len() - 1) + (b.len() - 1);
    (2 * shared) as f64 / total as f64
}

fn strip_whitespace(text: &str) -> Vec<char> {
    text.chars().filter(|ch| !ch.is_whitespace()).collect()
}
