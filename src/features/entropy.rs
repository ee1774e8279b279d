//! Shannon entropy over a password's character frequencies.

use std::collections::HashMap;

/// Base-2 Shannon entropy of the character distribution.
///
/// Terms are summed in order of first occurrence so the same password always
/// produces the same bits. Returns `0.0` for an empty password.
pub(crate) fn shannon_entropy(chars: &[char]) -> f64 {
    if chars.is_empty() {
        return 0.0;
    }

    let mut counts: HashMap<char, usize> = HashMap::new();
    let mut order: Vec<char> = Vec::new();
    for &c in chars {
        let count = counts.entry(c).or_insert(0);
        if *count == 0 {
            order.push(c);
        }
        *count += 1;
    }

    let length = chars.len() as f64;
    let mut entropy = 0.0;
    for c in order {
        let probability = counts[&c] as f64 / length;
        entropy -= probability * probability.log2();
    }
    entropy
}
