//! Complexity score - additive heuristic over length, variety and weaknesses.

use super::composition::Composition;

/// Weaknesses that reduce the complexity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct Penalties {
    pub sequence: bool,
    pub repetition: bool,
    pub common: bool,
}

/// Computes the complexity score. The result is never negative and has no
/// upper bound.
///
/// Terms are applied in a fixed order so the floating-point result is
/// reproducible:
/// - length bonus: `min(length * 0.5, 10)`
/// - variety bonus: `0.3` per distinct character
/// - class bonus: `+2` uppercase, `+2` lowercase, `+2` digit, `+3` special
/// - penalties: `-3` sequence, `-2` repetition, `-10` common password
pub(crate) fn complexity_score(composition: &Composition, penalties: Penalties) -> f64 {
    let mut score = 0.0;

    score += (composition.length as f64 * 0.5).min(10.0);
    score += composition.distinct as f64 * 0.3;

    if composition.has_uppercase() {
        score += 2.0;
    }
    if composition.has_lowercase() {
        score += 2.0;
    }
    if composition.has_digits() {
        score += 2.0;
    }
    if composition.has_special() {
        score += 3.0;
    }

    if penalties.sequence {
        score -= 3.0;
    }
    if penalties.repetition {
        score -= 2.0;
    }
    if penalties.common {
        score -= 10.0;
    }

    f64::max(score, 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn composition(s: &str) -> Composition {
        let chars: Vec<char> = s.chars().collect();
        Composition::of(&chars)
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_complexity_empty_is_zero() {
        assert_eq!(complexity_score(&composition(""), Penalties::default()), 0.0);
    }

    #[test]
    fn test_complexity_length_bonus_is_capped() {
        // 40 chars of one symbol: 10 + 0.3 + 2
        let score = complexity_score(&composition(&"a".repeat(40)), Penalties::default());
        assert!(approx(score, 12.3), "got {}", score);
    }

    #[test]
    fn test_complexity_class_bonuses() {
        // 4 * 0.5 + 4 * 0.3 + 2 + 2 + 2 + 3
        let score = complexity_score(&composition("Aa1!"), Penalties::default());
        assert!(approx(score, 12.2), "got {}", score);
    }

    #[test]
    fn test_complexity_penalties() {
        let c = composition("Aa1!");
        let base = complexity_score(&c, Penalties::default());
        let penalized = complexity_score(
            &c,
            Penalties {
                sequence: true,
                repetition: true,
                common: false,
            },
        );
        assert!(approx(base - penalized, 5.0));
    }

    #[test]
    fn test_complexity_clamped_at_zero() {
        let penalties = Penalties {
            sequence: false,
            repetition: false,
            common: true,
        };
        assert_eq!(complexity_score(&composition("password"), penalties), 0.0);
    }
}
