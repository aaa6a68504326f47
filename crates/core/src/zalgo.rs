//! Combining-mark generator behind the cursed, zalgo and glitch tools.

use rand::seq::SliceRandom;
use rand::Rng;
use unicode_normalization::char::is_combining_mark;

/// Upper bound on marks appended per direction per character.
pub const MAX_MARK_COUNT: usize = 256;

/// Marks drawn above the base glyph.
pub const UP_MARKS: &[char] = &[
    '\u{030d}', '\u{030e}', '\u{0304}', '\u{0305}', '\u{033f}', '\u{0311}', '\u{0306}', '\u{0310}',
    '\u{0352}', '\u{033d}', '\u{0313}', '\u{0314}', '\u{0301}', '\u{0341}', '\u{0300}', '\u{0340}',
    '\u{0307}', '\u{0308}', '\u{030a}', '\u{0342}', '\u{0343}', '\u{0344}', '\u{034a}', '\u{034b}',
    '\u{034c}', '\u{0303}', '\u{0302}', '\u{030c}', '\u{0350}', '\u{030b}', '\u{030f}', '\u{0312}',
    '\u{0315}', '\u{031b}', '\u{031c}', '\u{031d}', '\u{035d}', '\u{035e}', '\u{035f}', '\u{0360}',
    '\u{0361}', '\u{0362}', '\u{0309}',
];

/// Marks drawn through the base glyph.
pub const MIDDLE_MARKS: &[char] = &[
    '\u{0315}', '\u{031b}', '\u{031c}', '\u{031d}', '\u{035d}', '\u{035e}', '\u{035f}', '\u{0360}',
    '\u{0361}', '\u{0362}', '\u{0334}', '\u{0335}', '\u{0336}', '\u{0337}', '\u{0338}',
];

/// Marks drawn below the base glyph.
pub const DOWN_MARKS: &[char] = &[
    '\u{0316}', '\u{0317}', '\u{0318}', '\u{0319}', '\u{031a}', '\u{031e}', '\u{031f}', '\u{0320}',
    '\u{0321}', '\u{0322}', '\u{0323}', '\u{0324}', '\u{0325}', '\u{0326}', '\u{0327}', '\u{0328}',
    '\u{0329}', '\u{032a}', '\u{032b}', '\u{032c}', '\u{032d}', '\u{032e}', '\u{032f}', '\u{0330}',
    '\u{0331}', '\u{0332}', '\u{0333}', '\u{0339}', '\u{033a}', '\u{033b}', '\u{033c}', '\u{0345}',
    '\u{0347}', '\u{0348}', '\u{0349}', '\u{034d}', '\u{034e}', '\u{0353}', '\u{0354}', '\u{0355}',
    '\u{0356}', '\u{0359}', '\u{035a}', '\u{035b}',
];

/// How many marks to attach after each base character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkPlan {
    /// `n` marks, each from a randomly chosen direction.
    Intensity(usize),
    /// Exact counts per direction, emitted up, then middle, then down.
    Explicit {
        up: usize,
        middle: usize,
        down: usize,
    },
}

impl MarkPlan {
    pub fn is_empty(&self) -> bool {
        match *self {
            MarkPlan::Intensity(n) => n == 0,
            MarkPlan::Explicit { up, middle, down } => up == 0 && middle == 0 && down == 0,
        }
    }
}

/// Attach combining marks after every character of `text`.
pub fn corrupt<R: Rng + ?Sized>(text: &str, plan: MarkPlan, rng: &mut R) -> String {
    if plan.is_empty() {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len() * 8);
    for c in text.chars() {
        out.push(c);
        append_marks(&mut out, plan, rng);
    }
    out
}

/// Push the marks for one base character onto `out`.
pub fn append_marks<R: Rng + ?Sized>(out: &mut String, plan: MarkPlan, rng: &mut R) {
    match plan {
        MarkPlan::Intensity(n) => {
            for _ in 0..n.min(MAX_MARK_COUNT) {
                let roll: f64 = rng.gen();
                let pool = if roll < 0.33 {
                    UP_MARKS
                } else if roll < 0.66 {
                    MIDDLE_MARKS
                } else {
                    DOWN_MARKS
                };
                push_from(out, pool, 1, rng);
            }
        }
        MarkPlan::Explicit { up, middle, down } => {
            push_from(out, UP_MARKS, up, rng);
            push_from(out, MIDDLE_MARKS, middle, rng);
            push_from(out, DOWN_MARKS, down, rng);
        }
    }
}

/// Like [`corrupt`] with an intensity, but directions rotate up, middle, down
/// instead of being rolled.
pub fn corrupt_cycled<R: Rng + ?Sized>(text: &str, intensity: usize, rng: &mut R) -> String {
    const POOLS: [&[char]; 3] = [UP_MARKS, MIDDLE_MARKS, DOWN_MARKS];

    let mut out = String::with_capacity(text.len() * 8);
    for c in text.chars() {
        out.push(c);
        for step in 0..intensity.min(MAX_MARK_COUNT) {
            push_from(&mut out, POOLS[step % POOLS.len()], 1, rng);
        }
    }
    out
}

fn push_from<R: Rng + ?Sized>(out: &mut String, pool: &[char], count: usize, rng: &mut R) {
    for _ in 0..count.min(MAX_MARK_COUNT) {
        if let Some(mark) = pool.choose(rng) {
            out.push(*mark);
        }
    }
}

/// Remove every combining mark, leaving the base characters.
pub fn strip_marks(text: &str) -> String {
    text.chars().filter(|c| !is_combining_mark(*c)).collect()
}

/// Number of combining marks in `text`.
pub fn count_marks(text: &str) -> usize {
    text.chars().filter(|c| is_combining_mark(*c)).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    // ============================================================================
    // Pool tests
    // ============================================================================

    #[test]
    fn test_pool_sizes() {
        assert_eq!(UP_MARKS.len(), 43);
        assert_eq!(MIDDLE_MARKS.len(), 15);
        assert_eq!(DOWN_MARKS.len(), 44);
    }

    #[test]
    fn test_pools_are_combining_marks() {
        for mark in UP_MARKS.iter().chain(MIDDLE_MARKS).chain(DOWN_MARKS) {
            assert!(is_combining_mark(*mark), "{:04x}", *mark as u32);
            assert!(('\u{0300}'..='\u{036f}').contains(mark));
        }
    }

    // ============================================================================
    // corrupt tests
    // ============================================================================

    #[test]
    fn test_corrupt_zero_intensity_is_identity() {
        assert_eq!(corrupt("hello", MarkPlan::Intensity(0), &mut rng()), "hello");
    }

    #[test]
    fn test_corrupt_zero_explicit_is_identity() {
        let plan = MarkPlan::Explicit {
            up: 0,
            middle: 0,
            down: 0,
        };
        assert_eq!(corrupt("hello", plan, &mut rng()), "hello");
    }

    #[test]
    fn test_corrupt_empty_text() {
        assert_eq!(corrupt("", MarkPlan::Intensity(10), &mut rng()), "");
    }

    #[test]
    fn test_corrupt_intensity_adds_exact_count() {
        let out = corrupt("abc", MarkPlan::Intensity(4), &mut rng());
        assert_eq!(count_marks(&out), 12);
        assert_eq!(strip_marks(&out), "abc");
    }

    #[test]
    fn test_corrupt_explicit_orders_directions() {
        let plan = MarkPlan::Explicit {
            up: 2,
            middle: 1,
            down: 3,
        };
        let out = corrupt("x", plan, &mut rng());
        let marks: Vec<char> = out.chars().skip(1).collect();
        assert_eq!(marks.len(), 6);
        assert!(marks[..2].iter().all(|m| UP_MARKS.contains(m)));
        assert!(MIDDLE_MARKS.contains(&marks[2]));
        assert!(marks[3..].iter().all(|m| DOWN_MARKS.contains(m)));
    }

    #[test]
    fn test_corrupt_caps_huge_counts() {
        let out = corrupt("a", MarkPlan::Intensity(usize::MAX), &mut rng());
        assert_eq!(count_marks(&out), MAX_MARK_COUNT);
    }

    #[test]
    fn test_corrupt_is_reproducible_with_seed() {
        let a = corrupt("seed", MarkPlan::Intensity(5), &mut rng());
        let b = corrupt("seed", MarkPlan::Intensity(5), &mut rng());
        assert_eq!(a, b);
    }

    #[test]
    fn test_corrupt_monotonic_in_expectation() {
        let mut rng = rng();
        let mut previous = 0.0;
        for intensity in [0, 1, 3, 6, 12] {
            let trials = 200;
            let total: usize = (0..trials)
                .map(|_| count_marks(&corrupt("ab", MarkPlan::Intensity(intensity), &mut rng)))
                .sum();
            let mean = total as f64 / trials as f64;
            assert!(mean >= previous, "{intensity}: {mean} < {previous}");
            previous = mean;
        }
    }

    #[test]
    fn test_corrupt_uses_every_direction() {
        let out = corrupt("abcdefghij", MarkPlan::Intensity(20), &mut rng());
        let marks: Vec<char> = out.chars().filter(|c| is_combining_mark(*c)).collect();
        // 0x0334..=0x0338 only live in the middle pool.
        assert!(marks.iter().any(|m| ('\u{0334}'..='\u{0338}').contains(m)));
        assert!(marks.iter().any(|m| UP_MARKS[..15].contains(m)));
        assert!(marks.iter().any(|m| ('\u{0323}'..='\u{0333}').contains(m)));
    }

    // ============================================================================
    // corrupt_cycled tests
    // ============================================================================

    #[test]
    fn test_corrupt_cycled_rotates_directions() {
        let out = corrupt_cycled("a", 3, &mut rng());
        let marks: Vec<char> = out.chars().skip(1).collect();
        assert!(UP_MARKS.contains(&marks[0]));
        assert!(MIDDLE_MARKS.contains(&marks[1]));
        assert!(DOWN_MARKS.contains(&marks[2]));
    }

    #[test]
    fn test_strip_marks() {
        assert_eq!(strip_marks("h\u{0301}\u{0334}i\u{0323}"), "hi");
    }
}
