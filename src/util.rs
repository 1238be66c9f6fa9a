// Small shared utilities

use std::collections::hash_map::RandomState;
use std::hash::{BuildHasher, Hasher};

/// Minimal xorshift64* PRNG for demo animations.
///
/// Demos only need visual variety, not statistical quality. Seeding uses
/// `RandomState` to get a random value without adding a dependency.
pub struct Rng(u64);

impl Rng {
    pub fn seeded() -> Self {
        let seed = RandomState::new().build_hasher().finish();
        // xorshift must not start at zero
        Self(seed | 1)
    }

    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.0 = x;
        x.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }

    /// Uniform value in `[0, bound)`. Bound must be non-zero.
    pub fn below(&mut self, bound: u64) -> u64 {
        self.next_u64() % bound
    }

    /// Uniform float in `[0, 1)`.
    pub fn frac(&mut self) -> f32 {
        (self.next_u64() >> 40) as f32 / (1u64 << 24) as f32
    }
}

/// Lowercase a display name into a file-name-safe slug.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
        } else if !slug.ends_with('-') && !slug.is_empty() {
            slug.push('-');
        }
    }
    slug.trim_end_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rng_advances_and_stays_in_bounds() {
        let mut rng = Rng::seeded();
        for _ in 0..100 {
            assert!(rng.below(7) < 7);
            let f = rng.frac();
            assert!((0.0..1.0).contains(&f));
        }
    }

    #[test]
    fn slugify_collapses_separators() {
        assert_eq!(slugify("Game of Life"), "game-of-life");
        assert_eq!(slugify("  Starfield!  "), "starfield");
        assert_eq!(slugify("a--b"), "a-b");
    }
}
