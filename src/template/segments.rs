use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::foundation::core::{VARIANT_COUNT, Variant};
use crate::foundation::error::{BitSpriteError, BitSpriteResult};

/// How the segment permutations are seeded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedMode {
    /// Fresh OS entropy on every run.
    Entropy,
    /// Reproducible permutations from a fixed seed.
    Fixed(u64),
}

impl SeedMode {
    /// Seed used when randomness is switched off.
    pub const DETERMINISTIC_SEED: u64 = 1;

    /// Reproducible mode with [`SeedMode::DETERMINISTIC_SEED`].
    pub fn deterministic() -> Self {
        Self::Fixed(Self::DETERMINISTIC_SEED)
    }

    fn rng(self) -> StdRng {
        match self {
            Self::Entropy => StdRng::from_entropy(),
            Self::Fixed(seed) => StdRng::seed_from_u64(seed),
        }
    }
}

/// One permutation of `0..256` per delimiter.
///
/// With no delimiters the set is empty and every variant resolves to its own index.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SegmentPermutations {
    perms: Vec<[u8; VARIANT_COUNT]>,
}

impl SegmentPermutations {
    /// Draw `delimiter_count` independent permutations from a single generator.
    pub fn generate(delimiter_count: usize, seed: SeedMode) -> Self {
        let mut rng = seed.rng();
        let perms = (0..delimiter_count)
            .map(|_| {
                let mut perm = identity();
                perm.shuffle(&mut rng);
                perm
            })
            .collect();
        Self { perms }
    }

    /// Wrap caller-provided permutations, checking each is a permutation of `0..256`.
    pub fn from_perms(perms: Vec<[u8; VARIANT_COUNT]>) -> BitSpriteResult<Self> {
        for (segment, perm) in perms.iter().enumerate() {
            let mut seen = [false; VARIANT_COUNT];
            for &v in perm {
                if std::mem::replace(&mut seen[usize::from(v)], true) {
                    return Err(BitSpriteError::validation(format!(
                        "segment {segment} permutation repeats value {v}"
                    )));
                }
            }
        }
        Ok(Self { perms })
    }

    /// Number of permutations (equal to the delimiter count).
    pub fn len(&self) -> usize {
        self.perms.len()
    }

    /// `true` when the template has no delimiters.
    pub fn is_empty(&self) -> bool {
        self.perms.is_empty()
    }

    /// Resolution number of `variant` inside `segment`.
    pub fn resolution(&self, segment: usize, variant: Variant) -> u8 {
        self.perms[segment][variant.index()]
    }

    /// Resolution number of every color segment for `variant`.
    pub fn segment_resolutions(&self, variant: Variant) -> Vec<u8> {
        if self.perms.is_empty() {
            return vec![variant.0];
        }
        self.perms.iter().map(|p| p[variant.index()]).collect()
    }
}

fn identity() -> [u8; VARIANT_COUNT] {
    std::array::from_fn(|i| i as u8)
}

#[cfg(test)]
#[path = "../../tests/unit/template/segments.rs"]
mod tests;
