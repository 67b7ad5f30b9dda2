//! Seeded pseudo-random picks over small sequences.
//!
//! A [`Sampler`] owns one stream. Built with [`Sampler::from_seed`], the whole
//! sequence of draws is a pure function of the seed string, which is what makes
//! share links reproducible.
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sha2::{Digest, Sha256};

pub struct Sampler<R: Rng> {
    rng: R,
}

impl Sampler<StdRng> {
    /// Stream keyed by the SHA-256 digest of `seed`.
    pub fn from_seed(seed: &str) -> Self {
        let digest: [u8; 32] = Sha256::digest(seed.as_bytes()).into();
        Self { rng: StdRng::from_seed(digest) }
    }
}

impl<R: Rng> Sampler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Uniform integer in `[min, max]`, inclusive on both ends. Consumes one draw.
    pub fn rand_int(&mut self, min: usize, max: usize) -> usize {
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        self.rng.gen_range(lo..=hi)
    }

    /// One element chosen uniformly, or `None` for an empty slice.
    pub fn pick_one<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let index = self.rand_int(0, items.len() - 1);
        items.get(index)
    }

    /// `count` distinct elements in the order they were accepted.
    ///
    /// Rejection sampling: pick uniformly, retry while the candidate was already
    /// taken. Quadratic in the worst case, fine for the handful of dishes a
    /// dataset holds. Returns `None` for an empty slice. `count` is clamped to the
    /// number of distinct values so equal elements cannot stall the loop.
    pub fn sample<T: Clone + PartialEq>(&mut self, items: &[T], count: usize) -> Option<Vec<T>> {
        if items.is_empty() {
            return None;
        }
        let wanted = count.min(distinct_count(items));
        let mut picked: Vec<T> = Vec::with_capacity(wanted);
        while picked.len() < wanted {
            let Some(candidate) = self.pick_one(items) else {
                break;
            };
            if !picked.contains(candidate) {
                picked.push(candidate.clone());
            }
        }
        Some(picked)
    }
}

fn distinct_count<T: PartialEq>(items: &[T]) -> usize {
    items.iter().enumerate().filter(|(i, item)| !items[..*i].contains(item)).count()
}
