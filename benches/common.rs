//! common routines to be included by benches

use digitring::{Digit, DigitRing};


/// Generate rings of random digits from a fixed seed
pub struct RandomRings {
    rng: oorandom::Rand32,
    base: u32,
}

impl RandomRings {
    pub fn new_with_seed(base: u32, seed: u64) -> Self {
        Self {
            rng: oorandom::Rand32::new(seed),
            base: base,
        }
    }

    pub fn next_digit(&mut self) -> Digit {
        self.rng.rand_range(0..self.base)
    }

    /// Ring of exactly `len` random digits
    pub fn next_ring(&mut self, len: usize) -> DigitRing {
        let digits: Vec<Digit> = (0..len).map(|_| self.next_digit()).collect();
        DigitRing::from_digits(self.base, digits).unwrap()
    }

    /// Vector of `count` rings with lengths in `[1, max_len]`
    pub fn rings(&mut self, count: usize, max_len: usize) -> Vec<DigitRing> {
        (0..count)
            .map(|_| {
                let len = 1 + self.rng.rand_range(0..max_len as u32) as usize;
                self.next_ring(len)
            })
            .collect()
    }
}
