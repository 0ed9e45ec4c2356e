//! Source of the random choices made while sequencing questions.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Chooses one of `n` candidates.
///
/// Sessions only ever call [`Picker::pick`] with `n > 0`. Implementations must return an
/// index below `n`.
pub trait Picker {
    /// Return an index in `0..n`.
    fn pick(&mut self, n: usize) -> usize;
}

impl<P: Picker + ?Sized> Picker for &mut P {
    fn pick(&mut self, n: usize) -> usize {
        (**self).pick(n)
    }
}

/// Uniform picker backed by a [`rand`] generator.
#[derive(Debug, Clone)]
pub struct RngPicker<R> {
    /// Underlying generator.
    rng: R,
}

impl<R: Rng> RngPicker<R> {
    /// Wrap an existing generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngPicker<StdRng> {
    /// Deterministic picker for reproducible sessions.
    ///
    /// # Examples
    /// ```
    /// use beamx::{Picker, RngPicker};
    ///
    /// let mut a = RngPicker::seeded(7);
    /// let mut b = RngPicker::seeded(7);
    /// assert_eq!(a.pick(10), b.pick(10));
    /// ```
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Picker seeded from operating system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> Picker for RngPicker<R> {
    fn pick(&mut self, n: usize) -> usize {
        self.rng.gen_range(0..n)
    }
}
