// ─────────────────────────────────────────────────────────────────────
// SCPN De-excitation — Random Sources
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Uniform random sources consumed by the decay loop.
//!
//! Every stochastic decision (channel choice, kinetic energy, direction,
//! break-up partition) pulls one value at a time through `draw`, which
//! enforces the [0, 1) contract.

use deex_types::error::{DeexError, DeexResult};
use rand::Rng;

/// Supplier of uniform variates in [0, 1).
pub trait RandomSource {
    /// Next variate, or `None` when the source is exhausted.
    fn next_uniform(&mut self) -> Option<f64>;
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn next_uniform(&mut self) -> Option<f64> {
        (**self).next_uniform()
    }
}

/// Adapter for any `rand::Rng`.
#[derive(Debug, Clone)]
pub struct RngSource<R: Rng> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        RngSource { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_uniform(&mut self) -> Option<f64> {
        Some(self.rng.gen::<f64>())
    }
}

/// Replays a fixed sequence of draws, then reports exhaustion.
#[derive(Debug, Clone, Default)]
pub struct SequenceSource {
    values: Vec<f64>,
    cursor: usize,
}

impl SequenceSource {
    pub fn new(values: Vec<f64>) -> Self {
        SequenceSource { values, cursor: 0 }
    }

    /// Number of values handed out so far.
    pub fn consumed(&self) -> usize {
        self.cursor
    }

    pub fn remaining(&self) -> usize {
        self.values.len() - self.cursor
    }
}

impl RandomSource for SequenceSource {
    fn next_uniform(&mut self) -> Option<f64> {
        let v = self.values.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(v)
    }
}

/// One checked draw in [0, 1).
pub fn draw(source: &mut dyn RandomSource) -> DeexResult<f64> {
    match source.next_uniform() {
        Some(u) if (0.0..1.0).contains(&u) => Ok(u),
        Some(u) => Err(DeexError::RandomSource(format!(
            "draw {u} outside [0, 1)"
        ))),
        None => Err(DeexError::RandomSource(
            "random source exhausted".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_sequence_replays_then_exhausts() {
        let mut src = SequenceSource::new(vec![0.25, 0.5]);
        assert_eq!(draw(&mut src).unwrap(), 0.25);
        assert_eq!(draw(&mut src).unwrap(), 0.5);
        assert_eq!(src.consumed(), 2);
        assert_eq!(src.remaining(), 0);
        assert!(matches!(draw(&mut src), Err(DeexError::RandomSource(_))));
    }

    #[test]
    fn test_out_of_range_draw_is_fatal() {
        for bad in [1.0, -0.1, f64::NAN, 2.5] {
            let mut src = SequenceSource::new(vec![bad]);
            assert!(matches!(draw(&mut src), Err(DeexError::RandomSource(_))));
        }
    }

    #[test]
    fn test_rng_source_in_unit_interval() {
        let mut src = RngSource::new(StdRng::seed_from_u64(7));
        for _ in 0..10_000 {
            let u = draw(&mut src).unwrap();
            assert!((0.0..1.0).contains(&u));
        }
    }

    #[test]
    fn test_rng_source_reproducible() {
        let mut a = RngSource::new(StdRng::seed_from_u64(42));
        let mut b = RngSource::new(StdRng::seed_from_u64(42));
        for _ in 0..100 {
            assert_eq!(a.next_uniform(), b.next_uniform());
        }
    }

    #[test]
    fn test_mutable_reference_forwards() {
        let mut inner = SequenceSource::new(vec![0.25, 0.75]);
        {
            let mut by_ref = &mut inner;
            assert_eq!(draw(&mut by_ref).unwrap(), 0.25);
        }
        assert_eq!(inner.consumed(), 1);
        assert_eq!(draw(&mut inner).unwrap(), 0.75);
    }
}
