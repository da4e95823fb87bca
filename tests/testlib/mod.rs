pub mod properties;

use std::fmt;

use quickcheck::Arbitrary;
use relgen::sampler::SamplingStrategy;

// Arbitrary Base Size //
#[derive(Debug, Clone, Copy)]
pub struct BaseSize(pub usize);

impl Arbitrary for BaseSize {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        Self(usize::arbitrary(g) % 60 + 1)
    }
}

// Arbitrary Density //
// Multiples of 1/1000 so both sides of the 0.5 switch and the exact
// boundaries 0 and 1 come up.
#[derive(Debug, Clone, Copy)]
pub struct Density(pub f64);

impl Arbitrary for Density {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let permille = u16::arbitrary(g) % 1001;
        Self(permille as f64 / 1000.0)
    }
}

// Arbitrary Sampling Strategy //
#[derive(Clone, Copy)]
pub struct Strategy(&'static str, pub SamplingStrategy);

impl fmt::Debug for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl Arbitrary for Strategy {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        *g.choose(&[
            Strategy("sparse", SamplingStrategy::Sparse),
            Strategy("sequential", SamplingStrategy::Sequential),
        ])
        .unwrap()
    }
}
