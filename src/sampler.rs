use std::fmt;

use colored::Colorize;
use rand::{distributions::Uniform, seq::SliceRandom, Rng};

use crate::{
    format::{format_count, format_density},
    GenError,
};

/// Above this base size the sparse sampler is always used.
pub const FAST_THRESHOLD: usize = 10_000;

/// Selections that expand to more output lines than this get a warning.
const EXPENSIVE_OUTPUT: u64 = 10_000_000;

/// How the sampled side of a selection is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SamplingStrategy {
    /// Oversample, sort and dedup. O(k log k) in the sampled count.
    Sparse,
    /// One pass over the whole domain (selection sampling). O(n²) time,
    /// O(k) memory. Only sensible for small bases.
    Sequential,
}

impl SamplingStrategy {
    pub fn auto(n: usize, fast: bool) -> Self {
        if fast || n > FAST_THRESHOLD {
            SamplingStrategy::Sparse
        }
        else {
            SamplingStrategy::Sequential
        }
    }
}

/// Which side of the density spectrum was sampled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleMode {
    /// The stored indices are the pairs.
    Direct,
    /// The stored indices are the pairs left out.
    Complement,
}

impl fmt::Display for SampleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleMode::Direct => f.write_str("direct"),
            SampleMode::Complement => f.write_str("complement"),
        }
    }
}

/// Set of flat pair indices in `[0, n²)`.
///
/// Index `idx` stands for the ordered pair `(idx / n, idx % n)`. In
/// complement mode only the excluded indices are held, so memory stays
/// proportional to the smaller side of the density spectrum.
#[derive(Debug, Clone, PartialEq)]
pub struct PairSelection {
    n: usize,
    mode: SampleMode,
    // Strictly increasing.
    indices: Vec<u64>,
}

impl PairSelection {
    pub fn n(&self) -> usize {
        self.n
    }

    pub fn mode(&self) -> SampleMode {
        self.mode
    }

    /// Size of the full pair space, `n²`.
    pub fn domain(&self) -> u64 {
        (self.n as u64) * (self.n as u64)
    }

    /// Number of selected pairs.
    pub fn len(&self) -> u64 {
        match self.mode {
            SampleMode::Direct => self.indices.len() as u64,
            SampleMode::Complement => self.domain() - self.indices.len() as u64,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The indices actually drawn: the pairs in direct mode, the excluded
    /// pairs in complement mode.
    pub fn sampled(&self) -> &[u64] {
        &self.indices
    }

    pub fn contains(&self, idx: u64) -> bool {
        if idx >= self.domain() {
            return false;
        }
        let sampled = self.indices.binary_search(&idx).is_ok();
        match self.mode {
            SampleMode::Direct => sampled,
            SampleMode::Complement => !sampled,
        }
    }

    /// Selected indices in ascending order.
    pub fn iter(&self) -> SelectionIter<'_> {
        SelectionIter {
            selection: self,
            next: 0,
            cursor: 0,
        }
    }

    /// Selected pairs `(i, j)` in ascending index order.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.n as u64;
        self.iter().map(move |idx| ((idx / n) as usize, (idx % n) as usize))
    }
}

pub struct SelectionIter<'a> {
    selection: &'a PairSelection,
    next: u64,
    cursor: usize,
}

impl<'a> Iterator for SelectionIter<'a> {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let indices = &self.selection.indices;
        match self.selection.mode {
            SampleMode::Direct => {
                let idx = indices.get(self.cursor).copied();
                self.cursor += 1;
                idx
            },
            SampleMode::Complement => {
                let domain = self.selection.domain();
                while self.next < domain {
                    let idx = self.next;
                    self.next += 1;
                    if indices.get(self.cursor) == Some(&idx) {
                        self.cursor += 1;
                    }
                    else {
                        return Some(idx);
                    }
                }
                None
            },
        }
    }
}

/// Number of pairs a density selects out of `domain`. Ties round to even;
/// complement mode derives its excluded count from this value.
pub fn pair_count(domain: u64, density: f64) -> u64 {
    ((domain as f64 * density).round_ties_even() as u64).min(domain)
}

pub fn validate_density(density: f64) -> Result<(), GenError> {
    if !(0.0..=1.0).contains(&density) {
        return Err(GenError::invalid(format!(
            "density {} must be in the range [0, 1]",
            density
        )));
    }
    Ok(())
}

fn domain_size(n: usize) -> Result<u64, GenError> {
    (n as u64).checked_mul(n as u64)
        .ok_or_else(|| GenError::invalid(format!("base size {} is too large", n)))
}

/// Samples `round(n² · density)` distinct pairs uniformly without replacement.
///
/// Densities up to one half draw the pairs directly. Above that the excluded
/// pairs are drawn instead and the selection is their complement, so sampling
/// never costs more than the smaller side. Emitting a dense selection is still
/// O(n²), which is unavoidable output volume.
pub fn sample_pairs(
    n: usize,
    density: f64,
    strategy: SamplingStrategy,
    rng: &mut impl Rng) -> Result<PairSelection, GenError>
{
    validate_density(density)?;
    let domain = domain_size(n)?;
    let count = pair_count(domain, density);

    let mode = if density <= 0.5 {
        SampleMode::Direct
    }
    else {
        SampleMode::Complement
    };

    report_estimate(count, domain, density, mode);

    let sampled_count = match mode {
        SampleMode::Direct => count,
        SampleMode::Complement => domain - count,
    };
    let indices = match strategy {
        SamplingStrategy::Sparse => distinct_indices(sampled_count, domain, rng),
        SamplingStrategy::Sequential => sequential_indices(sampled_count, domain, rng),
    };

    Ok(PairSelection { n, mode, indices })
}

/// Returns `count` distinct values from `0..domain`, sorted. Values are
/// uniformly distributed.
fn distinct_indices(count: u64, domain: u64, rng: &mut impl Rng) -> Vec<u64> {
    if count == 0 {
        return Vec::new();
    }
    let count = count as usize;
    let distribution = Uniform::from(0..domain);

    let mut items: Vec<u64> = Vec::new();
    while items.len() < count {
        let need = count - items.len();
        items.extend((0..need * 2).map(|_| rng.sample(distribution)));
        items.sort_unstable();
        items.dedup();
    }
    // Truncate a shuffled run, not the sorted one.
    items.shuffle(rng);
    items.truncate(count);
    items.sort_unstable();
    items
}

/// Selection sampling: each index is kept with probability
/// `still_needed / still_available`, which yields exactly `count` values.
fn sequential_indices(count: u64, domain: u64, rng: &mut impl Rng) -> Vec<u64> {
    let mut items = Vec::with_capacity(count as usize);
    let mut needed = count;

    for idx in 0..domain {
        if needed == 0 {
            break;
        }
        if rng.gen_range(0..domain - idx) < needed {
            items.push(idx);
            needed -= 1;
        }
    }
    items
}

fn report_estimate(count: u64, domain: u64, density: f64, mode: SampleMode) {
    println!(
        "{}: ~{} of {} pairs ({}, {} mode)",
        "SAMPLING".green().bold(),
        format_count(count),
        format_count(domain),
        format_density(density),
        mode
    );
    if count > EXPENSIVE_OUTPUT {
        println!("{}", format!(
            "warning: writing {} pairs will take a while",
            format_count(count)).yellow());
    }
}
