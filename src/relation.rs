use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use indicatif::ProgressBar;

use crate::{sampler::PairSelection, symbols::SymbolBase, GenError};

/**
 * Relation file format (UTF-8 text)
 *
 * - line 1: the symbol base, space separated
 * - one line per pair: "<symbol_i> <symbol_j>"
 *
 * Every line ends with '\n'. Pairs appear in ascending flat-index order.
 */

pub const WRITE_BUFFER_SIZE: usize = 16 * 1024;

/// Lines written between progress bar updates.
const PROGRESS_BATCH: u64 = 1 << 16;

/// Writes a relation file at `path`, replacing any existing file.
///
/// On error the file is left partially written and must be discarded.
pub fn write_relation(
    path: &Path,
    base: &SymbolBase,
    selection: &PairSelection,
    progress: &ProgressBar) -> Result<(), GenError>
{
    let file = File::create(path)?;
    relation_to_writer(file, base, selection, progress)
}

pub fn relation_to_writer(
    writer: impl Write,
    base: &SymbolBase,
    selection: &PairSelection,
    progress: &ProgressBar) -> Result<(), GenError>
{
    if base.len() != selection.n() {
        return Err(GenError::invalid(format!(
            "selection over {} symbols does not match base of {}",
            selection.n(), base.len()
        )));
    }

    // BufWriter flushes on drop, so early returns still push out what was
    // buffered. The explicit flush below surfaces errors on success.
    let mut writer = BufWriter::with_capacity(WRITE_BUFFER_SIZE, writer);

    writeln!(writer, "{}", base.header())?;

    progress.set_length(selection.len());
    let mut batch = 0;
    for (i, j) in selection.pairs() {
        writeln!(writer, "{} {}", &base[i], &base[j])?;

        batch += 1;
        if batch == PROGRESS_BATCH {
            progress.inc(batch);
            batch = 0;
        }
    }
    progress.inc(batch);

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaChaRng;

    use super::*;
    use crate::{sampler::{sample_pairs, SamplingStrategy}, symbols::build_base};

    fn render(n: usize, density: f64, seed: u64) -> String {
        let rng = &mut ChaChaRng::seed_from_u64(seed);
        let base = build_base(n, rng).unwrap();
        let selection = sample_pairs(n, density, SamplingStrategy::Sparse, rng).unwrap();

        let mut out: Vec<u8> = Vec::new();
        relation_to_writer(&mut out, &base, &selection, &ProgressBar::hidden()).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_scenario_five() {
        let text = render(5, 0.2, 1);
        assert!(text.ends_with('\n'));
        assert_eq!(text.lines().count(), 6);
    }

    #[test]
    fn test_header_only() {
        let text = render(8, 0.0, 2);
        assert_eq!(text.lines().count(), 1);
        assert_eq!(text.lines().next().unwrap().split(' ').count(), 8);
    }

    #[test]
    fn test_full_relation() {
        let text = render(6, 1.0, 3);
        let mut lines = text.lines();
        let header: Vec<&str> = lines.next().unwrap().split(' ').collect();
        let pairs: Vec<&str> = lines.collect();
        assert_eq!(pairs.len(), 36);

        let expected: Vec<String> = header.iter()
            .flat_map(|a| header.iter().map(move |b| format!("{} {}", a, b)))
            .collect();
        assert_eq!(pairs, expected);
    }

    #[test]
    fn test_mismatched_base() {
        let rng = &mut ChaChaRng::seed_from_u64(4);
        let base = build_base(3, rng).unwrap();
        let selection = sample_pairs(4, 0.5, SamplingStrategy::Sparse, rng).unwrap();
        let result = relation_to_writer(Vec::new(), &base, &selection, &ProgressBar::hidden());
        assert!(matches!(result, Err(GenError::InvalidArgument(_))));
    }

    #[test]
    fn test_unwritable_path() {
        let rng = &mut ChaChaRng::seed_from_u64(5);
        let base = build_base(2, rng).unwrap();
        let selection = sample_pairs(2, 0.5, SamplingStrategy::Sparse, rng).unwrap();
        let path = Path::new("/nonexistent-relgen-dir/relation.txt");
        let result = write_relation(path, &base, &selection, &ProgressBar::hidden());
        assert!(matches!(result, Err(GenError::Io(_))));
    }
}
