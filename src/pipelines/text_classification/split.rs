use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

use crate::{Error, Result};

/// Shuffle `records` with a seeded RNG and split them into `(train, test)`.
///
/// The test set receives `ceil(test_fraction * len)` records. The same seed and input order
/// always yield the same partition.
pub fn split<T>(records: Vec<T>, test_fraction: f64, seed: u64) -> Result<(Vec<T>, Vec<T>)> {
    if !(test_fraction > 0.0 && test_fraction < 1.0) {
        return Err(Error::InvalidFraction(test_fraction));
    }

    let total = records.len();
    let n_test = ((total as f64) * test_fraction).ceil() as usize;

    let mut rng = StdRng::seed_from_u64(seed);
    let mut shuffled = records;
    shuffled.shuffle(&mut rng);

    let train = shuffled.split_off(n_test.min(total));
    let test = shuffled;

    log::debug!(
        "Dataset split: {} training, {} test",
        train.len(),
        test.len()
    );

    Ok((train, test))
}
